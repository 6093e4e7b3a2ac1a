//! Page-number arithmetic for the paginated listing.

use super::state::ViewState;
use crate::constants::QUESTIONS_PER_PAGE;

/// A page number offered to the user, flagged when it is the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub number: u32,
    pub active: bool,
}

/// Number of pages needed for `total` questions.
pub fn max_page(total: u64) -> u32 {
    u32::try_from(total.div_ceil(QUESTIONS_PER_PAGE)).unwrap_or(u32::MAX)
}

/// Lazily yields `1..=max_page` as [`PageLink`]s.
///
/// Empty unless the state is in paginated mode, whatever the total.
pub fn page_links(state: &ViewState) -> PageLinks {
    let last = if state.mode().shows_pagination() {
        max_page(state.total_questions())
    } else {
        0
    };

    PageLinks {
        next: 1,
        last,
        current: state.page(),
    }
}

/// Whether `page` is one of the links [`page_links`] would yield.
pub fn is_selectable(state: &ViewState, page: u32) -> bool {
    state.mode().shows_pagination() && page >= 1 && page <= max_page(state.total_questions())
}

/// Iterator returned by [`page_links`].
#[derive(Debug, Clone)]
pub struct PageLinks {
    next: u32,
    last: u32,
    current: u32,
}

impl Iterator for PageLinks {
    type Item = PageLink;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == 0 || self.next > self.last {
            return None;
        }
        let number = self.next;
        // Wraps to 0 only after u32::MAX, which then terminates the iterator.
        self.next = self.next.wrapping_add(1);
        Some(PageLink {
            number,
            active: number == self.current,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next == 0 || self.next > self.last {
            0
        } else {
            (self.last - self.next + 1) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PageLinks {}

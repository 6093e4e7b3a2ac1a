//! Page-number bar under the question list.
//!
//! Links come from [`page_links`](crate::view::page_links) and are walked
//! afresh on every frame. In category and search mode the iterator is empty
//! and the bar only shows a summary of the result set.

use crate::ui::core::{actions::Action, Component};
use crate::view::{DisplayMode, PageLinks, ViewState};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct PaginationBar {
    links: PageLinks,
    mode: DisplayMode,
    shown: usize,
    total: u64,
    /// Screen area of each link drawn in the last frame.
    link_areas: Vec<(u32, Rect)>,
    mouse_enabled: bool,
}

impl Default for PaginationBar {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationBar {
    pub fn new() -> Self {
        Self::from_state(&ViewState::default())
    }

    fn from_state(state: &ViewState) -> Self {
        Self {
            links: crate::view::page_links(state),
            mode: state.mode(),
            shown: state.questions().len(),
            total: state.total_questions(),
            link_areas: Vec::new(),
            mouse_enabled: false,
        }
    }

    pub fn set_mouse_enabled(&mut self, enabled: bool) {
        self.mouse_enabled = enabled;
    }

    pub fn update_data(&mut self, state: &ViewState) {
        let mouse_enabled = self.mouse_enabled;
        *self = Self::from_state(state);
        self.mouse_enabled = mouse_enabled;
    }

    /// Page numbers drawn in the last frame, in order.
    pub fn visible_pages(&self) -> Vec<u32> {
        self.link_areas.iter().map(|(page, _)| *page).collect()
    }

    fn has_link(&self, page: u32) -> bool {
        self.links.clone().any(|link| link.number == page)
    }

    fn summary(&self) -> String {
        match self.mode {
            DisplayMode::Uninitialized => String::new(),
            DisplayMode::Paginated => format!("{} questions", self.total),
            DisplayMode::Category | DisplayMode::Search => {
                format!("{}: {} of {} questions", self.mode.label(), self.shown, self.total)
            }
        }
    }

    /// First page to draw so the active link stays on screen.
    fn first_visible(&self, width: u16) -> u32 {
        let count = self.links.len();
        if count == 0 {
            return 1;
        }
        let widest = count.to_string().len() + 3;
        let slots = (usize::from(width) / widest).max(1);
        if count <= slots {
            return 1;
        }
        let active = self
            .links
            .clone()
            .find(|link| link.active)
            .map_or(1, |link| link.number as usize);
        let last_start = count - slots + 1;
        let start = active.saturating_sub(slots / 2).clamp(1, last_start);
        u32::try_from(start).unwrap_or(1)
    }
}

impl Component for PaginationBar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('[') => Action::PreviousPage,
            KeyCode::Right | KeyCode::Char(']') => Action::NextPage,
            KeyCode::Char(c @ '1'..='9') => {
                let page = c.to_digit(10).unwrap_or(1);
                if self.has_link(page) {
                    Action::SelectPage(page)
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let position = Position::new(mouse.column, mouse.row);
        self.link_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map_or(Action::None, |(page, _)| Action::SelectPage(*page))
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Pages ")
            .title_bottom(Line::from(self.summary()).right_aligned())
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        self.link_areas.clear();
        if inner.height == 0 {
            return;
        }

        let first = self.first_visible(inner.width);
        let mut spans = Vec::new();
        let mut x = inner.x;
        let right_edge = inner.x + inner.width;

        for link in self.links.clone().filter(|link| link.number >= first) {
            let label = format!(" {} ", link.number);
            let width = u16::try_from(label.len()).unwrap_or(u16::MAX);
            if x.saturating_add(width) > right_edge {
                break;
            }

            let style = if link.active {
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            self.link_areas.push((link.number, Rect::new(x, inner.y, width, 1)));
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
            x = x.saturating_add(width + 1);
        }

        f.render_widget(Paragraph::new(Line::from(spans)), inner);
    }
}

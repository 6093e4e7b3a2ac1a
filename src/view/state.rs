//! View state and display mode.

use crate::api::{Categories, CategoryId, CategoryQuestions, CurrentCategory, Question, QuestionPage, SearchResults};

/// Which fetch produced the question set currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Uninitialized,
    Paginated,
    Category,
    Search,
}

impl DisplayMode {
    /// Page links are only offered for the plain paginated listing.
    pub fn shows_pagination(self) -> bool {
        matches!(self, DisplayMode::Paginated)
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Uninitialized => "Loading",
            DisplayMode::Paginated => "All questions",
            DisplayMode::Category => "Category",
            DisplayMode::Search => "Search results",
        }
    }
}

/// In-memory snapshot of what the question view renders.
///
/// The mode is stored next to the data it describes, so a successful fetch
/// replaces both in one step and readers never observe one without the other.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    questions: Vec<Question>,
    page: u32,
    total_questions: u64,
    categories: Categories,
    current_category: Option<CurrentCategory>,
    mode: DisplayMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            page: 1,
            total_questions: 0,
            categories: Categories::new(),
            current_category: None,
            mode: DisplayMode::Uninitialized,
        }
    }
}

impl ViewState {
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// 1-based page number. Only meaningful in [`DisplayMode::Paginated`].
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_questions(&self) -> u64 {
        self.total_questions
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    pub fn current_category(&self) -> Option<&CurrentCategory> {
        self.current_category.as_ref()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Name of a category according to the last plain listing.
    pub fn category_name(&self, id: CategoryId) -> Option<&str> {
        self.categories.get(&id).map(String::as_str)
    }

    /// Human-readable description of the current category, if any.
    pub fn current_category_label(&self) -> Option<String> {
        self.current_category.as_ref().map(|current| match current {
            CurrentCategory::Id(id) => self
                .category_name(*id)
                .map(str::to_string)
                .unwrap_or_else(|| current.to_string()),
            CurrentCategory::Label(label) => label.clone(),
        })
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub(crate) fn apply_page(&mut self, page: QuestionPage) {
        self.questions = page.questions;
        self.total_questions = page.total_questions;
        self.categories = page.categories;
        self.current_category = page.current_category;
        self.mode = DisplayMode::Paginated;
    }

    pub(crate) fn apply_category(&mut self, result: CategoryQuestions) {
        self.questions = result.questions;
        self.total_questions = result.total_questions;
        self.current_category = result.current_category;
        self.mode = DisplayMode::Category;
    }

    pub(crate) fn apply_search(&mut self, result: SearchResults) {
        self.questions = result.questions;
        self.total_questions = result.total_questions;
        self.current_category = result.current_category;
        self.mode = DisplayMode::Search;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, category: CategoryId) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
            category,
            difficulty: 1,
        }
    }

    fn page_with_categories() -> QuestionPage {
        let mut categories = Categories::new();
        categories.insert(1, "Science".to_string());
        categories.insert(2, "Art".to_string());
        QuestionPage {
            success: true,
            questions: vec![question(1, 1), question(2, 2)],
            total_questions: 12,
            categories,
            current_category: None,
        }
    }

    #[test]
    fn test_default_state() {
        let state = ViewState::default();
        assert_eq!(state.page(), 1);
        assert_eq!(state.mode(), DisplayMode::Uninitialized);
        assert!(state.questions().is_empty());
        assert!(state.categories().is_empty());
    }

    #[test]
    fn test_category_result_keeps_categories() {
        let mut state = ViewState::default();
        state.apply_page(page_with_categories());
        state.set_page(2);

        state.apply_category(CategoryQuestions {
            success: true,
            questions: vec![question(7, 2)],
            total_questions: 1,
            current_category: Some(CurrentCategory::Id(2)),
        });

        assert_eq!(state.mode(), DisplayMode::Category);
        assert_eq!(state.categories().len(), 2);
        assert_eq!(state.page(), 2);
        assert_eq!(state.current_category_label().as_deref(), Some("Art"));
    }

    #[test]
    fn test_set_page_never_goes_below_one() {
        let mut state = ViewState::default();
        state.set_page(0);
        assert_eq!(state.page(), 1);
    }
}

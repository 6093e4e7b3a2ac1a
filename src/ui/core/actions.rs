use crate::api::{ApiError, CategoryId, NewQuestion, QuestionId};
use crate::view::{Response, RequestToken};

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextQuestion,
    PreviousQuestion,
    NextCategory,
    PreviousCategory,

    // Question view operations
    Refresh,
    SelectPage(u32),
    NextPage,
    PreviousPage,
    SelectCategory(CategoryId),
    SubmitSearch(String),
    RequestDelete(QuestionId),
    ConfirmDelete(QuestionId),
    CreateQuestion(NewQuestion),

    // Results from background requests
    RequestCompleted {
        token: RequestToken,
        outcome: Result<Response, ApiError>,
    },

    // UI operations
    ToggleAnswers,
    CycleIconTheme,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    DeleteConfirmation {
        question_id: QuestionId,
        preview: String,
        message: &'static str,
    },
    QuestionCreation {
        default_category: Option<CategoryId>,
    },
    Search,
    Error(String),
    Info(String),
    Help,
    Logs,
}

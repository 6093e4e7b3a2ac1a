//! Constants used throughout the application
//!
//! This module centralizes user-facing strings, the page size and layout
//! bounds so they stay consistent across the view core and the terminal UI.

/// Questions per page served by the backend
pub const QUESTIONS_PER_PAGE: u64 = 10;

// Alerts and prompts
pub const ERROR_REQUEST_FAILED: &str = "Unable to load questions. Please try your request again";
pub const CONFIRM_DELETE_QUESTION: &str = "Are you sure you want to delete the question?\n\n\
Note: the list is reloaded from the server once the question is deleted, \
so the page may look different afterwards.";

pub const INFO_QUESTION_CREATED: &str = "Question added. The list has been reloaded from the server.";

// Status messages
pub const STATUS_LOADING: &str = "Loading questions...";
pub const STATUS_HINTS: &str = "/: search • ←/→: page • Enter: category • d: delete • a: add • ?: help • q: quit";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc', 'G' or 'q' to close";
pub const NO_QUESTIONS: &str = "No questions to show";

// API defaults
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const API_URL_ENV: &str = "TRIVIALIST_API_URL";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 300;

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;

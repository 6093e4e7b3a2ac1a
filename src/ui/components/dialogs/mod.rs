//! Dialog rendering and dialog-local state

pub mod common;
pub mod question_dialogs;
pub mod question_form;
pub mod system_dialogs;

pub use common::{ScrollState, TextInput};
pub use question_form::{FormField, QuestionForm};

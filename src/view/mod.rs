//! Terminal-independent core of the question view.
//!
//! - [`state`] - view state and display mode
//! - [`pagination`] - page-number arithmetic
//! - [`request`] - requests, responses and per-type sequencing
//! - [`question_view`] - the controller that ties them together
//! - [`dispatcher`] - sequential execution with user confirmation and alerts

pub mod dispatcher;
pub mod pagination;
pub mod question_view;
pub mod request;
pub mod state;

pub use dispatcher::{RequestDispatcher, UserPrompt};
pub use pagination::{is_selectable, max_page, page_links, PageLink, PageLinks};
pub use question_view::{Completion, DeleteConfirmation, Notification, QuestionView};
pub use request::{Request, RequestKind, RequestSequencer, RequestToken, Response, Ticket};
pub use state::{DisplayMode, ViewState};

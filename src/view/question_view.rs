//! The question view controller.
//!
//! [`QuestionView`] turns user intents into [`Ticket`]s and folds responses
//! back into [`ViewState`]. It performs no I/O itself, so the same controller
//! drives the terminal UI (responses arrive from background tasks) and the
//! sequential [`RequestDispatcher`](super::RequestDispatcher).

use super::pagination;
use super::request::{Request, RequestSequencer, RequestToken, Response, Ticket};
use super::state::ViewState;
use crate::api::{ApiError, CategoryId, InvalidQuestion, NewQuestion, QuestionId};
use crate::constants::{CONFIRM_DELETE_QUESTION, ERROR_REQUEST_FAILED};

/// User-facing failure report. `message` is fixed; `detail` is for logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: &'static str,
    pub detail: String,
}

/// A pending delete awaiting the user's yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub question_id: QuestionId,
    pub message: &'static str,
}

/// What happened when a response was folded into the view.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// State was replaced from the response.
    Updated,
    /// The response belonged to a superseded request and was dropped.
    Discarded,
    /// The operation succeeded and requires another request.
    FollowUp(Ticket),
    /// The operation failed; state is untouched.
    Failed(Notification),
}

#[derive(Debug, Default)]
pub struct QuestionView {
    state: ViewState,
    sequencer: RequestSequencer,
}

impl QuestionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    fn ticket(&mut self, request: Request) -> Ticket {
        let token = self.sequencer.issue(request.kind());
        Ticket { token, request }
    }

    /// Initial fetch when the view is shown.
    pub fn mount(&mut self) -> Ticket {
        self.refresh()
    }

    /// List the current page again.
    pub fn refresh(&mut self) -> Ticket {
        let page = self.state.page();
        self.ticket(Request::ListPage { page })
    }

    /// Make `page` current and list it.
    pub fn select_page(&mut self, page: u32) -> Ticket {
        self.state.set_page(page);
        self.refresh()
    }

    /// Select the page after the current one, if a link for it exists.
    pub fn next_page(&mut self) -> Option<Ticket> {
        let target = self.state.page().checked_add(1)?;
        pagination::is_selectable(&self.state, target).then(|| self.select_page(target))
    }

    /// Select the page before the current one, if a link for it exists.
    pub fn previous_page(&mut self) -> Option<Ticket> {
        let target = self.state.page().checked_sub(1)?;
        pagination::is_selectable(&self.state, target).then(|| self.select_page(target))
    }

    pub fn select_category(&mut self, category: CategoryId) -> Ticket {
        self.ticket(Request::ByCategory { category })
    }

    /// Search for `term` exactly as typed.
    pub fn submit_search(&mut self, term: impl Into<String>) -> Ticket {
        self.ticket(Request::Search { term: term.into() })
    }

    /// First step of a delete: ask the user.
    pub fn request_delete(&self, question_id: QuestionId) -> DeleteConfirmation {
        DeleteConfirmation {
            question_id,
            message: CONFIRM_DELETE_QUESTION,
        }
    }

    /// Second step of a delete. Declining issues nothing.
    pub fn resolve_delete(&mut self, confirmation: DeleteConfirmation, confirmed: bool) -> Option<Ticket> {
        confirmed.then(|| {
            self.ticket(Request::Delete {
                id: confirmation.question_id,
            })
        })
    }

    /// Submit a new question; invalid input is rejected without a request.
    pub fn create_question(&mut self, question: NewQuestion) -> Result<Ticket, InvalidQuestion> {
        question.validate()?;
        Ok(self.ticket(Request::Create(question)))
    }

    /// Fold the outcome of the request identified by `token` into the view.
    pub fn complete(&mut self, token: RequestToken, outcome: Result<Response, ApiError>) -> Completion {
        if !self.sequencer.settle(token) {
            log::debug!("View: discarding superseded response {:?}", token);
            return Completion::Discarded;
        }

        match outcome {
            Ok(Response::Page(page)) => {
                self.state.apply_page(page);
                Completion::Updated
            }
            Ok(Response::Category(result)) => {
                self.state.apply_category(result);
                Completion::Updated
            }
            Ok(Response::Search(result)) => {
                self.state.apply_search(result);
                Completion::Updated
            }
            Ok(Response::Deleted(id)) => {
                log::info!("View: question {} deleted, reloading page {}", id, self.state.page());
                Completion::FollowUp(self.refresh())
            }
            Ok(Response::Created) => {
                log::info!("View: question created, reloading page {}", self.state.page());
                Completion::FollowUp(self.refresh())
            }
            Err(error) => {
                log::warn!("View: request {:?} failed: {}", token.kind, error);
                Completion::Failed(Notification {
                    message: ERROR_REQUEST_FAILED,
                    detail: error.to_string(),
                })
            }
        }
    }
}

//! Sequential request dispatcher.
//!
//! Executes the view's tickets one at a time against a [`QuestionsApi`],
//! following up where an operation requires it and surfacing failures
//! through a [`UserPrompt`]. Useful wherever the caller can await each step,
//! including tests that need no terminal.

use super::question_view::{Completion, Notification, QuestionView};
use super::request::Ticket;
use crate::api::{CategoryId, QuestionId, QuestionsApi};
use async_trait::async_trait;
use std::sync::Arc;

/// Interaction points the dispatcher needs from whoever presents the view.
#[async_trait]
pub trait UserPrompt: Send + Sync {
    /// Ask a yes/no question; `true` means proceed.
    async fn confirm(&self, message: &str) -> bool;

    /// Show a failure to the user.
    fn notify(&self, notification: &Notification);
}

pub struct RequestDispatcher {
    api: Arc<dyn QuestionsApi>,
    prompt: Arc<dyn UserPrompt>,
}

impl RequestDispatcher {
    pub fn new(api: Arc<dyn QuestionsApi>, prompt: Arc<dyn UserPrompt>) -> Self {
        Self { api, prompt }
    }

    /// Execute `ticket` and every follow-up it triggers.
    ///
    /// Returns the completion of the last request executed.
    pub async fn dispatch(&self, view: &mut QuestionView, ticket: Ticket) -> Completion {
        let mut ticket = ticket;
        loop {
            log::debug!("Dispatcher: executing {}", ticket.request.describe());
            let outcome = ticket.request.execute(self.api.as_ref()).await;
            match view.complete(ticket.token, outcome) {
                Completion::FollowUp(next) => ticket = next,
                Completion::Failed(notification) => {
                    self.prompt.notify(&notification);
                    return Completion::Failed(notification);
                }
                completion => return completion,
            }
        }
    }

    pub async fn mount(&self, view: &mut QuestionView) -> Completion {
        let ticket = view.mount();
        self.dispatch(view, ticket).await
    }

    pub async fn select_page(&self, view: &mut QuestionView, page: u32) -> Completion {
        let ticket = view.select_page(page);
        self.dispatch(view, ticket).await
    }

    pub async fn select_category(&self, view: &mut QuestionView, category: CategoryId) -> Completion {
        let ticket = view.select_category(category);
        self.dispatch(view, ticket).await
    }

    pub async fn search(&self, view: &mut QuestionView, term: &str) -> Completion {
        let ticket = view.submit_search(term);
        self.dispatch(view, ticket).await
    }

    /// Confirm with the user, then delete. Returns `None` when declined.
    pub async fn delete(&self, view: &mut QuestionView, question_id: QuestionId) -> Option<Completion> {
        let confirmation = view.request_delete(question_id);
        let confirmed = self.prompt.confirm(confirmation.message).await;
        let ticket = view.resolve_delete(confirmation, confirmed)?;
        Some(self.dispatch(view, ticket).await)
    }
}

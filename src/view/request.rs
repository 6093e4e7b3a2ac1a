//! Requests the question view issues and the per-type sequencing that keeps
//! superseded responses from overwriting newer ones.

use crate::api::{
    ApiError, CategoryId, CategoryQuestions, NewQuestion, QuestionId, QuestionPage, QuestionsApi, SearchResults,
};
use std::collections::HashMap;

/// Operation type used for sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    ListPage,
    Category,
    Search,
    Delete,
    Create,
}

/// A network operation the view wants performed.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    ListPage { page: u32 },
    ByCategory { category: CategoryId },
    Search { term: String },
    Delete { id: QuestionId },
    Create(NewQuestion),
}

/// Decoded outcome of a successful [`Request`].
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Page(QuestionPage),
    Category(CategoryQuestions),
    Search(SearchResults),
    Deleted(QuestionId),
    Created,
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::ListPage { .. } => RequestKind::ListPage,
            Request::ByCategory { .. } => RequestKind::Category,
            Request::Search { .. } => RequestKind::Search,
            Request::Delete { .. } => RequestKind::Delete,
            Request::Create(_) => RequestKind::Create,
        }
    }

    /// Perform the request against `api`.
    pub async fn execute(&self, api: &dyn QuestionsApi) -> Result<Response, ApiError> {
        match self {
            Request::ListPage { page } => api.list_questions(*page).await.map(Response::Page),
            Request::ByCategory { category } => api.questions_by_category(*category).await.map(Response::Category),
            Request::Search { term } => api.search_questions(term).await.map(Response::Search),
            Request::Delete { id } => api.delete_question(*id).await.map(|()| Response::Deleted(*id)),
            Request::Create(question) => api.create_question(question).await.map(|()| Response::Created),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Request::ListPage { page } => format!("list page {}", page),
            Request::ByCategory { category } => format!("list category {}", category),
            Request::Search { term } => format!("search '{}'", term),
            Request::Delete { id } => format!("delete question {}", id),
            Request::Create(question) => format!("create question '{}'", question.question),
        }
    }
}

/// Identifies one issued request within its [`RequestKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub kind: RequestKind,
    pub seq: u64,
}

/// A request paired with the token its response must present.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub token: RequestToken,
    pub request: Request,
}

/// Issues monotonic tokens and remembers the latest one per request kind.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    next_seq: u64,
    latest: HashMap<RequestKind, u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token, superseding every earlier token of the same kind.
    pub fn issue(&mut self, kind: RequestKind) -> RequestToken {
        self.next_seq += 1;
        self.latest.insert(kind, self.next_seq);
        RequestToken {
            kind,
            seq: self.next_seq,
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get(&token.kind) == Some(&token.seq)
    }

    /// Accept a response for `token` at most once.
    ///
    /// Returns `false` when the token was superseded or already settled.
    pub fn settle(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.latest.remove(&token.kind);
            true
        } else {
            false
        }
    }
}

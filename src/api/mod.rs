//! Trivia API abstraction layer.
//!
//! This module defines the interface the question view uses to talk to the
//! trivia backend, the wire contract types for each endpoint and the error
//! taxonomy shared by every implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

pub mod http;
pub mod types;

pub use http::HttpQuestionsApi;
pub use types::{
    Acknowledgement, Categories, CategoryId, CategoryQuestions, CurrentCategory, InvalidQuestion, NewQuestion,
    Question, QuestionId, QuestionPage, SearchResults,
};

/// Error kinds for API operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure, non-2xx status or a server-reported failure.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The body did not match the endpoint's contract.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Post-decode checks a response body must pass before the view uses it.
pub trait Validate: Sized {
    fn validate(self) -> Result<Self, ApiError>;
}

/// Decode a response body into its contract type and validate it.
///
/// Any shape mismatch (missing field, wrong type, invalid JSON) becomes
/// [`ApiError::MalformedResponse`] instead of leaking partial data.
pub fn decode<T>(endpoint: &str, body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_str(body)
        .map_err(|e| ApiError::MalformedResponse(format!("{}: {}", endpoint, e)))?;
    value.validate()
}

/// Interface to the trivia backend.
///
/// Every method maps to exactly one HTTP request; no retries are performed.
#[async_trait]
pub trait QuestionsApi: Send + Sync {
    /// Base URL requests are issued against (scheme, host and port).
    fn base_url(&self) -> &str;

    /// `GET /api/questions?page={page}`
    async fn list_questions(&self, page: u32) -> Result<QuestionPage, ApiError>;

    /// `GET /api/categories/{category}/questions`
    async fn questions_by_category(&self, category: CategoryId) -> Result<CategoryQuestions, ApiError>;

    /// `POST /api/questions` with `{"searchTerm": term}`
    async fn search_questions(&self, term: &str) -> Result<SearchResults, ApiError>;

    /// `DELETE /api/questions/{id}`
    async fn delete_question(&self, id: QuestionId) -> Result<(), ApiError>;

    /// `POST /api/questions` with the new question's fields
    async fn create_question(&self, question: &NewQuestion) -> Result<(), ApiError>;
}

//! HTTP implementation of [`QuestionsApi`] backed by reqwest.

use super::{
    decode, Acknowledgement, ApiError, CategoryId, CategoryQuestions, NewQuestion, QuestionId, QuestionPage,
    QuestionsApi, SearchResults, Validate,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct SearchBody<'a> {
    #[serde(rename = "searchTerm")]
    search_term: &'a str,
}

/// Trivia API client talking JSON over HTTP.
#[derive(Clone, Debug)]
pub struct HttpQuestionsApi {
    client: Client,
    base_url: String,
}

impl HttpQuestionsApi {
    /// Create a client for `base_url` (e.g. `http://127.0.0.1:5000`).
    ///
    /// Surrounding whitespace and trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::RequestFailed(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T>(&self, endpoint: &str, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        log::debug!("API: sending {}", endpoint);

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(format!("{}: {}", endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("API: {} returned {}", endpoint, status);
            return Err(ApiError::RequestFailed(format!("{} returned {}", endpoint, status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(format!("{}: {}", endpoint, e)))?;

        decode(endpoint, &body)
    }
}

#[async_trait]
impl QuestionsApi for HttpQuestionsApi {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_questions(&self, page: u32) -> Result<QuestionPage, ApiError> {
        let url = self.url(&format!("/api/questions?page={}", page));
        self.send("GET /api/questions", self.client.get(url)).await
    }

    async fn questions_by_category(&self, category: CategoryId) -> Result<CategoryQuestions, ApiError> {
        let url = self.url(&format!("/api/categories/{}/questions", category));
        self.send("GET /api/categories/{id}/questions", self.client.get(url))
            .await
    }

    async fn search_questions(&self, term: &str) -> Result<SearchResults, ApiError> {
        let request = self
            .client
            .post(self.url("/api/questions"))
            .json(&SearchBody { search_term: term });
        self.send("POST /api/questions (search)", request).await
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/questions/{}", id));
        let _: Acknowledgement = self.send("DELETE /api/questions/{id}", self.client.delete(url)).await?;
        Ok(())
    }

    async fn create_question(&self, question: &NewQuestion) -> Result<(), ApiError> {
        let request = self.client.post(self.url("/api/questions")).json(question);
        let _: Acknowledgement = self.send("POST /api/questions (create)", request).await?;
        Ok(())
    }
}

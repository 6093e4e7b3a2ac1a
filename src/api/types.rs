//! Wire contract types for the trivia API.
//!
//! Each endpoint has its own response type; fields the view reads are
//! required, so a body missing one of them fails to decode.

use super::{ApiError, Validate};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type QuestionId = u64;
pub type CategoryId = u32;

/// Category id -> category name. Ids arrive as string keys on the wire.
pub type Categories = BTreeMap<CategoryId, String>;

/// A single trivia question as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "category_ref")]
    pub category: CategoryId,
    pub difficulty: u8,
}

/// Category the server says the result set belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CurrentCategory {
    Id(CategoryId),
    Label(String),
}

impl fmt::Display for CurrentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrentCategory::Id(id) => write!(f, "#{}", id),
            CurrentCategory::Label(label) => f.write_str(label),
        }
    }
}

/// Response of `GET /api/questions?page={n}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QuestionPage {
    #[serde(default = "succeeded")]
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub categories: Categories,
    #[serde(deserialize_with = "current_category")]
    pub current_category: Option<CurrentCategory>,
}

/// Response of `GET /api/categories/{id}/questions`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryQuestions {
    #[serde(default = "succeeded")]
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    #[serde(deserialize_with = "current_category")]
    pub current_category: Option<CurrentCategory>,
}

/// Response of `POST /api/questions` with a search term.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SearchResults {
    #[serde(default = "succeeded")]
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    #[serde(deserialize_with = "current_category")]
    pub current_category: Option<CurrentCategory>,
}

/// Body-less acknowledgement (delete, create). Only the success flag is read.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Acknowledgement {
    #[serde(default = "succeeded")]
    pub success: bool,
}

/// Payload for creating a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

/// Reasons a [`NewQuestion`] is rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQuestion {
    #[error("Question text cannot be empty")]
    EmptyQuestion,
    #[error("Answer text cannot be empty")]
    EmptyAnswer,
    #[error("Difficulty must be between 1 and 5, got {0}")]
    Difficulty(u8),
}

impl NewQuestion {
    pub fn validate(&self) -> Result<(), InvalidQuestion> {
        if self.question.trim().is_empty() {
            return Err(InvalidQuestion::EmptyQuestion);
        }
        if self.answer.trim().is_empty() {
            return Err(InvalidQuestion::EmptyAnswer);
        }
        if !(1..=5).contains(&self.difficulty) {
            return Err(InvalidQuestion::Difficulty(self.difficulty));
        }
        Ok(())
    }
}

fn succeeded() -> bool {
    true
}

fn check_listing(success: bool, total: u64, returned: usize) -> Result<(), ApiError> {
    if !success {
        return Err(ApiError::RequestFailed("server reported failure".to_string()));
    }
    if (returned as u64) > total {
        return Err(ApiError::MalformedResponse(format!(
            "total_questions is {} but {} questions were returned",
            total, returned
        )));
    }
    Ok(())
}

impl Validate for QuestionPage {
    fn validate(self) -> Result<Self, ApiError> {
        check_listing(self.success, self.total_questions, self.questions.len())?;
        Ok(self)
    }
}

impl Validate for CategoryQuestions {
    fn validate(self) -> Result<Self, ApiError> {
        check_listing(self.success, self.total_questions, self.questions.len())?;
        Ok(self)
    }
}

impl Validate for SearchResults {
    fn validate(self) -> Result<Self, ApiError> {
        check_listing(self.success, self.total_questions, self.questions.len())?;
        Ok(self)
    }
}

impl Validate for Acknowledgement {
    fn validate(self) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::RequestFailed("server reported failure".to_string()))
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Number(CategoryId),
    Text(String),
}

// Some backends store the category column as text ("1"), others as an integer.
fn category_ref<'de, D>(deserializer: D) -> Result<CategoryId, D::Error>
where
    D: Deserializer<'de>,
{
    match RawCategory::deserialize(deserializer)? {
        RawCategory::Number(id) => Ok(id),
        RawCategory::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid category id '{}'", text))),
    }
}

fn current_category<'de, D>(deserializer: D) -> Result<Option<CurrentCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawCategory> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(RawCategory::Number(id)) => Some(CurrentCategory::Id(id)),
        Some(RawCategory::Text(text)) if text.is_empty() => None,
        Some(RawCategory::Text(text)) => Some(CurrentCategory::Label(text)),
    })
}

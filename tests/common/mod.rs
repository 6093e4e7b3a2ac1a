//! In-memory trivia backend and prompt shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use trivialist::api::{
    ApiError, Categories, CategoryId, CategoryQuestions, CurrentCategory, NewQuestion, Question, QuestionId,
    QuestionPage, QuestionsApi, SearchResults,
};
use trivialist::view::{Notification, UserPrompt};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListPage(u32),
    ByCategory(CategoryId),
    Search(String),
    Delete(QuestionId),
    Create(NewQuestion),
}

pub fn categories() -> Categories {
    Categories::from([
        (1, "Science".to_string()),
        (2, "Art".to_string()),
        (3, "Geography".to_string()),
    ])
}

pub fn question(id: QuestionId, category: CategoryId) -> Question {
    Question {
        id,
        question: format!("Question {}?", id),
        answer: format!("Answer {}", id),
        category,
        difficulty: 2,
    }
}

/// Serves `total` numbered questions, ten per page, and records every call.
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    total: Mutex<u64>,
    failing: AtomicBool,
}

impl FakeApi {
    pub fn with_total(total: u64) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            total: Mutex::new(total),
            failing: AtomicBool::new(false),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            Err(ApiError::RequestFailed("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn total(&self) -> u64 {
        *self.total.lock().unwrap()
    }
}

#[async_trait]
impl QuestionsApi for FakeApi {
    fn base_url(&self) -> &str {
        "http://fake"
    }

    async fn list_questions(&self, page: u32) -> Result<QuestionPage, ApiError> {
        self.record(Call::ListPage(page))?;
        let total = self.total();
        let first = u64::from(page.saturating_sub(1)) * 10 + 1;
        let questions = (first..=total.min(first + 9))
            .map(|id| question(id, (id % 3) as CategoryId + 1))
            .collect();
        Ok(QuestionPage {
            success: true,
            questions,
            total_questions: total,
            categories: categories(),
            current_category: None,
        })
    }

    async fn questions_by_category(&self, category: CategoryId) -> Result<CategoryQuestions, ApiError> {
        self.record(Call::ByCategory(category))?;
        Ok(CategoryQuestions {
            success: true,
            questions: vec![question(100, category), question(101, category)],
            total_questions: 2,
            current_category: Some(CurrentCategory::Id(category)),
        })
    }

    async fn search_questions(&self, term: &str) -> Result<SearchResults, ApiError> {
        self.record(Call::Search(term.to_string()))?;
        Ok(SearchResults {
            success: true,
            questions: vec![question(7, 2)],
            total_questions: 1,
            current_category: None,
        })
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), ApiError> {
        self.record(Call::Delete(id))?;
        let mut total = self.total.lock().unwrap();
        *total = total.saturating_sub(1);
        Ok(())
    }

    async fn create_question(&self, question: &NewQuestion) -> Result<(), ApiError> {
        self.record(Call::Create(question.clone()))?;
        *self.total.lock().unwrap() += 1;
        Ok(())
    }
}

/// Answers every confirmation with `answer` and records what it was shown.
pub struct RecordingPrompt {
    answer: bool,
    pub confirmations: Mutex<Vec<String>>,
    pub notifications: Mutex<Vec<Notification>>,
}

impl RecordingPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirmations: Mutex::new(Vec::new()),
            notifications: Mutex::new(Vec::new()),
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserPrompt for RecordingPrompt {
    async fn confirm(&self, message: &str) -> bool {
        self.confirmations.lock().unwrap().push(message.to_string());
        self.answer
    }

    fn notify(&self, notification: &Notification) {
        self.notifications.lock().unwrap().push(notification.clone());
    }
}

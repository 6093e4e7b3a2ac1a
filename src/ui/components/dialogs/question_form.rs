//! State of the "new question" form.

use super::common::TextInput;
use crate::api::{Categories, CategoryId, NewQuestion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Question,
    Answer,
    Category,
    Difficulty,
}

impl FormField {
    const ORDER: [FormField; 4] = [FormField::Question, FormField::Answer, FormField::Category, FormField::Difficulty];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|field| *field == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text(self) -> bool {
        matches!(self, FormField::Question | FormField::Answer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionForm {
    pub question: TextInput,
    pub answer: TextInput,
    pub focus: FormField,
    categories: Vec<(CategoryId, String)>,
    category_index: usize,
    difficulty: u8,
}

impl Default for QuestionForm {
    fn default() -> Self {
        Self {
            question: TextInput::default(),
            answer: TextInput::default(),
            focus: FormField::default(),
            categories: Vec::new(),
            category_index: 0,
            difficulty: 1,
        }
    }
}

impl QuestionForm {
    /// Fresh form over `categories`, preselecting `default_category` when known.
    pub fn new(categories: &Categories, default_category: Option<CategoryId>) -> Self {
        let categories: Vec<(CategoryId, String)> =
            categories.iter().map(|(id, name)| (*id, name.clone())).collect();
        let category_index = default_category
            .and_then(|wanted| categories.iter().position(|(id, _)| *id == wanted))
            .unwrap_or(0);
        Self {
            categories,
            category_index,
            ..Self::default()
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Question => Some(&mut self.question),
            FormField::Answer => Some(&mut self.answer),
            FormField::Category | FormField::Difficulty => None,
        }
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn category(&self) -> Option<&(CategoryId, String)> {
        self.categories.get(self.category_index)
    }

    /// Step the focused selector by one; text fields are unaffected.
    pub fn step(&mut self, forward: bool) {
        match self.focus {
            FormField::Category if !self.categories.is_empty() => {
                let len = self.categories.len();
                self.category_index = if forward {
                    (self.category_index + 1) % len
                } else {
                    (self.category_index + len - 1) % len
                };
            }
            FormField::Difficulty => {
                self.difficulty = if forward {
                    (self.difficulty % 5) + 1
                } else if self.difficulty <= 1 {
                    5
                } else {
                    self.difficulty - 1
                };
            }
            _ => {}
        }
    }

    /// The question as it would be submitted; `None` when no category is known.
    pub fn to_new_question(&self) -> Option<NewQuestion> {
        self.category().map(|(category, _)| NewQuestion {
            question: self.question.value().to_string(),
            answer: self.answer.value().to_string(),
            category: *category,
            difficulty: self.difficulty,
        })
    }
}

use crate::api::{Categories, Question, QuestionId};
use crate::constants::NO_QUESTIONS;
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct QuestionList {
    pub icons: IconService,
    pub show_answers: bool,
    questions: Vec<Question>,
    categories: Categories,
    title: String,
    selected_index: usize,
    list_state: ListState,
}

impl Default for QuestionList {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionList {
    pub fn new() -> Self {
        Self {
            icons: IconService::default(),
            show_answers: false,
            questions: Vec::new(),
            categories: Categories::new(),
            title: String::new(),
            selected_index: 0,
            list_state: ListState::default(),
        }
    }

    pub fn update_data(&mut self, questions: &[Question], categories: &Categories, title: String) {
        self.questions = questions.to_vec();
        self.categories = categories.clone();
        self.title = title;
        self.update_list_state();
    }

    pub fn selected_question(&self) -> Option<&Question> {
        self.questions.get(self.selected_index)
    }

    pub fn selected_question_id(&self) -> Option<QuestionId> {
        self.selected_question().map(|question| question.id)
    }

    fn update_list_state(&mut self) {
        if self.questions.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.questions.len() {
                self.selected_index = self.questions.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn category_label(&self, question: &Question) -> String {
        match self.categories.get(&question.category) {
            Some(name) => format!("{} {}", self.icons.category(name), name),
            None => format!("{} #{}", self.icons.category(""), question.category),
        }
    }

    fn create_list_items(&self) -> Vec<ListItem<'static>> {
        self.questions
            .iter()
            .map(|question| {
                let mut lines = vec![Line::from(Span::styled(
                    question.question.clone(),
                    Style::default().fg(Color::White),
                ))];

                if self.show_answers {
                    lines.push(Line::from(vec![
                        Span::raw("   "),
                        Span::styled(self.icons.answer(), Style::default().fg(Color::Green)),
                        Span::raw(" "),
                        Span::styled(question.answer.clone(), Style::default().fg(Color::Green)),
                    ]));
                }

                lines.push(Line::from(vec![
                    Span::raw("   "),
                    Span::styled(self.category_label(question), Style::default().fg(Color::Cyan)),
                    Span::styled(" • ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        self.icons.difficulty(question.difficulty),
                        Style::default().fg(Color::Yellow),
                    ),
                ]));

                ListItem::new(lines)
            })
            .collect()
    }
}

impl Component for QuestionList {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextQuestion,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousQuestion,
            KeyCode::Char('s') => Action::ToggleAnswers,
            KeyCode::Char('d') => match self.selected_question_id() {
                Some(id) => Action::RequestDelete(id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextQuestion => {
                if !self.questions.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.questions.len();
                    self.list_state.select(Some(self.selected_index));
                }
                Action::None
            }
            Action::PreviousQuestion => {
                if !self.questions.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.questions.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.list_state.select(Some(self.selected_index));
                }
                Action::None
            }
            Action::ToggleAnswers => {
                self.show_answers = !self.show_answers;
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} {}", self.icons.questions_title(), self.title));

        if self.questions.is_empty() {
            let empty_list = List::new(vec![ListItem::new(NO_QUESTIONS)]).block(block);
            f.render_stateful_widget(empty_list, rect, &mut self.list_state);
            return;
        }

        let list = List::new(self.create_list_items())
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}

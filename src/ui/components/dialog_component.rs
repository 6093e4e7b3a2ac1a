//! Modal dialog component for user interactions.
//!
//! One dialog is visible at a time and owns the keyboard while it is open.
//!
//! # Dialog Types
//! - **Delete confirmation** - answers the question view's yes/no prompt
//! - **Search** - collects the search term
//! - **Question creation** - multi-field form for a new question
//! - **System dialogs** - errors, info, help and debug logs

use crate::api::Categories;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{question_dialogs, system_dialogs, QuestionForm, ScrollState, TextInput};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    search_input: TextInput,
    form: QuestionForm,
    categories: Categories,
    scroll: ScrollState,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            search_input: TextInput::default(),
            form: QuestionForm::default(),
            categories: Categories::new(),
            scroll: ScrollState::default(),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn update_data(&mut self, categories: &Categories) {
        self.categories = categories.clone();
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.search_input.clear();
        self.form = QuestionForm::default();
        self.scroll.reset();
    }

    fn handle_scroll_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.top(),
            KeyCode::End => self.scroll.bottom(),
            _ => return false,
        }
        true
    }

    fn edit_text(input: &mut TextInput, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => input.insert(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            _ => {}
        }
    }

    fn handle_search_keys(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => {
                // The term is submitted exactly as typed
                let term = self.search_input.value().to_string();
                self.clear_dialog();
                Action::SubmitSearch(term)
            }
            _ => {
                Self::edit_text(&mut self.search_input, key);
                Action::None
            }
        }
    }

    fn handle_form_keys(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus = self.form.focus.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus = self.form.focus.previous();
                Action::None
            }
            KeyCode::Enter => match self.form.to_new_question() {
                Some(question) => {
                    self.clear_dialog();
                    Action::CreateQuestion(question)
                }
                None => Action::ShowDialog(DialogType::Error(
                    "No categories loaded yet. Refresh the question list and try again.".to_string(),
                )),
            },
            KeyCode::Left | KeyCode::Right if !self.form.focus.is_text() => {
                self.form.step(key.code == KeyCode::Right);
                Action::None
            }
            _ => {
                if let Some(input) = self.form.focused_input() {
                    Self::edit_text(input, key);
                }
                Action::None
            }
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        match dialog_type {
            DialogType::DeleteConfirmation { question_id, .. } => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    let question_id = *question_id;
                    self.clear_dialog();
                    Action::ConfirmDelete(question_id)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::HideDialog,
                _ => Action::None,
            },
            DialogType::Search => self.handle_search_keys(key),
            DialogType::QuestionCreation { .. } => self.handle_form_keys(key),
            DialogType::Info(_) | DialogType::Error(_) => {
                if self.handle_scroll_keys(key) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') => Action::HideDialog,
                _ => {
                    self.handle_scroll_keys(key);
                    Action::None
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_keys(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                if let DialogType::QuestionCreation { default_category } = &dialog_type {
                    self.form = QuestionForm::new(&self.categories, *default_category);
                }
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                // The app still needs to see the dismissal
                Action::HideDialog
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::DeleteConfirmation { preview, message, .. } => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, message, &preview);
            }
            DialogType::Search => {
                question_dialogs::render_search_dialog(f, rect, &self.icons, &self.search_input);
            }
            DialogType::QuestionCreation { .. } => {
                question_dialogs::render_question_form_dialog(f, rect, &self.icons, &self.form);
            }
            DialogType::Info(message) => {
                system_dialogs::render_info_dialog(f, rect, &self.icons, &message, &mut self.scroll);
            }
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(f, rect, &self.icons, &message, &mut self.scroll);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &logs, &mut self.scroll);
            }
        }
    }
}

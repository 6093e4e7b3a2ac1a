//! Category sidebar for the Trivialist application.
//!
//! Lists the categories the backend reported with the last page listing.
//! Selecting one narrows the question list to that category; the title row
//! (or `c`) goes back to the plain page listing.

use crate::api::{Categories, CategoryId};
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct CategorySidebar {
    pub icons: IconService,
    categories: Vec<(CategoryId, String)>,
    active: Option<CategoryId>,
    list_state: ListState,
    area: Rect,
    mouse_enabled: bool,
}

impl Default for CategorySidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl CategorySidebar {
    pub fn new() -> Self {
        Self {
            icons: IconService::default(),
            categories: Vec::new(),
            active: None,
            list_state: ListState::default(),
            area: Rect::default(),
            mouse_enabled: false,
        }
    }

    pub fn set_mouse_enabled(&mut self, enabled: bool) {
        self.mouse_enabled = enabled;
    }

    /// Replace the category list. `active` marks the category currently shown.
    pub fn update_data(&mut self, categories: &Categories, active: Option<CategoryId>) {
        self.categories = categories.iter().map(|(id, name)| (*id, name.clone())).collect();
        self.active = active;

        let selected = match self.list_state.selected() {
            Some(index) if index < self.categories.len() => Some(index),
            _ if self.categories.is_empty() => None,
            _ => Some(0),
        };
        self.list_state.select(selected);
    }

    pub fn selected_category(&self) -> Option<CategoryId> {
        self.list_state
            .selected()
            .and_then(|index| self.categories.get(index))
            .map(|(id, _)| *id)
    }

    fn select_next(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(index) => (index + 1) % self.categories.len(),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(0) | None => self.categories.len() - 1,
            Some(index) => index - 1,
        };
        self.list_state.select(Some(previous));
    }

    /// Row index of the item under `(column, row)`, if any.
    fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        // Rows between the top and bottom borders
        let first_row = self.area.y + 1;
        let last_row = self.area.bottom().saturating_sub(2);
        if row < first_row || row > last_row {
            return None;
        }
        let index = usize::from(row - first_row) + self.list_state.offset();
        (index < self.categories.len()).then_some(index)
    }
}

impl Component for CategorySidebar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') => Action::NextCategory,
            KeyCode::Char('K') => Action::PreviousCategory,
            KeyCode::Enter => match self.selected_category() {
                Some(id) => Action::SelectCategory(id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        if mouse.row == self.area.y && self.area.contains(Position::new(mouse.column, mouse.row)) {
            return Action::Refresh;
        }
        match self.item_at(mouse.column, mouse.row) {
            Some(index) => {
                self.list_state.select(Some(index));
                Action::SelectCategory(self.categories[index].0)
            }
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextCategory => {
                self.select_next();
                Action::None
            }
            Action::PreviousCategory => {
                self.select_previous();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let items: Vec<ListItem> = self
            .categories
            .iter()
            .map(|(id, name)| {
                let mut style = Style::default().fg(Color::White);
                if self.active == Some(*id) {
                    style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
                }
                ListItem::new(format!("{} {}", self.icons.category(name), name)).style(style)
            })
            .collect();

        let title = format!("{} Categories", self.icons.categories_title());
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}

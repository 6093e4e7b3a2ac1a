//! Status bar component

use crate::constants::{STATUS_HINTS, STATUS_LOADING};
use crate::view::{DisplayMode, ViewState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown for the given view state and number of in-flight requests
    #[must_use]
    pub fn status_text(state: &ViewState, running: &[String]) -> String {
        if state.mode() == DisplayMode::Uninitialized && !running.is_empty() {
            return STATUS_LOADING.to_string();
        }

        let mut parts = vec![state.mode().label().to_string()];
        if state.mode().shows_pagination() {
            parts.push(format!("page {}", state.page()));
        }
        if let Some(category) = state.current_category_label() {
            if !category.is_empty() {
                parts.push(category);
            }
        }
        if let Some(request) = running.last() {
            parts.push(format!("{}...", request));
        }
        parts.push(STATUS_HINTS.to_string());
        parts.join(" • ")
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &ViewState, running: &[String]) {
        let status_color = if running.is_empty() { Color::Gray } else { Color::Yellow };

        let status_bar = Paragraph::new(Self::status_text(state, running))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}

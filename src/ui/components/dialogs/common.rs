use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, ScrollbarState},
};

/// Single-line text buffer with a character-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn byte_pos(&self, chars: usize) -> usize {
        self.buffer.chars().take(chars).map(char::len_utf8).sum()
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.byte_pos(self.cursor);
        self.buffer.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_pos = self.byte_pos(self.cursor - 1);
            self.buffer.remove(byte_pos);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let byte_pos = self.byte_pos(self.cursor);
            self.buffer.remove(byte_pos);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }
}

/// Scroll position shared by the long-content dialogs
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    pub offset: usize,
    pub scrollbar: ScrollbarState,
}

impl ScrollState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(10));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(10));
    }

    pub fn top(&mut self) {
        self.set(0);
    }

    /// Renderers clamp the offset to the content length
    pub fn bottom(&mut self) {
        self.set(usize::MAX);
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar = self.scrollbar.position(offset);
    }
}

/// Creates a styled main dialog block
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block; the focused field shows a cursor
pub fn create_input_paragraph<'a>(input: &'a TextInput, field_title: &str, focused: bool) -> Paragraph<'a> {
    let border_color = if focused { Color::Yellow } else { Color::Gray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    let line = if focused {
        let split = input.value().char_indices().nth(input.cursor()).map_or(input.value().len(), |(i, _)| i);
        let (before, after) = input.value().split_at(split);
        Line::from(vec![
            Span::raw(before),
            Span::styled("█", Style::default().fg(Color::Yellow)),
            Span::raw(after),
        ])
    } else {
        Line::from(input.value())
    };

    Paragraph::new(line).block(input_block).style(Style::default().fg(Color::White))
}

/// Creates a selection field block (read-only display with title)
pub fn create_selection_paragraph(value: String, field_title: &str, focused: bool) -> Paragraph<'static> {
    let border_color = if focused { Color::Yellow } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    let value = if focused { format!("◀ {} ▶", value) } else { value };
    Paragraph::new(value).block(block).style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Submit");
    pub const TAB_NEXT_FIELD: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_CHANGE: InstructionShortcut = ("←/→", Color::Cyan, " Change");
    pub const YES_CONFIRM: InstructionShortcut = ("y/Enter", Color::Green, " Delete");
    pub const NO_CANCEL: InstructionShortcut = ("n/Esc", Color::Red, " Keep");
}

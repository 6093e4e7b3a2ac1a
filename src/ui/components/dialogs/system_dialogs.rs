use super::common::{self, shortcuts, ScrollState};
use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
TRIVIALIST - Trivia Question Browser
====================================

NAVIGATION
----------
j/k         Move between questions (down/up)
J/K         Move between categories (down/up)
Enter       Show questions of the selected category
c / Home    Back to the full question list
Esc         Cancel action or close dialogs

PAGES
-----
←/→  [ ]    Previous / next page
1-9         Jump to page
Click       Select a page number (when mouse support is enabled)

QUESTIONS
---------
/           Search questions
a           Add a new question
d           Delete selected question (with confirmation)
s           Show or hide answers

GENERAL CONTROLS
----------------
?           Toggle help panel
G           Show debug logs
i           Change icon theme
q / Ctrl+C  Quit application

HELP PANEL SCROLLING
--------------------
j/k ↑↓      Scroll help content
PageUp/Down Page through help content
Home/End    Jump to top/bottom

NOTES
-----
Page numbers are only offered for the full question list. Category and
search results are shown in one piece.

Press 'Esc', '?' or 'h' to close this help panel
";

pub fn render_delete_confirmation_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    preview: &str,
) {
    let message_lines = u16::try_from(message.lines().count()).unwrap_or(u16::MAX);
    let dialog_area = LayoutManager::centered_rect_lines(60, message_lines.saturating_add(6), area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(format!(" {} Confirm Delete ", icons.warning()), Color::Red);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let preview_paragraph = Paragraph::new(format!("\"{}\"", truncate(preview, 60)))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions = common::create_instructions_paragraph(&[
        shortcuts::YES_CONFIRM,
        shortcuts::SEPARATOR,
        shortcuts::NO_CANCEL,
    ]);

    f.render_widget(preview_paragraph, chunks[0]);
    f.render_widget(message_paragraph, chunks[2]);
    f.render_widget(instructions, chunks[3]);
}

pub fn render_info_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str, scroll: &mut ScrollState) {
    let title = format!(" {} Info ", icons.info());
    render_message_dialog(f, area, title, Color::Blue, message, scroll, 60, 10);
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str, scroll: &mut ScrollState) {
    let title = format!(" {} Error ", icons.error());
    render_message_dialog(f, area, title, Color::Red, message, scroll, 70, 12);
}

#[allow(clippy::too_many_arguments)]
fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: String,
    color: Color,
    message: &str,
    scroll: &mut ScrollState,
    percent_x: u16,
    height: u16,
) {
    let dialog_area = LayoutManager::centered_rect_lines(percent_x, height, area);
    f.render_widget(Clear, dialog_area);

    let instructions = "Press any key to continue • j/k to scroll if needed";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let (text, overflows) = visible_window(&lines, content_area.height as usize, scroll);

    let message_paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if overflows {
        render_scrollbar(f, content_area, scroll);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut ScrollState) {
    let lines: Vec<&str> = HELP_CONTENT.lines().collect();
    render_scrolling_panel(f, area, "📖 Help - Press 'Esc', '?' or 'h' to close", &lines, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut ScrollState) {
    let lines: Vec<&str> = if logs.is_empty() {
        vec!["No debug logs available"]
    } else {
        logs.iter().flat_map(|entry| entry.lines()).collect()
    };
    render_scrolling_panel(f, area, DIALOG_TITLE_DEBUG_LOGS, &lines, scroll);
}

fn render_scrolling_panel(f: &mut Frame, area: Rect, title: &str, lines: &[&str], scroll: &mut ScrollState) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        panel_area.x + margin_x,
        panel_area.y + margin_y,
        panel_area.width.saturating_sub(margin_x * 2),
        panel_area.height.saturating_sub(margin_y * 2),
    );

    let visible_height = content_area.height.saturating_sub(2) as usize;
    let (text, overflows) = visible_window(lines, visible_height, scroll);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if overflows {
        render_scrollbar(f, content_area, scroll);
    }
}

/// Lines visible at the current offset; the offset is clamped in place.
fn visible_window(lines: &[&str], visible_height: usize, scroll: &mut ScrollState) -> (String, bool) {
    let total_lines = lines.len();
    if total_lines <= visible_height {
        return (lines.join("\n"), false);
    }

    let max_scroll = total_lines.saturating_sub(visible_height);
    scroll.offset = scroll.offset.min(max_scroll);
    scroll.scrollbar = scroll
        .scrollbar
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(scroll.offset);

    let text = lines
        .iter()
        .skip(scroll.offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    (text, true)
}

fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &mut ScrollState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));

    f.render_stateful_widget(scrollbar, area, &mut scroll.scrollbar);
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

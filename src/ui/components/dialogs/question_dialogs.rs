use super::common::{self, shortcuts, TextInput};
use super::question_form::{FormField, QuestionForm};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

pub fn render_search_dialog(f: &mut Frame, area: Rect, icons: &IconService, input: &TextInput) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(format!(" {} Search Questions ", icons.search()), Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    f.render_widget(common::create_input_paragraph(input, "Search term", true), chunks[0]);
    f.render_widget(
        common::create_instructions_paragraph(&[
            shortcuts::ENTER_SUBMIT,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]),
        chunks[1],
    );
}

pub fn render_question_form_dialog(f: &mut Frame, area: Rect, icons: &IconService, form: &QuestionForm) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 15, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(format!(" {} Add Question ", icons.questions_title()), Color::Green);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let selectors = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    let category = match form.category() {
        Some((_, name)) => format!("{} {}", icons.category(name), name),
        None => "No categories loaded".to_string(),
    };

    f.render_widget(
        common::create_input_paragraph(&form.question, "Question", form.focus == FormField::Question),
        chunks[0],
    );
    f.render_widget(
        common::create_input_paragraph(&form.answer, "Answer", form.focus == FormField::Answer),
        chunks[1],
    );
    f.render_widget(
        common::create_selection_paragraph(category, "Category", form.focus == FormField::Category),
        selectors[0],
    );
    f.render_widget(
        common::create_selection_paragraph(
            icons.difficulty(form.difficulty()),
            "Difficulty",
            form.focus == FormField::Difficulty,
        ),
        selectors[1],
    );
    f.render_widget(
        common::create_instructions_paragraph(&[
            shortcuts::TAB_NEXT_FIELD,
            shortcuts::SEPARATOR,
            shortcuts::ARROWS_CHANGE,
            shortcuts::SEPARATOR,
            shortcuts::ENTER_SUBMIT,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]),
        chunks[3],
    );
}

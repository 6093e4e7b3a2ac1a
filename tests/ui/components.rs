use crate::common::{categories, question};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use trivialist::api::{QuestionPage, SearchResults};
use trivialist::ui::components::{CategorySidebar, DialogComponent, PaginationBar, QuestionList};
use trivialist::ui::core::{Action, Component, DialogType};
use trivialist::view::{Completion, QuestionView, Response, ViewState};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// State after listing `page` of `total` questions.
fn paginated_state(total: u64, page: u32) -> ViewState {
    let mut view = QuestionView::new();
    let ticket = view.select_page(page);
    let first = u64::from(page - 1) * 10 + 1;
    let questions = (first..=total.min(first + 9)).map(|id| question(id, 1)).collect();
    let completion = view.complete(
        ticket.token,
        Ok(Response::Page(QuestionPage {
            success: true,
            questions,
            total_questions: total,
            categories: categories(),
            current_category: None,
        })),
    );
    assert_eq!(completion, Completion::Updated);
    view.state().clone()
}

fn search_state() -> ViewState {
    let mut view = QuestionView::new();
    let ticket = view.submit_search("title");
    view.complete(
        ticket.token,
        Ok(Response::Search(SearchResults {
            success: true,
            questions: vec![question(4, 2), question(6, 3)],
            total_questions: 2,
            current_category: None,
        })),
    );
    view.state().clone()
}

fn draw(component: &mut impl Component, area: Rect) {
    let mut terminal = Terminal::new(TestBackend::new(area.width, area.height)).unwrap();
    terminal.draw(|f| component.render(f, area)).unwrap();
}

#[test]
fn test_pagination_links_are_clickable() {
    let mut bar = PaginationBar::new();
    bar.set_mouse_enabled(true);
    bar.update_data(&paginated_state(23, 1));
    draw(&mut bar, Rect::new(0, 0, 40, 3));

    assert_eq!(bar.visible_pages(), vec![1, 2, 3]);
    assert!(matches!(bar.handle_mouse_events(click(2, 1)), Action::SelectPage(1)));
    assert!(matches!(bar.handle_mouse_events(click(6, 1)), Action::SelectPage(2)));
    // The border is not a link
    assert!(matches!(bar.handle_mouse_events(click(2, 0)), Action::None));
}

#[test]
fn test_pagination_keys() {
    let mut bar = PaginationBar::new();
    bar.update_data(&paginated_state(23, 2));

    assert!(matches!(bar.handle_key_events(key(KeyCode::Right)), Action::NextPage));
    assert!(matches!(bar.handle_key_events(key(KeyCode::Char('['))), Action::PreviousPage));
    assert!(matches!(bar.handle_key_events(key(KeyCode::Char('3'))), Action::SelectPage(3)));
    assert!(matches!(bar.handle_key_events(key(KeyCode::Char('4'))), Action::None));
}

#[test]
fn test_pagination_hidden_for_search_results() {
    let mut bar = PaginationBar::new();
    bar.set_mouse_enabled(true);
    bar.update_data(&search_state());
    draw(&mut bar, Rect::new(0, 0, 40, 3));

    assert!(bar.visible_pages().is_empty());
    assert!(matches!(bar.handle_key_events(key(KeyCode::Char('1'))), Action::None));
    assert!(matches!(bar.handle_mouse_events(click(2, 1)), Action::None));
}

#[test]
fn test_mouse_ignored_when_disabled() {
    let mut bar = PaginationBar::new();
    bar.update_data(&paginated_state(23, 1));
    draw(&mut bar, Rect::new(0, 0, 40, 3));

    assert!(matches!(bar.handle_mouse_events(click(2, 1)), Action::None));
}

#[test]
fn test_question_list_keys() {
    let state = paginated_state(23, 1);
    let mut list = QuestionList::new();
    list.update_data(state.questions(), state.categories(), "Questions".to_string());

    assert!(matches!(list.handle_key_events(key(KeyCode::Char('d'))), Action::RequestDelete(1)));

    let action = list.handle_key_events(key(KeyCode::Down));
    assert!(matches!(list.update(action), Action::None));
    assert_eq!(list.selected_question_id(), Some(2));

    // Wraps to the last question
    list.update(Action::PreviousQuestion);
    list.update(Action::PreviousQuestion);
    assert_eq!(list.selected_question_id(), Some(10));

    let shown = list.show_answers;
    let action = list.handle_key_events(key(KeyCode::Char('s')));
    list.update(action);
    assert_eq!(list.show_answers, !shown);
}

#[test]
fn test_question_list_empty_has_no_delete() {
    let mut list = QuestionList::new();
    assert_eq!(list.selected_question_id(), None);
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('d'))), Action::None));
}

#[test]
fn test_category_sidebar_selection() {
    let state = paginated_state(5, 1);
    let mut sidebar = CategorySidebar::new();
    sidebar.update_data(state.categories(), None);
    assert_eq!(sidebar.selected_category(), Some(1));

    let action = sidebar.handle_key_events(key(KeyCode::Char('J')));
    sidebar.update(action);
    assert!(matches!(sidebar.handle_key_events(key(KeyCode::Enter)), Action::SelectCategory(2)));

    // Wraps backwards past the first category
    sidebar.update(Action::PreviousCategory);
    sidebar.update(Action::PreviousCategory);
    assert_eq!(sidebar.selected_category(), Some(3));
}

#[test]
fn test_category_sidebar_mouse() {
    let state = paginated_state(5, 1);
    let mut sidebar = CategorySidebar::new();
    sidebar.set_mouse_enabled(true);
    sidebar.update_data(state.categories(), None);
    draw(&mut sidebar, Rect::new(0, 0, 30, 10));

    // Rows: border/title, Science, Art, Geography
    assert!(matches!(sidebar.handle_mouse_events(click(3, 2)), Action::SelectCategory(2)));
    assert_eq!(sidebar.selected_category(), Some(2));
    assert!(matches!(sidebar.handle_mouse_events(click(3, 0)), Action::Refresh));
    assert!(matches!(sidebar.handle_mouse_events(click(3, 8)), Action::None));
}

#[test]
fn test_category_sidebar_bottom_border_is_not_an_item() {
    let state = paginated_state(5, 1);
    let mut sidebar = CategorySidebar::new();
    sidebar.set_mouse_enabled(true);
    sidebar.update_data(state.categories(), None);
    // Room for two of the three categories
    draw(&mut sidebar, Rect::new(0, 0, 30, 4));

    assert!(matches!(sidebar.handle_mouse_events(click(3, 2)), Action::SelectCategory(2)));
    assert!(matches!(sidebar.handle_mouse_events(click(3, 3)), Action::None));
    assert_eq!(sidebar.selected_category(), Some(2));
}

#[test]
fn test_search_dialog_submits_term_verbatim() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Search));
    assert!(dialog.is_visible());

    for c in " Who ".chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::SubmitSearch(term) => assert_eq!(term, " Who "),
        other => panic!("expected search, got {:?}", other),
    }
    assert!(!dialog.is_visible());
}

#[test]
fn test_delete_confirmation_answers() {
    let mut dialog = DialogComponent::new();
    let show = || {
        Action::ShowDialog(DialogType::DeleteConfirmation {
            question_id: 9,
            preview: "Question 9?".to_string(),
            message: "Are you sure?",
        })
    };

    dialog.update(show());
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::ConfirmDelete(9)));
    assert!(!dialog.is_visible());

    dialog.update(show());
    let action = dialog.handle_key_events(key(KeyCode::Esc));
    assert!(matches!(action, Action::HideDialog));
    // The dismissal is passed on so the pending delete can be resolved
    assert!(matches!(dialog.update(action), Action::HideDialog));
    assert!(!dialog.is_visible());
}

#[test]
fn test_question_form_submits_new_question() {
    let mut dialog = DialogComponent::new();
    dialog.update_data(&categories());
    dialog.update(Action::ShowDialog(DialogType::QuestionCreation {
        default_category: Some(3),
    }));

    for c in "Capital of Peru?".chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
    dialog.handle_key_events(key(KeyCode::Tab));
    for c in "Lima".chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
    // Difficulty, stepped back from 1 to 5
    dialog.handle_key_events(key(KeyCode::BackTab));
    dialog.handle_key_events(key(KeyCode::BackTab));
    dialog.handle_key_events(key(KeyCode::Left));

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::CreateQuestion(question) => {
            assert_eq!(question.question, "Capital of Peru?");
            assert_eq!(question.answer, "Lima");
            assert_eq!(question.category, 3);
            assert_eq!(question.difficulty, 5);
        }
        other => panic!("expected create, got {:?}", other),
    }
}

#[test]
fn test_question_form_without_categories_reports_error() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::QuestionCreation { default_category: None }));

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::ShowDialog(DialogType::Error(_))));
}

#[test]
fn test_dialogs_render_without_panicking() {
    let area = Rect::new(0, 0, 80, 24);
    let mut dialog = DialogComponent::new();
    dialog.update_data(&categories());

    for dialog_type in [
        DialogType::Search,
        DialogType::QuestionCreation { default_category: None },
        DialogType::Error("Unable to load questions".to_string()),
        DialogType::Info("Saved".to_string()),
        DialogType::Help,
        DialogType::Logs,
    ] {
        dialog.update(Action::ShowDialog(dialog_type));
        draw(&mut dialog, area);
    }
}

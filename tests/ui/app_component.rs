use crate::common::{Call, FakeApi};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use trivialist::config::UiConfig;
use trivialist::constants::{ERROR_REQUEST_FAILED, INFO_QUESTION_CREATED};
use trivialist::logger::Logger;
use trivialist::ui::core::{Action, Component, DialogType, EventType};
use trivialist::ui::AppComponent;
use trivialist::view::DisplayMode;

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn new_app(total: u64) -> (Arc<FakeApi>, AppComponent) {
    let api = Arc::new(FakeApi::with_total(total));
    let app = AppComponent::new(api.clone(), &UiConfig::default(), Logger::new());
    (api, app)
}

/// Feed background results back into the app until no request is in flight.
async fn settle(app: &mut AppComponent) {
    for _ in 0..200 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        let actions = app.process_background_actions();
        let received = !actions.is_empty();
        for action in actions {
            app.apply(action);
        }
        if !received && !app.is_busy() {
            return;
        }
    }
    panic!("requests did not settle");
}

fn screen(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_mount_loads_first_page() {
    let (api, mut app) = new_app(23);
    app.mount();
    settle(&mut app).await;

    assert_eq!(api.calls(), vec![Call::ListPage(1)]);
    assert_eq!(app.view_state().mode(), DisplayMode::Paginated);

    let screen = screen(&mut app);
    assert!(screen.contains("Question 1?"));
    assert!(screen.contains("Science"));
    assert!(screen.contains(" 1 "));
    assert!(screen.contains(" 3 "));
}

#[tokio::test]
async fn test_page_keys_request_adjacent_pages() {
    let (api, mut app) = new_app(23);
    app.mount();
    settle(&mut app).await;

    app.handle_event(key(KeyCode::Right));
    settle(&mut app).await;
    assert_eq!(app.view_state().page(), 2);

    app.handle_event(key(KeyCode::Char('3')));
    settle(&mut app).await;
    assert_eq!(app.view_state().page(), 3);

    // No page 4 for 23 questions
    app.handle_event(key(KeyCode::Right));
    settle(&mut app).await;

    assert_eq!(api.calls(), vec![Call::ListPage(1), Call::ListPage(2), Call::ListPage(3)]);
}

#[tokio::test]
async fn test_category_selection_hides_page_links() {
    let (api, mut app) = new_app(23);
    app.mount();
    settle(&mut app).await;

    // Second category in the sidebar
    app.handle_event(key(KeyCode::Char('J')));
    app.handle_event(key(KeyCode::Enter));
    settle(&mut app).await;

    assert_eq!(api.calls().last(), Some(&Call::ByCategory(2)));
    assert_eq!(app.view_state().mode(), DisplayMode::Category);
    assert!(screen(&mut app).contains("Category: 2 of 2 questions"));

    // Paging is ignored outside the paginated listing
    app.handle_event(key(KeyCode::Right));
    settle(&mut app).await;
    assert_eq!(api.calls().len(), 2);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let (api, mut app) = new_app(23);
    app.mount();
    settle(&mut app).await;

    app.handle_event(key(KeyCode::Char('d')));
    assert!(matches!(
        app.dialog(),
        Some(DialogType::DeleteConfirmation { question_id: 1, .. })
    ));

    // The confirmation is modal
    app.handle_event(key(KeyCode::Char('q')));
    assert!(!app.should_quit());

    app.handle_event(key(KeyCode::Char('n')));
    settle(&mut app).await;

    assert!(app.dialog().is_none());
    assert_eq!(api.calls(), vec![Call::ListPage(1)]);
}

#[tokio::test]
async fn test_confirmed_delete_reloads_current_page() {
    let (api, mut app) = new_app(23);
    app.mount();
    settle(&mut app).await;
    app.handle_event(key(KeyCode::Char('2')));
    settle(&mut app).await;

    app.handle_event(key(KeyCode::Char('j')));
    app.handle_event(key(KeyCode::Char('d')));
    app.handle_event(key(KeyCode::Char('y')));
    settle(&mut app).await;

    assert_eq!(
        api.calls(),
        vec![Call::ListPage(1), Call::ListPage(2), Call::Delete(12), Call::ListPage(2)]
    );
    assert_eq!(app.view_state().total_questions(), 22);
}

#[tokio::test]
async fn test_failure_shows_error_dialog_and_keeps_state() {
    let (api, mut app) = new_app(23);
    app.mount();
    settle(&mut app).await;
    let before = app.view_state().clone();

    api.set_failing(true);
    app.handle_event(key(KeyCode::Char('c')));
    settle(&mut app).await;

    assert_eq!(app.view_state(), &before);
    match app.dialog() {
        Some(DialogType::Error(message)) => assert_eq!(message, ERROR_REQUEST_FAILED),
        other => panic!("expected error dialog, got {:?}", other),
    }
    assert!(screen(&mut app).contains("Unable to load questions"));

    // Any key acknowledges the error
    app.handle_event(key(KeyCode::Enter));
    assert!(app.dialog().is_none());
}

#[tokio::test]
async fn test_failure_waits_for_open_search_dialog() {
    let (api, mut app) = new_app(23);
    app.mount();
    settle(&mut app).await;

    api.set_failing(true);
    app.handle_event(key(KeyCode::Char('c')));
    app.handle_event(key(KeyCode::Char('/')));
    app.handle_event(key(KeyCode::Char('w')));
    app.handle_event(key(KeyCode::Char('h')));
    settle(&mut app).await;

    // The typed term survives the failed refresh
    assert!(matches!(app.dialog(), Some(DialogType::Search)));
    assert_eq!(app.queued_alerts(), 1);

    api.set_failing(false);
    app.handle_event(key(KeyCode::Char('o')));
    app.handle_event(key(KeyCode::Enter));
    assert!(matches!(app.dialog(), Some(DialogType::Error(_))));
    settle(&mut app).await;

    assert_eq!(api.calls().last(), Some(&Call::Search("who".to_string())));
    app.handle_event(key(KeyCode::Enter));
    assert!(app.dialog().is_none());
    assert_eq!(app.queued_alerts(), 0);
}

#[tokio::test]
async fn test_failure_keeps_delete_confirmation_open() {
    let (api, mut app) = new_app(23);
    app.mount();
    settle(&mut app).await;

    api.set_failing(true);
    app.handle_event(key(KeyCode::Char('c')));
    app.handle_event(key(KeyCode::Char('d')));
    settle(&mut app).await;

    assert!(matches!(
        app.dialog(),
        Some(DialogType::DeleteConfirmation { question_id: 1, .. })
    ));

    api.set_failing(false);
    app.handle_event(key(KeyCode::Char('y')));
    settle(&mut app).await;

    let calls = api.calls();
    assert_eq!(&calls[calls.len() - 2..], &[Call::Delete(1), Call::ListPage(1)]);
    // The earlier failure is reported once the confirmation is answered
    assert!(matches!(app.dialog(), Some(DialogType::Error(_))));
    app.handle_event(key(KeyCode::Enter));
    assert!(app.dialog().is_none());
}

#[tokio::test]
async fn test_each_failure_is_acknowledged_separately() {
    let (api, mut app) = new_app(23);
    app.mount();
    settle(&mut app).await;

    api.set_failing(true);
    app.apply(Action::SelectCategory(1));
    app.apply(Action::SubmitSearch("x".to_string()));
    settle(&mut app).await;

    assert!(matches!(app.dialog(), Some(DialogType::Error(_))));
    assert_eq!(app.queued_alerts(), 1);

    app.handle_event(key(KeyCode::Enter));
    assert!(matches!(app.dialog(), Some(DialogType::Error(_))));
    assert_eq!(app.queued_alerts(), 0);

    app.handle_event(key(KeyCode::Enter));
    assert!(app.dialog().is_none());
}

#[tokio::test]
async fn test_search_dialog_submits_term() {
    let (api, mut app) = new_app(23);
    app.mount();
    settle(&mut app).await;

    app.handle_event(key(KeyCode::Char('/')));
    assert!(matches!(app.dialog(), Some(DialogType::Search)));
    for c in "who".chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
    app.handle_event(key(KeyCode::Enter));
    settle(&mut app).await;

    assert_eq!(api.calls().last(), Some(&Call::Search("who".to_string())));
    assert_eq!(app.view_state().mode(), DisplayMode::Search);
    assert!(app.dialog().is_none());
}

#[tokio::test]
async fn test_add_question_form_creates_and_reloads() {
    let (api, mut app) = new_app(5);
    app.mount();
    settle(&mut app).await;

    app.handle_event(key(KeyCode::Char('a')));
    assert!(matches!(app.dialog(), Some(DialogType::QuestionCreation { .. })));
    app.handle_event(key(KeyCode::Char('Q')));
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Char('A')));
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Right));
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Right));
    app.handle_event(key(KeyCode::Enter));
    settle(&mut app).await;

    let calls = api.calls();
    match &calls[1] {
        Call::Create(question) => {
            assert_eq!(question.question, "Q");
            assert_eq!(question.answer, "A");
            assert_eq!(question.category, 2);
            assert_eq!(question.difficulty, 2);
        }
        other => panic!("expected create, got {:?}", other),
    }
    assert_eq!(calls[2], Call::ListPage(1));
    assert_eq!(app.view_state().total_questions(), 6);
    match app.dialog() {
        Some(DialogType::Info(message)) => assert_eq!(message, INFO_QUESTION_CREATED),
        other => panic!("expected info dialog, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_question_is_rejected_locally() {
    let (api, mut app) = new_app(5);
    app.mount();
    settle(&mut app).await;

    app.apply(Action::CreateQuestion(trivialist::api::NewQuestion {
        question: String::new(),
        answer: "A".to_string(),
        category: 1,
        difficulty: 1,
    }));

    assert!(matches!(app.dialog(), Some(DialogType::Error(_))));
    assert_eq!(api.calls(), vec![Call::ListPage(1)]);
}

#[tokio::test]
async fn test_quit_key() {
    let (_api, mut app) = new_app(0);
    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

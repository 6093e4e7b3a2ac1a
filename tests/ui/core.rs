use crate::common::{Call, FakeApi};
use std::sync::Arc;
use std::time::Duration;
use trivialist::api::ApiError;
use trivialist::ui::core::{Action, EventHandler, TaskManager};
use trivialist::view::{QuestionView, Response};

#[tokio::test]
async fn test_spawned_request_reports_its_token() {
    let api = Arc::new(FakeApi::with_total(12));
    let (mut manager, mut rx) = TaskManager::new();
    let mut view = QuestionView::new();
    let ticket = view.select_page(2);
    let expected = ticket.token;

    manager.spawn_request(api.clone(), ticket);
    assert_eq!(manager.running_descriptions(), vec!["list page 2".to_string()]);

    match rx.recv().await {
        Some(Action::RequestCompleted { token, outcome }) => {
            assert_eq!(token, expected);
            match outcome {
                Ok(Response::Page(page)) => {
                    assert_eq!(page.questions.len(), 2);
                    assert_eq!(page.total_questions, 12);
                }
                other => panic!("expected a page, got {:?}", other),
            }
        }
        other => panic!("expected a completed request, got {:?}", other),
    }
    assert_eq!(api.calls(), vec![Call::ListPage(2)]);
}

#[tokio::test]
async fn test_failures_are_reported_not_dropped() {
    let api = Arc::new(FakeApi::with_total(12));
    api.set_failing(true);
    let (mut manager, mut rx) = TaskManager::new();
    let mut view = QuestionView::new();

    manager.spawn_request(api, view.submit_search("x"));

    match rx.recv().await {
        Some(Action::RequestCompleted { outcome, .. }) => {
            assert!(matches!(outcome, Err(ApiError::RequestFailed(_))));
        }
        other => panic!("expected a completed request, got {:?}", other),
    }
}

#[tokio::test]
async fn test_finished_tasks_are_cleaned_up() {
    let api: Arc<FakeApi> = Arc::new(FakeApi::with_total(3));
    let (mut manager, mut rx) = TaskManager::new();
    let mut view = QuestionView::new();

    manager.spawn_request(api.clone(), view.refresh());
    manager.spawn_request(api, view.select_category(1));
    assert_eq!(manager.task_count(), 2);

    rx.recv().await;
    rx.recv().await;

    let mut finished = Vec::new();
    for _ in 0..100 {
        finished.extend(manager.cleanup_finished_tasks());
        if manager.task_count() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    assert_eq!(finished.len(), 2);
    assert!(manager.running_descriptions().is_empty());
}

#[tokio::test]
async fn test_render_is_rate_limited() {
    let mut handler = EventHandler::new();
    handler.mark_rendered();
    assert!(!handler.should_render());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(handler.should_render());
}

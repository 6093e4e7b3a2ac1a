use super::actions::Action;
use crate::api::QuestionsApi;
use crate::view::Ticket;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs API requests off the UI loop and reports their outcomes as actions.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a background API request for `ticket`.
    ///
    /// The outcome, success or failure, is sent back as
    /// [`Action::RequestCompleted`] carrying the ticket's token.
    pub fn spawn_request(&mut self, api: Arc<dyn QuestionsApi>, ticket: Ticket) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = ticket.request.describe();

        let handle = tokio::spawn(async move {
            let Ticket { token, request } = ticket;
            let outcome = request.execute(api.as_ref()).await;
            let _ = action_sender.send(Action::RequestCompleted { token, outcome });
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<BackgroundTask> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        finished
            .into_iter()
            .filter_map(|task_id| self.tasks.remove(&task_id))
            .collect()
    }

    /// Descriptions of requests still in flight
    pub fn running_descriptions(&self) -> Vec<String> {
        let mut running: Vec<&BackgroundTask> = self.tasks.values().collect();
        running.sort_by_key(|task| task.id);
        running.iter().map(|task| task.description.clone()).collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}

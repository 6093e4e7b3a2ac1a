use crate::api::{CurrentCategory, QuestionsApi};
use crate::config::UiConfig;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::{CategorySidebar, DialogComponent, PaginationBar, QuestionList, StatusBar};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::constants::INFO_QUESTION_CREATED;
use crate::view::{
    is_selectable, Completion, DeleteConfirmation, DisplayMode, QuestionView, RequestKind, Ticket, ViewState,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    sidebar: CategorySidebar,
    question_list: QuestionList,
    pagination: PaginationBar,
    dialog: DialogComponent,

    // View state and the delete awaiting an answer
    view: QuestionView,
    pending_delete: Option<DeleteConfirmation>,
    // Alerts waiting for the open dialog to close, oldest first
    queued_dialogs: VecDeque<DialogType>,

    // Services
    api: Arc<dyn QuestionsApi>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    icons: IconService,

    sidebar_width: u16,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(api: Arc<dyn QuestionsApi>, ui: &UiConfig, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let icons = IconService::new(ui.icon_theme);

        let mut sidebar = CategorySidebar::new();
        sidebar.set_mouse_enabled(ui.mouse_enabled);
        let mut pagination = PaginationBar::new();
        pagination.set_mouse_enabled(ui.mouse_enabled);
        let mut question_list = QuestionList::new();
        question_list.show_answers = ui.show_answers;
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            sidebar,
            question_list,
            pagination,
            dialog,
            view: QuestionView::new(),
            pending_delete: None,
            queued_dialogs: VecDeque::new(),
            api,
            task_manager,
            background_action_rx,
            logger,
            icons,
            sidebar_width: ui.sidebar_width,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view_state(&self) -> &ViewState {
        self.view.state()
    }

    pub fn dialog(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    /// Number of alerts still waiting to be shown
    pub fn queued_alerts(&self) -> usize {
        self.queued_dialogs.len()
    }

    /// Check if any requests are in flight
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Load the first page when the view is first shown
    pub fn mount(&mut self) {
        self.logger.log("Mounting question view".to_string());
        let ticket = self.view.mount();
        self.spawn(ticket);
    }

    fn spawn(&mut self, ticket: Ticket) {
        self.logger.log(format!("Request: {}", ticket.request.describe()));
        self.task_manager.spawn_request(Arc::clone(&self.api), ticket);
    }

    fn sync_component_data(&mut self) {
        let state = self.view.state();

        let active_category = match (state.mode(), state.current_category()) {
            (DisplayMode::Category, Some(CurrentCategory::Id(id))) => Some(*id),
            _ => None,
        };
        self.sidebar.update_data(state.categories(), active_category);
        self.sidebar.icons = self.icons.clone();

        let title = match state.mode() {
            DisplayMode::Uninitialized => "Questions".to_string(),
            DisplayMode::Paginated => format!("Questions - page {}", state.page()),
            DisplayMode::Category => format!(
                "Questions - {}",
                state.current_category_label().unwrap_or_else(|| "category".to_string())
            ),
            DisplayMode::Search => "Search results".to_string(),
        };
        self.question_list.update_data(state.questions(), state.categories(), title);
        self.question_list.icons = self.icons.clone();

        self.pagination.update_data(state);

        self.dialog.update_data(state.categories());
        self.dialog.icons = self.icons.clone();
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('/') => Action::ShowDialog(DialogType::Search),
            KeyCode::Char('a') => Action::ShowDialog(DialogType::QuestionCreation {
                default_category: self.sidebar.selected_category(),
            }),
            KeyCode::Char('c') | KeyCode::Home => Action::Refresh,
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Handle app-level actions that drive the question view.
    ///
    /// Returns a follow-up action for the component chain, such as an error
    /// dialog, or [`Action::None`].
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Refresh => {
                let ticket = self.view.refresh();
                self.spawn(ticket);
                Action::None
            }
            Action::SelectPage(page) => {
                if is_selectable(self.view.state(), page) {
                    let ticket = self.view.select_page(page);
                    self.spawn(ticket);
                } else {
                    self.logger.log(format!("Ignoring selection of unavailable page {}", page));
                }
                Action::None
            }
            Action::NextPage => {
                if let Some(ticket) = self.view.next_page() {
                    self.spawn(ticket);
                }
                Action::None
            }
            Action::PreviousPage => {
                if let Some(ticket) = self.view.previous_page() {
                    self.spawn(ticket);
                }
                Action::None
            }
            Action::SelectCategory(category) => {
                let ticket = self.view.select_category(category);
                self.spawn(ticket);
                Action::None
            }
            Action::SubmitSearch(term) => {
                let ticket = self.view.submit_search(term);
                self.spawn(ticket);
                Action::None
            }
            Action::RequestDelete(question_id) => {
                let preview = self
                    .view
                    .state()
                    .questions()
                    .iter()
                    .find(|question| question.id == question_id)
                    .map(|question| question.question.clone())
                    .unwrap_or_default();
                let confirmation = self.view.request_delete(question_id);
                let dialog = DialogType::DeleteConfirmation {
                    question_id,
                    preview,
                    message: confirmation.message,
                };
                self.pending_delete = Some(confirmation);
                Action::ShowDialog(dialog)
            }
            Action::ConfirmDelete(question_id) => {
                match self.pending_delete.take() {
                    Some(confirmation) if confirmation.question_id == question_id => {
                        if let Some(ticket) = self.view.resolve_delete(confirmation, true) {
                            self.spawn(ticket);
                        }
                    }
                    _ => self
                        .logger
                        .log(format!("Ignoring unrequested delete of question {}", question_id)),
                }
                Action::None
            }
            Action::HideDialog => {
                if let Some(confirmation) = self.pending_delete.take() {
                    let question_id = confirmation.question_id;
                    self.view.resolve_delete(confirmation, false);
                    self.logger.log(format!("Delete of question {} cancelled", question_id));
                }
                Action::None
            }
            Action::CreateQuestion(question) => match self.view.create_question(question) {
                Ok(ticket) => {
                    self.spawn(ticket);
                    Action::None
                }
                Err(e) => {
                    self.queued_dialogs.push_back(DialogType::Error(e.to_string()));
                    Action::None
                }
            },
            Action::RequestCompleted { token, outcome } => match self.view.complete(token, outcome) {
                Completion::Updated => Action::None,
                Completion::Discarded => {
                    self.logger.log(format!("Discarded stale {:?} response #{}", token.kind, token.seq));
                    Action::None
                }
                Completion::FollowUp(ticket) => {
                    if token.kind == RequestKind::Create {
                        self.queued_dialogs
                            .push_back(DialogType::Info(INFO_QUESTION_CREATED.to_string()));
                    }
                    self.spawn(ticket);
                    Action::None
                }
                Completion::Failed(notification) => {
                    self.logger.log(format!("Request failed: {}", notification.detail));
                    // Every failure gets its own alert; none replaces an open dialog
                    self.queued_dialogs
                        .push_back(DialogType::Error(notification.message.to_string()));
                    Action::None
                }
            },
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("Icon theme: {:?}", self.icons.theme()));
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Run `action` through the components and the app until nothing is left,
    /// then show the next queued alert if no dialog is open
    pub fn apply(&mut self, action: Action) {
        let mut action = action;
        loop {
            while !matches!(action, Action::None) {
                let remaining = self.update(action);
                action = self.handle_app_action(remaining);
            }

            if self.dialog.is_visible() {
                break;
            }
            match self.queued_dialogs.pop_front() {
                Some(dialog) => action = Action::ShowDialog(dialog),
                None => break,
            }
        }
        self.sync_component_data();
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        for task in completed_tasks {
            self.logger.log(format!(
                "Background: '{}' finished in {}ms",
                task.description,
                task.started_at.elapsed().as_millis()
            ));
        }

        actions
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Mouse(mouse) if !self.dialog.is_visible() => {
                let sidebar_action = self.sidebar.handle_mouse_events(mouse);
                if matches!(sidebar_action, Action::None) {
                    self.pagination.handle_mouse_events(mouse)
                } else {
                    sidebar_action
                }
            }
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialogs are modal
                    self.dialog.handle_key_events(key)
                } else {
                    self.route_key(key)
                }
            }
            _ => Action::None,
        };

        self.apply(action);
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_global_key(key);
        }

        let sidebar_action = self.sidebar.handle_key_events(key);
        if !matches!(sidebar_action, Action::None) {
            return sidebar_action;
        }

        let list_action = self.question_list.handle_key_events(key);
        if !matches!(list_action, Action::None) {
            return list_action;
        }

        let pagination_action = self.pagination.handle_key_events(key);
        if !matches!(pagination_action, Action::None) {
            return pagination_action;
        }

        self.handle_global_key(key)
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);
        let action = self.question_list.update(action);
        self.pagination.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::view_areas(rect, self.sidebar_width);

        self.sidebar.render(f, areas.sidebar);
        self.question_list.render(f, areas.questions);
        self.pagination.render(f, areas.pagination);
        StatusBar::render(f, areas.status, self.view.state(), &self.task_manager.running_descriptions());

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

use crate::api::QuestionsApi;
use crate::config::UiConfig;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;

/// Run the question view until the user quits
pub async fn run_app(api: Arc<dyn QuestionsApi>, ui: &UiConfig, logger: Logger) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    logger.log(format!("Using API at {}", api.base_url()));
    let mut app = AppComponent::new(api, ui, logger);
    let mut event_handler = EventHandler::new();

    app.mount();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        let event = event_handler.next_event().await?;

        match event {
            EventType::Key(_) | EventType::Mouse(_) | EventType::Resize(_, _) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                let background_actions = app.process_background_actions();
                if !background_actions.is_empty() {
                    for action in background_actions {
                        app.apply(action);
                    }
                    needs_render = true;
                } else if app.is_busy() {
                    // Keep the in-flight request list in the status bar current
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;

use super::app::{Action, InteractiveApp};
use super::event::{Event, EventHandler};
use crate::cli_context::CliContext;
use crate::controller::{ChannelReloader, PageController};
use crate::error::{TeamError, TeamResult};
use crate::logging::{log_debug, log_error, log_info, set_echo_stderr};
use crate::page::PageTemplate;
use crate::pagination::BuiltinPaginator;

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn terminal_error(e: io::Error) -> TeamError {
    TeamError::TerminalError(e.to_string())
}

pub async fn run_interactive_mode(
    context: &mut CliContext,
    template: PageTemplate,
    users_file: Option<PathBuf>,
) -> TeamResult<()> {
    log_info("Starting interactive mode");
    // stderr would draw over the screen
    set_echo_stderr(false);

    let client = context.client()?;
    let (reloader, reload_rx) = ChannelReloader::new();
    let controller =
        PageController::new(template.render().into_shared(), client, Arc::new(reloader))
            .with_paginator(Arc::new(BuiltinPaginator));

    let mut app = InteractiveApp::new(
        Arc::new(controller),
        template,
        users_file,
        context.base_url(),
    );
    app.dispatch(Action::Load);

    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(terminal_error)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(terminal_error)?;
    log_debug("Terminal initialized");

    let result = run_event_loop(&mut terminal, &mut app, reload_rx).await;
    if let Err(e) = &result {
        log_error(&format!("Interactive mode failed: {}", e));
    }

    log_info("Exiting interactive mode");
    disable_raw_mode().map_err(terminal_error)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;

    result
}

async fn run_event_loop(
    terminal: &mut CrosstermTerminal,
    app: &mut InteractiveApp,
    mut reload_rx: UnboundedReceiver<()>,
) -> TeamResult<()> {
    let mut events = EventHandler::new(100);

    loop {
        terminal
            .draw(|f| super::ui::draw(f, app))
            .map_err(terminal_error)?;

        tokio::select! {
            Some(event) = events.next() => match event {
                Event::Key(key_event) => {
                    log_debug(&format!("Key pressed: {:?}, Mode: {:?}", key_event.code, app.mode));
                    if let Some(action) = app.handle_key(key_event.code) {
                        app.dispatch(action);
                    }
                }
                Event::Tick => {}
            },
            Some(()) = reload_rx.recv() => {
                log_debug("Reload requested");
                app.reload();
            }
            else => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

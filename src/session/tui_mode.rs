//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::ui::{self, UIConfig};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the interactive dashboard until the user quits.
///
/// Sets up the terminal, runs the UI loop and always restores the terminal,
/// even when the loop failed.
pub async fn run_tui_mode(session: SessionData, with_background: bool) -> Result<(), Box<dyn Error>> {
    print_session_starting(&session.environment);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(
        session.environment,
        Box::new(session.client),
        UIConfig::new(with_background),
    );
    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    print_session_exit_success();
    Ok(())
}

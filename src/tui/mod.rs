//! Terminal User Interface (TUI) for the focus timer.
//!
//! Draws the countdown and maps key presses onto timer operations.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, RunSummary};

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::debug;

use crate::error::HabitflowError;
use crate::features::focus::FocusController;

/// Run the interactive timer until the user quits.
///
/// Any session still open on quit is stopped and saved first.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn.
pub fn run(controller: FocusController, bell: bool) -> Result<RunSummary, HabitflowError> {
    enable_raw_mode()
        .map_err(|e| HabitflowError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| HabitflowError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| HabitflowError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(controller);
    let result = run_app(&mut terminal, &mut app, bell);

    // finalize the open session even when drawing failed
    if !app.should_quit {
        app.quit();
    }

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.map(|()| app.summary)
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    bell: bool,
) -> Result<(), HabitflowError> {
    debug!("focus timer started");
    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| HabitflowError::Terminal(format!("Failed to draw: {e}")))?;

        event::handle_events(app)?;
        app.on_tick();

        if app.take_bell() && bell {
            ring_bell();
        }
    }
    debug!(sessions = app.summary.sessions.len(), "focus timer closed");
    Ok(())
}

fn ring_bell() {
    let mut out = io::stdout();
    out.write_all(b"\x07").and_then(|()| out.flush()).ok();
}

//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::HabitflowError;
use crate::tui::app::App;

const MAX_POLL: Duration = Duration::from_millis(100);

/// Action requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Start,
    TogglePause,
    Skip,
    Stop,
    FocusLonger,
    FocusShorter,
    BreakLonger,
    BreakShorter,
    Help,
}

/// Map a key press to an action.
#[must_use]
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('s') => Some(Action::Start),
        KeyCode::Char('p' | ' ') => Some(Action::TogglePause),
        KeyCode::Char('n') => Some(Action::Skip),
        KeyCode::Char('x') => Some(Action::Stop),
        KeyCode::Char('+' | '=') => Some(Action::FocusLonger),
        KeyCode::Char('-') => Some(Action::FocusShorter),
        KeyCode::Char(']') => Some(Action::BreakLonger),
        KeyCode::Char('[') => Some(Action::BreakShorter),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}

/// Wait for input until the next tick is due, then apply any key pressed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<(), HabitflowError> {
    let timeout = app
        .controller()
        .until_next_tick()
        .map_or(MAX_POLL, |d| d.min(MAX_POLL));

    if !event::poll(timeout)
        .map_err(|e| HabitflowError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(());
    }

    if let Event::Key(key) =
        event::read().map_err(|e| HabitflowError::Terminal(format!("Event read failed: {e}")))?
    {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if let Some(action) = action_for(key) {
            apply(app, action);
        }
    }
    Ok(())
}

/// Apply an action to the app.
pub fn apply(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.quit(),
        Action::Start => app.start(),
        Action::TogglePause => app.toggle_pause(),
        Action::Skip => app.skip(),
        Action::Stop => app.stop(),
        Action::FocusLonger => app.adjust_focus(1),
        Action::FocusShorter => app.adjust_focus(-1),
        Action::BreakLonger => app.adjust_break(1),
        Action::BreakShorter => app.adjust_break(-1),
        Action::Help => app.show_help(),
    }
}

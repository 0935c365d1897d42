//! Application state for the focus timer TUI.

use serde::Serialize;

use crate::features::focus::{FocusController, Mode, Session, TimerEvent, Transition};

/// What happened during one run of the timer.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    /// Sessions finalized and saved
    pub sessions: Vec<Session>,
    /// Sessions whose end could not be saved
    pub unrecorded: usize,
}

/// Application state.
pub struct App {
    controller: FocusController,
    /// Status message to display.
    pub status: Option<String>,
    /// Sessions recorded so far.
    pub summary: RunSummary,
    /// Whether the app should quit.
    pub should_quit: bool,
    bell_pending: bool,
}

impl App {
    /// Create a new app around an idle controller.
    #[must_use]
    pub fn new(controller: FocusController) -> Self {
        Self {
            controller,
            status: Some("Press s to start, ? for help".to_string()),
            summary: RunSummary::default(),
            should_quit: false,
            bell_pending: false,
        }
    }

    /// The timer being driven.
    #[must_use]
    pub const fn controller(&self) -> &FocusController {
        &self.controller
    }

    /// Start a session.
    pub fn start(&mut self) {
        let outcome = self.controller.start();
        match outcome {
            Transition::Rejected => self.reject("start"),
            Transition::Unrecorded(e) => {
                self.status = Some(format!("Focus started, but the start was not saved: {e}"));
            }
            Transition::Applied | Transition::Finished(_) => {
                self.status = Some("Focus started".to_string());
            }
        }
    }

    /// Pause, or resume if already paused.
    pub fn toggle_pause(&mut self) {
        if self.controller.mode() == Mode::Paused {
            if self.controller.resume().is_applied() {
                self.status = Some("Resumed".to_string());
            }
        } else if self.controller.pause().is_applied() {
            self.status = Some("Paused".to_string());
        } else {
            self.reject("pause");
        }
    }

    /// Jump to the other phase.
    pub fn skip(&mut self) {
        if self.controller.skip().is_applied() {
            self.status = Some(format!("Skipped to {}", self.controller.mode()));
        } else {
            self.reject("skip");
        }
    }

    /// Stop and save the open session.
    pub fn stop(&mut self) {
        let outcome = self.controller.stop();
        if outcome.is_applied() {
            self.record_end(outcome, "Stopped");
        } else {
            self.reject("stop");
        }
    }

    /// Change the focus length by `delta` minutes. Only while idle.
    pub fn adjust_focus(&mut self, delta: i32) {
        let current = self.controller.settings().focus_minutes();
        let target = current.saturating_add_signed(delta);
        if self.controller.set_focus_minutes(target) {
            self.status = Some(format!("Focus length: {target} min"));
        } else {
            self.reject_setting("focus", target);
        }
    }

    /// Change the break length by `delta` minutes. Only while idle.
    pub fn adjust_break(&mut self, delta: i32) {
        let current = self.controller.settings().break_minutes();
        let target = current.saturating_add_signed(delta);
        if self.controller.set_break_minutes(target) {
            self.status = Some(format!("Break length: {target} min"));
        } else {
            self.reject_setting("break", target);
        }
    }

    /// Stop any open session and leave.
    pub fn quit(&mut self) {
        if self.controller.mode() != Mode::Idle {
            let outcome = self.controller.stop();
            self.record_end(outcome, "Stopped");
        }
        self.should_quit = true;
    }

    /// Apply due ticks and react to phase changes.
    pub fn on_tick(&mut self) {
        for event in self.controller.pump() {
            self.bell_pending = true;
            match event {
                TimerEvent::BreakStarted => {
                    self.status = Some("Focus done. Time for a break!".to_string());
                }
                TimerEvent::CycleCompleted(outcome) => {
                    self.record_end(outcome, "Break over");
                }
            }
        }
    }

    /// Whether a bell is owed since the last call.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    /// Show the key help in the status line.
    pub fn show_help(&mut self) {
        self.status = Some(
            "s:start | p:pause/resume | n:skip | x:stop | +/-:focus | ]/[:break | q:quit"
                .to_string(),
        );
    }

    fn record_end(&mut self, outcome: Transition, label: &str) {
        match outcome {
            Transition::Finished(session) => {
                let minutes = session.duration_minutes.unwrap_or(0);
                self.status = Some(format!("{label}. Session saved ({minutes} min)"));
                self.summary.sessions.push(session);
            }
            Transition::Unrecorded(e) => {
                self.summary.unrecorded += 1;
                self.status = Some(format!("{label}. Session not saved: {e}"));
            }
            Transition::Applied => self.status = Some(label.to_string()),
            Transition::Rejected => {}
        }
    }

    fn reject(&mut self, action: &str) {
        self.status = Some(format!(
            "Can't {action} while {}",
            self.controller.mode().to_string().to_lowercase()
        ));
    }

    fn reject_setting(&mut self, phase: &str, minutes: u32) {
        self.status = Some(if self.controller.mode() == Mode::Idle {
            format!("{phase} length must stay between 1 and 60 minutes (got {minutes})")
        } else {
            format!("Stop the timer to change the {phase} length")
        });
    }
}

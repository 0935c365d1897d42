//! The focus timer state machine.
//!
//! ```text
//!          start            tick to 0           tick to 0
//!   idle --------> focus -------------> break -------------> idle
//!                   |  ^                 |  ^
//!             pause |  | resume    pause |  | resume
//!                   v  |                 v  |
//!                  paused               paused
//! ```
//!
//! `stop` returns to idle from anywhere else and finalizes the open session.
//! `skip` jumps between focus and break without closing the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::clock::{Clock, IntervalTicker, SystemClock, Ticker};
use super::format::format_duration_mmss;
use super::recorder::SessionRecorder;
use super::session::{Session, SessionId};
use crate::config::{FocusConfig, MAX_PHASE_MINUTES, MIN_PHASE_MINUTES};
use crate::error::HabitflowError;

/// A countdown phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Working
    Focus,
    /// Resting
    Break,
}

/// What the timer is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// No session open
    Idle,
    /// Counting down a focus phase
    Focus,
    /// Counting down a break phase
    Break,
    /// Countdown suspended
    Paused,
}

impl From<Phase> for Mode {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Focus => Self::Focus,
            Phase::Break => Self::Break,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Idle => "Idle",
            Self::Focus => "Focus",
            Self::Break => "Break",
            Self::Paused => "Paused",
        };
        write!(f, "{label}")
    }
}

/// Phase lengths, validated to `1..=60` minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    focus_minutes: u32,
    break_minutes: u32,
}

impl TimerSettings {
    /// Validate and build settings.
    ///
    /// # Errors
    ///
    /// Returns `HabitflowError::InvalidInput` if either length is out of range.
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Result<Self, HabitflowError> {
        for (name, minutes) in [("focus", focus_minutes), ("break", break_minutes)] {
            if !minutes_in_range(minutes) {
                return Err(HabitflowError::InvalidInput(format!(
                    "{name} length must be between {MIN_PHASE_MINUTES} and {MAX_PHASE_MINUTES} minutes, got {minutes}"
                )));
            }
        }
        Ok(Self {
            focus_minutes,
            break_minutes,
        })
    }

    /// Focus length in minutes.
    #[must_use]
    pub const fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    /// Break length in minutes.
    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_minutes
    }
}

impl TryFrom<&FocusConfig> for TimerSettings {
    type Error = HabitflowError;

    fn try_from(config: &FocusConfig) -> Result<Self, Self::Error> {
        Self::new(config.focus_minutes, config.break_minutes)
    }
}

const fn minutes_in_range(minutes: u32) -> bool {
    minutes >= MIN_PHASE_MINUTES && minutes <= MAX_PHASE_MINUTES
}

/// Outcome of a timer operation.
///
/// Invalid operations change nothing and report `Rejected`. A recorder
/// failure never undoes the local transition; it is reported as `Unrecorded`.
#[derive(Debug)]
#[must_use]
pub enum Transition {
    /// Not valid in the current mode; nothing changed
    Rejected,
    /// Applied
    Applied,
    /// Applied, and the open session was finalized and recorded
    Finished(Session),
    /// Applied, but the session recorder failed
    Unrecorded(HabitflowError),
}

impl Transition {
    /// Whether the mode machine moved.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        !matches!(self, Self::Rejected)
    }

    /// The recorder failure, if any.
    #[must_use]
    pub const fn recorder_error(&self) -> Option<&HabitflowError> {
        match self {
            Self::Unrecorded(e) => Some(e),
            _ => None,
        }
    }
}

/// Something the countdown did on its own.
#[derive(Debug)]
pub enum TimerEvent {
    /// Focus ran out and the break began
    BreakStarted,
    /// Break ran out; the timer is idle again
    CycleCompleted(Transition),
}

/// Drives the focus/break countdown and reports session boundaries.
pub struct FocusController {
    recorder: Box<dyn SessionRecorder>,
    clock: Box<dyn Clock>,
    ticker: Box<dyn Ticker>,
    settings: TimerSettings,
    mode: Mode,
    paused_from: Option<Phase>,
    remaining_seconds: u32,
    phase_seconds: u32,
    open_session: Option<DateTime<Utc>>,
    session_id: Option<SessionId>,
}

impl FocusController {
    /// Create an idle controller.
    #[must_use]
    pub fn new(
        settings: TimerSettings,
        recorder: Box<dyn SessionRecorder>,
        clock: Box<dyn Clock>,
        ticker: Box<dyn Ticker>,
    ) -> Self {
        let phase_seconds = settings.focus_minutes * 60;
        Self {
            recorder,
            clock,
            ticker,
            settings,
            mode: Mode::Idle,
            paused_from: None,
            remaining_seconds: phase_seconds,
            phase_seconds,
            open_session: None,
            session_id: None,
        }
    }

    /// Create an idle controller on wall-clock time with a one-second ticker.
    #[must_use]
    pub fn with_system_clock(settings: TimerSettings, recorder: Box<dyn SessionRecorder>) -> Self {
        Self::new(
            settings,
            recorder,
            Box::new(SystemClock),
            Box::new(IntervalTicker::every_second()),
        )
    }

    /// Open a session and begin focusing. Only valid while idle.
    pub fn start(&mut self) -> Transition {
        if self.mode != Mode::Idle {
            debug!(mode = %self.mode, "start ignored");
            return Transition::Rejected;
        }

        let started_at = self.clock.now();
        self.open_session = Some(started_at);
        self.session_id = None;
        let recorded = self.recorder.start_session(started_at);

        self.enter_phase(Phase::Focus);
        debug!(%started_at, "focus started");

        match recorded {
            Ok(id) => {
                self.session_id = Some(id);
                Transition::Applied
            }
            Err(e) => {
                warn!(error = %e, "failed to record session start");
                Transition::Unrecorded(e)
            }
        }
    }

    /// Suspend the countdown. Only valid in focus or break.
    pub fn pause(&mut self) -> Transition {
        let Some(phase) = self.active_phase() else {
            debug!(mode = %self.mode, "pause ignored");
            return Transition::Rejected;
        };

        self.ticker.disarm();
        self.paused_from = Some(phase);
        self.mode = Mode::Paused;
        debug!(remaining = self.remaining_seconds, "paused");
        Transition::Applied
    }

    /// Continue the countdown in the phase that was paused.
    pub fn resume(&mut self) -> Transition {
        if self.mode != Mode::Paused {
            debug!(mode = %self.mode, "resume ignored");
            return Transition::Rejected;
        }

        let phase = self.paused_from.take().unwrap_or(Phase::Focus);
        self.mode = phase.into();
        self.ticker.arm();
        debug!(mode = %self.mode, remaining = self.remaining_seconds, "resumed");
        Transition::Applied
    }

    /// Return to idle, finalizing the open session.
    pub fn stop(&mut self) -> Transition {
        if self.mode == Mode::Idle {
            debug!("stop ignored while idle");
            return Transition::Rejected;
        }

        self.ticker.disarm();
        let outcome = self.finish_session();
        self.reset_to_idle();
        debug!("stopped");
        outcome
    }

    /// Jump to the other phase early: focus to break, or break to focus.
    ///
    /// The session stays open and the new phase starts from its full length.
    pub fn skip(&mut self) -> Transition {
        let next = match self.mode {
            Mode::Focus => Phase::Break,
            Mode::Break => Phase::Focus,
            Mode::Idle | Mode::Paused => {
                debug!(mode = %self.mode, "skip ignored");
                return Transition::Rejected;
            }
        };

        self.enter_phase(next);
        debug!(mode = %self.mode, "skipped to next phase");
        Transition::Applied
    }

    /// Apply every tick that came due since the last call.
    ///
    /// Ticks left over after the countdown returns to idle are dropped.
    pub fn pump(&mut self) -> Vec<TimerEvent> {
        let due = self.ticker.due_ticks();
        let mut events = Vec::new();

        for _ in 0..due {
            if !self.ticker.is_armed() {
                break;
            }
            if let Some(event) = self.tick() {
                events.push(event);
            }
        }
        events
    }

    fn tick(&mut self) -> Option<TimerEvent> {
        let phase = self.active_phase()?;

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        trace!(remaining = self.remaining_seconds, "tick");
        if self.remaining_seconds > 0 {
            return None;
        }

        match phase {
            Phase::Focus => {
                // keep the ticker's cadence across the boundary
                self.set_phase(Phase::Break);
                debug!("focus complete, break started");
                Some(TimerEvent::BreakStarted)
            }
            Phase::Break => {
                self.ticker.disarm();
                let outcome = self.finish_session();
                self.reset_to_idle();
                debug!("break complete, cycle finished");
                Some(TimerEvent::CycleCompleted(outcome))
            }
        }
    }

    /// Set the focus length. Only accepted while idle and within `1..=60`.
    pub fn set_focus_minutes(&mut self, minutes: u32) -> bool {
        if self.mode != Mode::Idle || !minutes_in_range(minutes) {
            debug!(minutes, mode = %self.mode, "focus length change rejected");
            return false;
        }
        self.settings.focus_minutes = minutes;
        self.reset_to_idle();
        true
    }

    /// Set the break length. Only accepted while idle and within `1..=60`.
    pub fn set_break_minutes(&mut self, minutes: u32) -> bool {
        if self.mode != Mode::Idle || !minutes_in_range(minutes) {
            debug!(minutes, mode = %self.mode, "break length change rejected");
            return false;
        }
        self.settings.break_minutes = minutes;
        true
    }

    fn active_phase(&self) -> Option<Phase> {
        match self.mode {
            Mode::Focus => Some(Phase::Focus),
            Mode::Break => Some(Phase::Break),
            Mode::Idle | Mode::Paused => None,
        }
    }

    fn phase_length(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Focus => self.settings.focus_minutes * 60,
            Phase::Break => self.settings.break_minutes * 60,
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        self.mode = phase.into();
        self.paused_from = None;
        self.phase_seconds = self.phase_length(phase);
        self.remaining_seconds = self.phase_seconds;
    }

    fn enter_phase(&mut self, phase: Phase) {
        self.set_phase(phase);
        self.ticker.arm();
    }

    fn reset_to_idle(&mut self) {
        self.mode = Mode::Idle;
        self.paused_from = None;
        self.phase_seconds = self.phase_length(Phase::Focus);
        self.remaining_seconds = self.phase_seconds;
    }

    fn finish_session(&mut self) -> Transition {
        let Some(started_at) = self.open_session.take() else {
            return Transition::Applied;
        };
        self.session_id = None;

        let ended_at = self.clock.now();
        match self.recorder.end_session(started_at, ended_at) {
            Ok(session) => Transition::Finished(session),
            Err(e) => {
                warn!(error = %e, "failed to record session end");
                Transition::Unrecorded(e)
            }
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The phase being counted down, or the one a pause will resume.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.active_phase().or(self.paused_from)
    }

    /// Seconds left in the current phase.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_duration_mmss(chrono::Duration::seconds(i64::from(self.remaining_seconds)))
    }

    /// Fraction of the current phase already elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.mode == Mode::Idle || self.phase_seconds == 0 {
            return 0.0;
        }
        1.0 - f64::from(self.remaining_seconds) / f64::from(self.phase_seconds)
    }

    /// Configured phase lengths.
    #[must_use]
    pub const fn settings(&self) -> TimerSettings {
        self.settings
    }

    /// Start time of the open session.
    #[must_use]
    pub const fn open_session_start(&self) -> Option<DateTime<Utc>> {
        self.open_session
    }

    /// Recorder ID of the open session, if its start was recorded.
    #[must_use]
    pub const fn session_id(&self) -> Option<SessionId> {
        self.session_id
    }

    /// Time until the next tick, if the countdown is running.
    #[must_use]
    pub fn until_next_tick(&self) -> Option<std::time::Duration> {
        self.ticker.until_next()
    }

    /// The session recorder, for history queries.
    #[must_use]
    pub fn recorder(&self) -> &dyn SessionRecorder {
        self.recorder.as_ref()
    }
}

impl Drop for FocusController {
    fn drop(&mut self) {
        self.ticker.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::clock::VirtualClock;
    use crate::features::focus::recorder::MockSessionRecorder;
    use crate::features::focus::storage::FocusStorage;
    use crate::storage::Database;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap()
    }

    fn controller_with(
        recorder: Box<dyn SessionRecorder>,
        focus: u32,
        brk: u32,
    ) -> (FocusController, VirtualClock) {
        let clock = VirtualClock::starting_at(t0());
        let controller = FocusController::new(
            TimerSettings::new(focus, brk).unwrap(),
            recorder,
            Box::new(clock.clone()),
            Box::new(clock.clone()),
        );
        (controller, clock)
    }

    fn controller(focus: u32, brk: u32) -> (FocusController, VirtualClock) {
        let storage = FocusStorage::with_database(Database::open_in_memory().unwrap());
        controller_with(Box::new(storage), focus, brk)
    }

    fn advance(controller: &mut FocusController, clock: &VirtualClock, secs: u32) -> Vec<TimerEvent> {
        clock.advance(secs);
        controller.pump()
    }

    #[test]
    fn test_new_controller_is_idle() {
        let (controller, _) = controller(25, 5);
        assert_eq!(controller.mode(), Mode::Idle);
        assert_eq!(controller.remaining_seconds(), 25 * 60);
        assert_eq!(controller.format_remaining(), "25:00");
        assert_eq!(controller.phase(), None);
        assert!(controller.open_session_start().is_none());
    }

    #[test]
    fn test_full_cycle_records_one_session() {
        let (mut c, clock) = controller(1, 1);

        assert!(matches!(c.start(), Transition::Applied));
        assert_eq!(c.mode(), Mode::Focus);
        assert_eq!(c.remaining_seconds(), 60);
        assert!(c.session_id().is_some());

        for expected in (1..60).rev() {
            assert!(advance(&mut c, &clock, 1).is_empty());
            assert_eq!(c.mode(), Mode::Focus);
            assert_eq!(c.remaining_seconds(), expected);
        }

        let events = advance(&mut c, &clock, 1);
        assert!(matches!(events.as_slice(), [TimerEvent::BreakStarted]));
        assert_eq!(c.mode(), Mode::Break);
        assert_eq!(c.remaining_seconds(), 60);

        let events = advance(&mut c, &clock, 60);
        assert_eq!(events.len(), 1);
        let TimerEvent::CycleCompleted(Transition::Finished(session)) = &events[0] else {
            panic!("expected a finished cycle, got {events:?}");
        };
        assert_eq!(session.started_at, t0());
        assert_eq!(session.duration_minutes, Some(2));

        assert_eq!(c.mode(), Mode::Idle);
        assert_eq!(c.remaining_seconds(), 60);
        assert!(!clock.is_armed());

        let sessions = c.recorder().list_sessions().unwrap();
        assert_eq!(sessions.len(), 1);
        assert!(sessions[0].is_finalized());
        assert_eq!(sessions[0].duration_minutes, Some(2));
    }

    #[test]
    fn test_pause_and_resume_keep_remaining() {
        let (mut c, clock) = controller(25, 5);
        let _ = c.start();
        advance(&mut c, &clock, 10);

        assert!(c.pause().is_applied());
        assert_eq!(c.mode(), Mode::Paused);
        assert_eq!(c.remaining_seconds(), 25 * 60 - 10);
        assert_eq!(c.phase(), Some(Phase::Focus));

        // time passing while paused does not count down
        advance(&mut c, &clock, 30);
        assert_eq!(c.remaining_seconds(), 25 * 60 - 10);

        assert!(c.resume().is_applied());
        assert_eq!(c.mode(), Mode::Focus);
        assert_eq!(c.remaining_seconds(), 25 * 60 - 10);

        advance(&mut c, &clock, 1);
        assert_eq!(c.remaining_seconds(), 25 * 60 - 11);
    }

    #[test]
    fn test_resume_returns_to_break() {
        let (mut c, clock) = controller(1, 2);
        let _ = c.start();
        advance(&mut c, &clock, 60);
        advance(&mut c, &clock, 5);
        assert_eq!(c.mode(), Mode::Break);

        let _ = c.pause();
        assert_eq!(c.phase(), Some(Phase::Break));
        let _ = c.resume();
        assert_eq!(c.mode(), Mode::Break);
        assert_eq!(c.remaining_seconds(), 115);
    }

    #[test]
    fn test_immediate_stop_records_zero_length_session() {
        let (mut c, _clock) = controller(25, 5);
        let _ = c.start();

        let Transition::Finished(session) = c.stop() else {
            panic!("expected finished session");
        };
        assert_eq!(session.started_at, session.ended_at.unwrap());
        assert_eq!(session.duration_minutes, Some(0));

        assert_eq!(c.recorder().list_sessions().unwrap().len(), 1);
    }

    #[test]
    fn test_stop_from_every_active_mode_resets() {
        for setup in ["focus", "break", "paused-focus", "paused-break"] {
            let (mut c, clock) = controller(2, 1);
            let _ = c.start();
            advance(&mut c, &clock, 7);
            if setup.ends_with("break") {
                advance(&mut c, &clock, 120);
                assert_eq!(c.mode(), Mode::Break, "{setup}");
            }
            if setup.starts_with("paused") {
                let _ = c.pause();
            }

            assert!(matches!(c.stop(), Transition::Finished(_)), "{setup}");
            assert_eq!(c.mode(), Mode::Idle, "{setup}");
            assert_eq!(c.remaining_seconds(), 120, "{setup}");
            assert!(!clock.is_armed(), "{setup}");
        }
    }

    #[test]
    fn test_invalid_transitions_are_rejected() {
        let (mut c, clock) = controller(25, 5);

        assert!(matches!(c.stop(), Transition::Rejected));
        assert!(matches!(c.pause(), Transition::Rejected));
        assert!(matches!(c.resume(), Transition::Rejected));
        assert!(matches!(c.skip(), Transition::Rejected));

        let _ = c.start();
        advance(&mut c, &clock, 3);
        assert!(matches!(c.start(), Transition::Rejected));
        assert!(matches!(c.resume(), Transition::Rejected));
        assert_eq!(c.mode(), Mode::Focus);
        assert_eq!(c.remaining_seconds(), 25 * 60 - 3);

        let _ = c.pause();
        assert!(matches!(c.start(), Transition::Rejected));
        assert!(matches!(c.pause(), Transition::Rejected));
        assert!(matches!(c.skip(), Transition::Rejected));
        assert_eq!(c.mode(), Mode::Paused);
        assert_eq!(c.remaining_seconds(), 25 * 60 - 3);
    }

    #[test]
    fn test_config_only_changes_while_idle() {
        let (mut c, _clock) = controller(25, 5);

        assert!(c.set_focus_minutes(30));
        assert_eq!(c.remaining_seconds(), 30 * 60);
        assert!(c.set_break_minutes(10));
        assert!(!c.set_focus_minutes(0));
        assert!(!c.set_break_minutes(61));

        let _ = c.start();
        assert!(!c.set_focus_minutes(15));
        assert!(!c.set_break_minutes(15));
        assert_eq!(c.settings().focus_minutes(), 30);
        assert_eq!(c.settings().break_minutes(), 10);
        assert_eq!(c.remaining_seconds(), 30 * 60);
    }

    #[test]
    fn test_skip_resets_to_full_phase() {
        let (mut c, clock) = controller(3, 2);
        let _ = c.start();
        advance(&mut c, &clock, 20);

        assert!(c.skip().is_applied());
        assert_eq!(c.mode(), Mode::Break);
        assert_eq!(c.remaining_seconds(), 120);

        advance(&mut c, &clock, 15);
        assert!(c.skip().is_applied());
        assert_eq!(c.mode(), Mode::Focus);
        assert_eq!(c.remaining_seconds(), 180);
        assert!(c.open_session_start().is_some());

        let _ = c.stop();
        assert_eq!(c.recorder().list_sessions().unwrap().len(), 1);
    }

    #[test]
    fn test_ticks_after_cycle_end_are_dropped() {
        let (mut c, clock) = controller(1, 1);
        let _ = c.start();

        let events = advance(&mut c, &clock, 200);
        assert_eq!(events.len(), 2);
        assert_eq!(c.mode(), Mode::Idle);
        assert_eq!(c.remaining_seconds(), 60);

        let sessions = c.recorder().list_sessions().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].ended_at, Some(t0() + Duration::seconds(200)));
    }

    #[test]
    fn test_idle_ignores_time() {
        let (mut c, clock) = controller(1, 1);
        assert!(advance(&mut c, &clock, 500).is_empty());
        assert_eq!(c.remaining_seconds(), 60);
    }

    #[test]
    fn test_start_failure_keeps_focus() {
        let mut recorder = MockSessionRecorder::new();
        recorder
            .expect_start_session()
            .times(1)
            .returning(|_| Err(HabitflowError::Database("offline".to_string())));
        recorder
            .expect_end_session()
            .times(1)
            .returning(|start, end| Ok(Session::finished(None, start, end)));

        let (mut c, clock) = controller_with(Box::new(recorder), 5, 5);

        let outcome = c.start();
        assert!(outcome.is_applied());
        assert!(outcome.recorder_error().is_some());
        assert_eq!(c.mode(), Mode::Focus);
        assert!(c.session_id().is_none());

        advance(&mut c, &clock, 90);
        let Transition::Finished(session) = c.stop() else {
            panic!("expected finished session");
        };
        assert_eq!(session.duration_minutes, Some(1));
    }

    #[test]
    fn test_end_failure_still_goes_idle() {
        let mut recorder = MockSessionRecorder::new();
        recorder.expect_start_session().returning(|_| Ok(1));
        recorder
            .expect_end_session()
            .returning(|_, _| Err(HabitflowError::Database("disk full".to_string())));

        let (mut c, _clock) = controller_with(Box::new(recorder), 5, 5);
        let _ = c.start();

        let outcome = c.stop();
        assert!(matches!(outcome, Transition::Unrecorded(_)));
        assert_eq!(c.mode(), Mode::Idle);
        assert!(c.open_session_start().is_none());
    }

    #[test]
    fn test_progress() {
        let (mut c, clock) = controller(1, 1);
        assert_eq!(c.progress(), 0.0);
        let _ = c.start();
        advance(&mut c, &clock, 30);
        assert!((c.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_drop_disarms_ticker() {
        let (mut c, clock) = controller(5, 5);
        let _ = c.start();
        assert!(clock.is_armed());
        drop(c);
        assert!(!clock.is_armed());
    }

    #[test]
    fn test_settings_validation() {
        assert!(TimerSettings::new(1, 60).is_ok());
        assert!(TimerSettings::new(0, 5).is_err());
        assert!(TimerSettings::new(25, 61).is_err());

        let config = FocusConfig::default();
        let settings = TimerSettings::try_from(&config).unwrap();
        assert_eq!(settings.focus_minutes(), 10);
        assert_eq!(settings.break_minutes(), 5);
    }
}

//! Time sources for the focus timer.
//!
//! The controller never reads the wall clock or sleeps on its own. It asks a
//! [`Clock`] for timestamps and a [`Ticker`] for how many one-second ticks
//! have come due, so tests can drive it with [`VirtualClock`].

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration as StdDuration, Instant};

use chrono::{DateTime, Duration, Utc};

/// Source of wall-clock timestamps for session records.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Periodic tick registration.
///
/// While armed, one tick comes due per period. Disarming drops any tick that
/// has not been collected yet.
pub trait Ticker {
    /// Start (or restart) the period from now.
    fn arm(&mut self);

    /// Cancel the registration and any pending ticks.
    fn disarm(&mut self);

    /// Whether a registration is active.
    fn is_armed(&self) -> bool;

    /// Collect the ticks that came due since the last call.
    fn due_ticks(&mut self) -> u32;

    /// Time until the next tick comes due, if armed.
    fn until_next(&self) -> Option<StdDuration>;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Ticker backed by a monotonic [`Instant`].
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    period: StdDuration,
    next_due: Option<Instant>,
}

impl IntervalTicker {
    /// Ticker firing once per second.
    #[must_use]
    pub const fn every_second() -> Self {
        Self::new(StdDuration::from_secs(1))
    }

    /// Ticker with a custom period.
    #[must_use]
    pub const fn new(period: StdDuration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }
}

impl Ticker for IntervalTicker {
    fn arm(&mut self) {
        self.next_due = Some(Instant::now() + self.period);
    }

    fn disarm(&mut self) {
        self.next_due = None;
    }

    fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    fn due_ticks(&mut self) -> u32 {
        let Some(mut next) = self.next_due else {
            return 0;
        };

        let now = Instant::now();
        let mut ticks = 0;
        while next <= now {
            ticks += 1;
            next += self.period;
        }
        self.next_due = Some(next);
        ticks
    }

    fn until_next(&self) -> Option<StdDuration> {
        self.next_due
            .map(|next| next.saturating_duration_since(Instant::now()))
    }
}

#[derive(Debug)]
struct VirtualState {
    now: DateTime<Utc>,
    armed: bool,
    pending: u32,
}

/// Manually advanced clock and ticker.
///
/// Clones share state, so a test can hand one clone to the controller as its
/// clock, another as its ticker, and keep a third to advance time.
#[derive(Debug, Clone)]
pub struct VirtualClock {
    state: Rc<RefCell<VirtualState>>,
}

impl VirtualClock {
    /// Start virtual time at `now`.
    #[must_use]
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            state: Rc::new(RefCell::new(VirtualState {
                now,
                armed: false,
                pending: 0,
            })),
        }
    }

    /// Move time forward by `seconds`, queueing one tick per second while armed.
    pub fn advance(&self, seconds: u32) {
        let mut state = self.state.borrow_mut();
        state.now += Duration::seconds(i64::from(seconds));
        if state.armed {
            state.pending += seconds;
        }
    }

    /// Ticks queued but not yet collected.
    #[must_use]
    pub fn pending(&self) -> u32 {
        self.state.borrow().pending
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> DateTime<Utc> {
        self.state.borrow().now
    }
}

impl Ticker for VirtualClock {
    fn arm(&mut self) {
        let mut state = self.state.borrow_mut();
        state.armed = true;
        state.pending = 0;
    }

    fn disarm(&mut self) {
        let mut state = self.state.borrow_mut();
        state.armed = false;
        state.pending = 0;
    }

    fn is_armed(&self) -> bool {
        self.state.borrow().armed
    }

    fn due_ticks(&mut self) -> u32 {
        std::mem::take(&mut self.state.borrow_mut().pending)
    }

    fn until_next(&self) -> Option<StdDuration> {
        self.is_armed().then(|| StdDuration::from_secs(1))
    }
}

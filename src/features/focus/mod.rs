//! Focus timer and session tracking.
//!
//! Pomodoro-style focus sessions:
//! - Focus/break countdown with pause, resume, skip and stop
//! - Sessions recorded through a pluggable recorder
//! - Monthly metrics over finished sessions

pub mod clock;
pub mod controller;
pub mod format;
pub mod metrics;
pub mod recorder;
pub mod session;
pub mod storage;

pub use clock::{Clock, IntervalTicker, SystemClock, Ticker, VirtualClock};
pub use controller::{FocusController, Mode, Phase, TimerEvent, TimerSettings, Transition};
pub use format::{format_duration_mmss, format_minutes, render_progress_bar};
pub use metrics::{DailyMetric, FocusMetrics, MonthlyMetric};
pub use recorder::SessionRecorder;
pub use session::{Session, SessionId};
pub use storage::FocusStorage;

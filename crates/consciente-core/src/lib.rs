//! # Transformación Consciente Core Library
//!
//! Core logic for a single-user personal-development journal: entries for
//! boundaries set, physical activity, coach audios and custom categories,
//! daily reminder alarms and short coaching feedback from a generative
//! language service. The `consciente` CLI is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Store**: three JSON blobs (entries, alarms, profile) in a SQLite
//!   key-value table, plus TOML configuration
//! - **Alarm Scheduler**: a wall-clock poller that requires the caller to
//!   invoke `poll()` on a fixed interval
//! - **Coach**: one outbound request per entry with fixed fallback texts
//! - **Views**: dashboard aggregates and the chronological history
//!
//! ## Key Components
//!
//! - [`Store`]: typed persistence over any [`KvStore`]
//! - [`AlarmScheduler`]: minute-matching alarm state machine
//! - [`Coach`]: prompts and fallbacks over a [`FeedbackGenerator`]
//! - [`journal::submit`]: validate, save, then attach feedback

pub mod alarms;
pub mod error;
pub mod events;
pub mod feedback;
pub mod journal;
pub mod model;
pub mod onboarding;
pub mod storage;
pub mod views;

pub use alarms::{AlarmBook, AlarmScheduler, NotificationSink, SchedulerOptions, TerminalSink};
pub use error::{ConfigError, CoreError, FeedbackError, Result, StorageError, ValidationError};
pub use events::Event;
pub use feedback::{Coach, FeedbackGenerator, GeminiClient};
pub use model::{Alarm, Biometrics, EntryCategory, EntryDetails, JournalEntry, UserProfile};
pub use storage::{Config, Database, KvStore, Store};

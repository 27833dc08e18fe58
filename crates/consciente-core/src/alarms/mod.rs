//! Reminder alarms: the stored list, the minute-matching scheduler and the
//! sinks that make a triggered alarm audible.

mod book;
mod scheduler;
mod sink;

pub use book::{format_12h, to_24h, AlarmBook, Period};
pub use scheduler::{
    announcement, minute_key, AlarmScheduler, AlarmSource, SchedulerOptions,
};
pub use sink::{NotificationSink, TerminalSink};

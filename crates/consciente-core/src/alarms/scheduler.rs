//! Minute-matching alarm scheduler.
//!
//! Like the rest of the core there is no internal thread: the caller invokes
//! [`AlarmScheduler::poll`] on a fixed interval (a couple of seconds) and
//! the scheduler compares the wall-clock minute against the stored alarms.
//!
//! ## Lifecycle of a notification
//!
//! ```text
//! idle --(poll hits HH:MM of an active alarm)--> notifying
//! notifying --(dismiss | auto-dismiss timeout)--> idle
//! ```
//!
//! A minute is only ever evaluated once per scheduler instance, so polling
//! several times within the same minute cannot fire the same alarm twice.

use std::time::Duration;

use chrono::{Local, NaiveDateTime, Utc};
use tracing::{debug, info};

use super::sink::NotificationSink;
use crate::events::Event;
use crate::model::{weekday_index, Alarm};
use crate::storage::{KvStore, Store};

/// Anything the scheduler can fetch the current alarm list from.
pub trait AlarmSource {
    fn alarms(&self) -> Vec<Alarm>;
}

impl<K: KvStore> AlarmSource for Store<K> {
    fn alarms(&self) -> Vec<Alarm> {
        Store::alarms(self)
    }
}

impl AlarmSource for [Alarm] {
    fn alarms(&self) -> Vec<Alarm> {
        self.to_vec()
    }
}

impl AlarmSource for Vec<Alarm> {
    fn alarms(&self) -> Vec<Alarm> {
        self.clone()
    }
}

/// Behaviour switches for the scheduler. The defaults reproduce the
/// browser application: every alarm fires every day and notifications stay
/// up until the user dismisses them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerOptions {
    /// Require today's weekday (0 = Sunday) to be listed in `alarm.days`.
    pub honor_weekdays: bool,
    /// Clear an unacknowledged notification after this long.
    pub auto_dismiss_after: Option<Duration>,
}

/// Text spoken when an alarm fires.
pub fn announcement(label: &str) -> String {
    format!("Atención. Recordatorio del Coach: {label}")
}

/// The `HH:MM` key of a wall-clock instant.
pub fn minute_key(now: &NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

/// Polls alarms against the wall clock and drives a notification sink.
pub struct AlarmScheduler<S> {
    sink: S,
    options: SchedulerOptions,
    /// Last `HH:MM` for which the alarm list was checked.
    last_checked_minute: String,
    active_notification: Option<Alarm>,
    /// Local time at which `active_notification` was raised.
    raised_at: Option<NaiveDateTime>,
}

impl<S: NotificationSink> AlarmScheduler<S> {
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, SchedulerOptions::default())
    }

    pub fn with_options(sink: S, options: SchedulerOptions) -> Self {
        Self {
            sink,
            options,
            last_checked_minute: String::new(),
            active_notification: None,
            raised_at: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn active_notification(&self) -> Option<&Alarm> {
        self.active_notification.as_ref()
    }

    pub fn last_checked_minute(&self) -> &str {
        &self.last_checked_minute
    }

    pub fn options(&self) -> SchedulerOptions {
        self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Poll using the local wall clock.
    pub fn poll_now(&mut self, source: &(impl AlarmSource + ?Sized)) -> Vec<Event> {
        self.poll(source, Local::now().naive_local())
    }

    /// Evaluate the alarms for the minute containing `now`.
    ///
    /// The alarm list is fetched at most once per call and only when the
    /// minute differs from the last one checked. Among active alarms set
    /// for that minute only the first in list order fires.
    pub fn poll(&mut self, source: &(impl AlarmSource + ?Sized), now: NaiveDateTime) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(event) = self.expire(now) {
            events.push(event);
        }

        let minute = minute_key(&now);
        if minute == self.last_checked_minute {
            return events;
        }
        self.last_checked_minute = minute.clone();

        let alarms = source.alarms();
        let today = weekday_index(&now);
        debug!(minute = %minute, alarms = alarms.len(), "checking alarms");

        let matching = alarms.into_iter().find(|alarm| {
            alarm.matches_minute(&minute)
                && (!self.options.honor_weekdays || alarm.days.contains(&today))
        });

        if let Some(alarm) = matching {
            events.push(self.trigger(alarm, minute, now));
        }
        events
    }

    /// User dismissal. Returns `None` when nothing was being shown.
    pub fn dismiss(&mut self) -> Option<Event> {
        self.clear(false)
    }

    fn trigger(&mut self, alarm: Alarm, minute: String, now: NaiveDateTime) -> Event {
        info!(alarm_id = %alarm.id, label = %alarm.label, %minute, "alarm triggered");
        self.sink.announce(&announcement(&alarm.label));

        let event = Event::AlarmTriggered {
            alarm_id: alarm.id.clone(),
            label: alarm.label.clone(),
            minute,
            at: Utc::now(),
        };
        self.active_notification = Some(alarm);
        self.raised_at = Some(now);
        event
    }

    fn expire(&mut self, now: NaiveDateTime) -> Option<Event> {
        let timeout = chrono::Duration::from_std(self.options.auto_dismiss_after?).ok()?;
        let raised_at = self.raised_at?;
        if now - raised_at >= timeout {
            self.clear(true)
        } else {
            None
        }
    }

    fn clear(&mut self, automatic: bool) -> Option<Event> {
        let alarm = self.active_notification.take()?;
        self.raised_at = None;
        self.sink.dismiss();
        info!(alarm_id = %alarm.id, automatic, "alarm dismissed");
        Some(Event::AlarmDismissed {
            alarm_id: alarm.id,
            automatic,
            at: Utc::now(),
        })
    }
}

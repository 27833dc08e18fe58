//! Reminder form operations: create from a 12-hour picker, toggle, delete.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, ValidationError};
use crate::model::Alarm;
use crate::storage::{KvStore, Store};

/// AM/PM half of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    Am,
    Pm,
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(Period::Am),
            "PM" => Ok(Period::Pm),
            other => Err(ValidationError::InvalidValue {
                field: "period".into(),
                message: format!("expected AM or PM, got '{other}'"),
            }),
        }
    }
}

/// Convert a 12-hour picker value to the stored `HH:MM` form.
///
/// `12 AM` is midnight (`00`), `12 PM` is noon.
pub fn to_24h(hour: u8, minute: u8, period: Period) -> Result<String, ValidationError> {
    if !(1..=12).contains(&hour) {
        return Err(ValidationError::InvalidValue {
            field: "hour".into(),
            message: format!("{hour} is not between 1 and 12"),
        });
    }
    if minute > 59 {
        return Err(ValidationError::InvalidValue {
            field: "minute".into(),
            message: format!("{minute} is not between 0 and 59"),
        });
    }
    let hour = match (period, hour) {
        (Period::Am, 12) => 0,
        (Period::Pm, h) if h < 12 => h + 12,
        (_, h) => h,
    };
    Ok(format!("{hour:02}:{minute:02}"))
}

/// Render a stored `HH:MM` time as `h:MM AM|PM`. Returns `None` for
/// malformed values.
pub fn format_12h(time: &str) -> Option<String> {
    let (h, m) = time.split_once(':')?;
    let hour: u8 = h.parse().ok()?;
    if hour > 23 || m.len() != 2 || !m.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    Some(format!("{display}:{m} {suffix}"))
}

/// Alarm list operations over the store.
pub struct AlarmBook<'a, K> {
    store: &'a Store<K>,
}

impl<'a, K: KvStore> AlarmBook<'a, K> {
    pub fn new(store: &'a Store<K>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Alarm> {
        self.store.alarms()
    }

    /// Append a new active, every-day alarm.
    ///
    /// # Errors
    /// Rejects a blank label or an out-of-range time.
    pub fn add(&self, hour: u8, minute: u8, period: Period, label: &str) -> Result<Alarm> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ValidationError::MissingField("label").into());
        }
        let alarm = Alarm::new(to_24h(hour, minute, period)?, label);

        let mut alarms = self.store.load_alarms()?;
        alarms.push(alarm.clone());
        self.store.save_alarms(&alarms)?;
        info!(alarm_id = %alarm.id, time = %alarm.time, "alarm added");
        Ok(alarm)
    }

    /// Delete an alarm. Returns the removed alarm.
    pub fn remove(&self, id: &str) -> Result<Alarm> {
        let mut alarms = self.store.load_alarms()?;
        let index = alarms
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| unknown(id))?;
        let removed = alarms.remove(index);
        self.store.save_alarms(&alarms)?;
        info!(alarm_id = %id, "alarm removed");
        Ok(removed)
    }

    /// Flip an alarm's `active` flag. Returns the updated alarm.
    pub fn toggle(&self, id: &str) -> Result<Alarm> {
        let mut alarms = self.store.load_alarms()?;
        let alarm = alarms
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| unknown(id))?;
        alarm.active = !alarm.active;
        let updated = alarm.clone();
        self.store.save_alarms(&alarms)?;
        info!(alarm_id = %id, active = updated.active, "alarm toggled");
        Ok(updated)
    }
}

fn unknown(id: &str) -> ValidationError {
    ValidationError::UnknownId {
        kind: "alarm",
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::Flaky;

    #[test]
    fn converts_12h_to_24h() {
        assert_eq!(to_24h(12, 0, Period::Am).unwrap(), "00:00");
        assert_eq!(to_24h(7, 5, Period::Am).unwrap(), "07:05");
        assert_eq!(to_24h(12, 30, Period::Pm).unwrap(), "12:30");
        assert_eq!(to_24h(9, 45, Period::Pm).unwrap(), "21:45");
    }

    #[test]
    fn rejects_out_of_range_picker_values() {
        assert!(to_24h(0, 0, Period::Am).is_err());
        assert!(to_24h(13, 0, Period::Pm).is_err());
        assert!(to_24h(1, 60, Period::Am).is_err());
    }

    #[test]
    fn formats_24h_for_display() {
        assert_eq!(format_12h("00:05").as_deref(), Some("12:05 AM"));
        assert_eq!(format_12h("09:00").as_deref(), Some("9:00 AM"));
        assert_eq!(format_12h("12:00").as_deref(), Some("12:00 PM"));
        assert_eq!(format_12h("21:45").as_deref(), Some("9:45 PM"));
        assert_eq!(format_12h("nonsense"), None);
        assert_eq!(format_12h("25:00"), None);
    }

    #[test]
    fn parses_period_case_insensitively() {
        assert_eq!("pm".parse::<Period>().unwrap(), Period::Pm);
        assert_eq!(" AM ".parse::<Period>().unwrap(), Period::Am);
        assert!("noon".parse::<Period>().is_err());
    }

    #[test]
    fn add_toggle_remove() {
        let store = Store::open_memory().unwrap();
        let book = AlarmBook::new(&store);

        let alarm = book.add(8, 15, Period::Pm, "Escuchar audio").unwrap();
        assert_eq!(alarm.time, "20:15");
        assert_eq!(book.list(), vec![alarm.clone()]);

        let toggled = book.toggle(&alarm.id).unwrap();
        assert!(!toggled.active);
        assert!(!store.alarms()[0].active);

        book.remove(&alarm.id).unwrap();
        assert!(store.alarms().is_empty());
    }

    #[test]
    fn add_appends_in_order() {
        let store = Store::open_memory().unwrap();
        let book = AlarmBook::new(&store);
        book.add(7, 0, Period::Am, "primero").unwrap();
        book.add(6, 0, Period::Am, "segundo").unwrap();
        let labels: Vec<_> = book.list().into_iter().map(|a| a.label).collect();
        assert_eq!(labels, vec!["primero", "segundo"]);
    }

    #[test]
    fn blank_label_is_rejected() {
        let store = Store::open_memory().unwrap();
        let err = AlarmBook::new(&store)
            .add(7, 0, Period::Am, "  ")
            .unwrap_err();
        assert!(err.to_string().contains("label"));
        assert!(store.alarms().is_empty());
    }

    #[test]
    fn failed_read_keeps_existing_alarms() {
        let store = Store::new(Flaky::default());
        let book = AlarmBook::new(&store);
        let first = book.add(7, 0, Period::Am, "uno").unwrap();
        book.add(8, 0, Period::Am, "dos").unwrap();
        book.add(9, 0, Period::Am, "tres").unwrap();

        store.kv().fail_next_get();
        assert!(book.add(10, 0, Period::Am, "cuatro").is_err());
        store.kv().fail_next_get();
        assert!(book.toggle(&first.id).is_err());
        store.kv().fail_next_get();
        assert!(book.remove(&first.id).is_err());

        let alarms = store.alarms();
        assert_eq!(alarms.len(), 3);
        assert!(alarms[0].active);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let store = Store::open_memory().unwrap();
        let book = AlarmBook::new(&store);
        assert!(book.toggle("nope").is_err());
        assert!(book.remove("nope").is_err());
    }
}

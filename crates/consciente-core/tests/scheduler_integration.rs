//! Integration tests for the alarm scheduler against the real store.

use chrono::{NaiveDate, NaiveDateTime};
use consciente_core::alarms::{AlarmBook, AlarmScheduler, NotificationSink, Period};
use consciente_core::{Alarm, Event, Store};
use proptest::prelude::*;

#[derive(Default)]
struct Counter {
    announced: usize,
}

impl NotificationSink for Counter {
    fn announce(&mut self, _text: &str) {
        self.announced += 1;
    }

    fn dismiss(&mut self) {}
}

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 4)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

#[test]
fn deleted_alarm_is_not_considered_on_next_poll() {
    let store = Store::open_memory().unwrap();
    let book = AlarmBook::new(&store);
    let first = book.add(9, 0, Period::Am, "Respirar").unwrap();
    let second = book.add(9, 1, Period::Am, "Caminar").unwrap();

    let mut scheduler = AlarmScheduler::new(Counter::default());
    let events = scheduler.poll(&store, at(9, 0, 0));
    assert!(matches!(
        events.as_slice(),
        [Event::AlarmTriggered { alarm_id, .. }] if *alarm_id == first.id
    ));
    scheduler.dismiss();

    book.remove(&second.id).unwrap();
    assert!(scheduler.poll(&store, at(9, 1, 0)).is_empty());
    assert_eq!(scheduler.sink().announced, 1);
}

#[test]
fn toggled_off_alarm_never_fires() {
    let store = Store::open_memory().unwrap();
    let book = AlarmBook::new(&store);
    let alarm = book.add(7, 30, Period::Pm, "Audio").unwrap();
    book.toggle(&alarm.id).unwrap();

    let mut scheduler = AlarmScheduler::new(Counter::default());
    assert!(scheduler.poll(&store, at(19, 30, 0)).is_empty());
}

fn arb_alarm() -> impl Strategy<Value = Alarm> {
    (0u32..3, any::<bool>()).prop_map(|(minute, active)| {
        let mut alarm = Alarm::new(format!("10:0{minute}"), "x");
        alarm.active = active;
        alarm
    })
}

proptest! {
    #[test]
    fn at_most_one_trigger_per_minute(
        alarms in prop::collection::vec(arb_alarm(), 0..8),
        minute in 0u32..3,
        seconds in prop::collection::vec(0u32..60, 1..10),
    ) {
        let mut scheduler = AlarmScheduler::new(Counter::default());
        let mut triggered = 0;
        for s in seconds {
            triggered += scheduler
                .poll(&alarms, at(10, minute, s))
                .iter()
                .filter(|e| matches!(e, Event::AlarmTriggered { .. }))
                .count();
        }
        prop_assert!(triggered <= 1);

        let expected = alarms
            .iter()
            .any(|a| a.active && a.time == format!("10:0{minute}"));
        prop_assert_eq!(triggered == 1, expected);
    }

    #[test]
    fn inactive_alarms_never_trigger(minute in 0u32..60, second in 0u32..60) {
        let mut alarm = Alarm::new(format!("08:{minute:02}"), "off");
        alarm.active = false;
        let mut scheduler = AlarmScheduler::new(Counter::default());
        prop_assert!(scheduler.poll(&vec![alarm], at(8, minute, second)).is_empty());
    }
}

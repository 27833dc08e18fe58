//! Integration tests for persistence across reopen.

use consciente_core::model::Biometrics;
use consciente_core::storage::{Database, ENTRIES_KEY};
use consciente_core::{Alarm, EntryDetails, JournalEntry, KvStore, Store, UserProfile};

fn sample_entries() -> Vec<JournalEntry> {
    let mut boundary = JournalEntry::new(EntryDetails::Boundary {
        tiredness_level: 9,
        body_sensation: "mandíbula apretada".into(),
        thought: "necesito parar".into(),
        context_reaction: String::new(),
    });
    boundary.ai_feedback = Some("Escucha a tu cuerpo.".into());
    let custom = JournalEntry::new(EntryDetails::Custom {
        custom_category_name: "Lectura".into(),
        transformation_note: "20 páginas".into(),
    });
    vec![boundary, custom]
}

#[test]
fn data_survives_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("consciente.db");

    let entries = sample_entries();
    let alarms = vec![Alarm::new("06:45", "Estirar")];
    let profile = UserProfile {
        email: Some("ana@example.com".into()),
        biometrics: Some(Biometrics {
            age: "30".into(),
            activity_level: "moderado".into(),
            ..Biometrics::default()
        }),
        custom_actions: vec!["Lectura".into()],
        ..UserProfile::new("Ana")
    };

    {
        let store = Store::new(Database::open_at(&path).unwrap());
        for entry in entries.iter().rev() {
            store.save_entry(entry).unwrap();
        }
        store.save_alarms(&alarms).unwrap();
        store.save_profile(&profile).unwrap();
    }

    let store = Store::new(Database::open_at(&path).unwrap());
    assert_eq!(store.entries(), entries);
    assert_eq!(store.alarms(), alarms);
    assert_eq!(store.profile(), profile);
}

#[test]
fn entries_use_browser_field_names() {
    let store = Store::open_memory().unwrap();
    store.save_entry(&sample_entries()[0]).unwrap();

    let raw = store.kv().get(ENTRIES_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &json[0];
    assert_eq!(first["category"], "boundary");
    assert_eq!(first["tirednessLevel"], 9);
    assert_eq!(first["bodySensation"], "mandíbula apretada");
    assert_eq!(first["aiFeedback"], "Escucha a tu cuerpo.");
}

#[test]
fn browser_blob_is_readable() {
    let store = Store::open_memory().unwrap();
    let blob = r#"[{"id":"1718000000000","date":"2024-06-10T08:30:00.000Z","category":"audio","listened":true,"emotion":"calma"}]"#;
    store.kv().set(ENTRIES_KEY, blob).unwrap();

    let entries = store.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "1718000000000");
    assert!(entries[0].completed());
}

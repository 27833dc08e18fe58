//! Typed access to the three persisted JSON blobs.
//!
//! Display reads never fail: a missing key, an unreadable database or a
//! corrupt blob all degrade to the empty/default value and are logged.
//! Read-modify-write paths use the strict `load_*` readers instead, so a
//! failed read aborts the write rather than overwriting the stored list.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::database::Database;
use crate::error::{Result, StorageError, ValidationError};
use crate::model::{Alarm, JournalEntry, UserProfile};

/// Key of the entry list (newest first).
pub const ENTRIES_KEY: &str = "tc_entries";
/// Key of the alarm list.
pub const ALARMS_KEY: &str = "tc_alarms";
/// Key of the user profile object.
pub const PROFILE_KEY: &str = "tc_profile";

/// A durable string-to-string mapping.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Profile, entry and alarm persistence over a [`KvStore`].
pub struct Store<K = Database> {
    kv: K,
}

impl Store<Database> {
    /// Open the store in the default data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::new(Database::open()?))
    }

    /// A store backed by an in-memory database.
    pub fn open_memory() -> Result<Self> {
        Ok(Self::new(Database::open_memory()?))
    }
}

impl<K: KvStore> Store<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.kv.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read from store, using default");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "stored value is not valid JSON, using default");
                None
            }
        }
    }

    /// Like `read_json`, but storage and decode errors are returned.
    fn try_read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.kv.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.kv.set(key, &json)?;
        debug!(key, bytes = json.len(), "wrote store key");
        Ok(())
    }

    // ── Entries ──────────────────────────────────────────────────────

    /// All entries, newest first.
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.read_json(ENTRIES_KEY).unwrap_or_default()
    }

    /// All entries, failing if the stored list cannot be read.
    pub fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        Ok(self.try_read_json(ENTRIES_KEY)?.unwrap_or_default())
    }

    /// Prepend an entry. Returns the updated list.
    pub fn save_entry(&self, entry: &JournalEntry) -> Result<Vec<JournalEntry>> {
        let mut entries = self.load_entries()?;
        entries.insert(0, entry.clone());
        self.write_json(ENTRIES_KEY, &entries)?;
        Ok(entries)
    }

    /// Replace the stored entry that has the same id. Returns the updated list.
    ///
    /// # Errors
    /// Returns a validation error if no stored entry has that id, or the
    /// read error if the stored list cannot be loaded.
    pub fn update_entry(&self, entry: &JournalEntry) -> Result<Vec<JournalEntry>> {
        let mut entries = self.load_entries()?;
        let slot = entries
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or_else(|| ValidationError::UnknownId {
                kind: "entry",
                id: entry.id.clone(),
            })?;
        *slot = entry.clone();
        self.write_json(ENTRIES_KEY, &entries)?;
        Ok(entries)
    }

    // ── Alarms ───────────────────────────────────────────────────────

    pub fn alarms(&self) -> Vec<Alarm> {
        self.read_json(ALARMS_KEY).unwrap_or_default()
    }

    pub fn load_alarms(&self) -> Result<Vec<Alarm>> {
        Ok(self.try_read_json(ALARMS_KEY)?.unwrap_or_default())
    }

    /// Overwrite the whole alarm list.
    pub fn save_alarms(&self, alarms: &[Alarm]) -> Result<()> {
        self.write_json(ALARMS_KEY, alarms)
    }

    // ── Profile ──────────────────────────────────────────────────────

    /// The stored profile, or the default "Usuario" profile.
    pub fn profile(&self) -> UserProfile {
        self.read_json(PROFILE_KEY).unwrap_or_default()
    }

    pub fn load_profile(&self) -> Result<UserProfile> {
        Ok(self.try_read_json(PROFILE_KEY)?.unwrap_or_default())
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        self.write_json(PROFILE_KEY, profile)
    }

    pub fn clear_profile(&self) -> Result<()> {
        self.kv.remove(PROFILE_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::model::{EntryDetails, DEFAULT_PROFILE_NAME};
    use crate::storage::testing::Flaky;

    fn store() -> Store {
        Store::open_memory().unwrap()
    }

    fn physical(note: &str) -> JournalEntry {
        JournalEntry::new(EntryDetails::Physical {
            did_activity: true,
            transformation_note: note.into(),
        })
    }

    #[test]
    fn empty_store_yields_defaults() {
        let store = store();
        assert!(store.entries().is_empty());
        assert!(store.alarms().is_empty());
        assert_eq!(store.profile().name, DEFAULT_PROFILE_NAME);
    }

    #[test]
    fn save_entry_prepends() {
        let store = store();
        let first = physical("uno");
        let second = physical("dos");
        store.save_entry(&first).unwrap();
        let entries = store.save_entry(&second).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, second.id);
        assert_eq!(store.entries()[1].id, first.id);
    }

    #[test]
    fn update_entry_replaces_by_id() {
        let store = store();
        let mut entry = physical("uno");
        store.save_entry(&entry).unwrap();
        entry.ai_feedback = Some("Bien hecho".into());
        store.update_entry(&entry).unwrap();
        assert_eq!(store.entries()[0].ai_feedback.as_deref(), Some("Bien hecho"));
    }

    #[test]
    fn update_unknown_entry_is_an_error() {
        let store = store();
        let err = store.update_entry(&physical("x")).unwrap_err();
        assert!(err.to_string().contains("No entry with id"));
    }

    #[test]
    fn corrupt_blob_falls_back_to_default() {
        let store = store();
        store.kv().kv_set(ENTRIES_KEY, "{not json").unwrap();
        store.kv().kv_set(PROFILE_KEY, "[]").unwrap();
        assert!(store.entries().is_empty());
        assert_eq!(store.profile(), UserProfile::default());
    }

    #[test]
    fn failed_read_aborts_save_entry() {
        let store = Store::new(Flaky::default());
        for i in 0..5 {
            store.save_entry(&physical(&format!("n{i}"))).unwrap();
        }

        store.kv().fail_next_get();
        let err = store.save_entry(&physical("nueva")).unwrap_err();
        assert!(matches!(err, CoreError::Storage(StorageError::Locked)));
        assert_eq!(store.entries().len(), 5);
    }

    #[test]
    fn failed_read_aborts_update_entry() {
        let store = Store::new(Flaky::default());
        let mut entry = physical("uno");
        store.save_entry(&entry).unwrap();
        store.save_entry(&physical("dos")).unwrap();

        store.kv().fail_next_get();
        entry.ai_feedback = Some("Bien".into());
        assert!(store.update_entry(&entry).is_err());
        let entries = store.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.ai_feedback.is_none()));
    }

    #[test]
    fn strict_loads_reject_corrupt_blobs() {
        let store = store();
        store.kv().kv_set(ENTRIES_KEY, "{not json").unwrap();
        assert!(matches!(store.load_entries(), Err(CoreError::Json(_))));
        assert!(store.save_entry(&physical("x")).is_err());
        assert_eq!(
            store.kv().kv_get(ENTRIES_KEY).unwrap().as_deref(),
            Some("{not json")
        );
        assert!(store.load_alarms().unwrap().is_empty());
        assert_eq!(store.load_profile().unwrap(), UserProfile::default());
    }

    #[test]
    fn clear_profile_restores_default() {
        let store = store();
        store.save_profile(&UserProfile::new("Ana")).unwrap();
        assert_eq!(store.profile().name, "Ana");
        store.clear_profile().unwrap();
        assert_eq!(store.profile().name, DEFAULT_PROFILE_NAME);
    }
}

//! Committed zones and the session snapshot layout
//!
//! A committed zone carries its own copy of the plan it was saved with, so
//! later edits to the live form never reach back into the list. The book of
//! committed zones round-trips through a versioned JSON snapshot; reading
//! and writing that snapshot to wherever it lives is the caller's concern.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core_types::input::ZoneForm;
use crate::schedule::LiveCalculation;

/// Layout version written into every snapshot
pub const SNAPSHOT_VERSION: u32 = 1;

/// A zone committed to the session list
///
/// Identity is assigned at commit time and is the only handle later update
/// and delete operations use. The embedded calculation is the plan as it
/// stood at commit; it is replaced wholesale on update, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedZone {
    /// Opaque identity assigned at commit
    pub id: u64,
    /// Display name
    pub name: String,
    /// Full form state at commit
    pub form: ZoneForm,
    /// The plan captured at commit
    pub calculation: LiveCalculation,
    /// Commit timestamp
    pub saved_at: DateTime<Utc>,
}

/// The session's committed zones, addressed by identity
///
/// Iteration order follows commit order (identities are assigned from a
/// monotonic counter, so sorting by id reproduces the sequence zones were
/// committed in).
#[derive(Debug, Clone, Default)]
pub struct ZoneBook {
    zones: FxHashMap<u64, SavedZone>,
}

impl ZoneBook {
    /// Empty book
    #[must_use]
    pub fn new() -> Self {
        ZoneBook::default()
    }

    /// Insert or replace the zone with this entry's identity
    pub fn insert(&mut self, zone: SavedZone) {
        self.zones.insert(zone.id, zone);
    }

    /// Look up a committed zone
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&SavedZone> {
        self.zones.get(&id)
    }

    /// Remove a committed zone, returning it if present
    pub fn remove(&mut self, id: u64) -> Option<SavedZone> {
        self.zones.remove(&id)
    }

    /// Number of committed zones
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// True when no zone has been committed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Committed zones in commit order
    #[must_use]
    pub fn zones(&self) -> Vec<&SavedZone> {
        let mut all: Vec<&SavedZone> = self.zones.values().collect();
        all.sort_unstable_by_key(|zone| zone.id);
        all
    }
}

/// The persisted layout of one session's committed zones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneBookSnapshot {
    /// Layout version, checked on read
    pub version: u32,
    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,
    /// Next identity the session would assign
    pub next_id: u64,
    /// Committed zones, in commit order
    pub zones: Vec<SavedZone>,
}

impl ZoneBookSnapshot {
    /// Capture a book and its identity counter
    #[must_use]
    pub fn capture(book: &ZoneBook, next_id: u64) -> Self {
        ZoneBookSnapshot {
            version: SNAPSHOT_VERSION,
            taken_at: Utc::now(),
            next_id,
            zones: book.zones().into_iter().cloned().collect(),
        }
    }

    /// Serialize to the snapshot JSON layout
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be serialized
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::SerializeFailed(e.to_string()))
    }

    /// Read a snapshot back from its JSON layout
    ///
    /// # Errors
    /// Returns an error if the JSON does not parse or carries a layout
    /// version this build does not understand
    pub fn from_json(contents: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(contents)
            .map_err(|e| SnapshotError::ParseFailed(e.to_string()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }

        Ok(snapshot)
    }

    /// Rebuild the book this snapshot captured
    #[must_use]
    pub fn restore(&self) -> ZoneBook {
        let mut book = ZoneBook::new();
        for zone in &self.zones {
            book.insert(zone.clone());
        }
        book
    }
}

/// Errors that can occur reading or writing session snapshots
#[derive(Debug)]
pub enum SnapshotError {
    /// Failed to serialize the snapshot
    SerializeFailed(String),
    /// Failed to parse snapshot contents
    ParseFailed(String),
    /// Snapshot was written by an unknown layout version
    UnsupportedVersion(u32),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::SerializeFailed(msg) => write!(f, "Failed to serialize: {msg}"),
            SnapshotError::ParseFailed(msg) => write!(f, "Failed to parse: {msg}"),
            SnapshotError::UnsupportedVersion(version) => {
                write!(f, "Unsupported snapshot version: {version}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceTables;
    use crate::core_types::input::ZoneInput;
    use crate::schedule::{recalculate, CycleCount};

    fn committed(id: u64, name: &str) -> SavedZone {
        let form = ZoneForm {
            input: ZoneInput {
                nozzle_type: Some("Rotor Head".to_string()),
                soil_type: Some("Clay Loam".to_string()),
                slope: Some("15-30%".to_string()),
                zone_type: Some("Shrubs".to_string()),
                ..ZoneInput::default()
            },
            area_sq_ft: Some(600.0),
            ..ZoneForm::default()
        };
        let calculation =
            recalculate(&ReferenceTables::builtin(), &form.input, CycleCount::Automatic).unwrap();
        SavedZone {
            id,
            name: name.to_string(),
            form,
            calculation,
            saved_at: Utc::now(),
        }
    }

    #[test]
    fn test_book_lists_zones_in_commit_order() {
        let mut book = ZoneBook::new();
        book.insert(committed(2, "Back lawn"));
        book.insert(committed(1, "Front lawn"));
        book.insert(committed(3, "Parking strip"));

        let ids: Vec<u64> = book.zones().iter().map(|zone| zone.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_replaces_matching_identity() {
        let mut book = ZoneBook::new();
        book.insert(committed(1, "Front lawn"));

        let mut renamed = committed(1, "Front beds");
        renamed.form.area_sq_ft = Some(250.0);
        book.insert(renamed);

        assert_eq!(book.len(), 1);
        assert_eq!(book.get(1).unwrap().name, "Front beds");
    }

    #[test]
    fn test_remove() {
        let mut book = ZoneBook::new();
        book.insert(committed(1, "Front lawn"));

        assert!(book.remove(1).is_some());
        assert!(book.remove(1).is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut book = ZoneBook::new();
        book.insert(committed(1, "Front lawn"));
        book.insert(committed(2, "Back lawn"));

        let snapshot = ZoneBookSnapshot::capture(&book, 3);
        let json = snapshot.to_json().unwrap();
        let loaded = ZoneBookSnapshot::from_json(&json).unwrap();

        assert_eq!(loaded, snapshot);
        assert_eq!(loaded.next_id, 3);

        let restored = loaded.restore();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.get(2).unwrap().name, "Back lawn");
    }

    #[test]
    fn test_snapshot_rejects_unknown_layout_version() {
        let json = r#"{"version": 99, "takenAt": "2026-03-01T00:00:00Z", "nextId": 1, "zones": []}"#;
        match ZoneBookSnapshot::from_json(json) {
            Err(SnapshotError::UnsupportedVersion(99)) => {}
            other => panic!("expected version rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_json_uses_form_wire_shape() {
        let mut book = ZoneBook::new();
        book.insert(committed(1, "Front lawn"));

        let json = ZoneBookSnapshot::capture(&book, 2).to_json().unwrap();
        assert!(json.contains("\"nozzleType\""));
        assert!(json.contains("\"savedAt\""));
        assert!(json.contains("\"precipRate\""));
    }
}

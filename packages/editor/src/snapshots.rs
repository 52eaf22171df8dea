//! # Snapshot Persistence
//!
//! Named, timestamped save points written to durable storage. The in-memory
//! listing only keeps `{id, name, timestamp}`; the full payload lives under a
//! namespaced storage key and is loaded lazily on restore.
//!
//! One id is reserved: `GOLDEN_STABLE_666`, the emergency-recovery baseline.
//! Nothing in the core ever writes it — seeding is an operational concern
//! (e.g. a deployment script) — so recovery is best-effort by design.

use serde::{Deserialize, Serialize};

use crate::undo_stack::StateSnapshot;

/// Storage key namespace; full keys are `studio-snapshot-<id>`
pub const SNAPSHOT_KEY_PREFIX: &str = "studio-snapshot";

/// Reserved id of the externally seeded recovery baseline
pub const GOLDEN_SNAPSHOT_ID: &str = "GOLDEN_STABLE_666";

/// The code accepted by `emergency_restore`
pub const EMERGENCY_CODE: &str = "666";

/// Listing entry kept in memory for enumeration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMeta {
    pub id: String,
    pub name: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// Full payload as written to storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSnapshot {
    pub id: String,
    pub name: String,
    pub timestamp: i64,
    pub data: StateSnapshot,
}

pub fn storage_key(id: &str) -> String {
    format!("{SNAPSHOT_KEY_PREFIX}-{id}")
}

//! # Gridstudio Editor
//!
//! State core of the gridstudio visual builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ dna: token registry + block defaults        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - pages → blocks → override trees          │
//! │  - dotted-path mutations                    │
//! │  - snapshot undo/redo (capture-then-mutate) │
//! │  - durable named snapshots                  │
//! │  - project import/export                    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ consumers: renderer, exporter (read-only)   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **One aggregate, one writer**: `EditSession` owns all mutable state;
//!    collaborators read through its accessors and never mutate directly
//! 2. **Capture before mutate**: every undoable operation deep-copies the
//!    pre-edit state into history first, synchronously
//! 3. **Snapshots share nothing**: restores and captures are whole-state
//!    deep copies, so history entries can never be corrupted by later edits
//! 4. **Bad input is not an error**: stale ids, invalid token values and
//!    exhausted history are silent no-ops — the worst outcome of any
//!    interactive call is "nothing happened"
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gridstudio_editor::{EditSession, MoveDirection};
//! use serde_json::json;
//!
//! let mut session = EditSession::new(Box::new(DiskStore::new(data_dir)));
//!
//! let hero = session.add_block("B0201");
//! session.update_block_override(hero, "data.title", json!("HELLO"));
//! session.undo();
//! session.redo();
//!
//! let backup = session.save_snapshot(Some("before launch"));
//! // ... later ...
//! session.load_snapshot(&backup);
//! ```

mod document;
mod errors;
mod io;
mod mutations;
mod session;
mod snapshots;
mod theme;
mod undo_stack;

pub use document::{ContentBlock, MoveDirection, SiteDocument, DEFAULT_PAGE};
pub use errors::EditorError;
pub use io::{export_project, parse_project, ProjectData};
pub use mutations::{get_path, set_path};
pub use session::EditSession;
pub use snapshots::{
    storage_key, PersistedSnapshot, SnapshotMeta, EMERGENCY_CODE, GOLDEN_SNAPSHOT_ID,
    SNAPSHOT_KEY_PREFIX,
};
pub use theme::{theme_preset, ThemePreset, UiTheme, THEME_PRESETS};
pub use undo_stack::{StateSnapshot, UndoStack, MAX_HISTORY};

// Re-export common types for convenience
pub use gridstudio_common::{DiskStore, KeyValueStore, MemoryStore};
pub use gridstudio_dna::{block_defaults, DnaRegistry};

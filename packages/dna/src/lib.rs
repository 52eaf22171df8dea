//! # Gridstudio DNA
//!
//! The "global DNA" of a project: a fixed catalog of typed, validated design
//! parameters (text scale, colors, spacing, radii, ...) that every content
//! block inherits defaults from, plus the per-block-type default override
//! trees used when a block is first dropped onto a page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog: fixed GL01..GL12 parameter table   │
//! └─────────────────────────────────────────────┘
//!                     ↓ built once at startup
//! ┌─────────────────────────────────────────────┐
//! │ registry: groups of typed parameters        │
//! │  - value updates with type validation       │
//! │  - positional bulk import                   │
//! └─────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────┐
//! │ defaults: block-type tag → override tree    │
//! │  - semantic aliases resolve first           │
//! │  - every call returns a fresh tree          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The registry is structurally immutable after construction: groups and
//! parameters are never added or removed at runtime, only `value` fields
//! change. Invalid values are rejected silently (the previous value is kept)
//! because interactive scrubbing produces many transient bad inputs.

mod catalog;
mod defaults;
mod params;
mod registry;

pub use defaults::{block_defaults, resolve_alias};
pub use params::{DnaParameter, ParamType, SettingGroup};
pub use registry::DnaRegistry;

//! # Edit Session
//!
//! The single state-owning aggregate. An `EditSession` owns the document,
//! the DNA registry, the UI theme, the selection, the undo/redo history and
//! the snapshot store, and exposes every mutating operation as a method.
//! Nothing outside this module mutates those fields directly; renderers and
//! exporters read through the accessor surface.
//!
//! ## Mutation protocol
//!
//! Every operation that belongs to undo history captures a deep snapshot of
//! `{pages, settings, theme}` *before* mutating — synchronously, in the same
//! call. The capture-then-mutate ordering is a hard requirement: undo must
//! restore the exact pre-edit state, and a snapshot taken after the fact
//! would alias it.
//!
//! The session is single-threaded by design. There is one logical writer,
//! operations apply in invocation order, and none of them suspend.
//!
//! ## Failure behavior
//!
//! Interactive edits never fail: stale block ids (a panel still open for a
//! just-deleted block), unknown parameter ids and invalid token values are
//! silent no-ops. Only project import and storage I/O return `Result`s.

use serde_json::{json, Value};
use tracing::{debug, info, warn};
use uuid::Uuid;

use gridstudio_common::KeyValueStore;
use gridstudio_dna::{block_defaults, DnaRegistry};

use crate::document::{ContentBlock, MoveDirection, SiteDocument, DEFAULT_PAGE};
use crate::errors::EditorError;
use crate::io::{self, ProjectData};
use crate::mutations;
use crate::snapshots::{
    storage_key, PersistedSnapshot, SnapshotMeta, EMERGENCY_CODE, GOLDEN_SNAPSHOT_ID,
};
use crate::theme::{theme_preset, UiTheme};
use crate::undo_stack::{StateSnapshot, UndoStack};

pub struct EditSession {
    document: SiteDocument,
    settings: DnaRegistry,
    ui_theme: UiTheme,
    selected_block: Option<Uuid>,

    /// Render-invalidation counter; consumers re-key cached render state on it
    canvas_key: u64,

    history: UndoStack,
    snapshots: Vec<SnapshotMeta>,
    store: Box<dyn KeyValueStore>,
}

impl EditSession {
    /// Session with the given durable store. Lives for the whole process.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            document: SiteDocument::new(),
            settings: DnaRegistry::default(),
            ui_theme: UiTheme::default(),
            selected_block: None,
            canvas_key: 0,
            history: UndoStack::new(),
            snapshots: Vec::new(),
            store,
        }
    }

    /// Session backed by a throwaway in-memory store
    pub fn in_memory() -> Self {
        Self::new(Box::new(gridstudio_common::MemoryStore::new()))
    }

    // ---- read surface -----------------------------------------------------

    pub fn document(&self) -> &SiteDocument {
        &self.document
    }

    pub fn settings(&self) -> &DnaRegistry {
        &self.settings
    }

    pub fn ui_theme(&self) -> &UiTheme {
        &self.ui_theme
    }

    pub fn selected_block(&self) -> Option<Uuid> {
        self.selected_block
    }

    pub fn canvas_key(&self) -> u64 {
        self.canvas_key
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn snapshot_list(&self) -> &[SnapshotMeta] {
        &self.snapshots
    }

    /// Read one override value back out of a block on the current page
    pub fn block_override<'a>(&'a self, block_id: Uuid, path: &str) -> Option<&'a Value> {
        mutations::get_path(&self.document.find_block(block_id)?.local_overrides, path)
    }

    /// Deep copy of the undoable state as it is right now
    pub fn current_snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            pages: self.document.pages.clone(),
            settings: self.settings.clone(),
            ui_theme: self.ui_theme.clone(),
        }
    }

    fn capture_history(&mut self) {
        let snapshot = self.current_snapshot();
        self.history.record(snapshot);
    }

    // ---- block architecture ----------------------------------------------

    /// Append a new block of `block_type` to the current page and select it.
    ///
    /// The block starts from the factory defaults for its type, then a few
    /// style fields are forced toward global-DNA inheritance: background
    /// pattern and fill reset to null, and a baseline border radius is taken
    /// from the registry (GL07 Global) when the type does not set one.
    pub fn add_block(&mut self, block_type: &str) -> Uuid {
        self.capture_history();

        let mut overrides = block_defaults(block_type);
        if !overrides["style"].is_object() {
            overrides["style"] = json!({});
        }
        overrides["style"]["backgroundPattern"] = Value::Null;
        overrides["style"]["bgFill"] = Value::Null;
        let radius_is_set =
            overrides["style"].get("borderRadius").map_or(false, |v| !v.is_null());
        if !radius_is_set {
            let radius = self.settings.value_at("GL07", 0).unwrap_or("8");
            overrides["style"]["borderRadius"] = json!(format!("{radius}px"));
        }

        let block = ContentBlock::new(block_type, overrides);
        let id = block.id;
        debug!(%id, block_type, page = %self.document.current_page, "block added");

        self.document.current_blocks_mut().push(block);
        self.selected_block = Some(id);
        self.canvas_key += 1;
        id
    }

    /// Remove a block from the current page; clears the selection if it
    /// pointed at the removed block. Unknown ids are a no-op (after the
    /// history capture, matching the rest of the protocol).
    pub fn remove_block(&mut self, id: Uuid) {
        self.capture_history();
        self.document.remove_block(id);
        if self.selected_block == Some(id) {
            self.selected_block = None;
        }
    }

    /// Swap a block with its neighbor. Boundary moves keep the order but
    /// still capture history.
    pub fn move_block(&mut self, id: Uuid, direction: MoveDirection) {
        self.capture_history();
        self.document.move_block(id, direction);
    }

    /// Empty the current page
    pub fn clear_canvas(&mut self) {
        self.capture_history();
        self.document.current_blocks_mut().clear();
        self.canvas_key += 1;
    }

    /// Selection is not part of undo history; it is the one piece of
    /// UI-facing state the core owns.
    pub fn set_selected_block(&mut self, id: Option<Uuid>) {
        self.selected_block = id;
    }

    /// Flip a block's visibility. Deliberately not undoable: this is a
    /// transient display toggle, not a document edit (see DESIGN.md).
    pub fn toggle_block_visibility(&mut self, id: Uuid) {
        if let Some(block) = self.document.find_block_mut(id) {
            block.is_visible = !block.is_visible;
        }
    }

    /// Make every block on every page visible again and restore text
    /// brightness. Not undoable, like the visibility toggles it reverts.
    pub fn reset_visibility(&mut self) {
        for blocks in self.document.pages.values_mut() {
            for block in blocks {
                block.is_visible = true;
            }
        }
        self.ui_theme.ui_text_brightness = 100;
        self.canvas_key += 1;
    }

    // ---- pages ------------------------------------------------------------

    /// Switch the active page; unknown names are a no-op
    pub fn set_current_page(&mut self, name: &str) {
        if self.document.set_current_page(name) {
            self.canvas_key += 1;
        }
    }

    /// Create an empty page (idempotent)
    pub fn add_page(&mut self, name: &str) {
        self.capture_history();
        self.document.add_page(name);
    }

    // ---- override mutations ----------------------------------------------

    /// Apply a dotted-path write to a block's override tree.
    ///
    /// Every call counts as a user edit and is captured for undo, even when
    /// the block id turns out to be stale — a stale panel reference is
    /// harmless, not an error.
    pub fn update_block_override(&mut self, block_id: Uuid, path: &str, value: Value) {
        self.capture_history();
        let Some(block) = self.document.find_block_mut(block_id) else {
            debug!(%block_id, path, "override write for unknown block ignored");
            return;
        };
        mutations::set_path(&mut block.local_overrides, path, value);
    }

    // ---- global DNA -------------------------------------------------------

    /// Validated single-parameter edit (captured for undo)
    pub fn update_param(&mut self, group_id: &str, param_id: &str, raw: &str) {
        self.capture_history();
        self.settings.update_param(group_id, param_id, raw);
    }

    /// Positional raw import across groups. Treated as one coarse external
    /// load, so no history capture and no validation.
    pub fn bulk_update_dna(&mut self, updates: &std::collections::HashMap<String, Vec<String>>) {
        self.settings.bulk_update(updates);
    }

    /// Flip GL10 Theme Mode between Light and Dark, rewriting the GL02 color
    /// ramp and GL06 depth values to the matching palette.
    pub fn toggle_site_theme(&mut self) {
        self.capture_history();

        let next_is_dark = self.settings.value_at("GL10", 6) != Some("Dark");
        let mode = if next_is_dark { "Dark" } else { "Light" };
        self.settings.set_raw("GL10", 6, mode);

        let (colors, shadow, glass): ([&str; 6], &str, &str) = if next_is_dark {
            (["#1A1A1A", "#242424", "#60A5FA", "#F9FAFB", "#9CA3AF", "#374151"], "5", "20")
        } else {
            (["#FFFFFF", "#F3F4F6", "#3B82F6", "#1A1A1A", "#6B7280", "#E5E7EB"], "10", "100")
        };
        for (index, color) in colors.iter().enumerate() {
            self.settings.set_raw("GL02", index, color);
        }
        self.settings.set_raw("GL06", 0, shadow);
        self.settings.set_raw("GL06", 3, glass);
    }

    /// Stamp the global vertical padding (GL03 Pad Y) into every block's
    /// layout across all pages
    pub fn optimize_layout(&mut self) {
        self.capture_history();

        let Some(pad_y) = self.settings.value_at("GL03", 3).map(str::to_string) else {
            return;
        };
        for blocks in self.document.pages.values_mut() {
            for block in blocks {
                if block.local_overrides.get("layout").map_or(false, Value::is_object) {
                    block.local_overrides["layout"]["paddingTop"] = json!(pad_y);
                    block.local_overrides["layout"]["paddingBottom"] = json!(pad_y);
                }
            }
        }
    }

    // ---- UI theme ---------------------------------------------------------

    /// Apply a typed edit to the theme record (captured for undo)
    pub fn update_ui_theme(&mut self, edit: impl FnOnce(&mut UiTheme)) {
        self.capture_history();
        edit(&mut self.ui_theme);
    }

    /// Panel drags fire continuously; they track position without history
    pub fn update_panel_position(&mut self, x: f64, y: f64) {
        self.ui_theme.panel_x = x;
        self.ui_theme.panel_y = y;
    }

    /// Merge a named chrome preset over the current theme. Unknown names
    /// are a no-op (after the capture, as in the rest of the protocol).
    pub fn apply_theme_preset(&mut self, name: &str) {
        self.capture_history();
        if let Some(preset) = theme_preset(name) {
            self.ui_theme.apply_preset(preset);
        }
    }

    /// Bump the render-invalidation counter without touching state
    pub fn refresh_canvas(&mut self) {
        self.canvas_key += 1;
    }

    // ---- history ----------------------------------------------------------

    pub fn undo(&mut self) {
        if !self.history.can_undo() {
            return;
        }
        let current = self.current_snapshot();
        if let Some(previous) = self.history.undo(current) {
            self.restore(previous);
        }
    }

    pub fn redo(&mut self) {
        if !self.history.can_redo() {
            return;
        }
        let current = self.current_snapshot();
        if let Some(next) = self.history.redo(current) {
            self.restore(next);
        }
    }

    /// Wholesale state replacement from a snapshot. The current-page pointer
    /// is kept; if the restored pages no longer contain it, reads see an
    /// empty list until the pointer moves.
    fn restore(&mut self, snapshot: StateSnapshot) {
        self.document.pages = snapshot.pages;
        self.settings = snapshot.settings;
        self.ui_theme = snapshot.ui_theme;
        self.canvas_key += 1;
    }

    // ---- snapshot persistence ---------------------------------------------

    /// Write a named save point to durable storage and prepend it to the
    /// listing. Defaults the name to the wall-clock time. Returns the new id.
    pub fn save_snapshot(&mut self, name: Option<&str>) -> String {
        let id = Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().timestamp_millis();
        let name = name.map(str::to_string).unwrap_or_else(|| {
            format!("Snapshot {}", chrono::Local::now().format("%H:%M:%S"))
        });

        let persisted = PersistedSnapshot {
            id: id.clone(),
            name: name.clone(),
            timestamp,
            data: self.current_snapshot(),
        };
        match serde_json::to_string(&persisted) {
            Ok(payload) => {
                if let Err(err) = self.store.write(&storage_key(&id), &payload) {
                    warn!(%id, %err, "snapshot write failed");
                }
            }
            Err(err) => warn!(%id, %err, "snapshot serialization failed"),
        }

        self.snapshots.insert(0, SnapshotMeta { id: id.clone(), name, timestamp });
        id
    }

    /// Replace live state from a stored snapshot. Missing ids and unreadable
    /// payloads are logged no-ops; live state is only touched after a full
    /// successful parse.
    pub fn load_snapshot(&mut self, id: &str) {
        let Some(raw) = self.store.read(&storage_key(id)) else {
            debug!(id, "no stored snapshot under id");
            return;
        };
        match serde_json::from_str::<PersistedSnapshot>(&raw) {
            Ok(persisted) => {
                info!(id, name = %persisted.name, "restoring snapshot");
                self.restore(persisted.data);
            }
            Err(err) => warn!(id, %err, "stored snapshot is unreadable"),
        }
    }

    /// Recovery escape hatch: the reserved code loads the pre-seeded golden
    /// snapshot. Succeeds only if an operator actually seeded it.
    pub fn emergency_restore(&mut self, code: &str) {
        if code != EMERGENCY_CODE {
            return;
        }
        info!("emergency restore triggered");
        self.load_snapshot(GOLDEN_SNAPSHOT_ID);
    }

    // ---- project I/O ------------------------------------------------------

    /// The canonical project-state shape consumed by the exporter
    pub fn serialize_state(&self) -> ProjectData {
        ProjectData {
            ui_theme: self.ui_theme.clone(),
            global_settings: self.settings.clone(),
            pages: self.document.pages.clone(),
            current_page: Some(self.document.current_page.clone()),
        }
    }

    /// Pretty-printed project export
    pub fn export_project_data(&self) -> Result<String, EditorError> {
        io::export_project(&self.serialize_state())
    }

    /// Parse and apply an exported project. Malformed payloads error out
    /// with live state untouched.
    pub fn import_project_data(&mut self, json: &str) -> Result<(), EditorError> {
        let data = io::parse_project(json)?;
        self.apply_project_data(data);
        Ok(())
    }

    /// Replace live state wholesale from an already-parsed project. Falls
    /// back to the first available page when the payload names no current
    /// page.
    pub fn apply_project_data(&mut self, data: ProjectData) {
        let fallback =
            || data.pages.keys().next().cloned().unwrap_or_else(|| DEFAULT_PAGE.to_string());
        self.document.current_page = data.current_page.clone().unwrap_or_else(fallback);
        self.document.pages = data.pages;
        self.settings = data.global_settings;
        self.ui_theme = data.ui_theme;
    }
}

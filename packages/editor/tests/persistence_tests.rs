//! Snapshot persistence and project import/export against real stores

use serde_json::json;

use gridstudio_editor::{
    storage_key, DiskStore, EditSession, KeyValueStore, MemoryStore, PersistedSnapshot,
    GOLDEN_SNAPSHOT_ID,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_save_then_load_roundtrip() {
    let mut session = EditSession::in_memory();
    let hero = session.add_block("B0201");
    session.update_block_override(hero, "data.title", json!("BASELINE"));

    let id = session.save_snapshot(Some("baseline"));
    assert_eq!(session.snapshot_list()[0].name, "baseline");
    assert_eq!(session.snapshot_list()[0].id, id);

    // Drift away from the saved state
    session.update_block_override(hero, "data.title", json!("DRIFTED"));
    session.update_param("GL01", "P1", "22");
    session.clear_canvas();
    assert!(session.document().current_blocks().is_empty());

    session.load_snapshot(&id);
    assert_eq!(session.document().current_blocks().len(), 1);
    assert_eq!(session.block_override(hero, "data.title"), Some(&json!("BASELINE")));
    assert_eq!(session.settings().param("GL01", "P1").unwrap().value, "16");
}

#[test]
fn test_default_snapshot_name_is_timestamped() {
    let mut session = EditSession::in_memory();
    session.save_snapshot(None);
    assert!(session.snapshot_list()[0].name.starts_with("Snapshot "));
}

#[test]
fn test_listing_is_newest_first() {
    let mut session = EditSession::in_memory();
    let first = session.save_snapshot(Some("first"));
    let second = session.save_snapshot(Some("second"));

    let ids: Vec<&str> = session.snapshot_list().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec![second.as_str(), first.as_str()]);
}

#[test]
fn test_load_unknown_id_is_a_noop() {
    let mut session = EditSession::in_memory();
    session.add_block("B0901");
    let before = session.current_snapshot();

    session.load_snapshot("no-such-id");
    assert_eq!(session.current_snapshot(), before);
}

#[test]
fn test_corrupt_payload_is_rejected_whole() {
    init_tracing();
    let mut store = MemoryStore::new();
    store.write(&storage_key("broken"), "{ definitely not json").unwrap();

    let mut session = EditSession::new(Box::new(store));
    session.add_block("B0901");
    let before = session.current_snapshot();

    session.load_snapshot("broken");
    assert_eq!(session.current_snapshot(), before);
}

#[test]
fn test_emergency_restore_requires_code_and_seed() {
    let mut session = EditSession::in_memory();
    session.add_block("B0901");
    let before = session.current_snapshot();

    // Wrong code: nothing happens
    session.emergency_restore("777");
    assert_eq!(session.current_snapshot(), before);

    // Right code but no seeded golden snapshot: best-effort no-op
    session.emergency_restore("666");
    assert_eq!(session.current_snapshot(), before);
}

#[test]
fn test_emergency_restore_loads_seeded_golden() {
    // An operator seeds the golden snapshot out-of-band
    let mut scratch = EditSession::in_memory();
    scratch.add_block("B0101");
    scratch.add_block("B0201");
    let golden = PersistedSnapshot {
        id: GOLDEN_SNAPSHOT_ID.to_string(),
        name: "Golden baseline".to_string(),
        timestamp: 0,
        data: scratch.current_snapshot(),
    };

    let mut store = MemoryStore::new();
    store
        .write(&storage_key(GOLDEN_SNAPSHOT_ID), &serde_json::to_string(&golden).unwrap())
        .unwrap();

    let mut session = EditSession::new(Box::new(store));
    assert!(session.document().current_blocks().is_empty());

    session.emergency_restore("666");
    assert_eq!(session.document().current_blocks().len(), 2);
    assert_eq!(session.document().current_blocks()[0].block_type, "B0101");
}

#[test]
fn test_snapshots_survive_process_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let id = {
        let mut session = EditSession::new(Box::new(DiskStore::new(dir.path())));
        let spacer = session.add_block("B0901");
        session.update_block_override(spacer, "layout.height", json!("200"));
        session.save_snapshot(Some("persisted"))
    };

    // Fresh session over the same directory: the payload is still there
    let mut session = EditSession::new(Box::new(DiskStore::new(dir.path())));
    assert!(session.document().current_blocks().is_empty());

    session.load_snapshot(&id);
    assert_eq!(session.document().current_blocks().len(), 1);
    let block = &session.document().current_blocks()[0];
    assert_eq!(block.local_overrides["layout"]["height"], json!("200"));
}

#[test]
fn test_export_import_roundtrip() -> anyhow::Result<()> {
    let mut session = EditSession::in_memory();
    let hero = session.add_block("B0201");
    session.update_block_override(hero, "data.title", json!("EXPORTED"));
    session.add_page("about");
    session.set_current_page("about");
    session.update_param("GL02", "P3", "#ABCDEF");

    let text = session.export_project_data()?;

    let mut imported = EditSession::in_memory();
    imported.import_project_data(&text)?;

    assert_eq!(imported.serialize_state(), session.serialize_state());
    assert_eq!(imported.document().current_page, "about");
    Ok(())
}

#[test]
fn test_malformed_import_leaves_state_untouched() {
    let mut session = EditSession::in_memory();
    session.add_block("B0901");
    let before = session.current_snapshot();

    assert!(session.import_project_data("][ nope").is_err());
    assert!(session.import_project_data("{\"pages\": {}}").is_err());
    assert_eq!(session.current_snapshot(), before);
}

#[test]
fn test_import_without_current_page_falls_back_to_first() -> anyhow::Result<()> {
    let mut source = EditSession::in_memory();
    source.add_page("landing");
    source.set_current_page("landing");
    source.add_block("B0201");

    let mut raw: serde_json::Value = serde_json::from_str(&source.export_project_data()?)?;
    raw.as_object_mut().unwrap().remove("currentPage");

    let mut session = EditSession::in_memory();
    session.import_project_data(&raw.to_string())?;

    // First page key wins when the payload names no current page
    assert_eq!(session.document().current_page, "home");
    session.set_current_page("landing");
    assert_eq!(session.document().current_blocks().len(), 1);
    Ok(())
}

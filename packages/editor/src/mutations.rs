//! # Override-Tree Mutations
//!
//! Dotted-path writes against a block's override tree.
//!
//! ## Path semantics
//!
//! A path like `"data.links.0.label"` addresses one location in the nested
//! tree. Walking the path synthesizes missing intermediate containers: a
//! segment whose *next* segment parses as a non-negative integer becomes an
//! array, anything else becomes an object. This is what keeps list-editing
//! UIs (nav links, gallery items, steps) working with real arrays instead of
//! objects with `"0"`/`"1"` keys after a few edits.
//!
//! ## Failure behavior
//!
//! `set_path` never fails for a well-formed path. Writes that cannot land
//! anywhere sensible are dropped rather than raised:
//! - a non-numeric key against an array drops the write, leaving the array
//!   intact
//! - a scalar sitting where the path needs a container is replaced by the
//!   container shape the path requires
//!
//! Indexing past the end of an array grows it with `null` padding, so sparse
//! writes serialize the same way the exported JSON always has.

use serde_json::{Map, Value};

/// Assign `value` at `path` inside `root`, creating intermediate containers
/// as needed.
pub fn set_path(root: &mut Value, path: &str, value: Value) {
    let keys: Vec<&str> = path.split('.').collect();
    set_path_inner(root, &keys, value);
}

fn set_path_inner(current: &mut Value, keys: &[&str], value: Value) {
    let key = keys[0];

    if keys.len() == 1 {
        assign(current, key, value);
        return;
    }

    let next_is_index = parse_index(keys[1]).is_some();

    match current {
        Value::Object(map) => {
            let slot = map.entry(key.to_string()).or_insert(Value::Null);
            ensure_container(slot, next_is_index);
            set_path_inner(slot, &keys[1..], value);
        }
        Value::Array(items) => {
            let Some(index) = parse_index(key) else {
                // Non-index key against an array: the write has nowhere to go
                return;
            };
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            let slot = &mut items[index];
            ensure_container(slot, next_is_index);
            set_path_inner(slot, &keys[1..], value);
        }
        other => {
            // Scalar where the path needs a container
            *other = empty_container(parse_index(key).is_some());
            set_path_inner(other, keys, value);
        }
    }
}

/// Read the value at `path`, if the whole path resolves
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for key in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(key)?,
            Value::Array(items) => items.get(parse_index(key)?)?,
            _ => return None,
        };
    }
    Some(current)
}

fn assign(container: &mut Value, key: &str, value: Value) {
    match container {
        Value::Object(map) => {
            map.insert(key.to_string(), value);
        }
        Value::Array(items) => {
            let Some(index) = parse_index(key) else {
                return;
            };
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            items[index] = value;
        }
        other => {
            let is_index = parse_index(key).is_some();
            *other = empty_container(is_index);
            assign(other, key, value);
        }
    }
}

/// Replace a slot with the needed container kind unless it already is one
fn ensure_container(slot: &mut Value, next_is_index: bool) {
    if !matches!(slot, Value::Object(_) | Value::Array(_)) {
        *slot = empty_container(next_is_index);
    }
}

fn empty_container(as_array: bool) -> Value {
    if as_array {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

fn parse_index(key: &str) -> Option<usize> {
    key.parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shallow_write() {
        let mut root = json!({});
        set_path(&mut root, "inheritance", json!("0111GL"));
        assert_eq!(root, json!({ "inheritance": "0111GL" }));
    }

    #[test]
    fn test_deep_write_synthesizes_objects() {
        let mut root = json!({});
        set_path(&mut root, "media.imagePosition", json!("left"));
        assert_eq!(root, json!({ "media": { "imagePosition": "left" } }));
    }

    #[test]
    fn test_numeric_segment_synthesizes_array() {
        let mut root = json!({});
        set_path(&mut root, "data.links.0.label", json!("Home"));
        assert_eq!(root, json!({ "data": { "links": [{ "label": "Home" }] } }));

        // The container must be a real array, not an object keyed "0"
        assert!(root["data"]["links"].is_array());
    }

    #[test]
    fn test_existing_array_entries_are_updated_in_place() {
        let mut root = json!({
            "data": { "links": [{ "label": "System", "url": "#" }, { "label": "Nodes", "url": "#" }] }
        });
        set_path(&mut root, "data.links.1.label", json!("Mesh"));
        assert_eq!(root["data"]["links"][1], json!({ "label": "Mesh", "url": "#" }));
        assert_eq!(root["data"]["links"][0]["label"], json!("System"));
    }

    #[test]
    fn test_sparse_array_write_pads_with_null() {
        let mut root = json!({ "data": { "tags": ["a"] } });
        set_path(&mut root, "data.tags.3", json!("d"));
        assert_eq!(root["data"]["tags"], json!(["a", null, null, "d"]));
    }

    #[test]
    fn test_scalar_intermediate_is_replaced() {
        let mut root = json!({ "layout": { "height": "80" } });
        set_path(&mut root, "layout.height.unit", json!("px"));
        assert_eq!(root["layout"]["height"], json!({ "unit": "px" }));
    }

    #[test]
    fn test_null_intermediate_is_replaced() {
        let mut root = json!({ "style": { "bgFill": null } });
        set_path(&mut root, "style.bgFill.color", json!("#fff"));
        assert_eq!(root["style"]["bgFill"], json!({ "color": "#fff" }));
    }

    #[test]
    fn test_non_index_key_on_array_drops_write() {
        let mut root = json!({ "data": { "links": [1, 2] } });
        set_path(&mut root, "data.links.label", json!("x"));
        assert_eq!(root["data"]["links"], json!([1, 2]));
    }

    #[test]
    fn test_roundtrip_mixed_depth() {
        let paths: &[(&str, Value)] = &[
            ("layout.height", json!("120")),
            ("data.groups.0.items.1.level", json!(85)),
            ("style.useGlobalDNA", json!(false)),
            ("data.groups.1.title", json!("Data Propagation")),
            ("media.imageOpacity", json!(100)),
        ];

        let mut root = json!({});
        for (path, value) in paths {
            set_path(&mut root, path, value.clone());
        }
        for (path, value) in paths {
            assert_eq!(get_path(&root, path), Some(value), "path {path}");
        }

        // Intermediate shapes: numeric segments became arrays, others objects
        assert!(root["data"]["groups"].is_array());
        assert!(root["data"]["groups"][0].is_object());
        assert!(root["data"]["groups"][0]["items"].is_array());
        assert!(root["layout"].is_object());
    }

    #[test]
    fn test_get_path_misses() {
        let root = json!({ "data": { "links": [{ "label": "a" }] } });
        assert_eq!(get_path(&root, "data.links.0.label"), Some(&json!("a")));
        assert!(get_path(&root, "data.links.1.label").is_none());
        assert!(get_path(&root, "data.missing").is_none());
        assert!(get_path(&root, "data.links.notanumber").is_none());
        assert!(get_path(&root, "data.links.0.label.deeper").is_none());
    }
}

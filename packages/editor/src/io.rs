//! # Project I/O
//!
//! The canonical project-state shape exchanged with the export/import
//! collaborator. Field names match the historical JSON exports so existing
//! project files round-trip unchanged.
//!
//! Import parses the full payload before anything touches live state: a
//! malformed document is reported to the caller and changes nothing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use gridstudio_dna::DnaRegistry;

use crate::document::ContentBlock;
use crate::errors::EditorError;
use crate::theme::UiTheme;

/// Everything a project export carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub ui_theme: UiTheme,
    pub global_settings: DnaRegistry,
    pub pages: IndexMap<String, Vec<ContentBlock>>,
    /// Older exports omit this; import falls back to the first page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<String>,
}

/// Parse an exported project. All-or-nothing: errors never leave a partially
/// deserialized result behind.
pub fn parse_project(json: &str) -> Result<ProjectData, EditorError> {
    Ok(serde_json::from_str(json)?)
}

/// Pretty-printed export, the inverse of [`parse_project`]
pub fn export_project(data: &ProjectData) -> Result<String, EditorError> {
    Ok(serde_json::to_string_pretty(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ProjectData {
        let mut pages = IndexMap::new();
        pages.insert(
            "home".to_string(),
            vec![ContentBlock::new("B0901", json!({ "layout": { "height": "120" } }))],
        );
        ProjectData {
            ui_theme: UiTheme::default(),
            global_settings: DnaRegistry::default(),
            pages,
            current_page: Some("home".to_string()),
        }
    }

    #[test]
    fn test_export_parse_roundtrip() {
        let data = sample();
        let text = export_project(&data).unwrap();
        let back = parse_project(&text).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_export_uses_wire_field_names() {
        let text = export_project(&sample()).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(raw.get("uiTheme").is_some());
        assert!(raw.get("globalSettings").is_some());
        assert_eq!(raw.get("currentPage"), Some(&json!("home")));
    }

    #[test]
    fn test_missing_current_page_parses() {
        let mut raw = serde_json::to_value(sample()).unwrap();
        raw.as_object_mut().unwrap().remove("currentPage");
        let data: ProjectData = serde_json::from_value(raw).unwrap();
        assert_eq!(data.current_page, None);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(parse_project("not json at all").is_err());
        assert!(parse_project("{\"pages\": {}}").is_err()); // missing required shape
    }
}

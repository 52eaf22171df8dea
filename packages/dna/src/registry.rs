use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog;
use crate::params::{DnaParameter, ParamType, SettingGroup};

/// The global design-parameter registry.
///
/// Built once from the fixed catalog; structurally immutable afterwards.
/// All value writes funnel through [`DnaRegistry::update_param`] (validated,
/// interactive) or the positional raw setters (bulk import, theme flips).
///
/// Serializes transparently as the plain `groupId -> group` mapping so
/// project exports stay stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DnaRegistry {
    groups: IndexMap<String, SettingGroup>,
}

impl Default for DnaRegistry {
    fn default() -> Self {
        catalog::default_registry()
    }
}

impl DnaRegistry {
    pub(crate) fn from_groups(groups: IndexMap<String, SettingGroup>) -> Self {
        Self { groups }
    }

    pub fn group(&self, group_id: &str) -> Option<&SettingGroup> {
        self.groups.get(group_id)
    }

    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn param(&self, group_id: &str, param_id: &str) -> Option<&DnaParameter> {
        self.group(group_id)?.param(param_id)
    }

    /// Positional read, used where consumers address parameters by index
    pub fn value_at(&self, group_id: &str, index: usize) -> Option<&str> {
        self.group(group_id)?.params.get(index).map(|p| p.value.as_str())
    }

    /// Validated value update. Unknown group/param ids and values that fail
    /// the parameter's type rules are silent no-ops; interactive editing
    /// produces plenty of transient garbage and none of it is exceptional.
    ///
    /// Returns whether the stored value changed.
    pub fn update_param(&mut self, group_id: &str, param_id: &str, raw: &str) -> bool {
        let Some(param) = self
            .groups
            .get_mut(group_id)
            .and_then(|g| g.params.iter_mut().find(|p| p.id == param_id))
        else {
            debug!(group = group_id, param = param_id, "update for unknown parameter ignored");
            return false;
        };

        match normalize(param, raw) {
            Some(value) => {
                let changed = param.value != value;
                param.value = value;
                changed
            }
            None => {
                debug!(
                    group = group_id,
                    param = param_id,
                    raw,
                    "rejected value, keeping previous"
                );
                false
            }
        }
    }

    /// Positional raw write without validation. Unknown groups and
    /// out-of-range indices are skipped. Returns whether a write happened.
    pub fn set_raw(&mut self, group_id: &str, index: usize, value: &str) -> bool {
        match self.groups.get_mut(group_id).and_then(|g| g.params.get_mut(index)) {
            Some(param) => {
                param.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Coarse-grained positional import: for each group, values are assigned
    /// to parameters in index order. Not validated and not snapshotted by
    /// callers — this is an external data load, not an interactive edit.
    pub fn bulk_update(&mut self, updates: &HashMap<String, Vec<String>>) {
        for (group_id, values) in updates {
            for (index, value) in values.iter().enumerate() {
                self.set_raw(group_id, index, value);
            }
        }
    }

    /// Replace every group wholesale (snapshot restore / project import)
    pub fn replace(&mut self, other: DnaRegistry) {
        self.groups = other.groups;
    }
}

/// Apply type-specific normalization; `None` means the raw value is rejected
/// and the previous value must be kept.
fn normalize(param: &DnaParameter, raw: &str) -> Option<String> {
    match param.param_type {
        ParamType::Range => {
            let num: f64 = raw.trim().parse().ok().filter(|n: &f64| n.is_finite())?;
            let min = param.min.unwrap_or(0.0);
            let max = param.max.unwrap_or(100.0);
            Some(num.clamp(min, max).to_string())
        }
        ParamType::Toggle => {
            let on = raw == "true" || raw == "1";
            Some(if on { "true" } else { "false" }.to_string())
        }
        ParamType::Color => is_hex_color(raw).then(|| raw.to_string()),
        ParamType::Select => match &param.options {
            Some(options) => options.iter().any(|o| o == raw).then(|| raw.to_string()),
            // Open enum when no option list is defined
            None => Some(raw.to_string()),
        },
    }
}

/// `#RGB` or `#RRGGBB`, case-insensitive
fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_clamps_to_bounds() {
        let mut registry = DnaRegistry::default();

        // GL01/P1 Base Size is [10, 24]
        assert!(registry.update_param("GL01", "P1", "99"));
        assert_eq!(registry.param("GL01", "P1").unwrap().value, "24");

        assert!(registry.update_param("GL01", "P1", "3"));
        assert_eq!(registry.param("GL01", "P1").unwrap().value, "10");

        assert!(registry.update_param("GL01", "P1", "18.5"));
        assert_eq!(registry.param("GL01", "P1").unwrap().value, "18.5");
    }

    #[test]
    fn test_range_rejects_non_numeric() {
        let mut registry = DnaRegistry::default();
        assert!(!registry.update_param("GL01", "P1", "big"));
        assert_eq!(registry.param("GL01", "P1").unwrap().value, "16");

        assert!(!registry.update_param("GL01", "P1", "NaN"));
        assert_eq!(registry.param("GL01", "P1").unwrap().value, "16");
    }

    #[test]
    fn test_clamped_values_format_like_inputs() {
        let mut registry = DnaRegistry::default();
        // Whole numbers must not grow a trailing ".0"
        registry.update_param("GL03", "P6", "5000");
        assert_eq!(registry.param("GL03", "P6").unwrap().value, "1920");
    }

    #[test]
    fn test_toggle_coercion() {
        let mut registry = DnaRegistry::default();

        registry.update_param("GL01", "P6", "true");
        assert_eq!(registry.param("GL01", "P6").unwrap().value, "true");

        registry.update_param("GL01", "P6", "off");
        assert_eq!(registry.param("GL01", "P6").unwrap().value, "false");

        // "1" counts as on
        registry.update_param("GL01", "P6", "1");
        assert_eq!(registry.param("GL01", "P6").unwrap().value, "true");
    }

    #[test]
    fn test_color_gate() {
        let mut registry = DnaRegistry::default();

        assert!(registry.update_param("GL02", "P1", "#fff"));
        assert_eq!(registry.param("GL02", "P1").unwrap().value, "#fff");

        assert!(registry.update_param("GL02", "P1", "#1A2B3C"));
        assert_eq!(registry.param("GL02", "P1").unwrap().value, "#1A2B3C");

        for bad in ["red", "#12", "#12345", "#GGGGGG", "1A2B3C"] {
            assert!(!registry.update_param("GL02", "P1", bad), "accepted {bad:?}");
        }
        assert_eq!(registry.param("GL02", "P1").unwrap().value, "#1A2B3C");
    }

    #[test]
    fn test_select_membership() {
        let mut registry = DnaRegistry::default();

        assert!(registry.update_param("GL02", "P8", "Dots"));
        assert_eq!(registry.param("GL02", "P8").unwrap().value, "Dots");

        assert!(!registry.update_param("GL02", "P8", "Stripes"));
        assert_eq!(registry.param("GL02", "P8").unwrap().value, "Dots");
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut registry = DnaRegistry::default();
        let before = registry.clone();

        assert!(!registry.update_param("GL99", "P1", "10"));
        assert!(!registry.update_param("GL01", "P99", "10"));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_bulk_update_is_positional_and_lenient() {
        let mut registry = DnaRegistry::default();

        let mut updates = HashMap::new();
        updates.insert(
            "GL11".to_string(),
            vec!["false".to_string(), "ignored-overflow".to_string()],
        );
        updates.insert("GL99".to_string(), vec!["x".to_string()]);
        registry.bulk_update(&updates);

        assert_eq!(registry.value_at("GL11", 0), Some("false"));
        // Out-of-range index and unknown group were skipped without error
        assert_eq!(registry.group("GL11").unwrap().params.len(), 1);
        assert!(registry.group("GL99").is_none());
    }

    #[test]
    fn test_bulk_update_skips_validation() {
        let mut registry = DnaRegistry::default();
        let mut updates = HashMap::new();
        // A raw import may carry values an interactive edit would reject
        updates.insert("GL01".to_string(), vec!["9999".to_string()]);
        registry.bulk_update(&updates);
        assert_eq!(registry.value_at("GL01", 0), Some("9999"));
    }
}

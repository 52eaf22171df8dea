use serde::{Deserialize, Serialize};

/// Parameter value kinds supported by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Range,
    Color,
    Toggle,
    Select,
}

/// A single typed design parameter.
///
/// The schema (`id`, `name`, `param_type`, `min`, `max`, `options`) is fixed
/// when the registry is built; only `value` mutates afterwards. Values are
/// stored as strings regardless of type — consumers parse them at the edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaParameter {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl DnaParameter {
    /// Toggle parameters store `"true"`/`"false"`
    pub fn is_on(&self) -> bool {
        self.value == "true"
    }
}

/// A named group of parameters, keyed in the registry by its group id
/// (e.g. `"GL02"` for Colors). Parameter order inside a group is positional
/// and significant: bulk imports address parameters by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingGroup {
    pub name: String,
    pub params: Vec<DnaParameter>,
}

impl SettingGroup {
    pub fn param(&self, param_id: &str) -> Option<&DnaParameter> {
        self.params.iter().find(|p| p.id == param_id)
    }
}

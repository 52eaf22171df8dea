//! Fixed parameter catalog for the global DNA registry.
//!
//! Twelve groups, GL01..GL12. The table is data, not behavior: group and
//! parameter identity never changes at runtime, so the registry can be
//! rebuilt deterministically from here at every startup.

use indexmap::IndexMap;

use crate::params::{DnaParameter, ParamType, SettingGroup};
use crate::registry::DnaRegistry;

struct ParamRow {
    name: &'static str,
    value: &'static str,
    param_type: ParamType,
    min: f64,
    max: f64,
    options: Option<&'static [&'static str]>,
}

const fn range(name: &'static str, value: &'static str, min: f64, max: f64) -> ParamRow {
    ParamRow { name, value, param_type: ParamType::Range, min, max, options: None }
}

const fn color(name: &'static str, value: &'static str) -> ParamRow {
    ParamRow { name, value, param_type: ParamType::Color, min: 0.0, max: 0.0, options: None }
}

const fn toggle(name: &'static str, value: &'static str) -> ParamRow {
    ParamRow { name, value, param_type: ParamType::Toggle, min: 0.0, max: 0.0, options: None }
}

const fn select(
    name: &'static str,
    value: &'static str,
    options: &'static [&'static str],
) -> ParamRow {
    ParamRow { name, value, param_type: ParamType::Select, min: 0.0, max: 0.0, options: Some(options) }
}

const FONT_FAMILIES: &[&str] = &[
    "Space Grotesk",
    "Inter",
    "Roboto",
    "Open Sans",
    "Manrope",
    "Agency",
    "Ancorli",
    "Share Tech",
    "Lilex",
    "Orbitron",
    "Google Sans",
    "Code",
];

const BG_PATTERNS: &[&str] = &["None", "Noise", "Dots", "Checkered", "Grid"];

const LANGUAGES: &[&str] = &["en", "uk", "de", "fr", "es", "it", "zh", "ru"];

const GROUPS: &[(&str, &str, &[ParamRow])] = &[
    (
        "GL01",
        "Text",
        &[
            range("Base Size", "16", 10.0, 24.0),
            range("Scale Ratio", "1.25", 1.1, 2.0),
            range("Line Height", "1.5", 1.0, 2.5),
            range("Weight", "900", 100.0, 900.0),
            range("Tracking", "-0.02", -0.05, 0.5),
            toggle("Uppercase", "false"),
            toggle("Smoothing", "true"),
            select("Font Family", "Space Grotesk", FONT_FAMILIES),
        ],
    ),
    (
        "GL02",
        "Colors",
        &[
            color("Base Bg", "#09090B"),
            color("Surface", "#18181B"),
            color("Accent", "#3B82F6"),
            color("Text Prim", "#FFFFFF"),
            color("Text Sec", "#A1A1AA"),
            color("Border", "#27272A"),
            toggle("Inversion", "false"),
            select("BG Pattern", "None", BG_PATTERNS),
            range("Pattern Opacity", "10", 0.0, 100.0),
            range("Pattern Size", "20", 4.0, 100.0),
        ],
    ),
    (
        "GL03",
        "Spacing",
        &[
            range("Grid Unit", "8", 2.0, 16.0),
            range("Gap", "24", 0.0, 100.0),
            range("Pad X", "40", 0.0, 120.0),
            range("Pad Y", "20", 0.0, 80.0),
            range("Margin", "0", 0.0, 60.0),
            range("Container", "1200", 320.0, 1920.0),
            range("Flow", "1.0", 0.5, 2.0),
        ],
    ),
    (
        "GL04",
        "Buttons",
        &[
            range("Size", "1.0", 0.5, 2.0),
            range("Pad X", "24", 8.0, 64.0),
            range("Pad Y", "12", 4.0, 32.0),
            range("Typo", "12", 8.0, 24.0),
            range("Stroke", "1", 0.0, 4.0),
            range("Radius", "4", 0.0, 40.0),
            toggle("Shadow", "false"),
        ],
    ),
    (
        "GL05",
        "Inputs",
        &[
            range("Height", "44", 32.0, 64.0),
            range("Radius", "4", 0.0, 32.0),
            range("Stroke", "1", 0.0, 3.0),
            color("Bg Fill", "#FFFFFF"),
            color("Focus", "#3B82F6"),
            color("Placeholder", "#9CA3AF"),
            color("Labels", "#374151"),
        ],
    ),
    (
        "GL06",
        "Effects & Depth",
        &[
            range("Shadow Intensity", "10", 0.0, 100.0),
            range("Shadow Blur", "20", 0.0, 60.0),
            range("Glass Blur", "0", 0.0, 40.0),
            range("Glass Opacity", "100", 0.0, 100.0),
            range("Border Width", "0", 0.0, 4.0),
            range("Border Opacity", "10", 0.0, 100.0),
            range("Inner Glow", "0", 0.0, 100.0),
        ],
    ),
    (
        "GL07",
        "Radius",
        &[
            range("Global", "8", 0.0, 40.0),
            range("Inner", "4", 0.0, 40.0),
            range("Outer", "12", 0.0, 40.0),
            range("Button", "4", 0.0, 40.0),
            range("Input", "4", 0.0, 40.0),
            range("Card", "16", 0.0, 40.0),
            range("Multiplier", "1.0", 0.5, 2.0),
        ],
    ),
    (
        "GL08",
        "Icons",
        &[
            range("Size", "20", 12.0, 48.0),
            range("Stroke", "1.5", 0.5, 3.0),
            range("Optical", "0", -2.0, 2.0),
            range("Align", "0.5", 0.0, 1.0),
            range("Set ID", "1", 1.0, 10.0),
            range("Style", "1", 1.0, 5.0),
            range("Spacing", "8", 0.0, 24.0),
        ],
    ),
    (
        "GL09",
        "Animation",
        &[
            range("Duration", "0.6", 0.1, 2.0),
            range("Easing", "0.1", 0.0, 0.5),
            range("Entrance", "20", 0.0, 100.0),
            range("Hover", "0.95", 0.8, 1.1),
            range("Scroll", "10", 0.0, 40.0),
            range("Loop", "1", 1.0, 5.0),
            range("Physics", "0.3", 0.1, 1.0),
        ],
    ),
    (
        "GL10",
        "System Meta",
        &[
            range("SEO", "0", 0.0, 0.0),
            range("Analytics", "0", 0.0, 0.0),
            range("API Root", "0", 0.0, 0.0),
            range("Export", "0", 0.0, 0.0),
            range("Meta", "0", 0.0, 0.0),
            range("Environment", "0", 0.0, 0.0),
            select("Theme Mode", "Dark", &["Light", "Dark"]),
        ],
    ),
    ("GL11", "Sticky Navigation", &[toggle("Sticky Mode", "true")]),
    (
        "GL12",
        "Language Settings",
        &[
            select("Default Language", "en", LANGUAGES),
            // Comma-separated; the UI treats this as a multi-select
            select("Available Languages", "en,uk,ru", LANGUAGES),
        ],
    ),
];

/// Build the default registry from the catalog table.
///
/// Parameter ids are positional (`P1`..`Pn`), and `min`/`max` are only
/// carried for range parameters.
pub(crate) fn default_registry() -> DnaRegistry {
    let mut groups = IndexMap::new();

    for (id, name, rows) in GROUPS {
        let params = rows
            .iter()
            .enumerate()
            .map(|(j, row)| {
                let is_range = row.param_type == ParamType::Range;
                DnaParameter {
                    id: format!("P{}", j + 1),
                    name: row.name.to_string(),
                    param_type: row.param_type,
                    value: row.value.to_string(),
                    min: is_range.then_some(row.min),
                    max: is_range.then_some(row.max),
                    options: row.options.map(|opts| opts.iter().map(|s| s.to_string()).collect()),
                }
            })
            .collect();

        groups.insert(id.to_string(), SettingGroup { name: name.to_string(), params });
    }

    DnaRegistry::from_groups(groups)
}

//! Editor-chrome appearance (not part of the rendered site, but included in
//! history snapshots and project exports).

use serde::{Deserialize, Serialize};

/// Flat record of editor-chrome appearance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiTheme {
    pub fonts: String,
    pub dark_panel: String,
    pub light_panel: String,
    pub elements: String,
    pub accents: String,
    pub interface_scale: u32,
    pub ui_font_weight: u32,
    pub ui_element_stroke: u32,
    pub ui_text_brightness: u32,
    pub ui_base_font_size: u32,
    pub panel_x: f64,
    pub panel_y: f64,
    pub is_floating: bool,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            fonts: "#FFFFFF".to_string(),
            dark_panel: "#0F172A".to_string(),
            light_panel: "#1E293B".to_string(),
            elements: "#38BDF8".to_string(),
            accents: "#3B82F6".to_string(),
            interface_scale: 105,
            ui_font_weight: 900,
            ui_element_stroke: 1,
            ui_text_brightness: 100,
            ui_base_font_size: 16,
            panel_x: 0.0,
            panel_y: 0.0,
            is_floating: false,
        }
    }
}

/// A named preset only replaces the five chrome colors; scale, weight and
/// panel placement survive the switch.
#[derive(Debug, Clone, Copy)]
pub struct ThemePreset {
    pub name: &'static str,
    pub fonts: &'static str,
    pub dark_panel: &'static str,
    pub light_panel: &'static str,
    pub elements: &'static str,
    pub accents: &'static str,
}

pub const THEME_PRESETS: &[ThemePreset] = &[
    ThemePreset {
        name: "Architect",
        fonts: "#111827",
        dark_panel: "#E5E7EB",
        light_panel: "#FFFFFF",
        elements: "#9CA3AF",
        accents: "#3B82F6",
    },
    ThemePreset {
        name: "Onyx",
        fonts: "#F9FAFB",
        dark_panel: "#111111",
        light_panel: "#1A1A1A",
        elements: "#374151",
        accents: "#60A5FA",
    },
    ThemePreset {
        name: "Blueprint",
        fonts: "#FFFFFF",
        dark_panel: "#0F172A",
        light_panel: "#1E293B",
        elements: "#334155",
        accents: "#38BDF8",
    },
];

pub fn theme_preset(name: &str) -> Option<&'static ThemePreset> {
    THEME_PRESETS.iter().find(|p| p.name == name)
}

impl UiTheme {
    pub fn apply_preset(&mut self, preset: &ThemePreset) {
        self.fonts = preset.fonts.to_string();
        self.dark_panel = preset.dark_panel.to_string();
        self.light_panel = preset.light_panel.to_string();
        self.elements = preset.elements.to_string();
        self.accents = preset.accents.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        assert!(theme_preset("Onyx").is_some());
        assert!(theme_preset("onyx").is_none());
        assert!(theme_preset("Neon").is_none());
    }

    #[test]
    fn test_preset_only_touches_colors() {
        let mut theme = UiTheme { interface_scale: 120, panel_x: 33.0, ..UiTheme::default() };
        theme.apply_preset(theme_preset("Architect").unwrap());

        assert_eq!(theme.fonts, "#111827");
        assert_eq!(theme.dark_panel, "#E5E7EB");
        assert_eq!(theme.interface_scale, 120);
        assert_eq!(theme.panel_x, 33.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let v = serde_json::to_value(UiTheme::default()).unwrap();
        assert!(v.get("darkPanel").is_some());
        assert!(v.get("uiFontWeight").is_some());
        assert!(v.get("isFloating").is_some());
    }
}

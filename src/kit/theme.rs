// Theme support for OrbitKit

use serde::{Deserialize, Serialize};

/// Theme for OrbitKit.
///
/// Components look the theme up through their context provider and fall back
/// to [`Theme::default`] when none is provided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Prefix for every CSS class a component emits
    pub class_prefix: String,
    /// Primary color
    pub primary_color: String,
    /// Text color
    pub text_color: String,
    /// Background color
    pub background_color: String,
    /// Border color
    pub border_color: String,
    /// Error color
    pub error_color: String,
    /// Background of selected table rows
    pub selected_background: String,
    /// Background of every other table row when striping is on
    pub stripe_background: String,
    /// Border radius
    pub border_radius: String,
    /// Font family
    pub font_family: String,
    /// Font size
    pub font_size: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            class_prefix: "orbit".to_string(),
            primary_color: "#0070f3".to_string(),
            text_color: "#333333".to_string(),
            background_color: "#ffffff".to_string(),
            border_color: "#d9d9d9".to_string(),
            error_color: "#ff0000".to_string(),
            selected_background: "#e6f0ff".to_string(),
            stripe_background: "#f5f5f5".to_string(),
            border_radius: "4px".to_string(),
            font_family: "Arial, sans-serif".to_string(),
            font_size: "16px".to_string(),
        }
    }
}

impl Theme {
    /// BEM-style class name: `block`, or `block__element` when `element` is non-empty
    pub fn class(&self, block: &str, element: &str) -> String {
        if element.is_empty() {
            format!("{}-{}", self.class_prefix, block)
        } else {
            format!("{}-{}__{}", self.class_prefix, block, element)
        }
    }

    /// Modifier class for a block, e.g. `orbit-input--invalid`
    pub fn modifier(&self, block: &str, modifier: &str) -> String {
        format!("{}-{}--{}", self.class_prefix, block, modifier)
    }

    /// Inline text and surface style shared by every component root
    pub fn base_style(&self) -> String {
        format!(
            "color: {}; background: {}; font-family: {}; font-size: {}; accent-color: {}",
            self.text_color,
            self.background_color,
            self.font_family,
            self.font_size,
            self.primary_color
        )
    }
}

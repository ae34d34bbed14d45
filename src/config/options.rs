//! Naming and rendering options.
//!
//! Every field has a default; a partial options object in a project file
//! only replaces the fields it names.

use serde::{Deserialize, Serialize};

use crate::color::ColorFormat;

/// Placeholder substituted with the mode name in selector templates.
pub const MODE_PLACEHOLDER: &str = "{mode}";

/// Options controlling token names and output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub prefixes: Prefixes,
    /// Joins the parts of a token name.
    pub separator: String,
    /// Infix marking alpha variants: `clr-bg-a-lo`.
    pub alpha_modifier: String,
    pub selectors: Selectors,
    pub color_format: ColorFormat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            prefixes: Prefixes::default(),
            separator: "-".to_string(),
            alpha_modifier: "a".to_string(),
            selectors: Selectors::default(),
            color_format: ColorFormat::default(),
        }
    }
}

impl Options {
    /// Join name parts with the configured separator.
    pub fn name<S: AsRef<str>>(&self, parts: &[S]) -> String {
        parts
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(&self.separator)
    }
}

/// Token name prefix per family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Prefixes {
    pub color: String,
    pub spacing: String,
    pub gap: String,
    pub typography: String,
    pub border_radius: String,
    pub border_width: String,
    pub time: String,
}

impl Default for Prefixes {
    fn default() -> Self {
        Self {
            color: "clr".to_string(),
            spacing: "sp".to_string(),
            gap: "gap".to_string(),
            typography: "fs".to_string(),
            border_radius: "bdr".to_string(),
            border_width: "bdw".to_string(),
            time: "t".to_string(),
        }
    }
}

/// CSS selectors: the root block and one template per mode category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub root: String,
    pub color: String,
    pub size: String,
    pub time: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            root: ":root".to_string(),
            color: r#"[data-color-mode="{mode}"]"#.to_string(),
            size: r#"[data-size-mode="{mode}"]"#.to_string(),
            time: r#"[data-time-mode="{mode}"]"#.to_string(),
        }
    }
}

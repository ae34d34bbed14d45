//! Token configuration types.
//!
//! A configuration holds up to seven token families. Each family is a list
//! of named modes; one mode is the default and the rest are overrides.
//! Scalar fields are optional here and checked by `validation`, so a
//! missing value is reported with its field path rather than as a parse
//! failure.

mod file;
mod options;

pub use file::ProjectFile;
pub use options::{Options, Prefixes, Selectors, MODE_PLACEHOLDER};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::ColorValue;

/// Alpha level name -> opacity fraction in `[0, 1]`.
pub type AlphaSchedule = IndexMap<String, f64>;

/// Colour name -> colour. A `None` entry is a hole in a sparse override.
pub type ColorTokens = IndexMap<String, Option<ColorValue>>;

/// The full declarative input to `generate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Family<ScaleTokens>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<Family<StepTokens>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<Family<TypographyTokens>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<Family<StepTokens>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<Family<BorderWidthTokens>>,
    /// Time scales. Every mode is emitted side by side; see `generator::time`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Family<ScaleTokens>>,
}

/// Anything that can take part in default-mode selection.
pub trait NamedMode {
    fn name(&self) -> &str;
    fn is_default(&self) -> bool;
}

/// A token family: an ordered list of modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family<T> {
    pub modes: Vec<Mode<T>>,
}

impl<T> Family<T> {
    pub fn new(modes: Vec<Mode<T>>) -> Self {
        Self { modes }
    }

    /// Find a mode by name.
    pub fn mode(&self, name: &str) -> Option<&Mode<T>> {
        self.modes.iter().find(|m| m.name == name)
    }
}

/// One named variant of a family's settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode<T> {
    pub name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_default: bool,
    pub tokens: T,
}

impl<T> Mode<T> {
    pub fn new(name: impl Into<String>, tokens: T) -> Self {
        Self {
            name: name.into(),
            is_default: false,
            tokens,
        }
    }

    /// Flag this mode as the family default.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

impl<T> NamedMode for Mode<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_default(&self) -> bool {
        self.is_default
    }
}

/// The colour family, with a family-wide alpha schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorFamily {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<AlphaSchedule>,
    pub modes: Vec<ColorMode>,
}

impl ColorFamily {
    pub fn new(modes: Vec<ColorMode>) -> Self {
        Self { alpha: None, modes }
    }

    pub fn with_alpha(mut self, alpha: AlphaSchedule) -> Self {
        self.alpha = Some(alpha);
        self
    }
}

/// A colour mode. It may replace the family alpha schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMode {
    pub name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<AlphaSchedule>,
    pub tokens: ColorTokens,
}

impl ColorMode {
    pub fn new(name: impl Into<String>, tokens: ColorTokens) -> Self {
        Self {
            name: name.into(),
            is_default: false,
            alpha: None,
            tokens,
        }
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn with_alpha(mut self, alpha: AlphaSchedule) -> Self {
        self.alpha = Some(alpha);
        self
    }
}

impl NamedMode for ColorMode {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_default(&self) -> bool {
        self.is_default
    }
}

/// A multiplicative scale: `min`, then `base * n` for `n` in `1..=range`.
///
/// Used by spacing and time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<f64>,
}

impl ScaleTokens {
    pub fn new(unit: impl Into<String>, base: f64, min: f64, range: u32) -> Self {
        Self {
            unit: Some(unit.into()),
            base: Some(base),
            min: Some(min),
            range: Some(f64::from(range)),
        }
    }
}

/// An additive type scale: `min`, `base`, then `base + increment * (n - 1)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypographyTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<f64>,
}

impl TypographyTokens {
    pub fn new(unit: impl Into<String>, base: f64, min: f64, increment: f64, range: u32) -> Self {
        Self {
            unit: Some(unit.into()),
            base: Some(base),
            min: Some(min),
            increment: Some(increment),
            range: Some(f64::from(range)),
        }
    }
}

/// A single border width per mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderWidthTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl BorderWidthTokens {
    pub fn new(unit: impl Into<String>, value: f64) -> Self {
        Self {
            unit: Some(unit.into()),
            value: Some(value),
        }
    }
}

/// Steps expressed against the spacing scale (gap, border radius).
///
/// Every key other than `unit` and `spacingMode` is a step name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_mode: Option<String>,
    #[serde(flatten)]
    pub steps: IndexMap<String, StepRef>,
}

impl StepTokens {
    pub fn new<K: Into<String>>(steps: impl IntoIterator<Item = (K, StepRef)>) -> Self {
        Self {
            unit: None,
            spacing_mode: None,
            steps: steps.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn with_spacing_mode(mut self, mode: impl Into<String>) -> Self {
        self.spacing_mode = Some(mode.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// A reference into the spacing scale: the `"min"` keyword or a step index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepRef {
    Index(f64),
    Keyword(String),
}

impl StepRef {
    pub const MIN: &'static str = "min";

    pub fn min() -> Self {
        StepRef::Keyword(Self::MIN.to_string())
    }

    pub fn index(n: u32) -> Self {
        StepRef::Index(f64::from(n))
    }
}

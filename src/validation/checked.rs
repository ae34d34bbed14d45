//! Parameters that have passed validation.
//!
//! Generators consume these instead of the raw configuration, so every
//! required field is present and within range by construction.

use crate::color::Oklch;
use crate::config::{AlphaSchedule, NamedMode};

/// A validated mode.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedMode<T> {
    pub name: String,
    pub is_default: bool,
    pub params: T,
}

impl<T> NamedMode for CheckedMode<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_default(&self) -> bool {
        self.is_default
    }
}

/// A multiplicative scale (spacing, time).
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleParams {
    pub unit: String,
    pub base: f64,
    pub min: f64,
    pub range: u32,
}

/// An additive type scale.
#[derive(Debug, Clone, PartialEq)]
pub struct TypographyParams {
    pub unit: String,
    pub base: f64,
    pub min: f64,
    pub increment: f64,
    pub range: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BorderWidthParams {
    pub unit: String,
    pub value: f64,
}

/// A step into the spacing scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Min,
    Index(u32),
}

/// Gap or border-radius steps.
#[derive(Debug, Clone, PartialEq)]
pub struct StepParams {
    pub unit: Option<String>,
    pub spacing_mode: Option<String>,
    pub steps: Vec<(String, Step)>,
}

/// One colour mode. `None` colours are holes and emit nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParams {
    pub alpha: Option<AlphaSchedule>,
    pub colors: Vec<(String, Option<Oklch>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckedColorFamily {
    pub alpha: Option<AlphaSchedule>,
    pub modes: Vec<CheckedMode<ColorParams>>,
}

/// The whole configuration after validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckedConfig {
    pub color: Option<CheckedColorFamily>,
    pub spacing: Option<Vec<CheckedMode<ScaleParams>>>,
    pub gap: Option<Vec<CheckedMode<StepParams>>>,
    pub typography: Option<Vec<CheckedMode<TypographyParams>>>,
    pub border_radius: Option<Vec<CheckedMode<StepParams>>>,
    pub border_width: Option<Vec<CheckedMode<BorderWidthParams>>>,
    pub time: Option<Vec<CheckedMode<ScaleParams>>>,
}

impl CheckedConfig {
    /// Number of families present.
    pub fn family_count(&self) -> usize {
        [
            self.color.is_some(),
            self.spacing.is_some(),
            self.gap.is_some(),
            self.typography.is_some(),
            self.border_radius.is_some(),
            self.border_width.is_some(),
            self.time.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

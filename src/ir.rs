//! Intermediate representation produced by `generate`.
//!
//! The IR is built once per generation call and never mutated afterwards.
//! Transformers read it to produce text output.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Token name -> token record, in emission order.
pub type TokenMap = IndexMap<String, Token>;

/// The token family a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenFamily {
    Color,
    Spacing,
    Gap,
    Typography,
    BorderRadius,
    BorderWidth,
    Time,
}

impl TokenFamily {
    /// The mode category whose selector carries this family's overrides.
    pub fn category(self) -> ModeCategory {
        match self {
            TokenFamily::Color => ModeCategory::Color,
            TokenFamily::Spacing
            | TokenFamily::Gap
            | TokenFamily::Typography
            | TokenFamily::BorderRadius
            | TokenFamily::BorderWidth => ModeCategory::Size,
            TokenFamily::Time => ModeCategory::Time,
        }
    }
}

impl fmt::Display for TokenFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenFamily::Color => "color",
            TokenFamily::Spacing => "spacing",
            TokenFamily::Gap => "gap",
            TokenFamily::Typography => "typography",
            TokenFamily::BorderRadius => "borderRadius",
            TokenFamily::BorderWidth => "borderWidth",
            TokenFamily::Time => "time",
        };
        f.write_str(name)
    }
}

/// A group of families sharing one CSS selector axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ModeCategory {
    Color,
    Size,
    Time,
}

impl ModeCategory {
    pub const ALL: [ModeCategory; 3] = [ModeCategory::Color, ModeCategory::Size, ModeCategory::Time];
}

/// Family-specific diagnostic tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TokenMetadata {
    #[serde(rename_all = "camelCase")]
    Color {
        /// Name of the colour this token was derived from.
        base: String,
        is_alpha_variant: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        level: Option<String>,
    },
    Time {
        /// The time scale (mode) owning the token.
        category: String,
    },
}

/// The atomic unit of the IR.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub family: TokenFamily,
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TokenMetadata>,
}

impl Token {
    pub fn new(family: TokenFamily, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            family,
            name: name.into(),
            value: value.into(),
            raw_value: None,
            unit: None,
            reference: None,
            metadata: None,
        }
    }

    /// A numeric token: `value` is the magnitude followed by `unit`.
    pub fn dimension(family: TokenFamily, name: impl Into<String>, raw: f64, unit: &str) -> Self {
        Self {
            raw_value: Some(raw),
            unit: Some(unit.to_string()),
            ..Self::new(family, name, crate::number::with_unit(raw, unit))
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_metadata(mut self, metadata: TokenMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Default and override mode names for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModeSet {
    pub default: Option<String>,
    pub overrides: Vec<String>,
}

impl ModeSet {
    pub fn is_override(&self, mode: &str) -> bool {
        self.overrides.iter().any(|m| m == mode)
    }
}

/// Mode names per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Modes {
    pub color: ModeSet,
    pub size: ModeSet,
    pub time: ModeSet,
}

impl Modes {
    pub fn get(&self, category: ModeCategory) -> &ModeSet {
        match category {
            ModeCategory::Color => &self.color,
            ModeCategory::Size => &self.size,
            ModeCategory::Time => &self.time,
        }
    }
}

/// The complete output of one generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ir {
    /// Default-mode tokens across all families.
    pub tokens: TokenMap,
    pub modes: Modes,
    /// Override mode name -> the tokens that differ from the default.
    pub override_tokens: IndexMap<String, TokenMap>,
}

impl Ir {
    /// Categories listing `mode` as an override, in `ModeCategory::ALL` order.
    pub fn categories_of(&self, mode: &str) -> Vec<ModeCategory> {
        ModeCategory::ALL
            .into_iter()
            .filter(|category| self.modes.get(*category).is_override(mode))
            .collect()
    }

    /// The full token set seen under an override mode.
    ///
    /// Starts from the default tokens and applies the mode's sparse
    /// overrides by name. Targets without a selector cascade use this to
    /// emit complete per-mode token sets. An unknown mode yields the
    /// default tokens.
    pub fn materialize(&self, mode: &str) -> TokenMap {
        let mut tokens = self.tokens.clone();
        if let Some(overrides) = self.override_tokens.get(mode) {
            for (name, token) in overrides {
                tokens.insert(name.clone(), token.clone());
            }
        }
        tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

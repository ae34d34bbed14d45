//! Token generation.
//!
//! `generate` validates the configuration, expands each family into token
//! records and merges the results into one `Ir`. Spacing runs first because
//! gap and border radius resolve against it.

mod border_width;
mod color;
mod mode;
mod relative;
mod spacing;
mod time;
mod typography;

pub use border_width::generate_border_width;
pub use color::generate_color;
pub use mode::select_default;
pub use relative::{generate_relative, resolve_spacing};
pub use spacing::generate_spacing;
pub use time::{generate_time, TimeOutput};
pub use typography::generate_typography;

use indexmap::{IndexMap, IndexSet};

use crate::config::{Options, TokenConfig};
use crate::error::Result;
use crate::ir::{Ir, ModeSet, Modes, Token, TokenFamily, TokenMap};
use crate::validation;

/// Tokens produced by one family: the default mode plus each override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilyOutput {
    pub default_mode: Option<String>,
    pub tokens: Vec<Token>,
    /// Override mode name -> tokens, in declaration order.
    pub overrides: IndexMap<String, Vec<Token>>,
}

impl FamilyOutput {
    pub fn new(default_mode: &str, tokens: Vec<Token>) -> Self {
        Self {
            default_mode: Some(default_mode.to_string()),
            tokens,
            overrides: IndexMap::new(),
        }
    }

    pub fn push_override(&mut self, mode: &str, tokens: Vec<Token>) {
        self.overrides.insert(mode.to_string(), tokens);
    }

    pub fn override_names(&self) -> impl Iterator<Item = &str> {
        self.overrides.keys().map(String::as_str)
    }
}

/// Validate `config` and expand it into an `Ir`.
///
/// The configuration is only read. Absent families contribute nothing.
pub fn generate(config: &TokenConfig, options: &Options) -> Result<Ir> {
    let checked = validation::check(config)?;

    let spacing = checked
        .spacing
        .as_deref()
        .map(|modes| generate_spacing(modes, options))
        .unwrap_or_default();

    let (gap, border_radius) = match checked.spacing.as_deref() {
        Some(spacing_modes) => (
            checked
                .gap
                .as_deref()
                .map(|modes| {
                    generate_relative(
                        TokenFamily::Gap,
                        &options.prefixes.gap,
                        modes,
                        spacing_modes,
                        options,
                    )
                })
                .transpose()?
                .unwrap_or_default(),
            checked
                .border_radius
                .as_deref()
                .map(|modes| {
                    generate_relative(
                        TokenFamily::BorderRadius,
                        &options.prefixes.border_radius,
                        modes,
                        spacing_modes,
                        options,
                    )
                })
                .transpose()?
                .unwrap_or_default(),
        ),
        None => (FamilyOutput::default(), FamilyOutput::default()),
    };

    let color = checked
        .color
        .as_ref()
        .map(|family| generate_color(family, options))
        .unwrap_or_default();
    let typography = checked
        .typography
        .as_deref()
        .map(|modes| generate_typography(modes, options))
        .unwrap_or_default();
    let border_width = checked
        .border_width
        .as_deref()
        .map(|modes| generate_border_width(modes, options))
        .unwrap_or_default();
    let time = checked
        .time
        .as_deref()
        .map(|modes| generate_time(modes, options))
        .unwrap_or_default();

    let size_families = [&spacing, &gap, &typography, &border_radius, &border_width];
    let all_families = [
        &color,
        &spacing,
        &gap,
        &typography,
        &border_radius,
        &border_width,
    ];

    let mut tokens = TokenMap::new();
    for family in all_families {
        merge_tokens(&mut tokens, &family.tokens);
    }
    merge_tokens(&mut tokens, &time.tokens);

    let mut override_tokens: IndexMap<String, TokenMap> = IndexMap::new();
    for family in all_families {
        for (mode, family_tokens) in &family.overrides {
            let entry = override_tokens.entry(mode.clone()).or_default();
            merge_tokens(entry, family_tokens);
        }
    }

    let modes = Modes {
        color: ModeSet {
            default: color.default_mode.clone(),
            overrides: color.override_names().map(str::to_string).collect(),
        },
        size: ModeSet {
            default: size_families
                .into_iter()
                .find_map(|f| f.default_mode.clone()),
            overrides: union(size_families.into_iter().flat_map(FamilyOutput::override_names)),
        },
        time: ModeSet {
            default: time.default_mode.clone(),
            overrides: time.scales.clone(),
        },
    };

    tracing::debug!(
        tokens = tokens.len(),
        override_modes = override_tokens.len(),
        "generation complete"
    );

    Ok(Ir {
        tokens,
        modes,
        override_tokens,
    })
}

/// Insert tokens by name. On a name collision the first token is kept.
fn merge_tokens(into: &mut TokenMap, tokens: &[Token]) {
    for token in tokens {
        if into.contains_key(&token.name) {
            tracing::warn!(
                name = %token.name,
                family = %token.family,
                "token name collision; keeping the first definition"
            );
            continue;
        }
        into.insert(token.name.clone(), token.clone());
    }
}

/// Distinct names in first-seen order.
fn union<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    names
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

//! Time scales.
//!
//! Time modes are not alternative themes: they are scales that coexist
//! (e.g. transitions next to animations). All of them land in the flat
//! token map. The default scale is unprefixed (`t-1`), every other scale is
//! infixed by its name (`t-animation-1`).

use crate::config::Options;
use crate::ir::{Token, TokenFamily, TokenMetadata};
use crate::validation::{CheckedMode, ScaleParams};

use super::{mode::select_default, spacing::scale_tokens};

/// Output of the time generator: one combined token list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeOutput {
    pub default_mode: Option<String>,
    /// Names of the non-default scales.
    pub scales: Vec<String>,
    pub tokens: Vec<Token>,
}

pub fn generate_time(modes: &[CheckedMode<ScaleParams>], options: &Options) -> TimeOutput {
    let Some((default, others)) = select_default(modes) else {
        return TimeOutput::default();
    };

    let prefix = options.prefixes.time.as_str();
    let mut tokens = tag(
        scale_tokens(TokenFamily::Time, prefix, &default.params, options),
        &default.name,
    );
    for mode in &others {
        let infixed = options.name(&[prefix, mode.name.as_str()]);
        tokens.extend(tag(
            scale_tokens(TokenFamily::Time, &infixed, &mode.params, options),
            &mode.name,
        ));
    }

    tracing::debug!(
        default = %default.name,
        scales = others.len() + 1,
        tokens = tokens.len(),
        "generated time"
    );

    TimeOutput {
        default_mode: Some(default.name.clone()),
        scales: others.iter().map(|m| m.name.clone()).collect(),
        tokens,
    }
}

fn tag(tokens: Vec<Token>, mode: &str) -> Vec<Token> {
    tokens
        .into_iter()
        .map(|t| {
            t.with_metadata(TokenMetadata::Time {
                category: mode.to_string(),
            })
        })
        .collect()
}

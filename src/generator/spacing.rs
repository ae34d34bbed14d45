//! Spacing scale: `min` verbatim, then `base * n` for `n` in `1..=range`.

use crate::config::Options;
use crate::ir::{Token, TokenFamily};
use crate::validation::{CheckedMode, ScaleParams};

use super::{mode::select_default, FamilyOutput};

/// Expand every spacing mode.
pub fn generate_spacing(modes: &[CheckedMode<ScaleParams>], options: &Options) -> FamilyOutput {
    let Some((default, overrides)) = select_default(modes) else {
        return FamilyOutput::default();
    };

    let mut output = FamilyOutput::new(&default.name, expand(&default.params, options));
    for mode in overrides {
        output.push_override(&mode.name, expand(&mode.params, options));
    }

    tracing::debug!(
        default = %default.name,
        tokens = output.tokens.len(),
        overrides = output.overrides.len(),
        "generated spacing"
    );
    output
}

/// Expand one multiplicative scale under `prefix`.
pub(super) fn scale_tokens(
    family: TokenFamily,
    prefix: &str,
    params: &ScaleParams,
    options: &Options,
) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(params.range as usize + 1);
    tokens.push(Token::dimension(
        family,
        options.name(&[prefix, "min"]),
        params.min,
        &params.unit,
    ));
    for n in 1..=params.range {
        let index = n.to_string();
        tokens.push(Token::dimension(
            family,
            options.name(&[prefix, index.as_str()]),
            params.base * f64::from(n),
            &params.unit,
        ));
    }
    tokens
}

fn expand(params: &ScaleParams, options: &Options) -> Vec<Token> {
    scale_tokens(TokenFamily::Spacing, &options.prefixes.spacing, params, options)
}

//! Type scale: `fs-1` is `base`, each further step adds `increment`.

use crate::config::Options;
use crate::ir::{Token, TokenFamily};
use crate::validation::{CheckedMode, TypographyParams};

use super::{mode::select_default, FamilyOutput};

pub fn generate_typography(
    modes: &[CheckedMode<TypographyParams>],
    options: &Options,
) -> FamilyOutput {
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
        "generated typography"
    );
    output
}

fn expand(params: &TypographyParams, options: &Options) -> Vec<Token> {
    let prefix = options.prefixes.typography.as_str();
    let mut tokens = Vec::with_capacity(params.range as usize + 1);

    tokens.push(Token::dimension(
        TokenFamily::Typography,
        options.name(&[prefix, "min"]),
        params.min,
        &params.unit,
    ));
    for n in 1..=params.range {
        let index = n.to_string();
        let size = params.base + params.increment * f64::from(n - 1);
        tokens.push(Token::dimension(
            TokenFamily::Typography,
            options.name(&[prefix, index.as_str()]),
            size,
            &params.unit,
        ));
    }
    tokens
}

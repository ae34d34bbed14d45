//! Border width: one unindexed token per mode.

use crate::config::Options;
use crate::ir::{Token, TokenFamily};
use crate::validation::{BorderWidthParams, CheckedMode};

use super::{mode::select_default, FamilyOutput};

pub fn generate_border_width(
    modes: &[CheckedMode<BorderWidthParams>],
    options: &Options,
) -> FamilyOutput {
    let Some((default, overrides)) = select_default(modes) else {
        return FamilyOutput::default();
    };

    let mut output = FamilyOutput::new(&default.name, vec![expand(&default.params, options)]);
    for mode in overrides {
        output.push_override(&mode.name, vec![expand(&mode.params, options)]);
    }

    tracing::debug!(default = %default.name, "generated border width");
    output
}

fn expand(params: &BorderWidthParams, options: &Options) -> Token {
    Token::dimension(
        TokenFamily::BorderWidth,
        options.prefixes.border_width.clone(),
        params.value,
        &params.unit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(name: &str, value: f64) -> CheckedMode<BorderWidthParams> {
        CheckedMode {
            name: name.to_string(),
            is_default: false,
            params: BorderWidthParams {
                unit: "px".to_string(),
                value,
            },
        }
    }

    #[test]
    fn test_single_token_per_mode() {
        let output =
            generate_border_width(&[mode("default", 1.0), mode("bold", 2.0)], &Options::default());

        assert_eq!(output.tokens.len(), 1);
        assert_eq!(output.tokens[0].name, "bdw");
        assert_eq!(output.tokens[0].value, "1px");
        assert_eq!(output.overrides["bold"].len(), 1);
        assert_eq!(output.overrides["bold"][0].value, "2px");
    }

    #[test]
    fn test_fractional_width() {
        let output = generate_border_width(&[mode("default", 0.5)], &Options::default());
        assert_eq!(output.tokens[0].value, "0.5px");
    }
}

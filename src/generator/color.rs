//! Colour tokens and their alpha variants.
//!
//! Override modes emit only the colours they list. Colours a mode leaves
//! out come from the default block through the CSS cascade.

use crate::color::{format, format_with_alpha, Oklch};
use crate::config::{AlphaSchedule, Options};
use crate::ir::{Token, TokenFamily, TokenMetadata};
use crate::validation::{CheckedColorFamily, CheckedMode, ColorParams};

use super::{mode::select_default, FamilyOutput};

pub fn generate_color(family: &CheckedColorFamily, options: &Options) -> FamilyOutput {
    let Some((default, overrides)) = select_default(&family.modes) else {
        return FamilyOutput::default();
    };

    let family_alpha = family.alpha.as_ref();
    let mut output = FamilyOutput::new(&default.name, expand(default, family_alpha, options));
    for mode in overrides {
        output.push_override(&mode.name, expand(mode, family_alpha, options));
    }

    tracing::debug!(
        default = %default.name,
        tokens = output.tokens.len(),
        overrides = output.overrides.len(),
        "generated color"
    );
    output
}

/// Expand the colours present in one mode.
///
/// The mode's own alpha schedule replaces the family schedule; with
/// neither, only base colours are emitted. Holes (`None`) are skipped.
fn expand(
    mode: &CheckedMode<ColorParams>,
    family_alpha: Option<&AlphaSchedule>,
    options: &Options,
) -> Vec<Token> {
    let alpha = mode.params.alpha.as_ref().or(family_alpha);
    let prefix = options.prefixes.color.as_str();

    let mut tokens = Vec::new();
    for (name, color) in &mode.params.colors {
        let Some(color) = color else {
            continue;
        };
        tokens.push(base_token(prefix, name, *color, options));

        for (level, fraction) in alpha.into_iter().flatten() {
            tokens.push(alpha_token(prefix, name, *color, level, *fraction, options));
        }
    }
    tokens
}

fn base_token(prefix: &str, name: &str, color: Oklch, options: &Options) -> Token {
    Token::new(
        TokenFamily::Color,
        options.name(&[prefix, name]),
        format(color, options.color_format),
    )
    .with_metadata(TokenMetadata::Color {
        base: name.to_string(),
        is_alpha_variant: false,
        level: None,
    })
}

fn alpha_token(
    prefix: &str,
    name: &str,
    color: Oklch,
    level: &str,
    fraction: f64,
    options: &Options,
) -> Token {
    let token_name = options.name(&[prefix, name, options.alpha_modifier.as_str(), level]);
    Token {
        raw_value: Some(fraction),
        ..Token::new(
            TokenFamily::Color,
            token_name,
            format_with_alpha(color, fraction, options.color_format),
        )
    }
    .with_metadata(TokenMetadata::Color {
        base: name.to_string(),
        is_alpha_variant: true,
        level: Some(level.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(levels: &[(&str, f64)]) -> AlphaSchedule {
        levels.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn mode(name: &str, colors: &[(&str, Option<Oklch>)]) -> CheckedMode<ColorParams> {
        CheckedMode {
            name: name.to_string(),
            is_default: false,
            params: ColorParams {
                alpha: None,
                colors: colors.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            },
        }
    }

    const INK: Oklch = Oklch::new(0.26, 0.0, 180.0);
    const PAPER: Oklch = Oklch::new(0.98, 0.0, 180.0);

    #[test]
    fn test_base_and_alpha_variants() {
        let family = CheckedColorFamily {
            alpha: Some(schedule(&[("lo", 0.25), ("hi", 0.75)])),
            modes: vec![mode("light", &[("ink", Some(INK)), ("paper", Some(PAPER))])],
        };
        let output = generate_color(&family, &Options::default());

        // k colours * (1 + m levels)
        assert_eq!(output.tokens.len(), 2 * (1 + 2));
        let names: Vec<&str> = output.tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "clr-ink",
                "clr-ink-a-lo",
                "clr-ink-a-hi",
                "clr-paper",
                "clr-paper-a-lo",
                "clr-paper-a-hi"
            ]
        );
        assert_eq!(output.tokens[0].value, "oklch(0.26 0 180)");
        assert_eq!(output.tokens[1].value, "oklch(0.26 0 180 / 0.25)");
        assert_eq!(output.tokens[1].raw_value, Some(0.25));
        assert_eq!(
            output.tokens[2].metadata,
            Some(TokenMetadata::Color {
                base: "ink".to_string(),
                is_alpha_variant: true,
                level: Some("hi".to_string()),
            })
        );
    }

    #[test]
    fn test_no_schedule_skips_alpha_variants() {
        let family = CheckedColorFamily {
            alpha: None,
            modes: vec![mode("light", &[("ink", Some(INK))])],
        };
        let output = generate_color(&family, &Options::default());
        assert_eq!(output.tokens.len(), 1);
        assert_eq!(output.tokens[0].name, "clr-ink");
    }

    #[test]
    fn test_mode_schedule_replaces_family_schedule() {
        let mut dark = mode("dark", &[("ink", Some(PAPER))]);
        dark.params.alpha = Some(schedule(&[("max", 0.9)]));
        let family = CheckedColorFamily {
            alpha: Some(schedule(&[("lo", 0.25), ("hi", 0.75)])),
            modes: vec![mode("light", &[("ink", Some(INK))]), dark],
        };
        let output = generate_color(&family, &Options::default());

        let dark = &output.overrides["dark"];
        let names: Vec<&str> = dark.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["clr-ink", "clr-ink-a-max"]);
    }

    #[test]
    fn test_override_emits_only_listed_colors_and_skips_holes() {
        let family = CheckedColorFamily {
            alpha: Some(schedule(&[("lo", 0.25)])),
            modes: vec![
                mode("light", &[("ink", Some(INK)), ("paper", Some(PAPER))]),
                mode("dark", &[("ink", Some(PAPER)), ("paper", None)]),
            ],
        };
        let output = generate_color(&family, &Options::default());

        let dark = &output.overrides["dark"];
        assert_eq!(dark.len(), 2);
        assert!(dark.iter().all(|t| t.name.starts_with("clr-ink")));
        assert_eq!(dark[0].value, "oklch(0.98 0 180)");
    }

    #[test]
    fn test_hex_output() {
        let options = Options {
            color_format: crate::color::ColorFormat::Hex,
            ..Options::default()
        };
        let family = CheckedColorFamily {
            alpha: Some(schedule(&[("half", 0.5)])),
            modes: vec![mode("light", &[("white", Some(Oklch::new(1.0, 0.0, 0.0)))])],
        };
        let output = generate_color(&family, &options);
        assert_eq!(output.tokens[0].value, "#ffffff");
        assert_eq!(output.tokens[1].value, "#ffffff80");
    }
}

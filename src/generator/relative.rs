//! Gap and border-radius steps, resolved against the spacing scale.
//!
//! Each step is `"min"` or an index `n`. Values are baked in (`n * base`)
//! rather than emitted as `var(--sp-n)`, so a token keeps its value when the
//! spacing scale is overridden under a different selector. The spacing
//! token a value came from is kept in `Token::reference`.

use crate::config::Options;
use crate::error::{DtokError, Result};
use crate::ir::{Token, TokenFamily};
use crate::validation::{CheckedMode, ScaleParams, Step, StepParams};

use super::{mode::select_default, FamilyOutput};

/// Expand every gap or border-radius mode.
pub fn generate_relative(
    family: TokenFamily,
    prefix: &str,
    modes: &[CheckedMode<StepParams>],
    spacing: &[CheckedMode<ScaleParams>],
    options: &Options,
) -> Result<FamilyOutput> {
    let Some((default, overrides)) = select_default(modes) else {
        return Ok(FamilyOutput::default());
    };

    let tokens = expand(family, prefix, default, spacing, options)?;
    let mut output = FamilyOutput::new(&default.name, tokens);
    for mode in overrides {
        let tokens = expand(family, prefix, mode, spacing, options)?;
        output.push_override(&mode.name, tokens);
    }

    tracing::debug!(
        %family,
        default = %default.name,
        tokens = output.tokens.len(),
        overrides = output.overrides.len(),
        "generated spacing-relative family"
    );
    Ok(output)
}

/// Pick the spacing mode a step mode resolves against.
///
/// In order: the explicit `spacingMode`, a spacing mode with the same name,
/// then the spacing default.
pub fn resolve_spacing<'a>(
    mode: &CheckedMode<StepParams>,
    spacing: &'a [CheckedMode<ScaleParams>],
) -> Result<&'a CheckedMode<ScaleParams>> {
    if let Some(target) = mode.params.spacing_mode.as_deref() {
        return spacing
            .iter()
            .find(|s| s.name == target)
            .ok_or_else(|| DtokError::Internal {
                message: format!(
                    "spacing mode '{}' referenced by '{}' passed validation but is missing",
                    target, mode.name
                ),
            });
    }

    if let Some(same_name) = spacing.iter().find(|s| s.name == mode.name) {
        tracing::trace!(mode = %mode.name, "resolved spacing by name");
        return Ok(same_name);
    }

    select_default(spacing)
        .map(|(default, _)| default)
        .ok_or_else(|| DtokError::Internal {
            message: format!("no spacing modes available to resolve '{}'", mode.name),
        })
}

fn expand(
    family: TokenFamily,
    prefix: &str,
    mode: &CheckedMode<StepParams>,
    spacing: &[CheckedMode<ScaleParams>],
    options: &Options,
) -> Result<Vec<Token>> {
    let scale = &resolve_spacing(mode, spacing)?.params;
    let unit = mode.params.unit.as_deref().unwrap_or(&scale.unit);
    let spacing_prefix = options.prefixes.spacing.as_str();

    let tokens = mode
        .params
        .steps
        .iter()
        .map(|(name, step)| {
            let (value, reference) = match step {
                Step::Min => (scale.min, options.name(&[spacing_prefix, "min"])),
                Step::Index(n) => {
                    let index = n.to_string();
                    (
                        scale.base * f64::from(*n),
                        options.name(&[spacing_prefix, index.as_str()]),
                    )
                }
            };
            Token::dimension(family, options.name(&[prefix, name.as_str()]), value, unit)
                .with_reference(reference)
        })
        .collect();

    Ok(tokens)
}

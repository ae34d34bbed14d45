//! Input validation.
//!
//! Runs before any generation work. Validation is fail-fast: the first
//! violation is returned as a `DtokError::Validation` naming the offending
//! field path, and nothing is generated.

mod checked;
mod checks;

pub use checked::{
    BorderWidthParams, CheckedColorFamily, CheckedConfig, CheckedMode, ColorParams, ScaleParams,
    Step, StepParams, TypographyParams,
};

use crate::config::{Family, NamedMode, StepTokens, TokenConfig};
use crate::error::{DtokError, Result};

/// Validate a configuration without generating anything.
pub fn validate(config: &TokenConfig) -> Result<()> {
    check(config).map(|_| ())
}

/// Validate a configuration and return the checked parameters.
pub fn check(config: &TokenConfig) -> Result<CheckedConfig> {
    let mut checked = CheckedConfig::default();

    if let Some(color) = &config.color {
        checks::check_modes("color", color.modes.iter().map(mode_key))?;
        if let Some(alpha) = &color.alpha {
            checks::check_alpha("color.alpha", alpha)?;
        }
        let modes = color
            .modes
            .iter()
            .enumerate()
            .map(|(i, mode)| checks::check_color_mode(&format!("color.modes[{i}]"), mode))
            .collect::<Result<Vec<_>>>()?;
        checked.color = Some(CheckedColorFamily {
            alpha: color.alpha.clone(),
            modes,
        });
    }

    if let Some(spacing) = &config.spacing {
        checks::check_modes("spacing", spacing.modes.iter().map(mode_key))?;
        checked.spacing = Some(check_each(spacing, "spacing", checks::check_scale)?);
    }

    let spacing_names: Vec<&str> = config
        .spacing
        .iter()
        .flat_map(|s| s.modes.iter().map(|m| m.name.as_str()))
        .collect();

    if let Some(gap) = &config.gap {
        checked.gap = Some(check_relative(gap, "gap", config, &spacing_names)?);
    }

    if let Some(typography) = &config.typography {
        checks::check_modes("typography", typography.modes.iter().map(mode_key))?;
        checked.typography = Some(check_each(
            typography,
            "typography",
            checks::check_typography,
        )?);
    }

    if let Some(border_radius) = &config.border_radius {
        checked.border_radius = Some(check_relative(
            border_radius,
            "borderRadius",
            config,
            &spacing_names,
        )?);
    }

    if let Some(border_width) = &config.border_width {
        checks::check_modes("borderWidth", border_width.modes.iter().map(mode_key))?;
        checked.border_width = Some(check_each(
            border_width,
            "borderWidth",
            checks::check_border_width,
        )?);
    }

    if let Some(time) = &config.time {
        checks::check_modes("time", time.modes.iter().map(mode_key))?;
        checked.time = Some(check_each(time, "time", checks::check_scale)?);
    }

    Ok(checked)
}

/// Gap and border radius resolve against spacing, so spacing must exist.
fn check_relative(
    family: &Family<StepTokens>,
    key: &str,
    config: &TokenConfig,
    spacing_names: &[&str],
) -> Result<Vec<CheckedMode<StepParams>>> {
    if config.spacing.is_none() {
        return Err(DtokError::validation(
            key,
            format!("{key} requires a spacing family"),
        )
        .with_help("Steps are resolved against the spacing scale; add a `spacing` family"));
    }
    checks::check_modes(key, family.modes.iter().map(mode_key))?;
    family
        .modes
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            checks::check_steps(&format!("{key}.modes[{i}].tokens"), mode, spacing_names)
        })
        .collect()
}

fn check_each<T, P, F>(family: &Family<T>, key: &str, check: F) -> Result<Vec<CheckedMode<P>>>
where
    F: Fn(&str, &crate::config::Mode<T>) -> Result<CheckedMode<P>>,
{
    family
        .modes
        .iter()
        .enumerate()
        .map(|(i, mode)| check(&format!("{key}.modes[{i}].tokens"), mode))
        .collect()
}

fn mode_key<M: NamedMode>(mode: &M) -> (&str, bool) {
    (mode.name(), mode.is_default())
}

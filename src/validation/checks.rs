//! Field-level validation checks.
//!
//! Each check returns the first violation it finds, tagged with the dotted
//! path of the offending field.

use std::collections::HashSet;

use crate::color::{ColorValue, Oklch};
use crate::config::{
    AlphaSchedule, BorderWidthTokens, ColorMode, Mode, ScaleTokens, StepRef, StepTokens,
    TypographyTokens,
};
use crate::error::{DtokError, Result};
use crate::number::SMALLEST_MAGNITUDE;

use super::checked::{
    BorderWidthParams, CheckedMode, ColorParams, ScaleParams, Step, StepParams, TypographyParams,
};

/// Upper bound for a scale `range` and for a gap or border-radius step index.
pub const MAX_STEPS: u32 = 1000;

/// Check the family-level shape shared by every family: at least one mode,
/// non-empty and unique mode names.
pub fn check_modes<'a, I>(family: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    let mut seen = HashSet::new();
    let mut defaults = Vec::new();

    for (i, (name, is_default)) in names.into_iter().enumerate() {
        let path = format!("{family}.modes[{i}].name");
        if name.trim().is_empty() {
            return Err(DtokError::validation(path, "mode name must not be empty"));
        }
        if !seen.insert(name) {
            return Err(DtokError::validation(
                path,
                format!("duplicate mode name '{name}'"),
            )
            .with_help("Mode names must be unique within a family"));
        }
        if is_default {
            defaults.push(name);
        }
    }

    if seen.is_empty() {
        return Err(DtokError::validation(
            format!("{family}.modes"),
            "must contain at least one mode",
        ));
    }

    if defaults.len() > 1 {
        tracing::warn!(
            family,
            defaults = ?defaults,
            "several modes are flagged isDefault; using '{}'",
            defaults[0]
        );
    }

    Ok(())
}

/// Check a spacing or time scale.
pub fn check_scale(path: &str, mode: &Mode<ScaleTokens>) -> Result<CheckedMode<ScaleParams>> {
    let tokens = &mode.tokens;
    let params = ScaleParams {
        unit: require_unit(path, tokens.unit.as_deref())?,
        base: require_positive(&format!("{path}.base"), tokens.base)?,
        min: require_non_negative(&format!("{path}.min"), tokens.min)?,
        range: require_range(&format!("{path}.range"), tokens.range)?,
    };
    Ok(checked(mode, params))
}

/// Check a typography scale.
pub fn check_typography(
    path: &str,
    mode: &Mode<TypographyTokens>,
) -> Result<CheckedMode<TypographyParams>> {
    let tokens = &mode.tokens;
    let params = TypographyParams {
        unit: require_unit(path, tokens.unit.as_deref())?,
        base: require_positive(&format!("{path}.base"), tokens.base)?,
        min: require_non_negative(&format!("{path}.min"), tokens.min)?,
        increment: require_non_negative(&format!("{path}.increment"), tokens.increment)?,
        range: require_range(&format!("{path}.range"), tokens.range)?,
    };
    Ok(checked(mode, params))
}

/// Check a border width.
pub fn check_border_width(
    path: &str,
    mode: &Mode<BorderWidthTokens>,
) -> Result<CheckedMode<BorderWidthParams>> {
    let tokens = &mode.tokens;
    let params = BorderWidthParams {
        unit: require_unit(path, tokens.unit.as_deref())?,
        value: require_non_negative(&format!("{path}.value"), tokens.value)?,
    };
    Ok(checked(mode, params))
}

/// Check gap or border-radius steps.
///
/// `spacing_modes` lists the spacing mode names an explicit `spacingMode`
/// may point at.
pub fn check_steps(
    path: &str,
    mode: &Mode<StepTokens>,
    spacing_modes: &[&str],
) -> Result<CheckedMode<StepParams>> {
    let tokens = &mode.tokens;

    let unit = tokens
        .unit
        .as_deref()
        .map(|unit| require_unit(path, Some(unit)))
        .transpose()?;

    if let Some(target) = tokens.spacing_mode.as_deref() {
        if !spacing_modes.contains(&target) {
            return Err(DtokError::validation(
                format!("{path}.spacingMode"),
                format!("spacing mode '{target}' does not exist"),
            )
            .with_help(format!("Known spacing modes: {}", spacing_modes.join(", "))));
        }
    }

    let mut steps = Vec::with_capacity(tokens.steps.len());
    for (name, step) in &tokens.steps {
        let step_path = format!("{path}.{name}");
        let step = match step {
            StepRef::Keyword(k) if k == StepRef::MIN => Step::Min,
            StepRef::Keyword(k) => {
                return Err(DtokError::validation(
                    step_path,
                    format!("unknown step '{k}'"),
                )
                .with_help("Use \"min\" or a positive integer index into the spacing scale"));
            }
            StepRef::Index(n) => {
                if !is_whole(*n) || *n < 1.0 {
                    return Err(DtokError::validation(
                        step_path,
                        format!("step index must be a positive integer, got {n}"),
                    ));
                }
                if *n > f64::from(MAX_STEPS) {
                    return Err(DtokError::validation(
                        step_path,
                        format!("step index must be at most {MAX_STEPS}, got {n}"),
                    ));
                }
                Step::Index(*n as u32)
            }
        };
        steps.push((name.clone(), step));
    }

    let params = StepParams {
        unit,
        spacing_mode: tokens.spacing_mode.clone(),
        steps,
    };
    Ok(checked(mode, params))
}

/// Check an alpha schedule: every level in `[0, 1]`.
pub fn check_alpha(path: &str, alpha: &AlphaSchedule) -> Result<()> {
    for (level, value) in alpha {
        if !value.is_finite() || !(0.0..=1.0).contains(value) {
            return Err(DtokError::validation(
                format!("{path}.{level}"),
                format!("alpha must lie in [0, 1], got {value}"),
            ));
        }
    }
    Ok(())
}

/// Check a colour mode, resolving every colour literal.
pub fn check_color_mode(path: &str, mode: &ColorMode) -> Result<CheckedMode<ColorParams>> {
    if let Some(alpha) = &mode.alpha {
        check_alpha(&format!("{path}.alpha"), alpha)?;
    }

    let mut colors = Vec::with_capacity(mode.tokens.len());
    for (name, value) in &mode.tokens {
        let color = match value {
            Some(value) => Some(check_color(&format!("{path}.tokens.{name}"), value)?),
            None => None,
        };
        colors.push((name.clone(), color));
    }

    Ok(CheckedMode {
        name: mode.name.clone(),
        is_default: mode.is_default,
        params: ColorParams {
            alpha: mode.alpha.clone(),
            colors,
        },
    })
}

fn check_color(path: &str, value: &ColorValue) -> Result<Oklch> {
    let color = value.resolve().map_err(|e| match e {
        DtokError::Parse { message, help } => DtokError::Validation {
            path: path.to_string(),
            message,
            help,
        },
        other => other,
    })?;

    if !color.l.is_finite() || !(0.0..=1.0).contains(&color.l) {
        return Err(DtokError::validation(
            format!("{path}.l"),
            format!("lightness must lie in [0, 1], got {}", color.l),
        ));
    }
    if !color.c.is_finite() || color.c < 0.0 {
        return Err(DtokError::validation(
            format!("{path}.c"),
            format!("chroma must be non-negative, got {}", color.c),
        ));
    }
    if !color.h.is_finite() {
        return Err(DtokError::validation(
            format!("{path}.h"),
            "hue must be a finite number of degrees",
        ));
    }
    Ok(color)
}

fn checked<T, P>(mode: &Mode<T>, params: P) -> CheckedMode<P> {
    CheckedMode {
        name: mode.name.clone(),
        is_default: mode.is_default,
        params,
    }
}

fn require_unit(path: &str, unit: Option<&str>) -> Result<String> {
    match unit {
        Some(unit) if !unit.trim().is_empty() => Ok(unit.to_string()),
        Some(_) => Err(DtokError::validation(
            format!("{path}.unit"),
            "unit must not be empty",
        )),
        None => Err(DtokError::validation(
            format!("{path}.unit"),
            "missing required field",
        )
        .with_help("Add a unit such as px, rem or ms")),
    }
}

/// A finite number that survives output rounding: zero or at least
/// `SMALLEST_MAGNITUDE` in size.
fn require_number(path: &str, value: Option<f64>) -> Result<f64> {
    match value {
        Some(v) if v != 0.0 && v.abs() < SMALLEST_MAGNITUDE => Err(DtokError::validation(
            path,
            format!("must be 0 or at least {SMALLEST_MAGNITUDE} in size, got {v}"),
        )),
        Some(v) if v.is_finite() => Ok(v),
        Some(v) => Err(DtokError::validation(path, format!("must be a finite number, got {v}"))),
        None => Err(DtokError::validation(path, "missing required field")),
    }
}

fn require_positive(path: &str, value: Option<f64>) -> Result<f64> {
    let v = require_number(path, value)?;
    if v <= 0.0 {
        return Err(DtokError::validation(path, format!("must be positive, got {v}")));
    }
    Ok(v)
}

fn require_non_negative(path: &str, value: Option<f64>) -> Result<f64> {
    let v = require_number(path, value)?;
    if v < 0.0 {
        return Err(DtokError::validation(
            path,
            format!("must not be negative, got {v}"),
        ));
    }
    Ok(v)
}

fn require_range(path: &str, value: Option<f64>) -> Result<u32> {
    let v = require_number(path, value)?;
    if !is_whole(v) || v < 1.0 {
        return Err(DtokError::validation(
            path,
            format!("must be a positive integer, got {v}"),
        ));
    }
    if v > f64::from(MAX_STEPS) {
        return Err(DtokError::validation(
            path,
            format!("must be at most {MAX_STEPS}, got {v}"),
        ));
    }
    Ok(v as u32)
}

fn is_whole(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0
}

//! Lightness-separation check from the command line.

use std::path::PathBuf;

use clap::Args;

use crate::config::{ColorMode, ColorTokens};
use crate::contrast::{check_luminance, LuminanceReport, Polarity};
use crate::error::{DtokError, Result};
use crate::generator::select_default;
use crate::number::format_number;
use crate::output::Printer;

/// Check lightness separation between background and foreground colours
#[derive(Args, Debug)]
pub struct ContrastArgs {
    /// Token file (YAML or JSON)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Colour mode to check; the default mode when omitted
    #[arg(long)]
    pub mode: Option<String>,

    /// Background colour names
    #[arg(long, value_delimiter = ',', required = true)]
    pub background: Vec<String>,

    /// Foreground colour names
    #[arg(long, value_delimiter = ',', required = true)]
    pub foreground: Vec<String>,

    /// Minimum lightness difference, on the OKLCH 0..1 scale
    #[arg(long, default_value = "0.4")]
    pub min_delta: f64,

    /// Which group is expected to be darker
    #[arg(long, value_enum, default_value_t = Polarity::LightBackground)]
    pub polarity: Polarity,
}

pub fn run(args: ContrastArgs, printer: &Printer) -> Result<LuminanceReport> {
    let project = super::load_project(&args.file, printer)?;
    let modes = project
        .tokens
        .color
        .map(|family| family.modes)
        .unwrap_or_default();
    let colors = mode_colors(&modes, args.mode.as_deref())?;

    let report = check_luminance(
        &colors,
        args.polarity,
        args.min_delta,
        &args.background,
        &args.foreground,
    );

    for (name, headroom) in &report.headroom {
        println!("{}: {}", name, format_number(*headroom));
        if *headroom < 0.0 {
            printer.warning("Crossed", &format!("{} by {}", name, format_number(-headroom)));
        }
    }

    match report.delta {
        Some(delta) if report.satisfied => {
            printer.success(
                "Passed",
                &format!("delta {} >= {}", format_number(delta), format_number(args.min_delta)),
            );
            Ok(report)
        }
        Some(delta) => Err(DtokError::Contrast {
            message: format!(
                "delta {} is below {}",
                format_number(delta),
                format_number(args.min_delta)
            ),
        }),
        None => Err(DtokError::Contrast {
            message: "no colours resolved in one of the groups".to_string(),
        }),
    }
}

/// The colours seen under `mode`: the default mode's colours with the
/// mode's own entries laid over them.
fn mode_colors(modes: &[ColorMode], mode: Option<&str>) -> Result<ColorTokens> {
    let Some((default, _)) = select_default(modes) else {
        return Err(DtokError::validation("color", "no colour modes defined"));
    };

    let mut colors = default.tokens.clone();
    let Some(name) = mode.filter(|name| *name != default.name) else {
        return Ok(colors);
    };

    let selected = modes.iter().find(|m| m.name == name).ok_or_else(|| {
        DtokError::validation("color.modes", format!("no colour mode named `{}`", name))
    })?;
    for (key, value) in &selected.tokens {
        if value.is_some() {
            colors.insert(key.clone(), value.clone());
        }
    }
    Ok(colors)
}

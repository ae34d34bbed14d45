//! CSS rendering of OKLCH colours with sRGB gamut mapping.

use palette::convert::FromColorUnclamped;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use super::Oklch;
use crate::number::format_number;

/// Slack allowed on each sRGB channel before a colour counts as out of gamut.
const GAMUT_EPSILON: f64 = 1e-6;

/// Output encoding for colour tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `oklch(L C H)`
    #[default]
    Oklch,
    /// `rgb(R G B)`
    Rgb,
    /// `#rrggbb`
    Hex,
}

/// Format a colour as a CSS colour string.
pub fn format(color: Oklch, encoding: ColorFormat) -> String {
    let color = to_gamut(color);
    match encoding {
        ColorFormat::Oklch => color.to_string(),
        ColorFormat::Rgb => {
            let [r, g, b] = to_rgb8(color);
            format!("rgb({} {} {})", r, g, b)
        }
        ColorFormat::Hex => {
            let [r, g, b] = to_rgb8(color);
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        }
    }
}

/// Format a colour with an opacity fraction in `[0, 1]`.
pub fn format_with_alpha(color: Oklch, alpha: f64, encoding: ColorFormat) -> String {
    let color = to_gamut(color);
    let alpha = alpha.clamp(0.0, 1.0);
    match encoding {
        ColorFormat::Oklch => format!(
            "oklch({} {} {} / {})",
            format_number(color.l),
            format_number(color.c),
            format_number(color.h),
            format_number(alpha)
        ),
        ColorFormat::Rgb => {
            let [r, g, b] = to_rgb8(color);
            format!("rgb({} {} {} / {})", r, g, b, format_number(alpha))
        }
        ColorFormat::Hex => {
            let [r, g, b] = to_rgb8(color);
            let a = (alpha * 255.0).round() as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

/// Whether a colour is displayable in sRGB without clipping.
pub fn in_srgb_gamut(color: Oklch) -> bool {
    let rgb = to_srgb_unclamped(color);
    [rgb.red, rgb.green, rgb.blue]
        .iter()
        .all(|ch| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(ch))
}

/// Reduce chroma until the colour fits within sRGB, keeping lightness and hue.
pub fn to_gamut(color: Oklch) -> Oklch {
    let color = Oklch {
        l: color.l.clamp(0.0, 1.0),
        ..color
    };
    if in_srgb_gamut(color) {
        return color;
    }

    let mut lo = 0.0;
    let mut hi = color.c;
    for _ in 0..24 {
        let mid = (lo + hi) * 0.5;
        if in_srgb_gamut(Oklch { c: mid, ..color }) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Oklch { c: lo, ..color }
}

fn to_srgb_unclamped(color: Oklch) -> Srgb<f64> {
    Srgb::from_color_unclamped(palette::Oklch::new(color.l, color.c, color.h))
}

fn to_rgb8(color: Oklch) -> [u8; 3] {
    let rgb = to_srgb_unclamped(color);
    [rgb.red, rgb.green, rgb.blue].map(|ch| (ch.clamp(0.0, 1.0) * 255.0).round() as u8)
}

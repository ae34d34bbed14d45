//! Colour values as written in token configuration.

use std::fmt;
use std::str::FromStr;

use palette::{FromColor, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{DtokError, Result};
use crate::number::format_number;

/// Chroma below which a colour counts as grey and its hue is dropped.
const ACHROMATIC_CHROMA: f64 = 1e-4;

/// A perceptual colour in OKLCH space.
///
/// `l` is lightness in `[0, 1]`, `c` is chroma (unbounded, usually below
/// `0.4`), `h` is hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Convert an 8-bit sRGB triple into OKLCH.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let rgb = Srgb::new(r, g, b).into_format::<f64>();
        let lch = palette::Oklch::<f64>::from_color(rgb);
        if lch.chroma < ACHROMATIC_CHROMA {
            return Self::new(lch.l, 0.0, 0.0);
        }
        Self {
            l: lch.l,
            c: lch.chroma,
            h: lch.hue.into_positive_degrees(),
        }
    }

    /// Parse a colour literal.
    ///
    /// Supports formats:
    /// - `oklch(L C H)` where `L` may carry a `%` suffix
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(args) = s
            .strip_prefix("oklch(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_oklch_args(args, s);
        }

        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.is_ascii())
            .ok_or_else(|| invalid_literal(s))?;
        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let digits = hex
                    .chars()
                    .map(parse_hex_digit)
                    .collect::<Result<Vec<u8>>>()?;
                let (r, g, b) = (digits[0], digits[1], digits[2]);
                Ok(Self::from_rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::from_rgb8(r, g, b))
            }
            _ => Err(invalid_literal(s)),
        }
    }
}

impl FromStr for Oklch {
    type Err = DtokError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({} {} {})",
            format_number(self.l),
            format_number(self.c),
            format_number(self.h)
        )
    }
}

/// A colour entry in a colour mode: either an `{l, c, h}` object or a
/// string literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Lch(Oklch),
    Literal(String),
}

impl ColorValue {
    /// Resolve to an OKLCH value, parsing literals.
    pub fn resolve(&self) -> Result<Oklch> {
        match self {
            ColorValue::Lch(lch) => Ok(*lch),
            ColorValue::Literal(s) => Oklch::parse(s),
        }
    }
}

impl From<Oklch> for ColorValue {
    fn from(lch: Oklch) -> Self {
        ColorValue::Lch(lch)
    }
}

fn parse_oklch_args(args: &str, original: &str) -> Result<Oklch> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let &[l, c, h] = parts.as_slice() else {
        return Err(invalid_literal(original));
    };

    let l = match l.strip_suffix('%') {
        Some(pct) => parse_component(pct, original)? / 100.0,
        None => parse_component(l, original)?,
    };
    let c = parse_component(c, original)?;
    let h = parse_component(h.strip_suffix("deg").unwrap_or(h), original)?;

    Ok(Oklch::new(l, c, h))
}

fn parse_component(s: &str, original: &str) -> Result<f64> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid_literal(original))
}

fn invalid_literal(s: &str) -> DtokError {
    DtokError::Parse {
        message: format!("Invalid colour: {}", s),
        help: Some("Use oklch(L C H), #RGB, #RRGGBB, or an {l, c, h} object".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| DtokError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| DtokError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_oklch_literal() {
        let c = Oklch::parse("oklch(0.26 0 180)").unwrap();
        assert_eq!(c, Oklch::new(0.26, 0.0, 180.0));
    }

    #[test]
    fn test_parse_oklch_percent_lightness() {
        let c = Oklch::parse("oklch(62% 0.2 29deg)").unwrap();
        assert!((c.l - 0.62).abs() < 1e-9);
        assert_eq!(c.h, 29.0);
    }

    #[test]
    fn test_parse_hex_white() {
        let c = Oklch::parse("#FFFFFF").unwrap();
        assert!((c.l - 1.0).abs() < 1e-3);
        assert!(c.c < 1e-3);

        let short = Oklch::parse("#fff").unwrap();
        assert!((short.l - c.l).abs() < 1e-9);
    }

    #[test]
    fn test_parse_hex_black() {
        let c = Oklch::parse("#000000").unwrap();
        assert!(c.l.abs() < 1e-6);
    }

    #[test]
    fn test_hex_greys_have_no_hue() {
        assert_eq!(Oklch::parse("#ffffff").unwrap().to_string(), "oklch(1 0 0)");
        let grey = Oklch::parse("#808080").unwrap();
        assert_eq!((grey.c, grey.h), (0.0, 0.0));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Oklch::parse("#GGG").is_err());
        assert!(Oklch::parse("#12345").is_err());
        assert!(Oklch::parse("").is_err());
        assert!(Oklch::parse("oklch(0.5 0.1)").is_err());
        assert!(Oklch::parse("oklch(a b c)").is_err());
        assert!(Oklch::parse("red").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Oklch::new(0.26, 0.0, 180.0).to_string(), "oklch(0.26 0 180)");
    }

    #[test]
    fn test_color_value_deserialize_object_and_literal() {
        let v: ColorValue = serde_json::from_str(r#"{"l": 0.5, "c": 0.1, "h": 200}"#).unwrap();
        assert_eq!(v.resolve().unwrap(), Oklch::new(0.5, 0.1, 200.0));

        let v: ColorValue = serde_json::from_str(r#""oklch(0.5 0.1 200)""#).unwrap();
        assert_eq!(v.resolve().unwrap(), Oklch::new(0.5, 0.1, 200.0));
    }
}

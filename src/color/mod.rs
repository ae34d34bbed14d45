//! Colour values and their CSS encodings.
//!
//! - `Oklch` - perceptual colour values
//! - `ColorValue` - colour entries as written in configuration
//! - `format` / `format_with_alpha` - gamut-mapped CSS strings

mod format;
mod value;

pub use format::{format, format_with_alpha, in_srgb_gamut, to_gamut, ColorFormat};
pub use value::{ColorValue, Oklch};

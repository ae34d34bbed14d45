//! dtok - Design token compiler
//!
//! Expands a declarative token configuration into an intermediate
//! representation of named token records, then renders CSS custom
//! properties with one rule block per theme mode.
//!
//! ```
//! use dtok::{generate, to_css, Family, Mode, Options, ScaleTokens, TokenConfig};
//!
//! let config = TokenConfig {
//!     spacing: Some(Family::new(vec![
//!         Mode::new("default", ScaleTokens::new("px", 8.0, 4.0, 2)).as_default(),
//!     ])),
//!     ..Default::default()
//! };
//! let options = Options::default();
//! let ir = generate(&config, &options)?;
//! assert_eq!(ir.tokens["sp-2"].value, "16px");
//! assert_eq!(
//!     to_css(&ir, &options.selectors),
//!     ":root {\n  --sp-min: 4px;\n  --sp-1: 8px;\n  --sp-2: 16px;\n}"
//! );
//! # Ok::<(), dtok::DtokError>(())
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod contrast;
pub mod error;
pub mod generator;
pub mod ir;
pub mod number;
pub mod output;
pub mod transform;
pub mod validation;

pub use color::{ColorFormat, ColorValue, Oklch};
pub use config::{
    AlphaSchedule, BorderWidthTokens, ColorFamily, ColorMode, ColorTokens, Family, Mode, Options,
    Prefixes, ProjectFile, ScaleTokens, Selectors, StepRef, StepTokens, TokenConfig,
    TypographyTokens,
};
pub use contrast::{check_luminance, LuminanceReport, Polarity};
pub use error::{DtokError, Result};
pub use generator::generate;
pub use ir::{Ir, ModeCategory, ModeSet, Modes, Token, TokenFamily, TokenMap, TokenMetadata};
pub use transform::to_css;
pub use validation::{check, validate, CheckedConfig};

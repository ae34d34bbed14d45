//! Output transformers.
//!
//! Transformers read a finished `Ir` and render text. They never fail on a
//! well-formed IR.

mod css;

pub use css::to_css;

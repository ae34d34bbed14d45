//! Default-mode selection.

use crate::config::NamedMode;

/// Split modes into the default and the overrides.
///
/// The first mode flagged `is_default` wins; when none is flagged the first
/// mode is the default. Overrides keep their declaration order. Returns
/// `None` for an empty list, which validation rules out.
pub fn select_default<M: NamedMode>(modes: &[M]) -> Option<(&M, Vec<&M>)> {
    let index = modes.iter().position(|m| m.is_default()).unwrap_or(0);
    let default = modes.get(index)?;
    let overrides = modes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, m)| m)
        .collect();
    Some((default, overrides))
}

//! Lightness-separation check between two colour groups.
//!
//! A standalone diagnostic, not part of generation. Given a mode's colours,
//! it measures how far apart the lightest colour of the darker group and
//! the darkest colour of the lighter group sit on the OKLCH `L` axis.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::ColorTokens;

/// Which group is expected to be the darker one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    /// Backgrounds dark, foregrounds light.
    DarkBackground,
    /// Backgrounds light, foregrounds dark.
    #[default]
    LightBackground,
}

/// Result of a lightness-separation check.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuminanceReport {
    pub satisfied: bool,
    /// Lightest of the darker group subtracted from the darkest of the
    /// lighter group.
    pub delta: Option<f64>,
    /// Highest lightness the darker group may reach and still satisfy the
    /// minimum delta.
    pub darker_max: Option<f64>,
    /// Lowest lightness the lighter group may reach and still satisfy the
    /// minimum delta.
    pub lighter_min: Option<f64>,
    /// Signed distance of each colour from its group's boundary. Zero sits on
    /// the boundary, negative values violate it.
    pub headroom: IndexMap<String, f64>,
}

/// Check that `background` and `foreground` colours are at least
/// `min_delta` apart in lightness, in the direction `polarity` asks for.
///
/// Names that are missing, holes or unparseable are left out of their
/// group. If either group ends up empty the report is unsatisfied and
/// carries no measurements.
pub fn check_luminance<S: AsRef<str>>(
    colors: &ColorTokens,
    polarity: Polarity,
    min_delta: f64,
    background: &[S],
    foreground: &[S],
) -> LuminanceReport {
    let background = lightness_of(colors, background);
    let foreground = lightness_of(colors, foreground);

    let (darker, lighter) = match polarity {
        Polarity::DarkBackground => (background, foreground),
        Polarity::LightBackground => (foreground, background),
    };

    let (Some(darkest_high), Some(lightest_low)) = (
        darker.iter().map(|(_, l)| *l).reduce(f64::max),
        lighter.iter().map(|(_, l)| *l).reduce(f64::min),
    ) else {
        tracing::debug!("luminance check skipped: a colour group is empty");
        return LuminanceReport::default();
    };

    let delta = lightest_low - darkest_high;
    let darker_max = lightest_low - min_delta;
    let lighter_min = darkest_high + min_delta;

    let mut headroom = IndexMap::new();
    for (name, l) in &darker {
        headroom.insert(name.clone(), darker_max - l);
    }
    for (name, l) in &lighter {
        headroom.insert(name.clone(), l - lighter_min);
    }

    LuminanceReport {
        satisfied: delta >= min_delta,
        delta: Some(delta),
        darker_max: Some(darker_max),
        lighter_min: Some(lighter_min),
        headroom,
    }
}

fn lightness_of<S: AsRef<str>>(colors: &ColorTokens, names: &[S]) -> Vec<(String, f64)> {
    names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let value = colors.get(name)?.as_ref()?;
            match value.resolve() {
                Ok(color) => Some((name.to_string(), color.l)),
                Err(err) => {
                    tracing::debug!(color = name, error = %err, "excluding unparseable colour");
                    None
                }
            }
        })
        .collect()
}

//! Numeric formatting shared by every token family.

/// Decimal places kept when rendering a token value.
const PRECISION: i32 = 4;

/// Smallest non-zero magnitude that renders without collapsing to `0`.
/// Validation rejects configured numbers below it.
pub const SMALLEST_MAGNITUDE: f64 = 1e-4;

/// Round `value` to four decimal places, dropping trailing zeros.
///
/// `1.0` renders as `1`, `0.30000000000000004` as `0.3`, and negative
/// zero as `0`. Magnitudes below `SMALLEST_MAGNITUDE / 2` render as `0`.
pub fn format_number(value: f64) -> String {
    let scale = 10f64.powi(PRECISION);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Render a magnitude followed by its unit, e.g. `8px`.
pub fn with_unit(value: f64, unit: &str) -> String {
    format!("{}{}", format_number(value), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(96.0), "96");
    }

    #[test]
    fn test_fractions_keep_significant_digits() {
        assert_eq!(format_number(0.875), "0.875");
        assert_eq!(format_number(1.125), "1.125");
    }

    #[test]
    fn test_float_noise_is_rounded_away() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(0.875 + 0.125), "1");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.00001), "0");
    }

    #[test]
    fn test_with_unit() {
        assert_eq!(with_unit(8.0, "px"), "8px");
        assert_eq!(with_unit(0.625, "rem"), "0.625rem");
        assert_eq!(with_unit(150.0, "ms"), "150ms");
    }
}

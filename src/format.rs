//! Number formatting for path data, labels and the parameter sheet.

use crate::params::SurfaceType;
use crate::types::Millimeters as Mm;

/// Format a number with 6 significant figures, trailing zeros trimmed
/// (the `%g` style used in path data and labels).
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;
    if !rounded.is_finite() {
        // Subnormal input: the scale factor overflows
        return format!("{value:e}");
    }

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Two-decimal rendering used for computed metrics
pub fn format_mm(value: Mm) -> String {
    format!("{:.2}", value.raw())
}

/// Radius as shown to the user: `∞` for a flat surface, otherwise the
/// unsigned magnitude with two decimals.
pub fn format_radius(radius: Mm, kind: SurfaceType) -> String {
    if kind.is_plano() {
        "∞".to_string()
    } else {
        format_mm(radius.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims_zeros() {
        assert_eq!(fmt_num(184.0), "184");
        assert_eq!(fmt_num(0.2), "0.2");
        assert_eq!(fmt_num(0.5461), "0.5461");
        assert_eq!(fmt_num(196.70158), "196.702");
        assert_eq!(fmt_num(-12.5), "-12.5");
        assert_eq!(fmt_num(1000.0), "1000");
    }

    #[test]
    fn fmt_num_degenerate_values() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(f64::NAN), "0");
        assert_eq!(fmt_num(f64::INFINITY), "0");
        assert_eq!(fmt_num(-0.0000001), "-0.0000001");
    }

    #[test]
    fn fmt_num_subnormal_values() {
        assert_eq!(fmt_num(1e-310), "1e-310");
        assert_eq!(fmt_num(-5e-324), "-5e-324");
    }

    #[test]
    fn radius_display() {
        insta::assert_snapshot!(format_radius(Mm(-50.0), SurfaceType::Concave), @"50.00");
        insta::assert_snapshot!(format_radius(Mm(0.0), SurfaceType::Plano), @"∞");
        insta::assert_snapshot!(format_radius(Mm(12.345), SurfaceType::Convex), @"12.35");
    }
}

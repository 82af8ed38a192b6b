//! Sagitta and edge-thickness calculations, all in millimetres.

use crate::log::debug;
use crate::params::{LensParameters, Side, SurfaceType};
use crate::types::Millimeters as Mm;

/// Thinnest edge the engine will ever report
pub const MIN_EDGE_THICKNESS: Mm = Mm(0.1);

/// Smallest radius used in sagitta calculations
pub const MIN_RADIUS: Mm = Mm(0.1);

/// A radius must exceed the semi-aperture by this factor to draw an arc
pub const RADIUS_CLEARANCE: f64 = 1.05;

/// Half the overall diameter; negative and non-finite diameters count as zero.
pub fn semi_aperture(diameter: Mm) -> Mm {
    if diameter.is_finite() {
        diameter.max(Mm::ZERO) / 2.0
    } else {
        Mm::ZERO
    }
}

/// Radius actually used for drawing and sagitta: `|r|` raised to at least
/// `max(1.05·h, 0.1)` so the surface spans the whole aperture.
pub fn effective_radius(radius: Mm, semi_aperture: Mm) -> Mm {
    let floor = (semi_aperture * RADIUS_CLEARANCE).max(MIN_RADIUS);
    // f64::max drops NaN, so a NaN radius lands on the floor
    radius.abs().max(floor)
}

/// Unsigned sagitta of a spherical cap over semi-aperture `h`.
pub fn sagitta_magnitude(radius: Mm, semi_aperture: Mm) -> Mm {
    let r = effective_radius(radius, semi_aperture).raw();
    let h = semi_aperture.raw();
    // r - sqrt(r² - h²), rearranged so neither square can overflow
    let sag = h * (h / (r + (r - h).sqrt() * (r + h).sqrt()));
    if sag.is_finite() {
        Mm(sag.max(0.0))
    } else {
        // An infinite radius is a flat surface
        Mm::ZERO
    }
}

/// Signed sagitta: positive for CX, negative for CV, zero for PLANO.
pub fn sagitta(radius: Mm, kind: SurfaceType, diameter: Mm) -> Mm {
    let magnitude = sagitta_magnitude(radius, semi_aperture(diameter));
    match kind {
        SurfaceType::Convex => magnitude,
        SurfaceType::Concave => -magnitude,
        SurfaceType::Plano => Mm::ZERO,
    }
}

/// Derived thicknesses of a lens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensMetrics {
    pub edge_thickness: Mm,
    pub sagitta1: Mm,
    pub sagitta2: Mm,
}

impl LensMetrics {
    pub fn sagitta(&self, side: Side) -> Mm {
        match side {
            Side::Left => self.sagitta1,
            Side::Right => self.sagitta2,
        }
    }
}

pub fn compute_metrics(params: &LensParameters) -> LensMetrics {
    let sagitta1 = sagitta(params.left.radius, params.left.kind, params.diameter);
    let sagitta2 = sagitta(params.right.radius, params.right.kind, params.diameter);
    let raw_edge = params.center_thickness - sagitta1 - sagitta2;
    // Receiver first: a NaN thickness still yields the minimum
    let edge_thickness = MIN_EDGE_THICKNESS.max(raw_edge);
    if raw_edge.raw() < MIN_EDGE_THICKNESS.raw() {
        debug!(raw = raw_edge.raw(), "edge thickness clamped");
    }
    LensMetrics {
        edge_thickness,
        sagitta1,
        sagitta2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::adjust;
    use crate::field::Field;

    fn approx(a: Mm, b: f64) -> bool {
        (a.raw() - b).abs() < 1e-9
    }

    #[test]
    fn sagitta_of_known_cap() {
        // r = 50, h = 12.5: 50 - sqrt(2343.75)
        let sag = sagitta(Mm(50.0), SurfaceType::Convex, Mm(25.0));
        assert!(approx(sag, 50.0 - 2343.75_f64.sqrt()));
        let sag = sagitta(Mm(-50.0), SurfaceType::Concave, Mm(25.0));
        assert!(approx(sag, -(50.0 - 2343.75_f64.sqrt())));
    }

    #[test]
    fn plano_has_no_sagitta() {
        assert_eq!(sagitta(Mm(50.0), SurfaceType::Plano, Mm(25.0)), Mm::ZERO);
    }

    #[test]
    fn small_radius_is_raised_to_clearance() {
        let h = Mm(12.5);
        assert!(approx(effective_radius(Mm(5.0), h), 13.125));
        assert!(approx(effective_radius(Mm(-5.0), h), 13.125));
        assert!(approx(effective_radius(Mm(0.0), Mm::ZERO), 0.1));
        assert!(approx(effective_radius(Mm(f64::NAN), h), 13.125));
    }

    #[test]
    fn sagitta_never_exceeds_effective_radius() {
        for r in [0.0, 0.05, 1.0, 6.0, 12.5, 13.0, 50.0, 1e6, 1e308, f64::INFINITY, f64::NAN] {
            for d in [0.0, 1.0, 25.0, 100.0, 1e200, -3.0, f64::NAN] {
                let h = semi_aperture(Mm(d));
                let sag = sagitta_magnitude(Mm(r), h);
                assert!(sag.is_finite(), "r={r} d={d}");
                assert!(sag.raw() >= 0.0, "r={r} d={d}");
                assert!(sag.raw() <= effective_radius(Mm(r), h).raw(), "r={r} d={d}");
            }
        }
    }

    #[test]
    fn sagitta_stays_proportional_for_huge_apertures() {
        // At the 1.05·h floor the cap depth is h / (1.05 + sqrt(0.1025))
        let ratio = 1.0 / (1.05 + 0.1025_f64.sqrt());
        for d in [1e160, 1e200, 1e308] {
            let h = semi_aperture(Mm(d));
            let sag = sagitta_magnitude(Mm(50.0), h);
            assert!(sag.is_finite(), "d={d}");
            assert!((sag.raw() / h.raw() - ratio).abs() < 1e-9, "d={d}");
        }

        let mut params = LensParameters::default();
        params.diameter = Mm(1e200);
        params.right.kind = SurfaceType::Convex;
        params.right.radius = Mm(50.0);
        assert_eq!(compute_metrics(&params).edge_thickness, MIN_EDGE_THICKNESS);
    }

    #[test]
    fn biconvex_edge_is_clamped() {
        let params = LensParameters::default();
        let params = adjust(&params, Field::Type(Side::Right), "CX");
        let params = adjust(&params, Field::CenterThickness, 0.5);
        let metrics = compute_metrics(&params);
        assert_eq!(metrics.edge_thickness, MIN_EDGE_THICKNESS);
        assert!(metrics.sagitta1.raw() > 0.0);
        assert!(metrics.sagitta2.raw() > 0.0);
    }

    #[test]
    fn meniscus_edge_matches_formula() {
        let params = LensParameters::default();
        let metrics = compute_metrics(&params);
        assert!(metrics.sagitta1.raw() > 0.0);
        assert!(metrics.sagitta2.raw() < 0.0);
        let expected = params.center_thickness - metrics.sagitta1 - metrics.sagitta2;
        assert!(approx(metrics.edge_thickness, expected.raw()));
        assert_eq!(metrics.sagitta(Side::Right), metrics.sagitta2);
    }

    #[test]
    fn nan_thickness_still_reports_minimum_edge() {
        let mut params = LensParameters::default();
        params.center_thickness = Mm(f64::NAN);
        assert_eq!(compute_metrics(&params).edge_thickness, MIN_EDGE_THICKNESS);
    }
}

//! The lens parameter model.
//!
//! A [`LensParameters`] value is the whole state of a drawing session. It is
//! never mutated in place by the engine: every edit goes through
//! [`crate::adjust`] and produces a fresh value.
//!
//! Sign convention for radii: a convex surface stores a positive radius, a
//! concave surface a negative one, and a plano surface stores exactly zero.
//! The geometry engine relies on this for both surfaces.

use std::fmt;
use std::str::FromStr;

use crate::errors::FieldError;
use crate::types::Millimeters as Mm;

/// Clearance between the overall diameter and an auto-derived clear aperture
pub const CLEAR_APERTURE_MARGIN: Mm = Mm(1.0);

/// Shape of one lens surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    /// CV, curving into the glass
    Concave,
    /// CX, bulging out of the glass
    Convex,
    /// Flat, infinite radius
    Plano,
}

impl SurfaceType {
    /// Order used when stepping through surface types.
    pub const CYCLE: [SurfaceType; 3] = [SurfaceType::Concave, SurfaceType::Convex, SurfaceType::Plano];

    /// Drawing-convention code: `CV`, `CX` or `PLANO`
    pub fn code(self) -> &'static str {
        match self {
            SurfaceType::Concave => "CV",
            SurfaceType::Convex => "CX",
            SurfaceType::Plano => "PLANO",
        }
    }

    pub fn is_plano(self) -> bool {
        matches!(self, SurfaceType::Plano)
    }

    /// Store a radius magnitude with the sign this surface type requires.
    pub fn signed_radius(self, magnitude: Mm) -> Mm {
        match self {
            SurfaceType::Convex => magnitude.abs(),
            SurfaceType::Concave => -magnitude.abs(),
            SurfaceType::Plano => Mm::ZERO,
        }
    }

    /// Move `delta` places through [`SurfaceType::CYCLE`], wrapping.
    pub fn cycled(self, delta: i32) -> SurfaceType {
        let len = Self::CYCLE.len() as i32;
        let index = Self::CYCLE.iter().position(|t| *t == self).unwrap_or(0) as i32;
        Self::CYCLE[(index + delta.rem_euclid(len)).rem_euclid(len) as usize]
    }
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SurfaceType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("CX") {
            Ok(SurfaceType::Convex)
        } else if trimmed.eq_ignore_ascii_case("CV") {
            Ok(SurfaceType::Concave)
        } else if trimmed.eq_ignore_ascii_case("PLANO") || trimmed == "∞" {
            Ok(SurfaceType::Plano)
        } else {
            Err(FieldError::UnknownSurfaceType {
                value: s.to_string(),
            })
        }
    }
}

/// Which lens surface: surface 1 is on the left, surface 2 on the right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn is_left(self) -> bool {
        matches!(self, Side::Left)
    }
}

/// Whether a surface's clear aperture follows the lens diameter.
///
/// `Auto` moves to `Manual` on a direct edit and only returns through
/// [`LensParameters::reset_effective_diameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiameterMode {
    #[default]
    Auto,
    Manual,
}

/// One optical surface and its drawing annotations
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Signed radius of curvature, see the module docs for the convention
    pub radius: Mm,
    pub kind: SurfaceType,
    /// Minimum clear aperture (∅e)
    pub effective_diameter: Mm,
    pub diameter_mode: DiameterMode,
    /// Protective chamfer width
    pub chamfer: Mm,
    /// Reference wavelength in µm
    pub wavelength: f64,
    /// Coating specification, one line per entry
    pub anti_reflection: String,
    pub bevel: String,
    pub imperfections: String,
    pub laser_damage: String,
}

impl Surface {
    fn with_radius(kind: SurfaceType, magnitude: Mm, effective_diameter: Mm) -> Self {
        Self {
            radius: kind.signed_radius(magnitude),
            kind,
            effective_diameter,
            diameter_mode: DiameterMode::Auto,
            chamfer: Mm(0.2),
            wavelength: 0.5461,
            anti_reflection: "AR @0.500-0.600µm\nBBAR AVG T < 99.7%".to_string(),
            bevel: "0.2 x 45°".to_string(),
            imperfections: "60/40".to_string(),
            laser_damage: "N/A".to_string(),
        }
    }

    /// Physical radius of curvature, ignoring the sign convention
    pub fn radius_magnitude(&self) -> Mm {
        self.radius.abs()
    }

    pub fn is_diameter_manual(&self) -> bool {
        self.diameter_mode == DiameterMode::Manual
    }
}

/// Glass and material annotations (ISO 10110 columns 0/ to 2/)
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub glass: String,
    /// Refractive index tolerance
    pub nd_tolerance: f64,
    /// Abbe number tolerance in percent
    pub vd_tolerance: f64,
    pub bubbles: String,
    pub inclusions: String,
    pub stress: String,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            glass: "N-BK7".to_string(),
            nd_tolerance: 0.001,
            vd_tolerance: 0.8,
            bubbles: "0/2x0.16".to_string(),
            inclusions: "1/3x0.16".to_string(),
            stress: "2/1;1".to_string(),
        }
    }
}

/// The canonical description of a lens
#[derive(Debug, Clone, PartialEq)]
pub struct LensParameters {
    pub diameter: Mm,
    pub center_thickness: Mm,
    /// Surface 1
    pub left: Surface,
    /// Surface 2
    pub right: Surface,
    pub material: Material,
}

impl Default for LensParameters {
    fn default() -> Self {
        let diameter = Mm(25.0);
        let clear = auto_effective_diameter(diameter);
        Self {
            diameter,
            center_thickness: Mm(4.0),
            left: Surface::with_radius(SurfaceType::Convex, Mm(50.0), clear),
            right: Surface::with_radius(SurfaceType::Concave, Mm(50.0), clear),
            material: Material::default(),
        }
    }
}

impl LensParameters {
    pub fn surface(&self, side: Side) -> &Surface {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn surface_mut(&mut self, side: Side) -> &mut Surface {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Half the overall diameter
    pub fn semi_diameter(&self) -> Mm {
        self.diameter / 2.0
    }

    pub fn radius1(&self) -> Mm {
        self.left.radius
    }

    pub fn radius2(&self) -> Mm {
        self.right.radius
    }

    pub fn type1(&self) -> SurfaceType {
        self.left.kind
    }

    pub fn type2(&self) -> SurfaceType {
        self.right.kind
    }

    pub fn left_diameter_manually_set(&self) -> bool {
        self.left.is_diameter_manual()
    }

    pub fn right_diameter_manually_set(&self) -> bool {
        self.right.is_diameter_manual()
    }

    /// Put a surface's clear aperture back under diameter tracking.
    pub fn reset_effective_diameter(&self, side: Side) -> LensParameters {
        let mut next = self.clone();
        let diameter = next.diameter;
        let surface = next.surface_mut(side);
        surface.diameter_mode = DiameterMode::Auto;
        surface.effective_diameter = auto_effective_diameter(diameter);
        next
    }
}

/// Clear aperture derived from the overall diameter
pub fn auto_effective_diameter(diameter: Mm) -> Mm {
    (diameter - CLEAR_APERTURE_MARGIN).max(Mm::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_sign_convention() {
        let params = LensParameters::default();
        assert_eq!(params.type1(), SurfaceType::Convex);
        assert_eq!(params.radius1(), Mm(50.0));
        assert_eq!(params.type2(), SurfaceType::Concave);
        assert_eq!(params.radius2(), Mm(-50.0));
        assert_eq!(params.left.effective_diameter, Mm(24.0));
        assert_eq!(params.right.effective_diameter, Mm(24.0));
        assert!(!params.left_diameter_manually_set());
        assert!(!params.right_diameter_manually_set());
    }

    #[test]
    fn surface_type_parses_codes() {
        assert_eq!("CX".parse::<SurfaceType>(), Ok(SurfaceType::Convex));
        assert_eq!("cv".parse::<SurfaceType>(), Ok(SurfaceType::Concave));
        assert_eq!(" PLANO ".parse::<SurfaceType>(), Ok(SurfaceType::Plano));
        assert_eq!("∞".parse::<SurfaceType>(), Ok(SurfaceType::Plano));
        assert!(matches!(
            "flat".parse::<SurfaceType>(),
            Err(FieldError::UnknownSurfaceType { .. })
        ));
    }

    #[test]
    fn surface_type_cycle_wraps_both_ways() {
        assert_eq!(SurfaceType::Concave.cycled(1), SurfaceType::Convex);
        assert_eq!(SurfaceType::Convex.cycled(1), SurfaceType::Plano);
        assert_eq!(SurfaceType::Plano.cycled(1), SurfaceType::Concave);
        assert_eq!(SurfaceType::Concave.cycled(-1), SurfaceType::Plano);
        assert_eq!(SurfaceType::Convex.cycled(3), SurfaceType::Convex);
    }

    #[test]
    fn surface_type_cycle_survives_extreme_deltas() {
        // i32::MAX ≡ 1 and i32::MIN ≡ 1 (mod 3)
        assert_eq!(SurfaceType::Plano.cycled(i32::MAX), SurfaceType::Concave);
        assert_eq!(SurfaceType::Plano.cycled(i32::MIN), SurfaceType::Concave);
        assert_eq!(SurfaceType::Concave.cycled(i32::MAX), SurfaceType::Convex);
    }

    #[test]
    fn signed_radius_by_type() {
        assert_eq!(SurfaceType::Convex.signed_radius(Mm(-12.0)), Mm(12.0));
        assert_eq!(SurfaceType::Concave.signed_radius(Mm(12.0)), Mm(-12.0));
        assert_eq!(SurfaceType::Plano.signed_radius(Mm(12.0)), Mm::ZERO);
    }

    #[test]
    fn auto_effective_diameter_floors_at_zero() {
        assert_eq!(auto_effective_diameter(Mm(30.0)), Mm(29.0));
        assert_eq!(auto_effective_diameter(Mm(0.5)), Mm::ZERO);
    }

    #[test]
    fn reset_returns_surface_to_tracking() {
        let mut params = LensParameters::default();
        params.left.effective_diameter = Mm(10.0);
        params.left.diameter_mode = DiameterMode::Manual;

        let reset = params.reset_effective_diameter(Side::Left);
        assert!(!reset.left_diameter_manually_set());
        assert_eq!(reset.left.effective_diameter, Mm(24.0));
        // Original value untouched
        assert_eq!(params.left.effective_diameter, Mm(10.0));
    }
}

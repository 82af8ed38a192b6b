//! The parameter adjuster: one edit in, one consistent parameter set out.
//!
//! [`adjust`] handles direct edits (typing a value, picking a surface type),
//! [`step`] handles stepped increments such as a scroll wheel over a field.
//! Neither can fail. Input that does not make sense for a field leaves that
//! field at its previous value.
//!
//! The adjuster records intent: a radius smaller than the semi-diameter is
//! stored as given when typed directly, and the geometry engine clamps it for
//! display. Only the stepped interaction refuses to cross that bound.

use crate::field::{Field, FieldKind, RawValue};
use crate::params::{DiameterMode, LensParameters, Side, SurfaceType, auto_effective_diameter};
use crate::types::Millimeters as Mm;

/// Apply a single edit and return the next parameter set.
pub fn adjust(current: &LensParameters, field: Field, value: impl Into<RawValue>) -> LensParameters {
    let value = value.into();
    let mut next = current.clone();

    match field {
        Field::Type(side) => {
            let Ok(kind) = value.as_text().parse::<SurfaceType>() else {
                crate::log::debug!(field = %field, "unrecognized surface type, keeping previous");
                return next;
            };
            set_surface_type(&mut next, side, kind);
        }
        Field::Radius(side) => {
            let surface = next.surface_mut(side);
            let magnitude = number_or(field, &value, surface.radius_magnitude().raw());
            surface.radius = surface.kind.signed_radius(Mm(magnitude));
        }
        Field::Diameter => {
            next.diameter = Mm(number_or(field, &value, current.diameter.raw()));
            let clear = auto_effective_diameter(next.diameter);
            for side in Side::BOTH {
                let surface = next.surface_mut(side);
                if surface.diameter_mode == DiameterMode::Auto {
                    surface.effective_diameter = clear;
                }
            }
        }
        Field::EffectiveDiameter(side) => {
            let surface = next.surface_mut(side);
            surface.effective_diameter =
                Mm(number_or(field, &value, surface.effective_diameter.raw()));
            surface.diameter_mode = DiameterMode::Manual;
        }
        Field::CenterThickness => {
            next.center_thickness = Mm(number_or(field, &value, current.center_thickness.raw()));
        }
        Field::Chamfer(side) => {
            let surface = next.surface_mut(side);
            surface.chamfer = Mm(number_or(field, &value, surface.chamfer.raw()));
        }
        Field::Wavelength(side) => {
            let surface = next.surface_mut(side);
            surface.wavelength = number_or(field, &value, surface.wavelength);
        }
        Field::NdTolerance => {
            next.material.nd_tolerance = number_or(field, &value, current.material.nd_tolerance);
        }
        Field::VdTolerance => {
            next.material.vd_tolerance = number_or(field, &value, current.material.vd_tolerance);
        }
        Field::AntiReflection(side) => next.surface_mut(side).anti_reflection = value.as_text(),
        Field::Bevel(side) => next.surface_mut(side).bevel = value.as_text(),
        Field::Imperfections(side) => next.surface_mut(side).imperfections = value.as_text(),
        Field::LaserDamage(side) => next.surface_mut(side).laser_damage = value.as_text(),
        Field::Glass => next.material.glass = value.as_text(),
        Field::Bubbles => next.material.bubbles = value.as_text(),
        Field::Inclusions => next.material.inclusions = value.as_text(),
        Field::Stress => next.material.stress = value.as_text(),
    }

    next
}

/// Apply an edit addressed by its string key.
///
/// Unknown keys leave the parameters unchanged.
pub fn adjust_key(current: &LensParameters, key: &str, value: impl Into<RawValue>) -> LensParameters {
    match key.parse::<Field>() {
        Ok(field) => adjust(current, field, value),
        Err(_err) => {
            crate::log::warn!(key, error = %_err, "ignoring edit for unknown field");
            current.clone()
        }
    }
}

/// Apply a stepped increment (`delta > 0`) or decrement (`delta < 0`).
pub fn step(current: &LensParameters, field: Field, delta: i32) -> LensParameters {
    let delta_mm = Mm(delta as f64);

    match field {
        Field::Radius(side) => {
            let surface = current.surface(side);
            if surface.kind.is_plano() {
                return current.clone();
            }
            let magnitude = surface.radius_magnitude() + delta_mm;
            if magnitude < current.semi_diameter() {
                crate::log::debug!(
                    field = %field,
                    magnitude = magnitude.raw(),
                    semi_diameter = current.semi_diameter().raw(),
                    "rejected radius step below semi-diameter"
                );
                return current.clone();
            }
            adjust(current, field, magnitude)
        }
        Field::Diameter | Field::CenterThickness => {
            let value = numeric_value(current, field).unwrap_or(0.0);
            adjust(current, field, (value.round() + delta as f64).max(0.0))
        }
        Field::Type(side) => {
            let kind = current.surface(side).kind.cycled(delta);
            adjust(current, field, kind.code())
        }
        _ => match field.kind() {
            FieldKind::Numeric => {
                let value = numeric_value(current, field).unwrap_or(0.0);
                adjust(current, field, (value + delta as f64).max(0.0))
            }
            FieldKind::Text | FieldKind::SurfaceType => current.clone(),
        },
    }
}

impl LensParameters {
    /// Method form of [`adjust`]
    pub fn adjust(&self, field: Field, value: impl Into<RawValue>) -> LensParameters {
        adjust(self, field, value)
    }

    /// Method form of [`step`]
    pub fn step(&self, field: Field, delta: i32) -> LensParameters {
        step(self, field, delta)
    }

    /// The current value of a field, as a presentation layer would show it.
    ///
    /// Radii come back as unsigned magnitudes and surface types as their
    /// codes, so feeding the result to [`adjust`] is a no-op.
    pub fn value(&self, field: Field) -> RawValue {
        match field {
            Field::Type(side) => RawValue::from(self.surface(side).kind.code()),
            _ => match numeric_value(self, field) {
                Some(n) => RawValue::Number(n),
                None => RawValue::Text(text_value(self, field).to_string()),
            },
        }
    }
}

fn set_surface_type(next: &mut LensParameters, side: Side, kind: SurfaceType) {
    let diameter = next.diameter;
    let surface = next.surface_mut(side);
    let previous = surface.kind;
    surface.kind = kind;

    surface.radius = if previous.is_plano() {
        kind.signed_radius(diameter * 2.0)
    } else {
        kind.signed_radius(surface.radius)
    };
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn number_or(field: Field, value: &RawValue, previous: f64) -> f64 {
    match value.as_number() {
        Some(n) => n,
        None => {
            crate::log::debug!(field = %field, ?value, previous, "invalid numeric input, keeping previous");
            previous
        }
    }
}

fn numeric_value(params: &LensParameters, field: Field) -> Option<f64> {
    let value = match field {
        Field::Diameter => params.diameter.raw(),
        Field::CenterThickness => params.center_thickness.raw(),
        Field::Radius(side) => params.surface(side).radius_magnitude().raw(),
        Field::EffectiveDiameter(side) => params.surface(side).effective_diameter.raw(),
        Field::Chamfer(side) => params.surface(side).chamfer.raw(),
        Field::Wavelength(side) => params.surface(side).wavelength,
        Field::NdTolerance => params.material.nd_tolerance,
        Field::VdTolerance => params.material.vd_tolerance,
        _ => return None,
    };
    Some(value)
}

fn text_value(params: &LensParameters, field: Field) -> &str {
    match field {
        Field::AntiReflection(side) => &params.surface(side).anti_reflection,
        Field::Bevel(side) => &params.surface(side).bevel,
        Field::Imperfections(side) => &params.surface(side).imperfections,
        Field::LaserDamage(side) => &params.surface(side).laser_damage,
        Field::Glass => &params.material.glass,
        Field::Bubbles => &params.material.bubbles,
        Field::Inclusions => &params.material.inclusions,
        Field::Stress => &params.material.stress,
        _ => "",
    }
}

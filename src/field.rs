//! Field keys and raw edit values coming from a presentation layer.

use std::fmt;
use std::str::FromStr;

use crate::errors::FieldError;
use crate::params::Side;
use crate::types::Millimeters;

/// One editable entry of [`crate::LensParameters`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Diameter,
    CenterThickness,
    Radius(Side),
    Type(Side),
    EffectiveDiameter(Side),
    Chamfer(Side),
    Wavelength(Side),
    AntiReflection(Side),
    Bevel(Side),
    Imperfections(Side),
    LaserDamage(Side),
    Glass,
    NdTolerance,
    VdTolerance,
    Bubbles,
    Inclusions,
    Stress,
}

/// How a field interprets its raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric,
    Text,
    SurfaceType,
}

impl Field {
    pub const ALL: [Field; 26] = [
        Field::Diameter,
        Field::CenterThickness,
        Field::Radius(Side::Left),
        Field::Radius(Side::Right),
        Field::Type(Side::Left),
        Field::Type(Side::Right),
        Field::EffectiveDiameter(Side::Left),
        Field::EffectiveDiameter(Side::Right),
        Field::Chamfer(Side::Left),
        Field::Chamfer(Side::Right),
        Field::Wavelength(Side::Left),
        Field::Wavelength(Side::Right),
        Field::AntiReflection(Side::Left),
        Field::AntiReflection(Side::Right),
        Field::Bevel(Side::Left),
        Field::Bevel(Side::Right),
        Field::Imperfections(Side::Left),
        Field::Imperfections(Side::Right),
        Field::LaserDamage(Side::Left),
        Field::LaserDamage(Side::Right),
        Field::Glass,
        Field::NdTolerance,
        Field::VdTolerance,
        Field::Bubbles,
        Field::Inclusions,
        Field::Stress,
    ];

    /// The key a presentation layer uses for this field
    pub fn key(self) -> &'static str {
        use Side::{Left, Right};
        match self {
            Field::Diameter => "diameter",
            Field::CenterThickness => "centerThickness",
            Field::Radius(Left) => "radius1",
            Field::Radius(Right) => "radius2",
            Field::Type(Left) => "type1",
            Field::Type(Right) => "type2",
            Field::EffectiveDiameter(Left) => "leftDiameter",
            Field::EffectiveDiameter(Right) => "rightDiameter",
            Field::Chamfer(Left) => "leftChamfer",
            Field::Chamfer(Right) => "rightChamfer",
            Field::Wavelength(Left) => "leftWavelength",
            Field::Wavelength(Right) => "rightWavelength",
            Field::AntiReflection(Left) => "leftAR",
            Field::AntiReflection(Right) => "rightAR",
            Field::Bevel(Left) => "leftBevel",
            Field::Bevel(Right) => "rightBevel",
            Field::Imperfections(Left) => "leftImperfections",
            Field::Imperfections(Right) => "rightImperfections",
            Field::LaserDamage(Left) => "leftLaserDamage",
            Field::LaserDamage(Right) => "rightLaserDamage",
            Field::Glass => "glass",
            Field::NdTolerance => "nd",
            Field::VdTolerance => "vd",
            Field::Bubbles => "bubbles",
            Field::Inclusions => "inclusions",
            Field::Stress => "stress",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Type(_) => FieldKind::SurfaceType,
            Field::Diameter
            | Field::CenterThickness
            | Field::Radius(_)
            | Field::EffectiveDiameter(_)
            | Field::Chamfer(_)
            | Field::Wavelength(_)
            | Field::NdTolerance
            | Field::VdTolerance => FieldKind::Numeric,
            Field::AntiReflection(_)
            | Field::Bevel(_)
            | Field::Imperfections(_)
            | Field::LaserDamage(_)
            | Field::Glass
            | Field::Bubbles
            | Field::Inclusions
            | Field::Stress => FieldKind::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| FieldError::UnknownField { key: s.to_string() })
    }
}

/// An edit value as typed or scrolled by the user
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Numeric reading of the value; `None` for NaN, infinities and
    /// unparsable text.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            RawValue::Number(n) => *n,
            RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        Millimeters::try_new(value).ok().map(Millimeters::raw)
    }

    /// Text reading of the value
    pub fn as_text(&self) -> String {
        match self {
            RawValue::Number(n) => n.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<Millimeters> for RawValue {
    fn from(value: Millimeters) -> Self {
        RawValue::Number(value.raw())
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_round_trips() {
        for field in Field::ALL {
            assert_eq!(field.key().parse::<Field>(), Ok(field), "key {}", field);
        }
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = "radius3".parse::<Field>().unwrap_err();
        assert_eq!(
            err,
            FieldError::UnknownField {
                key: "radius3".to_string()
            }
        );
    }

    #[test]
    fn raw_numbers_reject_nan_and_garbage() {
        assert_eq!(RawValue::from(2.5).as_number(), Some(2.5));
        assert_eq!(RawValue::from(" 12.75 ").as_number(), Some(12.75));
        assert_eq!(RawValue::from(f64::NAN).as_number(), None);
        assert_eq!(RawValue::from(f64::INFINITY).as_number(), None);
        assert_eq!(RawValue::from("abc").as_number(), None);
        assert_eq!(RawValue::from("").as_number(), None);
    }

    #[test]
    fn field_kinds() {
        assert_eq!(Field::Type(Side::Left).kind(), FieldKind::SurfaceType);
        assert_eq!(Field::Chamfer(Side::Right).kind(), FieldKind::Numeric);
        assert_eq!(Field::Glass.kind(), FieldKind::Text);
    }
}

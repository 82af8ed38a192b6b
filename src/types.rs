//! Strongly-typed numeric primitives for lensdraw (zero-cost newtypes).
//!
//! Lens dimensions are millimetres; drawing coordinates are pixels in the
//! canvas frame. The only bridge between the two is [`Scaler`].

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in millimetres
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Millimeters(pub f64);

impl Millimeters {
    pub const ZERO: Millimeters = Millimeters(0.0);

    /// Create a length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Millimeters, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Millimeters(val))
        }
    }

    /// Get the absolute value
    #[inline]
    pub fn abs(self) -> Millimeters {
        Millimeters(self.0.abs())
    }

    #[inline]
    pub fn max(self, other: Millimeters) -> Millimeters {
        Millimeters(self.0.max(other.0))
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Millimeters {
    type Output = Millimeters;
    fn add(self, rhs: Millimeters) -> Millimeters { Millimeters(self.0 + rhs.0) }
}
impl Sub for Millimeters {
    type Output = Millimeters;
    fn sub(self, rhs: Millimeters) -> Millimeters { Millimeters(self.0 - rhs.0) }
}
impl Mul<f64> for Millimeters {
    type Output = Millimeters;
    fn mul(self, rhs: f64) -> Millimeters { Millimeters(self.0 * rhs) }
}
impl Div<f64> for Millimeters {
    type Output = Millimeters;
    fn div(self, rhs: f64) -> Millimeters { Millimeters(self.0 / rhs) }
}

impl Neg for Millimeters {
    type Output = Millimeters;
    fn neg(self) -> Millimeters { Millimeters(-self.0) }
}

impl fmt::Display for Millimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert millimetres to canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    scale: f64,
}

impl Scaler {
    /// Create a Scaler with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(scale: f64) -> Result<Self, NumericError> {
        if scale.is_nan() {
            Err(NumericError::NaN)
        } else if scale.is_infinite() {
            Err(NumericError::Infinite)
        } else if scale == 0.0 {
            Err(NumericError::Zero)
        } else if scale < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Scaler { scale })
        }
    }

    /// Pixels per millimetre
    #[inline]
    pub fn factor(&self) -> f64 {
        self.scale
    }

    /// Convert a length in millimetres to raw f64 pixels.
    #[inline]
    pub fn px(&self, l: Millimeters) -> f64 {
        l.0 * self.scale
    }
}

impl Default for Scaler {
    fn default() -> Self {
        Scaler { scale: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millimeters_try_new_valid() {
        assert!(Millimeters::try_new(1.0).is_ok());
        assert!(Millimeters::try_new(0.0).is_ok());
        assert!(Millimeters::try_new(-1.0).is_ok());
    }

    #[test]
    fn millimeters_try_new_rejects_nan() {
        assert_eq!(Millimeters::try_new(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn millimeters_try_new_rejects_infinity() {
        assert_eq!(Millimeters::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(
            Millimeters::try_new(f64::NEG_INFINITY),
            Err(NumericError::Infinite)
        );
    }

    #[test]
    fn millimeters_arithmetic() {
        let a = Millimeters(3.0);
        let b = Millimeters(2.0);

        assert_eq!(a + b, Millimeters(5.0));
        assert_eq!(a - b, Millimeters(1.0));
        assert_eq!(a * 2.0, Millimeters(6.0));
        assert_eq!(a / 2.0, Millimeters(1.5));
        assert_eq!(-a, Millimeters(-3.0));
        assert_eq!(a.max(b), a);
    }

    #[test]
    fn scaler_try_new_rejects_degenerate() {
        assert_eq!(Scaler::try_new(0.0), Err(NumericError::Zero));
        assert_eq!(Scaler::try_new(-1.0), Err(NumericError::Negative));
        assert_eq!(Scaler::try_new(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Scaler::try_new(f64::INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn scaler_converts_to_px() {
        let scaler = Scaler::try_new(8.0).unwrap();
        assert_eq!(scaler.px(Millimeters(12.5)), 100.0);
        assert_eq!(scaler.factor(), 8.0);
    }
}

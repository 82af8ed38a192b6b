//! Mapping from lens millimetres onto the drawing canvas.

use glam::{DVec2, dvec2};

use super::metrics::semi_aperture;
use crate::log::debug;
use crate::params::{LensParameters, Side};
use crate::types::Scaler;

/// The optical axis sits this far below the canvas middle, leaving room for
/// the vertex dimension above the lens.
pub const AXIS_DROP: f64 = 40.0;

/// Share of the diameter the drawable width is fitted to
pub const WIDTH_FIT: f64 = 0.6;

/// Share of the diameter the drawable height is fitted to
pub const HEIGHT_FIT: f64 = 0.5;

/// Drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Margin kept free for dimensions on every side
    pub padding: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            padding: 100.0,
        }
    }
}

impl Canvas {
    /// Pixels per millimetre for a lens of the given diameter, or 1 when the
    /// fit is degenerate.
    pub fn fit_scale(&self, diameter: f64) -> Scaler {
        let by_width = (self.width - 2.0 * self.padding) / (diameter * WIDTH_FIT);
        let by_height = (self.height - 2.0 * self.padding) / (diameter * HEIGHT_FIT);
        match Scaler::try_new(by_width.min(by_height)) {
            Ok(scaler) => scaler,
            Err(_err) => {
                debug!(diameter, error = %_err, "degenerate scale, using 1");
                Scaler::default()
            }
        }
    }
}

/// Pixel positions shared by the outline and the dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub canvas: Canvas,
    pub scaler: Scaler,
    /// Where the optical axis crosses the lens midplane
    pub center: DVec2,
    /// Nominal x of surface 1 on the axis
    pub x1: f64,
    /// Nominal x of surface 2 on the axis
    pub x2: f64,
    /// Half the lens diameter in pixels
    pub half_aperture: f64,
}

impl Layout {
    pub fn new(params: &LensParameters, canvas: &Canvas) -> Self {
        let scaler = canvas.fit_scale(params.diameter.raw());
        let center = dvec2(canvas.width / 2.0, canvas.height / 2.0 + AXIS_DROP);
        let half_thickness = scaler.px(params.center_thickness) / 2.0;
        let (x1, x2) = if half_thickness.is_finite() {
            (center.x - half_thickness, center.x + half_thickness)
        } else {
            (center.x, center.x)
        };
        Self {
            canvas: *canvas,
            scaler,
            center,
            x1,
            x2,
            half_aperture: scaler.px(semi_aperture(params.diameter)),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scaler.factor()
    }

    pub fn surface_x(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.x1,
            Side::Right => self.x2,
        }
    }

    /// Upper rim of the lens
    pub fn top(&self) -> f64 {
        self.center.y - self.half_aperture
    }

    /// Lower rim of the lens
    pub fn bottom(&self) -> f64 {
        self.center.y + self.half_aperture
    }
}

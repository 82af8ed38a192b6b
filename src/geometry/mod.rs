//! Geometry engine: sagittas, edge thickness and the drawn lens outline.
//!
//! Everything here is a pure function of [`LensParameters`]. Degenerate
//! inputs (zero or negative diameter, tiny radii, non-finite values) are
//! clamped rather than reported, so every output is finite.

mod layout;
mod metrics;
mod surface;

pub use layout::{AXIS_DROP, Canvas, Layout};
pub use metrics::{
    LensMetrics, MIN_EDGE_THICKNESS, MIN_RADIUS, RADIUS_CLEARANCE, compute_metrics, effective_radius, sagitta,
    sagitta_magnitude, semi_aperture,
};
pub use surface::{
    ArcSegment, LineSegment, MAX_ARC_RADIUS, SurfaceGeometry, SurfacePath, SurfaceShape, bulge_direction,
};

use glam::DVec2;

use crate::params::{LensParameters, Side};
use crate::types::Millimeters as Mm;

/// Everything needed to draw a lens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensGeometry {
    pub surface1: SurfaceGeometry,
    pub surface2: SurfaceGeometry,
    pub metrics: LensMetrics,
    pub layout: Layout,
}

impl LensGeometry {
    pub fn surface(&self, side: Side) -> &SurfaceGeometry {
        match side {
            Side::Left => &self.surface1,
            Side::Right => &self.surface2,
        }
    }

    pub fn vertex1(&self) -> DVec2 {
        self.surface1.vertex
    }

    pub fn vertex2(&self) -> DVec2 {
        self.surface2.vertex
    }

    pub fn edge_thickness(&self) -> Mm {
        self.metrics.edge_thickness
    }

    pub fn sagitta1(&self) -> Mm {
        self.metrics.sagitta1
    }

    pub fn sagitta2(&self) -> Mm {
        self.metrics.sagitta2
    }

    /// Pixels per millimetre used for this drawing
    pub fn scale(&self) -> f64 {
        self.layout.scale()
    }

    /// Closed outline: `M {surface1} L {surface2} Z`
    pub fn outline_path(&self) -> String {
        format!(
            "M {} L {} Z",
            self.surface1.path.path_fragment(),
            self.surface2.path.path_fragment()
        )
    }
}

/// Lay out both surfaces of `params` on `canvas`.
pub fn compute_surface_geometry(params: &LensParameters, canvas: &Canvas) -> LensGeometry {
    let metrics = compute_metrics(params);
    let layout = Layout::new(params, canvas);
    LensGeometry {
        surface1: SurfaceGeometry::new(params, &metrics, &layout, Side::Left),
        surface2: SurfaceGeometry::new(params, &metrics, &layout, Side::Right),
        metrics,
        layout,
    }
}

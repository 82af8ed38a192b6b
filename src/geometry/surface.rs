//! Drawn shapes of the two lens surfaces.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use super::layout::Layout;
use super::metrics::{LensMetrics, effective_radius, semi_aperture};
use crate::format::fmt_num;
use crate::params::{LensParameters, Side, SurfaceType};

/// Curved surfaces with a larger drawn radius (in pixels) are drawn as
/// straight lines
pub const MAX_ARC_RADIUS: f64 = 1e6;

/// Common behaviour of a surface outline segment
#[enum_dispatch]
pub trait SurfaceShape {
    /// Point where the segment begins
    fn start(&self) -> DVec2;

    /// Point where the segment ends
    fn end(&self) -> DVec2;

    /// Path fragment without the leading command, e.g. `184,90 L 184,290`
    fn path_fragment(&self) -> String;
}

/// Straight surface (PLANO)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: DVec2,
    pub end: DVec2,
}

impl SurfaceShape for LineSegment {
    fn start(&self) -> DVec2 {
        self.start
    }

    fn end(&self) -> DVec2 {
        self.end
    }

    fn path_fragment(&self) -> String {
        format!("{} L {}", fmt_point(self.start), fmt_point(self.end))
    }
}

/// Circular surface (CX or CV)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    /// Drawn radius in pixels
    pub radius: f64,
    pub start: DVec2,
    pub end: DVec2,
    /// SVG sweep flag
    pub sweep: bool,
}

impl SurfaceShape for ArcSegment {
    fn start(&self) -> DVec2 {
        self.start
    }

    fn end(&self) -> DVec2 {
        self.end
    }

    fn path_fragment(&self) -> String {
        let r = fmt_num(self.radius);
        format!(
            "{} A {r},{r} 0 0 {} {}",
            fmt_point(self.start),
            u8::from(self.sweep),
            fmt_point(self.end)
        )
    }
}

#[enum_dispatch(SurfaceShape)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfacePath {
    Line(LineSegment),
    Arc(ArcSegment),
}

/// One surface as drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    pub side: Side,
    pub kind: SurfaceType,
    /// Intersection of the surface with the optical axis
    pub vertex: DVec2,
    pub path: SurfacePath,
}

impl SurfaceGeometry {
    pub(super) fn new(params: &LensParameters, metrics: &LensMetrics, layout: &Layout, side: Side) -> Self {
        let surface = params.surface(side);
        let x = layout.surface_x(side);
        let (top, bottom) = (dvec2(x, layout.top()), dvec2(x, layout.bottom()));
        // Surface 1 is traced downwards, surface 2 back up
        let (start, end) = if side.is_left() { (top, bottom) } else { (bottom, top) };

        if surface.kind.is_plano() {
            return Self {
                side,
                kind: surface.kind,
                vertex: dvec2(x, layout.center.y),
                path: LineSegment { start, end }.into(),
            };
        }

        let direction = bulge_direction(surface.kind, side);
        let offset = metrics.sagitta(side).abs().raw() * layout.scale() * direction;
        let vertex_x = x + offset;
        let vertex_x = if vertex_x.is_finite() { vertex_x } else { x };

        let radius = layout
            .scaler
            .px(effective_radius(surface.radius, semi_aperture(params.diameter)));
        let sweep = if side.is_left() { direction > 0.0 } else { direction < 0.0 };

        let path = if radius.is_finite() && radius <= MAX_ARC_RADIUS {
            ArcSegment {
                radius,
                start,
                end,
                sweep,
            }
            .into()
        } else {
            crate::log::debug!(side = ?side, radius, "arc too flat to draw, using a line");
            LineSegment { start, end }.into()
        };

        Self {
            side,
            kind: surface.kind,
            vertex: dvec2(vertex_x, layout.center.y),
            path,
        }
    }
}

/// Which way along x the vertex sits relative to the nominal surface position
pub fn bulge_direction(kind: SurfaceType, side: Side) -> f64 {
    match (kind, side) {
        (SurfaceType::Convex, Side::Left) | (SurfaceType::Concave, Side::Right) => 1.0,
        (SurfaceType::Convex, Side::Right) | (SurfaceType::Concave, Side::Left) => -1.0,
        (SurfaceType::Plano, _) => 0.0,
    }
}

fn fmt_point(p: DVec2) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_fragment() {
        let line: SurfacePath = LineSegment {
            start: dvec2(184.0, 90.0),
            end: dvec2(184.0, 290.0),
        }
        .into();
        insta::assert_snapshot!(line.path_fragment(), @"184,90 L 184,290");
    }

    #[test]
    fn arc_fragment() {
        let arc: SurfacePath = ArcSegment {
            radius: 400.0,
            start: dvec2(216.0, 290.0),
            end: dvec2(216.0, 90.0),
            sweep: false,
        }
        .into();
        insta::assert_snapshot!(arc.path_fragment(), @"216,290 A 400,400 0 0 0 216,90");
        assert_eq!(arc.start(), dvec2(216.0, 290.0));
        assert_eq!(arc.end(), dvec2(216.0, 90.0));
    }

    #[test]
    fn directions_by_type_and_side() {
        assert_eq!(bulge_direction(SurfaceType::Convex, Side::Left), 1.0);
        assert_eq!(bulge_direction(SurfaceType::Convex, Side::Right), -1.0);
        assert_eq!(bulge_direction(SurfaceType::Concave, Side::Left), -1.0);
        assert_eq!(bulge_direction(SurfaceType::Concave, Side::Right), 1.0);
    }
}

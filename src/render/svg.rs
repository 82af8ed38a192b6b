//! SVG document construction for a lens drawing.

use facet_svg::facet_xml::{self, SerializeOptions};
use facet_svg::{Circle, Defs, Group, Line, Marker, Path, Rect, Svg, SvgNode, Text};
use glam::{DVec2, dvec2};

use super::defaults;
use super::{Palette, RenderOptions};
use crate::errors::RenderError;
use crate::format::fmt_num;
use crate::geometry::{Layout, LensGeometry};
use crate::params::LensParameters;

/// Build the drawing for already computed `geometry` and serialize it.
pub fn generate_svg(
    params: &LensParameters,
    geometry: &LensGeometry,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let palette = options.theme.palette();
    let layout = &geometry.layout;
    let canvas = &layout.canvas;

    let mut svg = Svg::with_view_box(canvas.width, canvas.height);

    svg.children.push(SvgNode::Rect(Rect {
        x: Some(0.0),
        y: Some(0.0),
        width: Some(canvas.width),
        height: Some(canvas.height),
        fill: Some(palette.background.to_string()),
    }));
    svg.children.push(arrow_defs(&palette));
    svg.children.push(group("axes", axes(layout, &palette)));
    svg.children.push(group("lens", lens(geometry, &palette)));

    let mut dimensions = vertex_dimension(params, geometry, &palette);
    dimensions.extend(diameter_dimension(params, layout, &palette));
    svg.children.push(group("dimensions", dimensions));

    crate::log::debug!(nodes = svg.children.len(), "svg document built");

    fn format_float(value: f64, writer: &mut dyn std::io::Write) -> Result<(), std::io::Error> {
        write!(writer, "{}", fmt_num(value))
    }

    let options_ser = SerializeOptions {
        float_formatter: Some(format_float),
        ..Default::default()
    };
    facet_xml::to_string_with_options(&svg, &options_ser).map_err(|e| RenderError::Serialize {
        message: e.to_string(),
    })
}

fn group(class: &str, children: Vec<SvgNode>) -> SvgNode {
    SvgNode::G(Group {
        id: None,
        class: Some(class.to_string()),
        children,
    })
}

/// Arrowhead marker shared by both dimension lines
fn arrow_defs(palette: &Palette) -> SvgNode {
    SvgNode::Defs(Defs {
        children: vec![SvgNode::Marker(Marker {
            id: Some(defaults::ARROW_MARKER_ID.to_string()),
            view_box: Some(defaults::ARROW_VIEW_BOX.to_string()),
            ref_x: Some(5.0),
            ref_y: Some(5.0),
            marker_width: Some(defaults::ARROW_SIZE),
            marker_height: Some(defaults::ARROW_SIZE),
            orient: Some("auto-start-reverse".to_string()),
            children: vec![SvgNode::Path(Path {
                d: Some(defaults::ARROW_PATH.to_string()),
                fill: Some(palette.stroke.to_string()),
                stroke: None,
                stroke_width: None,
            })],
        })],
    })
}

/// Dashed optical axis and vertical centre line
fn axes(layout: &Layout, palette: &Palette) -> Vec<SvgNode> {
    let canvas = &layout.canvas;
    let cy = layout.center.y;
    let dashed = |from: DVec2, to: DVec2| LineStyle {
        stroke: palette.grid,
        dash: Some(defaults::AXIS_DASH),
        arrows: false,
    }
    .line(from, to);

    vec![
        dashed(
            dvec2(layout.x1 - canvas.padding, cy),
            dvec2(layout.x2 + canvas.padding, cy),
        ),
        dashed(
            dvec2(layout.center.x, canvas.padding),
            dvec2(layout.center.x, canvas.height - canvas.padding),
        ),
    ]
}

/// Closed outline and the two vertex dots
fn lens(geometry: &LensGeometry, palette: &Palette) -> Vec<SvgNode> {
    let mut nodes = vec![SvgNode::Path(Path {
        d: Some(geometry.outline_path()),
        fill: Some("none".to_string()),
        stroke: Some(palette.stroke.to_string()),
        stroke_width: Some(fmt_num(defaults::STROKE_WIDTH)),
    })];
    for vertex in [geometry.vertex1(), geometry.vertex2()] {
        nodes.push(SvgNode::Circle(Circle {
            cx: Some(vertex.x),
            cy: Some(vertex.y),
            r: Some(defaults::VERTEX_DOT_RADIUS),
            fill: Some(palette.stroke.to_string()),
        }));
    }
    nodes
}

/// Vertex-to-vertex dimension above the lens, labelled with the centre thickness
fn vertex_dimension(params: &LensParameters, geometry: &LensGeometry, palette: &Palette) -> Vec<SvgNode> {
    let dimension_y = geometry.layout.top() - defaults::VERTEX_DIMENSION_OFFSET;
    let (v1, v2) = (geometry.vertex1(), geometry.vertex2());
    let extension = LineStyle {
        stroke: palette.stroke,
        dash: Some(defaults::EXTENSION_DASH),
        arrows: false,
    };
    let dimension = LineStyle {
        stroke: palette.stroke,
        dash: None,
        arrows: true,
    };

    vec![
        extension.line(v1, dvec2(v1.x, dimension_y)),
        extension.line(v2, dvec2(v2.x, dimension_y)),
        dimension.line(dvec2(v1.x, dimension_y), dvec2(v2.x, dimension_y)),
        label(
            dvec2(geometry.layout.center.x, dimension_y - defaults::LABEL_GAP),
            "middle",
            fmt_num(params.center_thickness.raw()),
            palette,
        ),
    ]
}

/// Rim-to-rim dimension right of the lens, labelled `∅{diameter}`
fn diameter_dimension(params: &LensParameters, layout: &Layout, palette: &Palette) -> Vec<SvgNode> {
    let padding = layout.canvas.padding;
    let (top, bottom) = (layout.top(), layout.bottom());
    let dimension_x = layout.x2 + padding;
    let extension_x = dimension_x + defaults::EXTENSION_OVERSHOOT;
    let extension = LineStyle {
        stroke: palette.stroke,
        dash: None,
        arrows: false,
    };
    let dimension = LineStyle {
        arrows: true,
        ..extension
    };

    vec![
        extension.line(dvec2(layout.x2, top), dvec2(extension_x, top)),
        extension.line(dvec2(layout.x2, bottom), dvec2(extension_x, bottom)),
        dimension.line(dvec2(dimension_x, top), dvec2(dimension_x, bottom)),
        label(
            dvec2(dimension_x + defaults::LABEL_GAP, layout.center.y),
            "start",
            format!("∅{}", fmt_num(params.diameter.raw())),
            palette,
        ),
    ]
}

#[derive(Clone, Copy)]
struct LineStyle<'a> {
    stroke: &'a str,
    dash: Option<&'a str>,
    /// Arrowheads at both ends
    arrows: bool,
}

impl LineStyle<'_> {
    fn line(&self, from: DVec2, to: DVec2) -> SvgNode {
        let marker = self
            .arrows
            .then(|| format!("url(#{})", defaults::ARROW_MARKER_ID));
        SvgNode::Line(Line {
            x1: Some(from.x),
            y1: Some(from.y),
            x2: Some(to.x),
            y2: Some(to.y),
            stroke: Some(self.stroke.to_string()),
            stroke_width: Some(fmt_num(defaults::STROKE_WIDTH)),
            stroke_dasharray: self.dash.map(str::to_string),
            marker_start: marker.clone(),
            marker_end: marker,
        })
    }
}

fn label(at: DVec2, anchor: &str, content: String, palette: &Palette) -> SvgNode {
    SvgNode::Text(Text {
        x: Some(at.x),
        y: Some(at.y),
        fill: Some(palette.stroke.to_string()),
        font_size: Some(fmt_num(defaults::FONT_SIZE)),
        text_anchor: Some(anchor.to_string()),
        dominant_baseline: Some("central".to_string()),
        content,
    })
}

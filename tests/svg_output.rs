//! Checks on the rendered SVG text.
//!
//! Run with `RUST_LOG=lensdraw=debug cargo test --features tracing -- --nocapture`
//! to see the engine's debug output.

use facet_svg::{Svg, SvgNode, facet_xml};
use lensdraw::{
    Canvas, Field, LensParameters, RenderOptions, Side, Theme, compute_surface_geometry, render_svg,
};
use regex_lite::Regex;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn render(params: &LensParameters, theme: Theme) -> String {
    init_tracing();
    render_svg(params, &RenderOptions::with_theme(theme)).expect("render should succeed")
}

/// Values of `attr` on every `<tag ...>` element
fn attr_values(svg: &str, tag: &str, attr: &str) -> Vec<String> {
    let element = Regex::new(&format!(r"<{tag}\b[^>]*>")).unwrap();
    let value = Regex::new(&format!(r#"\s{attr}="([^"]*)""#)).unwrap();
    element
        .find_iter(svg)
        .filter_map(|m| value.captures(m.as_str()).map(|c| c[1].to_string()))
        .collect()
}

#[test]
fn outline_path_matches_geometry() {
    let params = LensParameters::default();
    let svg = render(&params, Theme::Light);
    let geometry = compute_surface_geometry(&params, &Canvas::default());

    let paths = attr_values(&svg, "path", "d");
    assert!(
        paths.contains(&geometry.outline_path()),
        "outline missing from {paths:?}"
    );
    assert!(paths.iter().any(|d| d == "M 0 0 L 10 5 L 0 10 z"), "arrow marker missing");
}

#[test]
fn view_box_follows_canvas() {
    let svg = render(&LensParameters::default(), Theme::Light);
    assert!(svg.contains(r#"viewBox="0 0 400 300""#), "{svg}");
}

#[test]
fn two_vertex_dots() {
    let svg = render(&LensParameters::default(), Theme::Light);
    let radii = attr_values(&svg, "circle", "r");
    assert_eq!(radii, ["3", "3"]);
    let ys = attr_values(&svg, "circle", "cy");
    assert_eq!(ys, ["190", "190"]);
}

#[test]
fn dimension_lines_carry_arrowheads() {
    let svg = render(&LensParameters::default(), Theme::Light);
    let starts = attr_values(&svg, "line", "marker-start");
    assert_eq!(starts.len(), 2);
    assert!(starts.iter().all(|m| m == "url(#arrow)"));

    let dashes = attr_values(&svg, "line", "stroke-dasharray");
    assert_eq!(dashes.iter().filter(|d| *d == "4,4").count(), 2);
    assert_eq!(dashes.iter().filter(|d| *d == "2,2").count(), 2);
}

#[test]
fn labels_show_thickness_and_diameter() {
    let params = LensParameters::default().adjust(Field::Diameter, 30.0);
    let svg = render(&params, Theme::Light);
    assert!(svg.contains(">∅30<"), "{svg}");
    assert!(svg.contains(">4<"), "{svg}");
}

#[test]
fn dark_theme_palette() {
    let svg = render(&LensParameters::default(), Theme::Dark);
    assert!(svg.contains("#111827"));
    assert!(svg.contains("#ffffff"));
    assert!(svg.contains("#4b5563"));
    assert!(!svg.contains("#f7f6f2"));
    assert!(!svg.contains("#000000"));

    let light = render(&LensParameters::default(), Theme::Light);
    assert!(light.contains("#f7f6f2"));
    assert!(!light.contains("#ffffff"));
}

#[test]
fn degenerate_lens_renders_without_nan() {
    let params = LensParameters::default()
        .adjust(Field::Diameter, 0.0)
        .adjust(Field::CenterThickness, 0.0)
        .adjust(Field::Radius(Side::Left), 0.01);
    let svg = render(&params, Theme::Light);
    assert!(!svg.contains("NaN"));
    assert!(!svg.contains("inf"));
}

#[test]
fn document_parses_back() {
    let svg = render(&LensParameters::default(), Theme::Light);
    let doc: Svg = facet_xml::from_str(&svg).expect("rendered SVG should parse");
    assert_eq!(doc.children.len(), 5);
    let classes: Vec<_> = doc
        .children
        .iter()
        .filter_map(|node| match node {
            SvgNode::G(g) => g.class.clone(),
            _ => None,
        })
        .collect();
    assert_eq!(classes, ["axes", "lens", "dimensions"]);
}

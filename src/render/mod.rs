//! SVG rendering of a lens cross-section.

pub mod defaults;
mod svg;

pub use svg::generate_svg;

use crate::errors::RenderError;
use crate::geometry::{Canvas, compute_surface_geometry};
use crate::params::LensParameters;

/// Colour scheme of the drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colours used by one [`Theme`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    /// Lens outline, dimensions and labels
    pub stroke: &'static str,
    /// Optical axis and centre line
    pub grid: &'static str,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "#f7f6f2",
                stroke: "#000000",
                grid: "#e5e7eb",
            },
            Theme::Dark => Palette {
                background: "#111827",
                stroke: "#ffffff",
                grid: "#4b5563",
            },
        }
    }
}

/// Options for SVG rendering
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderOptions {
    pub canvas: Canvas,
    pub theme: Theme,
}

impl RenderOptions {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Draw `params` as an SVG document.
pub fn render_svg(params: &LensParameters, options: &RenderOptions) -> Result<String, RenderError> {
    let geometry = compute_surface_geometry(params, &options.canvas);
    crate::log::debug!(
        scale = geometry.scale(),
        edge = geometry.edge_thickness().raw(),
        "rendering lens"
    );
    generate_svg(params, &geometry, options)
}

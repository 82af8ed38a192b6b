//! Cross-section drawings of single lenses in the ISO 10110 style.
//!
//! The crate is a pure engine under a drawing editor. A [`LensParameters`]
//! value holds the whole lens description; edits from the presentation layer
//! go through [`adjust()`] (typed values) and [`step()`] (scroll-wheel style
//! increments) and produce a new, consistent value. The geometry engine
//! turns parameters into sagittas, edge thickness and a drawable outline,
//! and [`render_svg`] draws it.
//!
//! ```rust
//! use lensdraw::{Field, LensParameters, RenderOptions, Side, render_svg};
//!
//! let params = LensParameters::default()
//!     .adjust(Field::Diameter, 30.0)
//!     .adjust(Field::Type(Side::Right), "CX");
//! assert_eq!(params.left.effective_diameter.raw(), 29.0);
//!
//! let svg = render_svg(&params, &RenderOptions::default()).unwrap();
//! assert!(svg.contains("<path"));
//! ```

pub mod adjust;
pub mod catalog;
pub mod errors;
pub mod field;
pub mod format;
pub mod geometry;
pub mod log;
pub mod params;
pub mod render;
pub mod sheet;
pub mod types;

pub use adjust::{adjust, adjust_key, step};
pub use catalog::{GlassCatalog, GlassType};
pub use errors::{CatalogError, FieldError, RenderError};
pub use field::{Field, FieldKind, RawValue};
pub use format::{format_mm, format_radius};
pub use geometry::{
    Canvas, LensGeometry, LensMetrics, SurfacePath, SurfaceShape, compute_metrics, compute_surface_geometry,
};
pub use params::{DiameterMode, LensParameters, Material, Side, Surface, SurfaceType};
pub use render::{RenderOptions, Theme, render_svg};
pub use sheet::ParameterSheet;
pub use types::Millimeters;

//! Error types with diagnostics using miette
//!
//! The adjuster and geometry engine never fail. These errors only surface
//! at the crate boundary: parsing field keys and surface types coming from a
//! presentation layer, loading a glass catalog, and serializing SVG.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Field Errors
// ============================================================================

/// Errors from turning presentation-layer strings into typed edits
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown field: {key}")]
    #[diagnostic(
        code(lensdraw::field::unknown_field),
        help("field keys look like `diameter`, `radius1`, `type2` or `leftChamfer`")
    )]
    UnknownField { key: String },

    #[error("unknown surface type: {value}")]
    #[diagnostic(
        code(lensdraw::field::unknown_surface_type),
        help("expected one of CX, CV or PLANO")
    )]
    UnknownSurfaceType { value: String },
}

// ============================================================================
// Catalog Errors
// ============================================================================

/// Errors that occur while loading a glass catalog
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("glass catalog is empty")]
    #[diagnostic(
        code(lensdraw::catalog::empty),
        help("the first line is a header; glass names start on the second line")
    )]
    Empty,

    #[error("glass catalog has no name entries")]
    #[diagnostic(code(lensdraw::catalog::no_names))]
    NoNames,
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while producing SVG output
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("XML serialization error: {message}")]
    #[diagnostic(code(lensdraw::render::serialize))]
    Serialize { message: String },
}

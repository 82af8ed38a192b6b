//! Default sizes and settings for the lens drawing (all in pixels)

/// Outline and dimension stroke width
pub const STROKE_WIDTH: f64 = 1.0;
/// Radius of the dots marking the surface vertices
pub const VERTEX_DOT_RADIUS: f64 = 3.0;
/// Gap between the lens rim and the vertex dimension line
pub const VERTEX_DIMENSION_OFFSET: f64 = 40.0;
/// Overshoot of extension lines past the dimension line
pub const EXTENSION_OVERSHOOT: f64 = 3.0;
/// Distance of a label from its dimension line
pub const LABEL_GAP: f64 = 8.0;
pub const FONT_SIZE: f64 = 12.0;

/// Dash pattern of the optical axis and centre line
pub const AXIS_DASH: &str = "4,4";
/// Dash pattern of vertex extension lines
pub const EXTENSION_DASH: &str = "2,2";

pub const ARROW_MARKER_ID: &str = "arrow";
pub const ARROW_VIEW_BOX: &str = "0 0 10 10";
pub const ARROW_PATH: &str = "M 0 0 L 10 5 L 0 10 z";
pub const ARROW_SIZE: f64 = 4.0;

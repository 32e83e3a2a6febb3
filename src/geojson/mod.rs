pub mod features;
pub mod geometry;

pub use features::{collection_to_json, read_fields};
pub use geometry::{geometry_to_json, parse_geometry};

use thiserror::Error;

/// Failures when crossing the GeoJSON boundary. Geometry math itself never
/// errors; only parsing foreign input does.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(String),

    #[error("geometry has no coordinates")]
    EmptyGeometry,

    #[error("position must have at least two coordinates")]
    ShortPosition,
}

use serde::Deserialize;
use serde_json::{Value, json};

use super::GeoJsonError;
use crate::geometry::normalize_ring;

/// Geometry object with the type tag still a plain string, so unsupported
/// types produce a readable error instead of a serde variant mismatch.
#[derive(Debug, Deserialize)]
pub(crate) struct RawGeometry {
    #[serde(rename = "type")]
    pub type_: String,
    pub coordinates: Value,
}

/// Parse a bare GeoJSON geometry into a closed (lat, lon) ring.
///
/// Accepts `Polygon` and `MultiPolygon`; only the outer ring of the first
/// polygon is taken, holes and further polygons are ignored. GeoJSON axis
/// order is (lon, lat), so positions are swapped into the (lat, lon)
/// convention the geometry module uses. Extra position members (altitude)
/// are dropped.
pub fn parse_geometry(input: &str) -> Result<Vec<(f64, f64)>, GeoJsonError> {
    let raw: RawGeometry = serde_json::from_str(input)?;
    outer_ring(&raw)
}

pub(crate) fn outer_ring(raw: &RawGeometry) -> Result<Vec<(f64, f64)>, GeoJsonError> {
    let positions: Vec<Vec<f64>> = match raw.type_.as_str() {
        "Polygon" => {
            let rings: Vec<Vec<Vec<f64>>> = serde_json::from_value(raw.coordinates.clone())?;
            rings
                .into_iter()
                .next()
                .ok_or(GeoJsonError::EmptyGeometry)?
        }
        "MultiPolygon" => {
            let polygons: Vec<Vec<Vec<Vec<f64>>>> =
                serde_json::from_value(raw.coordinates.clone())?;
            polygons
                .into_iter()
                .next()
                .and_then(|rings| rings.into_iter().next())
                .ok_or(GeoJsonError::EmptyGeometry)?
        }
        other => return Err(GeoJsonError::UnsupportedGeometry(other.to_string())),
    };

    if positions.is_empty() {
        return Err(GeoJsonError::EmptyGeometry);
    }

    let mut ring = Vec::with_capacity(positions.len());
    for position in &positions {
        if position.len() < 2 {
            return Err(GeoJsonError::ShortPosition);
        }
        // (lon, lat) -> (lat, lon)
        ring.push((position[1], position[0]));
    }

    Ok(normalize_ring(&ring))
}

/// Serialize a (lat, lon) ring back to a GeoJSON `Polygon` geometry string,
/// closing the ring and swapping back to (lon, lat) on the way out.
pub fn geometry_to_json(ring: &[(f64, f64)]) -> String {
    let closed = normalize_ring(ring);
    geometry_value(&closed).to_string()
}

pub(crate) fn geometry_value(closed_ring: &[(f64, f64)]) -> Value {
    let positions: Vec<[f64; 2]> = closed_ring.iter().map(|&(lat, lon)| [lon, lat]).collect();
    json!({
        "type": "Polygon",
        "coordinates": [positions],
    })
}

use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::GeoJsonError;
use super::geometry::{RawGeometry, geometry_value, outer_ring};
use crate::domain::FieldPolygon;

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    geometry: RawGeometry,
}

#[derive(Debug, Deserialize)]
struct RawFeatureCollection {
    features: Vec<RawFeature>,
}

/// Read field polygons from a GeoJSON document.
///
/// Accepts a FeatureCollection, a single Feature, or a bare geometry.
/// Feature properties supply the field metadata (`id`, `name`, `crop`,
/// `comment`, `color`); anything missing gets the same fallbacks the
/// stored-field loader uses.
pub fn read_fields(input: &str) -> Result<Vec<FieldPolygon>, GeoJsonError> {
    let value: Value = serde_json::from_str(input)?;
    let type_ = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    match type_.as_str() {
        "FeatureCollection" => {
            let collection: RawFeatureCollection = serde_json::from_value(value)?;
            collection
                .features
                .into_iter()
                .enumerate()
                .map(|(index, feature)| field_from_feature(feature, index))
                .collect()
        }
        "Feature" => {
            let feature: RawFeature = serde_json::from_value(value)?;
            Ok(vec![field_from_feature(feature, 0)?])
        }
        _ => {
            let raw: RawGeometry = serde_json::from_value(value)?;
            let ring = outer_ring(&raw)?;
            Ok(vec![FieldPolygon::new("field-1", "Field 1", ring)])
        }
    }
}

fn field_from_feature(feature: RawFeature, index: usize) -> Result<FieldPolygon, GeoJsonError> {
    let ring = outer_ring(&feature.geometry)?;
    let properties = feature.properties.unwrap_or_default();

    let id = match properties.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => format!("field-{}", index + 1),
    };
    let name = property_string(&properties, "name")
        .unwrap_or_else(|| format!("Field {}", index + 1));

    Ok(FieldPolygon::new(id, name, ring)
        .with_crop(property_string(&properties, "crop"))
        .with_comment(property_string(&properties, "comment"))
        .with_color(property_string(&properties, "color")))
}

fn property_string(properties: &Map<String, Value>, key: &str) -> Option<String> {
    properties
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Serialize fields back out as a GeoJSON FeatureCollection, metadata in
/// properties and rings as closed (lon, lat) Polygon geometries.
pub fn collection_to_json(fields: &[FieldPolygon]) -> String {
    let features: Vec<Value> = fields
        .iter()
        .map(|field| {
            json!({
                "type": "Feature",
                "properties": {
                    "id": field.id,
                    "name": field.name,
                    "crop": field.crop,
                    "comment": field.comment,
                    "color": field.color,
                },
                "geometry": geometry_value(&field.ring),
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
    .to_string()
}

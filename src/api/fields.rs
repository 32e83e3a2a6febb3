use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::domain::FieldPolygon;
use crate::geojson;

const USER_AGENT: &str = "fieldarea/0.1.0 (https://github.com/fieldarea/fieldarea)";
const TIMEOUT_SECS: u64 = 30;
const MAX_RETRIES: u32 = 3;

/// One stored field row as the persistence API returns it. The geometry
/// arrives as a stringified GeoJSON Polygon in `geoJson`.
#[derive(Debug, Deserialize)]
pub struct StoredField {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(rename = "geoJson")]
    pub geo_json: String,
}

/// Fetch the caller's stored fields from the persistence API.
///
/// Calls `GET {base_url}/api/polygons/my` with a bearer token. Rows whose
/// geometry fails to parse are skipped with a warning rather than failing
/// the whole fetch, matching how the field UI tolerates bad stored rows.
/// Retries on 429 and gateway errors with a linear backoff.
pub fn fetch_fields(base_url: &str, token: &str) -> Result<Vec<FieldPolygon>> {
    let url = format!("{}/api/polygons/my", base_url.trim_end_matches('/'));

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()
        .context("Failed to create HTTP client")?;

    let mut last_error = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            let wait_secs = 5 * attempt as u64;
            eprintln!(
                "Field API busy, retrying in {} seconds (attempt {}/{})",
                wait_secs,
                attempt + 1,
                MAX_RETRIES
            );
            std::thread::sleep(Duration::from_secs(wait_secs));
        }

        let response = client
            .get(&url)
            .bearer_auth(token)
            .send()
            .context("Failed to send request to field API")?;

        match response.status().as_u16() {
            200 => {
                let rows: Vec<StoredField> = response
                    .json()
                    .context("Failed to parse field API JSON response")?;
                return Ok(fields_from_rows(rows));
            }
            401 | 403 => {
                bail!("Field API rejected the token (status {})", response.status());
            }
            429 | 502 | 503 | 504 => {
                last_error = Some(format!(
                    "Field API returned status {} (attempt {})",
                    response.status(),
                    attempt + 1
                ));
                continue;
            }
            status => {
                bail!("Field API returned error status: {}", status);
            }
        }
    }

    bail!(
        "Field API failed after {} retries: {}",
        MAX_RETRIES,
        last_error.unwrap_or_else(|| "Unknown error".to_string())
    )
}

/// Convert stored rows to domain fields, dropping rows with bad geometry.
pub fn fields_from_rows(rows: Vec<StoredField>) -> Vec<FieldPolygon> {
    let mut fields = Vec::with_capacity(rows.len());

    for (index, row) in rows.into_iter().enumerate() {
        let id = row
            .id
            .as_ref()
            .map(id_string)
            .unwrap_or_else(|| format!("field-{}", index + 1));

        let ring = match geojson::parse_geometry(&row.geo_json) {
            Ok(ring) => ring,
            Err(e) => {
                eprintln!("Warning: skipping field {}: {}", id, e);
                continue;
            }
        };

        let name = row.name.unwrap_or_else(|| format!("Field {}", index + 1));
        fields.push(
            FieldPolygon::new(id, name, ring)
                .with_crop(row.crop)
                .with_comment(row.comment)
                .with_color(row.color),
        );
    }

    fields
}

fn id_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored_rows() {
        let json = r##"[
            {
                "id": 12,
                "name": "North field",
                "crop": "wheat",
                "comment": null,
                "color": "#00aa00",
                "geoJson": "{\"type\":\"Polygon\",\"coordinates\":[[[76.92,43.25],[76.92,43.26],[76.93,43.26],[76.92,43.25]]]}"
            },
            {
                "geoJson": "{\"type\":\"Polygon\",\"coordinates\":[[[0.0,0.0],[0.001,0.0],[0.001,0.001]]]}"
            }
        ]"##;

        let rows: Vec<StoredField> = serde_json::from_str(json).unwrap();
        let fields = fields_from_rows(rows);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].id, "12");
        assert_eq!(fields[0].name, "North field");
        assert_eq!(fields[0].crop.as_deref(), Some("wheat"));
        assert_eq!(fields[0].color, "#00aa00");
        // Stored (lon, lat) order arrives swapped into (lat, lon)
        assert_eq!(fields[0].ring[0], (43.25, 76.92));

        assert_eq!(fields[1].id, "field-2");
        assert_eq!(fields[1].name, "Field 2");
    }

    #[test]
    fn test_bad_geometry_rows_are_skipped() {
        let json = r#"[
            {"id": 1, "geoJson": "{\"type\":\"Point\",\"coordinates\":[1.0,2.0]}"},
            {"id": 2, "geoJson": "not json at all"},
            {"id": 3, "geoJson": "{\"type\":\"Polygon\",\"coordinates\":[[[0.0,0.0],[0.001,0.0],[0.001,0.001]]]}"}
        ]"#;

        let rows: Vec<StoredField> = serde_json::from_str(json).unwrap();
        let fields = fields_from_rows(rows);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].id, "3");
    }
}

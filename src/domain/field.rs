use crate::geometry::{normalize_ring, ring_area_m2, ring_centroid};

/// Fill color used when a stored field carries none.
pub const DEFAULT_COLOR: &str = "#3388ff";

/// A field polygon: one outer boundary ring plus display metadata.
///
/// The ring is (lat, lon) degree pairs and is closed on construction, so
/// every downstream consumer sees `ring[0] == ring[last]` without having to
/// re-normalize.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPolygon {
    pub id: String,
    pub name: String,
    pub crop: Option<String>,
    pub comment: Option<String>,
    pub color: String,
    pub ring: Vec<(f64, f64)>,
}

impl FieldPolygon {
    pub fn new(id: impl Into<String>, name: impl Into<String>, ring: Vec<(f64, f64)>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            crop: None,
            comment: None,
            color: DEFAULT_COLOR.to_string(),
            ring: normalize_ring(&ring),
        }
    }

    pub fn with_crop(mut self, crop: Option<String>) -> Self {
        self.crop = crop;
        self
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// `None` keeps the default color.
    pub fn with_color(mut self, color: Option<String>) -> Self {
        if let Some(color) = color {
            self.color = color;
        }
        self
    }

    /// At least 3 distinct vertices plus the closing duplicate.
    pub fn is_valid(&self) -> bool {
        self.ring.len() >= 4
    }

    pub fn area_m2(&self) -> f64 {
        ring_area_m2(&self.ring)
    }

    /// Where to place the field's map marker.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        ring_centroid(&self.ring)
    }
}

use super::ring::is_closed;

/// A usable map vertex: finite and inside WGS84 bounds.
fn is_valid_vertex(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// Marker-placement centroid: the arithmetic mean of a ring's valid
/// vertices, as (lat, lon).
///
/// The closing duplicate is skipped so it does not double-weight the first
/// vertex. Non-finite or out-of-range vertices are filtered out rather than
/// poisoning the mean; `None` when nothing valid remains.
pub fn ring_centroid(ring: &[(f64, f64)]) -> Option<(f64, f64)> {
    let vertices = if is_closed(ring) {
        &ring[..ring.len() - 1]
    } else {
        ring
    };

    let mut count = 0usize;
    let mut lat_sum = 0.0;
    let mut lon_sum = 0.0;

    for &(lat, lon) in vertices {
        if is_valid_vertex(lat, lon) {
            count += 1;
            lat_sum += lat;
            lon_sum += lon;
        }
    }

    if count == 0 {
        return None;
    }

    Some((lat_sum / count as f64, lon_sum / count as f64))
}

use geo::{LineString, Simplify};

use super::ring::normalize_ring;

// Approximate meters per degree of latitude (and of longitude at the equator)
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Convert a simplification tolerance in meters to the degree epsilon
/// Douglas-Peucker works in. Good enough at field scale; longitude
/// compression at high latitudes only makes the tolerance conservative.
pub fn epsilon_from_meters(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE
}

/// Simplify a field boundary ring with Douglas-Peucker, keeping it closed.
///
/// Epsilon is in degrees (see [`epsilon_from_meters`]). Returns the input
/// ring unchanged when it is already minimal or when simplification would
/// collapse it below a valid ring.
pub fn simplify_ring(ring: &[(f64, f64)], epsilon: f64) -> Vec<(f64, f64)> {
    if ring.len() < 5 {
        return ring.to_vec();
    }

    let line: LineString<f64> = ring
        .iter()
        .map(|&(lat, lon)| geo::coord! { x: lon, y: lat })
        .collect();

    let simplified: Vec<(f64, f64)> = line
        .simplify(&epsilon)
        .0
        .into_iter()
        .map(|c| (c.y, c.x))
        .collect();

    let simplified = normalize_ring(&simplified);

    if simplified.len() < 4 {
        return ring.to_vec();
    }

    simplified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ring::is_closed;

    #[test]
    fn test_simplify_removes_redundant_vertices() {
        // A square with near-collinear noise along the bottom edge
        let mut ring = vec![(0.0, 0.0)];
        for i in 1..20 {
            let lon = i as f64 * 0.05;
            let lat = if i % 2 == 0 { 0.0 } else { 0.00001 };
            ring.push((lat, lon));
        }
        ring.push((0.0, 1.0));
        ring.push((1.0, 1.0));
        ring.push((1.0, 0.0));
        ring.push((0.0, 0.0));

        let simplified = simplify_ring(&ring, 0.001);

        assert!(simplified.len() < ring.len());
        assert!(is_closed(&simplified));
    }

    #[test]
    fn test_simplify_preserves_minimal_ring() {
        let triangle = vec![(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (0.0, 0.0)];
        assert_eq!(simplify_ring(&triangle, 10.0), triangle);
    }

    #[test]
    fn test_epsilon_from_meters() {
        let eps = epsilon_from_meters(111.32);
        assert!((eps - 0.001).abs() < 1e-9);
    }
}

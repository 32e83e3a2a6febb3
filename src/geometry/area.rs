/// WGS84 equatorial radius in meters. The area formula is calibrated
/// against this radius; do not substitute the mean radius (6371000).
const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Approximate surface area enclosed by a geographic ring, in square meters.
///
/// Coordinates are (lat, lon) degree pairs. Uses a spherical-excess line
/// integral: each edge contributes `dλ * (2 + sin φ1 + sin φ2)` and the
/// accumulated sum is scaled by R²/2.
///
/// Vertices are paired cyclically (`i` with `(i + 1) % n`), so the ring may
/// be passed open or closed: a duplicated closing point yields a zero-length
/// final edge that contributes nothing.
///
/// Accurate to within a few percent for field-sized polygons. Not geodesic:
/// very large polygons and rings crossing the antimeridian are out of scope.
/// Non-finite coordinates propagate through the arithmetic rather than
/// erroring; validate upstream if hard failure is required.
pub fn ring_area_m2(ring: &[(f64, f64)]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let n = ring.len();
    let mut sum = 0.0;

    for i in 0..n {
        let (lat1, lon1) = ring[i];
        let (lat2, lon2) = ring[(i + 1) % n];

        let phi1 = lat1.to_radians();
        let phi2 = lat2.to_radians();
        let d_lambda = (lon2 - lon1).to_radians();

        sum += d_lambda * (2.0 + phi1.sin() + phi2.sin());
    }

    (sum * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ring::normalize_ring;

    // ~100m in degrees of latitude at the equator
    const DEG_100M: f64 = 100.0 / 111_320.0;

    #[test]
    fn test_degenerate_rings_have_zero_area() {
        assert_eq!(ring_area_m2(&[]), 0.0);
        assert_eq!(ring_area_m2(&[(0.0, 0.0)]), 0.0);
        assert_eq!(ring_area_m2(&[(0.0, 0.0), (1.0, 1.0)]), 0.0);
    }

    #[test]
    fn test_equator_square_100m() {
        let square = vec![
            (0.0, 0.0),
            (DEG_100M, 0.0),
            (DEG_100M, DEG_100M),
            (0.0, DEG_100M),
        ];

        let area = ring_area_m2(&square);

        // 100m x 100m = 10,000 m², spherical approximation within a few percent
        assert!((area - 10_000.0).abs() < 300.0, "area = {area}");
    }

    #[test]
    fn test_closed_and_open_rings_agree() {
        let open = vec![
            (43.25, 76.92),
            (43.26, 76.92),
            (43.26, 76.93),
            (43.25, 76.93),
        ];
        let closed = normalize_ring(&open);

        let a_open = ring_area_m2(&open);
        let a_closed = ring_area_m2(&closed);

        assert!((a_open - a_closed).abs() < 1e-6);
    }

    #[test]
    fn test_field_sized_rectangle_magnitude() {
        // ~1.1km x ~0.8km rectangle near Almaty, expect order of 10^5..10^6 m²
        let ring = normalize_ring(&[
            (43.25, 76.92),
            (43.26, 76.92),
            (43.26, 76.93),
            (43.25, 76.93),
        ]);

        let area = ring_area_m2(&ring);
        assert!(area > 1e5 && area < 1e7, "area = {area}");
    }

    #[test]
    fn test_winding_direction_does_not_matter() {
        let cw = vec![
            (0.0, 0.0),
            (0.0, DEG_100M),
            (DEG_100M, DEG_100M),
            (DEG_100M, 0.0),
        ];
        let mut ccw = cw.clone();
        ccw.reverse();

        assert!((ring_area_m2(&cw) - ring_area_m2(&ccw)).abs() < 1e-9);
        assert!(ring_area_m2(&cw) >= 0.0);
    }

    #[test]
    fn test_collinear_ring_is_flat() {
        let line = vec![(0.0, 0.0), (0.0, 0.001), (0.0, 0.002)];
        assert!(ring_area_m2(&line).abs() < 1e-3);
    }
}

/// Normalize a polygon boundary into a closed ring.
///
/// Coordinates are (lat, lon) degree pairs. The result is always a new
/// vector; the input is never mutated.
///
/// # Algorithm
/// 1. Fewer than 3 points: returned as-is (degenerate, caller decides)
/// 2. Strip trailing points that exactly repeat their predecessor
///    (interactive draw tools sometimes emit the final vertex twice)
/// 3. Append a copy of the first point if the ring is not closed
///
/// Equality is exact f64 comparison, not epsilon-tolerant: rings travel
/// through JSON serialization unchanged, so drawn duplicates match exactly.
/// Idempotent: normalizing an already-normalized ring is a no-op.
pub fn normalize_ring(coordinates: &[(f64, f64)]) -> Vec<(f64, f64)> {
    if coordinates.len() < 3 {
        return coordinates.to_vec();
    }

    let mut ring = coordinates.to_vec();

    while ring.len() >= 2 && ring[ring.len() - 1] == ring[ring.len() - 2] {
        ring.pop();
    }

    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }

    ring
}

/// A ring is closed when it has at least 3 distinct vertices plus the
/// closing duplicate and its endpoints coincide exactly.
pub fn is_closed(ring: &[(f64, f64)]) -> bool {
    ring.len() >= 4 && ring.first() == ring.last()
}

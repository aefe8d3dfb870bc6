//! Crossing point collection along mesh edges.
//!
//! For a band `[value, value + interval)` every node whose field value lies
//! in the band is paired with each neighbor strictly below `value`. The edge
//! between them must cross the threshold, and the crossing is placed by
//! linear interpolation assuming the field varies linearly along the edge.

use isoline_common::{Mesh, Point};

/// A half-open scalar interval `[value, value + interval)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub value: f64,
    pub interval: f64,
}

impl Band {
    pub fn new(value: f64, interval: f64) -> Self {
        Self { value, interval }
    }

    /// Upper (exclusive) bound of the band.
    pub fn upper(&self) -> f64 {
        self.value + self.interval
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.value && v < self.upper()
    }
}

/// Counters for neighbor pairs skipped while collecting crossings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrossingStats {
    /// Neighbor entries that were `None`, out of range, or had an undefined
    /// value or coordinate
    pub undefined_neighbors: usize,
    /// Pairs whose interpolation parameter was undefined
    pub degenerate_edges: usize,
}

impl CrossingStats {
    pub fn merge(&mut self, other: CrossingStats) {
        self.undefined_neighbors += other.undefined_neighbors;
        self.degenerate_edges += other.degenerate_edges;
    }
}

/// Interpolate where the field equals `level` on the edge from `inside`
/// (value `h_in`) to `below` (value `h_below`).
///
/// Returns `None` when the parameter `t = (level - h_below) / (h_in - h_below)`
/// is undefined, which covers equal-valued pairs. `t` is clamped to `[0, 1]`
/// so the point never leaves the edge.
pub fn interpolate_crossing(
    inside: Point,
    below: Point,
    h_in: f64,
    h_below: f64,
    level: f64,
) -> Option<Point> {
    let denom = h_in - h_below;
    if !(denom > 0.0) {
        return None;
    }

    let t = (level - h_below) / denom;
    if !t.is_finite() {
        return None;
    }
    let t = t.clamp(0.0, 1.0);

    let point = Point::new(
        inside.x * t + below.x * (1.0 - t),
        inside.y * t + below.y * (1.0 - t),
    );
    point.is_finite().then_some(point)
}

/// Collect every crossing point for one band, in node order then neighbor
/// order.
///
/// `field` must be index-aligned with `mesh`; nodes beyond the end of either
/// are ignored.
pub fn collect_crossings(
    field: &[f64],
    mesh: &Mesh,
    band: Band,
    stats: &mut CrossingStats,
) -> Vec<Point> {
    let mut points = Vec::new();

    for (i, &h_in) in field.iter().enumerate() {
        if !band.contains(h_in) {
            continue;
        }
        let inside = match mesh.point(i) {
            Some(p) if p.is_finite() => p,
            _ => continue,
        };

        for neighbor in mesh.neighbors(i) {
            let Some(j) = *neighbor else {
                stats.undefined_neighbors += 1;
                continue;
            };
            let (h_below, below) = match (field.get(j), mesh.point(j)) {
                (Some(&h), Some(p)) if h.is_finite() && p.is_finite() => (h, p),
                _ => {
                    stats.undefined_neighbors += 1;
                    continue;
                }
            };

            if h_below >= band.value {
                continue;
            }

            match interpolate_crossing(inside, below, h_in, h_below, band.value) {
                Some(point) => points.push(point),
                None => stats.degenerate_edges += 1,
            }
        }
    }

    points
}

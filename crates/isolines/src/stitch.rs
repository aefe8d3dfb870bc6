//! Ordering of scattered crossing points into a path.

use isoline_common::Point;

/// Order points by a greedy nearest-neighbor walk.
///
/// The walk starts at the first point and repeatedly moves to the closest
/// unvisited point. Only a strictly closer point replaces the current
/// candidate, so ties go to the point listed first and the result is
/// deterministic for a given input order. The walk is a heuristic: the
/// resulting polyline may zig-zag or cross itself.
pub fn stitch_path(points: &[Point]) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut visited = vec![false; points.len()];
    let mut path = Vec::with_capacity(points.len());

    visited[0] = true;
    path.push(points[0]);
    let mut last = points[0];

    for _ in 1..points.len() {
        let mut nearest = None;
        let mut min_dist = f64::INFINITY;

        for (i, point) in points.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let dist = last.distance_squared(point);
            if dist < min_dist {
                min_dist = dist;
                nearest = Some(i);
            }
        }

        // Only unreachable points (NaN distances) remain
        let Some(i) = nearest else {
            break;
        };
        visited[i] = true;
        path.push(points[i]);
        last = points[i];
    }

    path
}

//! Laplacian path smoothing and coordinate precision reduction.

use isoline_common::Point;

/// Round `value` to `precision` decimal digits, half away from zero.
///
/// Values too large to carry the requested digits, and non-finite values,
/// are returned unchanged. Rounding an already rounded value is a no-op.
pub fn reduce_precision(value: f64, precision: u32) -> f64 {
    // Above 2^52 every f64 is already an integer
    const INTEGRAL_LIMIT: f64 = 4_503_599_627_370_496.0;

    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(precision.min(i32::MAX as u32) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_LIMIT {
        return value;
    }
    scaled.round() / factor
}

/// One discrete Laplacian smoothing pass.
///
/// Endpoints are returned untouched. Each interior point moves toward the
/// midpoint of its unsmoothed neighbors:
/// `p_i + factor * (p_{i-1} + p_{i+1} - 2 p_i)`, after which both
/// coordinates are rounded to `precision` digits. Paths with two or fewer
/// points have no interior and come back unchanged.
pub fn smooth_path(path: &[Point], factor: f64, precision: u32) -> Vec<Point> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let last = path.len() - 1;
    path.iter()
        .enumerate()
        .map(|(i, &point)| {
            if i == 0 || i == last {
                return point;
            }
            let prev = path[i - 1];
            let next = path[i + 1];
            Point::new(
                reduce_precision(point.x + (prev.x + next.x - 2.0 * point.x) * factor, precision),
                reduce_precision(point.y + (prev.y + next.y - 2.0 * point.y) * factor, precision),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_precision() {
        assert_eq!(reduce_precision(1.23456, 2), 1.23);
        assert_eq!(reduce_precision(1.235001, 2), 1.24);
        assert_eq!(reduce_precision(-1.5, 0), -2.0);
        assert_eq!(reduce_precision(7.0, 0), 7.0);
        assert!(reduce_precision(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_reduce_precision_idempotent() {
        for &v in &[0.1 + 0.2, 12.345678, -98.7654, 1e-9, 123456.789] {
            for precision in 0..8 {
                let once = reduce_precision(v, precision);
                assert_eq!(reduce_precision(once, precision), once);
            }
        }
    }

    #[test]
    fn test_smooth_short_paths_unchanged() {
        let two = vec![Point::new(0.123456, 0.0), Point::new(1.0, 9.87654)];
        assert_eq!(smooth_path(&two, 0.2, 2), two);
        assert!(smooth_path(&[], 0.2, 2).is_empty());
    }

    #[test]
    fn test_smooth_pulls_corner_inward() {
        let path = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];
        let smoothed = smooth_path(&path, 0.25, 2);
        assert_eq!(smoothed[0], path[0]);
        assert_eq!(smoothed[2], path[2]);
        // 1 + 0.25 * (0 + 0 - 2) = 0.5
        assert_eq!(smoothed[1], Point::new(1.0, 0.5));
    }

    #[test]
    fn test_smooth_uses_unsmoothed_neighbors() {
        let path = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 1.0),
        ];
        let smoothed = smooth_path(&path, 0.5, 3);
        // Both interior points see the unsmoothed path
        assert_eq!(smoothed[1], Point::new(1.0, 0.0));
        assert_eq!(smoothed[2], Point::new(2.0, 1.0));
    }

    #[test]
    fn test_smooth_straight_line_is_fixed_point() {
        let path: Vec<Point> = (0..5).map(|i| Point::new(i as f64, 2.0 * i as f64)).collect();
        assert_eq!(smooth_path(&path, 0.2, 2), path);
    }
}

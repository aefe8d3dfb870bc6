//! Synthetic mesh and field generators.
//!
//! Meshes are returned as plain data (coordinate pairs plus neighbor lists)
//! so that any crate in the workspace can build its own types from them.

/// Neighbor lists with an explicit marker for undefined neighbors.
pub type NeighborLists = Vec<Vec<Option<usize>>>;

/// Node coordinates and adjacency of a synthetic mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticMesh {
    pub points: Vec<[f64; 2]>,
    pub neighbors: NeighborLists,
    /// Columns of the underlying lattice (1 for a line)
    pub width: usize,
    /// Rows of the underlying lattice
    pub height: usize,
}

impl SyntheticMesh {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as JSON `[x, y]` values, as a collaborator would supply them.
    pub fn raw_points(&self) -> Vec<serde_json::Value> {
        self.points
            .iter()
            .map(|p| serde_json::json!([p[0], p[1]]))
            .collect()
    }
}

/// Creates `n` nodes on the x axis at unit spacing, each linked to its
/// immediate predecessor and successor.
///
/// # Example
///
/// ```
/// use test_utils::create_line_mesh;
///
/// let mesh = create_line_mesh(3);
/// assert_eq!(mesh.points, vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);
/// assert_eq!(mesh.neighbors[1], vec![Some(0), Some(2)]);
/// ```
pub fn create_line_mesh(n: usize) -> SyntheticMesh {
    let points = (0..n).map(|i| [i as f64, 0.0]).collect();
    let neighbors = (0..n)
        .map(|i| {
            let mut list = Vec::with_capacity(2);
            if i > 0 {
                list.push(Some(i - 1));
            }
            if i + 1 < n {
                list.push(Some(i + 1));
            }
            list
        })
        .collect();

    SyntheticMesh {
        points,
        neighbors,
        width: n,
        height: 1,
    }
}

/// Creates a 4-connected lattice in row-major order.
///
/// Node `row * width + col` sits at `(col * spacing, row * spacing)`;
/// neighbors are listed left, right, up, down where they exist.
pub fn create_grid_mesh(width: usize, height: usize, spacing: f64) -> SyntheticMesh {
    let mut points = Vec::with_capacity(width * height);
    let mut neighbors = Vec::with_capacity(width * height);

    for row in 0..height {
        for col in 0..width {
            points.push([col as f64 * spacing, row as f64 * spacing]);

            let mut list = Vec::with_capacity(4);
            if col > 0 {
                list.push(Some(row * width + col - 1));
            }
            if col + 1 < width {
                list.push(Some(row * width + col + 1));
            }
            if row > 0 {
                list.push(Some((row - 1) * width + col));
            }
            if row + 1 < height {
                list.push(Some((row + 1) * width + col));
            }
            neighbors.push(list);
        }
    }

    SyntheticMesh {
        points,
        neighbors,
        width,
        height,
    }
}

/// Creates a field rising linearly from 0 at the left column to `max` at the
/// right column of a lattice.
pub fn create_ramp_field(mesh: &SyntheticMesh, max: f64) -> Vec<f64> {
    let denom = (mesh.width.max(2) - 1) as f64;
    (0..mesh.len())
        .map(|i| (i % mesh.width.max(1)) as f64 / denom * max)
        .collect()
}

/// Creates a cone-shaped hill: `peak` at the lattice center falling linearly
/// to `base` at the farthest corner.
pub fn create_hill_field(mesh: &SyntheticMesh, base: f64, peak: f64) -> Vec<f64> {
    let (cx, cy) = center(mesh);
    let max_dist = mesh
        .points
        .iter()
        .map(|p| ((p[0] - cx).powi(2) + (p[1] - cy).powi(2)).sqrt())
        .fold(0.0, f64::max)
        .max(f64::EPSILON);

    mesh.points
        .iter()
        .map(|p| {
            let dist = ((p[0] - cx).powi(2) + (p[1] - cy).powi(2)).sqrt();
            peak - (peak - base) * dist / max_dist
        })
        .collect()
}

/// Creates a basin: `depth` (negative) at the center rising to `rim` at the
/// farthest corner. Useful for isobath-style reversed groups.
pub fn create_basin_field(mesh: &SyntheticMesh, depth: f64, rim: f64) -> Vec<f64> {
    create_hill_field(mesh, rim, depth)
}

/// Creates a deterministic precipitation fraction field in `[0, 3)`.
///
/// Wetter toward the top rows with pseudo-random variation per node.
pub fn create_precipitation_field(mesh: &SyntheticMesh, seed: u32) -> Vec<f64> {
    let height = mesh.height.max(1) as f64;
    (0..mesh.len())
        .map(|i| {
            let row = (i / mesh.width.max(1)) as f64;
            let jitter = (simple_hash(i as u32, seed) % 1000) as f64 / 1000.0;
            (1.0 - row / height) * 2.5 + jitter * 0.5
        })
        .collect()
}

/// Copies a field and marks the given node indices as undefined (NaN).
pub fn with_undefined(field: &[f64], nodes: &[usize]) -> Vec<f64> {
    let mut out = field.to_vec();
    for &i in nodes {
        if let Some(v) = out.get_mut(i) {
            *v = f64::NAN;
        }
    }
    out
}

fn center(mesh: &SyntheticMesh) -> (f64, f64) {
    let n = mesh.len().max(1) as f64;
    let (sx, sy) = mesh
        .points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p[0], sy + p[1]));
    (sx / n, sy / n)
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_mesh_ends() {
        let mesh = create_line_mesh(4);
        assert_eq!(mesh.len(), 4);
        assert_eq!(mesh.neighbors[0], vec![Some(1)]);
        assert_eq!(mesh.neighbors[3], vec![Some(2)]);
    }

    #[test]
    fn test_grid_mesh_adjacency_is_symmetric() {
        let mesh = create_grid_mesh(5, 4, 1.0);
        assert_eq!(mesh.len(), 20);
        for (i, list) in mesh.neighbors.iter().enumerate() {
            for j in list.iter().flatten() {
                assert!(mesh.neighbors[*j].contains(&Some(i)));
            }
        }
        // Corner has two neighbors, interior has four
        assert_eq!(mesh.neighbors[0].len(), 2);
        assert_eq!(mesh.neighbors[6].len(), 4);
    }

    #[test]
    fn test_ramp_field_range() {
        let mesh = create_grid_mesh(11, 3, 1.0);
        let field = create_ramp_field(&mesh, 100.0);
        assert_eq!(field[0], 0.0);
        assert_eq!(field[10], 100.0);
        assert_eq!(field[11], 0.0);
    }

    #[test]
    fn test_hill_field_peak_at_center() {
        let mesh = create_grid_mesh(21, 21, 1.0);
        let field = create_hill_field(&mesh, 0.0, 100.0);
        let center_idx = 10 * 21 + 10;
        assert!((field[center_idx] - 100.0).abs() < 1e-9);
        assert!(field[0].abs() < 1e-9);
    }

    #[test]
    fn test_precipitation_deterministic() {
        let mesh = create_grid_mesh(10, 10, 1.0);
        let a = create_precipitation_field(&mesh, 42);
        let b = create_precipitation_field(&mesh, 42);
        assert_eq!(a, b, "Same seed should produce same data");
        assert!(a.iter().all(|&v| (0.0..3.0).contains(&v)));
    }

    #[test]
    fn test_with_undefined() {
        let field = with_undefined(&[1.0, 2.0, 3.0], &[1, 7]);
        assert!(field[1].is_nan());
        assert_eq!(field[2], 3.0);
    }
}

//! Common test fixtures for isoline tests.

use crate::generators::{create_line_mesh, NeighborLists, SyntheticMesh};

/// Three collinear nodes with field `[-5, 5, 25]`.
///
/// With a band starting at 0, node 1 (5) has neighbor 0 (-5) below the
/// threshold; the crossing sits halfway between them at `(0.5, 0)`.
pub fn three_node_crossing() -> (SyntheticMesh, Vec<f64>) {
    (create_line_mesh(3), vec![-5.0, 5.0, 25.0])
}

/// Two nodes with equal values linked to each other.
pub fn flat_pair() -> (SyntheticMesh, Vec<f64>) {
    (create_line_mesh(2), vec![10.0, 10.0])
}

/// A mesh whose neighbor lists contain undefined and out-of-range entries.
pub fn ragged_neighbors() -> (SyntheticMesh, Vec<f64>) {
    let mut mesh = create_line_mesh(3);
    let neighbors: NeighborLists = vec![
        vec![Some(1), None],
        vec![None, Some(0), Some(2), Some(99)],
        vec![Some(1)],
    ];
    mesh.neighbors = neighbors;
    (mesh, vec![-10.0, 10.0, 30.0])
}

/// Expected CSV for a single "contours" group with values 20 and 40.
pub const CONTOURS_20_40_CSV: &str =
    "Group,Name,Value\ncontours,contours 1,20\ncontours,contours 2,40\n";

/// Header row of the isolines CSV export.
pub const CSV_HEADER: &str = "Group,Name,Value";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shapes() {
        let (mesh, field) = three_node_crossing();
        assert_eq!(mesh.len(), field.len());

        let (mesh, field) = ragged_neighbors();
        assert_eq!(mesh.neighbors.len(), field.len());
        assert!(CONTOURS_20_40_CSV.starts_with(CSV_HEADER));
    }
}

//! Unstructured mesh geometry: node coordinates and adjacency.
//!
//! Raw coordinate data arrives as loosely-typed pairs (usually straight out
//! of a JSON document). [`extract_coordinates`] normalizes it into two
//! parallel arrays, skipping malformed entries with a recorded warning, and
//! [`Mesh`] ties those arrays to the per-node neighbor lists.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DataError;

/// A point in mesh coordinate space.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from(pair: [f64; 2]) -> Self {
        Point::new(pair[0], pair[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// A raw coordinate entry that could not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateWarning {
    /// Position of the entry in the raw source
    pub index: usize,
    /// Why the entry was skipped
    pub reason: String,
}

/// Output of [`extract_coordinates`].
#[derive(Debug, Clone, Default)]
pub struct ExtractedCoordinates {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub warnings: Vec<CoordinateWarning>,
}

impl ExtractedCoordinates {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Split raw `[x, y]` entries into parallel coordinate arrays.
///
/// Entries that are not two-element numeric arrays are skipped and reported
/// in [`ExtractedCoordinates::warnings`]; the output arrays are then shorter
/// than the input.
///
/// # Errors
///
/// Returns [`DataError::EmptySource`] if `raw` is empty.
pub fn extract_coordinates(raw: &[Value]) -> Result<ExtractedCoordinates, DataError> {
    if raw.is_empty() {
        return Err(DataError::EmptySource);
    }

    let mut out = ExtractedCoordinates {
        x: Vec::with_capacity(raw.len()),
        y: Vec::with_capacity(raw.len()),
        warnings: Vec::new(),
    };

    for (index, entry) in raw.iter().enumerate() {
        match parse_pair(entry) {
            Ok((x, y)) => {
                out.x.push(x);
                out.y.push(y);
            }
            Err(reason) => {
                tracing::warn!(index, entry = %entry, reason = %reason, "Skipping invalid coordinate");
                out.warnings.push(CoordinateWarning { index, reason });
            }
        }
    }

    tracing::debug!(
        input = raw.len(),
        extracted = out.len(),
        skipped = out.warnings.len(),
        "Coordinates extracted"
    );

    Ok(out)
}

fn parse_pair(entry: &Value) -> Result<(f64, f64), String> {
    let items = entry
        .as_array()
        .ok_or_else(|| format!("expected [x, y] array, got {}", json_kind(entry)))?;

    if items.len() != 2 {
        return Err(format!("expected 2 elements, got {}", items.len()));
    }

    let x = items[0]
        .as_f64()
        .ok_or_else(|| format!("x is not numeric ({})", json_kind(&items[0])))?;
    let y = items[1]
        .as_f64()
        .ok_or_else(|| format!("y is not numeric ({})", json_kind(&items[1])))?;

    Ok((x, y))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Neighbor lists, one per node. `None` marks an undefined neighbor.
pub type Adjacency = Vec<Vec<Option<usize>>>;

/// Node coordinates plus the neighbor relation used as the edge set.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    x: Vec<f64>,
    y: Vec<f64>,
    adjacency: Adjacency,
}

impl Mesh {
    /// Assemble a mesh from parallel coordinate arrays and neighbor lists.
    ///
    /// # Errors
    ///
    /// [`DataError::EmptySource`] for an empty mesh and
    /// [`DataError::LengthMismatch`] when the arrays are not index-aligned.
    pub fn new(x: Vec<f64>, y: Vec<f64>, adjacency: Adjacency) -> Result<Self, DataError> {
        if x.is_empty() {
            return Err(DataError::EmptySource);
        }
        if y.len() != x.len() {
            return Err(DataError::LengthMismatch {
                what: "y coordinates",
                expected: x.len(),
                actual: y.len(),
            });
        }
        if adjacency.len() != x.len() {
            return Err(DataError::LengthMismatch {
                what: "adjacency",
                expected: x.len(),
                actual: adjacency.len(),
            });
        }

        Ok(Self { x, y, adjacency })
    }

    /// Build a mesh from typed coordinate pairs.
    pub fn from_pairs(points: &[[f64; 2]], adjacency: Adjacency) -> Result<Self, DataError> {
        let x = points.iter().map(|p| p[0]).collect();
        let y = points.iter().map(|p| p[1]).collect();
        Self::new(x, y, adjacency)
    }

    /// Build a mesh from raw JSON coordinate entries.
    ///
    /// Malformed entries are returned as warnings and their nodes keep an
    /// undefined (NaN) coordinate, so every node stays aligned with
    /// `adjacency` and the field. Crossing collection skips such nodes.
    pub fn from_raw_points(
        raw: &[Value],
        adjacency: Adjacency,
    ) -> Result<(Self, Vec<CoordinateWarning>), DataError> {
        let extracted = extract_coordinates(raw)?;

        let mut x = Vec::with_capacity(raw.len());
        let mut y = Vec::with_capacity(raw.len());
        let mut valid = extracted.x.iter().zip(&extracted.y);
        let mut skipped = extracted.warnings.iter().map(|w| w.index).peekable();
        for index in 0..raw.len() {
            if skipped.next_if_eq(&index).is_some() {
                x.push(f64::NAN);
                y.push(f64::NAN);
            } else if let Some((&px, &py)) = valid.next() {
                x.push(px);
                y.push(py);
            }
        }

        let mesh = Self::new(x, y, adjacency)?;
        Ok((mesh, extracted.warnings))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Coordinate of node `i`, if it exists.
    pub fn point(&self, i: usize) -> Option<Point> {
        Some(Point::new(*self.x.get(i)?, *self.y.get(i)?))
    }

    /// Neighbor list of node `i` (empty for unknown nodes).
    pub fn neighbors(&self, i: usize) -> &[Option<usize>] {
        self.adjacency.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check that a scalar field is index-aligned with this mesh.
    pub fn check_field(&self, field: &[f64]) -> Result<(), DataError> {
        if field.is_empty() {
            return Err(DataError::EmptyField);
        }
        if field.len() != self.len() {
            return Err(DataError::LengthMismatch {
                what: "field",
                expected: self.len(),
                actual: field.len(),
            });
        }
        Ok(())
    }
}

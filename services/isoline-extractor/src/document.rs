//! Mesh documents read by the extractor.
//!
//! A document is a single JSON object:
//!
//! ```json
//! {
//!   "points": [[0.0, 0.0], [1.0, 0.0]],
//!   "neighbors": [[1], [0, null]],
//!   "heights": [-5.0, 12.5],
//!   "precipitation": [0.1, null]
//! }
//! ```
//!
//! `null` marks an undefined neighbor or field value.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use isoline_common::{Adjacency, Mesh};
use isolines::TerrainData;

#[derive(Debug, Clone, Deserialize)]
pub struct MeshDocument {
    /// Raw `[x, y]` entries; malformed ones are reported, not parsed
    pub points: Vec<Value>,
    pub neighbors: Adjacency,
    pub heights: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation: Option<Vec<Option<f64>>>,
}

impl MeshDocument {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read mesh document {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse mesh document {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Assemble the terrain, logging every skipped coordinate entry.
    pub fn into_terrain(self) -> Result<TerrainData> {
        let (mesh, warnings) = Mesh::from_raw_points(&self.points, self.neighbors)
            .context("Invalid mesh geometry")?;
        for warning in &warnings {
            tracing::warn!(index = warning.index, reason = %warning.reason, "Malformed point entry");
        }

        let terrain = TerrainData::new(mesh, undefined_as_nan(self.heights))
            .context("Invalid height field")?;
        match self.precipitation {
            Some(values) => Ok(terrain
                .with_precipitation(undefined_as_nan(values))
                .context("Invalid precipitation field")?),
            None => Ok(terrain),
        }
    }
}

fn undefined_as_nan(values: Vec<Option<f64>>) -> Vec<f64> {
    values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_with_nulls() {
        let doc = MeshDocument::from_json(
            r#"{
                "points": [[0, 0], [1, 0], [2, 0]],
                "neighbors": [[1], [0, 2, null], [1]],
                "heights": [0.0, null, 10.0]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.neighbors[1], vec![Some(0), Some(2), None]);
        assert!(doc.precipitation.is_none());

        let terrain = doc.into_terrain().unwrap();
        assert_eq!(terrain.mesh().len(), 3);
        assert!(terrain.heights()[1].is_nan());
    }

    #[test]
    fn test_malformed_point_keeps_node() {
        let doc = MeshDocument::from_json(
            r#"{
                "points": [[0, 0], "bad", [2, 0]],
                "neighbors": [[1], [0, 2], [1]],
                "heights": [0.0, 5.0, 10.0]
            }"#,
        )
        .unwrap();

        let terrain = doc.into_terrain().unwrap();
        assert_eq!(terrain.mesh().len(), 3);
        assert!(!terrain.mesh().point(1).unwrap().is_finite());
        assert_eq!(terrain.heights(), &[0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_missing_heights_rejected() {
        let result = MeshDocument::from_json(r#"{"points": [[0, 0]], "neighbors": [[]]}"#);
        assert!(result.is_err());
    }
}

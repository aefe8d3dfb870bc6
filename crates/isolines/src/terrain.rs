//! Terrain context and group regeneration.
//!
//! [`TerrainData`] bundles the mesh with the fields contoured from it. Group
//! presets are independent of each other, so regeneration computes them in
//! parallel and then writes the results into the collection one key at a
//! time, in preset order.

use rayon::prelude::*;

use isoline_common::{
    scale, ConfigError, DataError, FieldSource, GroupPreset, IsolineResult, Mesh,
};

use crate::collection::IsolinesCollection;
use crate::generator::{generate_isoline_group_with_stats, ExtractionStats};

/// Mesh plus per-node fields, owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainData {
    mesh: Mesh,
    heights: Vec<f64>,
    precipitation: Option<Vec<f64>>,
}

impl TerrainData {
    /// Pair a mesh with its height field.
    pub fn new(mesh: Mesh, heights: Vec<f64>) -> Result<Self, DataError> {
        mesh.check_field(&heights)?;
        Ok(Self {
            mesh,
            heights,
            precipitation: None,
        })
    }

    /// Attach a precipitation field (fractions, scaled by its preset).
    pub fn with_precipitation(mut self, precipitation: Vec<f64>) -> Result<Self, DataError> {
        self.mesh.check_field(&precipitation)?;
        self.precipitation = Some(precipitation);
        Ok(self)
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn precipitation(&self) -> Option<&[f64]> {
        self.precipitation.as_deref()
    }

    /// Resolve the field a preset is contoured from.
    pub fn field(&self, source: FieldSource) -> Result<&[f64], DataError> {
        match source {
            FieldSource::Heights => Ok(&self.heights),
            FieldSource::Precipitation => self
                .precipitation()
                .ok_or_else(|| DataError::MissingField(source.as_str().to_string())),
        }
    }
}

/// Outcome for one regenerated group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub name: String,
    pub isolines: usize,
    pub stats: ExtractionStats,
}

/// Regenerate every preset group and store it in `collection`.
///
/// All presets are validated and all required fields resolved before any
/// work starts, and nothing is written unless every group succeeds. A group
/// that comes out empty is removed from the collection instead of stored.
pub fn regenerate_groups(
    collection: &mut IsolinesCollection,
    terrain: &TerrainData,
    presets: &[GroupPreset],
) -> IsolineResult<Vec<GroupSummary>> {
    for (i, preset) in presets.iter().enumerate() {
        preset.validate()?;
        if presets[..i].iter().any(|p| p.name == preset.name) {
            return Err(ConfigError::InvalidPreset(format!(
                "duplicate group name: {}",
                preset.name
            ))
            .into());
        }
        terrain.field(preset.source)?;
    }

    let results: Vec<_> = presets
        .par_iter()
        .map(|preset| -> IsolineResult<_> {
            let raw = terrain.field(preset.source)?;
            let scaled;
            let field = if preset.scale == 1.0 {
                raw
            } else {
                scaled = scale(raw, preset.scale);
                scaled.as_slice()
            };
            generate_isoline_group_with_stats(field, terrain.mesh(), &preset.config)
        })
        .collect();

    let mut generated = Vec::with_capacity(results.len());
    for (preset, result) in presets.iter().zip(results) {
        match result {
            Ok(output) => generated.push(output),
            Err(e) => {
                tracing::warn!(group = %preset.name, error = %e, "Isoline generation failed");
                return Err(e);
            }
        }
    }

    let mut summaries = Vec::with_capacity(presets.len());
    for (preset, (isolines, stats)) in presets.iter().zip(generated) {
        let count = isolines.len();
        if isolines.is_empty() {
            collection.remove_group(&preset.name).ok();
        } else {
            collection.insert_group(preset.name.clone(), isolines);
        }

        tracing::info!(
            group = %preset.name,
            source = preset.source.as_str(),
            isolines = count,
            bands = stats.bands_examined,
            dropped = stats.bands_dropped,
            "Regenerated isoline group"
        );
        summaries.push(GroupSummary {
            name: preset.name.clone(),
            isolines: count,
            stats,
        });
    }

    Ok(summaries)
}

/// Regenerate contours, isobaths and isohyets.
pub fn regenerate_standard_groups(
    collection: &mut IsolinesCollection,
    terrain: &TerrainData,
) -> IsolineResult<Vec<GroupSummary>> {
    regenerate_groups(collection, terrain, &GroupPreset::standard())
}

//! The `extract` command: mesh document in, isolines out.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use isoline_common::{GroupPreset, PresetFile};
use isolines::{regenerate_groups, write_csv, IsolinesCollection, TerrainData};

use crate::document::MeshDocument;

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub input: PathBuf,
    pub presets: Option<PathBuf>,
    /// CSV destination; stdout when absent
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

pub fn run(options: &ExtractOptions) -> Result<IsolinesCollection> {
    let terrain = MeshDocument::from_file(&options.input)?.into_terrain()?;
    info!(
        nodes = terrain.mesh().len(),
        precipitation = terrain.precipitation().is_some(),
        "Loaded mesh document"
    );

    let presets = match &options.presets {
        Some(path) => PresetFile::from_file(path)
            .with_context(|| format!("Failed to load presets from {}", path.display()))?
            .groups,
        None => GroupPreset::standard(),
    };
    let presets = available_presets(&terrain, presets);

    let mut collection = IsolinesCollection::new();
    let summaries = regenerate_groups(&mut collection, &terrain, &presets)?;
    for summary in &summaries {
        info!(
            group = %summary.name,
            isolines = summary.isolines,
            min_value = summary.stats.min_value,
            max_value = summary.stats.max_value,
            undefined_neighbors = summary.stats.crossings.undefined_neighbors,
            "Group extracted"
        );
    }

    match &options.csv {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_csv(&collection, BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote CSV export");
        }
        None => write_csv(&collection, io::stdout().lock()).context("Failed to write CSV")?,
    }

    if let Some(path) = &options.json {
        write_json(&collection, path)?;
    }

    Ok(collection)
}

/// Drop presets whose source field the document does not carry.
fn available_presets(terrain: &TerrainData, presets: Vec<GroupPreset>) -> Vec<GroupPreset> {
    presets
        .into_iter()
        .filter(|preset| match terrain.field(preset.source) {
            Ok(_) => true,
            Err(e) => {
                warn!(group = %preset.name, error = %e, "Skipping group");
                false
            }
        })
        .collect()
}

fn write_json(collection: &IsolinesCollection, path: &Path) -> Result<()> {
    let json = collection.to_json_pretty()?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), groups = collection.len(), "Wrote JSON dump");
    Ok(())
}

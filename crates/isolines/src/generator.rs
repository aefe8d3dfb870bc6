//! Isoline group generation.
//!
//! Bands step from `max(field min, start)` up to the field maximum by
//! `interval`. For each band the crossing points are collected, stitched into
//! a path and optionally smoothed. Bands with too few crossings are dropped.

use serde::{Deserialize, Serialize};

use isoline_common::{FieldRange, IsolineConfig, IsolineResult, Mesh, Point};

use crate::crossing::{collect_crossings, Band, CrossingStats};
use crate::smooth::smooth_path;
use crate::stitch::stitch_path;

/// One extracted isoline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Isoline {
    /// Reported band value (see [`reported_value`])
    pub value: f64,
    /// Stitched and smoothed path
    pub points: Vec<Point>,
}

impl Isoline {
    pub fn new(value: f64, points: Vec<Point>) -> Self {
        Self { value, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Ordered isolines produced by one generator run.
pub type IsolineGroup = Vec<Isoline>;

/// Counters describing one generator run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExtractionStats {
    pub min_value: f64,
    pub max_value: f64,
    pub bands_examined: usize,
    pub bands_emitted: usize,
    /// Bands with fewer than `min_points` crossings
    pub bands_dropped: usize,
    pub total_points: usize,
    pub crossings: CrossingStats,
}

/// Lower bounds of every band to examine, in ascending order.
///
/// Values are computed as `effective_min + k * interval` rather than by
/// repeated addition so that long runs do not drift. Returns an empty list
/// for a non-positive interval or when `effective_min > max`.
pub fn band_values(effective_min: f64, max: f64, interval: f64) -> Vec<f64> {
    if !(interval > 0.0) || !effective_min.is_finite() || !max.is_finite() || effective_min > max
    {
        return vec![];
    }

    let count = ((max - effective_min) / interval).floor() as usize + 1;
    (0..count)
        .map(|k| effective_min + k as f64 * interval)
        .take_while(|&value| value <= max)
        .collect()
}

/// Value reported for a band: the raw lower bound, or `max - value + start`
/// for reversed groups (depth-below-surface style).
pub fn reported_value(value: f64, max_value: f64, config: &IsolineConfig) -> f64 {
    if config.reverse {
        max_value - value + config.start
    } else {
        value
    }
}

/// Generate the isolines of one field.
///
/// # Errors
///
/// `ConfigError` for an invalid configuration (notably a non-positive
/// interval) and `DataError` when the field is empty, contains no finite
/// values, or is not index-aligned with the mesh.
pub fn generate_isoline_group(
    field: &[f64],
    mesh: &Mesh,
    config: &IsolineConfig,
) -> IsolineResult<IsolineGroup> {
    generate_isoline_group_with_stats(field, mesh, config).map(|(isolines, _)| isolines)
}

/// Same as [`generate_isoline_group`], also returning run statistics.
pub fn generate_isoline_group_with_stats(
    field: &[f64],
    mesh: &Mesh,
    config: &IsolineConfig,
) -> IsolineResult<(IsolineGroup, ExtractionStats)> {
    config.validate()?;
    mesh.check_field(field)?;
    let range = FieldRange::of(field)?;

    let effective_min = range.min.max(config.start);
    let bands = band_values(effective_min, range.max, config.interval);

    let mut stats = ExtractionStats {
        min_value: range.min,
        max_value: range.max,
        bands_examined: bands.len(),
        ..ExtractionStats::default()
    };

    tracing::debug!(
        nodes = field.len(),
        valid_count = range.valid_count,
        min_value = range.min,
        max_value = range.max,
        effective_min,
        interval = config.interval,
        num_bands = bands.len(),
        "generate_isoline_group input"
    );

    let mut isolines = Vec::new();
    for value in bands {
        let band = Band::new(value, config.interval);
        let points = collect_crossings(field, mesh, band, &mut stats.crossings);

        if points.len() < config.min_points {
            stats.bands_dropped += 1;
            tracing::trace!(band = value, points = points.len(), "Dropping sparse band");
            continue;
        }

        let mut path = stitch_path(&points);
        if config.smoothing > 0.0 {
            path = smooth_path(&path, config.smoothing, config.precision);
        }

        stats.total_points += path.len();
        isolines.push(Isoline::new(reported_value(value, range.max, config), path));
    }
    stats.bands_emitted = isolines.len();

    tracing::debug!(
        num_isolines = stats.bands_emitted,
        dropped = stats.bands_dropped,
        total_points = stats.total_points,
        undefined_neighbors = stats.crossings.undefined_neighbors,
        degenerate_edges = stats.crossings.degenerate_edges,
        "Generated isoline group"
    );

    Ok((isolines, stats))
}

//! Isoline extraction over unstructured meshes.
//!
//! Pipeline per band:
//! - Crossing point collection along straddling edges
//! - Greedy nearest-neighbor stitching
//! - Laplacian smoothing with precision reduction
//!
//! Results are grouped by name in an [`IsolinesCollection`] and can be
//! exported as CSV.

pub mod collection;
pub mod crossing;
pub mod export;
pub mod generator;
pub mod smooth;
pub mod stitch;
pub mod terrain;

pub use collection::{group_label, isoline_name, normalize_group_name, IsolineEntry, IsolinesCollection};
pub use crossing::{collect_crossings, interpolate_crossing, Band, CrossingStats};
pub use export::{export_csv, write_csv, CSV_HEADER};
pub use generator::{
    band_values, generate_isoline_group, generate_isoline_group_with_stats, reported_value,
    ExtractionStats, Isoline, IsolineGroup,
};
pub use smooth::{reduce_precision, smooth_path};
pub use stitch::stitch_path;
pub use terrain::{regenerate_groups, regenerate_standard_groups, GroupSummary, TerrainData};

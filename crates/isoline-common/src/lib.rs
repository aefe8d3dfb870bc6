//! Common types shared by the isoline extraction crates.

pub mod config;
pub mod error;
pub mod field;
pub mod mesh;

pub use config::{FieldSource, GroupPreset, IsolineConfig, PresetFile};
pub use error::{CollectionError, ConfigError, DataError, IsolineError, IsolineResult};
pub use field::{scale, FieldRange, PRECIPITATION_TO_MM};
pub use mesh::{extract_coordinates, Adjacency, CoordinateWarning, ExtractedCoordinates, Mesh, Point};

//! Tests for terrain-driven group regeneration.

use isoline_common::{FieldSource, GroupPreset, IsolineConfig, Mesh};
use isolines::{
    regenerate_groups, regenerate_standard_groups, Isoline, IsolinesCollection, TerrainData,
};
use test_utils::{create_grid_mesh, create_hill_field, create_precipitation_field, SyntheticMesh};

fn hill_terrain() -> (SyntheticMesh, TerrainData) {
    let synthetic = create_grid_mesh(21, 21, 1.0);
    let (mesh, warnings) =
        Mesh::from_raw_points(&synthetic.raw_points(), synthetic.neighbors.clone()).unwrap();
    assert!(warnings.is_empty());

    let heights = create_hill_field(&synthetic, 0.0, 100.0);
    let precipitation = create_precipitation_field(&synthetic, 7);
    let terrain = TerrainData::new(mesh, heights)
        .unwrap()
        .with_precipitation(precipitation)
        .unwrap();
    (synthetic, terrain)
}

fn flat_terrain() -> TerrainData {
    let synthetic = create_grid_mesh(4, 4, 1.0);
    let mesh = Mesh::from_pairs(&synthetic.points, synthetic.neighbors.clone()).unwrap();
    TerrainData::new(mesh, vec![10.0; synthetic.len()]).unwrap()
}

fn placeholder() -> Vec<Isoline> {
    vec![Isoline::new(1.0, vec![])]
}

// ============================================================================
// Standard group tests
// ============================================================================

#[test]
fn test_standard_groups_are_generated() {
    let (_, terrain) = hill_terrain();
    let mut collection = IsolinesCollection::new();

    let summaries = regenerate_standard_groups(&mut collection, &terrain).unwrap();

    let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["contours", "isobaths", "isohyets"]);
    assert_eq!(
        collection.group_names().collect::<Vec<_>>(),
        vec!["contours", "isobaths", "isohyets"]
    );
    for summary in &summaries {
        assert!(summary.isolines > 0, "{} is empty", summary.name);
        assert_eq!(collection.get(&summary.name).unwrap().len(), summary.isolines);
    }
}

#[test]
fn test_contour_values_follow_preset() {
    let (_, terrain) = hill_terrain();
    let mut collection = IsolinesCollection::new();
    regenerate_standard_groups(&mut collection, &terrain).unwrap();

    let values: Vec<f64> = collection
        .get("contours")
        .unwrap()
        .iter()
        .map(|isoline| isoline.value)
        .collect();

    assert_eq!(values[0], 20.0);
    for pair in values.windows(2) {
        assert_eq!(pair[1] - pair[0], 20.0);
    }
    for isoline in collection.get("contours").unwrap() {
        assert!(isoline.len() >= 10);
    }
}

#[test]
fn test_isobaths_are_reversed() {
    let (_, terrain) = hill_terrain();
    let mut collection = IsolinesCollection::new();
    regenerate_standard_groups(&mut collection, &terrain).unwrap();

    let values: Vec<f64> = collection
        .get("isobaths")
        .unwrap()
        .iter()
        .map(|isoline| isoline.value)
        .collect();

    for pair in values.windows(2) {
        assert!(pair[1] < pair[0], "isobaths should descend: {:?}", values);
    }
    for value in values {
        assert!((0.0..=100.0).contains(&value));
    }
}

#[test]
fn test_isohyets_use_scaled_precipitation() {
    let (_, terrain) = hill_terrain();
    let mut collection = IsolinesCollection::new();
    regenerate_standard_groups(&mut collection, &terrain).unwrap();

    let values: Vec<f64> = collection
        .get("isohyets")
        .unwrap()
        .iter()
        .map(|isoline| isoline.value)
        .collect();

    // Fractions in [0, 3) become millimetres in [0, 300)
    for value in &values {
        assert!(*value > 0.0 && *value < 300.0, "unexpected isohyet {}", value);
    }
    for pair in values.windows(2) {
        let steps = (pair[1] - pair[0]) / 50.0;
        assert!(steps > 0.5 && (steps - steps.round()).abs() < 1e-9);
    }
}

// ============================================================================
// Collection update tests
// ============================================================================

#[test]
fn test_regeneration_keeps_user_groups_and_positions() {
    let (_, terrain) = hill_terrain();
    let mut collection = IsolinesCollection::new();
    collection.create_group("Custom").unwrap();
    collection.insert_group("isobaths", placeholder());

    regenerate_standard_groups(&mut collection, &terrain).unwrap();

    assert_eq!(
        collection.group_names().collect::<Vec<_>>(),
        vec!["custom", "isobaths", "contours", "isohyets"]
    );
    assert_ne!(collection.get("isobaths").unwrap(), placeholder().as_slice());
}

#[test]
fn test_empty_result_removes_group() {
    let mut collection = IsolinesCollection::new();
    collection.insert_group("contours", placeholder());

    let contours = GroupPreset::standard().remove(0);
    let summaries = regenerate_groups(&mut collection, &flat_terrain(), &[contours]).unwrap();

    assert_eq!(summaries[0].isolines, 0);
    assert!(!collection.contains_group("contours"));
}

#[test]
fn test_invalid_preset_writes_nothing() {
    let (_, terrain) = hill_terrain();
    let mut collection = IsolinesCollection::new();
    collection.insert_group("contours", placeholder());

    let presets = vec![
        GroupPreset::new("contours", FieldSource::Heights, IsolineConfig::with_interval(10.0)),
        GroupPreset::new("broken", FieldSource::Heights, IsolineConfig::with_interval(0.0)),
    ];
    let err = regenerate_groups(&mut collection, &terrain, &presets).unwrap_err();

    assert_eq!(err.kind(), "ConfigError");
    assert_eq!(collection.get("contours").unwrap(), placeholder().as_slice());
    assert!(!collection.contains_group("broken"));
}

#[test]
fn test_duplicate_preset_names_rejected() {
    let (_, terrain) = hill_terrain();
    let mut collection = IsolinesCollection::new();

    let preset = GroupPreset::new("contours", FieldSource::Heights, IsolineConfig::default());
    let err = regenerate_groups(&mut collection, &terrain, &[preset.clone(), preset]).unwrap_err();

    assert_eq!(err.kind(), "ConfigError");
    assert!(collection.is_empty());
}

#[test]
fn test_missing_precipitation_is_data_error() {
    let mut collection = IsolinesCollection::new();
    let err = regenerate_standard_groups(&mut collection, &flat_terrain()).unwrap_err();

    assert_eq!(err.kind(), "DataError");
    assert!(collection.is_empty());
}

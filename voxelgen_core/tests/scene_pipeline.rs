//! Integration tests for the description-to-placement pipeline.
//!
//! These tests verify the complete flow of:
//! - Fact extraction from free-form description text
//! - Deterministic scene composition from the extracted facts
//! - Serialization of placements into the front-end voxel shape

use std::collections::BTreeSet;

use voxelgen_core::{FactSet, MaterialKind, Pattern, Structure, Terrain, compose, extract};

/// Test the full pipeline on a forest-and-tower description.
#[test]
fn test_forest_tower_pipeline() {
    let description = "A green forest with a tall tower, colors #7EC850 and #808080";
    let facts = extract(description);

    assert_eq!(facts.colors.len(), 2);
    assert_eq!(facts.colors[0].as_str(), "#7EC850");
    assert_eq!(facts.colors[1].as_str(), "#808080");
    assert_eq!(facts.terrain, BTreeSet::from([Terrain::Forest]));
    assert_eq!(facts.structures, BTreeSet::from([Structure::Tower]));
    assert!(facts.patterns.is_empty());

    let placements = compose(&facts);

    // 49 platform cells plus a 5-cell spire for the tower.
    assert_eq!(placements.len(), 54);

    // The two-color palette alternates by |x| + |z| parity.
    for cell in &placements[..49] {
        assert_eq!(cell.y, 1);
        let expected = if (cell.x.abs() + cell.z.abs()) % 2 == 0 {
            MaterialKind::Grass
        } else {
            MaterialKind::Stone
        };
        assert_eq!(cell.material, expected, "cell ({}, {})", cell.x, cell.z);
    }

    // Spire cells sit above the platform center, bottom to top.
    for (y, cell) in (2_i32..).zip(&placements[49..]) {
        assert_eq!((cell.x, cell.z), (0, 0));
        assert_eq!(cell.y, y);
        assert_eq!(cell.material, MaterialKind::Stone);
    }
}

/// Test that a description without scene vocabulary still composes a platform.
#[test]
fn test_unrelated_text_composes_default_platform() {
    let facts = extract("The meeting is rescheduled to Thursday afternoon.");
    assert!(facts.is_empty());

    let placements = compose(&facts);
    assert_eq!(placements.len(), 49);

    // Default palette order: grass, dirt, leaves, stone by cell distance.
    let center = placements.iter().find(|p| p.x == 0 && p.z == 0).unwrap();
    assert_eq!(center.material, MaterialKind::Grass);
    let edge = placements.iter().find(|p| p.x == 3 && p.z == 0).unwrap();
    assert_eq!(edge.material, MaterialKind::Stone);
}

/// Test extraction of every vocabulary family from one description.
#[test]
fn test_rich_description_extraction() {
    let description = "A desert plain beside a lake, with a house and a cave \
                       entrance. The sand uses a dotted noise pattern in #E8C170.";
    let facts = extract(description);

    assert_eq!(
        facts.terrain,
        BTreeSet::from([Terrain::Plain, Terrain::Desert, Terrain::Lake])
    );
    assert_eq!(
        facts.structures,
        BTreeSet::from([Structure::House, Structure::Cave])
    );
    assert_eq!(
        facts.patterns,
        BTreeSet::from([Pattern::Dotted, Pattern::Noise])
    );
    assert_eq!(facts.colors.len(), 1);
    assert_eq!(facts.colors[0].as_str(), "#E8C170");

    // House and cave are flat structures, so no spire.
    assert_eq!(compose(&facts).len(), 49);
}

/// Test that placements serialize into the front-end `VoxelData` shape.
#[test]
fn test_placements_serialize_for_front_end() {
    let facts = extract("A stone tower in #808080");
    let placements = compose(&facts);

    let json = serde_json::to_value(&placements).unwrap();
    let cells = json.as_array().unwrap();
    assert_eq!(cells.len(), 54);

    let first = &cells[0];
    assert_eq!(first["x"], -3);
    assert_eq!(first["y"], 1);
    assert_eq!(first["z"], -3);
    assert_eq!(first["type"], "stone");

    let last = &cells[53];
    assert_eq!(last["x"], 0);
    assert_eq!(last["y"], 6);
    assert_eq!(last["z"], 0);
    assert_eq!(last["type"], "stone");
}

/// Test that fact sets survive a serialization round trip unchanged.
#[test]
fn test_fact_set_round_trip() {
    let facts = extract("A forest tower scene, #7EC850, with a striped grid pattern");

    let json = serde_json::to_string(&facts).unwrap();
    let restored: FactSet = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.colors, facts.colors);
    assert_eq!(restored.terrain, facts.terrain);
    assert_eq!(restored.structures, facts.structures);
    assert_eq!(restored.patterns, facts.patterns);
}

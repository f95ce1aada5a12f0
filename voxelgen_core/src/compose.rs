//! Deterministic scene composition.
//!
//! Maps a fact set to an ordered list of placement instructions: a square
//! base platform colored from the extracted palette, plus a stone spire at
//! the center when a tall structure was mentioned. Composition is pure and
//! total; an all-empty fact set still composes a full platform.

use serde::{Deserialize, Serialize};

use crate::facts::{FactSet, HexColor, Structure};

/// Palette used when a description contained no color codes.
pub const DEFAULT_PALETTE: [&str; 4] = ["#7EC850", "#8B4513", "#4286F4", "#808080"];

/// Half-width of the base platform; cells span `[-RADIUS, RADIUS]` on x and z.
pub const PLATFORM_RADIUS: i32 = 3;

/// World height of the base platform layer.
pub const BASE_HEIGHT: i32 = 1;

/// Number of stone cells stacked above the platform for a tall structure.
pub const SPIRE_HEIGHT: i32 = 5;

/// Structures that earn a spire above the platform center.
const TALL_STRUCTURES: [Structure; 3] =
    [Structure::Tower, Structure::Building, Structure::Tree];

/// Primitive materials the front-end can render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum MaterialKind {
    Grass = 0,
    Dirt = 1,
    Stone = 2,
    Wood = 3,
    Leaves = 4,
}

impl MaterialKind {
    /// The front-end voxel type string for this material.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Dirt => "dirt",
            Self::Stone => "stone",
            Self::Wood => "wood",
            Self::Leaves => "leaves",
        }
    }

    /// Map a `#RRGGBB` code to the nearest known material class.
    ///
    /// The lookup is case-insensitive; codes outside the table map to dirt.
    #[must_use]
    pub fn from_color_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "#7ec850" | "#5a9e34" | "#3a5f0b" => Self::Grass,
            "#808080" => Self::Stone,
            "#f2d16b" | "#e8c170" => Self::Wood,
            "#4286f4" => Self::Leaves,
            _ => Self::Dirt,
        }
    }
}

/// One primitive to place: a position and a material.
///
/// Serializes as `{"x":..,"y":..,"z":..,"type":".."}`, the exact `VoxelData`
/// shape the front-end store consumes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacementInstruction {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    #[serde(rename = "type")]
    pub material: MaterialKind,
}

impl PlacementInstruction {
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32, material: MaterialKind) -> Self {
        Self { x, y, z, material }
    }
}

/// Compose the placement list for a fact set.
///
/// The platform iterates x in the outer loop and z in the inner loop, both
/// ascending, so the output order is stable for diffing. Spire cells come
/// after the full platform, bottom to top. The caller's fact set is never
/// modified; the default palette substitution is local to this call.
#[must_use]
pub fn compose(facts: &FactSet) -> Vec<PlacementInstruction> {
    let palette: Vec<&str> = if facts.colors.is_empty() {
        DEFAULT_PALETTE.to_vec()
    } else {
        facts.colors.iter().map(HexColor::as_str).collect()
    };

    let mut placements = Vec::new();

    for x in -PLATFORM_RADIUS..=PLATFORM_RADIUS {
        for z in -PLATFORM_RADIUS..=PLATFORM_RADIUS {
            let color_index = (x.abs() + z.abs()) as usize % palette.len();
            let material = MaterialKind::from_color_code(palette[color_index]);
            placements.push(PlacementInstruction::new(x, BASE_HEIGHT, z, material));
        }
    }

    if wants_spire(facts) {
        for y in 1..=SPIRE_HEIGHT {
            placements.push(PlacementInstruction::new(
                0,
                BASE_HEIGHT + y,
                0,
                MaterialKind::Stone,
            ));
        }
    }

    placements
}

fn wants_spire(facts: &FactSet) -> bool {
    TALL_STRUCTURES
        .iter()
        .any(|structure| facts.structures.contains(structure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::str::FromStr;

    fn facts_with_structures(structures: &[Structure]) -> FactSet {
        FactSet {
            structures: structures.iter().copied().collect(),
            ..FactSet::default()
        }
    }

    fn facts_with_colors(codes: &[&str]) -> FactSet {
        #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
        let colors = codes
            .iter()
            .map(|c| HexColor::from_str(c).expect("test color should parse"))
            .collect();
        FactSet {
            colors,
            ..FactSet::default()
        }
    }

    #[test]
    fn empty_facts_compose_full_platform() {
        let facts = FactSet::default();
        let placements = compose(&facts);

        assert_eq!(placements.len(), 49);
        assert!(placements.iter().all(|p| p.y == BASE_HEIGHT));

        let cells: BTreeSet<(i32, i32)> = placements.iter().map(|p| (p.x, p.z)).collect();
        assert_eq!(cells.len(), 49);
        for x in -PLATFORM_RADIUS..=PLATFORM_RADIUS {
            for z in -PLATFORM_RADIUS..=PLATFORM_RADIUS {
                assert!(cells.contains(&(x, z)), "missing cell ({x}, {z})");
            }
        }

        // The substitution never touched the caller's fact set.
        assert!(facts.colors.is_empty());
    }

    #[test]
    fn platform_iterates_x_outer_z_inner() {
        let placements = compose(&FactSet::default());

        assert_eq!((placements[0].x, placements[0].z), (-3, -3));
        assert_eq!((placements[1].x, placements[1].z), (-3, -2));
        assert_eq!((placements[6].x, placements[6].z), (-3, 3));
        assert_eq!((placements[7].x, placements[7].z), (-2, -3));
        assert_eq!((placements[48].x, placements[48].z), (3, 3));
    }

    #[test]
    fn default_palette_cycles_by_cell_distance() {
        let placements = compose(&FactSet::default());
        #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
        let material_at = |x: i32, z: i32| {
            placements
                .iter()
                .find(|p| p.x == x && p.z == z)
                .expect("cell should exist")
                .material
        };

        // (|x| + |z|) % 4 walks the default palette in order.
        assert_eq!(material_at(0, 0), MaterialKind::Grass); // #7EC850
        assert_eq!(material_at(1, 0), MaterialKind::Dirt); // #8B4513
        assert_eq!(material_at(1, 1), MaterialKind::Leaves); // #4286F4
        assert_eq!(material_at(3, 0), MaterialKind::Stone); // #808080
        assert_eq!(material_at(2, 2), MaterialKind::Grass); // distance 4 wraps
        assert_eq!(material_at(-3, 3), MaterialKind::Leaves); // distance 6
    }

    #[test]
    fn tall_structures_add_stone_spire() {
        for tall in [Structure::Tower, Structure::Building, Structure::Tree] {
            let placements = compose(&facts_with_structures(&[tall]));
            assert_eq!(placements.len(), 54, "{} should add a spire", tall.keyword());

            let spire = &placements[49..];
            for (i, cell) in (1_i32..).zip(spire) {
                assert_eq!((cell.x, cell.z), (0, 0));
                assert_eq!(cell.y, BASE_HEIGHT + i);
                assert_eq!(cell.material, MaterialKind::Stone);
            }
        }
    }

    #[test]
    fn flat_structures_do_not_add_spire() {
        let placements = compose(&facts_with_structures(&[Structure::House, Structure::Cave]));
        assert_eq!(placements.len(), 49);
    }

    #[test]
    fn material_lookup_is_case_insensitive() {
        assert_eq!(MaterialKind::from_color_code("#8B4513"), MaterialKind::Dirt);
        assert_eq!(MaterialKind::from_color_code("#8b4513"), MaterialKind::Dirt);
        assert_eq!(MaterialKind::from_color_code("#7ec850"), MaterialKind::Grass);
        assert_eq!(MaterialKind::from_color_code("#E8C170"), MaterialKind::Wood);
        assert_eq!(MaterialKind::from_color_code("#4286f4"), MaterialKind::Leaves);
    }

    #[test]
    fn unknown_colors_map_to_dirt() {
        assert_eq!(MaterialKind::from_color_code("#123456"), MaterialKind::Dirt);
        assert_eq!(MaterialKind::from_color_code("#ffffff"), MaterialKind::Dirt);
    }

    #[test]
    fn extracted_palette_overrides_default() {
        let facts = facts_with_colors(&["#7EC850", "#808080"]);
        let placements = compose(&facts);

        assert_eq!(placements.len(), 49);
        // Two-color palette: even distance is grass, odd is stone.
        for p in &placements {
            let expected = if (p.x.abs() + p.z.abs()) % 2 == 0 {
                MaterialKind::Grass
            } else {
                MaterialKind::Stone
            };
            assert_eq!(p.material, expected, "cell ({}, {})", p.x, p.z);
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn placement_serializes_to_voxel_data_shape() {
        let placement = PlacementInstruction::new(-3, 1, 2, MaterialKind::Stone);
        let json = serde_json::to_string(&placement).expect("placement should serialize");
        assert_eq!(json, r#"{"x":-3,"y":1,"z":2,"type":"stone"}"#);
    }
}

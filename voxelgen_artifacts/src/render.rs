//! Svelte artifact rendering.
//!
//! Turns a fact set plus its composed placements into the source text of the
//! front-end artifacts: a component that replays the placements against the
//! voxel store, and a showcase route in canonical and archived flavors.

use serde::Serialize;
use voxelgen_core::{FactSet, PlacementInstruction};

use crate::stamp::GenerationStamp;

/// Rendered artifact set for one generation run.
///
/// The component text is shared by the canonical file and its archived copy;
/// the two route files differ in which component copy they import.
#[derive(Debug, Clone)]
pub struct SceneArtifacts {
    pub component: String,
    pub route: String,
    pub archived_route: String,
}

/// Render all artifacts for one run. Deterministic: the same facts,
/// placements, and stamp always produce identical text.
#[must_use]
pub fn render_scene(
    facts: &FactSet,
    placements: &[PlacementInstruction],
    stamp: &GenerationStamp,
) -> SceneArtifacts {
    let suffix = stamp.file_suffix();
    SceneArtifacts {
        component: render_component(facts, placements),
        route: render_route(stamp, None),
        archived_route: render_route(stamp, Some(suffix.as_str())),
    }
}

fn render_component(facts: &FactSet, placements: &[PlacementInstruction]) -> String {
    let placement_lines = placements
        .iter()
        .map(json_line)
        .collect::<Vec<_>>()
        .join(",\n        ");

    let mut component = format!(
        r#"<script lang="ts">
    import {{ onMount }} from 'svelte';
    import {{ generateFlatTerrain, addVoxel, type VoxelType }} from '../../stores/voxel/voxelGameStore';

    // Colors extracted from analysis
    const colors = {colors};

    // Elements extracted from analysis
    const terrainTypes = {terrain};
    const structures = {structures};
    const patterns = {patterns};

    // Placement instructions composed from the extracted elements
    const placements: {{ x: number; y: number; z: number; type: VoxelType }}[] = [
        {placement_lines}
    ];
"#,
        colors = json_line(&facts.colors),
        terrain = json_line(&facts.terrain),
        structures = json_line(&facts.structures),
        patterns = json_line(&facts.patterns),
    );
    component.push_str(COMPONENT_TAIL);
    component
}

fn render_route(stamp: &GenerationStamp, archive_suffix: Option<&str>) -> String {
    let (component_file, title) = archive_suffix.map_or_else(
        || {
            (
                "CustomVoxelElement.svelte".to_string(),
                "Custom Voxel Element",
            )
        },
        |suffix| {
            (
                format!("CustomVoxelElement_{suffix}.svelte"),
                "Custom Voxel Element (Archived Version)",
            )
        },
    );

    let mut route = format!(
        r#"<script lang="ts">
    import CustomVoxelElement from '$lib/components/voxel/{component_file}';
    import VoxelGameCanvas from '$lib/components/voxel/VoxelGameCanvas.svelte';
</script>

<div class="container">
    <h1>{title}</h1>
    <p>This element was generated based on image analysis on {date}</p>
    <div class="game-container">
        <VoxelGameCanvas />
    </div>
    <CustomVoxelElement />
</div>

"#,
        date = stamp.display_date(),
    );
    route.push_str(ROUTE_STYLE);
    route
}

/// Serialize one value to a single JSON line.
#[expect(
    clippy::expect_used,
    reason = "serializing plain vectors and fieldless enums cannot fail"
)]
fn json_line<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).expect("plain data serialization cannot fail")
}

const COMPONENT_TAIL: &str = r"
    onMount(() => {
        // Generate terrain based on analysis
        generateFlatTerrain(20, 0);

        // Replay the composed scene on top of the flat ground
        for (const placement of placements) {
            addVoxel(placement.type, placement.x, placement.y, placement.z);
        }
    });
</script>

<div>
    <!-- Component content is handled by VoxelGameCanvas -->
</div>

<style>
    /* Any specific styles would go here */
</style>
";

const ROUTE_STYLE: &str = r"<style>
    .container {
        display: flex;
        flex-direction: column;
        align-items: center;
        width: 100%;
        height: 100vh;
    }

    h1 {
        color: white;
        text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.5);
        margin-top: 1rem;
        margin-bottom: 0.5rem;
    }

    p {
        color: white;
        margin-bottom: 1rem;
    }

    .game-container {
        width: 100%;
        height: 80vh;
        position: relative;
    }
</style>
";

use std::path::{Path, PathBuf};

use tracing::info;

use crate::render::SceneArtifacts;
use crate::stamp::GenerationStamp;

/// Component library location inside the front-end project.
const COMPONENT_DIR: &str = "src/lib/components/voxel";

/// Showcase route location inside the front-end project.
const ROUTE_DIR: &str = "src/routes/custom-voxel";

/// Writes rendered artifacts into a front-end project tree.
///
/// Each run produces four files: the canonical component and route the site
/// links to, plus a timestamp-suffixed archive copy of each. Canonical files
/// are overwritten on every run; archive copies accumulate.
pub struct ArtifactSink {
    site_root: PathBuf,
}

/// Paths written by one persist call, in write order.
#[derive(Debug, Clone)]
pub struct PersistedArtifacts {
    pub archived_component: PathBuf,
    pub component: PathBuf,
    pub route: PathBuf,
    pub archived_route: PathBuf,
}

impl ArtifactSink {
    #[must_use]
    pub fn new(site_root: impl Into<PathBuf>) -> Self {
        Self {
            site_root: site_root.into(),
        }
    }

    pub async fn persist(
        &self,
        artifacts: &SceneArtifacts,
        stamp: &GenerationStamp,
    ) -> anyhow::Result<PersistedArtifacts> {
        let suffix = stamp.file_suffix();
        let component_dir = self.site_root.join(COMPONENT_DIR);
        let route_dir = self.site_root.join(ROUTE_DIR);

        let paths = PersistedArtifacts {
            archived_component: component_dir.join(format!("CustomVoxelElement_{suffix}.svelte")),
            component: component_dir.join("CustomVoxelElement.svelte"),
            route: route_dir.join("+page.svelte"),
            archived_route: route_dir.join(format!("+page_{suffix}.svelte")),
        };

        // Archive copy first, then the canonical file the site links to.
        write_artifact(&paths.archived_component, &artifacts.component).await?;
        write_artifact(&paths.component, &artifacts.component).await?;
        write_artifact(&paths.route, &artifacts.route).await?;
        write_artifact(&paths.archived_route, &artifacts.archived_route).await?;

        Ok(paths)
    }
}

async fn write_artifact(path: &Path, content: &str) -> anyhow::Result<()> {
    info!("Writing file: {}", path.display());

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, content).await?;
    Ok(())
}

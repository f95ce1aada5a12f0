//! End-to-end pipeline command.
//!
//! Analyzes an image and immediately generates the voxel scene artifacts
//! from the returned description, saving the intermediate analysis along
//! the way.

use std::path::PathBuf;

use voxelgen_config::Config;

/// Input parameters for the Run command strategy.
#[derive(Debug, Clone)]
pub struct RunInput {
    /// Path to the image file to analyze
    pub image: PathBuf,
    /// Optional model override
    pub model: Option<String>,
    /// Optional site root override
    pub site_root: Option<PathBuf>,
}

/// Strategy for executing the Run command.
#[derive(Debug, Clone, Copy)]
pub struct RunStrategy;

impl super::CommandStrategy for RunStrategy {
    type Input = RunInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        let description = super::describe_image_file(&config, &input.image, input.model).await?;

        let analysis_file = PathBuf::from(super::DEFAULT_ANALYSIS_FILE);
        super::report_and_save_description(&description, &analysis_file).await?;

        let site_root = input
            .site_root
            .unwrap_or_else(|| PathBuf::from(&config.output.site_root));
        super::generate_from_description(&description.text, &site_root).await
    }
}

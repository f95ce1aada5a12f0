//! Image analysis command.
//!
//! Sends an image to the vision provider, prints the returned description,
//! and saves it to a text file for later generation.

use std::path::PathBuf;

use voxelgen_config::Config;

/// Input parameters for the Analyze command strategy.
#[derive(Debug, Clone)]
pub struct AnalyzeInput {
    /// Path to the image file to analyze
    pub image: PathBuf,
    /// Optional model override
    pub model: Option<String>,
    /// Optional output path for the analysis text
    pub output: Option<PathBuf>,
}

/// Strategy for executing the Analyze command.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeStrategy;

impl super::CommandStrategy for AnalyzeStrategy {
    type Input = AnalyzeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        let description = super::describe_image_file(&config, &input.image, input.model).await?;

        let output = input
            .output
            .unwrap_or_else(|| PathBuf::from(super::DEFAULT_ANALYSIS_FILE));
        super::report_and_save_description(&description, &output).await
    }
}

//! Scene generation command.
//!
//! Reads a previously saved analysis file, extracts scene facts from it, and
//! writes the Svelte component and route artifacts into the site tree.

use std::path::PathBuf;

use voxelgen_config::Config;

/// Input parameters for the Generate command strategy.
#[derive(Debug, Clone)]
pub struct GenerateInput {
    /// Path to the saved analysis text file
    pub analysis: PathBuf,
    /// Optional site root override
    pub site_root: Option<PathBuf>,
}

/// Strategy for executing the Generate command.
#[derive(Debug, Clone, Copy)]
pub struct GenerateStrategy;

impl super::CommandStrategy for GenerateStrategy {
    type Input = GenerateInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        if !input.analysis.exists() {
            anyhow::bail!("Analysis file {} does not exist", input.analysis.display());
        }
        let text = tokio::fs::read_to_string(&input.analysis).await?;

        let site_root = input
            .site_root
            .unwrap_or_else(|| PathBuf::from(&config.output.site_root));
        super::generate_from_description(&text, &site_root).await
    }
}

//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically at compile time. Shared pipeline steps (provider construction,
//! image analysis, artifact generation) live here so the `analyze`,
//! `generate`, and `run` strategies stay thin.

use std::path::Path;

use tracing::info;
use voxelgen_artifacts::{ArtifactSink, GenerationStamp, render_scene};
use voxelgen_config::Config;
use voxelgen_core::{
    FactSet, HexColor, ImagePayload, Pattern, SCENE_ANALYSIS_PROMPT, SceneDescription, Structure,
    Terrain, VisionProvider, compose, extract,
};
use voxelgen_providers::OpenAiVisionProvider;

mod analyze;
mod generate;
mod init;
mod run;
mod version;

pub use analyze::{AnalyzeInput, AnalyzeStrategy};
pub use generate::{GenerateInput, GenerateStrategy};
pub use init::InitStrategy;
pub use run::{RunInput, RunStrategy};
pub use version::VersionStrategy;

/// Default file the analysis text is saved to when no output path is given.
const DEFAULT_ANALYSIS_FILE: &str = "image_analysis_result.txt";

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
/// - **Extensibility**: Adding new commands requires only implementing this trait
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    ///
    /// Each strategy can define its own input type, enabling type-safe
    /// parameter passing without runtime casting or boxing.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Build the vision provider from the config, failing fast without a key.
fn build_provider(config: &Config) -> anyhow::Result<OpenAiVisionProvider> {
    let Some(api_key) = config.resolve_openai_api_key() else {
        anyhow::bail!(
            "OPENAI_API_KEY environment variable is not set and the config has no usable api_key. \
             Set one and retry."
        );
    };
    Ok(OpenAiVisionProvider::new(api_key).with_max_tokens(config.analysis.max_tokens))
}

/// Read an image file and obtain its scene description from the provider.
async fn describe_image_file(
    config: &Config,
    image: &Path,
    model_override: Option<String>,
) -> anyhow::Result<SceneDescription> {
    if !image.exists() {
        anyhow::bail!("Image file {} does not exist", image.display());
    }

    let provider = build_provider(config)?;
    let model = model_override.unwrap_or_else(|| config.analysis.model.clone());
    let prompt = config
        .analysis
        .prompt
        .clone()
        .unwrap_or_else(|| SCENE_ANALYSIS_PROMPT.to_string());

    let bytes = tokio::fs::read(image).await?;
    let payload = ImagePayload::for_file(image, bytes);

    info!("Analyzing image: {}", image.display());
    provider.describe_image(&payload, &prompt, &model).await
}

/// Print the analysis between banners and save it for later generation.
async fn report_and_save_description(
    description: &SceneDescription,
    output: &Path,
) -> anyhow::Result<()> {
    println!();
    println!("=== Image Analysis Result ===");
    println!();
    println!("{}", description.text);
    println!();
    println!("============================");
    println!();

    if let Some(usage) = &description.usage {
        info!(
            "Token usage: prompt={}, completion={}, total={}",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    tokio::fs::write(output, &description.text).await?;
    println!("Analysis saved to {}", output.display());
    Ok(())
}

/// Extract, compose, render, and persist artifacts for a description.
async fn generate_from_description(text: &str, site_root: &Path) -> anyhow::Result<()> {
    let facts = extract(text);
    print_extracted_elements(&facts);

    let placements = compose(&facts);
    let stamp = GenerationStamp::now();
    let artifacts = render_scene(&facts, &placements, &stamp);

    let sink = ArtifactSink::new(site_root);
    let written = sink.persist(&artifacts, &stamp).await?;

    println!(
        "Generated Svelte component at {}",
        written.archived_component.display()
    );
    println!("Generated Svelte component at {}", written.component.display());
    println!("Generated route page at {}", written.route.display());
    println!(
        "Archived version saved to {}",
        written.archived_route.display()
    );
    println!();
    println!("You can now view your custom voxel element at /custom-voxel");
    Ok(())
}

fn print_extracted_elements(facts: &FactSet) {
    let colors: Vec<&str> = facts.colors.iter().map(HexColor::as_str).collect();
    let terrain: Vec<&str> = facts.terrain.iter().copied().map(Terrain::keyword).collect();
    let structures: Vec<&str> = facts
        .structures
        .iter()
        .copied()
        .map(Structure::keyword)
        .collect();
    let patterns: Vec<&str> = facts
        .patterns
        .iter()
        .copied()
        .map(Pattern::keyword)
        .collect();

    println!();
    println!("=== Extracted Elements ===");
    println!("Colors: {colors:?}");
    println!("Terrain Types: {terrain:?}");
    println!("Structures: {structures:?}");
    println!("Patterns: {patterns:?}");
}

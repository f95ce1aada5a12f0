#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    AnalyzeInput, AnalyzeStrategy, CommandStrategy, GenerateInput, GenerateStrategy, InitStrategy,
    RunInput, RunStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "voxelgen")]
#[command(about = "Turn image descriptions into voxel scene artifacts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe an image and save the analysis text
    Analyze {
        /// Path to the image file
        image: PathBuf,

        /// Model to use
        #[arg(short = 'M', long)]
        model: Option<String>,

        /// File to save the analysis to
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Generate voxel scene artifacts from a saved analysis
    Generate {
        /// Path to the saved analysis file
        analysis: PathBuf,

        /// Front-end project root that receives the artifacts
        #[arg(short = 's', long)]
        site_root: Option<PathBuf>,
    },
    /// Describe an image and generate artifacts in one run
    Run {
        /// Path to the image file
        image: PathBuf,

        /// Model to use
        #[arg(short = 'M', long)]
        model: Option<String>,

        /// Front-end project root that receives the artifacts
        #[arg(short = 's', long)]
        site_root: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            image,
            model,
            output,
        } => {
            AnalyzeStrategy
                .execute(AnalyzeInput {
                    image,
                    model,
                    output,
                })
                .await
        }
        Commands::Generate {
            analysis,
            site_root,
        } => {
            GenerateStrategy
                .execute(GenerateInput {
                    analysis,
                    site_root,
                })
                .await
        }
        Commands::Run {
            image,
            model,
            site_root,
        } => {
            RunStrategy
                .execute(RunInput {
                    image,
                    model,
                    site_root,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}

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
    clippy::missing_errors_doc,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]

use std::path::Path;

use async_trait::async_trait;

pub mod compose;
pub mod extract;
pub mod facts;

pub use compose::{DEFAULT_PALETTE, MaterialKind, PlacementInstruction, compose};
pub use extract::extract;
pub use facts::{FactSet, HexColor, Pattern, Structure, Terrain};

/// Instruction prompt sent to the vision provider alongside the image.
///
/// The extractor's vocabulary is tuned to the kind of description this
/// prompt elicits: explicit hex codes, terrain words, structure words.
pub const SCENE_ANALYSIS_PROMPT: &str = "Please analyze this image and describe it in detail for implementation in a voxel game. Focus on elements like colors, shapes, patterns, and structures that could be recreated with code. If it's a texture or pattern, describe how it could be generated procedurally. Be specific about colors (provide hex codes if possible).";

/// A raw image plus the MIME type used when encoding it for transport.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl ImagePayload {
    #[must_use]
    pub const fn new(bytes: Vec<u8>, mime: String) -> Self {
        Self { bytes, mime }
    }

    /// Build a payload for an image file, guessing the MIME type from the
    /// file extension. Unknown extensions fall back to JPEG.
    #[must_use]
    pub fn for_file(path: &Path, bytes: Vec<u8>) -> Self {
        let mime = path
            .extension()
            .and_then(|e| e.to_str())
            .map_or("image/jpeg", mime_for_extension);
        Self::new(bytes, mime.to_string())
    }
}

fn mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/jpeg",
    }
}

/// Natural-language description of an image, as returned by a provider.
#[derive(Debug, Clone)]
pub struct SceneDescription {
    pub text: String,
    pub usage: Option<Usage>,
}

/// Token accounting reported by the provider, when available.
#[derive(Debug, Clone)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// An image-analysis backend: give it an image and an instruction prompt,
/// get back free-form descriptive text.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    async fn describe_image(
        &self,
        image: &ImagePayload,
        prompt: &str,
        model: &str,
    ) -> anyhow::Result<SceneDescription>;

    fn default_model(&self) -> &str;
}

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

mod render;
mod sink;
mod stamp;

pub use render::{SceneArtifacts, render_scene};
pub use sink::{ArtifactSink, PersistedArtifacts};
pub use stamp::GenerationStamp;

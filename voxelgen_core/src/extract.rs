//! Fact extraction from image descriptions.
//!
//! Scans free text for hex color codes and the closed scene vocabularies.
//! Extraction is a pure, total function: text with no recognizable content
//! yields an empty fact set, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

use crate::facts::{FactSet, HexColor, Pattern, Structure, Terrain};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| compile(r"#[0-9A-Fa-f]{6}"));
static TERRAIN_WORDS: Lazy<Regex> =
    Lazy::new(|| keyword_alternation(&Terrain::ALL.map(Terrain::keyword)));
static STRUCTURE_WORDS: Lazy<Regex> =
    Lazy::new(|| keyword_alternation(&Structure::ALL.map(Structure::keyword)));
static PATTERN_WORDS: Lazy<Regex> =
    Lazy::new(|| keyword_alternation(&Pattern::ALL.map(Pattern::keyword)));

#[expect(
    clippy::expect_used,
    reason = "every pattern is a compile-time constant covered by tests"
)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("vocabulary pattern compiles")
}

/// Case-insensitive whole-word alternation over a fixed keyword list.
fn keyword_alternation(keywords: &[&str]) -> Regex {
    compile(&format!(r"(?i)\b(?:{})\b", keywords.join("|")))
}

/// Scan `text` for scene facts.
///
/// Colors are collected in order of first occurrence and may repeat;
/// vocabulary matches are case-insensitive whole words and deduplicate
/// through the set fields.
#[must_use]
pub fn extract(text: &str) -> FactSet {
    let mut facts = FactSet::default();

    for found in HEX_COLOR.find_iter(text) {
        if let Ok(color) = HexColor::from_str(found.as_str()) {
            facts.colors.push(color);
        }
    }

    for found in TERRAIN_WORDS.find_iter(text) {
        if let Ok(terrain) = Terrain::from_str(found.as_str()) {
            facts.terrain.insert(terrain);
        }
    }

    for found in STRUCTURE_WORDS.find_iter(text) {
        if let Ok(structure) = Structure::from_str(found.as_str()) {
            facts.structures.insert(structure);
        }
    }

    for found in PATTERN_WORDS.find_iter(text) {
        if let Ok(pattern) = Pattern::from_str(found.as_str()) {
            facts.patterns.insert(pattern);
        }
    }

    facts
}

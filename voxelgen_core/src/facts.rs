//! Scene fact types.
//!
//! A fact set is the structured result of scanning an image description for
//! known vocabulary and hex color codes. The vocabularies are closed: every
//! set field only ever holds variants of its enum, so matching and testing
//! stay exhaustive.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Terrain vocabulary recognized in descriptions.
///
/// Variant order is the scan order of the vocabulary, which makes
/// `BTreeSet<Terrain>` iterate (and serialize) the same way the keyword
/// list is walked.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Terrain {
    Mountain = 0,
    Forest = 1,
    Plain = 2,
    Desert = 3,
    Water = 4,
    Lake = 5,
    River = 6,
    Grass = 7,
}

impl Terrain {
    /// Every terrain keyword, in vocabulary order.
    pub const ALL: [Self; 8] = [
        Self::Mountain,
        Self::Forest,
        Self::Plain,
        Self::Desert,
        Self::Water,
        Self::Lake,
        Self::River,
        Self::Grass,
    ];

    /// The lowercase keyword this variant is matched by.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Mountain => "mountain",
            Self::Forest => "forest",
            Self::Plain => "plain",
            Self::Desert => "desert",
            Self::Water => "water",
            Self::Lake => "lake",
            Self::River => "river",
            Self::Grass => "grass",
        }
    }
}

impl FromStr for Terrain {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mountain" => Ok(Self::Mountain),
            "forest" => Ok(Self::Forest),
            "plain" => Ok(Self::Plain),
            "desert" => Ok(Self::Desert),
            "water" => Ok(Self::Water),
            "lake" => Ok(Self::Lake),
            "river" => Ok(Self::River),
            "grass" => Ok(Self::Grass),
            _ => Err("unknown terrain keyword"),
        }
    }
}

/// Structure vocabulary recognized in descriptions.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Structure {
    House = 0,
    Tree = 1,
    Building = 2,
    Cave = 3,
    Tower = 4,
}

impl Structure {
    /// Every structure keyword, in vocabulary order.
    pub const ALL: [Self; 5] = [
        Self::House,
        Self::Tree,
        Self::Building,
        Self::Cave,
        Self::Tower,
    ];

    /// The lowercase keyword this variant is matched by.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Tree => "tree",
            Self::Building => "building",
            Self::Cave => "cave",
            Self::Tower => "tower",
        }
    }
}

impl FromStr for Structure {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "house" => Ok(Self::House),
            "tree" => Ok(Self::Tree),
            "building" => Ok(Self::Building),
            "cave" => Ok(Self::Cave),
            "tower" => Ok(Self::Tower),
            _ => Err("unknown structure keyword"),
        }
    }
}

/// Pattern vocabulary recognized in descriptions.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Pattern {
    Checkered = 0,
    Striped = 1,
    Dotted = 2,
    Grid = 3,
    Noise = 4,
    Perlin = 5,
}

impl Pattern {
    /// Every pattern keyword, in vocabulary order.
    pub const ALL: [Self; 6] = [
        Self::Checkered,
        Self::Striped,
        Self::Dotted,
        Self::Grid,
        Self::Noise,
        Self::Perlin,
    ];

    /// The lowercase keyword this variant is matched by.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Checkered => "checkered",
            Self::Striped => "striped",
            Self::Dotted => "dotted",
            Self::Grid => "grid",
            Self::Noise => "noise",
            Self::Perlin => "perlin",
        }
    }
}

impl FromStr for Pattern {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "checkered" => Ok(Self::Checkered),
            "striped" => Ok(Self::Striped),
            "dotted" => Ok(Self::Dotted),
            "grid" => Ok(Self::Grid),
            "noise" => Ok(Self::Noise),
            "perlin" => Ok(Self::Perlin),
            _ => Err("unknown pattern keyword"),
        }
    }
}

/// A `#RRGGBB` color code, stored exactly as it appeared in the source text.
///
/// Case is preserved; comparisons against the material table are
/// case-insensitive on the consumer side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(String);

impl HexColor {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid_code(s: &str) -> bool {
        s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl FromStr for HexColor {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid_code(s) {
            Ok(Self(s.to_string()))
        } else {
            Err("expected '#' followed by exactly six hex digits")
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if Self::is_valid_code(&s) {
            Ok(Self(s))
        } else {
            Err("expected '#' followed by exactly six hex digits")
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structured facts extracted from one image description.
///
/// Produced once per input text, immutable thereafter. `colors` keeps the
/// order of first occurrence and may contain duplicates; the three keyword
/// fields are sets and never repeat a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSet {
    pub colors: Vec<HexColor>,
    pub terrain: BTreeSet<Terrain>,
    pub structures: BTreeSet<Structure>,
    pub patterns: BTreeSet<Pattern>,
}

impl FactSet {
    /// True when nothing at all was recognized in the text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.terrain.is_empty()
            && self.structures.is_empty()
            && self.patterns.is_empty()
    }
}

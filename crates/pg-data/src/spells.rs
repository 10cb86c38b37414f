//! Spell, glamour, knack, and rune pools.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::class::Tradition;

/// All the magic a character can be granted, by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellPools {
    /// Fairy glamours.
    pub glamours: Vec<String>,
    /// Minor knacks.
    pub knacks: Vec<String>,
    /// Arcane spells by rank.
    pub arcane: BTreeMap<u32, Vec<String>>,
    /// Holy spells by rank.
    pub holy: BTreeMap<u32, Vec<String>>,
    /// Enchanter runes by tier.
    pub runes: Runes,
}

impl SpellPools {
    /// The ranked pool for a tradition and rank. Empty for enchanters and for
    /// ranks with no spells listed.
    pub fn ranked(&self, tradition: Tradition, rank: u32) -> &[String] {
        let pools = match tradition {
            Tradition::Arcane => &self.arcane,
            Tradition::Holy => &self.holy,
            Tradition::Enchanter => return &[],
        };
        pools.get(&rank).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Rune pools, one per tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Runes {
    /// Lesser runes.
    pub lesser: Vec<String>,
    /// Greater runes.
    pub greater: Vec<String>,
    /// Mighty runes.
    pub mighty: Vec<String>,
}

impl Runes {
    /// The pool for `tier`.
    pub fn pool(&self, tier: RuneTier) -> &[String] {
        match tier {
            RuneTier::Lesser => &self.lesser,
            RuneTier::Greater => &self.greater,
            RuneTier::Mighty => &self.mighty,
        }
    }
}

/// The three tiers of enchanter rune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuneTier {
    /// Everyday runes.
    Lesser,
    /// Rarer, stronger runes.
    Greater,
    /// Once-in-a-lifetime runes.
    Mighty,
}

impl RuneTier {
    /// All tiers, weakest first.
    pub const ALL: [RuneTier; 3] = [Self::Lesser, Self::Greater, Self::Mighty];
}

impl std::fmt::Display for RuneTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lesser => write!(f, "Lesser"),
            Self::Greater => write!(f, "Greater"),
            Self::Mighty => write!(f, "Mighty"),
        }
    }
}

//! Class magic rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One class's reference entry. Classes with no entry have no magic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassData {
    /// The class's spellcasting rule, if it casts.
    #[serde(default)]
    pub magic: Option<ClassMagic>,
}

/// A class's spellcasting rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMagic {
    /// Which tradition the class draws from.
    #[serde(rename = "type")]
    pub tradition: Tradition,
    /// Level → spell rank → number of spells known (arcane and holy).
    #[serde(default)]
    pub spells_by_level: BTreeMap<u32, BTreeMap<u32, usize>>,
    /// Level → number of glamours known (enchanters).
    #[serde(default)]
    pub glamours_by_level: BTreeMap<u32, usize>,
}

impl ClassMagic {
    /// Rank → count for `level`, ascending by rank. Empty when the level is
    /// not listed.
    pub fn spells_at(&self, level: u32) -> Vec<(u32, usize)> {
        self.spells_by_level
            .get(&level)
            .map(|ranks| ranks.iter().map(|(r, c)| (*r, *c)).collect())
            .unwrap_or_default()
    }

    /// Glamours known at `level`, zero when the level is not listed.
    pub fn glamours_at(&self, level: u32) -> usize {
        self.glamours_by_level.get(&level).copied().unwrap_or(0)
    }
}

/// Spellcasting traditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tradition {
    /// Magicians' ranked arcane spells.
    Arcane,
    /// Clerics' and friars' ranked holy spells.
    Holy,
    /// Enchanters' glamours and runes.
    Enchanter,
}

impl std::fmt::Display for Tradition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arcane => write!(f, "arcane"),
            Self::Holy => write!(f, "holy"),
            Self::Enchanter => write!(f, "enchanter"),
        }
    }
}

//! Kindreds: the playable folk of the wood.

use serde::{Deserialize, Serialize};

use pg_dice::RollTable;

/// One kindred's reference entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kindred {
    /// Display name, e.g. "Grimalkin".
    pub name: String,
    /// Class an adventurer of this kindred follows, by 1d20 roll.
    pub adventurer_class_table: RollTable<String>,
    /// Magic every member of the kindred is born with.
    #[serde(default)]
    pub magic: Option<InnateMagic>,
}

/// Innate magic granted by kindred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnateMagic {
    /// What kind of magic is granted.
    #[serde(rename = "type")]
    pub kind: InnateKind,
    /// How many are granted (knacks always grant one).
    #[serde(default = "one")]
    pub count: usize,
}

fn one() -> usize {
    1
}

/// The kinds of innate magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InnateKind {
    /// Fairy glamours drawn from the shared glamour pool.
    Glamour,
    /// A single minor knack.
    Knack,
}

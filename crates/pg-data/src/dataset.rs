//! The full reference dataset and its loaders.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use pg_dice::RollTable;

use crate::alignment::Alignment;
use crate::class::ClassData;
use crate::error::{DataError, DataResult};
use crate::kindred::Kindred;
use crate::names::NamePools;
use crate::spells::SpellPools;
use crate::validate::{ValidationIssue, validate};

/// A knightly house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    /// The alignment every knight of the house shares.
    pub alignment: Alignment,
}

/// Quests a party may be on, by the party's alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestPools {
    /// Quests for lawful parties.
    #[serde(rename = "Lawful")]
    pub lawful: Vec<String>,
    /// Quests for neutral parties.
    #[serde(rename = "Neutral")]
    pub neutral: Vec<String>,
    /// Quests for chaotic parties.
    #[serde(rename = "Chaotic")]
    pub chaotic: Vec<String>,
}

impl QuestPools {
    /// The quest pool for `alignment`.
    pub fn for_alignment(&self, alignment: Alignment) -> &[String] {
        match alignment {
            Alignment::Lawful => &self.lawful,
            Alignment::Neutral => &self.neutral,
            Alignment::Chaotic => &self.chaotic,
        }
    }
}

/// The raw JSON text of each data file.
#[derive(Debug, Clone, Copy)]
pub struct DataSources<'a> {
    /// `adventurer_kindred.json`
    pub adventurer_kindred: &'a str,
    /// `kindreds.json`
    pub kindreds: &'a str,
    /// `alignments.json`
    pub alignments: &'a str,
    /// `quests.json`
    pub quests: &'a str,
    /// `names.json`
    pub names: &'a str,
    /// `classes.json`
    pub classes: &'a str,
    /// `spells_refactored.json`
    pub spells: &'a str,
    /// `houses.json`
    pub houses: &'a str,
}

impl DataSources<'static> {
    /// The dataset compiled into this crate.
    pub const BUILTIN: DataSources<'static> = DataSources {
        adventurer_kindred: include_str!("../data/adventurer_kindred.json"),
        kindreds: include_str!("../data/kindreds.json"),
        alignments: include_str!("../data/alignments.json"),
        quests: include_str!("../data/quests.json"),
        names: include_str!("../data/names.json"),
        classes: include_str!("../data/classes.json"),
        spells: include_str!("../data/spells_refactored.json"),
        houses: include_str!("../data/houses.json"),
    };
}

/// Every table the generator reads from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    /// Kindred id by 1d12 roll.
    pub adventurer_kindred: RollTable<String>,
    /// Kindred entries by id.
    pub kindreds: BTreeMap<String, Kindred>,
    /// Party alignment by 1d6 roll.
    pub alignments: RollTable<Alignment>,
    /// Quests by alignment.
    pub quests: QuestPools,
    /// Name pools by kindred id.
    pub names: BTreeMap<String, NamePools>,
    /// Class entries by class name.
    pub classes: BTreeMap<String, ClassData>,
    /// Magic pools.
    pub spells: SpellPools,
    /// Knightly houses by name.
    pub houses: BTreeMap<String, House>,
}

impl GameData {
    /// Load and validate the dataset compiled into this crate.
    pub fn builtin() -> DataResult<Self> {
        Self::from_sources(&DataSources::BUILTIN)
    }

    /// Load and validate the eight data files in `dir`.
    pub fn from_dir(dir: &Path) -> DataResult<Self> {
        let read = |file: &str| {
            let path = dir.join(file);
            std::fs::read_to_string(&path).map_err(|source| DataError::Io { path, source })
        };

        let adventurer_kindred = read("adventurer_kindred.json")?;
        let kindreds = read("kindreds.json")?;
        let alignments = read("alignments.json")?;
        let quests = read("quests.json")?;
        let names = read("names.json")?;
        let classes = read("classes.json")?;
        let spells = read("spells_refactored.json")?;
        let houses = read("houses.json")?;

        tracing::debug!(dir = %dir.display(), "read dataset files");

        Self::from_sources(&DataSources {
            adventurer_kindred: &adventurer_kindred,
            kindreds: &kindreds,
            alignments: &alignments,
            quests: &quests,
            names: &names,
            classes: &classes,
            spells: &spells,
            houses: &houses,
        })
    }

    /// Parse and validate a dataset from raw JSON text.
    pub fn from_sources(sources: &DataSources<'_>) -> DataResult<Self> {
        let data = Self {
            adventurer_kindred: parse("adventurer_kindred.json", sources.adventurer_kindred)?,
            kindreds: parse("kindreds.json", sources.kindreds)?,
            alignments: parse("alignments.json", sources.alignments)?,
            quests: parse("quests.json", sources.quests)?,
            names: parse("names.json", sources.names)?,
            classes: parse("classes.json", sources.classes)?,
            spells: parse("spells_refactored.json", sources.spells)?,
            houses: parse("houses.json", sources.houses)?,
        };
        data.checked()
    }

    /// Every consistency issue in this dataset, errors and warnings alike.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate(self)
    }

    /// Run validation, log warnings, and fail on any error.
    pub fn checked(self) -> DataResult<Self> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(|i| i.is_error);
        for warning in &warnings {
            tracing::warn!("{warning}");
        }
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(DataError::Invalid(errors))
        }
    }

    /// The kindred entry for `id`.
    pub fn kindred(&self, id: &str) -> Option<&Kindred> {
        self.kindreds.get(id)
    }

    /// The class entry for `name`, if the class has one.
    pub fn class(&self, name: &str) -> Option<&ClassData> {
        self.classes.get(name)
    }

    /// Names of every house.
    pub fn house_names(&self) -> Vec<&str> {
        self.houses.keys().map(String::as_str).collect()
    }

    /// Names of the houses of one alignment.
    pub fn houses_aligned(&self, alignment: Alignment) -> Vec<&str> {
        self.houses
            .iter()
            .filter(|(_, house)| house.alignment == alignment)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

fn parse<T: DeserializeOwned>(file: &str, text: &str) -> DataResult<T> {
    serde_json::from_str(text).map_err(|source| DataError::Json {
        file: file.to_string(),
        source,
    })
}

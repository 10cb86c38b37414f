//! Building one party member.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use pg_data::{Alignment, GameData};
use pg_dice::{DiceExpr, RandomSource};

use crate::alignment::{KNIGHT, individual_alignment, party_house};
use crate::config::GenConfig;
use crate::error::{GenError, GenResult};
use crate::magic::{MagicLine, MagicProfile, assign_spells, format_magic};
use crate::names::{NameGenerator, UNKNOWN_KINDRED};

const KINDRED_ROLL: DiceExpr = DiceExpr::new(1, 12, 0);
const CLASS_ROLL: DiceExpr = DiceExpr::new(1, 20, 0);
const LEVEL_ROLL: DiceExpr = DiceExpr::new(1, 3, 0);
const HIGH_LEVEL_ROLL: DiceExpr = DiceExpr::new(1, 6, 3);
const MAGIC_ITEM_ROLL: DiceExpr = DiceExpr::new(1, 100, 0);

/// Kinds of magic item a member may carry, one roll each.
pub const MAGIC_ITEM_CATEGORIES: [&str; 7] = [
    "Armour",
    "Ring",
    "Weapon",
    "Potion",
    "Rod/Staff",
    "Scroll",
    "Wondrous",
];

/// Percent chance per category that a member of `level` carries an item.
pub fn magic_item_chance(level: u32) -> u32 {
    level.saturating_mul(5).min(100)
}

/// One member of an adventuring party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Full name, with " of House ..." for knights.
    pub name: String,
    /// Kindred display name.
    pub kindred: String,
    /// Class name.
    pub class: String,
    /// Experience level.
    pub level: u32,
    /// Alignment.
    pub alignment: Alignment,
    /// The knight's house, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<String>,
    /// Magic summary lines.
    pub magic: Vec<MagicLine>,
    /// Magic item categories carried.
    pub magic_items: Vec<String>,
    /// Whether this member leads the party.
    pub is_leader: bool,
    /// The magic the summary was drawn from.
    #[serde(skip)]
    pub profile: MagicProfile,
}

/// Party-wide facts every member build needs.
pub(crate) struct Roster<'a> {
    pub(crate) data: &'a GameData,
    pub(crate) config: &'a GenConfig,
    pub(crate) names: &'a NameGenerator,
    pub(crate) party_alignment: Option<Alignment>,
    pub(crate) higher_level: bool,
    pub(crate) used_names: HashSet<String>,
}

impl Roster<'_> {
    /// Roll one member: kindred, class, level, name, magic, items, then
    /// alignment.
    pub(crate) fn build<R>(&mut self, source: &mut R) -> GenResult<Character>
    where
        R: RandomSource + ?Sized,
    {
        let data = self.data;
        let kindred_id = data
            .adventurer_kindred
            .lookup_required(KINDRED_ROLL.roll(source))?
            .clone();
        let kindred = data
            .kindred(&kindred_id)
            .ok_or_else(|| GenError::UnknownKindred(kindred_id.clone()))?;
        let class = kindred
            .adventurer_class_table
            .lookup_required(CLASS_ROLL.roll(source))?
            .clone();
        let level = if self.higher_level {
            HIGH_LEVEL_ROLL.roll(source)
        } else {
            LEVEL_ROLL.roll(source)
        };

        let name = self.unique_name(&kindred_id, source)?;
        let profile = assign_spells(&kindred_id, &class, level, data, source);
        let magic = format_magic(&class, level, &profile);
        let magic_items = roll_magic_items(level, source);

        let (alignment, house) = match self.party_alignment {
            Some(alignment) if class == KNIGHT => {
                (alignment, party_house(alignment, data, source))
            }
            Some(alignment) => (alignment, None),
            None => individual_alignment(&class, data, source),
        };
        let name = match &house {
            Some(house) => format!("{name} of House {house}"),
            None => name,
        };

        tracing::debug!(
            name = %name,
            kindred = %kindred_id,
            class = %class,
            level,
            %alignment,
            "rolled party member"
        );

        Ok(Character {
            name,
            kindred: kindred.name.clone(),
            class,
            level,
            alignment,
            house,
            magic,
            magic_items,
            is_leader: false,
            profile,
        })
    }

    fn unique_name<R>(&mut self, kindred: &str, source: &mut R) -> GenResult<String>
    where
        R: RandomSource + ?Sized,
    {
        let attempts = self.config.max_name_attempts.max(1);
        for _ in 0..attempts {
            let name = self.names.generate(kindred, self.data, source)?;
            if name == UNKNOWN_KINDRED || self.used_names.insert(name.clone()) {
                return Ok(name);
            }
        }
        Err(GenError::NamesExhausted {
            kindred: kindred.to_string(),
            attempts,
        })
    }
}

/// Roll each magic item category for a member of `level`.
pub fn roll_magic_items<R>(level: u32, source: &mut R) -> Vec<String>
where
    R: RandomSource + ?Sized,
{
    MAGIC_ITEM_CATEGORIES
        .iter()
        .filter(|_| MAGIC_ITEM_ROLL.roll(source) <= magic_item_chance(level))
        .map(|c| c.to_string())
        .collect()
}

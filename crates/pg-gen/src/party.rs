//! Party assembly: members, leader, treasure, mounts, and quest.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use pg_data::{Alignment, GameData};
use pg_dice::{DiceExpr, RandomSource, SeededRng, pick_one};

use crate::alignment::{choose_leader, plurality};
use crate::character::{Character, Roster};
use crate::config::{AlignmentMode, GenConfig};
use crate::error::{GenError, GenResult};
use crate::names::NameGenerator;

const PARTY_SIZE: DiceExpr = DiceExpr::new(1, 4, 4);
const D6: DiceExpr = DiceExpr::new(1, 6, 0);
const COIN_ROLL: DiceExpr = DiceExpr::new(1, 100, 0);
const VALUABLES_ROLL: DiceExpr = DiceExpr::new(1, 4, 0);

/// Chance that the party carries gems, and separately art objects.
const VALUABLES_CHANCE: f64 = 0.1;
/// Chance that the party rides.
const MOUNTS_CHANCE: f64 = 0.75;

/// Treasure carried by the party as a whole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treasure {
    /// Copper pieces.
    pub cp: u32,
    /// Silver pieces.
    pub sp: u32,
    /// Gold pieces.
    pub gp: u32,
    /// Gems, often none.
    pub gems: u32,
    /// Art objects, often none.
    pub art_objects: u32,
}

/// How the party travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mounts {
    /// Horses, when met on a road or in a settlement.
    RidingHorses,
    /// No mounts.
    OnFoot,
}

impl Mounts {
    const RIDING: &'static str = "Riding horses (if encountered on road or in settlement)";
    const ON_FOOT: &'static str = "On foot";

    /// Parse the displayed form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            Self::RIDING => Some(Self::RidingHorses),
            Self::ON_FOOT => Some(Self::OnFoot),
            _ => None,
        }
    }
}

impl fmt::Display for Mounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RidingHorses => f.write_str(Self::RIDING),
            Self::OnFoot => f.write_str(Self::ON_FOOT),
        }
    }
}

impl Serialize for Mounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Mounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("unknown mounts: {s}")))
    }
}

/// A generated adventuring party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    /// Members, leader first.
    #[serde(rename = "party")]
    pub members: Vec<Character>,
    /// Shared treasure.
    pub shared_treasure: Treasure,
    /// How the party travels.
    pub mounts: Mounts,
    /// What the party is up to.
    pub quest: String,
    /// The party's alignment.
    pub alignment: Alignment,
    /// Whether members were rolled at the higher level range.
    pub higher_level: bool,
}

impl Party {
    /// The leader, always the first member.
    pub fn leader(&self) -> Option<&Character> {
        self.members.first().filter(|c| c.is_leader)
    }

    /// Number of members.
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Generate a party from `data`, drawing every random value from `source`.
///
/// Draw order: party size, the higher-level flag, the party alignment (party
/// mode only), each member in turn, the party alignment (individual mode),
/// the leader, coins, gems, art objects, mounts, and finally the quest.
///
/// Member names are pairwise distinct only for kindreds with a naming rule
/// in [`NameGenerator::default`]. Every member of a kindred without one is
/// called [`UNKNOWN_KINDRED`](crate::names::UNKNOWN_KINDRED), so such
/// members can share a name.
pub fn generate_party<R>(data: &GameData, config: &GenConfig, source: &mut R) -> GenResult<Party>
where
    R: RandomSource + ?Sized,
{
    let size = PARTY_SIZE.roll(source) as usize;
    let higher_level = D6.roll(source) == 6;
    let party_alignment = match config.alignment_mode {
        AlignmentMode::Party => Some(*data.alignments.lookup_required(D6.roll(source))?),
        AlignmentMode::Individual => None,
    };

    let names = NameGenerator::default();
    let mut roster = Roster {
        data,
        config,
        names: &names,
        party_alignment,
        higher_level,
        used_names: HashSet::with_capacity(size),
    };
    let mut members = Vec::with_capacity(size);
    for _ in 0..size {
        members.push(roster.build(source)?);
    }

    let alignments: Vec<Alignment> = members.iter().map(|m| m.alignment).collect();
    let alignment = match party_alignment {
        Some(alignment) => alignment,
        None => plurality(&alignments, source),
    };

    if let Some(index) = choose_leader(&alignments, alignment, source) {
        let mut leader = members.remove(index);
        leader.is_leader = true;
        members.insert(0, leader);
    }

    let shared_treasure = Treasure {
        cp: COIN_ROLL.roll(source),
        sp: COIN_ROLL.roll(source),
        gp: COIN_ROLL.roll(source),
        gems: roll_valuables(source),
        art_objects: roll_valuables(source),
    };
    let mounts = if source.chance(MOUNTS_CHANCE) {
        Mounts::RidingHorses
    } else {
        Mounts::OnFoot
    };
    let quest = pick_one(data.quests.for_alignment(alignment), source)
        .cloned()
        .ok_or_else(|| GenError::EmptyPool(format!("{alignment} quests")))?;

    tracing::info!(
        size,
        %alignment,
        mode = %config.alignment_mode,
        higher_level,
        "generated party"
    );

    Ok(Party {
        members,
        shared_treasure,
        mounts,
        quest,
        alignment,
        higher_level,
    })
}

/// Generate a party using a PRNG seeded from `config.seed`.
pub fn generate_seeded(data: &GameData, config: &GenConfig) -> GenResult<Party> {
    let mut source = SeededRng::new(config.seed);
    generate_party(data, config, &mut source)
}

fn roll_valuables<R>(source: &mut R) -> u32
where
    R: RandomSource + ?Sized,
{
    if source.chance(VALUABLES_CHANCE) {
        VALUABLES_ROLL.roll(source)
    } else {
        0
    }
}

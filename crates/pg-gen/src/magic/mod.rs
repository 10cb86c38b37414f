//! Magic assignment for a single character.
//!
//! A character's [`MagicProfile`] is built in a fixed order so that a run can
//! be replayed draw for draw:
//!
//! 1. innate kindred magic (glamours or a knack),
//! 2. ranked arcane or holy spells, lowest rank first, never repeating a
//!    name already drawn at a lower rank,
//! 3. enchanter glamours (added to any innate ones), then one rune roll per
//!    level from 1 up to the character's level.
//!
//! [`format_magic`] turns a profile into display lines.

pub mod format;
pub mod runes;

use std::collections::BTreeMap;

use pg_data::{GameData, InnateKind, RuneTier, Tradition};
use pg_dice::{RandomSource, pick_one, pick_unique};

pub use format::{MagicLine, format_magic};
pub use runes::{Frequency, Period, rune_frequency};

/// Rank → spell names newly learned at that rank.
pub type Spellbook = BTreeMap<u32, Vec<String>>;

/// Tier → rune name → times acquired.
pub type RuneBook = BTreeMap<RuneTier, BTreeMap<String, u32>>;

/// Everything magical a character knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MagicProfile {
    /// Glamours, innate first, without repeats.
    pub glamours: Vec<String>,
    /// A single knack.
    pub knack: Option<String>,
    /// Arcane spells by rank. Absent when no spell was drawn.
    pub arcane: Option<Spellbook>,
    /// Holy spells by rank. Absent when no spell was drawn.
    pub holy: Option<Spellbook>,
    /// Enchanter runes. Absent when no rune was acquired.
    pub runes: Option<RuneBook>,
}

impl MagicProfile {
    /// Whether the character knows no magic at all.
    pub fn is_empty(&self) -> bool {
        self.glamours.is_empty()
            && self.knack.is_none()
            && self.arcane.is_none()
            && self.holy.is_none()
            && self.runes.is_none()
    }
}

/// Build the magic profile of a character of kindred id `kindred`, class
/// `class`, at `level`.
pub fn assign_spells<R>(
    kindred: &str,
    class: &str,
    level: u32,
    data: &GameData,
    source: &mut R,
) -> MagicProfile
where
    R: RandomSource + ?Sized,
{
    let pools = &data.spells;
    let mut profile = MagicProfile::default();

    if let Some(innate) = data.kindred(kindred).and_then(|k| k.magic) {
        match innate.kind {
            InnateKind::Glamour => {
                profile.glamours = pick_unique(innate.count, &pools.glamours, &[], source);
            }
            InnateKind::Knack => {
                profile.knack = pick_one(&pools.knacks, source).cloned();
            }
        }
    }

    let Some(magic) = data.class(class).and_then(|c| c.magic.as_ref()) else {
        return profile;
    };

    match magic.tradition {
        Tradition::Arcane | Tradition::Holy => {
            let mut book = Spellbook::new();
            let mut known: Vec<String> = Vec::new();
            for (rank, count) in magic.spells_at(level) {
                let drawn = pick_unique(count, pools.ranked(magic.tradition, rank), &known, source);
                let new = drawn[known.len()..].to_vec();
                if !new.is_empty() {
                    known.extend(new.iter().cloned());
                    book.insert(rank, new);
                }
            }
            if !book.is_empty() {
                if magic.tradition == Tradition::Arcane {
                    profile.arcane = Some(book);
                } else {
                    profile.holy = Some(book);
                }
            }
        }
        Tradition::Enchanter => {
            profile.glamours = pick_unique(
                magic.glamours_at(level),
                &pools.glamours,
                &profile.glamours,
                source,
            );
            profile.runes = acquire_runes(level, data, source);
        }
    }

    profile
}

fn acquire_runes<R>(level: u32, data: &GameData, source: &mut R) -> Option<RuneBook>
where
    R: RandomSource + ?Sized,
{
    let mut book = RuneBook::new();
    for at_level in 1..=level {
        let total = runes::RUNE_ROLL.roll(source) + runes::level_modifier(at_level);
        let Some(tier) = runes::rune_tier(total) else {
            tracing::debug!(level = at_level, total, "rune roll earned nothing");
            continue;
        };
        let Some(rune) = pick_one(data.spells.runes.pool(tier), source) else {
            continue;
        };
        tracing::debug!(level = at_level, total, %tier, rune = %rune, "rune acquired");
        *book
            .entry(tier)
            .or_default()
            .entry(rune.clone())
            .or_insert(0) += 1;
    }
    if book.is_empty() { None } else { Some(book) }
}

//! Adventuring party generation.
//!
//! Rolls a party of five to eight adventurers against a [`GameData`]
//! dataset: kindred, class, level, a unique name, magic, magic items, and
//! alignment for each member, then a party alignment, a leader, shared
//! treasure, mounts, and a quest.
//!
//! All randomness comes from a [`RandomSource`], so a party is a pure
//! function of the dataset, the [`GenConfig`], and the source.
//!
//! [`GameData`]: pg_data::GameData
//! [`RandomSource`]: pg_dice::RandomSource

pub mod alignment;
pub mod character;
pub mod config;
pub mod error;
pub mod magic;
pub mod names;
pub mod party;

pub use character::{Character, MAGIC_ITEM_CATEGORIES, magic_item_chance};
pub use config::{AlignmentMode, GenConfig};
pub use error::{GenError, GenResult};
pub use magic::{MagicLine, MagicProfile, assign_spells, format_magic};
pub use names::{NameGenerator, NameStyle};
pub use party::{Mounts, Party, Treasure, generate_party, generate_seeded};

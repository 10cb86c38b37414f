//! Reference data for the party generator.
//!
//! The dataset is a handful of JSON files: kindred and class roll tables,
//! name pools, spell pools, quests, and knightly houses. [`GameData`] loads
//! them once (from a directory or from the copy compiled into this crate),
//! validates them, and is then handed by reference to every generation call.

pub mod alignment;
pub mod class;
pub mod dataset;
pub mod error;
pub mod kindred;
pub mod names;
pub mod spells;
pub mod validate;

pub use alignment::Alignment;
pub use class::{ClassData, ClassMagic, Tradition};
pub use dataset::{DataSources, GameData, House, QuestPools};
pub use error::{DataError, DataResult};
pub use kindred::{InnateKind, InnateMagic, Kindred};
pub use names::NamePools;
pub use spells::{RuneTier, Runes, SpellPools};
pub use validate::{ValidationIssue, validate};

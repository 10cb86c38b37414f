//! Dice, roll tables, and random selection for the party generator.
//!
//! Everything random in the generator funnels through [`RandomSource`], so a
//! run can be replayed from a seed ([`SeededRng`]) or driven by a fixed
//! script ([`ScriptedSource`]). On top of that sit dice expressions like
//! `2d6` or `1d4+4`, range-keyed roll tables, and draws without replacement.

pub mod error;
pub mod expr;
pub mod select;
pub mod source;
pub mod table;

pub use error::{DiceError, DiceResult, TableError};
pub use expr::{DiceExpr, MAX_DICE, MAX_SIDES, Roll, roll_str};
pub use select::{pick_one, pick_unique};
pub use source::{RandomSource, ScriptedSource, SeededRng};
pub use table::{RollRange, RollTable};

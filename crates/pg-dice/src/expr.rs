//! Dice expressions: `N`, `NdS`, and `NdS+M`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::source::RandomSource;

/// Most dice one expression may roll.
pub const MAX_DICE: u32 = 1_000;

/// Most sides one die may have.
pub const MAX_SIDES: u32 = 1_000_000;

/// A parsed dice expression.
///
/// A constant (`"7"`) is stored with zero dice and the value as modifier;
/// rolling it draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceExpr {
    /// Number of dice to roll.
    pub count: u32,
    /// Sides on each die.
    pub sides: u32,
    /// Flat amount added to the dice total.
    pub modifier: u32,
}

impl DiceExpr {
    /// `count` dice of `sides` sides plus `modifier`.
    pub const fn new(count: u32, sides: u32, modifier: u32) -> Self {
        Self {
            count,
            sides,
            modifier,
        }
    }

    /// A roll that always yields `value`.
    pub const fn constant(value: u32) -> Self {
        Self::new(0, 0, value)
    }

    /// Smallest reachable total.
    pub fn min(&self) -> u32 {
        self.count.saturating_add(self.modifier)
    }

    /// Largest reachable total.
    pub fn max(&self) -> u32 {
        self.count
            .saturating_mul(self.sides)
            .saturating_add(self.modifier)
    }

    /// Roll every die once and add the modifier.
    pub fn roll<R: RandomSource + ?Sized>(&self, source: &mut R) -> u32 {
        self.roll_detailed(source).total()
    }

    /// Roll and keep the individual faces.
    pub fn roll_detailed<R: RandomSource + ?Sized>(&self, source: &mut R) -> Roll {
        let faces = (0..self.count)
            .map(|_| source.roll_die(self.sides))
            .collect();
        Roll {
            faces,
            modifier: self.modifier,
        }
    }
}

impl FromStr for DiceExpr {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DiceError::Malformed(s.to_string());

        let Some((count, rest)) = s.split_once('d') else {
            return digits(s).map(Self::constant).ok_or_else(malformed);
        };

        let (sides, modifier) = match rest.split_once('+') {
            Some((sides, modifier)) => (sides, Some(modifier)),
            None => (rest, None),
        };

        let count = digits(count).ok_or_else(malformed)?;
        let sides = digits(sides).ok_or_else(malformed)?;
        let modifier = match modifier {
            Some(m) => digits(m).ok_or_else(malformed)?,
            None => 0,
        };

        if count == 0 || sides == 0 {
            return Err(DiceError::Degenerate(s.to_string()));
        }
        let largest = count
            .checked_mul(sides)
            .and_then(|dice| dice.checked_add(modifier));
        if count > MAX_DICE || sides > MAX_SIDES || largest.is_none() {
            return Err(DiceError::TooLarge(s.to_string()));
        }

        Ok(Self::new(count, sides, modifier))
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            return write!(f, "{}", self.modifier);
        }
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.modifier > 0 {
            write!(f, "+{}", self.modifier)?;
        }
        Ok(())
    }
}

/// A non-empty run of ASCII digits that fits in a `u32`.
fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse `spec` and roll it.
pub fn roll_str<R: RandomSource + ?Sized>(spec: &str, source: &mut R) -> DiceResult<u32> {
    let expr: DiceExpr = spec.parse()?;
    Ok(expr.roll(source))
}

/// The outcome of rolling a [`DiceExpr`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// Individual die faces, in the order rolled.
    pub faces: Vec<u32>,
    /// Flat modifier that was added.
    pub modifier: u32,
}

impl Roll {
    /// Sum of the faces plus the modifier, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.faces
            .iter()
            .fold(self.modifier, |sum, face| sum.saturating_add(*face))
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.faces.is_empty() {
            return write!(f, "{}", self.total());
        }
        let faces: Vec<String> = self.faces.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", faces.join(", "))?;
        if self.modifier > 0 {
            write!(f, " + {}", self.modifier)?;
        }
        write!(f, " = {}", self.total())
    }
}

//! Enchanter rune acquisition and usage frequency.

use std::fmt;

use pg_data::RuneTier;
use pg_dice::DiceExpr;

/// The acquisition roll made once per enchanter level.
pub const RUNE_ROLL: DiceExpr = DiceExpr::new(2, 6, 0);

/// Bonus added to the rune roll made at `level`.
pub fn level_modifier(level: u32) -> u32 {
    match level {
        0..=2 => 0,
        3..=5 => 1,
        6..=9 => 2,
        _ => 3,
    }
}

/// The tier a modified rune roll earns, if any.
pub fn rune_tier(total: u32) -> Option<RuneTier> {
    match total {
        12.. => Some(RuneTier::Mighty),
        8..=11 => Some(RuneTier::Greater),
        3..=7 => Some(RuneTier::Lesser),
        _ => None,
    }
}

/// The span of time a rune's uses refresh over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Uses refresh daily.
    Day,
    /// Uses refresh on gaining a level.
    Level,
    /// Uses refresh weekly.
    Week,
    /// Uses refresh yearly.
    Year,
    /// Uses never refresh.
    Ever,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "per day"),
            Self::Level => write!(f, "per level"),
            Self::Week => write!(f, "per week"),
            Self::Year => write!(f, "per year"),
            Self::Ever => write!(f, "ever"),
        }
    }
}

/// How often a rune may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frequency {
    /// Uses per period.
    pub uses: u32,
    /// The period.
    pub period: Period,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.uses {
            1 => write!(f, "Once {}", self.period),
            2 => write!(f, "Twice {}", self.period),
            3 => write!(f, "Thrice {}", self.period),
            n => write!(f, "{n} times {}", self.period),
        }
    }
}

/// Usage frequency of a rune of `tier` known by an enchanter of `level`
/// who has acquired it `acquisitions` times.
///
/// Every acquisition after the first doubles the uses.
pub fn rune_frequency(tier: RuneTier, level: u32, acquisitions: u32) -> Frequency {
    let (base, period): (u32, Period) = match tier {
        RuneTier::Lesser => match level {
            0..=4 => (1, Period::Day),
            5..=9 => (2, Period::Day),
            _ => (3, Period::Day),
        },
        RuneTier::Greater => match level {
            0..=4 => (1, Period::Level),
            5..=9 => (1, Period::Week),
            _ => (1, Period::Day),
        },
        RuneTier::Mighty => match level {
            0..=9 => (1, Period::Ever),
            _ => (1, Period::Year),
        },
    };
    let multiplier = 2u32.saturating_pow(acquisitions.saturating_sub(1));
    Frequency {
        uses: base.saturating_mul(multiplier),
        period,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn modifier_by_level() {
        let mods: Vec<u32> = (1..=12).map(level_modifier).collect();
        assert_eq!(mods, [0, 0, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(rune_tier(2), None);
        assert_eq!(rune_tier(3), Some(RuneTier::Lesser));
        assert_eq!(rune_tier(7), Some(RuneTier::Lesser));
        assert_eq!(rune_tier(8), Some(RuneTier::Greater));
        assert_eq!(rune_tier(11), Some(RuneTier::Greater));
        assert_eq!(rune_tier(12), Some(RuneTier::Mighty));
        assert_eq!(rune_tier(15), Some(RuneTier::Mighty));
    }

    #[test]
    fn base_frequencies() {
        let f = |tier, level| rune_frequency(tier, level, 1).to_string();
        assert_eq!(f(RuneTier::Lesser, 4), "Once per day");
        assert_eq!(f(RuneTier::Lesser, 5), "Twice per day");
        assert_eq!(f(RuneTier::Lesser, 10), "Thrice per day");
        assert_eq!(f(RuneTier::Greater, 3), "Once per level");
        assert_eq!(f(RuneTier::Greater, 9), "Once per week");
        assert_eq!(f(RuneTier::Greater, 12), "Once per day");
        assert_eq!(f(RuneTier::Mighty, 9), "Once ever");
        assert_eq!(f(RuneTier::Mighty, 10), "Once per year");
    }

    #[test]
    fn repeat_acquisitions_double_uses() {
        assert_eq!(rune_frequency(RuneTier::Lesser, 3, 2).to_string(), "Twice per day");
        assert_eq!(rune_frequency(RuneTier::Lesser, 3, 3).to_string(), "4 times per day");
        assert_eq!(rune_frequency(RuneTier::Lesser, 7, 2).to_string(), "4 times per day");
        assert_eq!(rune_frequency(RuneTier::Lesser, 11, 2).to_string(), "6 times per day");
        assert_eq!(rune_frequency(RuneTier::Mighty, 4, 2).to_string(), "Twice ever");
    }

    fn any_tier() -> impl Strategy<Value = RuneTier> {
        prop_oneof![
            Just(RuneTier::Lesser),
            Just(RuneTier::Greater),
            Just(RuneTier::Mighty),
        ]
    }

    proptest! {
        #[test]
        fn another_acquisition_doubles(tier in any_tier(), level in 1u32..15, n in 1u32..8) {
            let once = rune_frequency(tier, level, n);
            let again = rune_frequency(tier, level, n + 1);
            prop_assert_eq!(again.uses, once.uses * 2);
            prop_assert_eq!(again.period, once.period);
        }

        #[test]
        fn modified_rolls_above_two_earn_a_rune(faces in 2u32..=12, level in 1u32..15) {
            let total = faces + level_modifier(level);
            prop_assert_eq!(rune_tier(total).is_some(), total >= 3);
        }
    }
}

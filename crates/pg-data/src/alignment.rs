//! The three alignments.

use serde::{Deserialize, Serialize};

/// A character's or party's alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Alignment {
    /// Order and the common good.
    Lawful,
    /// Balance, or self-interest.
    Neutral,
    /// Disorder and the wild.
    Chaotic,
}

impl Alignment {
    /// All alignments, in table order.
    pub const ALL: [Alignment; 3] = [Self::Lawful, Self::Neutral, Self::Chaotic];

    /// Parse an alignment name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lawful" => Some(Self::Lawful),
            "neutral" => Some(Self::Neutral),
            "chaotic" => Some(Self::Chaotic),
            _ => None,
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lawful => write!(f, "Lawful"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Chaotic => write!(f, "Chaotic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Alignment::parse("lawful"), Some(Alignment::Lawful));
        assert_eq!(Alignment::parse(" CHAOTIC "), Some(Alignment::Chaotic));
        assert_eq!(Alignment::parse("good"), None);
    }

    #[test]
    fn serializes_by_name() {
        assert_eq!(serde_json::to_string(&Alignment::Neutral).unwrap(), "\"Neutral\"");
        let a: Alignment = serde_json::from_str("\"Chaotic\"").unwrap();
        assert_eq!(a, Alignment::Chaotic);
    }
}

//! Display lines for a character's magic.
//!
//! Output is plain labelled text, never markup; whatever renders it is
//! responsible for escaping.

use serde::{Deserialize, Serialize};

use pg_data::RuneTier;

use super::runes::rune_frequency;
use super::{MagicProfile, Spellbook};

/// One line of a character's magic summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicLine {
    /// Heading such as "Glamours", if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The line's content.
    pub text: String,
}

impl MagicLine {
    /// A labelled line.
    pub fn labelled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
        }
    }

    /// A line without a label.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for MagicLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{label}: {}", self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

/// Shown for a cleric or friar who knows no magic yet.
pub const NO_PRAYERS: &str = "No prayers prepared yet.";

/// Render `profile` for a character of `class` at `level`.
pub fn format_magic(class: &str, level: u32, profile: &MagicProfile) -> Vec<MagicLine> {
    let mut lines = Vec::new();

    if profile.is_empty() && matches!(class, "Cleric" | "Friar") {
        lines.push(MagicLine::plain(NO_PRAYERS));
        return lines;
    }

    if !profile.glamours.is_empty() {
        lines.push(MagicLine::labelled("Glamours", profile.glamours.join(", ")));
    }
    if let Some(knack) = &profile.knack {
        lines.push(MagicLine::labelled("Knack", knack.clone()));
    }
    if let Some(book) = &profile.arcane {
        lines.push(MagicLine::labelled("Arcane Spells", ranked(book)));
    }
    if let Some(book) = &profile.holy {
        lines.push(MagicLine::labelled("Holy Spells", ranked(book)));
    }
    if let Some(runes) = &profile.runes {
        for tier in RuneTier::ALL {
            let Some(known) = runes.get(&tier).filter(|k| !k.is_empty()) else {
                continue;
            };
            let text = known
                .iter()
                .map(|(name, times)| format!("{name} ({})", rune_frequency(tier, level, *times)))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(MagicLine::labelled(format!("{tier} Runes"), text));
        }
    }

    if class == "Bard" {
        let mut targets = String::from("Mortals");
        if level >= 4 {
            targets.push_str(", Animals, Demi-fey");
        }
        if level >= 7 {
            targets.push_str(", Fairies, Monstrosities");
        }
        lines.push(MagicLine::labelled("Unique Ability", "Counter Charm"));
        lines.push(MagicLine::labelled(
            "Enchantment",
            format!("Can fascinate {targets}"),
        ));
    }

    lines
}

fn ranked(book: &Spellbook) -> String {
    book.iter()
        .flat_map(|(rank, names)| names.iter().map(move |n| format!("{n} (Rank {rank})")))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn texts(lines: &[MagicLine]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_cleric_has_no_prayers() {
        let lines = format_magic("Friar", 1, &MagicProfile::default());
        assert_eq!(lines, vec![MagicLine::plain(NO_PRAYERS)]);
        assert!(format_magic("Fighter", 1, &MagicProfile::default()).is_empty());
    }

    #[test]
    fn innate_and_ranked() {
        let profile = MagicProfile {
            glamours: vec!["Awe".into(), "Seeming".into()],
            knack: Some("Root Friend".into()),
            arcane: Some(BTreeMap::from([
                (2, vec!["Knock".into()]),
                (1, vec!["Light".into(), "Decipher".into()]),
            ])),
            ..Default::default()
        };
        assert_eq!(
            texts(&format_magic("Magician", 3, &profile)),
            [
                "Glamours: Awe, Seeming",
                "Knack: Root Friend",
                "Arcane Spells: Light (Rank 1), Decipher (Rank 1), Knock (Rank 2)",
            ]
        );
    }

    #[test]
    fn runes_by_tier_with_frequency() {
        let profile = MagicProfile {
            runes: Some(BTreeMap::from([
                (
                    RuneTier::Lesser,
                    BTreeMap::from([("Whispers".to_string(), 1), ("Fog Wall".to_string(), 2)]),
                ),
                (RuneTier::Mighty, BTreeMap::from([("Trollblood".to_string(), 1)])),
            ])),
            ..Default::default()
        };
        assert_eq!(
            texts(&format_magic("Enchanter", 3, &profile)),
            [
                "Lesser Runes: Fog Wall (Twice per day), Whispers (Once per day)",
                "Mighty Runes: Trollblood (Once ever)",
            ]
        );
    }

    #[test]
    fn bard_abilities_grow_with_level() {
        let empty = MagicProfile::default();
        assert_eq!(
            texts(&format_magic("Bard", 1, &empty)),
            ["Unique Ability: Counter Charm", "Enchantment: Can fascinate Mortals"]
        );
        assert_eq!(
            format_magic("Bard", 4, &empty)[1].text,
            "Can fascinate Mortals, Animals, Demi-fey"
        );
        assert_eq!(
            format_magic("Bard", 7, &empty)[1].text,
            "Can fascinate Mortals, Animals, Demi-fey, Fairies, Monstrosities"
        );
    }

    #[test]
    fn line_serializes_without_empty_label() {
        let json = serde_json::to_value(MagicLine::plain(NO_PRAYERS)).unwrap();
        assert_eq!(json, serde_json::json!({ "text": NO_PRAYERS }));
    }
}

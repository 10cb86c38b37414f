//! Consistency checks over a parsed dataset.
//!
//! Roll tables must cover every value their die can show, every kindred the
//! kindred table names must exist, and every alignment needs quests. Pools
//! that are merely empty are warnings: draws from them saturate to nothing.

use pg_dice::RollTable;

use crate::alignment::Alignment;
use crate::class::Tradition;
use crate::dataset::GameData;
use crate::kindred::InnateKind;
use crate::spells::RuneTier;

/// Die size of the kindred table.
pub const KINDRED_DIE: u32 = 12;
/// Die size of every class table.
pub const CLASS_DIE: u32 = 20;
/// Die size of the alignment table.
pub const ALIGNMENT_DIE: u32 = 6;

/// A problem found in a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Where the problem is (file and key).
    pub subject: String,
    /// What is wrong.
    pub message: String,
    /// Whether generation cannot proceed (true) or merely degrades (false).
    pub is_error: bool,
}

impl ValidationIssue {
    /// An issue that blocks generation.
    pub fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: true,
        }
    }

    /// An issue that only degrades generation.
    pub fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

/// Check a dataset and return every issue found.
pub fn validate(data: &GameData) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_coverage(
        &data.adventurer_kindred,
        KINDRED_DIE,
        "adventurer_kindred.json",
        &mut issues,
    );
    check_coverage(&data.alignments, ALIGNMENT_DIE, "alignments.json", &mut issues);

    for id in data.adventurer_kindred.values() {
        if data.kindred(id).is_none() {
            issues.push(ValidationIssue::error(
                "adventurer_kindred.json",
                format!("kindred \"{id}\" has no entry in kindreds.json"),
            ));
        }
        if !data.names.contains_key(id) {
            issues.push(ValidationIssue::warning(
                "names.json",
                format!("kindred \"{id}\" has no name pools"),
            ));
        }
    }

    let mut knights_possible = false;
    for (id, kindred) in &data.kindreds {
        let subject = format!("kindreds.json: {id}");
        check_coverage(&kindred.adventurer_class_table, CLASS_DIE, &subject, &mut issues);
        knights_possible |= kindred.adventurer_class_table.values().any(|c| c == "Knight");

        if let Some(magic) = kindred.magic {
            let pool_empty = match magic.kind {
                InnateKind::Glamour => data.spells.glamours.is_empty(),
                InnateKind::Knack => data.spells.knacks.is_empty(),
            };
            if pool_empty {
                issues.push(ValidationIssue::warning(
                    subject,
                    format!("innate {:?} magic but the pool is empty", magic.kind),
                ));
            }
        }
    }

    for alignment in Alignment::ALL {
        if data.quests.for_alignment(alignment).is_empty() {
            issues.push(ValidationIssue::error(
                "quests.json",
                format!("no quests for {alignment} parties"),
            ));
        }
    }

    if knights_possible && data.houses.is_empty() {
        issues.push(ValidationIssue::error(
            "houses.json",
            "knights can be rolled but no houses are defined",
        ));
    }

    for (name, class) in &data.classes {
        let Some(magic) = &class.magic else {
            continue;
        };
        let subject = format!("classes.json: {name}");
        match magic.tradition {
            Tradition::Arcane | Tradition::Holy => {
                for ranks in magic.spells_by_level.values() {
                    for rank in ranks.keys() {
                        if data.spells.ranked(magic.tradition, *rank).is_empty() {
                            issues.push(ValidationIssue::warning(
                                subject.clone(),
                                format!("no {} spells of rank {rank}", magic.tradition),
                            ));
                        }
                    }
                }
            }
            Tradition::Enchanter => {
                for tier in RuneTier::ALL {
                    if data.spells.runes.pool(tier).is_empty() {
                        issues.push(ValidationIssue::warning(
                            subject.clone(),
                            format!("no {tier} runes to acquire"),
                        ));
                    }
                }
            }
        }
    }

    issues.dedup();
    issues
}

fn check_coverage<T>(
    table: &RollTable<T>,
    die: u32,
    subject: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    if let Some(gap) = table.first_gap(1, die) {
        issues.push(ValidationIssue::error(
            subject,
            format!("no entry for roll {gap} of 1d{die}"),
        ));
    }
}

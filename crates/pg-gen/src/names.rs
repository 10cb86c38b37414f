//! Kindred naming rules.
//!
//! Each kindred id maps to a [`NameStyle`]; the style decides which pools of
//! the kindred's [`NamePools`] are drawn from and how the parts are joined.
//! Uniqueness within a party is the caller's job.

use std::collections::BTreeMap;

use pg_data::{GameData, NamePools, ValidationIssue};
use pg_dice::{RandomSource, pick_one};

use crate::error::{GenError, GenResult};

/// Name given to a kindred with no naming rule.
pub const UNKNOWN_KINDRED: &str = "Unknown Kindred";

/// How a kindred builds a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// A male, female, or unisex first name (one chance in three each)
    /// followed by a surname.
    Folk,
    /// A whole courtly or rustic name, even odds.
    Elvish,
    /// A first name, which may offer a `"Long/Short"` pair to choose
    /// between, followed by a surname.
    Grimalkin,
}

impl NameStyle {
    /// The pools this style draws from.
    pub fn required_pools(self) -> &'static [&'static str] {
        match self {
            Self::Folk => &["male", "female", "unisex", "surname"],
            Self::Elvish => &["courtly", "rustic"],
            Self::Grimalkin => &["first_name", "surname"],
        }
    }

    /// Build one name from `pools`.
    pub fn generate<R>(self, kindred: &str, pools: &NamePools, source: &mut R) -> GenResult<String>
    where
        R: RandomSource + ?Sized,
    {
        match self {
            Self::Folk => {
                let (pool, pool_name) = match source.pick_index(3) {
                    0 => (&pools.male, "male"),
                    1 => (&pools.female, "female"),
                    _ => (&pools.unisex, "unisex"),
                };
                let first = draw(pool, kindred, pool_name, source)?;
                let surname = draw(&pools.surname, kindred, "surname", source)?;
                Ok(format!("{first} {surname}"))
            }
            Self::Elvish => {
                if source.chance(0.5) {
                    draw(&pools.courtly, kindred, "courtly", source)
                } else {
                    draw(&pools.rustic, kindred, "rustic", source)
                }
            }
            Self::Grimalkin => {
                let drawn = draw(&pools.first_name, kindred, "first_name", source)?;
                let first = match drawn.split_once('/') {
                    Some((long, short)) => {
                        let form = if source.chance(0.5) { long } else { short };
                        form.to_string()
                    }
                    None => drawn.clone(),
                };
                let surname = draw(&pools.surname, kindred, "surname", source)?;
                Ok(format!("{first} {surname}"))
            }
        }
    }
}

fn draw<R>(pool: &[String], kindred: &str, pool_name: &str, source: &mut R) -> GenResult<String>
where
    R: RandomSource + ?Sized,
{
    pick_one(pool, source)
        .cloned()
        .ok_or_else(|| GenError::EmptyPool(format!("{kindred} {pool_name} names")))
}

fn pool<'a>(pools: &'a NamePools, name: &str) -> &'a [String] {
    match name {
        "male" => &pools.male,
        "female" => &pools.female,
        "unisex" => &pools.unisex,
        "surname" => &pools.surname,
        "courtly" => &pools.courtly,
        "rustic" => &pools.rustic,
        "first_name" => &pools.first_name,
        _ => &[],
    }
}

/// Naming rules keyed by kindred id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGenerator {
    rules: BTreeMap<String, NameStyle>,
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new()
            .with_rule("breggle", NameStyle::Folk)
            .with_rule("human", NameStyle::Folk)
            .with_rule("mossling", NameStyle::Folk)
            .with_rule("woodgrue", NameStyle::Folk)
            .with_rule("elf", NameStyle::Elvish)
            .with_rule("grimalkin", NameStyle::Grimalkin)
    }
}

impl NameGenerator {
    /// A generator with no rules; every kindred is unknown.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Add or replace the rule for a kindred.
    pub fn with_rule(mut self, kindred: impl Into<String>, style: NameStyle) -> Self {
        self.rules.insert(kindred.into(), style);
        self
    }

    /// The rule for a kindred id.
    pub fn style_for(&self, kindred: &str) -> Option<NameStyle> {
        self.rules.get(kindred).copied()
    }

    /// Generate a name for a kindred id.
    ///
    /// A kindred with no rule gets [`UNKNOWN_KINDRED`] and no draws are made.
    /// A rule whose pool is missing or empty is an error.
    pub fn generate<R>(&self, kindred: &str, data: &GameData, source: &mut R) -> GenResult<String>
    where
        R: RandomSource + ?Sized,
    {
        let Some(style) = self.style_for(kindred) else {
            return Ok(UNKNOWN_KINDRED.to_string());
        };
        let empty = NamePools::default();
        let pools = data.names.get(kindred).unwrap_or(&empty);
        style.generate(kindred, pools, source)
    }

    /// Check that every kindred the dataset can roll has a rule and the
    /// pools that rule needs.
    pub fn check(&self, data: &GameData) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut seen: Vec<&String> = Vec::new();
        for kindred in data.adventurer_kindred.values() {
            if seen.contains(&kindred) {
                continue;
            }
            seen.push(kindred);

            let subject = format!("names.json: {kindred}");
            let Some(style) = self.style_for(kindred) else {
                issues.push(ValidationIssue::warning(
                    subject,
                    format!("no naming rule, members will be called \"{UNKNOWN_KINDRED}\""),
                ));
                continue;
            };
            let pools = data.names.get(kindred.as_str());
            for name in style.required_pools() {
                if pools.is_none_or(|p| pool(p, name).is_empty()) {
                    issues.push(ValidationIssue::error(
                        subject.clone(),
                        format!("{name} pool is empty"),
                    ));
                }
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_dice::{ScriptedSource, SeededRng};

    fn data() -> GameData {
        GameData::builtin().unwrap()
    }

    fn name(kindred: &str, start: u64) -> String {
        let mut source = ScriptedSource::starting_at(start);
        NameGenerator::default()
            .generate(kindred, &data(), &mut source)
            .unwrap()
    }

    #[test]
    fn folk_name() {
        // male pool, "Brannock", "Gruffwhistle"
        assert_eq!(name("breggle", 0), "Brannock Gruffwhistle");
    }

    #[test]
    fn elvish_names_are_whole() {
        assert_eq!(name("elf", 0), "Lady Gloamingdew");
        assert_eq!(name("elf", 50), "Fernshadow");
    }

    #[test]
    fn grimalkin_picks_one_form() {
        assert_eq!(name("grimalkin", 0), "Bartholomew Grimsby-Purr");
        assert_eq!(name("grimalkin", 1), "Chortle Grimsby-Purr");
    }

    #[test]
    fn grimalkin_short_form() {
        // "Bartholomew/Barty" at cursor 56, then the coin at 57 lands high.
        let mut source = ScriptedSource::starting_at(56);
        let n = NameGenerator::default()
            .generate("grimalkin", &data(), &mut source)
            .unwrap();
        assert!(n.starts_with("Barty "), "{n}");
    }

    #[test]
    fn unknown_kindred() {
        let mut source = ScriptedSource::default();
        let n = NameGenerator::default()
            .generate("dragon", &data(), &mut source)
            .unwrap();
        assert_eq!(n, UNKNOWN_KINDRED);
        assert_eq!(source.draws(), 0);
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut data = data();
        data.names.remove("elf");
        let mut source = SeededRng::new(3);
        let err = NameGenerator::default()
            .generate("elf", &data, &mut source)
            .unwrap_err();
        assert!(matches!(err, GenError::EmptyPool(_)));
    }

    #[test]
    fn custom_rule() {
        let names = NameGenerator::new().with_rule("human", NameStyle::Elvish);
        assert_eq!(names.style_for("human"), Some(NameStyle::Elvish));
        assert_eq!(names.style_for("elf"), None);
    }

    #[test]
    fn check_builtin_is_clean() {
        assert!(NameGenerator::default().check(&data()).is_empty());
    }

    #[test]
    fn check_reports_missing_pools_and_rules() {
        let mut data = data();
        data.names.get_mut("grimalkin").unwrap().first_name.clear();
        let names = NameGenerator::default().with_rule("elf", NameStyle::Folk);
        let issues = names.check(&data);

        assert!(issues.iter().any(|i| i.is_error
            && i.subject == "names.json: grimalkin"
            && i.message == "first_name pool is empty"));
        assert!(issues.iter().any(|i| i.subject == "names.json: elf" && i.message == "male pool is empty"));

        let issues = NameGenerator::new().check(&data);
        assert!(issues.iter().all(|i| !i.is_error));
        assert_eq!(issues.len(), 6);
    }
}

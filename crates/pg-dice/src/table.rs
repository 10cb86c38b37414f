//! Roll tables keyed by inclusive ranges.
//!
//! A table is written in JSON as an object whose keys are `"start-end"`
//! strings, e.g. `{"1-2": "breggle", "3-4": "elf", ...}`. Document order is
//! preserved and ranges may not overlap.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TableError;

/// An inclusive range of roll values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollRange {
    /// First value in the range.
    pub start: u32,
    /// Last value in the range.
    pub end: u32,
}

impl RollRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: u32, end: u32) -> Result<Self, TableError> {
        if start > end {
            return Err(TableError::InvalidRange(format!("{start}-{end}")));
        }
        Ok(Self { start, end })
    }

    /// Whether `value` falls inside this range.
    pub fn contains(&self, value: u32) -> bool {
        (self.start..=self.end).contains(&value)
    }

    /// Whether the two ranges share any value.
    pub fn overlaps(&self, other: &RollRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl FromStr for RollRange {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TableError::InvalidRange(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start = start.trim().parse().map_err(|_| invalid())?;
        let end = end.trim().parse().map_err(|_| invalid())?;
        Self::new(start, end).map_err(|_| invalid())
    }
}

impl fmt::Display for RollRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A lookup table from roll ranges to results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollTable<T> {
    entries: Vec<(RollRange, T)>,
}

impl<T> Default for RollTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> RollTable<T> {
    /// Build a table, rejecting overlapping ranges.
    pub fn new(entries: Vec<(RollRange, T)>) -> Result<Self, TableError> {
        for (i, (range, _)) in entries.iter().enumerate() {
            if let Some((other, _)) = entries[..i].iter().find(|(r, _)| r.overlaps(range)) {
                return Err(TableError::Overlap {
                    first: other.to_string(),
                    second: range.to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Build a table from `"start-end"` keys.
    pub fn from_keys<'a, I>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (&'a str, T)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(key, value)| Ok((key.parse()?, value)))
            .collect::<Result<Vec<_>, TableError>>()?;
        Self::new(entries)
    }

    /// The result whose range contains `value`, if any.
    pub fn lookup(&self, value: u32) -> Option<&T> {
        self.entries
            .iter()
            .find(|(range, _)| range.contains(value))
            .map(|(_, result)| result)
    }

    /// Like [`lookup`](Self::lookup), but a miss is an error.
    pub fn lookup_required(&self, value: u32) -> Result<&T, TableError> {
        self.lookup(value).ok_or(TableError::Miss { value })
    }

    /// Whether every value in `low..=high` has an entry.
    pub fn covers(&self, low: u32, high: u32) -> bool {
        (low..=high).all(|v| self.lookup(v).is_some())
    }

    /// The first value in `low..=high` with no entry.
    pub fn first_gap(&self, low: u32, high: u32) -> Option<u32> {
        (low..=high).find(|v| self.lookup(*v).is_none())
    }

    /// All entries in table order.
    pub fn entries(&self) -> &[(RollRange, T)] {
        &self.entries
    }

    /// All results in table order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Serialize> Serialize for RollTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (range, value) in &self.entries {
            map.serialize_entry(&range.to_string(), value)?;
        }
        map.end()
    }
}

struct RollTableVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for RollTableVisitor<T> {
    type Value = RollTable<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from \"start-end\" ranges to results")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, T>()? {
            let range = key.parse().map_err(de::Error::custom)?;
            entries.push((range, value));
        }
        RollTable::new(entries).map_err(de::Error::custom)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RollTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RollTableVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kindreds() -> RollTable<&'static str> {
        RollTable::from_keys([
            ("1-2", "breggle"),
            ("3-4", "elf"),
            ("5-6", "grimalkin"),
            ("7-9", "human"),
            ("10-11", "mossling"),
            ("12-12", "woodgrue"),
        ])
        .unwrap()
    }

    #[test]
    fn range_parse() {
        assert_eq!("3-7".parse::<RollRange>(), RollRange::new(3, 7));
        assert!("7".parse::<RollRange>().is_err());
        assert!("a-b".parse::<RollRange>().is_err());
        assert!("5-2".parse::<RollRange>().is_err());
        assert_eq!(RollRange::new(1, 20).unwrap().to_string(), "1-20");
    }

    #[test]
    fn lookup_hits_each_row() {
        let t = kindreds();
        assert_eq!(t.lookup(1), Some(&"breggle"));
        assert_eq!(t.lookup(2), Some(&"breggle"));
        assert_eq!(t.lookup(8), Some(&"human"));
        assert_eq!(t.lookup(12), Some(&"woodgrue"));
    }

    #[test]
    fn lookup_miss() {
        let t = kindreds();
        assert_eq!(t.lookup(0), None);
        assert_eq!(t.lookup(13), None);
        assert_eq!(t.lookup_required(13), Err(TableError::Miss { value: 13 }));
    }

    #[test]
    fn coverage() {
        let t = kindreds();
        assert!(t.covers(1, 12));
        assert!(!t.covers(1, 20));
        assert_eq!(t.first_gap(1, 20), Some(13));

        let gappy = RollTable::from_keys([("1-3", 'a'), ("5-6", 'b')]).unwrap();
        assert_eq!(gappy.first_gap(1, 6), Some(4));
    }

    #[test]
    fn overlap_rejected() {
        let err = RollTable::from_keys([("1-3", 'a'), ("3-6", 'b')]).unwrap_err();
        assert_eq!(
            err,
            TableError::Overlap {
                first: "1-3".to_string(),
                second: "3-6".to_string()
            }
        );
    }

    #[test]
    fn deserialize_keeps_document_order() {
        let t: RollTable<String> =
            serde_json::from_str(r#"{"4-6": "Neutral", "1-3": "Lawful"}"#).unwrap();
        let order: Vec<&String> = t.values().collect();
        assert_eq!(order, ["Neutral", "Lawful"]);
        assert_eq!(t.lookup(2).map(String::as_str), Some("Lawful"));
    }

    #[test]
    fn deserialize_rejects_bad_tables() {
        assert!(serde_json::from_str::<RollTable<u8>>(r#"{"1to3": 1}"#).is_err());
        assert!(serde_json::from_str::<RollTable<u8>>(r#"{"1-3": 1, "2-4": 2}"#).is_err());
    }

    #[test]
    fn serialize_uses_range_keys() {
        let t = RollTable::from_keys([("1-2", 10u8), ("3-6", 20)]).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"1-2":10,"3-6":20}"#);
    }

    proptest! {
        #[test]
        fn lookup_returns_the_containing_row(split in 1u32..19, value in 0u32..25) {
            let low = format!("1-{split}");
            let high = format!("{}-20", split + 1);
            let t = RollTable::from_keys([(low.as_str(), "low"), (high.as_str(), "high")]).unwrap();
            let expected = if value == 0 || value > 20 {
                None
            } else if value <= split {
                Some(&"low")
            } else {
                Some(&"high")
            };
            prop_assert_eq!(t.lookup(value), expected);
        }
    }
}

//! Integration tests for party generation.
use std::collections::{BTreeMap, HashSet};

use pg_data::{Alignment, DataSources, GameData};
use pg_dice::{ScriptedSource, SeededRng};
use pg_gen::{AlignmentMode, GenConfig, Mounts, generate_party, generate_seeded};
use serde_json::json;

fn builtin() -> GameData {
    GameData::builtin().unwrap()
}

/// A small dataset whose every draw can be followed by hand.
fn fixture() -> GameData {
    GameData::from_sources(&DataSources {
        adventurer_kindred: r#"{"1-6": "human", "7-12": "elf"}"#,
        kindreds: r#"{
            "human": {
                "name": "Human",
                "adventurer_class_table": {"1-10": "Fighter", "11-20": "Knight"}
            },
            "elf": {
                "name": "Elf",
                "adventurer_class_table": {"1-12": "Enchanter", "13-20": "Bard"},
                "magic": {"type": "glamour", "count": 1}
            }
        }"#,
        alignments: r#"{"1-2": "Lawful", "3-4": "Neutral", "5-6": "Chaotic"}"#,
        quests: r#"{
            "Lawful": ["Escort the pilgrim", "Guard the bridge"],
            "Neutral": ["Map the marsh"],
            "Chaotic": ["Rob the abbey", "Burn the mill"]
        }"#,
        names: r#"{
            "human": {
                "male": ["Aldo", "Bert"],
                "female": ["Cora", "Dina"],
                "unisex": ["Ash"],
                "surname": ["Marsh", "Hill", "Wood"]
            },
            "elf": {
                "courtly": ["Lord Starveil", "Lady Dew"],
                "rustic": ["Bramble", "Thistle", "Fern"]
            }
        }"#,
        classes: r#"{
            "Enchanter": {"magic": {"type": "enchanter", "glamours_by_level": {"1": 1, "2": 1, "3": 2}}},
            "Bard": {},
            "Fighter": {},
            "Knight": {}
        }"#,
        spells: r#"{
            "glamours": ["Awe", "Seeming", "Vanishing"],
            "runes": {
                "lesser": ["Fog Wall", "Whispers"],
                "greater": ["Dream Ship"],
                "mighty": ["Trollblood"]
            }
        }"#,
        houses: r#"{
            "Brackenwold": {"alignment": "Lawful"},
            "Malbleat": {"alignment": "Chaotic"}
        }"#,
    })
    .unwrap()
}

// ---------------------------------------------------------------------------
// invariants
// ---------------------------------------------------------------------------

#[test]
fn parties_hold_their_invariants() {
    let data = builtin();
    for seed in 0..200 {
        for mode in [AlignmentMode::Party, AlignmentMode::Individual] {
            let config = GenConfig::default().with_seed(seed).with_alignment_mode(mode);
            let party = generate_seeded(&data, &config).unwrap();

            assert!((5..=8).contains(&party.size()), "seed {seed}: size {}", party.size());

            let names: HashSet<&str> = party.members.iter().map(|m| m.name.as_str()).collect();
            assert_eq!(names.len(), party.size(), "seed {seed}: duplicate names");

            let leaders: Vec<usize> = party
                .members
                .iter()
                .enumerate()
                .filter(|(_, m)| m.is_leader)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(leaders, [0], "seed {seed}: leader not first");

            assert!(data.quests.for_alignment(party.alignment).contains(&party.quest));

            let levels = if party.higher_level { 4..=9 } else { 1..=3 };
            for member in &party.members {
                assert!(levels.contains(&member.level));
                assert!(!member.name.is_empty());
            }
        }
    }
}

#[test]
fn spells_are_unique_per_member() {
    let data = builtin();
    for seed in 0..200 {
        let party = generate_seeded(&data, &GenConfig::default().with_seed(seed)).unwrap();
        for member in &party.members {
            let profile = &member.profile;
            let glamours: HashSet<&String> = profile.glamours.iter().collect();
            assert_eq!(glamours.len(), profile.glamours.len());

            for book in [&profile.arcane, &profile.holy].into_iter().flatten() {
                let all: Vec<&String> = book.values().flatten().collect();
                let unique: HashSet<&String> = all.iter().copied().collect();
                assert_eq!(unique.len(), all.len(), "seed {seed}: repeated spell");
            }
        }
    }
}

#[test]
fn treasure_is_within_range() {
    let data = builtin();
    for seed in 0..100 {
        let party = generate_seeded(&data, &GenConfig::default().with_seed(seed)).unwrap();
        let t = party.shared_treasure;
        for coins in [t.cp, t.sp, t.gp] {
            assert!((1..=100).contains(&coins));
        }
        assert!(t.gems <= 4);
        assert!(t.art_objects <= 4);
    }
}

// ---------------------------------------------------------------------------
// alignment modes
// ---------------------------------------------------------------------------

#[test]
fn party_mode_shares_one_alignment() {
    let data = builtin();
    for seed in 0..100 {
        let party = generate_seeded(&data, &GenConfig::default().with_seed(seed)).unwrap();
        for member in &party.members {
            assert_eq!(member.alignment, party.alignment);
        }
    }
}

#[test]
fn individual_mode_takes_the_plurality() {
    let data = builtin();
    for seed in 0..200 {
        let config = GenConfig::default()
            .with_seed(seed)
            .with_alignment_mode(AlignmentMode::Individual);
        let party = generate_seeded(&data, &config).unwrap();

        let mut counts: BTreeMap<Alignment, usize> = BTreeMap::new();
        for member in &party.members {
            *counts.entry(member.alignment).or_default() += 1;
        }
        let best = counts.values().copied().max().unwrap();
        assert_eq!(counts[&party.alignment], best, "seed {seed}");
        assert_eq!(party.members[0].alignment, party.alignment);
    }
}

#[test]
fn individual_clergy_are_never_chaotic() {
    let data = builtin();
    for seed in 0..200 {
        let config = GenConfig::default()
            .with_seed(seed)
            .with_alignment_mode(AlignmentMode::Individual);
        let party = generate_seeded(&data, &config).unwrap();
        for member in &party.members {
            if member.class == "Cleric" || member.class == "Friar" {
                assert_ne!(member.alignment, Alignment::Chaotic);
            }
            if let Some(house) = &member.house {
                assert_eq!(data.houses[house].alignment, member.alignment);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// reproducibility
// ---------------------------------------------------------------------------

#[test]
fn same_seed_same_party() {
    let data = builtin();
    let config = GenConfig::default().with_seed(1234);
    let mut a = SeededRng::new(1234);
    let mut b = SeededRng::new(1234);
    assert_eq!(
        generate_party(&data, &config, &mut a).unwrap(),
        generate_party(&data, &config, &mut b).unwrap()
    );
}

#[test]
fn scripted_party_snapshot() {
    let data = fixture();
    let mut source = ScriptedSource::starting_at(0);
    let party = generate_party(&data, &GenConfig::default(), &mut source).unwrap();

    assert_eq!(source.draws(), 92);
    assert_eq!(party.mounts, Mounts::OnFoot);
    assert_eq!(
        serde_json::to_value(&party).unwrap(),
        json!({
            "party": [
                {
                    "name": "Fern",
                    "kindred": "Elf",
                    "class": "Enchanter",
                    "level": 1,
                    "alignment": "Neutral",
                    "magic": [
                        { "label": "Glamours", "text": "Awe, Vanishing" },
                        { "label": "Lesser Runes", "text": "Fog Wall (Once per day)" }
                    ],
                    "magicItems": [],
                    "isLeader": true
                },
                {
                    "name": "Bert Wood",
                    "kindred": "Human",
                    "class": "Fighter",
                    "level": 3,
                    "alignment": "Neutral",
                    "magic": [],
                    "magicItems": ["Armour", "Ring", "Weapon", "Potion", "Rod/Staff", "Scroll"],
                    "isLeader": false
                },
                {
                    "name": "Cora Marsh of House Malbleat",
                    "kindred": "Human",
                    "class": "Knight",
                    "level": 1,
                    "alignment": "Neutral",
                    "house": "Malbleat",
                    "magic": [],
                    "magicItems": [],
                    "isLeader": false
                },
                {
                    "name": "Lord Starveil",
                    "kindred": "Elf",
                    "class": "Enchanter",
                    "level": 3,
                    "alignment": "Neutral",
                    "magic": [
                        { "label": "Glamours", "text": "Vanishing, Awe, Seeming" },
                        {
                            "label": "Lesser Runes",
                            "text": "Fog Wall (Once per day), Whispers (Once per day)"
                        },
                        { "label": "Greater Runes", "text": "Dream Ship (Once per level)" }
                    ],
                    "magicItems": [],
                    "isLeader": false
                },
                {
                    "name": "Thistle",
                    "kindred": "Elf",
                    "class": "Bard",
                    "level": 3,
                    "alignment": "Neutral",
                    "magic": [
                        { "label": "Glamours", "text": "Vanishing" },
                        { "label": "Unique Ability", "text": "Counter Charm" },
                        { "label": "Enchantment", "text": "Can fascinate Mortals" }
                    ],
                    "magicItems": [],
                    "isLeader": false
                }
            ],
            "shared_treasure": { "cp": 86, "sp": 87, "gp": 88, "gems": 0, "art_objects": 0 },
            "mounts": "On foot",
            "quest": "Map the marsh",
            "alignment": "Neutral",
            "higher_level": false
        })
    );
}

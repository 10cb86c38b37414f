//! Member alignment, party alignment, and leader choice.

use pg_data::{Alignment, GameData};
use pg_dice::{RandomSource, pick_one};

/// Classes whose members are never chaotic.
const CLERGY: [&str; 2] = ["Cleric", "Friar"];

/// The class that swears to a house.
pub const KNIGHT: &str = "Knight";

/// Roll one member's alignment when members choose their own.
///
/// Clergy are lawful or neutral at even odds. Knights take the alignment of
/// a random house, which is also returned. Everyone else is one of the three
/// alignments at even odds.
pub fn individual_alignment<R>(
    class: &str,
    data: &GameData,
    source: &mut R,
) -> (Alignment, Option<String>)
where
    R: RandomSource + ?Sized,
{
    if CLERGY.contains(&class) {
        let options = [Alignment::Lawful, Alignment::Neutral];
        return (options[source.pick_index(options.len())], None);
    }

    if class == KNIGHT {
        let sworn = pick_one(&data.house_names(), source).and_then(|name| {
            data.houses
                .get(*name)
                .map(|house| (house.alignment, name.to_string()))
        });
        if let Some((alignment, house)) = sworn {
            return (alignment, Some(house));
        }
        tracing::warn!("knight rolled but no houses are defined");
    }

    (Alignment::ALL[source.pick_index(Alignment::ALL.len())], None)
}

/// Pick a house for a knight in a party of `alignment`, falling back to any
/// house when none shares it.
pub fn party_house<R>(alignment: Alignment, data: &GameData, source: &mut R) -> Option<String>
where
    R: RandomSource + ?Sized,
{
    let aligned = data.houses_aligned(alignment);
    if aligned.is_empty() {
        tracing::warn!(%alignment, "no house shares the party alignment, choosing any house");
        return pick_one(&data.house_names(), source).map(|h| h.to_string());
    }
    pick_one(&aligned, source).map(|h| h.to_string())
}

/// The most common alignment among `members`, ties broken at random.
pub fn plurality<R>(members: &[Alignment], source: &mut R) -> Alignment
where
    R: RandomSource + ?Sized,
{
    let counts = Alignment::ALL.map(|a| members.iter().filter(|m| **m == a).count());
    let best = counts.iter().copied().max().unwrap_or(0);
    let tied: Vec<Alignment> = Alignment::ALL
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count == best)
        .map(|(a, _)| a)
        .collect();
    pick_one(&tied, source)
        .copied()
        .unwrap_or(Alignment::Neutral)
}

/// Index of the leader: a random member of `alignment`, or a random member
/// if none shares it. `None` only for an empty party.
pub fn choose_leader<R>(members: &[Alignment], alignment: Alignment, source: &mut R) -> Option<usize>
where
    R: RandomSource + ?Sized,
{
    let candidates: Vec<usize> = (0..members.len())
        .filter(|i| members[*i] == alignment)
        .collect();
    if candidates.is_empty() {
        if members.is_empty() {
            return None;
        }
        tracing::warn!(%alignment, "no member shares the party alignment, choosing any leader");
        return Some(source.pick_index(members.len()));
    }
    pick_one(&candidates, source).copied()
}

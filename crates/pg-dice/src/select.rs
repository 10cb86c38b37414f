//! Random picks from candidate lists.

use crate::source::RandomSource;

/// Pick one item uniformly, or `None` if `items` is empty.
pub fn pick_one<'a, T, R>(items: &'a [T], source: &mut R) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(source.pick_index(items.len()))
}

/// Draw up to `count` new items without replacement, after `already`.
///
/// The result starts with `already` unchanged, followed by the new draws.
/// Items already present (and repeats within `items`) are never drawn again.
/// When fewer than `count` eligible items remain, all of them are drawn.
pub fn pick_unique<T, R>(count: usize, items: &[T], already: &[T], source: &mut R) -> Vec<T>
where
    T: Clone + PartialEq,
    R: RandomSource + ?Sized,
{
    let mut available: Vec<&T> = Vec::new();
    for item in items {
        if !already.contains(item) && !available.contains(&item) {
            available.push(item);
        }
    }

    let mut selected = already.to_vec();
    for _ in 0..count.min(available.len()) {
        let index = source.pick_index(available.len());
        selected.push(available.remove(index).clone());
    }
    selected
}

//! Comparator builders
//!
//! A comparator here is any `Fn(&T, &T) -> Ordering`. [`comparing`] lifts a
//! key extractor into one, [`then_comparing`] chains a tie-breaker.

use std::cmp::Ordering;

/// Compare by an extracted key
pub fn comparing<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a, b| key(a).cmp(&key(b))
}

/// Compare with `first`, falling back to `key` on ties
pub fn then_comparing<T, K, C, F>(first: C, key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: Ord,
    C: Fn(&T, &T) -> Ordering,
    F: Fn(&T) -> K,
{
    move |a, b| first(a, b).then_with(|| key(a).cmp(&key(b)))
}

/// Reverse a comparator
pub fn reversed<T, C>(cmp: C) -> impl Fn(&T, &T) -> Ordering
where
    C: Fn(&T, &T) -> Ordering,
{
    move |a, b| cmp(a, b).reverse()
}

/// Return a sorted copy of `items` (stable)
pub fn sorted_by<T, C>(items: &[T], cmp: C) -> Vec<T>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| cmp(a, b));
    sorted
}

//! Grouping and reducing collectors
//!
//! Groups are returned as `BTreeMap` so iteration and `Debug` output follow
//! key order. Within a group, items keep their encounter order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Partition `items` into groups keyed by `key`
pub fn group_by<T, K, I, F>(items: I, key: F) -> BTreeMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: Fn(&T) -> K,
{
    items.into_iter().fold(BTreeMap::new(), |mut groups, item| {
        groups.entry(key(&item)).or_default().push(item);
        groups
    })
}

/// Group `items` by `key`, reducing each group to one value with `op`
///
/// Every key present in the result had at least one item, so no group is
/// ever empty and the reduction needs no identity element.
pub fn group_reduce<T, K, I, F, R>(items: I, key: F, op: R) -> BTreeMap<K, T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: Fn(&T) -> K,
    R: Fn(T, T) -> T,
{
    let mut groups: BTreeMap<K, T> = BTreeMap::new();
    for item in items {
        let k = key(&item);
        let merged = match groups.remove(&k) {
            Some(acc) => op(acc, item),
            None => item,
        };
        groups.insert(k, merged);
    }
    groups
}

/// Binary operator keeping the greater of two values under `cmp`
///
/// On ties the first argument wins.
pub fn max_by<T, C>(cmp: C) -> impl Fn(T, T) -> T
where
    C: Fn(&T, &T) -> Ordering,
{
    move |a, b| if cmp(&a, &b) == Ordering::Less { b } else { a }
}

/// Binary operator keeping the lesser of two values under `cmp`
///
/// On ties the first argument wins.
pub fn min_by<T, C>(cmp: C) -> impl Fn(T, T) -> T
where
    C: Fn(&T, &T) -> Ordering,
{
    move |a, b| if cmp(&a, &b) == Ordering::Greater { b } else { a }
}

/// Sum `extract` over the items accepted by `selector`
///
/// The selection strategy is injected by the caller, keeping "what to
/// total" apart from "how to total".
pub fn sum_where<'a, T, S, E>(items: &'a [T], selector: S, extract: E) -> u64
where
    S: Fn(&T) -> bool,
    E: Fn(&'a T) -> u64,
{
    items.iter().filter(|item| selector(*item)).map(extract).sum()
}

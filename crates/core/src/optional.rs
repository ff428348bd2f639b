//! Null-safe defaulting helpers built on `Option`

/// Treat a missing slice as empty
pub fn or_empty<T>(items: Option<&[T]>) -> &[T] {
    items.unwrap_or_default()
}

/// First element matching `predicate`, or `default` when nothing matches
pub fn find_first_or<I, P>(items: I, predicate: P, default: I::Item) -> I::Item
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().find(predicate).unwrap_or(default)
}

//! Friends roster: iteration, filtering and `Option` lookups

use fnkit_core::optional::{find_first_or, or_empty};
use fnkit_core::predicate::starts_with;

/// The fixed list of friends every roster example works over
pub const FRIENDS: [&str; 5] = ["Brian", "Nate", "Raju", "Sara", "Scott"];

/// Placeholder returned when no friend matches
pub const NOT_FOUND: &str = "Not Found";

/// Concatenate names with an explicit loop
pub fn concat_loop(names: &[&str]) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(name);
    }
    out
}

/// Concatenate names with `for_each`
pub fn concat_for_each(names: &[&str]) -> String {
    let mut out = String::new();
    names.iter().for_each(|name| out.push_str(name));
    out
}

/// Names starting with `letter`, using an inline closure
pub fn starting_with_inline<'a>(names: &[&'a str], letter: &str) -> Vec<&'a str> {
    names
        .iter()
        .copied()
        .filter(|name| name.starts_with(letter))
        .collect()
}

/// Names starting with `letter`, using the curried predicate factory
pub fn starting_with<'a>(names: &[&'a str], letter: &str) -> Vec<&'a str> {
    let matches = starts_with(letter);
    names.iter().copied().filter(|name| matches(*name)).collect()
}

/// First name starting with `letter`, if any
pub fn find_starting_with<'a>(names: &[&'a str], letter: &str) -> Option<&'a str> {
    let matches = starts_with(letter);
    names.iter().copied().find(|name| matches(*name))
}

/// First name starting with `letter`, or [`NOT_FOUND`]
pub fn find_starting_with_or_default<'a>(names: &[&'a str], letter: &str) -> &'a str {
    let matches = starts_with(letter);
    find_first_or(names.iter().copied(), |name| matches(*name), NOT_FOUND)
}

/// Replace every item of a possibly missing list
pub fn replace_all<T>(items: Option<&[T]>) -> Vec<&'static str> {
    or_empty(items).iter().map(|_| "item replaced").collect()
}

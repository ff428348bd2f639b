//! People: composite-key sorting, grouping and per-group reduction

use fnkit_core::collect::{group_by, group_reduce, max_by};
use fnkit_core::ordering::{comparing, sorted_by, then_comparing};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A named person with an age
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
}

impl Person {
    /// Create a new person
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// First character of the name, if the name is non-empty
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person[name={}, age={}]", self.name, self.age)
    }
}

/// Render items as `[a, b, c]` using their `Display` impls
pub fn render_list<T: fmt::Display>(items: &[T]) -> String {
    let inner: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", inner.join(", "))
}

/// Sort by age, then by name
pub fn sort_by_age_then_name(people: &[Person]) -> Vec<Person> {
    let by_age = comparing(|p: &Person| p.age);
    sorted_by(people, then_comparing(by_age, |p: &Person| p.name.clone()))
}

/// Group people by age, keeping input order within each age
pub fn group_by_age(people: Vec<Person>) -> BTreeMap<u32, Vec<Person>> {
    group_by(people, |p| p.age)
}

/// Oldest person for each initial letter
///
/// People with an empty name have no initial and are skipped. Among people
/// of equal age the one listed first is kept.
pub fn oldest_by_initial(people: Vec<Person>) -> BTreeMap<char, Person> {
    let named = people.into_iter().filter(|p| p.initial().is_some());
    group_reduce(
        named,
        |p| p.initial().unwrap_or_default(),
        max_by(comparing(|p: &Person| p.age)),
    )
}

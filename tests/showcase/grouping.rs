//! Grouping into maps and reducing each group

use crate::common::*;
use fnkit::showcase::{group_by_age, oldest_by_initial, render_list};

#[test]
fn group_by_age_keeps_encounter_order() {
    let groups = group_by_age(group_fixture());
    let rendered: Vec<String> = groups
        .iter()
        .map(|(age, people)| format!("{}={}", age, render_list(people)))
        .collect();
    assert_eq!(
        format!("{{{}}}", rendered.join(", ")),
        "{20=[Person[name=Sara, age=20], Person[name=John, age=20]], 30=[Person[name=Scott, age=30]]}"
    );
}

#[test]
fn oldest_per_initial() {
    let oldest = oldest_by_initial(group_fixture());
    let rendered: Vec<String> = oldest
        .iter()
        .map(|(initial, person)| format!("{}={}", initial, person))
        .collect();
    assert_eq!(
        rendered,
        vec!["J=Person[name=John, age=20]", "S=Person[name=Scott, age=30]"]
    );
}

#[test]
fn grouping_nothing_yields_empty_maps() {
    assert!(group_by_age(Vec::new()).is_empty());
    assert!(oldest_by_initial(Vec::new()).is_empty());
}

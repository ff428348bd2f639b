//! `Option` for searches that may miss and inputs that may be absent

use crate::common::*;
use fnkit::showcase::roster::{find_starting_with, find_starting_with_or_default, replace_all};
use fnkit::showcase::NOT_FOUND;

#[test]
fn missing_match_is_none() {
    let found = find_starting_with(&FRIENDS, "A");
    assert!(found.is_none());
    assert_eq!(found.unwrap_or(NOT_FOUND), "Not Found");
    assert_eq!(find_starting_with_or_default(&FRIENDS, "A"), "Not Found");
}

#[test]
fn present_match_is_first() {
    assert_eq!(find_starting_with(&FRIENDS, "S"), Some("Sara"));
}

#[test]
fn absent_list_maps_to_empty() {
    let replaced = replace_all::<&str>(None);
    assert_eq!(replaced.len(), 0);
}

#[test]
fn present_list_maps_every_item() {
    let replaced = replace_all(Some(&FRIENDS[..]));
    assert_eq!(replaced.len(), FRIENDS.len());
    assert!(replaced.iter().all(|item| *item == "item replaced"));
}

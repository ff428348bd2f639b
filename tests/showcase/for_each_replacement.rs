//! Replacing an explicit loop with `for_each`

use crate::common::*;
use fnkit::showcase::roster::{concat_for_each, concat_loop};

#[test]
fn loop_and_for_each_build_the_same_string() {
    let looped = concat_loop(&FRIENDS);
    let functional = concat_for_each(&FRIENDS);
    assert_eq!(functional, looped);
    assert_eq!(functional, "BrianNateRajuSaraScott");
}

#[test]
fn iterator_fold_agrees_with_both() {
    let folded = FRIENDS.iter().fold(String::new(), |mut acc, name| {
        acc.push_str(name);
        acc
    });
    assert_eq!(folded, concat_loop(&FRIENDS));
}

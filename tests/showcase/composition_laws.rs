//! Composition and recursion laws checked with proptest

use crate::common::*;
use fnkit::core::compose::{compose, compose_all, identity, pipeline, Transform};
use fnkit::showcase::camera::{brighter, darker};
use proptest::prelude::*;

fn any_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
        .prop_map(|(r, g, b, a)| Color::rgba(r, g, b, a))
}

proptest! {
    #[test]
    fn empty_composition_is_identity(c in any_color()) {
        prop_assert_eq!(compose_all(Vec::<Transform<Color>>::new())(c), c);
        prop_assert_eq!(pipeline(Vec::<Transform<Color>>::new())(c), c);
    }

    #[test]
    fn single_filter_composition_is_the_filter(c in any_color()) {
        prop_assert_eq!(compose_all(vec![brighter()])(c), c.brighter());
        prop_assert_eq!(pipeline(vec![darker()])(c), c.darker());
    }

    #[test]
    fn compose_all_is_nested_compose(c in any_color()) {
        let folded = compose_all(vec![brighter(), darker()]);
        let nested = compose(Color::brighter, Color::darker);
        prop_assert_eq!(folded(c), nested(c));
    }

    #[test]
    fn identity_is_neutral_for_filters(c in any_color()) {
        let left = compose(identity::<Color>(), Color::darker);
        let right = compose(Color::darker, identity::<Color>());
        prop_assert_eq!(left(c), c.darker());
        prop_assert_eq!(right(c), c.darker());
    }

    #[test]
    fn alpha_survives_any_filter_chain(c in any_color()) {
        let chain = pipeline(vec![brighter(), darker(), darker(), brighter()]);
        prop_assert_eq!(chain(c).a, c.a);
    }
}

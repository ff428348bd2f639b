//! Camera filters combined by composition

use crate::common::*;
use fnkit::showcase::camera::{brighter, darker};
use fnkit::showcase::Camera;

#[test]
fn capture_through_filter_sets() {
    init_tracing();
    let mut camera = Camera::new();
    assert_eq!(
        camera.describe("no filter", ORCHID),
        "with no filter: Color[r=200,g=100,b=200]"
    );

    camera.set_filters(vec![brighter()]);
    assert_eq!(
        camera.describe("brighter", ORCHID),
        "with brighter: Color[r=255,g=142,b=255]"
    );

    camera.set_filters(vec![brighter(), darker()]);
    assert_eq!(
        camera.describe("brighter and darker", ORCHID),
        "with brighter and darker: Color[r=200,g=100,b=200]"
    );
}

#[test]
fn filter_order_changes_the_result() {
    init_tracing();
    let one_way = Camera::new().with_filters(vec![brighter(), darker()]);
    let other_way = Camera::new().with_filters(vec![darker(), brighter()]);
    assert_ne!(one_way.capture(ORCHID), other_way.capture(ORCHID));
}

#[test]
fn empty_filter_list_is_identity() {
    let camera = Camera::new().with_filters(Vec::new());
    for color in [ORCHID, Color::BLACK, Color::WHITE, Color::rgba(1, 2, 3, 4)] {
        assert_eq!(camera.capture(color), color);
    }
}

//! Worked examples built on `fnkit-core`
//!
//! Each module is a small self-contained scenario:
//! - roster: iterating, filtering and looking up a fixed list of friends
//! - people: sorting by composite key, grouping, oldest per initial
//! - assets: totals with an injected selection strategy
//! - color / camera: composing colour filters
//! - digits: thousands separators via the recursive function adapter

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assets;
pub mod camera;
pub mod color;
pub mod digits;
pub mod people;
pub mod roster;

pub use assets::{total_price, Asset, AssetKind};
pub use camera::Camera;
pub use color::Color;
pub use digits::{insert_separators, DigitGrouping, Scenario};
pub use people::{group_by_age, oldest_by_initial, render_list, sort_by_age_then_name, Person};
pub use roster::{FRIENDS, NOT_FOUND};

//! Core combinators and types for fnkit
//!
//! This crate defines the function-level building blocks used by the showcase:
//! - recursion: recursive function adapter (self passed as first argument)
//! - compose: identity, composition and pipelines over boxed transformations
//! - predicate: curried predicate factories and boolean combinators
//! - optional: null-safe defaulting with `Option`
//! - ordering: comparator builders and chaining
//! - collect: grouping, per-group reduction and strategy-injected sums
//! - config: digit-grouping format loaded from TOML
//! - error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collect;
pub mod compose;
pub mod config;
pub mod error;
pub mod optional;
pub mod ordering;
pub mod predicate;
pub mod recursion;

pub use collect::{group_by, group_reduce, max_by, min_by, sum_where};
pub use compose::{and_then, compose, compose_all, identity, pipeline, Transform};
pub use config::{FormatConfig, CONFIG_FILE_NAME, DEFAULT_GROUP_SIZE, DEFAULT_SEPARATOR};
pub use error::{Error, Result};
pub use optional::{find_first_or, or_empty};
pub use ordering::{comparing, reversed, sorted_by, then_comparing};
pub use predicate::starts_with;
pub use recursion::{apply_recursive, recursive_function};

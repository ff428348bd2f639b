//! fnkit - functional programming building blocks with worked examples
//!
//! # Quick Start
//!
//! ```
//! use fnkit::core::recursive_function;
//!
//! let group = recursive_function(|this: &dyn Fn(String) -> String, s: String| {
//!     if s.len() > 3 {
//!         let (head, tail) = s.split_at(s.len() - 3);
//!         format!("{},{}", this(head.to_string()), tail)
//!     } else {
//!         s
//!     }
//! });
//! assert_eq!(group("1234567".to_string()), "1,234,567");
//! ```
//!
//! # Architecture
//!
//! - [`core`]: generic combinators, collectors, config and error types
//! - [`showcase`]: concrete scenarios exercising every combinator

/// Generic combinators (re-export of `fnkit-core`)
pub use fnkit_core as core;
/// Worked examples (re-export of `fnkit-showcase`)
pub use fnkit_showcase as showcase;

pub use fnkit_core::{Error, FormatConfig, Result};

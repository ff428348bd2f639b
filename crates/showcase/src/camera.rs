//! Camera with a configurable chain of colour filters

use crate::color::Color;
use fnkit_core::compose::{compose_all, identity, Transform};
use tracing::{debug, trace};

/// Captures colours through a combined filter
///
/// Filters are combined with [`compose_all`]: the last filter installed runs
/// first. With no filters the camera returns colours unchanged.
pub struct Camera {
    filter: Transform<Color>,
    filter_count: usize,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// A camera with no filters
    pub fn new() -> Self {
        Self {
            filter: Box::new(identity::<Color>()),
            filter_count: 0,
        }
    }

    /// Replace the installed filters
    pub fn set_filters(&mut self, filters: Vec<Transform<Color>>) {
        self.filter_count = filters.len();
        self.filter = compose_all(filters);
        debug!(target: "fnkit::camera", filters = self.filter_count, "Filters installed");
    }

    /// Builder-style [`Camera::set_filters`]
    pub fn with_filters(mut self, filters: Vec<Transform<Color>>) -> Self {
        self.set_filters(filters);
        self
    }

    /// Number of filters currently installed
    pub fn filter_count(&self) -> usize {
        self.filter_count
    }

    /// Run `color` through the installed filters
    pub fn capture(&self, color: Color) -> Color {
        let processed = (self.filter)(color);
        trace!(target: "fnkit::camera", input = %color, output = %processed, "Captured");
        processed
    }

    /// `with <filter_name>: <captured colour>`
    pub fn describe(&self, filter_name: &str, color: Color) -> String {
        format!("with {}: {}", filter_name, self.capture(color))
    }
}

/// Boxed [`Color::brighter`] filter
pub fn brighter() -> Transform<Color> {
    Box::new(Color::brighter)
}

/// Boxed [`Color::darker`] filter
pub fn darker() -> Transform<Color> {
    Box::new(Color::darker)
}

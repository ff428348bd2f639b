//! RGBA colour with brightness adjustment

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scale factor applied by [`Color::brighter`] and [`Color::darker`]
pub const BRIGHTNESS_FACTOR: f64 = 0.7;

/// An sRGB colour with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
    /// Alpha component, 255 is opaque
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    u8::MAX
}

impl Color {
    /// Opaque black
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque colour from components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    /// Colour from components including alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Divide each component by [`BRIGHTNESS_FACTOR`], clamping at 255
    ///
    /// Pure black has no hue to scale and becomes a dark grey instead.
    /// Components that are non-zero but too small to grow under scaling are
    /// first lifted to the minimum brightenable value. Alpha is preserved.
    pub fn brighter(self) -> Color {
        let floor = (1.0 / (1.0 - BRIGHTNESS_FACTOR)) as u8;
        if self.r == 0 && self.g == 0 && self.b == 0 {
            return Color::rgba(floor, floor, floor, self.a);
        }

        let lift = |c: u8| if c > 0 && c < floor { floor } else { c };
        let scale = |c: u8| (f64::from(lift(c)) / BRIGHTNESS_FACTOR).min(255.0) as u8;
        Color::rgba(scale(self.r), scale(self.g), scale(self.b), self.a)
    }

    /// Multiply each component by [`BRIGHTNESS_FACTOR`]. Alpha is preserved.
    pub fn darker(self) -> Color {
        let scale = |c: u8| (f64::from(c) * BRIGHTNESS_FACTOR) as u8;
        Color::rgba(scale(self.r), scale(self.g), scale(self.b), self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color[r={},g={},b={}]", self.r, self.g, self.b)
    }
}

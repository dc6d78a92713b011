//! Normalized RGBA colors for figure drawing.
//!
//! The original diagrams mixed 3- and 4-component color tuples, with alpha
//! implied to be 1 when omitted. [`Color`] normalizes this to a single
//! 4-component representation with an explicit alpha. CSS color strings
//! (used by configuration files) are parsed through the `color` crate.

use std::fmt;
use std::str::FromStr;

use color::{DynamicColor, Srgb};
use serde::{Deserialize, Deserializer, de};
use thiserror::Error;

/// Error returned when a CSS color string cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid color '{input}': {message}")]
pub struct ColorParseError {
    input: String,
    message: String,
}

/// A color with normalized sRGB components, each in `[0, 1]`.
///
/// Alpha is always present and defaults to 1 (opaque) for the
/// three-component constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    components: [f32; 4],
}

impl Color {
    /// Creates an opaque color from red, green, and blue components.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from red, green, blue, and alpha components.
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            components: [r, g, b, a],
        }
    }

    /// Parses a CSS color string such as `"#ff0000"`, `"rgb(255, 0, 0)"`,
    /// or `"red"`.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let dynamic = DynamicColor::from_str(input).map_err(|err| ColorParseError {
            input: input.to_string(),
            message: err.to_string(),
        })?;
        let [r, g, b, a] = dynamic.to_alpha_color::<Srgb>().components;
        Ok(Self::rgba(r, g, b, a))
    }

    /// Returns the red component.
    pub fn red(self) -> f32 {
        self.components[0]
    }

    /// Returns the green component.
    pub fn green(self) -> f32 {
        self.components[1]
    }

    /// Returns the blue component.
    pub fn blue(self) -> f32 {
        self.components[2]
    }

    /// Returns the alpha component.
    pub fn alpha(self) -> f32 {
        self.components[3]
    }

    /// Returns this color with its alpha replaced.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            components: [
                self.components[0],
                self.components[1],
                self.components[2],
                alpha,
            ],
        }
    }

    /// Returns this color with its alpha multiplied by `factor`.
    ///
    /// This is the treatment the figures use for ghosted shapes (fills at a
    /// quarter of the outline opacity, highlight arrows at 70%).
    pub fn scale_alpha(self, factor: f32) -> Self {
        self.with_alpha(self.components[3] * factor)
    }

    /// Returns the opaque part of this color as an `#rrggbb` hex string.
    ///
    /// Alpha is intentionally not encoded; SVG attributes carry it
    /// separately as `fill-opacity`/`stroke-opacity`.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.components;
        format!(
            "#{:02x}{:02x}{:02x}",
            Self::to_byte(r),
            Self::to_byte(g),
            Self::to_byte(b)
        )
    }

    fn to_byte(component: f32) -> u8 {
        (component.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    /// Deserializes a color from a CSS color string.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = String::deserialize(deserializer)?;
        Self::parse(&input).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_rgb_defaults_alpha_to_one() {
        let color = Color::rgb(1.0, 0.5, 0.5);
        assert_eq!(color.alpha(), 1.0);
        assert_eq!(color.red(), 1.0);
        assert_eq!(color.green(), 0.5);
        assert_eq!(color.blue(), 0.5);
    }

    #[test]
    fn test_rgba_keeps_alpha() {
        let color = Color::rgba(0.8, 0.8, 0.2, 0.15);
        assert_eq!(color.alpha(), 0.15);
    }

    #[test]
    fn test_with_alpha_and_scale_alpha() {
        let color = Color::rgb(0.0, 0.7, 0.0);
        assert_eq!(color.with_alpha(0.5).alpha(), 0.5);

        let ghost = color.with_alpha(0.7).scale_alpha(0.25);
        assert_approx_eq!(f32, ghost.alpha(), 0.175);
        // RGB components are untouched
        assert_eq!(ghost.green(), 0.7);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(1.0, 0.0, 0.0).to_hex(), "#ff0000");
        assert_eq!(Color::rgb(0.0, 0.0, 0.0).to_hex(), "#000000");
        assert_eq!(Color::rgb(1.0, 0.5, 0.5).to_hex(), "#ff8080");
        // Alpha is not part of the hex form
        assert_eq!(Color::rgba(1.0, 1.0, 0.0, 0.3).to_hex(), "#ffff00");
    }

    #[test]
    fn test_to_hex_clamps_out_of_range() {
        assert_eq!(Color::rgb(1.5, -0.2, 0.0).to_hex(), "#ff0000");
    }

    #[test]
    fn test_display_matches_hex() {
        let color = Color::rgb(0.0, 0.8, 1.0);
        assert_eq!(color.to_string(), color.to_hex());
    }

    #[test]
    fn test_parse_named_color() {
        let red = Color::parse("red").expect("named color should parse");
        assert_eq!(red.to_hex(), "#ff0000");
        assert_eq!(red.alpha(), 1.0);
    }

    #[test]
    fn test_parse_hex_color() {
        let color = Color::parse("#ff8080").expect("hex color should parse");
        assert_approx_eq!(f32, color.red(), 1.0, epsilon = 1e-3);
        assert_approx_eq!(f32, color.green(), 0.502, epsilon = 1e-3);
    }

    #[test]
    fn test_parse_invalid_color() {
        let err = Color::parse("not-a-color").unwrap_err();
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn test_default_is_opaque_black() {
        let color = Color::default();
        assert_eq!(color.to_hex(), "#000000");
        assert_eq!(color.alpha(), 1.0);
    }
}

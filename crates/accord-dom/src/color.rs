//! Color values
//!
//! Parses the color strings a host reports as resolved style.

use std::fmt;

use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use serde::Serialize;

/// RGBA color with a fractional alpha channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0, 1]`
    pub a: f64,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0.0 };
    pub const BLACK: Rgba = Rgba { r: 0, g: 0, b: 0, a: 1.0 };
    pub const WHITE: Rgba = Rgba { r: 255, g: 255, b: 255, a: 1.0 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a: a.clamp(0.0, 1.0) }
    }

    /// Fully transparent (alpha of zero)
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Parse any CSS color syntax: keywords, hex, `rgb()`, `hsl()`,
    /// `hwb()` and the newer color spaces, converted to sRGB.
    /// `currentcolor` has no value on its own and yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let color = CssColor::parse_string(value.trim()).ok()?;
        match color.to_rgb().ok()? {
            CssColor::RGBA(rgba) => Some(Self::rgba(rgba.red, rgba.green, rgba.blue, f64::from(rgba.alpha))),
            _ => None,
        }
    }

    /// Six lowercase hex digits, no leading `#`
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Computed-value serialization: `rgb(r, g, b)`, or `rgba(r, g, b, a)`
/// when not opaque
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_computed_values() {
        assert_eq!(Rgba::parse("rgb(255, 255, 255)"), Some(Rgba::WHITE));
        assert_eq!(Rgba::parse("rgba(0, 0, 0, 0)"), Some(Rgba::TRANSPARENT));
        assert_eq!(Rgba::parse("rgb(10 20 30 / 50%)"), Some(Rgba::rgba(10, 20, 30, 0.5)));
        assert_eq!(Rgba::parse("#0f0"), Some(Rgba::rgb(0, 255, 0)));
        assert_eq!(Rgba::parse("Navy"), Some(Rgba::rgb(0, 0, 128)));
        assert_eq!(Rgba::parse("transparent"), Some(Rgba::TRANSPARENT));
        assert_eq!(Rgba::parse("currentcolor"), None);
        assert_eq!(Rgba::parse("rgb(1, 2)"), None);
        assert_eq!(Rgba::parse("notacolor"), None);
    }

    #[test]
    fn test_parse_extended_keywords_and_hsl() {
        assert_eq!(Rgba::parse("lightgray"), Some(Rgba::rgb(211, 211, 211)));
        assert_eq!(Rgba::parse("rebeccapurple"), Some(Rgba::rgb(102, 51, 153)));
        assert_eq!(Rgba::parse("hsl(0, 0%, 60%)"), Some(Rgba::rgb(153, 153, 153)));
        assert_eq!(Rgba::parse("hsl(120deg 100% 25%)"), Some(Rgba::rgb(0, 128, 0)));
        let translucent = Rgba::parse("hsla(0, 100%, 50%, 0.5)").unwrap();
        assert_eq!((translucent.r, translucent.g, translucent.b), (255, 0, 0));
        assert!((translucent.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgba::rgb(51, 102, 153).to_string(), "rgb(51, 102, 153)");
        assert_eq!(Rgba::TRANSPARENT.to_string(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgba::rgb(255, 0, 16).to_hex(), "ff0010");
        assert_eq!(Rgba::WHITE.to_hex(), "ffffff");
    }
}

//! Resolved style
//!
//! Computed property values exactly as the host reports them. The engine
//! interprets them; this type only stores and looks them up.

use serde::Serialize;

/// The resolved style properties the engine consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStyle {
    pub display: String,
    pub visibility: String,
    pub opacity: String,
    pub color: String,
    pub background_color: String,
    pub background_image: String,
    pub font_size: String,
    pub font_weight: String,
    pub height: String,
    pub overflow: String,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            display: "inline".into(),
            visibility: "visible".into(),
            opacity: "1".into(),
            color: "rgb(0, 0, 0)".into(),
            background_color: "rgba(0, 0, 0, 0)".into(),
            background_image: "none".into(),
            font_size: "16px".into(),
            font_weight: "400".into(),
            height: "auto".into(),
            overflow: "visible".into(),
        }
    }
}

impl ResolvedStyle {
    /// Names of the properties this snapshot carries
    pub const PROPERTIES: [&'static str; 10] = [
        "display",
        "visibility",
        "opacity",
        "color",
        "background-color",
        "background-image",
        "font-size",
        "font-weight",
        "height",
        "overflow",
    ];

    /// Look up a property by its CSS name
    pub fn get(&self, property: &str) -> Option<&str> {
        let value = match property {
            "display" => &self.display,
            "visibility" => &self.visibility,
            "opacity" => &self.opacity,
            "color" => &self.color,
            "background-color" => &self.background_color,
            "background-image" => &self.background_image,
            "font-size" => &self.font_size,
            "font-weight" => &self.font_weight,
            "height" => &self.height,
            "overflow" => &self.overflow,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Set a property by its CSS name, returning false for unknown properties
    pub fn set(&mut self, property: &str, value: impl Into<String>) -> bool {
        let slot = match property {
            "display" => &mut self.display,
            "visibility" => &mut self.visibility,
            "opacity" => &mut self.opacity,
            "color" => &mut self.color,
            "background-color" => &mut self.background_color,
            "background-image" => &mut self.background_image,
            "font-size" => &mut self.font_size,
            "font-weight" => &mut self.font_weight,
            "height" => &mut self.height,
            "overflow" => &mut self.overflow,
            _ => return false,
        };
        *slot = value.into().trim().to_ascii_lowercase();
        true
    }

    /// `display: none`
    pub fn is_display_none(&self) -> bool {
        self.display.trim().eq_ignore_ascii_case("none")
    }

    /// `visibility: hidden` or `visibility: collapse`
    pub fn is_visibility_hidden(&self) -> bool {
        matches!(self.visibility.trim(), "hidden" | "collapse")
    }
}

/// Leading number of a pixel length such as `"12px"` or `"12.5"`
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Numeric font weight for a keyword or number
pub fn parse_font_weight(value: &str) -> Option<u16> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" | "lighter" => Some(400),
        "bold" | "bolder" => Some(700),
        other => other.parse::<f64>().ok().map(|w| w.clamp(1.0, 1000.0) as u16),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut style = ResolvedStyle::default();
        assert!(style.set("display", " NONE "));
        assert!(style.is_display_none());
        assert!(!style.set("float", "left"));
        assert_eq!(style.get("display"), Some("none"));
        assert_eq!(style.get("float"), None);
    }

    #[test]
    fn test_parse_lengths() {
        assert_eq!(parse_px("12px"), Some(12.0));
        assert_eq!(parse_px("0.5"), Some(0.5));
        assert_eq!(parse_px("auto"), None);
        assert_eq!(parse_font_weight("bold"), Some(700));
        assert_eq!(parse_font_weight("300"), Some(300));
        assert_eq!(parse_font_weight("inherit"), None);
    }
}

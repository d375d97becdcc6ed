//! Color Contrast
//!
//! Effective text and background colors (inheritance, opacity, alpha
//! blending) and the WCAG contrast ratio between them.

use accord_dom::{Rgba, parse_font_weight, parse_px};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::tree::ElementNode;

/// Below this alpha a color is treated as fully transparent
const MIN_ALPHA: f64 = 0.0001;
/// Weight at or above which text counts as bold for the large text rule
const BOLD_WEIGHT: u16 = 300;

/// WCAG contrast math
pub struct ContrastChecker;

impl ContrastChecker {
    /// Calculate relative luminance
    pub fn luminance(color: Rgba) -> f64 {
        fn channel(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
        }
        0.2126 * channel(color.r) + 0.7152 * channel(color.g) + 0.0722 * channel(color.b)
    }

    /// Contrast ratio between two opaque colors, rounded to one decimal
    pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
        let (l1, l2) = (Self::luminance(a), Self::luminance(b));
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        ((lighter + 0.05) / (darker + 0.05) * 10.0).round() / 10.0
    }

    /// Check if contrast meets WCAG AA (4.5:1 for normal text)
    pub fn meets_aa(ratio: f64, large_text: bool) -> bool {
        if large_text { ratio >= 3.0 } else { ratio >= 4.5 }
    }

    /// Check if contrast meets WCAG AAA (7:1 for normal text)
    pub fn meets_aaa(ratio: f64, large_text: bool) -> bool {
        if large_text { ratio >= 4.5 } else { ratio >= 7.0 }
    }

    /// Composite `color` (with its own alpha, then `opacity`) over an
    /// opaque background
    pub fn blend(color: Rgba, background: Rgba, opacity: f64) -> Rgba {
        if color.a < MIN_ALPHA {
            return Rgba::rgb(background.r, background.g, background.b);
        }
        let mix = |fg: f64, bg: u8, alpha: f64| fg * alpha + f64::from(bg) * (1.0 - alpha);
        let (mut r, mut g, mut b) = (f64::from(color.r), f64::from(color.g), f64::from(color.b));
        if color.a < 1.0 {
            r = mix(r, background.r, color.a).round();
            g = mix(g, background.g, color.a).round();
            b = mix(b, background.b, color.a).round();
        }
        let opacity = if (0.0..=1.0).contains(&opacity) { opacity } else { 1.0 };
        if opacity < 1.0 {
            r = mix(r, background.r, opacity).round();
            g = mix(g, background.g, opacity).round();
            b = mix(b, background.b, opacity).round();
        }
        let channel = |v: f64| v.clamp(0.0, 255.0) as u8;
        Rgba::rgb(channel(r), channel(g), channel(b))
    }
}

/// Color contrast facts of one element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorContrast {
    /// Opacity multiplied down the ancestor chain
    pub opacity: f64,
    /// Declared background, or the inherited one when transparent
    pub background_color: Rgba,
    /// Background composited onto its parent's background
    pub background: Rgba,
    pub color: Rgba,
    /// Text color composited onto `background`
    pub foreground: Rgba,
    pub background_image: String,
    pub has_background_image: bool,
    pub font_size: f64,
    pub font_weight: u16,
    pub is_large_font: bool,
    pub ratio: f64,
}

impl ColorContrast {
    /// Compute contrast facts given the parent's (`None` at the root)
    pub fn compute(node: &ElementNode, parent: Option<&ColorContrast>, config: &EngineConfig) -> Self {
        let style = &node.style;
        let parent_opacity = parent.map_or(1.0, |p| p.opacity);
        let parent_background = parent.map_or(config.root_background, |p| p.background);

        let opacity = resolve_opacity(&style.opacity, parent_opacity);

        let background_color = match Rgba::parse(&style.background_color) {
            Some(color) if !color.is_transparent() => color,
            _ => parent.map_or(config.root_background, |p| p.background_color),
        };
        let background = ContrastChecker::blend(background_color, parent_background, 1.0);

        let color = Rgba::parse(&style.color).unwrap_or(Rgba::BLACK);
        let foreground = ContrastChecker::blend(color, background, opacity);

        let background_image = match style.background_image.trim().to_ascii_lowercase() {
            image if image.is_empty() || image == "none" || image == "inherit" => parent
                .map_or_else(|| "none".to_string(), |p| p.background_image.clone()),
            image => image,
        };
        let has_background_image = background_image != "none";

        let font_size = match style.font_size.trim() {
            "inherit" => parent.map_or(config.default_font_size, |p| p.font_size),
            value => parse_px(value).map_or(config.default_font_size, f64::trunc),
        };
        let font_weight = match style.font_weight.trim() {
            "inherit" => parent.map_or(config.default_font_weight, |p| p.font_weight),
            value => parse_font_weight(value).unwrap_or(config.default_font_weight),
        };
        let is_large_font = is_large_font(font_size, font_weight, config.default_font_size);

        Self {
            opacity,
            background_color,
            background,
            color,
            foreground,
            background_image,
            has_background_image,
            font_size,
            font_weight,
            is_large_font,
            ratio: ContrastChecker::contrast_ratio(foreground, background),
        }
    }

    pub fn foreground_hex(&self) -> String {
        self.foreground.to_hex()
    }

    pub fn background_hex(&self) -> String {
        self.background.to_hex()
    }

    /// WCAG 1.4.3 threshold for this element's text size
    pub fn meets_aa(&self) -> bool {
        ContrastChecker::meets_aa(self.ratio, self.is_large_font)
    }

    /// WCAG 1.4.6 threshold for this element's text size
    pub fn meets_aaa(&self) -> bool {
        ContrastChecker::meets_aaa(self.ratio, self.is_large_font)
    }
}

fn resolve_opacity(value: &str, parent: f64) -> f64 {
    let value = value.trim().to_ascii_lowercase();
    let opacity = match value.as_str() {
        "inherit" | "unset" => parent,
        "initial" | "revert" => 1.0,
        _ => match value.strip_suffix('%') {
            Some(pct) => pct.trim().parse::<f64>().map_or(parent, |p| parent * p / 100.0),
            None => value.parse::<f64>().map_or(1.0, |o| o * parent),
        },
    };
    if opacity.is_nan() { 1.0 } else { opacity.clamp(0.0, 1.0) }
}

/// Larger than 1.2em, or larger than 1em and bold
fn is_large_font(size: f64, weight: u16, base: f64) -> bool {
    size > 1.2 * base || (size > base && weight >= BOLD_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;
    use accord_dom::StyledElement;

    fn contrast_chain(root: StyledElement) -> Vec<ColorContrast> {
        let tree = Tree::build(&root);
        let config = EngineConfig::default();
        let mut out: Vec<ColorContrast> = Vec::new();
        for el in tree.elements() {
            let parent = el.parent.map(|p| out[p.index()].clone());
            out.push(ColorContrast::compute(el, parent.as_ref(), &config));
        }
        out
    }

    #[test]
    fn test_contrast_ratio_bounds() {
        assert_eq!(ContrastChecker::contrast_ratio(Rgba::BLACK, Rgba::WHITE), 21.0);
        assert_eq!(ContrastChecker::contrast_ratio(Rgba::rgb(50, 100, 150), Rgba::rgb(50, 100, 150)), 1.0);
    }

    #[test]
    fn test_wcag() {
        assert!(ContrastChecker::meets_aa(5.0, false));
        assert!(!ContrastChecker::meets_aa(3.0, false));
        assert!(ContrastChecker::meets_aa(3.0, true));
        assert!(!ContrastChecker::meets_aaa(6.0, false));
    }

    #[test]
    fn test_transparent_background_inherits() {
        let root = StyledElement::new("div")
            .with_style("background-color", "rgb(0, 0, 0)")
            .with_child(StyledElement::new("span").with_style("color", "rgb(255, 255, 255)"));
        let cc = contrast_chain(root);
        assert_eq!(cc[1].background_hex(), "000000");
        assert_eq!(cc[1].ratio, 21.0);
    }

    #[test]
    fn test_root_defaults_to_white() {
        let cc = contrast_chain(StyledElement::new("p"));
        assert_eq!(cc[0].background_hex(), "ffffff");
        assert_eq!(cc[0].foreground_hex(), "000000");
        assert_eq!(cc[0].ratio, 21.0);
    }

    #[test]
    fn test_opacity_multiplies_and_blends() {
        let root = StyledElement::new("div")
            .with_style("opacity", "0.5")
            .with_child(StyledElement::new("span").with_style("opacity", "50%"));
        let cc = contrast_chain(root);
        assert_eq!(cc[0].opacity, 0.5);
        assert_eq!(cc[1].opacity, 0.25);
        // black at 50% over white
        assert_eq!(cc[0].foreground, Rgba::rgb(128, 128, 128));
        assert!(cc[1].ratio < cc[0].ratio);
    }

    #[test]
    fn test_semi_transparent_text() {
        let cc = contrast_chain(StyledElement::new("p").with_style("color", "rgba(0, 0, 0, 0)"));
        assert_eq!(cc[0].ratio, 1.0);
    }

    #[test]
    fn test_large_font() {
        assert!(is_large_font(24.0, 400, 16.0));
        assert!(is_large_font(18.0, 700, 16.0));
        assert!(!is_large_font(18.0, 200, 16.0));
        assert!(!is_large_font(16.0, 700, 16.0));

        let root = StyledElement::new("div")
            .with_style("font-size", "32px")
            .with_child(StyledElement::new("span").with_style("font-size", "inherit"));
        let cc = contrast_chain(root);
        assert!(cc[1].is_large_font);
    }
}

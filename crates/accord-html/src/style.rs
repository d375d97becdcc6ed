//! Inline style, user-agent defaults and inheritance

use accord_dom::{ResolvedStyle, Rgba, parse_font_weight, parse_px};
use lightningcss::properties::Property;
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleAttribute};
use lightningcss::traits::ToCss;
use lightningcss::values::image::Image;

use crate::HtmlError;

/// Properties whose value passes from parent to child
const INHERITED: [&str; 4] = ["color", "font-size", "font-weight", "visibility"];

const DISPLAY_NONE: &[&str] = &[
    "area", "base", "datalist", "head", "link", "meta", "noscript", "param", "script", "source", "style",
    "template", "title", "track",
];

const DISPLAY_BLOCK: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "details", "dialog", "div", "dl", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "html",
    "legend", "main", "nav", "ol", "p", "pre", "section", "summary", "ul",
];

/// Parse a `style` attribute into lowercase longhand names and serialized
/// values, normal declarations first and `!important` ones after them.
/// The `background` shorthand contributes its color and image.
pub fn parse_declarations(style: &str) -> Result<Vec<(String, String)>, HtmlError> {
    declarations(style, false)
}

/// With `error_recovery`, unparseable declarations are skipped instead of
/// failing the whole attribute
fn declarations(style: &str, error_recovery: bool) -> Result<Vec<(String, String)>, HtmlError> {
    let options = ParserOptions {
        error_recovery,
        ..ParserOptions::default()
    };
    let attribute = StyleAttribute::parse(style, options)
        .map_err(|err| HtmlError::MalformedDeclaration(err.to_string()))?;
    let block = &attribute.declarations;
    let mut declarations = Vec::new();
    for property in block.declarations.iter().chain(block.important_declarations.iter()) {
        match property {
            Property::Background(layers) => {
                let image = layers.iter().map(|layer| &layer.image).find(|image| !matches!(image, Image::None));
                declarations.push((
                    "background-image".to_string(),
                    image.map_or(Ok("none".to_string()), css_string)?,
                ));
                if let Some(layer) = layers.last() {
                    declarations.push(("background-color".to_string(), css_string(&layer.color)?));
                }
            }
            property => {
                let value = property
                    .value_to_css_string(PrinterOptions::default())
                    .map_err(|err| HtmlError::MalformedDeclaration(err.to_string()))?;
                declarations.push((property.property_id().name().to_ascii_lowercase(), value));
            }
        }
    }
    Ok(declarations)
}

fn css_string(value: &impl ToCss) -> Result<String, HtmlError> {
    value
        .to_css_string(PrinterOptions::default())
        .map_err(|err| HtmlError::MalformedDeclaration(err.to_string()))
}

/// Computes the style of an element from its parent's
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleResolver {
    /// Reject values the engine could not interpret
    pub strict: bool,
}

impl StyleResolver {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Resolve `tag`'s style: inherited values, then UA defaults, then the
    /// `hidden` attribute, then inline declarations
    pub fn resolve(
        &self,
        tag: &str,
        hidden: bool,
        inline: Option<&str>,
        parent: Option<&ResolvedStyle>,
        in_svg: bool,
    ) -> Result<ResolvedStyle, HtmlError> {
        let mut style = ResolvedStyle::default();
        if let Some(parent) = parent {
            for property in INHERITED {
                if let Some(value) = parent.get(property) {
                    style.set(property, value);
                }
            }
        }

        if DISPLAY_NONE.contains(&tag) && !(tag == "title" && in_svg) {
            style.display = "none".into();
        } else if DISPLAY_BLOCK.contains(&tag) {
            style.display = "block".into();
        } else {
            match tag {
                "li" => style.display = "list-item".into(),
                "table" => style.display = "table".into(),
                "tr" => style.display = "table-row".into(),
                "td" | "th" => style.display = "table-cell".into(),
                _ => {}
            }
        }
        if matches!(tag, "b" | "strong" | "th" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6") {
            style.font_weight = "700".into();
        }
        if let Some(size) = heading_size(tag) {
            style.font_size = format!("{size}px");
        }
        if hidden {
            style.display = "none".into();
        }

        if let Some(inline) = inline {
            let declarations = match declarations(inline, !self.strict) {
                Ok(declarations) => declarations,
                Err(err) if self.strict => return Err(err),
                Err(err) => {
                    tracing::debug!("ignoring style attribute: {}", err);
                    Vec::new()
                }
            };
            for (property, value) in declarations {
                self.apply(&mut style, parent, &property, &value)?;
            }
        }
        Ok(style)
    }

    fn apply(
        &self,
        style: &mut ResolvedStyle,
        parent: Option<&ResolvedStyle>,
        property: &str,
        value: &str,
    ) -> Result<(), HtmlError> {
        let lower = value.to_ascii_lowercase();
        if lower == "inherit" {
            let inherited = parent
                .and_then(|p| p.get(property))
                .map(str::to_string)
                .unwrap_or_else(|| lower.clone());
            style.set(property, inherited);
            return Ok(());
        }
        let resolved = match property {
            "color" | "background-color" => Rgba::parse(&lower).map(|color| color.to_string()),
            "font-size" => font_size(&lower, parent).map(|px| format!("{px}px")),
            "font-weight" => parse_font_weight(&lower).map(|w| w.to_string()),
            "height" => (lower == "auto" || parse_px(&lower).is_some()).then(|| lower.clone()),
            "opacity" => {
                let number = lower.strip_suffix('%').unwrap_or(&lower);
                number.trim().parse::<f64>().ok().map(|_| lower.clone())
            }
            "display" | "visibility" | "overflow" | "background-image" => Some(lower.clone()),
            other => {
                tracing::debug!("unsupported style property {}", other);
                return Ok(());
            }
        };
        match resolved {
            Some(value) => {
                style.set(property, value);
                Ok(())
            }
            None if self.strict => Err(HtmlError::InvalidStyle {
                property: property.to_string(),
                value: value.to_string(),
            }),
            None => {
                tracing::debug!("ignoring {}: {}", property, value);
                Ok(())
            }
        }
    }
}

/// `px`, `em` and percentages relative to the parent's size
fn font_size(value: &str, parent: Option<&ResolvedStyle>) -> Option<f64> {
    let base = parent.and_then(|p| parse_px(&p.font_size)).unwrap_or(16.0);
    if let Some(em) = value.strip_suffix("em").filter(|v| !v.ends_with('r')) {
        return em.trim().parse::<f64>().ok().map(|n| n * base);
    }
    if let Some(percent) = value.strip_suffix('%') {
        return percent.trim().parse::<f64>().ok().map(|n| n * base / 100.0);
    }
    if value.ends_with("px") || value.parse::<f64>().is_ok() {
        return parse_px(value);
    }
    None
}

fn heading_size(tag: &str) -> Option<f64> {
    match tag {
        "h1" => Some(32.0),
        "h2" => Some(24.0),
        "h3" => Some(18.72),
        "h4" => Some(16.0),
        "h5" => Some(13.28),
        "h6" => Some(10.72),
        _ => None,
    }
}

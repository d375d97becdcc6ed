//! accord HTML adapter
//!
//! Parses HTML with html5ever and produces the styled snapshot the
//! semantics engine consumes. Style resolution is deliberately small:
//! inline `style` declarations for the properties the engine reads,
//! user-agent defaults and inheritance. It is not a CSS engine.

mod parser;
mod style;

pub use parser::HtmlLoader;
pub use style::{StyleResolver, parse_declarations};

use accord_dom::StyledDocument;

/// Parse an HTML string with the default (lenient) loader
pub fn parse_document(html: &str) -> Result<StyledDocument, HtmlError> {
    HtmlLoader::new().parse(html)
}

/// Adapter error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Invalid value for {property}: {value}")]
    InvalidStyle { property: String, value: String },

    #[error("Malformed style declaration: {0}")]
    MalformedDeclaration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

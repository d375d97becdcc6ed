//! Engine Configuration

use accord_aria::AriaVersion;
use accord_dom::Rgba;

/// Engine configuration options
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// ARIA snapshot used for role and property lookups
    pub aria_version: AriaVersion,

    /// Background assumed behind the evaluated root
    pub root_background: Rgba,

    /// Font size (px) used when the root reports `inherit` or garbage
    pub default_font_size: f64,

    /// Font weight used when the root reports `inherit`
    pub default_font_weight: u16,

    /// Emit a trace event with the facts of every element
    pub trace_nodes: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            aria_version: AriaVersion::Aria12,
            root_background: Rgba::WHITE,
            default_font_size: 16.0,
            default_font_weight: 400,
            trace_nodes: false,
        }
    }
}

impl EngineConfig {
    /// Configuration targeting the ARIA 1.3 tables
    pub fn aria13() -> Self {
        Self {
            aria_version: AriaVersion::Aria13,
            ..Self::default()
        }
    }
}

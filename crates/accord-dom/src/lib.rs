//! accord DOM - Styled content snapshot
//!
//! The read-only input tree handed to the semantics engine by a host
//! environment: tags, attributes, ordered children, resolved style values
//! and generated pseudo-content. Nothing here computes semantics.

mod attributes;
mod color;
mod node;
mod style;

pub use attributes::{Attr, Attributes};
pub use color::Rgba;
pub use node::{FrameContent, ShadowRoot, SlotAssignment, StyledDocument, StyledElement, StyledNode};
pub use style::{ResolvedStyle, parse_font_weight, parse_px};

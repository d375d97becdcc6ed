//! accord Accessibility Semantics
//!
//! Computes, for every element of a styled content tree, what an
//! assistive-technology user perceives:
//! - Role resolution against the ARIA design pattern tables
//! - ARIA attribute validation
//! - Accessible name and description
//! - On-screen and assistive-technology visibility
//! - Color contrast
//! - Table header association
//! - Per-document collections (controls, landmarks, lists, media, images,
//!   links, ids, frames)
//!
//! ```ignore
//! let model = Engine::new(EngineConfig::default()).evaluate(&root);
//! for (node, facts) in model.iter() {
//!     println!("{} {} {:?}", node.tag, facts.role.role, facts.name.text);
//! }
//! ```

pub mod accname;
pub mod aria_info;
mod build;
pub mod collect;
pub mod config;
pub mod contrast;
pub mod model;
pub mod role;
pub mod snapshot;
pub mod table;
pub mod tree;
pub mod visibility;

pub use accname::{AccessibleName, NameAttribute, NameSource, normalize};
pub use aria_info::{AriaAttrInfo, AriaInfo, AttrSupport, IntegerValue, RangeValues, RequiredAttr};
pub use build::Engine;
pub use collect::Collections;
pub use config::EngineConfig;
pub use contrast::{ColorContrast, ContrastChecker};
pub use model::{ElementFacts, NativeState, NodeModel};
pub use role::ResolvedRole;
pub use snapshot::{ElementSnapshot, ModelSnapshot, TableSnapshot};
pub use table::{CellRef, HeaderScope, HeaderSource, TableCell, TableElement, TableId, TableRow, TableType};
pub use tree::{DocumentId, ElementId, ElementNode, TextId, Tree};
pub use visibility::Visibility;

/// Contract violations by embedding code
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("Unknown element #{}", .0.ordinal())]
    UnknownElement(ElementId),

    #[error("Element #{} is not a table cell", .0.ordinal())]
    NotATableCell(ElementId),

    #[error("Reference from #{} to #{} crosses a document boundary", .from.ordinal(), .target.ordinal())]
    CrossDocument { from: ElementId, target: ElementId },
}

//! accord ARIA - Role and property model
//!
//! Static WAI-ARIA data shared read-only by every evaluation:
//! - Role enum with design patterns (classification, naming, properties)
//! - State/property type table
//! - HTML default roles

mod host;
mod pattern;
mod property;
mod role;

use serde::Serialize;

pub use host::{HostContext, default_role};
pub use pattern::{
    GENERIC_PATTERN, PatternVariant, RoleDesignPattern, RoleType, design_pattern, design_patterns,
};
pub use property::{
    AriaProperty, DEPRECATED_GLOBALS, GLOBAL_PROPERTIES, PropertyKind, PropertyType, ValueType,
};
pub use role::Role;

/// Snapshot of the ARIA specification the tables describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum AriaVersion {
    #[default]
    Aria12,
    Aria13,
}

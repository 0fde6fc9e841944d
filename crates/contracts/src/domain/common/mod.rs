//! Common types shared by all inventory aggregates

pub mod resource_kind;
pub mod validation;

// Re-exports
pub use resource_kind::ResourceKind;
pub use validation::{require_min_len, require_non_negative, require_positive, require_selected};

/// Server-assigned identifier of every inventory entity
pub type EntityId = i64;

use crate::domain::common::{EntityId, ResourceKind};
use serde::{Deserialize, Serialize};

/// Target of a destructive action awaiting the user's approval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    pub id: EntityId,
    pub label: String,
    pub kind: ResourceKind,
}

impl ConfirmationRequest {
    pub fn new(kind: ResourceKind, id: EntityId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
        }
    }

    /// Default dialog title, e.g. "Delete tag"
    pub fn delete_title(&self) -> String {
        format!("Delete {}", self.kind.label().to_lowercase())
    }

    /// Default dialog message
    pub fn delete_message(&self) -> String {
        format!("Do you really want to delete \"{}\"?", self.label)
    }
}

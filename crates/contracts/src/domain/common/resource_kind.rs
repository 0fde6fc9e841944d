use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of resource a destructive action targets.
///
/// Views subscribe to confirmations and act only on the kinds they own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Consumable,
    Patrimony,
    Tag,
    Status,
    Unit,
    #[serde(rename = "qrcode")]
    QrCode,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Consumable,
        ResourceKind::Patrimony,
        ResourceKind::Tag,
        ResourceKind::Status,
        ResourceKind::Unit,
        ResourceKind::QrCode,
    ];

    /// Collection endpoint relative to the API base
    pub fn endpoint(&self) -> &'static str {
        match self {
            ResourceKind::Consumable => "/consumables",
            ResourceKind::Patrimony => "/patrimonies",
            ResourceKind::Tag => "/tags",
            ResourceKind::Status => "/statuses",
            ResourceKind::Unit => "/units",
            ResourceKind::QrCode => "/qrcodes",
        }
    }

    /// Human readable singular name used in dialog titles
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Consumable => "Consumable",
            ResourceKind::Patrimony => "Patrimony",
            ResourceKind::Tag => "Tag",
            ResourceKind::Status => "Status",
            ResourceKind::Unit => "Unit",
            ResourceKind::QrCode => "QR code",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&ResourceKind::QrCode).unwrap(),
            "\"qrcode\""
        );
        assert_eq!(
            serde_json::from_str::<ResourceKind>("\"patrimony\"").unwrap(),
            ResourceKind::Patrimony
        );
    }

    #[test]
    fn test_endpoints_are_distinct() {
        let mut endpoints: Vec<_> = ResourceKind::ALL.iter().map(|k| k.endpoint()).collect();
        endpoints.sort();
        endpoints.dedup();
        assert_eq!(endpoints.len(), ResourceKind::ALL.len());
    }
}

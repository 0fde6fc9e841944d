use crate::domain::a004_consumable::aggregate::Consumable;
use crate::domain::a005_patrimony::aggregate::Patrimony;
use crate::domain::common::{EntityId, ResourceKind};
use serde::{Deserialize, Serialize};

/// Row of `GET /items`: exactly one of the two members is expected to be set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    #[serde(default)]
    pub patrimony: Option<Patrimony>,
    #[serde(default)]
    pub consumable: Option<Consumable>,
}

/// Flattened view of an inventory item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: ResourceKind,
    pub id: EntityId,
    pub name: String,
    pub tags: Vec<String>,
    /// Patrimony status name
    pub status: Option<String>,
    /// Consumable quantity with its unit
    pub quantity: Option<String>,
}

impl ItemDto {
    /// `None` for rows carrying neither member
    pub fn into_item(self) -> Option<Item> {
        if let Some(p) = self.patrimony {
            return Some(Item {
                kind: ResourceKind::Patrimony,
                id: p.id,
                tags: p.tags.iter().map(|t| t.name.clone()).collect(),
                status: Some(p.status.name.clone()),
                quantity: None,
                name: p.name,
            });
        }
        let c = self.consumable?;
        Some(Item {
            kind: ResourceKind::Consumable,
            id: c.id,
            tags: c.tags.iter().map(|t| t.name.clone()).collect(),
            status: None,
            quantity: Some(c.quantity_label()),
            name: c.name,
        })
    }
}

impl Item {
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty() || self.name.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_rows() {
        let rows: Vec<ItemDto> = serde_json::from_str(
            r#"[
                {"patrimony": {"id": 1, "name": "Desk", "status": {"id": 2, "name": "In use"}}},
                {"consumable": {"id": 4, "name": "Toner", "quantity": 3,
                    "unit": {"id": 1, "name": "Piece", "abbreviation": "pc"}}},
                {}
            ]"#,
        )
        .unwrap();
        let items: Vec<Item> = rows.into_iter().filter_map(ItemDto::into_item).collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, ResourceKind::Patrimony);
        assert_eq!(items[0].status.as_deref(), Some("In use"));
        assert_eq!(items[1].quantity.as_deref(), Some("3 pc"));
        assert!(items[1].matches("TON"));
        assert!(!items[1].matches("desk"));
    }
}

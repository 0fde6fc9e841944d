use contracts::domain::common::{EntityId, ResourceKind};
use contracts::shared::confirmation::ConfirmationRequest;

/// What a confirmed request asks of a details page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsAction {
    /// Delete the entity the page shows
    DeleteShown,
    /// Delete a tag offered by the page's tag picker
    DeleteTag(EntityId),
}

/// Route a confirmed request to the page showing entity `shown_id` of `shown_kind`.
/// Requests for another entity of the same kind are not this page's business.
pub fn details_action(
    shown_kind: ResourceKind,
    shown_id: EntityId,
    request: &ConfirmationRequest,
) -> Option<DetailsAction> {
    match request.kind {
        kind if kind == shown_kind => {
            (request.id == shown_id).then_some(DetailsAction::DeleteShown)
        }
        ResourceKind::Tag => Some(DetailsAction::DeleteTag(request.id)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_kind_other_id_is_ignored() {
        let other = ConfirmationRequest::new(ResourceKind::Consumable, 8, "Toner");
        assert_eq!(details_action(ResourceKind::Consumable, 7, &other), None);
        let shown = ConfirmationRequest::new(ResourceKind::Consumable, 7, "Paper");
        assert_eq!(
            details_action(ResourceKind::Consumable, 7, &shown),
            Some(DetailsAction::DeleteShown)
        );
    }

    #[test]
    fn test_tags_and_foreign_kinds() {
        let tag = ConfirmationRequest::new(ResourceKind::Tag, 3, "Office");
        assert_eq!(
            details_action(ResourceKind::Patrimony, 7, &tag),
            Some(DetailsAction::DeleteTag(3))
        );
        let unit = ConfirmationRequest::new(ResourceKind::Unit, 7, "Box");
        assert_eq!(details_action(ResourceKind::Patrimony, 7, &unit), None);
    }
}

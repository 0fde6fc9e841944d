use std::sync::Arc;

use contracts::domain::common::ResourceKind;
use contracts::shared::confirmation::ConfirmationRequest;
use leptos::prelude::*;

use super::broadcaster::{ConfirmBroadcaster, PendingConfirmation, SubscriptionId};

/// Reactive handle on the application's [`ConfirmBroadcaster`], provided at the root.
#[derive(Clone, Copy)]
pub struct ConfirmService {
    state: RwSignal<ConfirmBroadcaster>,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ConfirmBroadcaster::new()),
        }
    }

    pub fn request(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        request: ConfirmationRequest,
    ) {
        let (title, message) = (title.into(), message.into());
        log::debug!("confirmation requested for {} #{}", request.kind, request.id);
        self.state
            .update(|b| b.request_confirmation(title, message, request));
    }

    /// Ask to delete with the standard title and message
    pub fn request_delete(&self, kind: ResourceKind, id: i64, label: impl Into<String>) {
        let request = ConfirmationRequest::new(kind, id, label);
        self.request(request.delete_title(), request.delete_message(), request);
    }

    /// Publish the pending request to every subscriber. No-op when nothing is pending.
    pub fn confirm(&self) {
        let dispatch = self.state.try_update(|b| b.confirm()).flatten();
        if let Some(dispatch) = dispatch {
            log::debug!(
                "confirmed {} #{}, notifying {} subscriber(s)",
                dispatch.request.kind,
                dispatch.request.id,
                dispatch.listener_count()
            );
            dispatch.deliver();
        }
    }

    pub fn cancel(&self) {
        let _ = self.state.try_update(|b| b.cancel());
    }

    pub fn pending(&self) -> Option<PendingConfirmation> {
        self.state.with(|b| b.pending().cloned())
    }

    pub fn is_awaiting(&self) -> bool {
        self.state.with_untracked(|b| b.is_awaiting())
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&ConfirmationRequest) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.state.update_untracked(|b| b.subscribe(Arc::new(listener)))
    }

    /// Subscribe to confirmed requests of the given kinds only
    pub fn subscribe_kinds(
        &self,
        kinds: &'static [ResourceKind],
        handler: impl Fn(ConfirmationRequest) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subscribe(move |request| {
            if kinds.contains(&request.kind) {
                handler(request.clone());
            }
        })
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        let _ = self.state.try_update_untracked(|b| b.unsubscribe(id));
    }
}

impl Default for ConfirmService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_confirm() -> ConfirmService {
    use_context::<ConfirmService>().expect("ConfirmService not found in component tree")
}

/// Run `handler` for every confirmed request whose kind is in `kinds`, for as long as the
/// calling component is mounted.
pub fn use_confirmed(
    kinds: &'static [ResourceKind],
    handler: impl Fn(ConfirmationRequest) + Send + Sync + 'static,
) {
    let service = use_confirm();
    let id = service.subscribe_kinds(kinds, handler);
    on_cleanup(move || service.unsubscribe(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    type Seen = Arc<Mutex<Vec<ConfirmationRequest>>>;

    fn recorder() -> (Seen, impl Fn(ConfirmationRequest) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |r| sink.lock().unwrap().push(r))
    }

    #[test]
    fn test_only_matching_kind_is_handled() {
        let owner = Owner::new();
        owner.with(|| {
            let service = ConfirmService::new();
            provide_context(service);
            let (tags, on_tag) = recorder();
            let (units, on_unit) = recorder();
            use_confirmed(&[ResourceKind::Tag], on_tag);
            use_confirmed(&[ResourceKind::Unit], on_unit);

            service.request_delete(ResourceKind::Unit, 4, "Kilogram");
            assert!(service.is_awaiting());
            service.confirm();

            assert!(tags.lock().unwrap().is_empty());
            let units = units.lock().unwrap();
            assert_eq!(units.len(), 1);
            assert_eq!(units[0].id, 4);
            assert!(!service.is_awaiting());
        });
    }

    #[test]
    fn test_several_kinds_share_one_subscription() {
        let owner = Owner::new();
        owner.with(|| {
            let service = ConfirmService::new();
            let (seen, handler) = recorder();
            let id =
                service.subscribe_kinds(&[ResourceKind::Consumable, ResourceKind::Tag], handler);

            service.request_delete(ResourceKind::Tag, 1, "Office");
            service.confirm();
            service.request_delete(ResourceKind::Status, 2, "Broken");
            service.confirm();
            service.unsubscribe(id);
            service.request_delete(ResourceKind::Consumable, 3, "Toner");
            service.confirm();

            let seen = seen.lock().unwrap();
            assert_eq!(seen.len(), 1);
            assert_eq!(seen[0].kind, ResourceKind::Tag);
        });
    }

    #[test]
    fn test_cleanup_unsubscribes() {
        let owner = Owner::new();
        let service = owner.with(|| {
            let service = ConfirmService::new();
            provide_context(service);
            service
        });
        let child = owner.with(Owner::new);
        let (seen, handler) = recorder();
        child.with(|| use_confirmed(&[ResourceKind::Unit], handler));
        child.cleanup();

        owner.with(|| {
            service.request_delete(ResourceKind::Unit, 4, "Kilogram");
            service.confirm();
        });
        assert!(seen.lock().unwrap().is_empty());
    }
}

//! Single-slot confirm-then-act mediator.
//!
//! A view asks for confirmation of a destructive action, a dialog shows it, and once the user
//! confirms, the request is published to every subscriber. Subscribers decide by
//! [`ResourceKind`](contracts::domain::common::ResourceKind) whether it concerns them.

use std::sync::Arc;

use contracts::shared::confirmation::ConfirmationRequest;

pub type Listener = Arc<dyn Fn(&ConfirmationRequest) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct PendingConfirmation {
    pub title: String,
    pub message: String,
    pub request: ConfirmationRequest,
}

/// Confirmed request plus the listeners registered at the moment of confirmation.
///
/// Delivery happens outside the broadcaster so listeners may subscribe, unsubscribe or raise a
/// new confirmation while being notified.
pub struct Dispatch {
    pub request: ConfirmationRequest,
    listeners: Vec<Listener>,
}

impl Dispatch {
    pub fn deliver(self) {
        for listener in &self.listeners {
            listener(&self.request);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[derive(Default)]
pub struct ConfirmBroadcaster {
    pending: Option<PendingConfirmation>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ConfirmBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a request awaiting approval. A request already pending is dropped without being
    /// published.
    pub fn request_confirmation(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        request: ConfirmationRequest,
    ) {
        if let Some(previous) = &self.pending {
            log::debug!(
                "confirmation for {} #{} replaced before being answered",
                previous.request.kind,
                previous.request.id
            );
        }
        self.pending = Some(PendingConfirmation {
            title: title.into(),
            message: message.into(),
            request,
        });
    }

    /// Take the pending request for publication. `None` when nothing is pending.
    pub fn confirm(&mut self) -> Option<Dispatch> {
        let pending = self.pending.take()?;
        Some(Dispatch {
            request: pending.request,
            listeners: self.listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
        })
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sid, _)| *sid != id);
    }

    pub fn pending(&self) -> Option<&PendingConfirmation> {
        self.pending.as_ref()
    }

    pub fn is_awaiting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ResourceKind;
    use std::sync::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<ConfirmationRequest>>>, Listener) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener: Listener = Arc::new(move |r: &ConfirmationRequest| {
            sink.lock().unwrap().push(r.clone());
        });
        (seen, listener)
    }

    fn tag(id: i64, label: &str) -> ConfirmationRequest {
        ConfirmationRequest::new(ResourceKind::Tag, id, label)
    }

    #[test]
    fn test_second_request_replaces_first() {
        let mut b = ConfirmBroadcaster::new();
        let (seen, listener) = recorder();
        b.subscribe(listener);

        b.request_confirmation("Delete tag", "first", tag(1, "a"));
        b.request_confirmation("Delete tag", "second", tag(2, "b"));
        assert_eq!(b.pending().map(|p| p.message.as_str()), Some("second"));

        b.confirm().unwrap().deliver();
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].id, 2);
    }

    #[test]
    fn test_confirm_without_pending_is_noop() {
        let mut b = ConfirmBroadcaster::new();
        let (seen, listener) = recorder();
        b.subscribe(listener);
        assert!(b.confirm().is_none());
        assert!(seen.lock().unwrap().is_empty());
        assert!(!b.is_awaiting());
    }

    #[test]
    fn test_confirm_publishes_exactly_once() {
        let mut b = ConfirmBroadcaster::new();
        let (seen, listener) = recorder();
        b.subscribe(listener);
        b.request_confirmation("t", "m", tag(7, "x"));

        b.confirm().unwrap().deliver();
        assert!(b.confirm().is_none());
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(!b.is_awaiting());
    }

    #[test]
    fn test_cancel_discards_without_publishing() {
        let mut b = ConfirmBroadcaster::new();
        let (seen, listener) = recorder();
        b.subscribe(listener);
        b.request_confirmation("t", "m", tag(3, "x"));
        b.cancel();
        assert!(b.confirm().is_none());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_fan_out_reaches_every_subscriber() {
        let mut b = ConfirmBroadcaster::new();
        let (first, l1) = recorder();
        let (second, l2) = recorder();
        b.subscribe(l1);
        b.subscribe(l2);
        b.request_confirmation(
            "Delete unit",
            "m",
            ConfirmationRequest::new(ResourceKind::Unit, 4, "kg"),
        );

        let dispatch = b.confirm().unwrap();
        assert_eq!(dispatch.listener_count(), 2);
        dispatch.deliver();
        assert_eq!(first.lock().unwrap()[0].kind, ResourceKind::Unit);
        assert_eq!(second.lock().unwrap()[0].kind, ResourceKind::Unit);
    }

    #[test]
    fn test_unsubscribed_listener_is_not_notified() {
        let mut b = ConfirmBroadcaster::new();
        let (kept, l1) = recorder();
        let (dropped, l2) = recorder();
        b.subscribe(l1);
        let id = b.subscribe(l2);
        b.unsubscribe(id);
        assert_eq!(b.subscriber_count(), 1);

        b.request_confirmation("t", "m", tag(9, "x"));
        b.confirm().unwrap().deliver();
        assert_eq!(kept.lock().unwrap().len(), 1);
        assert!(dropped.lock().unwrap().is_empty());
    }
}

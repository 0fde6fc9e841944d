//! Short-lived status messages ("Tag created.", "Failed to delete unit.").

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

/// One message slot. Each `show` bumps the generation so a timer armed for an older message
/// never clears a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashSlot {
    message: Option<FlashMessage>,
    generation: u64,
}

impl FlashSlot {
    pub fn show(&mut self, kind: FlashKind, text: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = Some(FlashMessage {
            kind,
            text: text.into(),
        });
        self.generation
    }

    /// Clear if `generation` still identifies the displayed message
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&FlashMessage> {
        self.message.as_ref()
    }
}

#[derive(Clone, Copy)]
pub struct Flash {
    slot: RwSignal<FlashSlot>,
}

impl Flash {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(FlashSlot::default()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(FlashKind::Success, text.into(), config().messages.success_ms);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(FlashKind::Error, text.into(), config().messages.error_ms);
    }

    pub fn clear(&self) {
        let _ = self.slot.try_update(|s| s.clear());
    }

    pub fn message(&self) -> Option<FlashMessage> {
        self.slot.with(|s| s.message().cloned())
    }

    fn show(&self, kind: FlashKind, text: String, lifetime_ms: u32) {
        let Some(generation) = self.slot.try_update(|s| s.show(kind, text)) else {
            return;
        };
        let slot = self.slot;
        spawn_local(async move {
            TimeoutFuture::new(lifetime_ms).await;
            // the owning view may be gone by now
            let _ = slot.try_update(|s| s.expire(generation));
        });
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_of_older_message_does_not_clear_newer() {
        let mut slot = FlashSlot::default();
        let first = slot.show(FlashKind::Success, "Tag created.");
        let second = slot.show(FlashKind::Error, "Failed to delete tag.");

        assert!(!slot.expire(first));
        assert_eq!(slot.message().map(|m| m.text.as_str()), Some("Failed to delete tag."));
        assert!(slot.expire(second));
        assert!(slot.message().is_none());
    }

    #[test]
    fn test_expire_after_manual_clear_is_noop() {
        let mut slot = FlashSlot::default();
        let generation = slot.show(FlashKind::Success, "Saved.");
        slot.clear();
        assert!(!slot.expire(generation));
    }
}

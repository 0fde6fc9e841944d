use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use contracts::shared::pagination::{Page, PageQuery, PageSlot};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::{LoadTicket, PagedListState};
use crate::shared::api::ApiError;

type PageFuture<T> = Pin<Box<dyn Future<Output = Result<Page<T>, ApiError>>>>;
type FetchPage<T> = Arc<dyn Fn(PageQuery) -> PageFuture<T> + Send + Sync>;

/// Reactive paged list bound to one collection endpoint.
///
/// Created inside a component; the signals are owned by it and the list is `Copy` so it can be
/// moved into any number of event handlers.
pub struct PagedList<T: Send + Sync + 'static> {
    state: RwSignal<PagedListState<T>>,
    fetch: StoredValue<FetchPage<T>>,
    error_message: StoredValue<String>,
}

impl<T: Send + Sync + 'static> Clone for PagedList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PagedList<T> {}

impl<T: Clone + Send + Sync + 'static> PagedList<T> {
    pub fn new<F, Fut>(page_size: usize, fetch: F) -> Self
    where
        F: Fn(PageQuery) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
    {
        let fetch: FetchPage<T> = Arc::new(move |query| Box::pin(fetch(query)));
        Self {
            state: RwSignal::new(PagedListState::new(page_size)),
            fetch: StoredValue::new(fetch),
            error_message: StoredValue::new("Failed to load data.".to_string()),
        }
    }

    /// Message shown when a page cannot be loaded, e.g. "Failed to load tags."
    pub fn with_error_message(self, message: &str) -> Self {
        self.error_message.set_value(message.to_string());
        self
    }

    /// (Re)load the current page
    pub fn load(&self) {
        if let Some(ticket) = self.state.try_update(|s| s.begin_load()) {
            self.run(ticket);
        }
    }

    pub fn reload(&self) {
        self.load();
    }

    pub fn go_to_page(&self, page: usize) {
        if let Some(ticket) = self.state.try_update(|s| s.go_to_page(page)).flatten() {
            self.run(ticket);
        }
    }

    pub fn set_page_size(&self, page_size: usize) {
        if let Some(ticket) = self.state.try_update(|s| s.set_page_size(page_size)).flatten() {
            self.run(ticket);
        }
    }

    fn run(&self, ticket: LoadTicket) {
        let Some(fetch) = self.fetch.try_get_value() else {
            return;
        };
        let fallback = self.error_message.get_value();
        let this = *self;
        log::debug!(
            "loading page {} (size {}), request #{}",
            ticket.query.page_index,
            ticket.query.page_size,
            ticket.seq
        );

        spawn_local(async move {
            let result = fetch(ticket.query).await.map_err(|e| {
                log::warn!("page {} failed to load: {e}", ticket.query.page_index);
                e.user_message(&fallback)
            });
            let applied = this
                .state
                .try_update(|s| s.finish(ticket, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("dropped stale response for request #{}", ticket.seq);
                return;
            }
            if let Some(back) = this.state.try_update(|s| s.step_back()).flatten() {
                this.run(back);
            }
        });
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn current_page(&self) -> usize {
        self.state.with(|s| s.current_page)
    }

    pub fn page_size(&self) -> usize {
        self.state.with(|s| s.page_size)
    }

    pub fn total_pages(&self) -> usize {
        self.state.with(|s| s.total_pages)
    }

    pub fn total_count(&self) -> usize {
        self.state.with(|s| s.total_count)
    }

    pub fn window(&self) -> Vec<PageSlot> {
        self.state.with(|s| s.window.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.state.with(|s| s.items.is_empty())
    }
}

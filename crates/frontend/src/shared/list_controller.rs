//! Generic list controller: one state machine for every paginated,
//! searchable, filterable collection page.
//!
//! Each page owns a [`ListController`] parameterized by its entity type and a
//! fetch function. The controller keeps the wire query consistent with the
//! UI state (any filter change resets to page 1), refetches when the query or
//! the entity's invalidation version changes, and drops responses that no
//! longer match the current query.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::cache::{use_invalidation, EntityTag};
use crate::shared::query::ListQuery;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Per-page knobs; defaults apply everywhere unless a page overrides them.
#[derive(Debug, Clone)]
pub struct ListConfig {
    pub page_size: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a remote collection. `total` is the full filtered count, not
/// the page length.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// UI state behind the query. Invariant: `page` resets to 1 whenever the
/// search text, the status filter or the page size changes; only [`go_to`]
/// may set an explicit page.
///
/// [`go_to`]: ListState::go_to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub page: usize,
    pub page_size: usize,
    pub search_text: String,
    pub status_filter: String,
}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            search_text: String::new(),
            status_filter: String::new(),
        }
    }

    /// Pagination control path: sets both fields verbatim, except that a
    /// page-size change always lands on page 1.
    pub fn go_to(&mut self, page: usize, page_size: usize) {
        self.page = if page_size != self.page_size { 1 } else { page };
        self.page_size = page_size;
    }

    pub fn search(&mut self, text: String) {
        self.search_text = text;
        self.page = 1;
    }

    pub fn filter_status(&mut self, status: String) {
        self.status_filter = status;
        self.page = 1;
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            limit: self.page_size,
            search_term: self.search_text.clone(),
            status: self.status_filter.clone(),
        }
    }
}

/// Mutually exclusive render states, checked in this order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    Loading,
    Failed(String),
    Empty,
    Populated,
}

pub struct ListController<T: Send + Sync + 'static> {
    pub state: RwSignal<ListState>,
    items: RwSignal<Vec<T>>,
    total: RwSignal<usize>,
    fetching: RwSignal<bool>,
    settled: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T: Clone + Send + Sync + 'static> ListController<T> {
    pub fn new<F, Fut>(tag: EntityTag, config: ListConfig, fetch: F) -> Self
    where
        F: Fn(ListQuery) -> Fut + Copy + 'static,
        Fut: Future<Output = Result<Page<T>, String>> + 'static,
    {
        let bus = use_invalidation();
        let controller = Self {
            state: RwSignal::new(ListState::new(config.page_size)),
            items: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            fetching: RwSignal::new(false),
            settled: RwSignal::new(false),
            error: RwSignal::new(None),
        };

        let state = controller.state;
        let items = controller.items;
        let total = controller.total;
        let fetching = controller.fetching;
        let settled = controller.settled;
        let error = controller.error;

        Effect::new(move |_| {
            let query = state.with(|s| s.query());
            // Subscribe to the entity tag; mutations bump it to force a
            // refetch with unchanged parameters.
            bus.version(tag);
            fetching.set(true);
            spawn_local(async move {
                let result = fetch(query.clone()).await;
                // A filter may have changed while this request was in
                // flight; only the response matching the current query may
                // touch the signals.
                if state.with_untracked(|s| s.query()) != query {
                    return;
                }
                match result {
                    Ok(page) => {
                        items.set(page.items);
                        total.set(page.total);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("list fetch failed: {}", e);
                        error.set(Some(e));
                    }
                }
                settled.set(true);
                fetching.set(false);
            });
        });

        controller
    }

    pub fn go_to(&self, page: usize, page_size: usize) {
        self.state.update(|s| s.go_to(page, page_size));
    }

    pub fn search(&self, text: String) {
        self.state.update(|s| s.search(text));
    }

    pub fn filter_status(&self, status: String) {
        self.state.update(|s| s.filter_status(status));
    }

    pub fn page(&self) -> usize {
        self.state.with(|s| s.page)
    }

    pub fn page_size(&self) -> usize {
        self.state.with(|s| s.page_size)
    }

    pub fn search_text(&self) -> String {
        self.state.with(|s| s.search_text.clone())
    }

    pub fn status_filter(&self) -> String {
        self.state.with(|s| s.status_filter.clone())
    }

    pub fn items(&self) -> Vec<T> {
        self.items.get()
    }

    pub fn total(&self) -> usize {
        self.total.get()
    }

    pub fn render_state(&self) -> RenderState {
        if self.fetching.get() || !self.settled.get() {
            return RenderState::Loading;
        }
        let empty = self.items.with(|i| i.is_empty());
        if empty {
            if let Some(err) = self.error.get() {
                return RenderState::Failed(err);
            }
            return RenderState::Empty;
        }
        RenderState::Populated
    }

    /// Error to surface above rows that are stale but still visible.
    pub fn stale_error(&self) -> Option<String> {
        if self.items.with(|i| i.is_empty()) {
            None
        } else {
            self.error.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_resets_page() {
        let mut state = ListState::new(10);
        state.go_to(7, 10);
        state.search("acme".to_string());
        assert_eq!(state.page, 1);
        assert_eq!(state.search_text, "acme");
    }

    #[test]
    fn test_status_filter_resets_page() {
        let mut state = ListState::new(5);
        state.go_to(4, 5);
        state.filter_status("COMPLETED".to_string());
        assert_eq!(state.page, 1);

        // Clearing the filter is also a change and resets again.
        state.go_to(3, 5);
        state.filter_status(String::new());
        assert_eq!(state.page, 1);
        assert_eq!(state.status_filter, "");
    }

    #[test]
    fn test_page_change_keeps_page_verbatim() {
        let mut state = ListState::new(10);
        state.go_to(6, 10);
        assert_eq!(state.page, 6);
        assert_eq!(state.page_size, 10);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        // Changing size from page 3 lands on (1, 20), not (3, 20).
        let mut state = ListState::new(5);
        state.go_to(3, 5);
        state.go_to(3, 20);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 20);
    }

    #[test]
    fn test_cleared_status_emits_no_status_param() {
        let mut state = ListState::new(10);
        state.filter_status("NOT_STARTED".to_string());
        assert!(state.query().params().iter().any(|p| p.name == "status"));

        state.filter_status(String::new());
        let params = state.query().params();
        assert!(params.iter().all(|p| p.name != "status"));
        assert!(params.iter().any(|p| p.name == "page"));
        assert!(params.iter().any(|p| p.name == "limit"));
    }

    #[test]
    fn test_query_reflects_state() {
        let mut state = ListState::new(10);
        state.search("tower".to_string());
        let query = state.query();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.search_term, "tower");
        assert_eq!(query.status, "");
    }
}

use leptos::*;

use crate::{
    api::{ListQuery, PageResponse},
    components::{
        date_range::DateRange,
        pagination::{PaginationState, DEFAULT_PAGE_SIZE},
    },
};

/// Paging and date-range filter owned by a list view model.
///
/// The footer only reports intents; this state applies them. Changing the page
/// size or the range starts over at the first page.
#[derive(Clone, Copy)]
pub struct PagedListState {
    pub page_index: RwSignal<u32>,
    pub page_size: RwSignal<u32>,
    pub range: RwSignal<DateRange>,
    reload: RwSignal<u32>,
}

impl Default for PagedListState {
    fn default() -> Self {
        Self {
            page_index: create_rw_signal(0),
            page_size: create_rw_signal(DEFAULT_PAGE_SIZE),
            range: create_rw_signal(DateRange::default()),
            reload: create_rw_signal(0),
        }
    }
}

impl PagedListState {
    pub fn query(&self) -> ListQuery {
        let range = self.range.get();
        ListQuery::new(self.page_index.get(), self.page_size.get()).with_range(range.start, range.end)
    }

    /// Resource source: the query plus a counter bumped by [`Self::refresh`].
    pub fn source(&self) -> (ListQuery, u32) {
        (self.query(), self.reload.get())
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn go_to_page(&self, index: u32) {
        self.page_index.set(index);
    }

    pub fn change_page_size(&self, size: u32) {
        batch(|| {
            self.page_size.set(size);
            self.page_index.set(0);
        });
    }

    pub fn change_range(&self, range: DateRange) {
        batch(|| {
            self.range.set(range);
            self.page_index.set(0);
        });
    }

    pub fn pagination<T>(&self, page: Option<&PageResponse<T>>) -> PaginationState {
        let page_index = self.page_index.get();
        let page_size = self.page_size.get();
        match page {
            Some(page) => PaginationState::from_page(page, page_index, page_size),
            None => PaginationState {
                page_index,
                page_size,
                ..PaginationState::default()
            },
        }
    }

    pub fn on_page_change(self) -> Callback<u32> {
        Callback::new(move |index: u32| self.go_to_page(index))
    }

    pub fn on_page_size_change(self) -> Callback<u32> {
        Callback::new(move |size: u32| self.change_page_size(size))
    }

    pub fn on_range_change(self) -> Callback<DateRange> {
        Callback::new(move |range: DateRange| self.change_range(range))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::components::date_range::edit_range;
    use crate::test_support::ssr::with_runtime;
    use std::{cell::RefCell, rc::Rc};

    fn record_queries(state: PagedListState) -> Rc<RefCell<Vec<ListQuery>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        create_isomorphic_effect(move |_| sink.borrow_mut().push(state.query()));
        seen.borrow_mut().clear();
        seen
    }

    #[test]
    fn page_size_change_issues_a_single_query() {
        with_runtime(|| {
            let state = PagedListState::default();
            state.go_to_page(1);
            let seen = record_queries(state);
            state.change_page_size(20);
            assert_eq!(*seen.borrow(), vec![ListQuery::new(0, 20)]);
        });
    }

    #[test]
    fn range_change_issues_a_single_query() {
        with_runtime(|| {
            let state = PagedListState::default();
            state.go_to_page(2);
            let seen = record_queries(state);
            state.change_range(DateRange::new(Some("2025-01-01"), None));
            assert_eq!(
                *seen.borrow(),
                vec![ListQuery::new(0, 10).with_range(Some("2025-01-01".into()), None)]
            );
        });
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        with_runtime(|| {
            let state = PagedListState::default();
            state.go_to_page(1);
            state.on_page_size_change().call(20);
            assert_eq!(state.page_index.get(), 0);
            assert_eq!(state.query(), ListQuery::new(0, 20));
        });
    }

    #[test]
    fn picker_edit_reaches_the_list_once() {
        with_runtime(|| {
            let state = PagedListState::default();
            state.go_to_page(1);
            let seen = record_queries(state);
            edit_range(state.range, Some(state.on_range_change()), |r| {
                r.set_start("2025-01-01")
            });
            assert_eq!(
                *seen.borrow(),
                vec![ListQuery::new(0, 10).with_range(Some("2025-01-01".into()), None)]
            );
        });
    }

    #[test]
    fn range_change_resets_page_and_feeds_query() {
        with_runtime(|| {
            let state = PagedListState::default();
            state.go_to_page(2);
            state
                .range
                .set(DateRange::new(Some("2025-01-01"), Some("2025-01-31")));
            state.on_range_change().call(state.range.get());
            let query = state.query();
            assert_eq!(query.page, 0);
            assert_eq!(query.start_date.as_deref(), Some("2025-01-01"));
            assert_eq!(query.end_date.as_deref(), Some("2025-01-31"));
        });
    }

    #[test]
    fn refresh_changes_source_without_touching_query() {
        with_runtime(|| {
            let state = PagedListState::default();
            let (query, first) = state.source();
            state.refresh();
            let (same_query, second) = state.source();
            assert_eq!(query, same_query);
            assert_ne!(first, second);
        });
    }

    #[test]
    fn pagination_uses_fetched_totals() {
        with_runtime(|| {
            let state = PagedListState::default();
            state.go_to_page(1);
            let page: PageResponse<u8> = PageResponse {
                content: vec![],
                total_elements: 25,
                total_pages: 3,
                number: 1,
                size: 10,
            };
            let pagination = state.pagination(Some(&page));
            assert!(pagination.can_next_page());
            assert_eq!(pagination.total_elements, 25);
            assert_eq!(state.pagination::<u8>(None).total_pages, 0);
        });
    }
}

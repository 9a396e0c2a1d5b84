use leptos::*;

use crate::api::PageResponse;

pub const PAGE_SIZE_OPTIONS: [u32; 5] = [10, 20, 30, 40, 50];
pub const DEFAULT_PAGE_SIZE: u32 = PAGE_SIZE_OPTIONS[0];

/// What the footer displays. The owning view fills it from the last fetched
/// page; the footer only reads it and reports intents back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_elements: 0,
            total_pages: 0,
        }
    }
}

impl PaginationState {
    pub fn from_page<T>(page: &PageResponse<T>, page_index: u32, page_size: u32) -> Self {
        Self {
            page_index,
            page_size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.total_pages > 0 && self.page_index + 1 < self.total_pages
    }

    pub fn last_page_index(&self) -> u32 {
        self.total_pages.saturating_sub(1)
    }

    /// 1-based range of rows on the current page, `None` when nothing is shown.
    pub fn visible_range(&self) -> Option<(u64, u64)> {
        if self.total_elements == 0 {
            return None;
        }
        let start = self.page_index as u64 * self.page_size as u64 + 1;
        if start > self.total_elements {
            return None;
        }
        let end = (start + self.page_size as u64 - 1).min(self.total_elements);
        Some((start, end))
    }

    pub fn summary(&self) -> String {
        match self.visible_range() {
            Some((start, end)) => format!("Showing {}-{} of {}", start, end, self.total_elements),
            None => "No entries".to_string(),
        }
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.total_pages.max(1))
    }
}

pub fn parse_page_size(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|size| PAGE_SIZE_OPTIONS.contains(size))
}

#[component]
pub fn PaginationFooter(
    #[prop(into)] state: Signal<PaginationState>,
    #[prop(into)] on_page_change: Callback<u32>,
    #[prop(into)] on_page_size_change: Callback<u32>,
) -> impl IntoView {
    let go_first = move |_| on_page_change.call(0);
    let go_previous = move |_| {
        let current = state.get_untracked();
        if current.can_previous_page() {
            on_page_change.call(current.page_index - 1);
        }
    };
    let go_next = move |_| {
        let current = state.get_untracked();
        if current.can_next_page() {
            on_page_change.call(current.page_index + 1);
        }
    };
    let go_last = move |_| on_page_change.call(state.get_untracked().last_page_index());
    let on_size = move |ev: web_sys::Event| {
        if let Some(size) = parse_page_size(&event_target_value(&ev)) {
            on_page_size_change.call(size);
        }
    };

    let nav_class = "px-2 py-1 rounded border border-border text-sm text-fg disabled:opacity-40 disabled:cursor-not-allowed hover:bg-action-ghost-bg-hover";

    view! {
        <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between px-4 py-3 border-t border-border text-sm">
            <div class="flex items-center gap-2 text-fg-muted">
                <span>"Rows per page"</span>
                <select
                    class="rounded-md border border-border bg-surface px-2 py-1"
                    prop:value=move || state.get().page_size.to_string()
                    on:change=on_size
                >
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option value=size.to_string() selected=move || state.get().page_size == size>
                                    {size.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <span data-testid="pagination-summary">{move || state.get().summary()}</span>
            </div>
            <div class="flex items-center gap-1">
                <button
                    type="button"
                    class=nav_class
                    aria-label="First page"
                    disabled=move || !state.get().can_previous_page()
                    on:click=go_first
                >
                    {"«"}
                </button>
                <button
                    type="button"
                    class=nav_class
                    aria-label="Previous page"
                    disabled=move || !state.get().can_previous_page()
                    on:click=go_previous
                >
                    {"‹"}
                </button>
                <span class="px-2 text-fg" data-testid="pagination-page">{move || state.get().page_label()}</span>
                <button
                    type="button"
                    class=nav_class
                    aria-label="Next page"
                    disabled=move || !state.get().can_next_page()
                    on:click=go_next
                >
                    {"›"}
                </button>
                <button
                    type="button"
                    class=nav_class
                    aria-label="Last page"
                    disabled=move || !state.get().can_next_page()
                    on:click=go_last
                >
                    {"»"}
                </button>
            </div>
        </div>
    }
}

use leptos::*;

use crate::utils::format::format_date;

pub const DATE_RANGE_PLACEHOLDER: &str = "Select date range";

/// Optional start/end bounds as raw `YYYY-MM-DD` input values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl DateRange {
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.and_then(non_empty),
            end: end.and_then(non_empty),
        }
    }

    pub fn set_start(&mut self, raw: &str) {
        self.start = non_empty(raw);
    }

    pub fn set_end(&mut self, raw: &str) {
        self.end = non_empty(raw);
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Lower bound for the end input: the end date may not precede the start.
    pub fn end_min(&self) -> Option<String> {
        self.start.clone()
    }

    pub fn summary(&self) -> String {
        match (self.start.as_deref(), self.end.as_deref()) {
            (None, None) => DATE_RANGE_PLACEHOLDER.to_string(),
            (Some(start), None) => format!("From {}", format_date(start)),
            (None, Some(end)) => format!("Until {}", format_date(end)),
            (Some(start), Some(end)) => format!("{} - {}", format_date(start), format_date(end)),
        }
    }
}

/// Applies one edit and reports it, so listeners see a single change.
pub fn edit_range(
    range: RwSignal<DateRange>,
    on_change: Option<Callback<DateRange>>,
    edit: impl FnOnce(&mut DateRange),
) {
    batch(|| {
        range.update(edit);
        if let Some(cb) = on_change {
            cb.call(range.get_untracked());
        }
    });
}

#[component]
pub fn DateRangePicker(
    range: RwSignal<DateRange>,
    #[prop(optional, into)] on_change: Option<Callback<DateRange>>,
) -> impl IntoView {
    let on_start = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        edit_range(range, on_change, |r| r.set_start(&value));
    };
    let on_end = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        edit_range(range, on_change, |r| r.set_end(&value));
    };
    let on_clear = move |_| edit_range(range, on_change, DateRange::clear);

    view! {
        <div class="flex flex-col gap-2 sm:flex-row sm:items-end">
            <div>
                <label class="block text-xs font-medium text-fg-muted">"Start date"</label>
                <input
                    type="date"
                    class="mt-1 block rounded-md border border-border bg-surface px-2 py-1 text-sm"
                    prop:value=move || range.get().start.unwrap_or_default()
                    on:change=on_start
                />
            </div>
            <div>
                <label class="block text-xs font-medium text-fg-muted">"End date"</label>
                <input
                    type="date"
                    class="mt-1 block rounded-md border border-border bg-surface px-2 py-1 text-sm"
                    min=move || range.get().end_min()
                    prop:value=move || range.get().end.unwrap_or_default()
                    on:change=on_end
                />
            </div>
            <div class="flex items-center gap-2">
                <span class="text-sm text-fg" data-testid="date-range-summary">
                    {move || range.get().summary()}
                </span>
                <button
                    type="button"
                    class="text-sm text-fg-muted hover:text-fg disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || range.get().is_empty()
                    on:click=on_clear
                >
                    "Clear"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_without_bounds_is_placeholder() {
        assert_eq!(DateRange::default().summary(), DATE_RANGE_PLACEHOLDER);
    }

    #[test]
    fn summary_with_start_only() {
        let range = DateRange::new(Some("2025-01-02"), None);
        assert_eq!(range.summary(), "From 2 Januari 2025");
    }

    #[test]
    fn summary_with_end_only() {
        let range = DateRange::new(None, Some("2025-02-28"));
        assert_eq!(range.summary(), "Until 28 Februari 2025");
    }

    #[test]
    fn summary_with_both_bounds() {
        let range = DateRange::new(Some("2025-01-01"), Some("2025-01-31"));
        assert_eq!(range.summary(), "1 Januari 2025 - 31 Januari 2025");
    }

    #[test]
    fn malformed_bounds_render_fallback_dash() {
        let range = DateRange::new(Some("2025-99-99"), None);
        assert_eq!(range.summary(), "From -");
    }

    #[test]
    fn blank_inputs_unset_bounds() {
        let mut range = DateRange::new(Some("2025-01-01"), Some("2025-01-31"));
        range.set_end("  ");
        assert_eq!(range.end, None);
        assert_eq!(range.end_min().as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn clear_unsets_both_bounds() {
        let mut range = DateRange::new(Some("2025-01-01"), Some("2025-01-31"));
        range.clear();
        assert!(range.is_empty());
        assert_eq!(range.end_min(), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn picker_renders_summary_and_min_constraint() {
        let html = render_to_string(|| {
            let range = create_rw_signal(DateRange::new(Some("2025-03-01"), None));
            view! { <DateRangePicker range=range /> }
        });
        assert!(html.contains("From 1 Maret 2025"));
        assert!(html.contains("min=\"2025-03-01\""));
    }
}

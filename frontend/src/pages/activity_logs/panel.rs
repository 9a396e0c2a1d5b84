use leptos::*;

use crate::{
    api::ActivityLog,
    components::{
        date_range::DateRangePicker,
        empty_state::{EmptyState, ErrorMessage, LoadingState},
        layout::PageFrame,
        pagination::PaginationFooter,
    },
    utils::format::format_date_time,
};

use super::view_model::use_activity_logs_view_model;

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

#[component]
pub fn ActivityLogsPage() -> impl IntoView {
    let vm = use_activity_logs_view_model();
    let list = vm.list;
    let pagination = Signal::derive(move || {
        let page = vm.logs_resource.get().and_then(Result::ok);
        list.pagination(page.as_ref())
    });

    view! {
        <PageFrame title="Activity Logs" description="Who changed what, and when.">
            <div class="bg-surface-elevated shadow rounded-lg">
                <div class="p-4 flex justify-end">
                    <DateRangePicker range=list.range on_change=list.on_range_change() />
                </div>
                <div class="overflow-x-auto">
                    <Suspense fallback=move || view! { <LoadingState /> }>
                        {move || {
                            vm.logs_resource
                                .get()
                                .map(|result| match result {
                                    Ok(page) if page.content.is_empty() => view! {
                                        <div class="p-4"><EmptyState title="No activity recorded" /></div>
                                    }
                                    .into_view(),
                                    Ok(page) => view! { <ActivityLogTable rows=page.content /> }.into_view(),
                                    Err(err) => view! { <div class="p-4"><ErrorMessage message=err.message /></div> }.into_view(),
                                })
                        }}
                    </Suspense>
                </div>
                <PaginationFooter
                    state=pagination
                    on_page_change=list.on_page_change()
                    on_page_size_change=list.on_page_size_change()
                />
            </div>
        </PageFrame>
    }
}

#[component]
pub fn ActivityLogTable(rows: Vec<ActivityLog>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead class="bg-surface-muted">
                <tr>
                    <th class=TH>"Time"</th>
                    <th class=TH>"Actor"</th>
                    <th class=TH>"Action"</th>
                    <th class=TH>"Entity"</th>
                    <th class=TH>"Description"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <tr>
                            <td class=TD>{format_date_time(&row.timestamp)}</td>
                            <td class=TD>{row.actor}</td>
                            <td class=TD>{row.action}</td>
                            <td class=TD>{row.entity}</td>
                            <td class="px-4 py-3 text-sm text-fg">{row.description.unwrap_or_else(|| "-".into())}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

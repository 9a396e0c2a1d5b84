use leptos::*;

use crate::{
    api::Schedule,
    components::{
        empty_state::{EmptyState, ErrorMessage, LoadingState},
        layout::PageFrame,
    },
    utils::format::format_time,
};

use super::view_model::{tolerance_label, use_schedules_view_model};

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

#[component]
pub fn SchedulesPage() -> impl IntoView {
    let vm = use_schedules_view_model();
    view! {
        <PageFrame title="Schedules" description="Working hours assigned to employees.">
            <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
                <Suspense fallback=move || view! { <LoadingState /> }>
                    {move || {
                        vm.schedules_resource
                            .get()
                            .map(|result| match result {
                                Ok(rows) if rows.is_empty() => view! {
                                    <div class="p-4"><EmptyState title="No schedules" /></div>
                                }
                                .into_view(),
                                Ok(rows) => view! { <ScheduleTable rows=rows /> }.into_view(),
                                Err(err) => view! { <div class="p-4"><ErrorMessage message=err.message /></div> }.into_view(),
                            })
                    }}
                </Suspense>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn ScheduleTable(rows: Vec<Schedule>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead class="bg-surface-muted">
                <tr>
                    <th class=TH>"Name"</th>
                    <th class=TH>"Start"</th>
                    <th class=TH>"End"</th>
                    <th class=TH>"Late tolerance"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <tr>
                            <td class=TD>{row.name}</td>
                            <td class=TD>{format_time(&row.start_time)}</td>
                            <td class=TD>{format_time(&row.end_time)}</td>
                            <td class=TD>{tolerance_label(row.late_tolerance)}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

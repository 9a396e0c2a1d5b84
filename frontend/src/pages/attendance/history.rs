use leptos::*;

use crate::{
    api::Attendance,
    components::{
        common::StatusBadge,
        date_range::DateRangePicker,
        empty_state::{EmptyState, ErrorMessage, LoadingState},
        layout::PageFrame,
        pagination::PaginationFooter,
    },
    utils::format::{format_minutes, format_optional_date, format_optional_time},
};

use super::view_model::use_attendance_history_view_model;

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

#[component]
pub fn AttendanceHistoryPage() -> impl IntoView {
    let vm = use_attendance_history_view_model();
    let list = vm.list;
    let show_employee = vm.shows_employee_column();
    let pagination = Signal::derive(move || {
        let page = vm.history_resource.get().and_then(Result::ok);
        list.pagination(page.as_ref())
    });

    view! {
        <PageFrame title="Attendance History" description="Past attendance records by date.">
            <div class="bg-surface-elevated shadow rounded-lg p-4">
                <DateRangePicker range=list.range on_change=list.on_range_change() />
            </div>
            <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
                <Suspense fallback=move || view! { <LoadingState /> }>
                    {move || {
                        vm.history_resource
                            .get()
                            .map(|result| match result {
                                Ok(page) if page.content.is_empty() => view! {
                                    <div class="p-4">
                                        <EmptyState
                                            title="No attendance records"
                                            description="Nothing was recorded in this range."
                                        />
                                    </div>
                                }
                                .into_view(),
                                Ok(page) => view! {
                                    <AttendanceTable rows=page.content show_employee=show_employee.get() />
                                }
                                .into_view(),
                                Err(err) => view! { <div class="p-4"><ErrorMessage message=err.message /></div> }.into_view(),
                            })
                    }}
                </Suspense>
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
pub fn AttendanceTable(rows: Vec<Attendance>, show_employee: bool) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead class="bg-surface-muted">
                <tr>
                    <th class=TH>"Date"</th>
                    {show_employee.then(|| view! { <th class=TH>"Employee"</th> })}
                    <th class=TH>"Clock in"</th>
                    <th class=TH>"Break"</th>
                    <th class=TH>"Clock out"</th>
                    <th class=TH>"Status"</th>
                    <th class=TH>"Late"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {rows
                    .into_iter()
                    .map(|row| {
                        let breaks = format!(
                            "{} - {}",
                            format_optional_time(row.break_in.as_deref()),
                            format_optional_time(row.break_out.as_deref())
                        );
                        view! {
                            <tr>
                                <td class=TD>{format_optional_date(row.clock_in.as_deref())}</td>
                                {show_employee.then(|| view! { <td class=TD>{row.employee_name()}</td> })}
                                <td class=TD>{format_optional_time(row.clock_in.as_deref())}</td>
                                <td class=TD>{breaks}</td>
                                <td class=TD>{format_optional_time(row.clock_out.as_deref())}</td>
                                <td class=TD><StatusBadge status=row.status.clone() /></td>
                                <td class=TD>{format_minutes(row.late_minutes)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

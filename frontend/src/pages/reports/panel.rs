use chrono::Datelike;
use leptos::*;

use crate::{
    components::{date_range::DateRangePicker, layout::PageFrame},
    utils::time::today_in_app_tz,
};

use super::{
    view_model::{
        year_options, ExpensesReportViewModel, LateEmployeesReportViewModel,
        LeaveOvertimeReportViewModel,
    },
    widgets::{ExpensesWidget, LateEmployeesWidget, LeaveOvertimeWidget},
};

#[component]
pub fn ExpensesReportPage() -> impl IntoView {
    let vm = ExpensesReportViewModel::new();
    let years = year_options(today_in_app_tz().year());
    let on_year = move |ev: web_sys::Event| {
        if let Ok(year) = event_target_value(&ev).parse::<i32>() {
            vm.year.set(year);
        }
    };

    view! {
        <PageFrame title="Expenses Report" description="Salary, overtime and penalty totals per month.">
            <div class="bg-surface-elevated shadow rounded-lg p-4 flex items-center gap-2 text-sm">
                <label class="text-fg-muted">"Year"</label>
                <select
                    class="rounded-md border border-border bg-surface px-2 py-1"
                    prop:value=move || vm.year.get().to_string()
                    on:change=on_year
                >
                    {years
                        .into_iter()
                        .map(|year| view! {
                            <option value=year.to_string() selected=move || vm.year.get() == year>
                                {year.to_string()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
            <ExpensesWidget report=vm.report_signal() />
        </PageFrame>
    }
}

#[component]
pub fn LateEmployeesReportPage() -> impl IntoView {
    let vm = LateEmployeesReportViewModel::new();
    view! {
        <PageFrame title="Late Employees" description="Who clocked in late, and how often.">
            <div class="bg-surface-elevated shadow rounded-lg p-4">
                <DateRangePicker range=vm.range />
            </div>
            <LateEmployeesWidget report=vm.report_signal() />
        </PageFrame>
    }
}

#[component]
pub fn LeaveOvertimeReportPage() -> impl IntoView {
    let vm = LeaveOvertimeReportViewModel::new();
    view! {
        <PageFrame title="Leave vs Overtime" description="Leave days against overtime in the selected range.">
            <div class="bg-surface-elevated shadow rounded-lg p-4">
                <DateRangePicker range=vm.range />
            </div>
            <LeaveOvertimeWidget report=vm.report_signal() />
        </PageFrame>
    }
}

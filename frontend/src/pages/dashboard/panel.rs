use leptos::*;

use crate::{
    api::Role,
    components::{
        empty_state::{ErrorMessage, LoadingState},
        layout::PageFrame,
    },
    pages::{
        attendance::utils::AttendancePhase,
        reports::{
            view_model::{
                ExpensesReportViewModel, LateEmployeesReportViewModel,
                LeaveOvertimeReportViewModel,
            },
            widgets::{ExpensesWidget, LateEmployeesWidget, LeaveOvertimeWidget},
        },
    },
    utils::format::format_optional_time,
};

use super::{
    clock::Clock,
    view_model::{greeting, use_dashboard_view_model, DashboardViewModel},
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    view! {
        <PageFrame title="Dashboard">
            <p class="text-fg">{move || greeting(&vm.display_name.get())}</p>
            {move || match vm.role.get() {
                Some(Role::Owner) => view! { <OwnerOverview /> }.into_view(),
                _ => view! { <StaffOverview vm=vm /> }.into_view(),
            }}
        </PageFrame>
    }
}

#[component]
fn OwnerOverview() -> impl IntoView {
    let expenses = ExpensesReportViewModel::new();
    let late = LateEmployeesReportViewModel::new();
    let leave_overtime = LeaveOvertimeReportViewModel::new();
    view! {
        <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
            <div class="xl:col-span-2">
                <ExpensesWidget report=expenses.report_signal() />
            </div>
            <LateEmployeesWidget report=late.report_signal() />
            <LeaveOvertimeWidget report=leave_overtime.report_signal() />
        </div>
    }
}

#[component]
fn StaffOverview(vm: DashboardViewModel) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <Clock />
            <div class="lg:col-span-2 bg-surface-elevated shadow rounded-lg p-6 space-y-3">
                <h2 class="text-lg font-semibold text-fg">"Today's attendance"</h2>
                <Suspense fallback=move || view! { <LoadingState /> }>
                    {move || {
                        vm.today_resource
                            .get()
                            .map(|result| match result {
                                Ok(today) => {
                                    let phase = AttendancePhase::from_attendance(today.as_ref());
                                    let clock_in = format_optional_time(
                                        today.as_ref().and_then(|a| a.clock_in.as_deref()),
                                    );
                                    view! {
                                        <p class="text-sm text-fg-muted">
                                            "Status: "
                                            <span class="font-semibold text-fg">{phase.label()}</span>
                                        </p>
                                        <p class="text-sm text-fg-muted">"Clock in: " {clock_in}</p>
                                    }
                                    .into_view()
                                }
                                Err(err) => view! { <ErrorMessage message=err.message /> }.into_view(),
                            })
                    }}
                </Suspense>
                <a
                    href="/attendance/daily"
                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                >
                    "Go to daily attendance"
                </a>
            </div>
        </div>
    }
}

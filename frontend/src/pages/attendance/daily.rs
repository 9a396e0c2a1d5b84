use leptos::*;

use crate::{
    api::Attendance,
    components::{
        common::{Button, ButtonVariant, StatusBadge},
        empty_state::{ErrorMessage, LoadingState},
        layout::PageFrame,
        result_dialog::ResultDialog,
    },
    pages::dashboard::clock::Clock,
    utils::format::{format_minutes, format_optional_time},
};

use super::{
    utils::ClockKind,
    view_model::use_daily_attendance_view_model,
};

#[component]
pub fn DailyAttendancePage() -> impl IntoView {
    let vm = use_daily_attendance_view_model();
    let phase = vm.phase();
    let pending = vm.clock_action.pending();
    let break_left = vm.break_left();

    view! {
        <PageFrame
            title="Daily Attendance"
            description="Record clock in, breaks and clock out for today."
        >
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="space-y-4">
                    <Clock />
                    <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
                        <p class="text-sm text-fg-muted">
                            "Status: "
                            <span class="font-semibold text-fg">{move || phase.get().label()}</span>
                        </p>
                        <div class="grid grid-cols-2 gap-2">
                            {ClockKind::ALL
                                .into_iter()
                                .map(|kind| {
                                    let variant = if kind == ClockKind::ClockOut {
                                        ButtonVariant::Danger
                                    } else {
                                        ButtonVariant::Primary
                                    };
                                    view! {
                                        <Button
                                            variant=variant
                                            disabled=Signal::derive(move || !phase.get().allows(kind, break_left.get()))
                                            loading=Signal::derive(move || pending.get())
                                            on:click=move |_| vm.clock_action.dispatch(kind)
                                        >
                                            <i class=format!("fas {} mr-2", kind.icon())></i>
                                            {kind.label()}
                                        </Button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="lg:col-span-2 bg-surface-elevated shadow rounded-lg p-6">
                    <h2 class="text-lg font-semibold text-fg mb-4">"Today"</h2>
                    <Suspense fallback=move || view! { <LoadingState /> }>
                        {move || {
                            vm.today_resource
                                .get()
                                .map(|result| match result {
                                    Ok(Some(attendance)) => view! { <TodaySummary attendance=attendance /> }.into_view(),
                                    Ok(None) => view! {
                                        <p class="text-sm text-fg-muted">"No attendance recorded yet today."</p>
                                    }
                                    .into_view(),
                                    Err(err) => view! { <ErrorMessage message=err.message /> }.into_view(),
                                })
                        }}
                    </Suspense>
                </div>
            </div>
            <ResultDialog result=vm.result on_close=vm.on_result_close() />
        </PageFrame>
    }
}

#[component]
fn TodaySummary(attendance: Attendance) -> impl IntoView {
    let rows = [
        ("Clock in", format_optional_time(attendance.clock_in.as_deref())),
        ("Break start", format_optional_time(attendance.break_in.as_deref())),
        ("Break end", format_optional_time(attendance.break_out.as_deref())),
        ("Clock out", format_optional_time(attendance.clock_out.as_deref())),
    ];
    view! {
        <div class="space-y-4">
            <dl class="grid grid-cols-2 sm:grid-cols-4 gap-4">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div>
                            <dt class="text-xs text-fg-muted">{label}</dt>
                            <dd class="text-xl font-mono text-fg">{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
            <div class="flex items-center gap-3 text-sm">
                <StatusBadge status=attendance.status.clone() />
                {(attendance.late_minutes > 0).then(|| view! {
                    <span class="text-status-warning-text">
                        {format!("Late {}", format_minutes(attendance.late_minutes))}
                    </span>
                })}
            </div>
        </div>
    }
}

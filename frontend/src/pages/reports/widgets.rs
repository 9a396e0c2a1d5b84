use leptos::*;

use crate::{
    api::{ApiError, ExpensesReport, LateEmployeesReport, LeaveVsOvertimeReport},
    components::empty_state::{EmptyState, ErrorMessage, LoadingState},
    utils::format::{format_currency, format_minutes, format_percentage},
};

/// CSS width for a bar relative to the largest value in its chart.
pub fn bar_width(value: f64, max: f64) -> String {
    if !value.is_finite() || !max.is_finite() || max <= 0.0 {
        return "0%".to_string();
    }
    format!("{:.0}%", (value / max * 100.0).clamp(0.0, 100.0))
}

#[component]
fn WidgetCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">{title}</h2>
            {children()}
        </section>
    }
}

#[component]
fn Stat(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="rounded-md bg-surface-muted p-3">
            <p class="text-xs text-fg-muted">{label}</p>
            <p class="text-lg font-semibold text-fg">{value}</p>
        </div>
    }
}

fn pending_or_error(state: Option<Result<(), ApiError>>) -> Option<View> {
    match state {
        None => Some(view! { <LoadingState /> }.into_view()),
        Some(Err(err)) => Some(view! { <ErrorMessage message=err.message /> }.into_view()),
        Some(Ok(())) => None,
    }
}

#[component]
pub fn ExpensesWidget(
    #[prop(into)] report: Signal<Option<Result<ExpensesReport, ApiError>>>,
) -> impl IntoView {
    view! {
        <WidgetCard title="Expenses">
            {move || match report.get() {
                Some(Ok(report)) => render_expenses(report),
                other => pending_or_error(other.map(|r| r.map(|_| ()))).unwrap_or_else(|| ().into_view()),
            }}
        </WidgetCard>
    }
}

fn render_expenses(report: ExpensesReport) -> View {
    let max = report
        .monthly_totals
        .iter()
        .map(|m| m.total)
        .fold(0.0_f64, f64::max);
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-3 gap-3">
            <Stat label="Salaries" value=format_currency(report.total_salary) />
            <Stat label="Overtime" value=format_currency(report.total_overtime) />
            <Stat label="Penalties" value=format_currency(report.total_penalty) />
        </div>
        {if report.monthly_totals.is_empty() {
            view! { <EmptyState title="No expenses" description=format!("Nothing recorded in {}.", report.year) /> }
                .into_view()
        } else {
            report
                .monthly_totals
                .into_iter()
                .map(|month| view! {
                    <div class="flex items-center gap-3 text-sm">
                        <span class="w-20 text-fg-muted">{month.month.clone()}</span>
                        <div class="flex-1 h-3 rounded bg-surface-muted">
                            <div class="h-3 rounded bg-action-primary-bg" style:width=bar_width(month.total, max)></div>
                        </div>
                        <span class="w-36 text-right text-fg">{format_currency(month.total)}</span>
                    </div>
                })
                .collect_view()
        }}
    }
    .into_view()
}

#[component]
pub fn LateEmployeesWidget(
    #[prop(into)] report: Signal<Option<Result<LateEmployeesReport, ApiError>>>,
) -> impl IntoView {
    view! {
        <WidgetCard title="Late Employees">
            {move || match report.get() {
                Some(Ok(report)) => render_late_employees(report),
                other => pending_or_error(other.map(|r| r.map(|_| ()))).unwrap_or_else(|| ().into_view()),
            }}
        </WidgetCard>
    }
}

fn render_late_employees(report: LateEmployeesReport) -> View {
    let max = report
        .distribution
        .iter()
        .map(|bucket| bucket.count as f64)
        .fold(0.0_f64, f64::max);
    view! {
        <Stat label="Late check-ins" value=format_percentage(report.late_percentage) />
        {if report.top_late_employees.is_empty() {
            view! { <EmptyState title="Nobody was late" /> }.into_view()
        } else {
            view! {
                <ol class="divide-y divide-border text-sm">
                    {report
                        .top_late_employees
                        .into_iter()
                        .map(|employee| view! {
                            <li class="flex justify-between py-2">
                                <span class="text-fg">{employee.name}</span>
                                <span class="text-fg-muted">
                                    {format!("{}x, {}", employee.late_count, format_minutes(employee.total_late_minutes))}
                                </span>
                            </li>
                        })
                        .collect_view()}
                </ol>
            }
            .into_view()
        }}
        {report
            .distribution
            .into_iter()
            .map(|bucket| view! {
                <div class="flex items-center gap-3 text-sm">
                    <span class="w-28 text-fg-muted">{bucket.label}</span>
                    <div class="flex-1 h-3 rounded bg-surface-muted">
                        <div class="h-3 rounded bg-status-warning-text" style:width=bar_width(bucket.count as f64, max)></div>
                    </div>
                    <span class="w-10 text-right text-fg">{bucket.count}</span>
                </div>
            })
            .collect_view()}
    }
    .into_view()
}

#[component]
pub fn LeaveOvertimeWidget(
    #[prop(into)] report: Signal<Option<Result<LeaveVsOvertimeReport, ApiError>>>,
) -> impl IntoView {
    view! {
        <WidgetCard title="Leave vs Overtime">
            {move || match report.get() {
                Some(Ok(report)) => render_leave_overtime(report),
                other => pending_or_error(other.map(|r| r.map(|_| ()))).unwrap_or_else(|| ().into_view()),
            }}
        </WidgetCard>
    }
}

fn render_leave_overtime(report: LeaveVsOvertimeReport) -> View {
    view! {
        <div class="grid grid-cols-2 gap-3">
            <Stat
                label="Leave"
                value=format!("{} ({})", report.total_leaves, format_percentage(report.leave_percentage))
            />
            <Stat
                label="Overtime"
                value=format!("{} ({})", report.total_overtimes, format_percentage(report.overtime_percentage))
            />
        </div>
        <table class="min-w-full text-sm">
            <thead>
                <tr class="text-left text-fg-muted">
                    <th class="py-1">"Month"</th>
                    <th class="py-1">"Leave"</th>
                    <th class="py-1">"Overtime"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {report
                    .monthly
                    .into_iter()
                    .map(|row| view! {
                        <tr>
                            <td class="py-1 text-fg">{row.month}</td>
                            <td class="py-1 text-fg">{row.leaves}</td>
                            <td class="py-1 text-fg">{row.overtimes}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_is_relative_and_clamped() {
        assert_eq!(bar_width(50.0, 200.0), "25%");
        assert_eq!(bar_width(300.0, 200.0), "100%");
        assert_eq!(bar_width(10.0, 0.0), "0%");
        assert_eq!(bar_width(f64::NAN, 10.0), "0%");
    }
}

use leptos::*;

use crate::{
    api::{Loan, SalarySummary},
    components::{
        date_range::DateRangePicker,
        empty_state::{EmptyState, ErrorMessage, LoadingState},
        layout::PageFrame,
        pagination::PaginationFooter,
    },
    utils::format::{format_currency, format_date},
};

use super::view_model::{repaid_percent, total_deductions, use_payroll_view_model};

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";
const TD_NUM: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg text-right tabular-nums";

#[component]
pub fn PayrollPage() -> impl IntoView {
    let vm = use_payroll_view_model();
    let salaries = vm.salaries;
    let loans = vm.loans;
    let salary_pagination = Signal::derive(move || {
        let page = vm.salaries_resource.get().and_then(Result::ok);
        salaries.pagination(page.as_ref())
    });
    let loan_pagination = Signal::derive(move || {
        let page = vm.loans_resource.get().and_then(Result::ok);
        loans.pagination(page.as_ref())
    });

    view! {
        <PageFrame title="Payroll" description="Salary summaries and outstanding loans.">
            <section class="bg-surface-elevated shadow rounded-lg">
                <div class="p-4 flex flex-col gap-3 sm:flex-row sm:items-end sm:justify-between">
                    <h2 class="text-lg font-semibold text-fg">"Salaries"</h2>
                    <DateRangePicker range=salaries.range on_change=salaries.on_range_change() />
                </div>
                <div class="overflow-x-auto">
                    <Suspense fallback=move || view! { <LoadingState /> }>
                        {move || {
                            vm.salaries_resource
                                .get()
                                .map(|result| match result {
                                    Ok(page) if page.content.is_empty() => view! {
                                        <div class="p-4"><EmptyState title="No salary summaries" /></div>
                                    }
                                    .into_view(),
                                    Ok(page) => view! { <SalaryTable rows=page.content /> }.into_view(),
                                    Err(err) => view! { <div class="p-4"><ErrorMessage message=err.message /></div> }.into_view(),
                                })
                        }}
                    </Suspense>
                </div>
                <PaginationFooter
                    state=salary_pagination
                    on_page_change=salaries.on_page_change()
                    on_page_size_change=salaries.on_page_size_change()
                />
            </section>
            <section class="bg-surface-elevated shadow rounded-lg">
                <div class="p-4">
                    <h2 class="text-lg font-semibold text-fg">"Loans"</h2>
                </div>
                <div class="overflow-x-auto">
                    <Suspense fallback=move || view! { <LoadingState /> }>
                        {move || {
                            vm.loans_resource
                                .get()
                                .map(|result| match result {
                                    Ok(page) if page.content.is_empty() => view! {
                                        <div class="p-4"><EmptyState title="No loans" /></div>
                                    }
                                    .into_view(),
                                    Ok(page) => view! { <LoanTable rows=page.content /> }.into_view(),
                                    Err(err) => view! { <div class="p-4"><ErrorMessage message=err.message /></div> }.into_view(),
                                })
                        }}
                    </Suspense>
                </div>
                <PaginationFooter
                    state=loan_pagination
                    on_page_change=loans.on_page_change()
                    on_page_size_change=loans.on_page_size_change()
                />
            </section>
        </PageFrame>
    }
}

#[component]
pub fn SalaryTable(rows: Vec<SalarySummary>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead class="bg-surface-muted">
                <tr>
                    <th class=TH>"Employee"</th>
                    <th class=TH>"Period"</th>
                    <th class=TH>"Base"</th>
                    <th class=TH>"Overtime"</th>
                    <th class=TH>"Deductions"</th>
                    <th class=TH>"Net"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {rows
                    .into_iter()
                    .map(|row| {
                        let deductions = total_deductions(&row);
                        view! {
                            <tr>
                                <td class=TD>{row.employee_name}</td>
                                <td class=TD>{row.period}</td>
                                <td class=TD_NUM>{format_currency(row.base_salary)}</td>
                                <td class=TD_NUM>{format_currency(row.overtime_pay)}</td>
                                <td class=TD_NUM>{format_currency(deductions)}</td>
                                <td class=format!("{} font-semibold", TD_NUM)>{format_currency(row.net_salary)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn LoanTable(rows: Vec<Loan>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead class="bg-surface-muted">
                <tr>
                    <th class=TH>"Employee"</th>
                    <th class=TH>"Date"</th>
                    <th class=TH>"Amount"</th>
                    <th class=TH>"Remaining"</th>
                    <th class=TH>"Repaid"</th>
                    <th class=TH>"Description"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {rows
                    .into_iter()
                    .map(|row| {
                        let repaid = format!("{:.0}%", repaid_percent(&row));
                        view! {
                            <tr>
                                <td class=TD>{row.employee_name}</td>
                                <td class=TD>{format_date(&row.created_at)}</td>
                                <td class=TD_NUM>{format_currency(row.amount)}</td>
                                <td class=TD_NUM>{format_currency(row.remaining)}</td>
                                <td class=TD_NUM>{repaid}</td>
                                <td class="px-4 py-3 text-sm text-fg">{row.description.unwrap_or_else(|| "-".into())}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

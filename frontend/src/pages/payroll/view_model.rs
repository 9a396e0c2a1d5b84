use leptos::*;

use crate::{
    api::{ApiClient, ApiError, ListQuery, Loan, PageResponse, SalarySummary},
    pages::list_state::PagedListState,
};

/// Sum of every deduction on a salary line.
pub fn total_deductions(summary: &SalarySummary) -> f64 {
    summary.total_penalty + summary.loan_deduction
}

/// Share of a loan already repaid, clamped to `0..=100`.
pub fn repaid_percent(loan: &Loan) -> f64 {
    if !loan.amount.is_finite() || loan.amount <= 0.0 {
        return 0.0;
    }
    (((loan.amount - loan.remaining) / loan.amount) * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, Copy)]
pub struct PayrollViewModel {
    pub salaries: PagedListState,
    pub loans: PagedListState,
    pub salaries_resource:
        Resource<(ListQuery, u32), Result<PageResponse<SalarySummary>, ApiError>>,
    pub loans_resource: Resource<(ListQuery, u32), Result<PageResponse<Loan>, ApiError>>,
}

impl PayrollViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let salaries = PagedListState::default();
        let loans = PagedListState::default();

        let api_salaries = api.clone();
        let salaries_resource = create_resource(
            move || salaries.source(),
            move |(query, _)| {
                let api = api_salaries.clone();
                async move { api.list_salary_summaries(&query).await }
            },
        );
        let loans_resource = create_resource(
            move || {
                let (query, reload) = loans.source();
                (ListQuery::new(query.page, query.size), reload)
            },
            move |(query, _)| {
                let api = api.clone();
                async move { api.list_loans(&query).await }
            },
        );

        Self {
            salaries,
            loans,
            salaries_resource,
            loans_resource,
        }
    }
}

pub fn use_payroll_view_model() -> PayrollViewModel {
    PayrollViewModel::new()
}

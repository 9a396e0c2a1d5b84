use chrono::{Datelike, NaiveDate};
use leptos::*;

use crate::{
    api::{ApiClient, ApiError, ExpensesReport, LateEmployeesReport, LeaveVsOvertimeReport},
    components::date_range::DateRange,
    utils::{
        format::input_date,
        time::{month_bounds, today_in_app_tz},
    },
};

use super::repository;

const YEARS_BACK: i32 = 5;

pub fn year_options(current: i32) -> Vec<i32> {
    (0..YEARS_BACK).map(|offset| current - offset).collect()
}

/// Range covering the month of `today`, the default for range-based reports.
pub fn month_range(today: NaiveDate) -> DateRange {
    match month_bounds(today) {
        Some((first, last)) => DateRange {
            start: Some(input_date(first)),
            end: Some(input_date(last)),
        },
        None => DateRange::default(),
    }
}

#[derive(Clone, Copy)]
pub struct ExpensesReportViewModel {
    pub year: RwSignal<i32>,
    pub report: Resource<i32, Result<ExpensesReport, ApiError>>,
}

impl ExpensesReportViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let year = create_rw_signal(today_in_app_tz().year());
        let report = create_resource(
            move || year.get(),
            move |year| {
                let api = api.clone();
                async move { repository::fetch_expenses(&api, year).await }
            },
        );
        Self { year, report }
    }

    pub fn report_signal(&self) -> Signal<Option<Result<ExpensesReport, ApiError>>> {
        let report = self.report;
        Signal::derive(move || report.get())
    }
}

#[derive(Clone, Copy)]
pub struct LateEmployeesReportViewModel {
    pub range: RwSignal<DateRange>,
    pub report: Resource<DateRange, Result<LateEmployeesReport, ApiError>>,
}

impl LateEmployeesReportViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let range = create_rw_signal(month_range(today_in_app_tz()));
        let report = create_resource(
            move || range.get(),
            move |range| {
                let api = api.clone();
                async move { repository::fetch_late_employees(&api, &range).await }
            },
        );
        Self { range, report }
    }

    pub fn report_signal(&self) -> Signal<Option<Result<LateEmployeesReport, ApiError>>> {
        let report = self.report;
        Signal::derive(move || report.get())
    }
}

#[derive(Clone, Copy)]
pub struct LeaveOvertimeReportViewModel {
    pub range: RwSignal<DateRange>,
    pub report: Resource<DateRange, Result<LeaveVsOvertimeReport, ApiError>>,
}

impl LeaveOvertimeReportViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let range = create_rw_signal(month_range(today_in_app_tz()));
        let report = create_resource(
            move || range.get(),
            move |range| {
                let api = api.clone();
                async move { repository::fetch_leave_vs_overtime(&api, &range).await }
            },
        );
        Self { range, report }
    }

    pub fn report_signal(&self) -> Signal<Option<Result<LeaveVsOvertimeReport, ApiError>>> {
        let report = self.report;
        Signal::derive(move || report.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_options_count_back_from_current() {
        assert_eq!(year_options(2026), vec![2026, 2025, 2024, 2023, 2022]);
    }

    #[test]
    fn month_range_spans_whole_month() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(
            month_range(today),
            DateRange::new(Some("2026-10-01"), Some("2026-10-31"))
        );
    }
}

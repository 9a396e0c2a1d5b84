use crate::api::{
    client::ApiClient,
    types::{ApiError, ExpensesReport, LateEmployeesReport, LeaveVsOvertimeReport},
};

fn range_params(start_date: Option<&str>, end_date: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(v) = start_date.filter(|v| !v.is_empty()) {
        params.push(("startDate", v.to_string()));
    }
    if let Some(v) = end_date.filter(|v| !v.is_empty()) {
        params.push(("endDate", v.to_string()));
    }
    params
}

impl ApiClient {
    pub async fn expenses_report(&self, year: i32) -> Result<ExpensesReport, ApiError> {
        self.get_json("/reports/expenses", &[("year", year.to_string())])
            .await
    }

    pub async fn late_employees_report(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<LateEmployeesReport, ApiError> {
        self.get_json(
            "/reports/late-employees",
            &range_params(start_date, end_date),
        )
        .await
    }

    pub async fn leave_vs_overtime_report(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<LeaveVsOvertimeReport, ApiError> {
        self.get_json(
            "/reports/leave-vs-overtime",
            &range_params(start_date, end_date),
        )
        .await
    }
}

use crate::api::{
    ApiClient, ApiError, ExpensesReport, LateEmployeesReport, LeaveVsOvertimeReport,
};
use crate::components::date_range::DateRange;

pub async fn fetch_expenses(api: &ApiClient, year: i32) -> Result<ExpensesReport, ApiError> {
    api.expenses_report(year).await
}

pub async fn fetch_late_employees(
    api: &ApiClient,
    range: &DateRange,
) -> Result<LateEmployeesReport, ApiError> {
    api.late_employees_report(range.start.as_deref(), range.end.as_deref())
        .await
}

pub async fn fetch_leave_vs_overtime(
    api: &ApiClient,
    range: &DateRange,
) -> Result<LeaveVsOvertimeReport, ApiError> {
    api.leave_vs_overtime_report(range.start.as_deref(), range.end.as_deref())
        .await
}

#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod tests {
    use super::*;
    use crate::api::test_support::client_for;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn late_employees_sends_start_bound() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/reports/late-employees")
                    .query_param("startDate", "2025-01-01");
                then.status(200).json_body(json!({
                    "topLateEmployees": [
                        { "name": "Budi", "lateCount": 4, "totalLateMinutes": 95 }
                    ],
                    "distribution": [],
                    "latePercentage": 12.5
                }));
            })
            .await;
        let api = client_for(&server, Some("tok"));
        let report = fetch_late_employees(&api, &DateRange::new(Some("2025-01-01"), None))
            .await
            .unwrap();
        assert_eq!(report.top_late_employees[0].late_count, 4);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn leave_vs_overtime_decodes_monthly_rows() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/reports/leave-vs-overtime");
                then.status(200).json_body(json!({
                    "totalLeaves": 3,
                    "totalOvertimes": 9,
                    "leavePercentage": 25.0,
                    "overtimePercentage": 75.0,
                    "monthly": [{ "month": "2025-01", "leaves": 3, "overtimes": 9 }]
                }));
            })
            .await;
        let api = client_for(&server, Some("tok"));
        let report = fetch_leave_vs_overtime(&api, &DateRange::default())
            .await
            .unwrap();
        assert_eq!(report.total_overtimes, 9);
        assert_eq!(report.monthly.len(), 1);
    }
}

use crate::api::{ApiClient, ApiError, Attendance, ClockRequest, ListQuery, PageResponse, Role};

use super::utils::ClockKind;

pub async fn fetch_today(api: &ApiClient) -> Result<Option<Attendance>, ApiError> {
    api.get_today_attendance().await
}

pub async fn submit_clock(
    api: &ApiClient,
    kind: ClockKind,
    request: &ClockRequest,
) -> Result<Attendance, ApiError> {
    match kind {
        ClockKind::ClockIn => api.clock_in(request).await,
        ClockKind::BreakIn => api.break_in(request).await,
        ClockKind::BreakOut => api.break_out(request).await,
        ClockKind::ClockOut => api.clock_out(request).await,
    }
}

/// Admins review everyone's records; employees only see their own.
pub async fn fetch_history(
    api: &ApiClient,
    role: Option<Role>,
    query: &ListQuery,
) -> Result<PageResponse<Attendance>, ApiError> {
    match role {
        Some(Role::Admin) => api.list_attendances(query).await,
        _ => api.list_my_attendances(query).await,
    }
}

#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod tests {
    use super::*;
    use crate::api::test_support::{attendance_json, client_for, page_json};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn break_out_posts_to_break_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/attendances/break-out")
                    .json_body(json!({ "timestamp": "2025-01-02T12:30:00.000" }));
                then.status(200).json_body(attendance_json(7));
            })
            .await;
        let api = client_for(&server, Some("tok"));
        let request = ClockRequest {
            timestamp: "2025-01-02T12:30:00.000".into(),
            latitude: None,
            longitude: None,
        };
        let attendance = submit_clock(&api, ClockKind::BreakOut, &request).await.unwrap();
        assert_eq!(attendance.id, 7);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn history_endpoint_depends_on_role() {
        let server = MockServer::start_async().await;
        let all = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/attendances").query_param("page", "0");
                then.status(200)
                    .json_body(page_json(vec![attendance_json(1)], 1, 1, 0));
            })
            .await;
        let mine = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/attendances/me");
                then.status(200).json_body(page_json(vec![], 0, 0, 0));
            })
            .await;
        let api = client_for(&server, Some("tok"));
        let query = ListQuery::new(0, 10);

        let page = fetch_history(&api, Some(Role::Admin), &query).await.unwrap();
        assert_eq!(page.content.len(), 1);
        let page = fetch_history(&api, Some(Role::Employee), &query).await.unwrap();
        assert!(page.content.is_empty());

        all.assert_hits_async(1).await;
        mine.assert_hits_async(1).await;
    }
}

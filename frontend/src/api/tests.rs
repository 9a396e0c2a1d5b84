#![cfg(not(coverage))]

use super::test_support::*;
use super::*;
use crate::api::token::UnreadableTokenStore;
use httpmock::prelude::*;
use reqwest::header::AUTHORIZATION;
use serde_json::json;
use std::rc::Rc;

#[tokio::test]
async fn authorize_sets_bearer_header_when_token_present() {
    let api = ApiClient::new_with_base_url(
        "http://localhost/api",
        Rc::new(MemoryTokenStore::new(Some("jwt-abc"))),
    );
    let request = api
        .request(reqwest::Method::GET, "/users/me")
        .await
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        request.headers().get(AUTHORIZATION).unwrap(),
        "Bearer jwt-abc"
    );
    assert_eq!(request.url().as_str(), "http://localhost/api/users/me");
}

#[tokio::test]
async fn authorize_leaves_header_unset_without_token() {
    let api = ApiClient::new_with_base_url("http://localhost/api", Rc::new(MemoryTokenStore::default()));
    let request = api
        .request(reqwest::Method::GET, "/users/me")
        .await
        .unwrap()
        .build()
        .unwrap();
    assert!(request.headers().get(AUTHORIZATION).is_none());
}

#[tokio::test]
async fn unreadable_token_slot_fails_before_sending() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users/me");
            then.status(200).json_body(user_json("ROLE_ADMIN"));
        })
        .await;
    let api = ApiClient::new_with_base_url(server.url("/api"), Rc::new(UnreadableTokenStore));

    let err = api.get_me().await.unwrap_err();
    assert_eq!(err.code, "STORAGE_ERROR");
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn sends_bearer_token_to_backend() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/users/me")
                .header("Authorization", "Bearer token-123");
            then.status(200).json_body(user_json("ROLE_OWNER"));
        })
        .await;
    let api = client_for(&server, Some("token-123"));

    let user = api.get_me().await.unwrap();
    assert_eq!(user.role, Role::Owner);
    assert_eq!(user.profile.unwrap().name, "Siti Rahma");
    mock.assert_async().await;
}

#[tokio::test]
async fn sends_request_unauthenticated_without_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/users/me")
                .header_missing("Authorization");
            then.status(401).json_body(json!({"message": "Full authentication is required"}));
        })
        .await;
    let api = client_for(&server, None);

    let err = api.get_me().await.unwrap_err();
    assert_eq!(err.code, "UNAUTHORIZED");
    assert_eq!(err.message, "Full authentication is required");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/stores");
            then.status(502).body("bad gateway");
        })
        .await;
    let api = client_for(&server, Some("t"));

    let err = api.list_stores().await.unwrap_err();
    assert_eq!(err.status, Some(502));
    assert!(err.message.contains("Bad Gateway"));
}

#[tokio::test]
async fn list_leaves_passes_paging_and_range() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/leaves")
                .query_param("page", "1")
                .query_param("size", "10")
                .query_param("startDate", "2025-02-01")
                .query_param("endDate", "2025-02-28");
            then.status(200).json_body(page_json(
                vec![leave_json(1, "PENDING"), leave_json(2, "APPROVED")],
                12,
                2,
                1,
            ));
        })
        .await;
    let api = client_for(&server, Some("t"));

    let page = api
        .list_leaves(
            &ListQuery::new(1, 10).with_range(Some("2025-02-01".into()), Some("2025-02-28".into())),
        )
        .await
        .unwrap();
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.content[1].status, "APPROVED");
    mock.assert_async().await;
}

#[tokio::test]
async fn clock_in_posts_timestamp_and_location() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/attendances/clock-in")
                .json_body(json!({
                    "timestamp": "2025-01-02T08:00:00.000",
                    "latitude": -6.2,
                    "longitude": 106.8
                }));
            then.status(200).json_body(attendance_json(5));
        })
        .await;
    let api = client_for(&server, Some("t"));

    let attendance = api
        .clock_in(&ClockRequest {
            timestamp: "2025-01-02T08:00:00.000".into(),
            latitude: Some(-6.2),
            longitude: Some(106.8),
        })
        .await
        .unwrap();
    assert_eq!(attendance.id, 5);
    mock.assert_async().await;
}

#[tokio::test]
async fn approve_overtime_puts_to_resource_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/overtimes/4/approve");
            then.status(200).json_body(overtime_json(4, "APPROVED"));
        })
        .await;
    let api = client_for(&server, Some("t"));

    let overtime = api
        .approve_overtime(4, &ApprovalRequest { note: None })
        .await
        .unwrap();
    assert_eq!(overtime.status, "APPROVED");
    mock.assert_async().await;
}

#[tokio::test]
async fn update_store_round_trips_configuration() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/stores/3");
            then.status(200).json_body(store_json(3));
        })
        .await;
    let api = client_for(&server, Some("t"));
    let current: OwnedStore = serde_json::from_value(store_json(3)).unwrap();

    let updated = api
        .update_store(3, &StoreRequest::from(&current))
        .await
        .unwrap();
    assert_eq!(updated, current);
}

#[tokio::test]
async fn today_attendance_accepts_null() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/attendances/me/today");
            then.status(200).json_body(serde_json::Value::Null);
        })
        .await;
    let api = client_for(&server, Some("t"));

    assert!(api.get_today_attendance().await.unwrap().is_none());
}

#[tokio::test]
async fn today_attendance_accepts_empty_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/attendances/me/today");
            then.status(204);
        })
        .await;
    let api = client_for(&server, Some("t"));

    assert!(api.get_today_attendance().await.unwrap().is_none());
}

#[tokio::test]
async fn today_attendance_decodes_record() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/attendances/me/today");
            then.status(200).json_body(attendance_json(12));
        })
        .await;
    let api = client_for(&server, Some("t"));

    let today = api.get_today_attendance().await.unwrap();
    assert_eq!(today.map(|a| a.id), Some(12));
}

#[tokio::test]
async fn today_attendance_reports_malformed_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/attendances/me/today");
            then.status(200).body("not json");
        })
        .await;
    let api = client_for(&server, Some("t"));

    let err = api.get_today_attendance().await.unwrap_err();
    assert_eq!(err.code, "UNKNOWN");
}

#[tokio::test]
async fn reports_forward_filters() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/reports/expenses")
                .query_param("year", "2025");
            then.status(200).json_body(json!({
                "year": 2025,
                "monthlyTotals": [{"month": "2025-01", "total": 1500000.0}],
                "totalSalary": 1200000.0,
                "totalOvertime": 300000.0,
                "totalPenalty": 0.0
            }));
        })
        .await;
    let api = client_for(&server, Some("t"));

    let report = api.expenses_report(2025).await.unwrap();
    assert_eq!(report.monthly_totals.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_store_and_schedules_decode() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/stores/7");
            then.status(200).json_body(store_json(7));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/schedules");
            then.status(200).json_body(json!([{
                "id": 1,
                "name": "Shift Pagi",
                "startTime": "08:00:00",
                "endTime": "16:00:00",
                "lateTolerance": 15
            }]));
        })
        .await;
    let api = client_for(&server, Some("t"));

    assert_eq!(api.get_store(7).await.unwrap().id, 7);
    let schedules = api.list_schedules().await.unwrap();
    assert_eq!(schedules[0].late_tolerance, 15);
}

#[tokio::test]
async fn list_users_pages_without_range() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/users")
                .query_param("page", "0")
                .query_param("size", "10");
            then.status(200)
                .json_body(page_json(vec![user_json("ROLE_ADMIN")], 1, 1, 0));
        })
        .await;
    let api = client_for(&server, Some("t"));

    let page = api.list_users(&ListQuery::new(0, 10)).await.unwrap();
    assert_eq!(page.content[0].role, Role::Admin);
    mock.assert_async().await;
}

#[tokio::test]
async fn payroll_endpoints_decode_pages() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/payroll/salaries")
                .query_param("endDate", "2025-01-31");
            then.status(200).json_body(page_json(
                vec![json!({
                    "id": 1,
                    "employeeName": "Budi",
                    "period": "2025-01",
                    "baseSalary": 5000000.0,
                    "netSalary": 4950000.0
                })],
                1,
                1,
                0,
            ));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/payroll/loans");
            then.status(200).json_body(page_json(
                vec![json!({
                    "id": 2,
                    "employeeName": "Budi",
                    "amount": 1000000.0,
                    "remaining": 500000.0,
                    "createdAt": "2025-01-05"
                })],
                1,
                1,
                0,
            ));
        })
        .await;
    let api = client_for(&server, Some("t"));

    let query = ListQuery::new(0, 10).with_range(None, Some("2025-01-31".into()));
    let salaries = api.list_salary_summaries(&query).await.unwrap();
    assert_eq!(salaries.content[0].overtime_pay, 0.0);
    let loans = api.list_loans(&ListQuery::new(0, 10)).await.unwrap();
    assert_eq!(loans.content[0].remaining, 500000.0);
}

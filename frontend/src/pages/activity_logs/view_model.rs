use leptos::*;

use crate::{
    api::{ActivityLog, ApiClient, ApiError, ListQuery, PageResponse},
    pages::list_state::PagedListState,
};

#[derive(Clone, Copy)]
pub struct ActivityLogsViewModel {
    pub list: PagedListState,
    pub logs_resource: Resource<(ListQuery, u32), Result<PageResponse<ActivityLog>, ApiError>>,
}

impl ActivityLogsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let list = PagedListState::default();
        let logs_resource = create_resource(
            move || list.source(),
            move |(query, _)| {
                let api = api.clone();
                async move {
                    let result = api.list_activity_logs(&query).await;
                    if let Err(err) = &result {
                        log::error!("activity log fetch failed: {}", err);
                    }
                    result
                }
            },
        );
        Self {
            list,
            logs_resource,
        }
    }
}

pub fn use_activity_logs_view_model() -> ActivityLogsViewModel {
    ActivityLogsViewModel::new()
}

#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod tests {
    use crate::api::test_support::{client_for, page_json};
    use crate::api::ListQuery;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn activity_logs_forward_range_filter() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/activity-logs")
                    .query_param("page", "1")
                    .query_param("startDate", "2025-01-01");
                then.status(200).json_body(page_json(
                    vec![json!({
                        "id": 1,
                        "actor": "owner",
                        "action": "UPDATE",
                        "entity": "Store",
                        "timestamp": "2025-01-02T09:00:00"
                    })],
                    11,
                    2,
                    1,
                ));
            })
            .await;
        let api = client_for(&server, Some("tok"));
        let query = ListQuery::new(1, 10).with_range(Some("2025-01-01".into()), None);
        let page = api.list_activity_logs(&query).await.unwrap();
        assert_eq!(page.content[0].entity, "Store");
        assert_eq!(page.total_pages, 2);
        mock.assert_async().await;
    }
}

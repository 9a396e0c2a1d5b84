use crate::api::{ApiClient, ApiError, OwnedStore, StoreRequest};

pub async fn fetch_stores(api: &ApiClient) -> Result<Vec<OwnedStore>, ApiError> {
    api.list_stores().await
}

pub async fn save_store(
    api: &ApiClient,
    id: i64,
    request: &StoreRequest,
) -> Result<OwnedStore, ApiError> {
    api.update_store(id, request).await
}

#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod tests {
    use super::*;
    use crate::api::test_support::{client_for, store_json};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn lists_owned_stores() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/stores");
                then.status(200).json_body(json!([store_json(1), store_json(2)]));
            })
            .await;
        let api = client_for(&server, Some("tok"));
        let stores = fetch_stores(&api).await.unwrap();
        assert_eq!(stores.len(), 2);
        assert_eq!(stores[0].name, "Toko Kemang");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn save_puts_editable_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/stores/3")
                    .header("Authorization", "Bearer tok");
                then.status(200).json_body(store_json(3));
            })
            .await;
        let api = client_for(&server, Some("tok"));
        let current: OwnedStore = serde_json::from_value(store_json(3)).unwrap();
        let saved = save_store(&api, 3, &StoreRequest::from(&current))
            .await
            .unwrap();
        assert_eq!(saved.id, 3);
        mock.assert_async().await;
    }
}

use crate::api::{
    client::ApiClient,
    types::{ApiError, OwnedStore, Schedule, StoreRequest},
};

impl ApiClient {
    pub async fn list_stores(&self) -> Result<Vec<OwnedStore>, ApiError> {
        self.get_json("/stores", &[]).await
    }

    pub async fn get_store(&self, id: i64) -> Result<OwnedStore, ApiError> {
        self.get_json(&format!("/stores/{}", id), &[]).await
    }

    pub async fn update_store(
        &self,
        id: i64,
        request: &StoreRequest,
    ) -> Result<OwnedStore, ApiError> {
        self.put_json(&format!("/stores/{}", id), request).await
    }

    pub async fn list_schedules(&self) -> Result<Vec<Schedule>, ApiError> {
        self.get_json("/schedules", &[]).await
    }
}

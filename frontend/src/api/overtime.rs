use crate::api::{
    client::ApiClient,
    query::ListQuery,
    types::{
        ApiError, ApprovalRequest, OvertimeApplication, OvertimeApplicationRequest, PageResponse,
    },
};

impl ApiClient {
    pub async fn list_my_overtimes(
        &self,
        query: &ListQuery,
    ) -> Result<PageResponse<OvertimeApplication>, ApiError> {
        self.get_json("/overtimes/me", &query.to_params()).await
    }

    pub async fn list_overtimes(
        &self,
        query: &ListQuery,
    ) -> Result<PageResponse<OvertimeApplication>, ApiError> {
        self.get_json("/overtimes", &query.to_params()).await
    }

    pub async fn apply_overtime(
        &self,
        request: &OvertimeApplicationRequest,
    ) -> Result<OvertimeApplication, ApiError> {
        self.post_json("/overtimes", request).await
    }

    pub async fn approve_overtime(
        &self,
        id: i64,
        request: &ApprovalRequest,
    ) -> Result<OvertimeApplication, ApiError> {
        self.put_json(&format!("/overtimes/{}/approve", id), request)
            .await
    }

    pub async fn reject_overtime(
        &self,
        id: i64,
        request: &ApprovalRequest,
    ) -> Result<OvertimeApplication, ApiError> {
        self.put_json(&format!("/overtimes/{}/reject", id), request)
            .await
    }
}

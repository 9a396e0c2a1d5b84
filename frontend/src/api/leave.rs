use crate::api::{
    client::ApiClient,
    query::ListQuery,
    types::{ApiError, ApprovalRequest, LeaveApplication, LeaveApplicationRequest, PageResponse},
};

impl ApiClient {
    pub async fn list_my_leaves(
        &self,
        query: &ListQuery,
    ) -> Result<PageResponse<LeaveApplication>, ApiError> {
        self.get_json("/leaves/me", &query.to_params()).await
    }

    pub async fn list_leaves(
        &self,
        query: &ListQuery,
    ) -> Result<PageResponse<LeaveApplication>, ApiError> {
        self.get_json("/leaves", &query.to_params()).await
    }

    pub async fn apply_leave(
        &self,
        request: &LeaveApplicationRequest,
    ) -> Result<LeaveApplication, ApiError> {
        self.post_json("/leaves", request).await
    }

    pub async fn approve_leave(
        &self,
        id: i64,
        request: &ApprovalRequest,
    ) -> Result<LeaveApplication, ApiError> {
        self.put_json(&format!("/leaves/{}/approve", id), request).await
    }

    pub async fn reject_leave(
        &self,
        id: i64,
        request: &ApprovalRequest,
    ) -> Result<LeaveApplication, ApiError> {
        self.put_json(&format!("/leaves/{}/reject", id), request).await
    }
}

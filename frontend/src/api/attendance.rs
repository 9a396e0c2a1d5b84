use crate::api::{
    client::ApiClient,
    query::ListQuery,
    types::{ApiError, Attendance, ClockRequest, PageResponse},
};

impl ApiClient {
    pub async fn clock_in(&self, request: &ClockRequest) -> Result<Attendance, ApiError> {
        self.post_json("/attendances/clock-in", request).await
    }

    pub async fn clock_out(&self, request: &ClockRequest) -> Result<Attendance, ApiError> {
        self.post_json("/attendances/clock-out", request).await
    }

    pub async fn break_in(&self, request: &ClockRequest) -> Result<Attendance, ApiError> {
        self.post_json("/attendances/break-in", request).await
    }

    pub async fn break_out(&self, request: &ClockRequest) -> Result<Attendance, ApiError> {
        self.post_json("/attendances/break-out", request).await
    }

    /// `None` when nothing is recorded today, whether the backend answers
    /// with `null` or with no body at all.
    pub async fn get_today_attendance(&self) -> Result<Option<Attendance>, ApiError> {
        self.get_optional_json("/attendances/me/today", &[]).await
    }

    pub async fn list_my_attendances(
        &self,
        query: &ListQuery,
    ) -> Result<PageResponse<Attendance>, ApiError> {
        self.get_json("/attendances/me", &query.to_params()).await
    }

    /// Store-wide attendance, visible to admins and owners.
    pub async fn list_attendances(
        &self,
        query: &ListQuery,
    ) -> Result<PageResponse<Attendance>, ApiError> {
        self.get_json("/attendances", &query.to_params()).await
    }
}

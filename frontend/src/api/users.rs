use crate::api::{
    client::ApiClient,
    query::ListQuery,
    types::{ActivityLog, ApiError, Loan, PageResponse, SalarySummary, User},
};

impl ApiClient {
    pub async fn get_me(&self) -> Result<User, ApiError> {
        self.get_json("/users/me", &[]).await
    }

    pub async fn list_users(&self, query: &ListQuery) -> Result<PageResponse<User>, ApiError> {
        self.get_json("/users", &query.to_params()).await
    }

    pub async fn list_activity_logs(
        &self,
        query: &ListQuery,
    ) -> Result<PageResponse<ActivityLog>, ApiError> {
        self.get_json("/activity-logs", &query.to_params()).await
    }

    pub async fn list_salary_summaries(
        &self,
        query: &ListQuery,
    ) -> Result<PageResponse<SalarySummary>, ApiError> {
        self.get_json("/payroll/salaries", &query.to_params()).await
    }

    pub async fn list_loans(&self, query: &ListQuery) -> Result<PageResponse<Loan>, ApiError> {
        self.get_json("/payroll/loans", &query.to_params()).await
    }
}

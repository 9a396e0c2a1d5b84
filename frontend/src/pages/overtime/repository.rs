use crate::{
    api::{
        ApiClient, ApiError, ApprovalRequest, ListQuery, OvertimeApplication,
        OvertimeApplicationRequest, PageResponse, Role,
    },
    pages::approval::{Decision, DecisionRequest},
};

pub async fn fetch_overtimes(
    api: &ApiClient,
    role: Option<Role>,
    query: &ListQuery,
) -> Result<PageResponse<OvertimeApplication>, ApiError> {
    match role {
        Some(Role::Admin) => api.list_overtimes(query).await,
        _ => api.list_my_overtimes(query).await,
    }
}

pub async fn submit_overtime(
    api: &ApiClient,
    payload: &OvertimeApplicationRequest,
) -> Result<OvertimeApplication, ApiError> {
    api.apply_overtime(payload).await
}

pub async fn decide_overtime(
    api: &ApiClient,
    request: DecisionRequest,
) -> Result<OvertimeApplication, ApiError> {
    let body = ApprovalRequest { note: None };
    match request.decision {
        Decision::Approve => api.approve_overtime(request.id, &body).await,
        Decision::Reject => api.reject_overtime(request.id, &body).await,
    }
}

use crate::{
    api::{
        ApiClient, ApiError, ApprovalRequest, LeaveApplication, LeaveApplicationRequest, ListQuery,
        PageResponse, Role,
    },
    pages::approval::{Decision, DecisionRequest},
};

/// Admins review every application; employees see their own.
pub async fn fetch_leaves(
    api: &ApiClient,
    role: Option<Role>,
    query: &ListQuery,
) -> Result<PageResponse<LeaveApplication>, ApiError> {
    match role {
        Some(Role::Admin) => api.list_leaves(query).await,
        _ => api.list_my_leaves(query).await,
    }
}

pub async fn submit_leave(
    api: &ApiClient,
    payload: &LeaveApplicationRequest,
) -> Result<LeaveApplication, ApiError> {
    api.apply_leave(payload).await
}

pub async fn decide_leave(
    api: &ApiClient,
    request: DecisionRequest,
) -> Result<LeaveApplication, ApiError> {
    let body = ApprovalRequest { note: None };
    match request.decision {
        Decision::Approve => api.approve_leave(request.id, &body).await,
        Decision::Reject => api.reject_leave(request.id, &body).await,
    }
}

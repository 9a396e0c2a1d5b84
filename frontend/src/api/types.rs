use leptos::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_OWNER")]
    Owner,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_EMPLOYEE")]
    Employee,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Owner, Role::Admin, Role::Employee];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "ROLE_OWNER",
            Role::Admin => "ROLE_ADMIN",
            Role::Employee => "ROLE_EMPLOYEE",
        }
    }

    pub fn parse(raw: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == raw)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Admin => "Admin",
            Role::Employee => "Employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub schedule: Option<Schedule>,
    #[serde(default)]
    pub store: Option<OwnedStore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: i64,
    #[serde(default)]
    pub clock_in: Option<String>,
    #[serde(default)]
    pub clock_out: Option<String>,
    #[serde(default)]
    pub break_in: Option<String>,
    #[serde(default)]
    pub break_out: Option<String>,
    pub status: String,
    #[serde(rename = "type", default)]
    pub attendance_type: Option<String>,
    #[serde(default)]
    pub late_minutes: i64,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub overtime: Option<OvertimeApplication>,
}

impl Attendance {
    pub fn employee_name(&self) -> String {
        self.profile
            .as_ref()
            .map(|profile| profile.name.clone())
            .unwrap_or_else(|| "-".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    pub id: i64,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub approver: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeApplication {
    pub id: i64,
    pub status: String,
    pub date: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub approver: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedStore {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    #[serde(default)]
    pub break_duration: i64,
    #[serde(default)]
    pub max_break: i64,
    #[serde(default)]
    pub current_break: i64,
    #[serde(default)]
    pub late_clock_in_penalty_amount: f64,
    #[serde(default)]
    pub late_break_penalty_amount: f64,
    #[serde(default)]
    pub overtime_multiplier: f64,
}

/// Editable subset of [`OwnedStore`] sent back on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRequest {
    pub name: String,
    pub location: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub break_duration: i64,
    pub max_break: i64,
    pub late_clock_in_penalty_amount: f64,
    pub late_break_penalty_amount: f64,
    pub overtime_multiplier: f64,
}

impl From<&OwnedStore> for StoreRequest {
    fn from(store: &OwnedStore) -> Self {
        Self {
            name: store.name.clone(),
            location: store.location.clone(),
            latitude: store.latitude,
            longitude: store.longitude,
            radius: store.radius,
            break_duration: store.break_duration,
            max_break: store.max_break,
            late_clock_in_penalty_amount: store.late_clock_in_penalty_amount,
            late_break_penalty_amount: store.late_break_penalty_amount,
            overtime_multiplier: store.overtime_multiplier,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i64,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub late_tolerance: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: i64,
    pub actor: String,
    pub action: String,
    pub entity: String,
    #[serde(default)]
    pub description: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySummary {
    pub id: i64,
    pub employee_name: String,
    pub period: String,
    #[serde(default)]
    pub base_salary: f64,
    #[serde(default)]
    pub overtime_pay: f64,
    #[serde(default)]
    pub total_penalty: f64,
    #[serde(default)]
    pub loan_deduction: f64,
    #[serde(default)]
    pub net_salary: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: i64,
    pub employee_name: String,
    pub amount: f64,
    #[serde(default)]
    pub remaining: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAmount {
    pub month: String,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensesReport {
    pub year: i32,
    #[serde(default)]
    pub monthly_totals: Vec<MonthlyAmount>,
    #[serde(default)]
    pub total_salary: f64,
    #[serde(default)]
    pub total_overtime: f64,
    #[serde(default)]
    pub total_penalty: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LateEmployee {
    pub name: String,
    pub late_count: i64,
    #[serde(default)]
    pub total_late_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionBucket {
    pub label: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LateEmployeesReport {
    #[serde(default)]
    pub top_late_employees: Vec<LateEmployee>,
    #[serde(default)]
    pub distribution: Vec<DistributionBucket>,
    #[serde(default)]
    pub late_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveVsOvertimeReport {
    #[serde(default)]
    pub total_leaves: i64,
    #[serde(default)]
    pub total_overtimes: i64,
    #[serde(default)]
    pub leave_percentage: f64,
    #[serde(default)]
    pub overtime_percentage: f64,
    #[serde(default)]
    pub monthly: Vec<LeaveOvertimeMonth>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveOvertimeMonth {
    pub month: String,
    pub leaves: i64,
    pub overtimes: i64,
}

/// Paged envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> PageResponse<T> {
    pub fn empty(size: u32) -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockRequest {
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplicationRequest {
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeApplicationRequest {
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Error body produced by the backend on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(alias = "error")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub code: String,
    #[serde(default)]
    pub status: Option<u16>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.message.into_view()
    }
}

impl ApiError {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.to_string(),
            status: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", msg)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::new("UNKNOWN", msg)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::new("REQUEST_FAILED", msg)
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::new("STORAGE_ERROR", msg)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            status: Some(401),
            ..Self::new("UNAUTHORIZED", msg)
        }
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        if status == 401 {
            return Self::unauthorized(msg);
        }
        Self {
            status: Some(status),
            ..Self::new("HTTP_ERROR", msg)
        }
    }
}

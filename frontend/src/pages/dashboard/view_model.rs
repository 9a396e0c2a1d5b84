use leptos::*;

use crate::{
    api::{ApiClient, ApiError, Attendance, Role},
    pages::attendance::repository::fetch_today,
    state::session::use_session,
};

pub fn greeting(display_name: &str) -> String {
    if display_name.trim().is_empty() {
        "Welcome".to_string()
    } else {
        format!("Welcome, {}", display_name.trim())
    }
}

/// Owners do not clock in, so only the other roles load today's record.
pub fn tracks_attendance(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Admin | Role::Employee))
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub role: Signal<Option<Role>>,
    pub display_name: Signal<String>,
    pub today_resource: Resource<Option<Role>, Result<Option<Attendance>, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (session, _) = use_session();
        let role = Signal::derive(move || session.with(|state| state.role()));
        let display_name = Signal::derive(move || session.with(|state| state.display_name()));

        let today_resource = create_resource(
            move || role.get(),
            move |role| {
                let api = api.clone();
                async move {
                    if tracks_attendance(role) {
                        fetch_today(&api).await
                    } else {
                        Ok(None)
                    }
                }
            },
        );

        Self {
            role,
            display_name,
            today_resource,
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    DashboardViewModel::new()
}

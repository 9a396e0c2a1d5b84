use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    config::APP_LOCALE,
    components::{empty_state::EmptyState, guard::RequireRole, layout::Layout},
    navigation::roles_for,
    pages::{
        ActivityLogsPage, AttendanceHistoryPage, DailyAttendancePage, DashboardPage,
        ExpensesReportPage, LateEmployeesReportPage, LeavePage, LeaveOvertimeReportPage,
        OvertimePage, PayrollPage, ProfilePage, SchedulesPage, StoresPage,
    },
    state::session::SessionProvider,
};

pub const HOME_PATH: &str = "/dashboard";

/// Every routed page; each is reachable from at least one role's menu.
pub const ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/attendance/daily",
    "/attendance/history",
    "/leave",
    "/overtime",
    "/stores",
    "/schedules",
    "/activity-logs",
    "/payroll",
    "/reports/expenses",
    "/reports/late-employees",
    "/reports/leave-overtime",
    "/profile",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <DocumentMeta />
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path=HOME_PATH /> } />
                    <Route path="/dashboard" view=|| view! { <Guarded path="/dashboard"><DashboardPage /></Guarded> } />
                    <Route path="/attendance" view=|| view! { <Redirect path="/attendance/daily" /> } />
                    <Route path="/attendance/daily" view=|| view! { <Guarded path="/attendance/daily"><DailyAttendancePage /></Guarded> } />
                    <Route path="/attendance/history" view=|| view! { <Guarded path="/attendance/history"><AttendanceHistoryPage /></Guarded> } />
                    <Route path="/leave" view=|| view! { <Guarded path="/leave"><LeavePage /></Guarded> } />
                    <Route path="/overtime" view=|| view! { <Guarded path="/overtime"><OvertimePage /></Guarded> } />
                    <Route path="/stores" view=|| view! { <Guarded path="/stores"><StoresPage /></Guarded> } />
                    <Route path="/schedules" view=|| view! { <Guarded path="/schedules"><SchedulesPage /></Guarded> } />
                    <Route path="/activity-logs" view=|| view! { <Guarded path="/activity-logs"><ActivityLogsPage /></Guarded> } />
                    <Route path="/payroll" view=|| view! { <Guarded path="/payroll"><PayrollPage /></Guarded> } />
                    <Route path="/reports" view=|| view! { <Redirect path="/reports/expenses" /> } />
                    <Route path="/reports/expenses" view=|| view! { <Guarded path="/reports/expenses"><ExpensesReportPage /></Guarded> } />
                    <Route path="/reports/late-employees" view=|| view! { <Guarded path="/reports/late-employees"><LateEmployeesReportPage /></Guarded> } />
                    <Route path="/reports/leave-overtime" view=|| view! { <Guarded path="/reports/leave-overtime"><LeaveOvertimeReportPage /></Guarded> } />
                    <Route path="/profile" view=|| view! { <Guarded path="/profile"><ProfilePage /></Guarded> } />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn DocumentMeta() -> impl IntoView {
    view! {
        <Html lang=APP_LOCALE />
        <Title formatter=|title: String| {
            if title.is_empty() { "Presensi".to_string() } else { format!("{} | Presensi", title) }
        } />
    }
}

/// Layout plus the role check derived from the menus that link to `path`.
#[component]
fn Guarded(path: &'static str, children: ChildrenFn) -> impl IntoView {
    view! {
        <Layout>
            <RequireRole allowed=roles_for(path)>{children()}</RequireRole>
        </Layout>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Layout>
            <EmptyState title="Page not found" description="The page you are looking for does not exist." />
            <div class="mt-4 text-center">
                <a href=HOME_PATH class="text-sm font-medium text-action-primary-bg hover:underline">"Back to dashboard"</a>
            </div>
        </Layout>
    }
}

pub mod activity_logs;
pub mod approval;
pub mod attendance;
pub mod dashboard;
pub mod leave;
pub mod list_state;
pub mod overtime;
pub mod payroll;
pub mod profile;
pub mod reports;
pub mod schedules;
pub mod stores;

pub use activity_logs::ActivityLogsPage;
pub use attendance::{AttendanceHistoryPage, DailyAttendancePage};
pub use dashboard::DashboardPage;
pub use leave::LeavePage;
pub use overtime::OvertimePage;
pub use payroll::PayrollPage;
pub use profile::ProfilePage;
pub use reports::{ExpensesReportPage, LateEmployeesReportPage, LeaveOvertimeReportPage};
pub use schedules::SchedulesPage;
pub use stores::StoresPage;

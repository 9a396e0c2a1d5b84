pub mod panel;
pub mod repository;
pub mod view_model;
pub mod widgets;

pub use panel::{ExpensesReportPage, LateEmployeesReportPage, LeaveOvertimeReportPage};

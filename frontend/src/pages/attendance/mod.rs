pub mod daily;
pub mod history;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use daily::DailyAttendancePage;
pub use history::AttendanceHistoryPage;

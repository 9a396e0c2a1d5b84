pub mod clock;
pub mod panel;
pub mod view_model;

pub use panel::DashboardPage;

pub mod common;
pub mod date_range;
pub mod empty_state;
pub mod guard;
pub mod layout;
pub mod pagination;
pub mod result_dialog;
pub mod sidebar;

//! Browser dashboard for the Presensi attendance and payroll backend.

pub mod api;
pub mod components;
pub mod config;
pub mod navigation;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
pub mod test_support;
pub mod utils;

/// Installs the panic hook and logger, starts runtime config resolution and
/// mounts the app.
pub fn run() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting Presensi dashboard");

    leptos::spawn_local(config::init());
    router::mount_app();
}

pub mod health;
pub mod ingestions;
pub mod login;
pub mod reports;
pub mod settings;
pub mod sources;
pub mod upload;

/// Blocking browser alert, used for input validation failures.
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

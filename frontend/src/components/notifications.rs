//! Toasts and blocking alerts.

use std::time::Duration;

use dioxus::logger::tracing;
use dioxus_primitives::toast::{ToastOptions, consume_toast};

const TOAST_DURATION: Duration = Duration::from_secs(3);

pub fn toast_info(title: &str, description: &str) {
    consume_toast().info(
        title.to_string(),
        ToastOptions::new()
            .description(description)
            .duration(TOAST_DURATION)
            .permanent(false),
    );
}

pub fn toast_error(title: &str, description: &str) {
    tracing::warn!("{}: {}", title, description);
    consume_toast().error(
        title.to_string(),
        ToastOptions::new()
            .description(description)
            .duration(TOAST_DURATION)
            .permanent(false),
    );
}

/// Modal browser alert; returns once the user dismisses it.
pub fn blocking_alert(message: &str) {
    tracing::error!("{}", message);
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        tracing::error!("Failed to show alert: {:?}", e);
    }
}

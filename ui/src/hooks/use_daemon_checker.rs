use api::ApiError;
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Debug, strum::EnumIs)]
pub enum DaemonConnectionStatus {
    Connected,
    Disconnected(String),
}

#[derive(Clone, Copy)]
pub struct DaemonChecker {
    status: Signal<DaemonConnectionStatus>,
}

impl DaemonChecker {
    /// Inspects a Result from an API call.
    /// - If `Ok`: Updates status to Connected (if previously disconnected) and returns value.
    /// - If `Err`: Checks if it's a connection error. If so, updates status to Disconnected. Returns None.
    pub fn check<T>(&mut self, result: Result<T, ApiError>) -> Option<T> {
        match result {
            Ok(val) => {
                if matches!(
                    *self.status.peek(),
                    DaemonConnectionStatus::Disconnected(_)
                ) {
                    self.status.set(DaemonConnectionStatus::Connected);
                }
                Some(val)
            }
            Err(e) => {
                let error_msg = e.to_string();
                dioxus::logger::tracing::warn!("daemon API error: {}", error_msg);

                if self.is_connection_error(&error_msg) {
                    self.status
                        .set(DaemonConnectionStatus::Disconnected(error_msg));
                }
                None
            }
        }
    }

    /// Checks a result by reference without consuming it.
    /// Returns `true` if the result is Ok.
    /// If Err, checks if it is a connection error and updates global status if so.
    pub fn check_result_ref<T, E: std::fmt::Display>(&mut self, result: &Result<T, E>) -> bool {
        match result {
            Ok(_) => {
                if matches!(
                    *self.status.peek(),
                    DaemonConnectionStatus::Disconnected(_)
                ) {
                    self.status.set(DaemonConnectionStatus::Connected);
                }
                true
            }
            Err(e) => {
                let error_msg = e.to_string();
                if self.is_connection_error(&error_msg) {
                    dioxus::logger::tracing::warn!("daemon API error: {}", error_msg);
                    self.status
                        .set(DaemonConnectionStatus::Disconnected(error_msg));
                }
                false
            }
        }
    }

    /// Returns the read-only signal for the connection status.
    /// Call .read() on this in a component/resource to subscribe to changes.
    pub fn status(&self) -> Signal<DaemonConnectionStatus> {
        self.status
    }

    fn is_connection_error(&self, msg: &str) -> bool {
        let msg = msg.to_lowercase();
        msg.contains("connection refused")
            || msg.contains("broken pipe")
            || msg.contains("network unreachable")
            || msg.contains("connection reset")
            || msg.contains("failed to connect")
            || msg.contains("error sending request")
            || msg.contains("operation timed out")
            // Dioxus/Hyper specific transport errors
            || msg.contains("error running server function")
            || msg.contains("channel closed")
    }
}

pub fn use_daemon_checker() -> DaemonChecker {
    let status = use_context::<Signal<DaemonConnectionStatus>>();
    DaemonChecker { status }
}

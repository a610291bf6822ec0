//! Modal overlay shown while the automation daemon is unreachable.

use dioxus::prelude::*;

use crate::hooks::use_daemon_checker::DaemonConnectionStatus;

#[component]
pub fn ConnectionLost() -> Element {
    let status = use_context::<Signal<DaemonConnectionStatus>>();

    match status() {
        DaemonConnectionStatus::Connected => rsx! {},
        DaemonConnectionStatus::Disconnected(reason) => rsx! {
            dialog {
                open: true,
                article {
                    h3 { "Daemon unreachable" }
                    p { "The automation daemon is not responding. The view will recover on its own once the daemon is back." }
                    p {
                        small { code { "{reason}" } }
                    }
                }
            }
        },
    }
}

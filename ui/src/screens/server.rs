//=============================================================================
// File: src/screens/server.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Card;

#[component]
pub fn ServerScreen() -> Element {
    let mut version = use_resource(move || async move { api::server_version().await });
    let api_url = use_resource(move || async move { api::automation_api_url().await });

    rsx! {
        match &*version.read() {
            None => rsx! {
                Card {
                    h3 { "Daemon" }
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Ok(daemon_version)) => rsx! {
                Card {
                    h3 { "Daemon" }
                    p { "Version {daemon_version}" }
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to reach the daemon: {e}" }
                    button {
                        onclick: move |_| version.restart(),
                        "Retry"
                    }
                }
            },
        }
        Card {
            h3 { "Configuration" }
            match &*api_url.read() {
                Some(Ok(url)) => rsx! {
                    p {
                        "API endpoint: "
                        code { "{url}" }
                    }
                },
                _ => rsx! {
                    p { "API endpoint: unknown" }
                },
            }
        }
    }
}

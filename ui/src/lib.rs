// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod hooks;
mod pending_list;
mod screens;

use components::connection_lost::ConnectionLost;
use components::pico::Container;
use hooks::use_daemon_checker::DaemonConnectionStatus;
use screens::pending::PendingScreen;
use screens::server::ServerScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Default)]
enum Screen {
    #[default]
    Pending,
    Server,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Pending => "Pending",
            Screen::Server => "Server",
        }
    }
}

/// A list of all available screens for easy iteration.
const ALL_SCREENS: [Screen; 2] = [Screen::Pending, Screen::Server];

/// The navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: if *active_screen.read() == screen { "active-tab" } else { "" },
                            "aria-current": if *active_screen.read() == screen { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    .app-main-container {
        display: flex;
        flex-direction: column;
        min-height: 100vh;
    }

    .app-main-container header {
        flex-shrink: 0;
        padding: 0 1rem;
        margin-bottom: 0;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-bottom: 3px solid var(--pico-primary);
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .app-main-container .content {
        flex: 1;
        padding: 0 1rem;
        margin-top: 0;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Shared connection status, flipped by the daemon checker hook and
    // consumed by the ConnectionLost overlay.
    use_context_provider(|| Signal::new(DaemonConnectionStatus::Connected));

    let active_screen = use_signal(Screen::default);

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                h1 {
                                    style: "margin: 0; font-size: 1.5rem;",
                                    "Approvals"
                                }
                            }
                        }
                        ul {
                            li {
                                Tabs {
                                    active_screen,
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Pending => rsx! {
                            PendingScreen {}
                        },
                        Screen::Server => rsx! {
                            ServerScreen {}
                        },
                    }
                }
            }
            ConnectionLost {}
        }
    }
}

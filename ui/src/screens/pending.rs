//=============================================================================
// File: src/screens/pending.rs
//=============================================================================
use api::PendingEntry;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::hooks::use_daemon_checker::use_daemon_checker;
use crate::pending_list::InFlight;
use crate::pending_list::PendingList;

/// Lifecycle of the mirrored list.
#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Failed(String),
    Ready(PendingList),
}

#[component]
fn EntryRow(
    entry: PendingEntry,
    busy: bool,
    on_approve: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = entry.id;
    let added = entry.added.format("%Y-%m-%d %H:%M");
    let status = if entry.approved { "approved" } else { "pending" };

    rsx! {
        tr {
            td {
                a {
                    href: "{entry.url}",
                    title: "{entry.url}",
                    "{entry.title}"
                }
            }
            td { code { "{entry.task_name}" } }
            td { "{added}" }
            td { "{status}" }
            td {
                Button {
                    disabled: busy || entry.approved,
                    on_click: move |_| on_approve.call(id),
                    "Approve"
                }
                " "
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    disabled: busy,
                    on_click: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}

#[component]
pub fn PendingScreen() -> Element {
    let mut daemon = use_daemon_checker();
    let mut entries = use_signal(|| LoadState::Loading);
    let mut in_flight = use_signal(InFlight::default);

    // Initial load. The cached delivery is applied right away if one exists,
    // then the confirmed delivery replaces it wholesale; whichever delivery
    // applies last is what stays on screen, and with this composition that
    // is always the confirmed one.
    let mut loader = use_future(move || async move {
        match api::cached_pending_entries().await {
            Ok(Some(cached)) => entries.set(LoadState::Ready(cached.into())),
            Ok(None) => {}
            Err(e) => warn!("cached pending list unavailable: {e}"),
        }

        let fresh = api::pending_entries().await;
        daemon.check_result_ref(&fresh);
        match fresh {
            Ok(list) => entries.set(LoadState::Ready(list.into())),
            Err(e) => {
                // A cached list that already made it on screen stays there;
                // the connection checker surfaces the outage.
                let had_list = matches!(&*entries.peek(), LoadState::Ready(_));
                if had_list {
                    warn!("confirmed pending list failed, keeping cached copy: {e}");
                } else {
                    entries.set(LoadState::Failed(e.to_string()));
                }
            }
        }
    });

    // Effect: Restarts the loader when the connection is restored.
    let status_sig = daemon.status();
    use_effect(move || {
        if status_sig.read().is_connected() {
            loader.restart();
        }
    });

    // re-mirror the daemon every couple of minutes while it is reachable
    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let daemon_status = daemon.status();
        let mut list_loader = loader;

        async move {
            loop {
                crate::compat::sleep(std::time::Duration::from_secs(120)).await;
                if (*daemon_status.read()).is_connected() {
                    list_loader.restart();
                }
            }
        }
    });

    // Approve: the daemon is asked first; only its confirmed response is
    // applied, replacing the entry at its current position. Nothing is
    // mutated before confirmation, so there is no rollback path.
    let mut approve = move |id: i64| {
        if !in_flight.write().begin(id) {
            return;
        }
        spawn(async move {
            let result = api::approve_entry(id).await;
            in_flight.write().finish(id);
            match result {
                Ok(updated) => entries.with_mut(|state| {
                    if let LoadState::Ready(list) = state {
                        if !list.apply_approved(updated) {
                            warn!("approve confirmed for entry {id}, but it is no longer listed");
                        }
                    }
                }),
                Err(e) => {
                    daemon.check::<PendingEntry>(Err(e));
                }
            }
        });
    };

    // Delete: same shape, the entry is removed only after confirmation.
    let mut delete = move |id: i64| {
        if !in_flight.write().begin(id) {
            return;
        }
        spawn(async move {
            let result = api::delete_entry(id).await;
            in_flight.write().finish(id);
            match result {
                Ok(()) => entries.with_mut(|state| {
                    if let LoadState::Ready(list) = state {
                        if !list.remove(id) {
                            warn!("delete confirmed for entry {id}, but it is no longer listed");
                        }
                    }
                }),
                Err(e) => {
                    daemon.check::<()>(Err(e));
                }
            }
        });
    };

    rsx! {
        match &*entries.read() {
            LoadState::Loading => rsx! {
                Card {
                    h3 { "Pending Entries" }
                    p { "Loading..." }
                    progress {}
                }
            },
            LoadState::Failed(reason) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load pending entries: {reason}" }
                    button {
                        onclick: move |_| loader.restart(),
                        "Retry"
                    }
                }
            },
            LoadState::Ready(list) if list.is_empty() => rsx! {
                Card {
                    h3 { "Pending Entries" }
                    p { "Nothing is waiting for approval." }
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| loader.restart(),
                        "Refresh"
                    }
                }
            },
            LoadState::Ready(list) => rsx! {
                Card {
                    h3 { "Pending Entries ({list.len()})" }
                    div {
                        style: "max-height: 70vh; overflow-y: auto;",
                        table {
                            thead {
                                tr {
                                    th { "Title" }
                                    th { "Task" }
                                    th { "Added" }
                                    th { "Status" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for entry in list.entries().iter().cloned() {
                                    EntryRow {
                                        key: "{entry.id}",
                                        busy: in_flight.read().contains(entry.id),
                                        entry,
                                        on_approve: move |id| approve(id),
                                        on_delete: move |id| delete(id),
                                    }
                                }
                            }
                        }
                    }
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| loader.restart(),
                        "Refresh"
                    }
                }
            },
        }
    }
}

//! This crate contains all shared fullstack server functions.

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
mod daemon_http;
#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
mod entry_caching;
pub mod pending_entry;

use dioxus::prelude::*;

pub use pending_entry::PendingEntry;

pub type ApiError = anyhow::Error;

/// Confirmed delivery: asks the daemon for the current pending list and
/// refreshes the snapshot cache on the way out.
#[post("/api/pending_entries")]
pub async fn pending_entries() -> Result<Vec<PendingEntry>, ApiError> {
    let entries = daemon_http::list_pending().await?;
    entry_caching::shared().await.store(&entries).await;
    Ok(entries)
}

/// Cached delivery: the most recent confirmed list, if one is still fresh
/// enough to be worth showing. Never contacts the daemon.
#[post("/api/cached_pending_entries")]
pub async fn cached_pending_entries() -> Result<Option<Vec<PendingEntry>>, ApiError> {
    Ok(entry_caching::shared().await.snapshot().await)
}

/// Approves the entry and returns the daemon's updated record, which is
/// authoritative for the client's copy.
#[post("/api/approve_entry")]
pub async fn approve_entry(id: i64) -> Result<PendingEntry, ApiError> {
    let updated = daemon_http::approve(id).await?;
    dioxus::logger::tracing::info!("approved pending entry {id}");
    Ok(updated)
}

#[post("/api/delete_entry")]
pub async fn delete_entry(id: i64) -> Result<(), ApiError> {
    daemon_http::delete(id).await?;
    dioxus::logger::tracing::info!("deleted pending entry {id}");
    Ok(())
}

#[post("/api/server_version")]
pub async fn server_version() -> Result<String, ApiError> {
    daemon_http::server_version().await
}

#[get("/api/automation_api_url")]
pub async fn automation_api_url() -> Result<String, ApiError> {
    Ok(daemon_http::api_base_url())
}

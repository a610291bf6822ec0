//! HTTP client for the automation daemon's REST API.

use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::json;

use crate::pending_entry::PendingEntry;
use crate::ApiError;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5050/api";

/// Base URL of the daemon API, without a trailing slash.
pub fn api_base_url() -> String {
    std::env::var("AUTOMATION_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

fn client() -> Result<reqwest::Client, ApiError> {
    // no client caching for now. building one is cheap and this way a
    // token change is picked up without restarting the server.
    let mut headers = HeaderMap::new();
    if let Ok(token) = std::env::var("AUTOMATION_API_TOKEN") {
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Token {token}"))?);
    }
    Ok(reqwest::Client::builder().default_headers(headers).build()?)
}

pub async fn list_pending() -> Result<Vec<PendingEntry>, ApiError> {
    let url = format!("{}/pending/", api_base_url());
    let entries = client()?
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(entries)
}

/// Marks the entry approved; the daemon responds with the updated record.
pub async fn approve(id: i64) -> Result<PendingEntry, ApiError> {
    let url = format!("{}/pending/{id}/", api_base_url());
    let entry = client()?
        .put(&url)
        .json(&json!({ "operation": "approve" }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(entry)
}

/// Removes the entry. The daemon's response body is not interpreted beyond
/// the status code.
pub async fn delete(id: i64) -> Result<(), ApiError> {
    let url = format!("{}/pending/{id}/", api_base_url());
    client()?.delete(&url).send().await?.error_for_status()?;
    Ok(())
}

#[derive(Deserialize)]
struct VersionResponse {
    version: String,
}

pub async fn server_version() -> Result<String, ApiError> {
    let url = format!("{}/server/version/", api_base_url());
    let response: VersionResponse = client()?
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(response.version)
}

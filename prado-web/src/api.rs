//! Client-side catalog fetcher
//!
//! Talks to the prado-proxy endpoint, which terminates the Notion API and
//! returns flat records. The payload is normalized here in one batch, not
//! per page - pagination is the proxy's concern.

use prado_core::{normalize_catalog, Artwork};
use serde_json::Value;

/// Fetch and normalize the full remote catalog.
///
/// Transport failures and non-success statuses are errors; a successful
/// response that is not a JSON list is treated as "no data" and returns an
/// empty catalog, which the caller maps to fallback behavior.
pub async fn fetch_catalog() -> Result<Vec<Artwork>, String> {
    let resp = reqwest::get("/api/catalog")
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }

    let payload: Value = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;

    let Value::Array(records) = payload else {
        tracing::warn!("catalog payload is not a list");
        return Ok(vec![]);
    };

    Ok(normalize_catalog(&records))
}

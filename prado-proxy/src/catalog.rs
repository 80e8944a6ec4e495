//! Catalog route: the flattened Notion database as one JSON array.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::error;

use crate::notion::{flatten_page, NotionClient};

/// Shared state for the catalog route.
#[derive(Clone)]
pub struct ProxyState {
    pub notion: Arc<NotionClient>,
}

pub fn catalog_router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/catalog", get(get_catalog))
        .with_state(state)
}

/// Fetch every page of the database and return the flat record array.
///
/// Responses are cacheable for a minute so a burst of clients doesn't
/// translate into a burst of Notion queries.
async fn get_catalog(State(state): State<ProxyState>) -> Response {
    match state.notion.fetch_all_pages().await {
        Ok(pages) => {
            let records: Vec<Value> = pages.iter().map(flatten_page).collect();
            (
                StatusCode::OK,
                [(header::CACHE_CONTROL, "public, max-age=60")],
                Json(records),
            )
                .into_response()
        }
        Err(err) => {
            error!("Notion query failed: {err}");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

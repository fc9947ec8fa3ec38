//! HTTP surface for the cheat sheet.
//!
//! Serves the rendered page plus read-only JSON views. Handlers share one
//! `CatalogIndex` behind an `Arc`; nothing is ever written, so no locking is
//! involved.

use crate::catalog::{CatalogIndex, RecordKind, RecordRef};
use crate::render::{PageQuery, render_page};
use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;

/// Default listen address when neither a flag nor `WELDSHEET_ADDR` is set.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Clone)]
struct AppState {
    index: Arc<CatalogIndex>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

/// Build the router over an already validated index.
pub fn router(index: Arc<CatalogIndex>) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/healthz", get(healthz))
        .route("/api/catalog", get(full_catalog))
        .route("/api/search", get(search))
        .route("/api/tags/{tag}", get(tagged))
        .route("/api/{kind}/{key}", get(record))
        .with_state(AppState { index })
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(index: Arc<CatalogIndex>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    let local = listener.local_addr().context("reading bound address")?;
    tracing::info!(addr = %local, records = index.len(), "serving cheat sheet");
    axum::serve(listener, router(index))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "unable to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

async fn page(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    tracing::debug!(q = ?query.q, tag = ?query.tag, "render page");
    Html(render_page(state.index.catalog(), &query))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn full_catalog(State(state): State<AppState>) -> Response {
    Json(state.index.catalog()).into_response()
}

async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let records: Vec<RecordRef<'_>> = state.index.catalog().search_text(&params.q).collect();
    tracing::debug!(q = %params.q, hits = records.len(), "search");
    Json(records).into_response()
}

async fn tagged(State(state): State<AppState>, Path(tag): Path<String>) -> Response {
    let records: Vec<RecordRef<'_>> = state.index.catalog().find_by_tag(&tag).collect();
    tracing::debug!(tag = %tag, hits = records.len(), "tag lookup");
    Json(records).into_response()
}

async fn record(
    State(state): State<AppState>,
    Path((kind, key)): Path<(String, String)>,
) -> Response {
    let Some(kind) = RecordKind::parse(&kind) else {
        return not_found(format!("unknown record kind '{kind}'"));
    };
    match state.index.get(kind, &key) {
        Some(record) => Json(record).into_response(),
        None => not_found(format!("no {kind} with {} '{key}'", kind.key_field())),
    }
}

fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": {"category": "not_found", "message": message}})),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(CatalogIndex::builtin().expect("builtin index")))
    }

    async fn get_text(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, text) = get_text(uri).await;
        (status, serde_json::from_str(&text).unwrap())
    }

    fn kinds(body: &Value) -> Vec<&str> {
        body.as_array()
            .unwrap()
            .iter()
            .filter_map(|item| item["kind"].as_str())
            .collect()
    }

    #[tokio::test]
    async fn record_lookup_decodes_path_segments() {
        let (status, body) = get_json("/api/process/CMT%20(Cold%20Metal%20Transfer)").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "process");
        assert_eq!(body["record"]["short_name"], "CMT");
    }

    #[tokio::test]
    async fn missing_record_is_a_json_404() {
        let (status, body) = get_json("/api/parameters/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["category"], "not_found");

        let (status, _) = get_json("/api/welds/anything").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn tag_route_matches_case_insensitively() {
        let (status, body) = get_json("/api/tags/Stainless").await;
        assert_eq!(status, StatusCode::OK);
        let situations: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|item| item["record"]["situation"].as_str())
            .collect();
        assert!(situations.contains(&"Stainless - General"));
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let (status, body) = get_text("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn catalog_route_returns_every_collection() {
        let (status, body) = get_json("/api/catalog").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["schema_version"], "weld_catalog_v1");
        assert_eq!(body["processes"].as_array().unwrap().len(), 5);
        assert_eq!(body["parameters"].as_array().unwrap().len(), 15);
    }

    #[tokio::test]
    async fn search_route_spans_collections() {
        let (status, body) = get_json("/api/search?q=sugaring").await;
        assert_eq!(status, StatusCode::OK);
        let kinds = kinds(&body);
        assert!(kinds.contains(&"scenario"));
        assert!(kinds.contains(&"tip_section"));
    }

    #[tokio::test]
    async fn search_route_without_query_lists_everything() {
        let total = CatalogIndex::builtin().unwrap().len();
        let (status, body) = get_json("/api/search").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), total);
    }

    #[tokio::test]
    async fn page_route_applies_url_filters() {
        let (status, plain) = get_text("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(plain.contains("<!DOCTYPE html>"));
        assert!(!plain.contains("<section id=\"results\">"));

        let (_, tagged) = get_text("/?tag=stainless").await;
        assert!(tagged.contains("<section id=\"results\">"));
        assert!(tagged.contains("<strong>Stainless - General</strong>"));

        let (_, searched) = get_text("/?q=sugaring").await;
        assert!(searched.contains("<strong>Stainless - Avoiding Sugaring</strong>"));
    }
}

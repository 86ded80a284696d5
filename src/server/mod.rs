//! HTTP surface: routes each page to its view-model and serves it as JSON.

use crate::catalog::Catalog;
use crate::config::{Config, SiteConfig};
use crate::error::CatalogError;
use crate::view;
use anyhow::Context;
use axum::{
    Json, Router,
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Read-only state shared by every request.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub site: SiteConfig,
}

pub type SharedState = Arc<AppState>;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub apps: usize,
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::InvalidColorFormat(_) => StatusCode::BAD_REQUEST,
            CatalogError::AppNotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::EmptyIconColors(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(%status, "{self}");
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/apps", get(apps_list))
        .route("/apps/{slug}", get(app_detail))
        .route("/app/{slug}", get(legacy_app_link))
        .route("/colors", get(colors))
        .route("/healthz", get(health))
        .with_state(state)
}

fn request_url(uri: &axum::http::Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}

async fn apps_list(
    State(state): State<SharedState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ListQuery>,
) -> Response {
    tracing::debug!(category = ?query.category, "list apps");
    let page = view::assemble_list_page(
        &state.catalog,
        query.category.as_deref(),
        request_url(&uri),
        &state.site,
    );
    Json(page).into_response()
}

async fn app_detail(
    State(state): State<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(slug): Path<String>,
) -> Result<Response, CatalogError> {
    tracing::debug!(%slug, "app detail");
    let page = view::detail_page(&state.catalog, &slug, request_url(&uri), &state.site)?;
    Ok(Json(page).into_response())
}

async fn legacy_app_link(Path(slug): Path<String>) -> Redirect {
    Redirect::permanent(&format!("/apps/{}", urlencoding::encode(&slug)))
}

async fn colors(State(state): State<SharedState>) -> Result<Response, CatalogError> {
    let page = view::assemble_colors_page(&state.catalog)?;
    Ok(Json(page).into_response())
}

async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        apps: state.catalog.apps.len(),
    })
}

pub async fn serve(cfg: &Config, catalog: Catalog) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        catalog,
        site: cfg.site.clone(),
    });
    let addr = format!("{}:{}", cfg.server.bind, cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    tracing::info!("app running on {}", cfg.server.port);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server")?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("ctrl-c handler unavailable: {e}");
        std::future::pending::<()>().await;
    }
}

use crate::api::pages;
use crate::config::AuditMode;
use crate::error::AuditError;
use crate::models::{AppState, AuditParams};
use crate::services::run_site_audit;
use crate::utils::validate_url;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use log::{error, info};
use std::sync::Arc;

pub async fn landing_handler() -> Html<String> {
    Html(pages::landing(None))
}

// Validates up front so a bad URL bounces straight back to the form instead
// of showing a progress page that can only fail.
pub async fn loading_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AuditParams>,
) -> (StatusCode, Html<String>) {
    let require_scheme = state.config.mode == AuditMode::Lighthouse;
    match validate_url(&params.url, require_scheme) {
        Ok(url) => (StatusCode::OK, Html(pages::loading(url))),
        Err(e) => (e.status(), Html(pages::landing(Some(&e.to_string())))),
    }
}

pub async fn audit_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AuditParams>,
) -> (StatusCode, Html<String>) {
    info!("Started site audit for: {}", params.url);
    match run_site_audit(&state, &params.url).await {
        Ok(result) => {
            info!("✅ Site audit completed for {}", params.url.trim());
            (
                StatusCode::OK,
                Html(pages::results(params.url.trim(), &result)),
            )
        }
        Err(e @ AuditError::InvalidUrl) => {
            (e.status(), Html(pages::landing(Some(&e.to_string()))))
        }
        Err(e) => {
            error!("❌ Site audit failed for {}: {}", params.url, e);
            (e.status(), Html(pages::error_page(params.url.trim(), &e)))
        }
    }
}

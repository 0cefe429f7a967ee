//! HTTP handlers for the dashboard.
//!
//! Every request is one stateless render pass over the shared dataset.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tracing::debug;

use super::dto::{BoundsResponse, HealthResponse, RangeQuery};
use super::error::AppError;
use super::state::AppState;
use crate::api::DashboardData;
use crate::error::DashboardError;
use crate::render::render_dashboard_page;
use crate::services::compute_dashboard_data;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run the pipeline off the async executor.
async fn dashboard_data(state: &AppState, query: &RangeQuery) -> Result<DashboardData, AppError> {
    let (start, end) = query.dates()?;
    let dataset = state.dataset.clone();

    tokio::task::spawn_blocking(move || compute_dashboard_data(&dataset, start, end))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
        .map_err(AppError::from)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        daily_rows: state.dataset.daily.len(),
        hourly_rows: state.dataset.hourly.len(),
    }))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /
///
/// The full HTML dashboard for `?start=YYYY-MM-DD&end=YYYY-MM-DD`.
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Html<String>, AppError> {
    let data = dashboard_data(&state, &query).await?;
    debug!(start = %data.range.start, end = %data.range.end, "Rendering dashboard page");
    Ok(Html(render_dashboard_page(&data).into_string()))
}

/// GET /v1/dashboard
///
/// The same views as the page, as JSON.
pub async fn get_dashboard_data(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> HandlerResult<DashboardData> {
    Ok(Json(dashboard_data(&state, &query).await?))
}

/// GET /v1/bounds
pub async fn get_bounds(State(state): State<AppState>) -> HandlerResult<BoundsResponse> {
    let bounds = state
        .dataset
        .date_bounds()
        .ok_or(DashboardError::EmptyDataset("daily"))?;

    Ok(Json(BoundsResponse {
        min_date: bounds.start,
        max_date: bounds.end,
    }))
}

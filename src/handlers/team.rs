// src/handlers/team.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError, config::AppState, handlers::dashboard::FilterQuery,
    models::filters::LeadFilters,
};

// GET /api/team
pub async fn get_team_performance(
    State(app_state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filters = LeadFilters::try_from(query)?;
    let team = app_state.dashboard_service.team(&filters).await;

    Ok((StatusCode::OK, Json(team)))
}

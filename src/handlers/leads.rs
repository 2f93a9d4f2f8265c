// src/handlers/leads.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::dashboard::FilterQuery,
    models::{
        filters::LeadFilters,
        requests::{
            AddFollowUpPayload, AddNotePayload, CreateLeadPayload, RecordValuationPayload,
            ScheduleInspectionPayload, UpdateStatusPayload,
        },
    },
};

// =============================================================================
//  CONSULTA
// =============================================================================

// GET /api/leads
pub async fn list_leads(
    State(app_state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filters = LeadFilters::try_from(query)?;
    let view = app_state.dashboard_service.lead_list(&filters).await;

    Ok((StatusCode::OK, Json(view)))
}

// GET /api/leads/{id}
pub async fn get_lead(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.lead_service.get(&id).await?;
    Ok((StatusCode::OK, Json(lead)))
}

// =============================================================================
//  CADASTRO E ATUALIZAÇÕES
// =============================================================================

// POST /api/leads
pub async fn create_lead(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateLeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    // A validação acontece no serviço, depois de normalizar os opcionais
    let lead = app_state.lead_service.create_lead(payload).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

// PUT /api/leads/{id}/status
pub async fn update_status(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.lead_service.update_status(&id, payload.status).await?;
    Ok((StatusCode::OK, Json(lead)))
}

// POST /api/leads/{id}/notes
pub async fn add_note(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AddNotePayload>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.lead_service.add_note(&id, &payload.note).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

// POST /api/leads/{id}/follow-ups
pub async fn add_follow_up(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AddFollowUpPayload>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.lead_service.add_follow_up(&id, payload.date).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

// =============================================================================
//  AVALIAÇÃO
// =============================================================================

// POST /api/leads/{id}/inspection
pub async fn schedule_inspection(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ScheduleInspectionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.lead_service.schedule_inspection(&id, payload).await?;
    Ok((StatusCode::OK, Json(lead)))
}

// PUT /api/leads/{id}/valuation
pub async fn record_valuation(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RecordValuationPayload>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.lead_service.record_valuation(&id, payload).await?;
    Ok((StatusCode::OK, Json(lead)))
}

// src/handlers/notifications.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{common::error::AppError, config::AppState, models::notification::NotificationFilter};

#[derive(Debug, Default, Deserialize)]
pub struct InboxQuery {
    #[serde(default)]
    pub filter: NotificationFilter,
}

// GET /api/notifications?filter=unread
pub async fn list_notifications(
    State(app_state): State<AppState>,
    Query(query): Query<InboxQuery>,
) -> Result<impl IntoResponse, AppError> {
    let inbox = app_state.notification_center.inbox(query.filter).await;
    Ok((StatusCode::OK, Json(inbox)))
}

// POST /api/notifications/{id}/read
pub async fn mark_read(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let notification = app_state.notification_center.mark_read(id).await?;
    Ok((StatusCode::OK, Json(notification)))
}

// POST /api/notifications/read-all
pub async fn mark_all_read(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let updated = app_state.notification_center.mark_all_read().await;
    Ok((StatusCode::OK, Json(json!({ "updated": updated }))))
}

// DELETE /api/notifications/{id}
pub async fn delete_notification(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.notification_center.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

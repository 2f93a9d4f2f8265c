// src/routes.rs

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{config::AppState, handlers};

pub fn build_router(app_state: AppState) -> Router {
    let lead_routes = Router::new()
        .route("/"
               ,get(handlers::leads::list_leads)
               .post(handlers::leads::create_lead)
        )
        .route("/{id}", get(handlers::leads::get_lead))
        .route("/{id}/status", put(handlers::leads::update_status))
        .route("/{id}/notes", post(handlers::leads::add_note))
        .route("/{id}/follow-ups", post(handlers::leads::add_follow_up))
        .route("/{id}/inspection", post(handlers::leads::schedule_inspection))
        .route("/{id}/valuation", put(handlers::leads::record_valuation));

    let notification_routes = Router::new()
        .route("/", get(handlers::notifications::list_notifications))
        .route("/read-all", post(handlers::notifications::mark_all_read))
        .route("/{id}/read", post(handlers::notifications::mark_read))
        .route("/{id}", delete(handlers::notifications::delete_notification));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/api/team", get(handlers::team::get_team_performance))
        .nest("/api/leads", lead_routes)
        .nest("/api/notifications", notification_routes)
        .with_state(app_state)
}

// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::str::FromStr;

use crate::{
    common::error::AppError,
    config::AppState,
    models::filters::{DateFilter, DateSelector, LeadFilters},
};

// Query string compartilhada por dashboard, lista de leads e equipe.
// Ex: ?dateFilter=custom&customStart=2024-06-01&customEnd=2024-06-15&status=New,Closed
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    pub date_filter: Option<String>,
    pub custom_start: Option<String>,
    pub custom_end: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
}

// "New, Closed" -> [New, Closed]; rótulo desconhecido vira 400
fn parse_list<T: FromStr>(raw: Option<&str>, field: &str) -> Result<Vec<T>, AppError>
where
    T::Err: std::fmt::Display,
{
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<T>()
                .map_err(|e| AppError::InvalidFilter(format!("{field}: {e}")))
        })
        .collect()
}

impl TryFrom<FilterQuery> for LeadFilters {
    type Error = AppError;

    fn try_from(query: FilterQuery) -> Result<Self, Self::Error> {
        let selector = match query.date_filter.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<DateSelector>()
                .map_err(|e| AppError::InvalidFilter(format!("dateFilter: {e}")))?,
            _ => DateSelector::default(),
        };
        let date = match selector {
            DateSelector::Custom => {
                DateFilter::custom(query.custom_start.as_deref(), query.custom_end.as_deref())
            }
            other => DateFilter::new(other),
        };

        Ok(LeadFilters {
            date,
            search: query.search.unwrap_or_default(),
            statuses: parse_list(query.status.as_deref(), "status")?,
            sources: parse_list(query.source.as_deref(), "source")?,
        })
    }
}

// GET /api/dashboard
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filters = LeadFilters::try_from(query)?;
    let report = app_state.dashboard_service.report(&filters).await;

    Ok((StatusCode::OK, Json(report)))
}

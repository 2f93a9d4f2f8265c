//! Utilitários compartilhados pelos testes de integração

#![allow(dead_code)]

use std::sync::Once;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use carthi_leads::{build_router, db::LeadRepository, AppConfig, AppState};
use serde_json::Value;
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

pub fn seed_path() -> String {
    format!("{}/data/leads.json", env!("CARGO_MANIFEST_DIR"))
}

/// Router completo sobre o seed de `data/leads.json`, com a configuração padrão.
pub async fn test_app() -> (Router, AppState) {
    init_test_logging();

    let config = AppConfig::from_lookup(|_| None).expect("config padrão");
    let repo = LeadRepository::from_seed_file(seed_path())
        .await
        .expect("seed de leads");
    let state = AppState::with_repository(&config, repo);
    (build_router(state.clone()), state)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("router é infalível");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("corpo da resposta");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

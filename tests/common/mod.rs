#![allow(dead_code)]

use std::sync::Arc;

use ai_content_generator::{app::envy::Envy, router, AppState};
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
};
use serde_json::Value;
use tower::util::ServiceExt;

pub static MODELSLAB_PATH: &str = "/api/v6/realtime/text2img";
pub static GEMINI_PATH: &str = "/models/gemini-2.0-flash-exp:generateContent";

pub fn envy_with_modelslab(server_uri: &str) -> Envy {
    Envy {
        stable_diffusion_key: Some("test-sd-key".to_string()),
        modelslab_api_url: Some(format!("{}{}", server_uri, MODELSLAB_PATH)),
        ..Default::default()
    }
}

pub fn envy_with_gemini(server_uri: &str) -> Envy {
    Envy {
        gemini_api_key: Some("test-gemini-key".to_string()),
        gemini_api_url: server_uri.to_string(),
        ..Default::default()
    }
}

pub async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(state, request).await
}

pub async fn post_json(state: AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(state, request).await
}

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let app = router(Arc::new(state));
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

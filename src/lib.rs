use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{app::envy::Envy, images::apis::modelslab::config::REQUEST_TIMEOUT};

pub mod app;
pub mod images;
pub mod text;

pub static ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:4200"];

#[derive(Debug, Clone)]
pub struct AppState {
    pub envy: Envy,
    pub client: reqwest::Client,
    pub image_request_timeout: Duration,
}

impl AppState {
    pub fn new(envy: Envy) -> Self {
        Self {
            envy,
            client: reqwest::Client::new(),
            image_request_timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_image_request_timeout(mut self, timeout: Duration) -> Self {
        self.image_request_timeout = timeout;
        self
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let origins = ALLOWED_ORIGINS
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    Router::new()
        .route("/health", get(app::controller::get_health))
        .route("/generate-text", post(text::controller::generate_text))
        .route("/generate-image", post(images::controller::generate_image))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

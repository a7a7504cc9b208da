use axum::Json;
use serde_json::Value;

use super::service;

pub async fn get_health() -> Json<Value> {
    Json(service::get_health())
}

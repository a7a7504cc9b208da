use serde_json::{json, Value};

pub static SERVICE_NAME: &str = "AI Content Generator";

pub fn get_health() -> Value {
    json!({
        "status": "healthy",
        "service": SERVICE_NAME,
    })
}

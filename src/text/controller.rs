use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_text_dto::GenerateTextDto,
    models::generate_text_response::GenerateTextResponse, service,
};

pub async fn generate_text(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<GenerateTextDto>,
) -> Result<Json<GenerateTextResponse>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::generate_text(&dto, &state).await {
            Ok(response) => Ok(Json(response)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

mod api;
mod render;

pub use api::ApiError;
pub use render::RenderError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Neither variant carries anything a client should see; log the
        // detail under an error id and return an opaque 500.
        let error_id = Uuid::new_v4();

        match &self {
            ApiError::DatabaseError(e) => {
                tracing::error!(error_id = ?error_id, "Database error: {}", e)
            }
            ApiError::InternalError(e) => {
                tracing::error!(error_id = ?error_id, "Internal error: {}", e)
            }
        }

        let body = Json(json!({
            "error": {
                "code": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                "message": "Internal server error",
                "error_id": error_id.to_string(),
            }
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

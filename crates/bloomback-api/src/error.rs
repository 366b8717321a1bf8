use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use bloomback_types::BloomError;

/// Response wrapper for the typed domain errors. Handlers bubble
/// `BloomError` with `?` and this decides the status code and the JSON body;
/// the user-facing hint comes from the error kind, never from a provider
/// message.
#[derive(Debug)]
pub struct ApiError(pub BloomError);

impl From<BloomError> for ApiError {
    fn from(err: BloomError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BloomError::Unauthenticated | BloomError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            BloomError::ConfirmationPending => StatusCode::FORBIDDEN,
            BloomError::MissingField(_) | BloomError::InvalidField(_) => StatusCode::BAD_REQUEST,
            BloomError::NotFound => StatusCode::NOT_FOUND,
            BloomError::EmailTaken => StatusCode::CONFLICT,
            BloomError::SeedOutOfRange | BloomError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            error!("request failed: {}", self.0);
        }

        let body = json!({
            "error": self.0.to_string(),
            "hint": self.0.user_message(),
        });

        (status, Json(body)).into_response()
    }
}

/// Map a `spawn_blocking` join failure onto the storage-unavailable kind.
pub(crate) fn join_error(err: tokio::task::JoinError) -> ApiError {
    error!("spawn_blocking join error: {}", err);
    ApiError(BloomError::Storage(bloomback_types::StorageKind::Unavailable))
}

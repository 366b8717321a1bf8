use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use bloomback_db::models::BloomRow;
use bloomback_types::BloomError;
use bloomback_types::api::{
    BloomResponse, Claims, CreateBloomRequest, CreateBloomResponse, MyBloomsResponse,
};

use crate::auth::AppState;
use crate::error::{ApiError, join_error};

/// Pull a required compose-form field, trimmed. The field name in the error
/// is the wire name so clients can highlight the right input.
pub(crate) fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, BloomError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(BloomError::MissingField(field)),
    }
}

pub async fn create_bloom(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateBloomRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let recipient_name = required(&req.recipient_name, "recipientName")?.to_string();
    let sender_name = required(&req.sender_name, "senderName")?.to_string();
    let message = required(&req.message, "message")?.to_string();

    let row = BloomRow {
        id: Uuid::new_v4().to_string(),
        user_id: claims.sub.to_string(),
        recipient_name,
        sender_name,
        sender_email: req.sender_email,
        message,
        photo_url: req.photo_url,
        // Assigned exactly once; every later read derives the planted
        // location from this value.
        tree_seed: rand::random::<f64>(),
        tree_growth_stage: 0,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    // Run the blocking insert off the async runtime
    let db = state.clone();
    let row = tokio::task::spawn_blocking(move || db.db.insert_bloom(&row).map(|_| row))
        .await
        .map_err(join_error)??;

    Ok((
        StatusCode::CREATED,
        Json(CreateBloomResponse {
            message: "Bloom created successfully",
            bloom: row.into(),
        }),
    ))
}

pub async fn my_blooms(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let user_id = claims.sub.to_string();

    let rows = tokio::task::spawn_blocking(move || db.db.list_blooms(&user_id))
        .await
        .map_err(join_error)??;

    Ok(Json(MyBloomsResponse {
        blooms: rows.into_iter().map(Into::into).collect(),
    }))
}

/// Public share-link lookup. No session: the composite key is the only
/// capability needed to view a bloom.
pub async fn get_bloom(
    State(state): State<AppState>,
    Path((user_id, bloom_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();

    let row = tokio::task::spawn_blocking(move || {
        db.db.get_bloom(&user_id.to_string(), &bloom_id.to_string())
    })
    .await
    .map_err(join_error)??
    .ok_or(BloomError::NotFound)?;

    Ok(Json(BloomResponse { bloom: row.into() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_missing_and_blank() {
        assert!(matches!(
            required(&None, "recipientName"),
            Err(BloomError::MissingField("recipientName"))
        ));
        assert!(matches!(
            required(&Some("   ".into()), "message"),
            Err(BloomError::MissingField("message"))
        ));
        assert_eq!(required(&Some(" Alice ".into()), "recipientName").unwrap(), "Alice");
    }
}

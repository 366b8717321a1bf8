use std::sync::Arc;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use bloomback_db::Database;
use bloomback_types::{BloomError, StorageKind};
use bloomback_types::api::{
    Claims, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub jwt_secret: String,
    /// When set, sign-up leaves the account unconfirmed and returns the
    /// distinguished confirmation-required result instead of a token.
    pub require_confirmation: bool,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Validate input
    if req.name.trim().is_empty() {
        return Err(BloomError::MissingField("name").into());
    }
    if !req.email.contains('@') {
        return Err(BloomError::InvalidField("email").into());
    }
    if req.password.len() < 8 {
        return Err(BloomError::InvalidField("password").into());
    }

    if state.db.get_user_by_email(&req.email)?.is_some() {
        return Err(BloomError::EmailTaken.into());
    }

    // Hash password with Argon2id
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|_| BloomError::Storage(StorageKind::Unavailable))?
        .to_string();

    let user_id = Uuid::new_v4();
    let created_at = chrono::Utc::now().to_rfc3339();

    if state.require_confirmation {
        let confirm_token = Uuid::new_v4().to_string();
        state.db.create_user(
            &user_id.to_string(),
            &req.email,
            &req.name,
            &password_hash,
            false,
            Some(&confirm_token),
            &created_at,
        )?;

        // No mailer in this deployment: the confirmation link is logged and
        // delivery is an operator concern.
        info!("confirmation token for {}: {}", req.email, confirm_token);

        return Ok((
            StatusCode::OK,
            Json(RegisterResponse::confirmation_required()),
        ));
    }

    state.db.create_user(
        &user_id.to_string(),
        &req.email,
        &req.name,
        &password_hash,
        true,
        None,
        &created_at,
    )?;

    let token = create_token(&state.jwt_secret, user_id, &req.name)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse::Created { user_id, token }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .db
        .get_user_by_email(&req.email)?
        .ok_or(BloomError::InvalidCredentials)?;

    // Verify password
    let parsed_hash =
        PasswordHash::new(&user.password).map_err(|_| BloomError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .map_err(|_| BloomError::InvalidCredentials)?;

    if !user.confirmed {
        return Err(BloomError::ConfirmationPending.into());
    }

    let user_id: Uuid = user
        .id
        .parse()
        .map_err(|_| BloomError::Storage(StorageKind::Unavailable))?;

    let token = create_token(&state.jwt_secret, user_id, &user.name)?;

    Ok(Json(LoginResponse {
        user_id,
        name: user.name,
        token,
    }))
}

pub async fn confirm(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.db.confirm_user(&token)? {
        return Err(BloomError::NotFound.into());
    }
    Ok(Json(json!({ "status": "confirmed" })))
}

pub fn create_token(secret: &str, user_id: Uuid, name: &str) -> Result<String, BloomError> {
    let claims = Claims {
        sub: user_id,
        name: name.to_string(),
        exp: (chrono::Utc::now() + chrono::Duration::days(30)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| BloomError::Storage(StorageKind::Unavailable))
}

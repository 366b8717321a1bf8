use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Bloom;

// -- JWT Claims --

/// JWT claims shared between the auth handlers that mint tokens and the
/// middleware that validates them. Canonical definition lives here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub name: String,
    pub exp: usize,
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Sign-up outcome. Pending email confirmation is a distinguished result
/// value, not an error: the account exists but no token is issued yet.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RegisterResponse {
    Created { user_id: Uuid, token: String },
    ConfirmationRequired { status: &'static str },
}

impl RegisterResponse {
    pub fn confirmation_required() -> Self {
        RegisterResponse::ConfirmationRequired {
            status: "confirmation_required",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: Uuid,
    pub name: String,
    pub token: String,
}

// -- Blooms --

/// Compose-form payload. Field names match the share/compose wire format
/// (camelCase) rather than the stored column names.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBloomRequest {
    pub recipient_name: Option<String>,
    pub sender_name: Option<String>,
    pub message: Option<String>,
    pub photo_url: Option<String>,
    pub sender_email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateBloomResponse {
    pub message: &'static str,
    pub bloom: Bloom,
}

#[derive(Debug, Serialize)]
pub struct MyBloomsResponse {
    pub blooms: Vec<Bloom>,
}

#[derive(Debug, Serialize)]
pub struct BloomResponse {
    pub bloom: Bloom,
}

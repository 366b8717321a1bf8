use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A single gift record. The tree seed is assigned once at creation and
/// never changes; the growth stage is stored but never advanced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bloom {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipient_name: String,
    pub sender_name: String,
    pub sender_email: Option<String>,
    pub message: String,
    pub photo_url: Option<String>,
    pub tree_seed: f64,
    pub tree_growth_stage: i64,
    pub created_at: DateTime<Utc>,
}

/// A bouquet composed while logged out. Has no owner; resolved by id from
/// the share-view fallback chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BouquetDraft {
    pub id: Uuid,
    pub recipient_name: String,
    pub sender_name: String,
    pub message: String,
    pub photo_url: Option<String>,
    pub tree_seed: f64,
    pub created_at: DateTime<Utc>,
}

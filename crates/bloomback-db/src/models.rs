//! Database row types — these map directly to SQLite rows.
//! Distinct from the bloomback-types API models to keep the DB layer
//! independent; conversions live here so corrupt-row handling is in one
//! place.

use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use bloomback_types::models::{Bloom, BouquetDraft};

pub struct UserRow {
    pub id: String,
    pub email: String,
    pub name: String,
    pub password: String,
    pub confirmed: bool,
    pub created_at: String,
}

pub struct BloomRow {
    pub id: String,
    pub user_id: String,
    pub recipient_name: String,
    pub sender_name: String,
    pub sender_email: Option<String>,
    pub message: String,
    pub photo_url: Option<String>,
    pub tree_seed: f64,
    pub tree_growth_stage: i64,
    pub created_at: String,
}

pub struct DraftRow {
    pub id: String,
    pub recipient_name: String,
    pub sender_name: String,
    pub message: String,
    pub photo_url: Option<String>,
    pub tree_seed: f64,
    pub created_at: String,
}

fn parse_uuid(raw: &str, field: &str) -> Uuid {
    raw.parse().unwrap_or_else(|e| {
        warn!("Corrupt {} '{}': {}", field, raw, e);
        Uuid::default()
    })
}

fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            // SQLite-style "YYYY-MM-DD HH:MM:SS" without timezone.
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt created_at '{}': {}", raw, e);
            DateTime::default()
        })
}

impl From<BloomRow> for Bloom {
    fn from(row: BloomRow) -> Self {
        Bloom {
            id: parse_uuid(&row.id, "bloom id"),
            user_id: parse_uuid(&row.user_id, "user_id"),
            recipient_name: row.recipient_name,
            sender_name: row.sender_name,
            sender_email: row.sender_email,
            message: row.message,
            photo_url: row.photo_url,
            tree_seed: row.tree_seed,
            tree_growth_stage: row.tree_growth_stage,
            created_at: parse_timestamp(&row.created_at),
        }
    }
}

impl From<DraftRow> for BouquetDraft {
    fn from(row: DraftRow) -> Self {
        BouquetDraft {
            id: parse_uuid(&row.id, "draft id"),
            recipient_name: row.recipient_name,
            sender_name: row.sender_name,
            message: row.message,
            photo_url: row.photo_url,
            tree_seed: row.tree_seed,
            created_at: parse_timestamp(&row.created_at),
        }
    }
}

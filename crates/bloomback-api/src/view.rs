use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bloomback_db::models::DraftRow;
use bloomback_forest::PlantedLocation;
use bloomback_types::BloomError;
use bloomback_types::api::CreateBloomRequest;
use bloomback_types::models::{Bloom, BouquetDraft};

use crate::auth::AppState;
use crate::blooms::required;
use crate::error::{ApiError, join_error};

const FALLBACK_RECIPIENT: &str = "Friend";
const FALLBACK_SENDER: &str = "A Secret Admirer";
const FALLBACK_MESSAGE: &str = "Thinking of you this Valentine's Day! \u{1f495}";

/// Query parameters accepted by the bare `/view` route. All optional; they
/// feed the fallback chain below.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub to: Option<String>,
    pub from: Option<String>,
    pub msg: Option<String>,
    pub img: Option<String>,
    /// Kept as a raw string: a stale or mangled draft id must fall through
    /// to the placeholder, not fail the request.
    pub draft: Option<String>,
}

impl ViewQuery {
    fn draft_id(&self) -> Option<Uuid> {
        self.draft.as_deref().and_then(|id| id.parse().ok())
    }
}

/// What the share page needs to render, before greeting strings are built.
#[derive(Debug, Clone)]
pub struct ViewData {
    pub recipient_name: String,
    pub sender_name: String,
    pub message: String,
    pub photo_url: Option<String>,
    /// Absent for query-parameter and placeholder views: without a stored
    /// seed there is no tree to show, and we never invent one on read.
    pub tree_seed: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct PlantedTreeView {
    pub site_name: &'static str,
    pub area: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub coordinates: String,
    pub map_url: String,
}

impl From<PlantedLocation> for PlantedTreeView {
    fn from(loc: PlantedLocation) -> Self {
        PlantedTreeView {
            coordinates: loc.formatted_coordinates(),
            map_url: loc.map_url(),
            site_name: loc.site_name,
            area: loc.area,
            latitude: loc.latitude,
            longitude: loc.longitude,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub greeting: String,
    pub attribution: String,
    pub message: String,
    pub photo_url: Option<String>,
    pub tree: Option<PlantedTreeView>,
}

impl From<Bloom> for ViewData {
    fn from(bloom: Bloom) -> Self {
        ViewData {
            recipient_name: bloom.recipient_name,
            sender_name: bloom.sender_name,
            message: bloom.message,
            photo_url: bloom.photo_url,
            tree_seed: Some(bloom.tree_seed),
        }
    }
}

impl From<BouquetDraft> for ViewData {
    fn from(draft: BouquetDraft) -> Self {
        ViewData {
            recipient_name: draft.recipient_name,
            sender_name: draft.sender_name,
            message: draft.message,
            photo_url: draft.photo_url,
            tree_seed: Some(draft.tree_seed),
        }
    }
}

/// The share-view fallback chain, in order: explicit query parameters (used
/// when at least one meaningful field is present, missing ones defaulted),
/// then the stored draft, then the hardcoded placeholder. Never fails.
pub fn resolve(query: &ViewQuery, draft: Option<BouquetDraft>) -> ViewData {
    if query.to.is_some() || query.from.is_some() || query.msg.is_some() {
        return ViewData {
            recipient_name: query.to.clone().unwrap_or_else(|| FALLBACK_RECIPIENT.into()),
            sender_name: query.from.clone().unwrap_or_else(|| FALLBACK_SENDER.into()),
            message: query.msg.clone().unwrap_or_else(|| FALLBACK_MESSAGE.into()),
            photo_url: query.img.clone(),
            tree_seed: None,
        };
    }

    if let Some(draft) = draft {
        return draft.into();
    }

    ViewData {
        recipient_name: FALLBACK_RECIPIENT.into(),
        sender_name: FALLBACK_SENDER.into(),
        message: FALLBACK_MESSAGE.into(),
        photo_url: None,
        tree_seed: None,
    }
}

/// Turn resolved data into the rendered view model.
pub fn build_view(data: ViewData) -> Result<ViewResponse, BloomError> {
    let tree = match data.tree_seed {
        Some(seed) => Some(
            bloomback_forest::assign(seed)
                .map_err(|_| BloomError::SeedOutOfRange)?
                .into(),
        ),
        None => None,
    };

    Ok(ViewResponse {
        greeting: format!("Happy Blooming, {}!", data.recipient_name),
        attribution: format!("From {} with love \u{1f495}", data.sender_name),
        message: data.message,
        photo_url: data.photo_url,
        tree,
    })
}

/// Share link for a stored bloom: `/view/{user_id}/{bloom_id}`.
pub async fn view_bloom(
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

    let bloom: Bloom = row.into();
    Ok(Json(build_view(bloom.into())?))
}

/// Bare `/view` with the query-param / draft / placeholder fallback chain.
pub async fn view_fallback(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = match query.draft_id() {
        Some(id) => {
            let db = state.clone();
            tokio::task::spawn_blocking(move || db.db.get_draft(&id.to_string()))
                .await
                .map_err(join_error)??
                .map(BouquetDraft::from)
        }
        None => None,
    };

    Ok(Json(build_view(resolve(&query, draft))?))
}

#[derive(Debug, Serialize)]
pub struct CreateDraftResponse {
    pub draft_id: Uuid,
}

/// The logged-out compose path: same required fields as a real bloom, but
/// the payload lands in the ownerless drafts table and only the id comes
/// back. No user row is read or written.
pub async fn create_draft(
    State(state): State<AppState>,
    Json(req): Json<CreateBloomRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let recipient_name = required(&req.recipient_name, "recipientName")?.to_string();
    let sender_name = required(&req.sender_name, "senderName")?.to_string();
    let message = required(&req.message, "message")?.to_string();

    let draft_id = Uuid::new_v4();
    let row = DraftRow {
        id: draft_id.to_string(),
        recipient_name,
        sender_name,
        message,
        photo_url: req.photo_url,
        tree_seed: rand::random::<f64>(),
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    let db = state.clone();
    tokio::task::spawn_blocking(move || db.db.insert_draft(&row))
        .await
        .map_err(join_error)??;

    Ok((StatusCode::CREATED, Json(CreateDraftResponse { draft_id })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(recipient: &str, sender: &str, message: &str) -> BouquetDraft {
        BouquetDraft {
            id: Uuid::new_v4(),
            recipient_name: recipient.into(),
            sender_name: sender.into(),
            message: message.into(),
            photo_url: None,
            tree_seed: 0.25,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn query_params_win_over_a_stored_draft() {
        let query = ViewQuery {
            to: Some("Carol".into()),
            ..Default::default()
        };
        let data = resolve(&query, Some(draft("Alice", "Bob", "Hi")));

        assert_eq!(data.recipient_name, "Carol");
        // Missing params fall back to the defaults, not to the draft.
        assert_eq!(data.sender_name, FALLBACK_SENDER);
        assert_eq!(data.message, FALLBACK_MESSAGE);
        assert_eq!(data.tree_seed, None);
    }

    #[test]
    fn draft_is_used_when_no_params_are_present() {
        let data = resolve(&ViewQuery::default(), Some(draft("Alice", "Bob", "Hi")));
        assert_eq!(data.recipient_name, "Alice");
        assert_eq!(data.tree_seed, Some(0.25));
    }

    #[test]
    fn placeholder_closes_the_chain() {
        let data = resolve(&ViewQuery::default(), None);
        assert_eq!(data.recipient_name, FALLBACK_RECIPIENT);
        assert_eq!(data.sender_name, FALLBACK_SENDER);
        assert_eq!(data.tree_seed, None);
    }

    #[test]
    fn logged_out_compose_renders_the_greeting() {
        // The end of the logged-out flow: draft saved, view resolved from it.
        let view = build_view(resolve(&ViewQuery::default(), Some(draft("Alice", "Bob", "Hi"))))
            .unwrap();

        assert_eq!(view.greeting, "Happy Blooming, Alice!");
        assert!(view.attribution.starts_with("From Bob with love"));
        assert_eq!(view.message, "Hi");
        assert!(view.tree.is_some());
    }

    #[test]
    fn views_without_a_seed_have_no_tree() {
        let query = ViewQuery {
            to: Some("Alice".into()),
            ..Default::default()
        };
        let view = build_view(resolve(&query, None)).unwrap();
        assert!(view.tree.is_none());
    }

    #[test]
    fn mangled_draft_id_is_treated_as_absent() {
        let query = ViewQuery {
            draft: Some("not-a-uuid".into()),
            ..Default::default()
        };
        assert_eq!(query.draft_id(), None);

        let data = resolve(&query, None);
        assert_eq!(data.recipient_name, FALLBACK_RECIPIENT);
        assert_eq!(data.tree_seed, None);
    }

    #[test]
    fn tree_block_is_deterministic_per_seed() {
        let a = build_view(resolve(&ViewQuery::default(), Some(draft("A", "B", "C")))).unwrap();
        let b = build_view(resolve(&ViewQuery::default(), Some(draft("A", "B", "C")))).unwrap();
        let (ta, tb) = (a.tree.unwrap(), b.tree.unwrap());
        assert_eq!(ta.site_name, tb.site_name);
        assert_eq!(ta.latitude, tb.latitude);
        assert_eq!(ta.longitude, tb.longitude);
    }
}

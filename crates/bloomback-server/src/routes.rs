use axum::{
    Json, Router, middleware,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use bloomback_api::middleware::require_auth;
use bloomback_api::{AppState, auth, blooms, bouquet, view};

pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/confirm/{token}", get(auth::confirm))
        .route("/bloom/{user_id}/{bloom_id}", get(blooms::get_bloom))
        .route("/view", get(view::view_fallback))
        .route("/view/{user_id}/{bloom_id}", get(view::view_bloom))
        .route("/draft-bloom", post(view::create_draft))
        .route("/bouquet/frame/{frame}", get(bouquet::get_frame))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/create-bloom", post(blooms::create_bloom))
        .route("/my-blooms", get(blooms::my_blooms))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

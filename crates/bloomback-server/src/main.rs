mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use bloomback_api::{AppState, AppStateInner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bloomback=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let jwt_secret =
        std::env::var("BLOOMBACK_JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".into());
    let db_path = std::env::var("BLOOMBACK_DB_PATH").unwrap_or_else(|_| "bloomback.db".into());
    let host = std::env::var("BLOOMBACK_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("BLOOMBACK_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;
    let require_confirmation = std::env::var("BLOOMBACK_REQUIRE_CONFIRMATION")
        .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    // Init database
    let db = bloomback_db::Database::open(&PathBuf::from(&db_path))?;

    // Shared state
    let state: AppState = Arc::new(AppStateInner {
        db,
        jwt_secret,
        require_confirmation,
    });

    let app = routes::build_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("BloomBack server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id              TEXT PRIMARY KEY,
            email           TEXT NOT NULL UNIQUE,
            name            TEXT NOT NULL,
            password        TEXT NOT NULL,
            confirmed       INTEGER NOT NULL DEFAULT 1,
            confirm_token   TEXT,
            created_at      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS blooms (
            id                  TEXT PRIMARY KEY,
            user_id             TEXT NOT NULL REFERENCES users(id),
            recipient_name      TEXT NOT NULL,
            sender_name         TEXT NOT NULL,
            sender_email        TEXT,
            message             TEXT NOT NULL,
            photo_url           TEXT,
            tree_seed           REAL NOT NULL,
            tree_growth_stage   INTEGER NOT NULL DEFAULT 0,
            created_at          TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_blooms_owner
            ON blooms(user_id, created_at);

        -- Bouquets composed while logged out. No owner; resolved by id
        -- from the share-view fallback chain.
        CREATE TABLE IF NOT EXISTS drafts (
            id              TEXT PRIMARY KEY,
            recipient_name  TEXT NOT NULL,
            sender_name     TEXT NOT NULL,
            message         TEXT NOT NULL,
            photo_url       TEXT,
            tree_seed       REAL NOT NULL,
            created_at      TEXT NOT NULL
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}

use rusqlite::Connection;

use crate::Database;
use crate::models::{BloomRow, DraftRow, UserRow};
use bloomback_types::BloomError;

impl Database {
    // -- Users --

    pub fn create_user(
        &self,
        id: &str,
        email: &str,
        name: &str,
        password_hash: &str,
        confirmed: bool,
        confirm_token: Option<&str>,
        created_at: &str,
    ) -> Result<(), BloomError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (id, email, name, password, confirmed, confirm_token, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![id, email, name, password_hash, confirmed, confirm_token, created_at],
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>, BloomError> {
        self.with_conn(|conn| query_user_by_email(conn, email))
    }

    /// Flip the account matching `token` to confirmed. Returns false when no
    /// account carries that token (already confirmed, or never issued).
    pub fn confirm_user(&self, token: &str) -> Result<bool, BloomError> {
        self.with_conn(|conn| {
            let updated = conn.execute(
                "UPDATE users SET confirmed = 1, confirm_token = NULL WHERE confirm_token = ?1",
                [token],
            )?;
            Ok(updated > 0)
        })
    }

    // -- Blooms --

    pub fn insert_bloom(&self, row: &BloomRow) -> Result<(), BloomError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO blooms (id, user_id, recipient_name, sender_name, sender_email,
                                     message, photo_url, tree_seed, tree_growth_stage, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                rusqlite::params![
                    row.id,
                    row.user_id,
                    row.recipient_name,
                    row.sender_name,
                    row.sender_email,
                    row.message,
                    row.photo_url,
                    row.tree_seed,
                    row.tree_growth_stage,
                    row.created_at,
                ],
            )?;
            Ok(())
        })
    }

    /// All blooms owned by `user_id`, newest first.
    pub fn list_blooms(&self, user_id: &str) -> Result<Vec<BloomRow>, BloomError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, recipient_name, sender_name, sender_email,
                        message, photo_url, tree_seed, tree_growth_stage, created_at
                 FROM blooms
                 WHERE user_id = ?1
                 ORDER BY created_at DESC",
            )?;

            let rows = stmt
                .query_map([user_id], map_bloom_row)?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    /// Point lookup by composite key. Public: this backs the share link, so
    /// there is no session check here.
    pub fn get_bloom(&self, user_id: &str, bloom_id: &str) -> Result<Option<BloomRow>, BloomError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, recipient_name, sender_name, sender_email,
                        message, photo_url, tree_seed, tree_growth_stage, created_at
                 FROM blooms
                 WHERE user_id = ?1 AND id = ?2",
            )?;

            stmt.query_row([user_id, bloom_id], map_bloom_row).optional()
        })
    }

    // -- Drafts --

    pub fn insert_draft(&self, row: &DraftRow) -> Result<(), BloomError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO drafts (id, recipient_name, sender_name, message,
                                     photo_url, tree_seed, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    row.id,
                    row.recipient_name,
                    row.sender_name,
                    row.message,
                    row.photo_url,
                    row.tree_seed,
                    row.created_at,
                ],
            )?;
            Ok(())
        })
    }

    pub fn get_draft(&self, id: &str) -> Result<Option<DraftRow>, BloomError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, recipient_name, sender_name, message, photo_url, tree_seed, created_at
                 FROM drafts WHERE id = ?1",
            )?;

            stmt.query_row([id], |row| {
                Ok(DraftRow {
                    id: row.get(0)?,
                    recipient_name: row.get(1)?,
                    sender_name: row.get(2)?,
                    message: row.get(3)?,
                    photo_url: row.get(4)?,
                    tree_seed: row.get(5)?,
                    created_at: row.get(6)?,
                })
            })
            .optional()
        })
    }

    pub fn count_blooms(&self) -> Result<i64, BloomError> {
        self.with_conn(|conn| {
            conn.query_row("SELECT COUNT(*) FROM blooms", [], |row| row.get(0))
        })
    }
}

fn map_bloom_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<BloomRow> {
    Ok(BloomRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        recipient_name: row.get(2)?,
        sender_name: row.get(3)?,
        sender_email: row.get(4)?,
        message: row.get(5)?,
        photo_url: row.get(6)?,
        tree_seed: row.get(7)?,
        tree_growth_stage: row.get(8)?,
        created_at: row.get(9)?,
    })
}

fn query_user_by_email(conn: &Connection, email: &str) -> rusqlite::Result<Option<UserRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, email, name, password, confirmed, created_at FROM users WHERE email = ?1",
    )?;

    stmt.query_row([email], |row| {
        Ok(UserRow {
            id: row.get(0)?,
            email: row.get(1)?,
            name: row.get(2)?,
            password: row.get(3)?,
            confirmed: row.get(4)?,
            created_at: row.get(5)?,
        })
    })
    .optional()
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> rusqlite::Result<Option<T>>;
}

impl<T> OptionalExt<T> for rusqlite::Result<T> {
    fn optional(self) -> rusqlite::Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    fn seed_user(db: &Database, id: &str, email: &str) {
        db.create_user(id, email, "Tester", "hash", true, None, "2026-02-14T00:00:00Z")
            .unwrap();
    }

    fn bloom_row(id: &str, user_id: &str, created_at: &str) -> BloomRow {
        BloomRow {
            id: id.into(),
            user_id: user_id.into(),
            recipient_name: "Alice".into(),
            sender_name: "Bob".into(),
            sender_email: None,
            message: "Hi".into(),
            photo_url: None,
            tree_seed: 0.42,
            tree_growth_stage: 0,
            created_at: created_at.into(),
        }
    }

    #[test]
    fn created_bloom_is_immediately_listable() {
        let db = Database::open_in_memory().unwrap();
        seed_user(&db, "u1", "a@example.com");

        db.insert_bloom(&bloom_row("b1", "u1", "2026-02-14T10:00:00Z"))
            .unwrap();

        let blooms = db.list_blooms("u1").unwrap();
        assert_eq!(blooms.len(), 1);
        assert_eq!(blooms[0].id, "b1");
        assert_eq!(blooms[0].tree_growth_stage, 0);
        assert!(blooms[0].tree_seed >= 0.0 && blooms[0].tree_seed < 1.0);
    }

    #[test]
    fn listing_is_newest_first_and_owner_scoped() {
        let db = Database::open_in_memory().unwrap();
        seed_user(&db, "u1", "a@example.com");
        seed_user(&db, "u2", "b@example.com");

        db.insert_bloom(&bloom_row("old", "u1", "2026-02-13T09:00:00Z"))
            .unwrap();
        db.insert_bloom(&bloom_row("new", "u1", "2026-02-14T09:00:00Z"))
            .unwrap();
        db.insert_bloom(&bloom_row("other", "u2", "2026-02-15T09:00:00Z"))
            .unwrap();

        let blooms = db.list_blooms("u1").unwrap();
        let ids: Vec<&str> = blooms.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["new", "old"]);
    }

    #[test]
    fn missing_composite_key_returns_none() {
        let db = Database::open_in_memory().unwrap();
        seed_user(&db, "u1", "a@example.com");
        db.insert_bloom(&bloom_row("b1", "u1", "2026-02-14T10:00:00Z"))
            .unwrap();

        // Right bloom, wrong owner: still no match.
        assert!(db.get_bloom("u2", "b1").unwrap().is_none());
        assert!(db.get_bloom("u1", "nope").unwrap().is_none());
        assert!(db.get_bloom("u1", "b1").unwrap().is_some());
    }

    #[test]
    fn confirm_token_flips_once() {
        let db = Database::open_in_memory().unwrap();
        db.create_user(
            "u1",
            "a@example.com",
            "Tester",
            "hash",
            false,
            Some("tok-123"),
            "2026-02-14T00:00:00Z",
        )
        .unwrap();

        assert!(db.confirm_user("tok-123").unwrap());
        assert!(!db.confirm_user("tok-123").unwrap());
        assert!(db.get_user_by_email("a@example.com").unwrap().unwrap().confirmed);
    }

    #[test]
    fn drafts_round_trip_without_an_owner() {
        let db = Database::open_in_memory().unwrap();
        db.insert_draft(&DraftRow {
            id: "d1".into(),
            recipient_name: "Alice".into(),
            sender_name: "Bob".into(),
            message: "Hi".into(),
            photo_url: None,
            tree_seed: 0.5,
            created_at: "2026-02-14T10:00:00Z".into(),
        })
        .unwrap();

        let draft = db.get_draft("d1").unwrap().unwrap();
        assert_eq!(draft.recipient_name, "Alice");
        assert!(db.get_draft("missing").unwrap().is_none());
    }
}

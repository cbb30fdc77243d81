//! Local durable storage: the whole `AppState` as one JSON blob under a
//! fixed key, written through on every mutation.

use crate::db::initialize::init_db;
use crate::db::log::{AuditRow, load_audit, ttlog};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::app_state::AppState;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub const STATE_KEY: &str = "clockAppState";

pub struct StateStore {
    pool: DbPool,
}

impl StateStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    /// `None` when nothing was saved yet. A blob that does not parse is fatal.
    pub fn load(&self) -> AppResult<Option<AppState>> {
        let raw: Option<String> = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [STATE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| AppError::CorruptState(e.to_string())),
            None => Ok(None),
        }
    }

    pub fn save(&self, state: &AppState) -> AppResult<()> {
        let json = serde_json::to_string(state)?;

        let mut stmt = self.pool.conn.prepare_cached(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )?;
        stmt.execute(params![STATE_KEY, json, Local::now().to_rfc3339()])?;

        Ok(())
    }

    pub fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.pool.conn, operation, target, message)
    }

    pub fn audit_trail(&self) -> AppResult<Vec<AuditRow>> {
        load_audit(&self.pool.conn)
    }

    #[cfg(test)]
    fn write_raw(&self, json: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, '')",
            [STATE_KEY, json],
        )?;
        Ok(())
    }
}

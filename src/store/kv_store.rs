// src/store/kv_store.rs
//
// Key/value blob store over SQLite
//
// CRITICAL RULES:
// - Writes never fail the caller: a failed write is logged, reported to
//   the optional failure hook, and swallowed. The collection that was
//   mutated in memory stays mutated; only durability is lost.
// - Reads propagate errors normally.
// - One JSON blob per key; no cross-key transactions.

use std::sync::Arc;

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde_json::Value;

use crate::db::{get_connection, ConnectionPool};
use crate::error::{AppError, AppResult};

/// Handed to the failure hook when a write is swallowed
#[derive(Debug, Clone)]
pub struct PersistenceFailure {
    pub key: String,
    pub reason: String,
}

/// Optional observer for swallowed write failures
pub type FailureHook = Arc<dyn Fn(PersistenceFailure) + Send + Sync>;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<Value>>;

    /// Best-effort write; failures degrade to in-memory-only operation
    fn set(&self, key: &str, value: &Value);

    /// Best-effort delete
    fn remove(&self, key: &str);
}

pub struct SqliteKeyValueStore {
    pool: Arc<ConnectionPool>,
    failure_hook: Option<FailureHook>,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            pool,
            failure_hook: None,
        }
    }

    pub fn with_failure_hook(pool: Arc<ConnectionPool>, hook: FailureHook) -> Self {
        Self {
            pool,
            failure_hook: Some(hook),
        }
    }

    fn try_set(&self, key: &str, value: &Value) -> AppResult<()> {
        let serialized = serde_json::to_string(value)?;
        let conn = get_connection(&self.pool)?;
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
               value = excluded.value,
               updated_at = excluded.updated_at",
            params![key, serialized, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn try_remove(&self, key: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn swallow(&self, key: &str, err: AppError) {
        log::error!("persistence failed for key '{}': {}", key, err);
        if let Some(hook) = &self.failure_hook {
            hook(PersistenceFailure {
                key: key.to_string(),
                reason: err.to_string(),
            });
        }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        let conn = get_connection(&self.pool)?;
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &Value) {
        if let Err(err) = self.try_set(key, value) {
            self.swallow(key, err);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = self.try_remove(key) {
            self.swallow(key, err);
        }
    }
}

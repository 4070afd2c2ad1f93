// src/store/mod.rs
//
// Persistent store adapter
//
// Four independent string-keyed JSON blobs; no cross-key transactions.

pub mod kv_store;

pub use kv_store::{FailureHook, KeyValueStore, PersistenceFailure, SqliteKeyValueStore};

/// Store key for the boss collection (base + locally added)
pub const BOSSES_KEY: &str = "bossdex.bosses";

/// Store key for the completed-boss identifier set
pub const COMPLETED_BOSSES_KEY: &str = "bossdex.completed_bosses";

/// Store key for the item collection
pub const ITEMS_KEY: &str = "bossdex.items";

/// Store key for the level/gold cost table
pub const LEVEL_COSTS_KEY: &str = "bossdex.level_costs";

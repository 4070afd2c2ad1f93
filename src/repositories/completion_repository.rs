// src/repositories/completion_repository.rs

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::AppResult;
use crate::store::{KeyValueStore, COMPLETED_BOSSES_KEY};

/// Persists the completed-boss identifier set as a plain JSON array.
/// The set has its own lifecycle: ids may point at bosses that no
/// longer exist.
pub trait CompletionRepository: Send + Sync {
    fn load(&self) -> AppResult<HashSet<u64>>;
    fn save(&self, completed: &HashSet<u64>);
}

pub struct StoreCompletionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoreCompletionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl CompletionRepository for StoreCompletionRepository {
    fn load(&self) -> AppResult<HashSet<u64>> {
        match self.store.get(COMPLETED_BOSSES_KEY)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(HashSet::new()),
        }
    }

    fn save(&self, completed: &HashSet<u64>) {
        match serde_json::to_value(completed) {
            Ok(value) => self.store.set(COMPLETED_BOSSES_KEY, &value),
            Err(err) => log::error!("failed to serialize completion set: {}", err),
        }
    }
}

// src/repositories/boss_repository.rs

use std::sync::Arc;

use crate::domain::boss::Boss;
use crate::error::AppResult;
use crate::store::{KeyValueStore, BOSSES_KEY};

pub trait BossRepository: Send + Sync {
    fn load(&self) -> AppResult<Vec<Boss>>;

    /// Persist the full collection; failures are swallowed by the store
    fn save(&self, bosses: &[Boss]);
}

pub struct StoreBossRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoreBossRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl BossRepository for StoreBossRepository {
    fn load(&self) -> AppResult<Vec<Boss>> {
        match self.store.get(BOSSES_KEY)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, bosses: &[Boss]) {
        match serde_json::to_value(bosses) {
            Ok(value) => self.store.set(BOSSES_KEY, &value),
            Err(err) => log::error!("failed to serialize boss collection: {}", err),
        }
    }
}

// src/repositories/level_cost_repository.rs

use std::sync::Arc;

use crate::domain::level_cost::LevelCost;
use crate::error::AppResult;
use crate::store::{KeyValueStore, LEVEL_COSTS_KEY};

pub trait LevelCostRepository: Send + Sync {
    fn load(&self) -> AppResult<Vec<LevelCost>>;
    fn save(&self, entries: &[LevelCost]);
}

pub struct StoreLevelCostRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoreLevelCostRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl LevelCostRepository for StoreLevelCostRepository {
    fn load(&self) -> AppResult<Vec<LevelCost>> {
        match self.store.get(LEVEL_COSTS_KEY)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[LevelCost]) {
        match serde_json::to_value(entries) {
            Ok(value) => self.store.set(LEVEL_COSTS_KEY, &value),
            Err(err) => log::error!("failed to serialize level cost table: {}", err),
        }
    }
}

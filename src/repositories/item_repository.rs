// src/repositories/item_repository.rs

use std::sync::Arc;

use crate::domain::item::Item;
use crate::error::AppResult;
use crate::store::{KeyValueStore, ITEMS_KEY};

pub trait ItemRepository: Send + Sync {
    fn load(&self) -> AppResult<Vec<Item>>;
    fn save(&self, items: &[Item]);
}

pub struct StoreItemRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoreItemRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl ItemRepository for StoreItemRepository {
    fn load(&self) -> AppResult<Vec<Item>> {
        match self.store.get(ITEMS_KEY)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, items: &[Item]) {
        match serde_json::to_value(items) {
            Ok(value) => self.store.set(ITEMS_KEY, &value),
            Err(err) => log::error!("failed to serialize item collection: {}", err),
        }
    }
}

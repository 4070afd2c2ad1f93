// src/services/level_cost_service.rs
//
// The community-reported level/gold cost table.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::domain::level_cost::{validate_level_cost, LevelCost};
use crate::domain::RecordIdGenerator;
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, LevelCostAdded, NoticePosted, NoticeSeverity};
use crate::repositories::LevelCostRepository;

pub struct LevelCostService {
    entries: RwLock<Vec<LevelCost>>,
    level_cost_repo: Arc<dyn LevelCostRepository>,
    ids: Arc<RecordIdGenerator>,
    event_bus: Arc<EventBus>,
}

impl LevelCostService {
    pub fn new(
        level_cost_repo: Arc<dyn LevelCostRepository>,
        ids: Arc<RecordIdGenerator>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            level_cost_repo,
            ids,
            event_bus,
        }
    }

    /// Install the single wiki-reported entry as the base table
    pub fn install_seed(&self) {
        let mut seed = LevelCost::new(1, 22, 750, Utc::now().date_naive());
        seed.submitted_by = Some("Wiki Data".to_string());
        *self.entries.write().unwrap() = vec![seed];
    }

    /// Merge locally persisted entries; the base table wins id ties
    pub fn hydrate_from_store(&self) -> AppResult<()> {
        let saved = self.level_cost_repo.load()?;
        let mut entries = self.entries.write().unwrap();
        let existing: HashSet<u64> = entries.iter().map(|entry| entry.id).collect();
        entries.extend(saved.into_iter().filter(|entry| !existing.contains(&entry.id)));
        Ok(())
    }

    pub fn add(&self, level: u32, cost: u32, submitted_by: Option<String>) -> AppResult<u64> {
        let mut entry = LevelCost::new(self.ids.next(), level, cost, Utc::now().date_naive());
        entry.submitted_by = submitted_by.filter(|s| !s.trim().is_empty());

        if let Err(violation) = validate_level_cost(&entry) {
            self.event_bus.emit(NoticePosted::new(
                violation.to_string(),
                NoticeSeverity::Error,
            ));
            return Err(AppError::Domain(violation));
        }

        let entry_id = entry.id;
        {
            let mut entries = self.entries.write().unwrap();
            entries.push(entry);
            self.level_cost_repo.save(&entries);
        }

        self.event_bus
            .emit(LevelCostAdded::new(entry_id, level, cost));
        self.event_bus.emit(NoticePosted::new(
            "Level/Gold cost added successfully.".to_string(),
            NoticeSeverity::Success,
        ));

        Ok(entry_id)
    }

    /// The table ordered by level; entries for the same level keep their
    /// insertion order
    pub fn list(&self) -> Vec<LevelCost> {
        let mut entries = self.entries.read().unwrap().clone();
        entries.sort_by_key(|entry| entry.level);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use crate::events::create_event_bus;
    use crate::repositories::StoreLevelCostRepository;
    use crate::store::SqliteKeyValueStore;

    fn service() -> LevelCostService {
        let pool = Arc::new(create_test_pool().unwrap());
        let store = Arc::new(SqliteKeyValueStore::new(pool));
        LevelCostService::new(
            Arc::new(StoreLevelCostRepository::new(store)),
            Arc::new(RecordIdGenerator::new()),
            Arc::new(create_event_bus()),
        )
    }

    #[test]
    fn test_seed_has_the_wiki_entry() {
        let service = service();
        service.install_seed();

        let entries = service.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, 22);
        assert_eq!(entries[0].cost, 750);
    }

    #[test]
    fn test_list_orders_by_level() {
        let service = service();
        service.add(40, 2000, None).unwrap();
        service.add(5, 100, None).unwrap();
        service.add(22, 750, None).unwrap();

        let levels: Vec<u32> = service.list().iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![5, 22, 40]);
    }

    #[test]
    fn test_add_rejects_zero_values() {
        let service = service();
        assert!(service.add(0, 500, None).is_err());
        assert!(service.add(10, 0, None).is_err());
        assert!(service.list().is_empty());
    }
}

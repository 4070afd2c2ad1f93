// src/services/completion_service.rs
//
// Tracks which bosses the user has finished.
//
// The identifier set has its own lifecycle: it is persisted under its own
// key and may reference bosses that no longer exist. The query pipeline
// consults the set but never mutates it.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::domain::CompletionStats;
use crate::error::AppResult;
use crate::events::{CompletionToggled, CompletionsCleared, EventBus, NoticePosted, NoticeSeverity};
use crate::repositories::CompletionRepository;

pub struct CompletionService {
    completed: RwLock<HashSet<u64>>,
    completion_repo: Arc<dyn CompletionRepository>,
    event_bus: Arc<EventBus>,
}

impl CompletionService {
    pub fn new(completion_repo: Arc<dyn CompletionRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            completed: RwLock::new(HashSet::new()),
            completion_repo,
            event_bus,
        }
    }

    pub fn hydrate_from_store(&self) -> AppResult<()> {
        let saved = self.completion_repo.load()?;
        *self.completed.write().unwrap() = saved;
        Ok(())
    }

    /// Flip the completion mark for a boss and persist the full set.
    /// Returns the new membership state for caller-side messaging.
    pub fn toggle(&self, boss_id: u64) -> bool {
        let now_completed = {
            let mut completed = self.completed.write().unwrap();
            let now_completed = if completed.contains(&boss_id) {
                completed.remove(&boss_id);
                false
            } else {
                completed.insert(boss_id);
                true
            };
            self.completion_repo.save(&completed);
            now_completed
        };

        self.event_bus
            .emit(CompletionToggled::new(boss_id, now_completed));
        now_completed
    }

    /// Empty the set unconditionally; asking the user first is the
    /// caller's concern.
    pub fn clear(&self) {
        {
            let mut completed = self.completed.write().unwrap();
            completed.clear();
            self.completion_repo.save(&completed);
        }

        self.event_bus.emit(CompletionsCleared::new());
        self.event_bus.emit(NoticePosted::new(
            "All completion marks cleared.".to_string(),
            NoticeSeverity::Success,
        ));
    }

    pub fn is_completed(&self, boss_id: u64) -> bool {
        self.completed.read().unwrap().contains(&boss_id)
    }

    /// Snapshot for the query pipeline
    pub fn snapshot(&self) -> HashSet<u64> {
        self.completed.read().unwrap().clone()
    }

    /// Progress counters over a catalog of `total` records
    pub fn stats(&self, total: usize) -> CompletionStats {
        CompletionStats::derive(total, self.completed.read().unwrap().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use crate::events::create_event_bus;
    use crate::repositories::StoreCompletionRepository;
    use crate::store::SqliteKeyValueStore;

    fn service() -> (CompletionService, Arc<dyn CompletionRepository>) {
        let pool = Arc::new(create_test_pool().unwrap());
        let store = Arc::new(SqliteKeyValueStore::new(pool));
        let repo: Arc<dyn CompletionRepository> =
            Arc::new(StoreCompletionRepository::new(store));
        let service = CompletionService::new(Arc::clone(&repo), Arc::new(create_event_bus()));
        (service, repo)
    }

    #[test]
    fn test_toggle_reports_new_membership() {
        let (service, _repo) = service();

        assert!(service.toggle(7));
        assert!(service.is_completed(7));

        assert!(!service.toggle(7));
        assert!(!service.is_completed(7));
    }

    #[test]
    fn test_toggle_twice_is_an_involution() {
        let (service, _repo) = service();
        service.toggle(1);
        let before = service.snapshot();

        service.toggle(9);
        service.toggle(9);

        assert_eq!(service.snapshot(), before);
    }

    #[test]
    fn test_toggle_persists_the_set() {
        let (service, repo) = service();
        service.toggle(3);
        service.toggle(5);

        let fresh = CompletionService::new(repo, Arc::new(create_event_bus()));
        fresh.hydrate_from_store().unwrap();
        assert!(fresh.is_completed(3));
        assert!(fresh.is_completed(5));
    }

    #[test]
    fn test_clear_empties_and_persists() {
        let (service, repo) = service();
        service.toggle(3);

        service.clear();
        assert!(service.snapshot().is_empty());

        let fresh = CompletionService::new(repo, Arc::new(create_event_bus()));
        fresh.hydrate_from_store().unwrap();
        assert!(fresh.snapshot().is_empty());
    }

    #[test]
    fn test_stats_counts_and_guards_zero_total() {
        let (service, _repo) = service();
        for id in [1, 2, 3] {
            service.toggle(id);
        }

        let stats = service.stats(10);
        assert_eq!(stats.total, 10);
        assert_eq!(stats.completed, 3);
        assert_eq!(stats.remaining, 7);
        assert_eq!(stats.percentage, "30.0");

        let empty = CompletionService::new(
            Arc::new(StoreCompletionRepository::new(Arc::new(
                SqliteKeyValueStore::new(Arc::new(create_test_pool().unwrap())),
            ))),
            Arc::new(create_event_bus()),
        );
        assert_eq!(empty.stats(0).percentage, "0.0");
    }
}

// src/application/state.rs
//
// Composition root. Wires the pool, store, repositories and services
// exactly once; the presentation layer holds an AppState and subscribes
// to the event bus for change notifications.

use std::path::PathBuf;
use std::sync::Arc;

use crate::db::{create_connection_pool, default_database_path, get_connection, initialize_database};
use crate::domain::RecordIdGenerator;
use crate::error::AppResult;
use crate::events::{EventBus, PersistenceFailed};
use crate::infrastructure::DatasetSource;
use crate::integrations::tracker::TrackerClient;
use crate::repositories::{
    StoreBossRepository, StoreCompletionRepository, StoreItemRepository, StoreLevelCostRepository,
};
use crate::services::{
    BossService, CompletionService, ItemService, LevelCostService, StatisticsService,
    SubmissionService,
};
use crate::store::SqliteKeyValueStore;

/// Static configuration for one application instance
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Store file; `None` uses the platform data directory
    pub database_path: Option<PathBuf>,
    /// Tracker repository receiving community submissions, "owner/repo"
    pub tracker_repo: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            tracker_repo: "ArkDouglas/swordsupperfilter".to_string(),
        }
    }
}

/// Application state shared with the presentation layer.
/// All fields are Arc-wrapped for cheap sharing.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub boss_service: Arc<BossService>,
    pub item_service: Arc<ItemService>,
    pub level_cost_service: Arc<LevelCostService>,
    pub completion_service: Arc<CompletionService>,
    pub statistics_service: Arc<StatisticsService>,
    pub submission_service: Arc<SubmissionService>,
}

/// Wire infrastructure → repositories → services → event handlers
pub fn bootstrap(config: AppConfig, dataset_source: Arc<dyn DatasetSource>) -> AppResult<AppState> {
    // 1. INFRASTRUCTURE
    let event_bus = Arc::new(EventBus::new());
    let db_path = match config.database_path {
        Some(path) => path,
        None => default_database_path()?,
    };
    let pool = Arc::new(create_connection_pool(&db_path)?);
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
    }

    // Swallowed store failures surface as events, never as errors
    let hook_bus = Arc::clone(&event_bus);
    let store = Arc::new(SqliteKeyValueStore::with_failure_hook(
        Arc::clone(&pool),
        Arc::new(move |failure| {
            hook_bus.emit(PersistenceFailed::new(failure.key, failure.reason));
        }),
    ));

    let ids = Arc::new(RecordIdGenerator::new());
    let tracker = Arc::new(TrackerClient::new(&config.tracker_repo)?);

    // 2. REPOSITORIES
    let boss_repo = Arc::new(StoreBossRepository::new(store.clone()));
    let item_repo = Arc::new(StoreItemRepository::new(store.clone()));
    let level_cost_repo = Arc::new(StoreLevelCostRepository::new(store.clone()));
    let completion_repo = Arc::new(StoreCompletionRepository::new(store.clone()));

    // 3. SERVICES
    let boss_service = Arc::new(BossService::new(
        boss_repo,
        dataset_source,
        ids.clone(),
        event_bus.clone(),
    ));
    let item_service = Arc::new(ItemService::new(item_repo, ids.clone(), event_bus.clone()));
    let level_cost_service = Arc::new(LevelCostService::new(
        level_cost_repo,
        ids.clone(),
        event_bus.clone(),
    ));
    let completion_service = Arc::new(CompletionService::new(completion_repo, event_bus.clone()));
    let statistics_service = Arc::new(StatisticsService::new(event_bus.clone()));
    let submission_service = Arc::new(SubmissionService::new(tracker, event_bus.clone()));

    // 4. EVENT HANDLER REGISTRATION
    statistics_service.register_event_handlers();

    Ok(AppState {
        event_bus,
        boss_service,
        item_service,
        level_cost_service,
        completion_service,
        statistics_service,
        submission_service,
    })
}

/// The startup sequence, in the original load order: fetch the static
/// dataset, then hydrate every collection from the local store.
///
/// Hydration errors are logged and skipped; a corrupt blob must not take
/// down the session.
pub fn startup(state: &AppState) {
    state.boss_service.load();
    if let Err(err) = state.boss_service.hydrate_from_store() {
        log::warn!("skipping boss hydration: {}", err);
    }
    if let Err(err) = state.completion_service.hydrate_from_store() {
        log::warn!("skipping completion hydration: {}", err);
    }

    state.item_service.install_seed();
    if let Err(err) = state.item_service.hydrate_from_store() {
        log::warn!("skipping item hydration: {}", err);
    }

    state.level_cost_service.install_seed();
    if let Err(err) = state.level_cost_service.hydrate_from_store() {
        log::warn!("skipping level cost hydration: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::boss::{Boss, Difficulty, InstanceKind, LevelBucket};
    use crate::infrastructure::{BossDataset, MockDatasetSource};
    use crate::services::{filter_bosses, sort_bosses, BossFilter, SortDirection, SortKey};
    use chrono::NaiveDate;

    fn seeded_source() -> MockDatasetSource {
        let mut source = MockDatasetSource::new();
        source.expect_fetch().returning(|| {
            let boss = |id: u64, name: &str, level: &str| {
                Boss::new(
                    id,
                    name.to_string(),
                    LevelBucket::new(level),
                    Difficulty::Stars(2),
                    InstanceKind::Boss,
                    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                )
            };
            Ok(BossDataset {
                bosses: vec![
                    boss(1, "Second Tier", "6-20"),
                    boss(2, "First Tier", "1-5"),
                    boss(3, "Seventh Tier", "101-120"),
                ],
            })
        });
        source
    }

    fn test_state() -> AppState {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            database_path: Some(dir.path().join("bossdex.db")),
            ..Default::default()
        };
        bootstrap(config, Arc::new(seeded_source())).unwrap()
    }

    #[test]
    fn test_bootstrap_and_startup_populate_collections() {
        let state = test_state();
        startup(&state);

        assert_eq!(state.boss_service.list().len(), 3);
        assert_eq!(state.item_service.list().len(), 4);
        assert_eq!(state.level_cost_service.list().len(), 1);
        assert!(state.completion_service.snapshot().is_empty());
    }

    #[test]
    fn test_full_pipeline_toggle_pushes_completed_last() {
        let state = test_state();
        startup(&state);

        let catalog = state.boss_service.list();
        let completed = state.completion_service.snapshot();
        let visible = filter_bosses(&catalog, &BossFilter::default(), &completed);
        let sorted = sort_bosses(visible, SortKey::Level, SortDirection::Ascending, &completed);
        let order: Vec<&str> = sorted.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(order, vec!["First Tier", "Second Tier", "Seventh Tier"]);

        // Mark the lowest-tier boss done and recompute from scratch
        assert!(state.completion_service.toggle(2));
        let completed = state.completion_service.snapshot();
        let visible = filter_bosses(&catalog, &BossFilter::default(), &completed);
        let sorted = sort_bosses(visible, SortKey::Level, SortDirection::Ascending, &completed);
        let order: Vec<&str> = sorted.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(order, vec!["Second Tier", "Seventh Tier", "First Tier"]);
    }

    #[test]
    fn test_stats_after_toggle() {
        let state = test_state();
        startup(&state);

        state.completion_service.toggle(1);
        let stats = state
            .completion_service
            .stats(state.boss_service.list().len());
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.remaining, 2);
        assert_eq!(stats.percentage, "33.3");
    }
}

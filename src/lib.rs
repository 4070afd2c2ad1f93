// src/lib.rs
// Bossdex - Local-first boss compendium and loot catalog for Sword and Supper
//
// Architecture:
// - Domain-centric: entities and invariants live in domains
// - Event-driven: services coordinate through a synchronous bus
// - Explicit: no implicit behavior, no magic
// - Local-first: the user's store is the only persistence
// - Presentation is external: it holds an AppState and renders projections

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod repositories;
pub mod services;
pub mod store;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    builtin_abilities,
    validate_boss,
    validate_item,
    validate_level_cost,
    // Ability
    Ability,
    AbilityCategory,
    // Boss
    Boss,
    // Statistics
    CatalogStats,
    CompletionStats,
    Difficulty,
    InstanceKind,
    // Item
    Item,
    ItemProperty,
    ItemType,
    LevelBucket,
    // Level cost
    LevelCost,
    Rarity,
    // Identifier generation
    RecordIdGenerator,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    BossAdded,
    BossDeleted,
    CatalogLoadFailed,
    CatalogLoaded,
    CompletionToggled,
    CompletionsCleared,
    DomainEvent,
    EventBus,
    EventLogEntry,
    ItemAdded,
    LevelCostAdded,
    NoticePosted,
    NoticeSeverity,
    PersistenceFailed,
    StatsRefreshed,
    SubmissionDispatched,
    SubmissionFellBack,
    SubmissionKind,
    NOTICE_DISMISS_SECS,
};

// ============================================================================
// PUBLIC API - Database & Store
// ============================================================================

pub use db::{create_connection_pool, default_database_path, initialize_database, ConnectionPool};

pub use store::{
    FailureHook, KeyValueStore, PersistenceFailure, SqliteKeyValueStore, BOSSES_KEY,
    COMPLETED_BOSSES_KEY, ITEMS_KEY, LEVEL_COSTS_KEY,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    BossRepository, CompletionRepository, ItemRepository, LevelCostRepository,
    StoreBossRepository, StoreCompletionRepository, StoreItemRepository,
    StoreLevelCostRepository,
};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{BossDataset, DatasetSource, HttpDatasetSource, JsonFileDatasetSource};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    filter_abilities,
    filter_bosses,
    filter_items,
    sort_bosses,
    // Boss catalog
    BossFilter,
    BossService,
    CompletionFilter,
    // Completion tracking
    CompletionService,
    CreateBossRequest,
    // Items
    CreateItemRequest,
    ItemFilter,
    ItemService,
    // Level costs
    LevelCostService,
    MapModifier,
    SortDirection,
    // Query pipeline
    SortKey,
    // Statistics
    StatisticsService,
    // Outbound submission
    SubmissionOutcome,
    SubmissionService,
};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{IssueDraft, TrackerClient};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{bootstrap, project_bosses, startup, AppConfig, AppState, BossView};

// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod boss_service;
pub mod catalog_query;
pub mod completion_service;
pub mod item_service;
pub mod level_cost_service;
pub mod statistics_service;
pub mod submission_service;


// Re-export all services and their types
pub use boss_service::{BossService, CreateBossRequest};

pub use item_service::{CreateItemRequest, ItemService};

pub use level_cost_service::LevelCostService;

pub use completion_service::CompletionService;

pub use statistics_service::StatisticsService;

pub use submission_service::{SubmissionOutcome, SubmissionService};

pub use catalog_query::{
    filter_abilities, filter_bosses, filter_items, sort_bosses, BossFilter, CompletionFilter,
    ItemFilter, MapModifier, SortDirection, SortKey,
};

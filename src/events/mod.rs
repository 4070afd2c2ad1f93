// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Boss catalog
    BossAdded,
    BossDeleted,
    // Startup
    CatalogLoadFailed,
    CatalogLoaded,
    // Completion tracking
    CompletionToggled,
    CompletionsCleared,
    // Items and costs
    ItemAdded,
    LevelCostAdded,
    // Notices (the user-facing message channel)
    NoticePosted,
    NoticeSeverity,
    // Durability observability
    PersistenceFailed,
    // Statistics
    StatsRefreshed,
    // Outbound submission
    SubmissionDispatched,
    SubmissionFellBack,
    SubmissionKind,
    NOTICE_DISMISS_SECS,
};

pub use bus::{EventBus, EventLogEntry};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}

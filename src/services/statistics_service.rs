// src/services/statistics_service.rs
//
// Derived counters for the catalog header. Statistics are never a source
// of truth; they are recomputed from the collections on demand.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::boss::Boss;
use crate::domain::CatalogStats;
use crate::events::{
    BossAdded, BossDeleted, CompletionToggled, CompletionsCleared, EventBus, StatsRefreshed,
};

pub struct StatisticsService {
    event_bus: Arc<EventBus>,
}

impl StatisticsService {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self { event_bus }
    }

    pub fn catalog_stats(&self, bosses: &[Boss], completed: &HashSet<u64>) -> CatalogStats {
        CatalogStats::derive(bosses, completed)
    }

    /// Re-announce the counters whenever the catalog or the completion
    /// set changes, so presentation can refresh without polling.
    pub fn register_event_handlers(&self) {
        let bus = Arc::clone(&self.event_bus);
        self.event_bus.subscribe::<BossAdded, _>(move |_| {
            bus.emit(StatsRefreshed::new());
        });

        let bus = Arc::clone(&self.event_bus);
        self.event_bus.subscribe::<BossDeleted, _>(move |_| {
            bus.emit(StatsRefreshed::new());
        });

        let bus = Arc::clone(&self.event_bus);
        self.event_bus.subscribe::<CompletionToggled, _>(move |_| {
            bus.emit(StatsRefreshed::new());
        });

        let bus = Arc::clone(&self.event_bus);
        self.event_bus.subscribe::<CompletionsCleared, _>(move |_| {
            bus.emit(StatsRefreshed::new());
        });
    }
}

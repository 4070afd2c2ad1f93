// src/services/boss_service.rs
//
// Owns the canonical in-memory boss collection. The query pipeline reads
// snapshots from here; mutations persist the full collection and emit
// events.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::domain::boss::{validate_boss, Boss, Difficulty, InstanceKind, LevelBucket};
use crate::domain::RecordIdGenerator;
use crate::error::{AppError, AppResult};
use crate::events::{
    BossAdded, BossDeleted, CatalogLoadFailed, CatalogLoaded, EventBus, NoticePosted,
    NoticeSeverity,
};
use crate::infrastructure::DatasetSource;
use crate::repositories::BossRepository;

#[derive(Debug, Clone)]
pub struct CreateBossRequest {
    pub name: String,
    pub level: LevelBucket,
    pub difficulty: Difficulty,
    pub instance_type: InstanceKind,
    pub location: Option<String>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    pub submitted_by: Option<String>,
    pub has_ruined_path: bool,
    pub has_increased: bool,
}

pub struct BossService {
    bosses: RwLock<Vec<Boss>>,
    boss_repo: Arc<dyn BossRepository>,
    dataset_source: Arc<dyn DatasetSource>,
    ids: Arc<RecordIdGenerator>,
    event_bus: Arc<EventBus>,
}

impl BossService {
    pub fn new(
        boss_repo: Arc<dyn BossRepository>,
        dataset_source: Arc<dyn DatasetSource>,
        ids: Arc<RecordIdGenerator>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            bosses: RwLock::new(Vec::new()),
            boss_repo,
            dataset_source,
            ids,
            event_bus,
        }
    }

    /// Startup fetch of the static dataset.
    ///
    /// A failed fetch leaves the catalog empty and is reported through the
    /// notice channel; the session stays usable with zero records.
    pub fn load(&self) {
        match self.dataset_source.fetch() {
            Ok(dataset) => {
                let count = dataset.bosses.len();
                *self.bosses.write().unwrap() = dataset.bosses;
                self.event_bus.emit(CatalogLoaded::new(count));
            }
            Err(err) => {
                log::error!("failed to load boss dataset: {}", err);
                self.event_bus.emit(CatalogLoadFailed::new(err.to_string()));
                self.event_bus.emit(NoticePosted::new(
                    "Error loading boss data. Please reload.".to_string(),
                    NoticeSeverity::Error,
                ));
            }
        }
    }

    /// Merge locally persisted records into the collection.
    /// The base collection wins identifier ties.
    pub fn hydrate_from_store(&self) -> AppResult<()> {
        let saved = self.boss_repo.load()?;
        let mut bosses = self.bosses.write().unwrap();
        let existing: HashSet<u64> = bosses.iter().map(|boss| boss.id).collect();
        bosses.extend(saved.into_iter().filter(|boss| !existing.contains(&boss.id)));
        Ok(())
    }

    /// Validate and append a new entry, then persist the full collection.
    /// On a validation failure nothing is mutated.
    pub fn add(&self, request: CreateBossRequest) -> AppResult<u64> {
        let mut boss = Boss::new(
            self.ids.next(),
            request.name,
            request.level,
            request.difficulty,
            request.instance_type,
            Utc::now().date_naive(),
        );
        boss.location = request.location.filter(|s| !s.trim().is_empty());
        boss.description = request.description.filter(|s| !s.trim().is_empty());
        boss.external_link = request.external_link.filter(|s| !s.trim().is_empty());
        boss.submitted_by = request.submitted_by.filter(|s| !s.trim().is_empty());
        boss.has_ruined_path = request.has_ruined_path;
        boss.has_increased = request.has_increased;

        if let Err(violation) = validate_boss(&boss) {
            self.event_bus.emit(NoticePosted::new(
                violation.to_string(),
                NoticeSeverity::Error,
            ));
            return Err(AppError::Domain(violation));
        }

        let boss_id = boss.id;
        {
            let mut bosses = self.bosses.write().unwrap();
            bosses.push(boss.clone());
            self.boss_repo.save(&bosses);
        }

        self.event_bus.emit(BossAdded::new(boss_id, boss.name));
        self.event_bus.emit(NoticePosted::new(
            "Instance added locally. Submitting to the community database...".to_string(),
            NoticeSeverity::Success,
        ));

        Ok(boss_id)
    }

    pub fn find(&self, id: u64) -> Option<Boss> {
        self.bosses
            .read()
            .unwrap()
            .iter()
            .find(|boss| boss.id == id)
            .cloned()
    }

    /// The full collection in original order
    pub fn list(&self) -> Vec<Boss> {
        self.bosses.read().unwrap().clone()
    }

    /// Remove an entry by identifier and persist
    pub fn delete(&self, id: u64) -> AppResult<()> {
        {
            let mut bosses = self.bosses.write().unwrap();
            let before = bosses.len();
            bosses.retain(|boss| boss.id != id);
            if bosses.len() == before {
                return Err(AppError::NotFound);
            }
            self.boss_repo.save(&bosses);
        }

        self.event_bus.emit(BossDeleted::new(id));
        Ok(())
    }
}

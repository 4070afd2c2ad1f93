// src/services/submission_service.rs
//
// Fire-and-forget forwarding of new records to the community tracker.
//
// The local add has already committed by the time this runs; nothing here
// blocks it or rolls it back. A failed dispatch switches to the manual
// issue path and the host is pointed at the prefilled page.

use std::sync::Arc;

use crate::domain::boss::Boss;
use crate::domain::item::Item;
use crate::error::AppResult;
use crate::events::{
    EventBus, NoticePosted, NoticeSeverity, SubmissionDispatched, SubmissionFellBack,
    SubmissionKind,
};
use crate::integrations::tracker::{IssueDraft, TrackerClient};

#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    /// The automation endpoint accepted the record
    Dispatched,
    /// Manual path: the host should open the draft's issue page
    FellBack(IssueDraft),
}

pub struct SubmissionService {
    tracker: Arc<TrackerClient>,
    event_bus: Arc<EventBus>,
}

impl SubmissionService {
    pub fn new(tracker: Arc<TrackerClient>, event_bus: Arc<EventBus>) -> Self {
        Self { tracker, event_bus }
    }

    pub fn submit_boss(&self, boss: &Boss) -> AppResult<SubmissionOutcome> {
        let record = serde_json::to_value(boss)?;
        match self.tracker.dispatch("add-instance", &record) {
            Ok(()) => Ok(self.dispatched(SubmissionKind::Instance, &boss.name)),
            Err(err) => {
                log::warn!("instance dispatch failed, falling back to issue: {}", err);
                let draft = self.tracker.boss_issue_draft(boss)?;
                Ok(self.fell_back(SubmissionKind::Instance, &boss.name, draft))
            }
        }
    }

    pub fn submit_item(&self, item: &Item) -> AppResult<SubmissionOutcome> {
        let record = serde_json::to_value(item)?;
        match self.tracker.dispatch("add-item", &record) {
            Ok(()) => Ok(self.dispatched(SubmissionKind::Item, &item.name)),
            Err(err) => {
                log::warn!("item dispatch failed, falling back to issue: {}", err);
                let draft = self.tracker.item_issue_draft(item)?;
                Ok(self.fell_back(SubmissionKind::Item, &item.name, draft))
            }
        }
    }

    fn dispatched(&self, kind: SubmissionKind, name: &str) -> SubmissionOutcome {
        self.event_bus
            .emit(SubmissionDispatched::new(kind, name.to_string()));
        self.event_bus.emit(NoticePosted::new(
            format!("{} submitted to the community database.", capitalize(kind)),
            NoticeSeverity::Success,
        ));
        SubmissionOutcome::Dispatched
    }

    fn fell_back(&self, kind: SubmissionKind, name: &str, draft: IssueDraft) -> SubmissionOutcome {
        self.event_bus.emit(SubmissionFellBack::new(
            kind,
            name.to_string(),
            draft.url.clone(),
        ));
        self.event_bus.emit(NoticePosted::new(
            format!(
                "{} saved locally. Please finish the submission on the issue page that opened.",
                capitalize(kind)
            ),
            NoticeSeverity::Info,
        ));
        SubmissionOutcome::FellBack(draft)
    }
}

fn capitalize(kind: SubmissionKind) -> &'static str {
    match kind {
        SubmissionKind::Instance => "Instance",
        SubmissionKind::Item => "Item",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::boss::{Difficulty, InstanceKind, LevelBucket};
    use crate::events::create_event_bus;
    use chrono::NaiveDate;

    #[test]
    fn test_failed_dispatch_falls_back_to_issue_draft() {
        // Port 9 (discard) refuses connections immediately
        let tracker = TrackerClient::with_endpoints(
            "http://127.0.0.1:9/dispatches",
            "https://github.com/ArkDouglas/swordsupperfilter/issues/new",
        )
        .unwrap();
        let bus = Arc::new(create_event_bus());
        let service = SubmissionService::new(Arc::new(tracker), Arc::clone(&bus));

        let boss = Boss::new(
            1,
            "Marsh Witch".to_string(),
            LevelBucket::new("6-20"),
            Difficulty::Stars(2),
            InstanceKind::Boss,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        );

        let outcome = service.submit_boss(&boss).unwrap();
        match outcome {
            SubmissionOutcome::FellBack(draft) => {
                assert!(draft.url.contains("issues/new"));
                assert_eq!(draft.title, "Add new instance: Marsh Witch");
            }
            SubmissionOutcome::Dispatched => panic!("dispatch cannot succeed in tests"),
        }

        let log = bus.event_log();
        assert!(log.iter().any(|e| e.event_type == "SubmissionFellBack"));
        assert!(log.iter().any(|e| e.event_type == "NoticePosted"));
    }
}

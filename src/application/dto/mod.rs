// src/application/dto/mod.rs
//
// View-facing projections. The presentation layer renders these rows;
// nothing here mutates domain state.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::boss::Boss;

/// One row of the boss table as the host renders it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BossView {
    pub id: u64,
    pub name: String,
    pub level: String,
    /// Star count, absent for boss-rush entries
    pub stars: Option<u8>,
    pub kind: String,
    pub location: Option<String>,
    pub external_link: Option<String>,
    pub submitted_by: Option<String>,
    pub has_ruined_path: bool,
    pub has_increased: bool,
    pub completed: bool,
}

impl BossView {
    pub fn project(boss: &Boss, completed: &HashSet<u64>) -> Self {
        Self {
            id: boss.id,
            name: boss.name.clone(),
            level: boss.level.label().to_string(),
            stars: boss.difficulty.stars(),
            kind: boss.kind_label().to_string(),
            location: boss.location.clone(),
            external_link: boss.external_link.clone(),
            submitted_by: boss.submitted_by.clone(),
            has_ruined_path: boss.has_ruined_path,
            has_increased: boss.has_increased,
            completed: completed.contains(&boss.id),
        }
    }
}

/// Project an ordered sequence for rendering; the order is preserved
pub fn project_bosses(bosses: &[Boss], completed: &HashSet<u64>) -> Vec<BossView> {
    bosses
        .iter()
        .map(|boss| BossView::project(boss, completed))
        .collect()
}

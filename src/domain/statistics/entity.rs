use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::boss::{Boss, Difficulty};

/// Completion progress over the boss catalog
/// Derived data, never a source of truth; recalculated on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    /// One-decimal percentage; "0.0" when the catalog is empty
    pub percentage: String,
}

impl CompletionStats {
    pub fn derive(total: usize, completed: usize) -> Self {
        let percentage = if total > 0 {
            format!("{:.1}", completed as f64 / total as f64 * 100.0)
        } else {
            "0.0".to_string()
        };
        Self {
            total,
            completed,
            remaining: total.saturating_sub(completed),
            percentage,
        }
    }
}

/// The header counters shown above the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_bosses: usize,
    pub boss_rushes: usize,
    /// Mean star rating to one decimal; boss-rush entries carry no star
    /// rating and are excluded. "0.0" when nothing is star-rated.
    pub average_difficulty: String,
    /// Share of catalog entries marked completed, one decimal
    pub completion_rate: String,
}

impl CatalogStats {
    pub fn derive(bosses: &[Boss], completed: &HashSet<u64>) -> Self {
        let total_bosses = bosses.len();
        let boss_rushes = bosses
            .iter()
            .filter(|boss| boss.difficulty == Difficulty::BossRush)
            .count();

        let stars: Vec<u8> = bosses
            .iter()
            .filter_map(|boss| boss.difficulty.stars())
            .collect();
        let average_difficulty = if stars.is_empty() {
            "0.0".to_string()
        } else {
            let sum: u32 = stars.iter().map(|s| u32::from(*s)).sum();
            format!("{:.1}", f64::from(sum) / stars.len() as f64)
        };

        let completed_count = bosses
            .iter()
            .filter(|boss| completed.contains(&boss.id))
            .count();
        let completion_rate = if total_bosses > 0 {
            format!("{:.1}", completed_count as f64 / total_bosses as f64 * 100.0)
        } else {
            "0.0".to_string()
        };

        Self {
            total_bosses,
            boss_rushes,
            average_difficulty,
            completion_rate,
        }
    }
}

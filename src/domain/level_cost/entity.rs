use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gold cost of one character level, as reported by the community
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelCost {
    pub id: u64,

    pub level: u32,

    /// Gold required to reach the level
    pub cost: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,

    pub date_added: NaiveDate,
}

impl LevelCost {
    pub fn new(id: u64, level: u32, cost: u32, date_added: NaiveDate) -> Self {
        Self {
            id,
            level,
            cost,
            submitted_by: None,
            date_added,
        }
    }
}

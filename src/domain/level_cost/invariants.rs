use super::entity::LevelCost;
use crate::domain::{DomainError, DomainResult};

/// Level and cost are mandatory and strictly positive
pub fn validate_level_cost(entry: &LevelCost) -> DomainResult<()> {
    if entry.level == 0 {
        return Err(DomainError::InvariantViolation(
            "Level must be at least 1".to_string(),
        ));
    }
    if entry.cost == 0 {
        return Err(DomainError::InvariantViolation(
            "Gold cost must be at least 1".to_string(),
        ));
    }
    Ok(())
}

use super::entity::{Boss, Difficulty};
use crate::domain::{DomainError, DomainResult};

/// Validates all Boss invariants
/// These are the absolute rules that must hold for a Boss to be valid
pub fn validate_boss(boss: &Boss) -> DomainResult<()> {
    validate_name(&boss.name)?;
    validate_level(boss)?;
    validate_difficulty(boss)?;
    Ok(())
}

/// Name cannot be empty
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Boss name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// The level tier label cannot be empty
fn validate_level(boss: &Boss) -> DomainResult<()> {
    if boss.level.label().trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Boss level tier cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// A star rating needs at least one star; boss rush has no star count
fn validate_difficulty(boss: &Boss) -> DomainResult<()> {
    if boss.difficulty == Difficulty::Stars(0) {
        return Err(DomainError::InvariantViolation(
            "Difficulty must be at least one star".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold for the Boss domain:
///
/// 1. Identifier is unique within the collection and immutable
/// 2. Name, level, difficulty and instance type are mandatory
/// 3. An unrecognized level tier is allowed but ranks below every known tier
/// 4. Map modifier flags default to false when absent from the dataset
/// 5. Completion state lives outside the entity (see CompletionService)

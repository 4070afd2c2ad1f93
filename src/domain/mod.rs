// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod ability;
pub mod boss;
pub mod id;
pub mod item;
pub mod level_cost;
pub mod statistics;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Boss Domain
pub use boss::{validate_boss, Boss, Difficulty, InstanceKind, LevelBucket};

// Item Domain
pub use item::{validate_item, Item, ItemProperty, ItemType, Rarity};

// Level Cost Domain
pub use level_cost::{validate_level_cost, LevelCost};

// Ability Domain (static reference data)
pub use ability::{builtin_abilities, Ability, AbilityCategory};

// Statistics Domain (derived data)
pub use statistics::{CatalogStats, CompletionStats};

// Identifier generation
pub use id::RecordIdGenerator;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

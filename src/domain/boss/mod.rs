pub mod entity;
pub mod invariants;

pub use entity::{Boss, Difficulty, InstanceKind, LevelBucket};
pub use invariants::validate_boss;

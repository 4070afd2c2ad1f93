pub mod entity;
pub mod invariants;

pub use entity::LevelCost;
pub use invariants::validate_level_cost;

pub mod entity;
pub mod invariants;

pub use entity::{Item, ItemProperty, ItemType, Rarity};
pub use invariants::validate_item;

pub mod entity;

pub use entity::{builtin_abilities, Ability, AbilityCategory};

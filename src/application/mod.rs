// src/application/mod.rs
//
// Application layer: composition root, startup sequence, and the view
// DTOs handed to the presentation boundary.

pub mod dto;
pub mod state;

pub use dto::{project_bosses, BossView};
pub use state::{bootstrap, startup, AppConfig, AppState};

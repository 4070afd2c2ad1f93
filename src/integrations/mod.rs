// src/integrations/mod.rs
//
// External integrations
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never creates or modifies domain entities directly
// - Returns DTOs and outcomes that services can map

pub mod tracker;

pub use tracker::{IssueDraft, TrackerClient};

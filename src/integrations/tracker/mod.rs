pub mod client;

pub use client::{IssueDraft, TrackerClient};

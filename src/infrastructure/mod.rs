// src/infrastructure/mod.rs
//
// Infrastructure: the static dataset boundary

pub mod dataset_source;

pub use dataset_source::{BossDataset, DatasetSource, HttpDatasetSource, JsonFileDatasetSource};

#[cfg(test)]
pub use dataset_source::MockDatasetSource;

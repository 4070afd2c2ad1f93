// src/infrastructure/dataset_source.rs
//
// Static dataset source
//
// The base catalog ships as a JSON document with a `bosses` array.
// It is read-only and fetched exactly once, at startup. A failed fetch
// is recovered by the caller (empty catalog, error notice); there is no
// retry and no cancellation.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::boss::Boss;
use crate::error::{AppError, AppResult};

/// The static dataset document
#[derive(Debug, Clone, Deserialize)]
pub struct BossDataset {
    pub bosses: Vec<Boss>,
}

#[cfg_attr(test, mockall::automock)]
pub trait DatasetSource: Send + Sync {
    fn fetch(&self) -> AppResult<BossDataset>;
}

/// Reads the dataset from a local file
pub struct JsonFileDatasetSource {
    path: PathBuf,
}

impl JsonFileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for JsonFileDatasetSource {
    fn fetch(&self) -> AppResult<BossDataset> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Fetches the dataset from a hosted URL with one blocking GET
pub struct HttpDatasetSource {
    url: String,
    http_client: reqwest::blocking::Client,
}

impl HttpDatasetSource {
    pub fn new(url: impl Into<String>) -> AppResult<Self> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            url: url.into(),
            http_client,
        })
    }
}

impl DatasetSource for HttpDatasetSource {
    fn fetch(&self) -> AppResult<BossDataset> {
        let response = self.http_client.get(&self.url).send()?;

        if !response.status().is_success() {
            return Err(AppError::Other(format!(
                "dataset request returned status {}",
                response.status()
            )));
        }

        Ok(response.json()?)
    }
}

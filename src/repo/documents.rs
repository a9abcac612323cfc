use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

use crate::entities::{identity_config::IdentityConfig, site_config::SiteConfig};

pub const SITE_CONFIG_FILE: &str = "landing-config.json";
pub const IDENTITY_CONFIG_FILE: &str = "discord-config.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid json in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Whole-document persistence of the two JSON config files.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn read_site(&self) -> Result<SiteConfig, StoreError>;
    async fn write_site(&self, config: &SiteConfig) -> Result<(), StoreError>;
    async fn read_identity(&self) -> Result<IdentityConfig, StoreError>;
    async fn write_identity(&self, config: &IdentityConfig) -> Result<(), StoreError>;
}

pub struct FileDocumentStore {
    dir: PathBuf,
}

impl FileDocumentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, StoreError> {
        let path = self.dir.join(file);
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| StoreError::Read {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&text).map_err(|source| StoreError::Json { path, source })
    }

    // Last writer wins; the previous document is replaced in full.
    async fn write_json<T: Serialize + Sync>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        let path = self.dir.join(file);
        let body = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StoreError::Write {
                path: self.dir.clone(),
                source,
            })?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|source| StoreError::Write { path, source })
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn read_site(&self) -> Result<SiteConfig, StoreError> {
        self.read_json(SITE_CONFIG_FILE).await
    }

    async fn write_site(&self, config: &SiteConfig) -> Result<(), StoreError> {
        self.write_json(SITE_CONFIG_FILE, config).await
    }

    async fn read_identity(&self) -> Result<IdentityConfig, StoreError> {
        self.read_json(IDENTITY_CONFIG_FILE).await
    }

    async fn write_identity(&self, config: &IdentityConfig) -> Result<(), StoreError> {
        self.write_json(IDENTITY_CONFIG_FILE, config).await
    }
}

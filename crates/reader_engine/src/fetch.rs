use std::path::PathBuf;

use async_trait::async_trait;

use crate::artifact::{page_artifact_path, MANIFEST_PATH};
use crate::types::{FailureKind, FetchError, ManifestDoc, PageDoc};

/// Where the viewer reads artifacts from: the extractor's output root,
/// addressed as a local directory or a static HTTP host.
#[async_trait]
pub trait ArtifactFetcher: Send + Sync {
    async fn fetch_manifest(&self) -> Result<ManifestDoc, FetchError>;
    async fn fetch_page(&self, page: u32) -> Result<PageDoc, FetchError>;
}

/// Reads artifacts from a local directory.
#[derive(Debug, Clone)]
pub struct FsArtifactFetcher {
    root: PathBuf,
}

impl FsArtifactFetcher {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    async fn read(&self, relative: &str) -> Result<Vec<u8>, FetchError> {
        tokio::fs::read(self.root.join(relative))
            .await
            .map_err(|err| {
                let kind = if err.kind() == std::io::ErrorKind::NotFound {
                    FailureKind::NotFound
                } else {
                    FailureKind::Io
                };
                FetchError::new(kind, err.to_string())
            })
    }
}

#[async_trait]
impl ArtifactFetcher for FsArtifactFetcher {
    async fn fetch_manifest(&self) -> Result<ManifestDoc, FetchError> {
        decode(&self.read(MANIFEST_PATH).await?)
    }

    async fn fetch_page(&self, page: u32) -> Result<PageDoc, FetchError> {
        decode(&self.read(&page_artifact_path(page)).await?)
    }
}

/// Reads artifacts over HTTP from a static host serving the output root.
#[derive(Debug, Clone)]
pub struct HttpArtifactFetcher {
    base: url::Url,
    client: reqwest::Client,
}

impl HttpArtifactFetcher {
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let mut base = url::Url::parse(base)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        // Url::join drops the last segment of a path without a trailing
        // slash, so normalize the base to a directory.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { base, client })
    }

    async fn get(&self, relative: &str) -> Result<Vec<u8>, FetchError> {
        let url = self
            .base
            .join(relative)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::new(FailureKind::NotFound, status.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ArtifactFetcher for HttpArtifactFetcher {
    async fn fetch_manifest(&self) -> Result<ManifestDoc, FetchError> {
        decode(&self.get(MANIFEST_PATH).await?)
    }

    async fn fetch_page(&self, page: u32) -> Result<PageDoc, FetchError> {
        decode(&self.get(&page_artifact_path(page)).await?)
    }
}

fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
}

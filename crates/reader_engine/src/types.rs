use std::fmt;

use serde::{Deserialize, Serialize};

/// The manifest artifact: index of all pages plus document metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDoc {
    pub title: String,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub pages: Vec<ManifestPageDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestPageDoc {
    pub page: u32,
    pub title: String,
    #[serde(rename = "hasContent")]
    pub has_content: bool,
}

/// A per-page artifact: title plus the transcribed HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDoc {
    pub page: u32,
    pub title: String,
    pub content: String,
}

/// Settled loads delivered back to the app loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ManifestLoaded {
        result: Result<ManifestDoc, FetchError>,
    },
    PageLoaded {
        page: u32,
        generation: u64,
        result: Result<PageDoc, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    NotFound,
    HttpStatus(u16),
    Decode,
    Io,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::NotFound => write!(f, "artifact not found"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "malformed artifact"),
            FailureKind::Io => write!(f, "io error"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

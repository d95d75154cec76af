//! External collaborator traits.
//!
//! The core never persists, uploads, or lists anything itself — these
//! traits are the whole boundary. Implementations live in the surrounding
//! application (HTTP clients, local stores, test fakes); the core only
//! cares about the contracts:
//!
//! - [`BlockPersistence::save`] is called exactly once per user-initiated
//!   save, with the full draft content (never a diff).
//! - [`MediaUpload::upload`] is invoked at most once per user upload
//!   action; its only effect on the core is one field of the active session.
//! - [`MediaLibrary`] is read once when the library view opens; deletions
//!   are delegated and reflected locally by filtering.

use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::EnumString;
use thiserror::Error;

use meishi_types::BlockId;

/// The persistence collaborator rejected or failed a save.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct PersistenceError {
    pub reason: String,
}

impl PersistenceError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Saves one block's content. Conflict policy between clients (for example
/// last-write-wins) belongs to the implementation, not the core.
#[async_trait]
pub trait BlockPersistence: Send + Sync {
    async fn save(
        &self,
        block_id: BlockId,
        content: &serde_json::Value,
    ) -> Result<(), PersistenceError>;
}

/// The upload collaborator failed.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct UploadError {
    pub reason: String,
}

impl UploadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A successfully stored upload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedMedia {
    /// Public URL of the stored file.
    pub url: String,
}

/// Stores raw file bytes and returns a public URL.
#[async_trait]
pub trait MediaUpload: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, filename: &str) -> Result<UploadedMedia, UploadError>;
}

/// Media file categories as reported by the library collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum MediaCategory {
    Image,
    Video,
    Audio,
}

impl MediaCategory {
    /// Parse from a raw category tag (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Image => "image",
            MediaCategory::Video => "video",
            MediaCategory::Audio => "audio",
        }
    }
}

/// One file in the media library.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    pub url: String,
    pub filename: String,
    pub category: MediaCategory,
}

/// The media library collaborator failed.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct LibraryError {
    pub reason: String,
}

impl LibraryError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Lists and deletes stored media files.
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    async fn list(&self) -> Result<Vec<MediaFile>, LibraryError>;
    async fn delete(&self, url: &str) -> Result<(), LibraryError>;
}

// ============================================================================
// Tests
// ============================================================================

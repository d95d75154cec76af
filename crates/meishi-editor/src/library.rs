//! The media library view model.
//!
//! Opens with one `list()` call against the collaborator and works from
//! that snapshot: category filtering is local, deletion is delegated and
//! then reflected by filtering the fetched list. Re-opening the library
//! constructs a fresh view (and a fresh fetch).

use std::str::FromStr;

use strum::EnumString;
use tracing::debug;

use crate::backend::{LibraryError, MediaCategory, MediaFile, MediaLibrary};

/// Category filter chips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LibraryFilter {
    #[default]
    All,
    Image,
    Video,
    Audio,
}

impl LibraryFilter {
    /// Parse from a raw tag (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    fn matches(&self, category: MediaCategory) -> bool {
        match self {
            LibraryFilter::All => true,
            LibraryFilter::Image => category == MediaCategory::Image,
            LibraryFilter::Video => category == MediaCategory::Video,
            LibraryFilter::Audio => category == MediaCategory::Audio,
        }
    }
}

/// One opened library: a fetched snapshot plus a local filter.
#[derive(Debug)]
pub struct MediaLibraryView {
    files: Vec<MediaFile>,
    filter: LibraryFilter,
}

impl MediaLibraryView {
    /// Open the library: fetches the file list once.
    pub async fn open(library: &dyn MediaLibrary) -> Result<Self, LibraryError> {
        let files = library.list().await?;
        debug!(count = files.len(), "media library opened");
        Ok(Self {
            files,
            filter: LibraryFilter::All,
        })
    }

    /// Current filter.
    pub fn filter(&self) -> LibraryFilter {
        self.filter
    }

    /// Switch the category filter (local only).
    pub fn set_filter(&mut self, filter: LibraryFilter) {
        self.filter = filter;
    }

    /// Files passing the current filter, in fetched order.
    pub fn files(&self) -> impl Iterator<Item = &MediaFile> {
        self.files.iter().filter(|f| self.filter.matches(f.category))
    }

    /// The unfiltered snapshot.
    pub fn all_files(&self) -> &[MediaFile] {
        &self.files
    }

    /// Look up a file by URL (for selection).
    pub fn find(&self, url: &str) -> Option<&MediaFile> {
        self.files.iter().find(|f| f.url == url)
    }

    /// Delete a file: delegated to the collaborator, then reflected locally
    /// by filtering the snapshot. A collaborator failure leaves the
    /// snapshot untouched.
    pub async fn delete(
        &mut self,
        library: &dyn MediaLibrary,
        url: &str,
    ) -> Result<(), LibraryError> {
        library.delete(url).await?;
        self.files.retain(|f| f.url != url);
        Ok(())
    }
}

// ============================================================================
// Tests (async flows live in tests/edit_lifecycle.rs)
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn file(url: &str, category: MediaCategory) -> MediaFile {
        MediaFile {
            url: url.to_string(),
            filename: url.rsplit('/').next().unwrap_or(url).to_string(),
            category,
        }
    }

    fn view() -> MediaLibraryView {
        MediaLibraryView {
            files: vec![
                file("https://cdn/a.png", MediaCategory::Image),
                file("https://cdn/b.mp4", MediaCategory::Video),
                file("https://cdn/c.mp3", MediaCategory::Audio),
                file("https://cdn/d.png", MediaCategory::Image),
            ],
            filter: LibraryFilter::All,
        }
    }

    #[test]
    fn test_all_filter_shows_everything() {
        let v = view();
        assert_eq!(v.files().count(), 4);
    }

    #[test]
    fn test_category_filters() {
        let mut v = view();
        v.set_filter(LibraryFilter::Image);
        assert_eq!(v.files().count(), 2);
        v.set_filter(LibraryFilter::Audio);
        let urls: Vec<&str> = v.files().map(|f| f.url.as_str()).collect();
        assert_eq!(urls, ["https://cdn/c.mp3"]);
    }

    #[test]
    fn test_filter_is_local_only() {
        let mut v = view();
        v.set_filter(LibraryFilter::Video);
        assert_eq!(v.all_files().len(), 4);
    }

    #[test]
    fn test_find_by_url() {
        let v = view();
        assert_eq!(v.find("https://cdn/b.mp4").unwrap().category, MediaCategory::Video);
        assert!(v.find("https://cdn/nope").is_none());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(LibraryFilter::from_str("all"), Some(LibraryFilter::All));
        assert_eq!(LibraryFilter::from_str("IMAGE"), Some(LibraryFilter::Image));
        assert_eq!(LibraryFilter::from_str("docs"), None);
    }
}

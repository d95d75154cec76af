//! The transient draft state for one block under edit.
//!
//! An [`EditSession`] is created when a block enters edit mode, seeded from
//! the block's current content, and destroyed on save or cancel. It is
//! owned exclusively by that block's controller — never shared between
//! blocks, never persisted.
//!
//! Drafts are kind-shaped JSON objects edited field-by-field; saving is
//! best-effort and validation-free, so `set_field` accepts anything.

use serde_json::{Map, Value};

/// The payload key media uploads and library selections write into.
pub const MEDIA_URL_FIELD: &str = "imageUrl";

/// Opaque handle tying an in-flight upload to the session that started it.
///
/// A ticket whose generation no longer matches the controller's is stale:
/// the session it belonged to was cancelled or saved, and the result must
/// be discarded rather than applied to a newer (or no) draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTicket {
    pub(crate) generation: u64,
}

/// Draft content plus upload bookkeeping for one editing pass.
#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    draft: Map<String, Value>,
    uploading: bool,
    generation: u64,
}

impl EditSession {
    /// Seed a session from a block's current content. Non-object content
    /// (null, scalars) seeds an empty draft — the editor builds the object
    /// field-by-field.
    pub(crate) fn new(content: &Value, generation: u64) -> Self {
        let draft = match content {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        Self {
            draft,
            uploading: false,
            generation,
        }
    }

    /// The full draft as a JSON object value — what gets handed to the
    /// persistence collaborator.
    pub fn draft(&self) -> Value {
        Value::Object(self.draft.clone())
    }

    /// Read one draft field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.draft.get(name)
    }

    /// Write one draft field. No validation — saving is best-effort.
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) {
        self.draft.insert(name.to_string(), value.into());
    }

    /// Remove one draft field.
    pub fn clear_field(&mut self, name: &str) {
        self.draft.remove(name);
    }

    /// Whether a media upload is currently in flight for this session.
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub(crate) fn set_uploading(&mut self, uploading: bool) {
        self.uploading = uploading;
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seeds_from_object_content() {
        let session = EditSession::new(&json!({"title": "Hi", "url": "x"}), 1);
        assert_eq!(session.field("title"), Some(&json!("Hi")));
        assert_eq!(session.draft(), json!({"title": "Hi", "url": "x"}));
    }

    #[test]
    fn test_seeds_empty_from_non_object() {
        for content in [json!(null), json!("text"), json!(42), json!([1])] {
            let session = EditSession::new(&content, 1);
            assert_eq!(session.draft(), json!({}));
        }
    }

    #[test]
    fn test_set_and_clear_field() {
        let mut session = EditSession::new(&json!({}), 1);
        session.set_field("imageUrl", "https://x/p.png");
        assert_eq!(session.field("imageUrl"), Some(&json!("https://x/p.png")));
        session.clear_field("imageUrl");
        assert_eq!(session.field("imageUrl"), None);
    }

    #[test]
    fn test_draft_is_a_copy_of_seed() {
        // Mutating the draft must not touch the value it was seeded from.
        let original = json!({"title": "before"});
        let mut session = EditSession::new(&original, 1);
        session.set_field("title", "after");
        assert_eq!(original, json!({"title": "before"}));
    }

    #[test]
    fn test_upload_flag_defaults_off() {
        let session = EditSession::new(&json!({}), 1);
        assert!(!session.is_uploading());
    }
}

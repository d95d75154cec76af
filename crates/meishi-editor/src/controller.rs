//! The per-block edit controller.
//!
//! State machine per block:
//!
//! ```text
//! Viewing ──begin──▶ Editing ──save──▶ Saving ──accepted──▶ Viewing
//!    ▲                  │                 │
//!    │                  │                 └─rejected─▶ Editing (draft kept)
//!    └────cancel────────┘
//! ```
//!
//! Transitions are explicit commands; there are no implicit side effects.
//! The controller calls the persistence collaborator exactly once per
//! user-initiated save, with the full draft. It never retries — a rejected
//! save surfaces to the caller and leaves the session intact so the user
//! can retry or cancel.
//!
//! The media upload sub-operation runs while Editing without changing the
//! controller state. [`BlockEditor::begin_upload`] hands out a ticket bound
//! to the current session generation; [`BlockEditor::apply_upload`] drops
//! results whose ticket went stale (the session was cancelled or saved
//! while the upload was in flight). Applying a late result would resurrect
//! a draft the user already abandoned, so stale tickets are always
//! discarded.

use serde_json::Value;
use tracing::{debug, warn};

use meishi_types::{Block, BlockId};

use crate::backend::{BlockPersistence, MediaFile, UploadError, UploadedMedia};
use crate::error::EditorError;
use crate::session::{EditSession, MEDIA_URL_FIELD, UploadTicket};

/// Edit lifecycle states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    /// Read-only display (initial).
    #[default]
    Viewing,
    /// Draft open for mutation.
    Editing,
    /// Save handed to the persistence collaborator (transient).
    Saving,
}

impl EditorState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditorState::Editing)
    }
}

/// Edit controller for exactly one block. Single-writer: one active edit
/// session per block per client.
#[derive(Debug)]
pub struct BlockEditor {
    block_id: BlockId,
    content: Value,
    state: EditorState,
    session: Option<EditSession>,
    /// Bumped whenever a session is created or destroyed; upload tickets
    /// carry the value they were minted under.
    generation: u64,
}

impl BlockEditor {
    /// Create a controller over a block's current content.
    pub fn new(block_id: BlockId, content: Value) -> Self {
        Self {
            block_id,
            content,
            state: EditorState::Viewing,
            session: None,
            generation: 0,
        }
    }

    /// Create a controller seeded from a block record.
    pub fn for_block(block: &Block) -> Self {
        Self::new(block.id, block.content.clone())
    }

    /// The block this controller governs.
    pub fn block_id(&self) -> BlockId {
        self.block_id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// The controller's idea of the block's current (saved) content.
    pub fn content(&self) -> &Value {
        &self.content
    }

    /// The active session, if Editing or Saving.
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Viewing → Editing: open a session seeded from current content.
    pub fn begin(&mut self) -> Result<(), EditorError> {
        match self.state {
            EditorState::Viewing => {
                self.generation += 1;
                self.session = Some(EditSession::new(&self.content, self.generation));
                self.state = EditorState::Editing;
                debug!(block = %self.block_id, "edit session opened");
                Ok(())
            }
            EditorState::Editing => Err(EditorError::AlreadyEditing),
            EditorState::Saving => Err(EditorError::SaveInProgress),
        }
    }

    /// Mutate one draft field. Only valid while Editing.
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> Result<(), EditorError> {
        let session = self.editing_session()?;
        session.set_field(name, value);
        Ok(())
    }

    /// Editing → Saving → Viewing. Hands the full draft to the collaborator
    /// exactly once. On rejection the state returns to Editing with the
    /// draft untouched; the caller decides whether to retry or cancel.
    pub async fn save(&mut self, store: &dyn BlockPersistence) -> Result<(), EditorError> {
        match self.state {
            EditorState::Editing => {}
            EditorState::Viewing => return Err(EditorError::NotEditing),
            EditorState::Saving => return Err(EditorError::SaveInProgress),
        }
        let draft = self
            .session
            .as_ref()
            .map(EditSession::draft)
            .ok_or(EditorError::NotEditing)?;

        self.state = EditorState::Saving;
        match store.save(self.block_id, &draft).await {
            Ok(()) => {
                self.content = draft;
                self.session = None;
                self.generation += 1;
                self.state = EditorState::Viewing;
                debug!(block = %self.block_id, "draft saved");
                Ok(())
            }
            Err(err) => {
                self.state = EditorState::Editing;
                warn!(block = %self.block_id, error = %err, "save rejected, draft retained");
                Err(EditorError::SaveRejected(err.reason))
            }
        }
    }

    /// Editing → Viewing: discard the session. No content mutation; any
    /// in-flight upload result for it will be discarded as stale.
    pub fn cancel(&mut self) -> Result<(), EditorError> {
        match self.state {
            EditorState::Editing => {
                self.session = None;
                self.generation += 1;
                self.state = EditorState::Viewing;
                debug!(block = %self.block_id, "edit session cancelled");
                Ok(())
            }
            EditorState::Viewing => Err(EditorError::NotEditing),
            EditorState::Saving => Err(EditorError::SaveInProgress),
        }
    }

    /// Mark an upload as in flight and mint a ticket for its completion.
    /// Does not change the controller state.
    pub fn begin_upload(&mut self) -> Result<UploadTicket, EditorError> {
        let session = self.editing_session()?;
        session.set_uploading(true);
        Ok(UploadTicket {
            generation: session.generation(),
        })
    }

    /// Apply a finished upload. A ticket minted for a session that has
    /// since been cancelled or saved is stale: the result is discarded and
    /// [`EditorError::StaleUpload`] reported. On success the draft's media
    /// URL field is updated; on failure only the in-progress flag clears.
    pub fn apply_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<UploadedMedia, UploadError>,
    ) -> Result<(), EditorError> {
        let Some(session) = self
            .session
            .as_mut()
            .filter(|s| s.generation() == ticket.generation)
        else {
            debug!(block = %self.block_id, "discarding upload result for stale session");
            return Err(EditorError::StaleUpload);
        };
        session.set_uploading(false);
        match result {
            Ok(media) => {
                session.set_field(MEDIA_URL_FIELD, media.url);
                Ok(())
            }
            Err(err) => {
                warn!(block = %self.block_id, error = %err, "upload failed");
                Err(EditorError::UploadFailed(err.reason))
            }
        }
    }

    /// Library selection: same effect as a completed upload, applied
    /// synchronously.
    pub fn select_media(&mut self, file: &MediaFile) -> Result<(), EditorError> {
        let session = self.editing_session()?;
        session.set_field(MEDIA_URL_FIELD, file.url.clone());
        Ok(())
    }

    fn editing_session(&mut self) -> Result<&mut EditSession, EditorError> {
        match self.state {
            EditorState::Editing => self.session.as_mut().ok_or(EditorError::NotEditing),
            EditorState::Viewing => Err(EditorError::NotEditing),
            EditorState::Saving => Err(EditorError::SaveInProgress),
        }
    }
}

// ============================================================================
// Tests (synchronous paths; save flows live in tests/edit_lifecycle.rs)
// ============================================================================

//! Error types for the edit lifecycle.

use thiserror::Error;

/// Errors surfaced by the edit controller.
///
/// None of these are fatal to the editing surface: a rejected save leaves
/// the controller in Editing with the draft intact, a failed upload only
/// clears the in-progress flag, and a stale upload is discarded without
/// touching any draft.
#[derive(Error, Debug)]
pub enum EditorError {
    /// A command that needs an active session arrived while Viewing.
    #[error("no active edit session")]
    NotEditing,

    /// `begin` arrived while a session was already active.
    #[error("edit session already active")]
    AlreadyEditing,

    /// A command arrived while a save was in flight.
    #[error("save in progress")]
    SaveInProgress,

    /// The persistence collaborator rejected the draft. The session is
    /// retained so the user can retry or cancel.
    #[error("save rejected: {0}")]
    SaveRejected(String),

    /// The upload collaborator failed. The draft's media field is unchanged.
    #[error("upload failed: {0}")]
    UploadFailed(String),

    /// An upload result arrived for a session that no longer exists; the
    /// result was discarded.
    #[error("upload result arrived for a stale session")]
    StaleUpload,
}

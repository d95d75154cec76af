//! Per-block edit lifecycle for Meishi.
//!
//! One [`BlockEditor`] governs one block: a four-state machine (Viewing →
//! Editing → Saving → Viewing, with cancel degenerating to Viewing) around
//! an owned [`EditSession`] draft. The controller is single-writer: one
//! active session per block per client; concurrent edits from other
//! clients are the persistence collaborator's conflict policy, not ours.
//!
//! External collaborators are async traits ([`BlockPersistence`],
//! [`MediaUpload`], [`MediaLibrary`]); the core calls `save` exactly once
//! per user save with the full draft, and treats collaborator failures as
//! advisory — a rejected save keeps the draft, a failed upload only clears
//! the in-progress flag.
//!
//! The upload sub-operation is the only asynchronous piece. Results are
//! applied through an [`UploadTicket`] bound to the session generation:
//! a result that arrives after the session was cancelled or saved is
//! discarded, never applied to a stale draft.

pub mod error;
pub mod backend;
pub mod session;
pub mod controller;
pub mod form;
pub mod library;

pub use error::EditorError;
pub use backend::{
    BlockPersistence, LibraryError, MediaCategory, MediaFile, MediaLibrary, MediaUpload,
    PersistenceError, UploadError, UploadedMedia,
};
pub use session::{EditSession, MEDIA_URL_FIELD, UploadTicket};
pub use controller::{BlockEditor, EditorState};
pub use form::{FormField, form_fields};
pub use library::{LibraryFilter, MediaLibraryView};

//! Block dispatch renderers and the public profile composer.
//!
//! Rendering is a pure function of `(kind, content, title, theme)` — no
//! renderer holds cross-block state, touches the network, or has a failure
//! mode visible to the caller. Every dispatch branch degrades gracefully:
//! unknown kinds get a fixed placeholder fragment, missing fields get the
//! per-kind fallbacks documented on each rule, and one malformed block can
//! never prevent its siblings from rendering.
//!
//! Two renderers share the dispatch:
//!
//! - [`render_summary`] — compact preview for the editing list
//! - [`render_full`] — themed public-page rendering, consuming a
//!   [`ThemeClassSet`](meishi_theme::ThemeClassSet) resolved once per pass
//!
//! [`compose_profile`] assembles the header and the ordered block sequence
//! into one [`Fragment`] tree.

pub mod fragment;
pub mod datefmt;
pub mod whatsapp;
pub mod summary;
pub mod full;
pub mod profile;

pub use fragment::{BadgeVariant, Fragment, IconKind};
pub use summary::render_summary;
pub use full::render_full;
pub use profile::compose_profile;
pub use whatsapp::{sanitize_phone, wa_link};

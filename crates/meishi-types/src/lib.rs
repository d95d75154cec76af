//! Shared identity, block, and profile types for Meishi.
//!
//! This crate is the relational foundation: typed IDs, block kinds, block
//! records, the typed content model, the block type registry, and profile
//! metadata. It has **no internal meishi dependencies** — a pure leaf crate
//! that the theme, render, and editor crates build on.
//!
//! # Entity-Relationship Overview
//!
//! ```text
//! Profile (ProfileId)
//!     └── owns Block (BlockId), ordered by position
//!
//! Block (BlockId)
//!     └── kind: raw string tag, normalized through BlockKind
//!     └── content: kind-shaped JSON payload, parsed into BlockContent
//!     └── title: optional chrome, independent of the payload
//!
//! BlockKind
//!     └── canonical tag + legacy aliases ("whatsap" → Whatsapp)
//!     └── described by ContentShape (registry metadata for form builders)
//! ```
//!
//! # Key Types
//!
//! |------------------|-----------------------------------------------|
//! | Type             | Purpose                                       |
//! |------------------|-----------------------------------------------|
//! | [`ProfileId`]    | Which profile                                 |
//! | [`BlockId`]      | Which block                                   |
//! | [`Block`]        | One stored content unit (raw kind + payload)  |
//! | [`BlockKind`]    | Canonical kind after alias normalization      |
//! | [`BlockContent`] | Closed tagged union, one variant per kind     |
//! | [`ContentShape`] | Recognized fields per kind (metadata only)    |
//! | [`Profile`]      | Page owner metadata (name, bio, theme, ...)   |
//! |------------------|-----------------------------------------------|

pub mod ids;
pub mod block;
pub mod content;
pub mod registry;
pub mod profile;

// Re-export primary types at crate root for convenience.
pub use ids::{BlockId, ProfileId};
pub use block::{Block, BlockKind, ClockFormat, CollectName, ContactKind, ImageSize, SocialPlatform};
pub use content::{
    AboutContent, BlockContent, ContactContent, EventContent, GalleryContent, ImageContent,
    LinkContent, LocationContent, MediaContent, SocialContent, SubscriptionContent,
    TestimonialContent, TextContent, TimelineContent, TimelineEntry, TimezoneContent,
    WhatsappContent,
};
pub use registry::{ContentShape, FieldSpec, FieldType};
pub use profile::Profile;

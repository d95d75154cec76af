//! Block records and the kind vocabulary.
//!
//! A [`Block`] stores its kind as a raw string tag so that records written by
//! older clients (or by hand) always load. [`BlockKind`] is the closed catalog
//! of canonical kinds; parsing doubles as alias normalization — the historical
//! `"whatsap"` misspelling resolves to [`BlockKind::Whatsapp`], and matching is
//! case-insensitive. A raw tag that normalizes to nothing is not an error:
//! renderers emit a fixed "unknown kind" placeholder for it.
//!
//! The alias table is the `#[strum(serialize = ...)]` attributes on each
//! variant — adding an alias is one attribute, not a code change elsewhere.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::ids::BlockId;

/// One stored content unit on a profile page.
///
/// `kind` is the raw tag as persisted; call [`Block::kind`] to normalize it.
/// `content` is the kind-shaped payload — parse it with
/// [`BlockContent::parse`](crate::content::BlockContent::parse). Fields the
/// kind doesn't recognize are ignored, never an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block identity, stable for the block's lifetime.
    pub id: BlockId,
    /// Raw kind tag (may be a legacy alias or unknown).
    pub kind: String,
    /// Optional display title, shown in chrome around the rendered body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Kind-shaped payload. Missing fields degrade to per-kind fallbacks.
    #[serde(default)]
    pub content: serde_json::Value,
    /// Position among the owning profile's blocks (insertion order).
    #[serde(default)]
    pub position: u32,
}

impl Block {
    /// Create a block of the given kind with an empty payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            kind: kind.into(),
            title: None,
            content: serde_json::Value::Object(serde_json::Map::new()),
            position: 0,
        }
    }

    /// Replace the payload.
    pub fn with_content(mut self, content: serde_json::Value) -> Self {
        self.content = content;
        self
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the position among siblings.
    pub fn at_position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }

    /// Normalize the raw tag to a canonical kind, resolving legacy aliases.
    ///
    /// `None` means the tag is outside the catalog; render it as the
    /// unknown-kind placeholder rather than failing the page.
    pub fn kind(&self) -> Option<BlockKind> {
        BlockKind::from_str(&self.kind)
    }
}

/// The closed catalog of canonical block kinds.
///
/// Parsing is the alias table: each `serialize` attribute is an accepted
/// spelling, matching is ASCII-case-insensitive, and `as_str()` always
/// returns the canonical tag — so normalization is idempotent by
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum BlockKind {
    /// Free-form introduction text.
    About,
    /// Education timeline (ordered entries).
    Education,
    /// Work experience timeline (ordered entries).
    Experience,
    /// A single social platform handle.
    Social,
    /// One contact affordance (email / phone / address / website).
    Contact,
    /// An outbound link with title and description.
    Link,
    /// Image gallery (upload pipeline not implemented yet).
    Gallery,
    /// Video embed by URL.
    Video,
    /// Audio embed by URL.
    Audio,
    /// Achievements list (count-only preview).
    Achievement,
    /// Titled free-form text.
    Text,
    /// A quote with author attribution.
    Testimonial,
    /// A dated event with optional time and location.
    Event,
    /// Email subscription signup.
    Subscription,
    /// WhatsApp deep-link contact card. `"whatsap"` is a legacy typo kept
    /// for records written before the spelling was fixed.
    #[strum(serialize = "whatsapp", serialize = "whatsap")]
    Whatsapp,
    /// Timezone clock display.
    Timezone,
    /// Physical location (address / city / country).
    Location,
    /// Calendar entry with an optional date range.
    Calendar,
    /// A single image with a size preset.
    Image,
}

impl BlockKind {
    /// All canonical kinds, in catalog order.
    pub const ALL: [BlockKind; 19] = [
        BlockKind::About,
        BlockKind::Education,
        BlockKind::Experience,
        BlockKind::Social,
        BlockKind::Contact,
        BlockKind::Link,
        BlockKind::Gallery,
        BlockKind::Video,
        BlockKind::Audio,
        BlockKind::Achievement,
        BlockKind::Text,
        BlockKind::Testimonial,
        BlockKind::Event,
        BlockKind::Subscription,
        BlockKind::Whatsapp,
        BlockKind::Timezone,
        BlockKind::Location,
        BlockKind::Calendar,
        BlockKind::Image,
    ];

    /// Parse from a raw tag, resolving aliases (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// The canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::About => "about",
            BlockKind::Education => "education",
            BlockKind::Experience => "experience",
            BlockKind::Social => "social",
            BlockKind::Contact => "contact",
            BlockKind::Link => "link",
            BlockKind::Gallery => "gallery",
            BlockKind::Video => "video",
            BlockKind::Audio => "audio",
            BlockKind::Achievement => "achievement",
            BlockKind::Text => "text",
            BlockKind::Testimonial => "testimonial",
            BlockKind::Event => "event",
            BlockKind::Subscription => "subscription",
            BlockKind::Whatsapp => "whatsapp",
            BlockKind::Timezone => "timezone",
            BlockKind::Location => "location",
            BlockKind::Calendar => "calendar",
            BlockKind::Image => "image",
        }
    }

    /// Check if this kind renders an entry timeline (first-2-then-count preview).
    pub fn is_timeline(&self) -> bool {
        matches!(self, BlockKind::Education | BlockKind::Experience)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recognized social platforms.
///
/// Unknown platform strings render nothing — the renderer treats a `None`
/// parse as an empty fragment, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum SocialPlatform {
    Github,
    /// `"x"` accepted as the post-rebrand alias.
    #[strum(serialize = "twitter", serialize = "x")]
    Twitter,
    Linkedin,
    Instagram,
    Facebook,
    Youtube,
    Tiktok,
    Twitch,
    Dribbble,
    Medium,
}

impl SocialPlatform {
    /// Parse from a raw platform tag (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// Human-facing platform name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SocialPlatform::Github => "GitHub",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Youtube => "YouTube",
            SocialPlatform::Tiktok => "TikTok",
            SocialPlatform::Twitch => "Twitch",
            SocialPlatform::Dribbble => "Dribbble",
            SocialPlatform::Medium => "Medium",
        }
    }

    /// Short glyph tag for compact previews.
    pub fn glyph(&self) -> &'static str {
        match self {
            SocialPlatform::Github => "gh",
            SocialPlatform::Twitter => "tw",
            SocialPlatform::Linkedin => "in",
            SocialPlatform::Instagram => "ig",
            SocialPlatform::Facebook => "fb",
            SocialPlatform::Youtube => "yt",
            SocialPlatform::Tiktok => "tt",
            SocialPlatform::Twitch => "tv",
            SocialPlatform::Dribbble => "dr",
            SocialPlatform::Medium => "md",
        }
    }

    /// Public profile URL for a username on this platform.
    pub fn profile_url(&self, username: &str) -> String {
        match self {
            SocialPlatform::Github => format!("https://github.com/{username}"),
            SocialPlatform::Twitter => format!("https://twitter.com/{username}"),
            SocialPlatform::Linkedin => format!("https://www.linkedin.com/in/{username}"),
            SocialPlatform::Instagram => format!("https://www.instagram.com/{username}"),
            SocialPlatform::Facebook => format!("https://www.facebook.com/{username}"),
            SocialPlatform::Youtube => format!("https://www.youtube.com/@{username}"),
            SocialPlatform::Tiktok => format!("https://www.tiktok.com/@{username}"),
            SocialPlatform::Twitch => format!("https://www.twitch.tv/{username}"),
            SocialPlatform::Dribbble => format!("https://dribbble.com/{username}"),
            SocialPlatform::Medium => format!("https://medium.com/@{username}"),
        }
    }
}

/// Contact affordance types. Unknown tags fall back to [`ContactKind::Email`]
/// at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ContactKind {
    #[default]
    Email,
    Phone,
    Address,
    Website,
}

impl ContactKind {
    /// Parse from a raw tag (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactKind::Email => "email",
            ContactKind::Phone => "phone",
            ContactKind::Address => "address",
            ContactKind::Website => "website",
        }
    }
}

/// Image size presets. Each maps to one of four fixed dimension classes;
/// the default is [`ImageSize::Medium`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ImageSize {
    Small,
    #[default]
    Medium,
    Large,
    Full,
}

impl ImageSize {
    /// Parse from a raw tag (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Small => "small",
            ImageSize::Medium => "medium",
            ImageSize::Large => "large",
            ImageSize::Full => "full",
        }
    }
}

/// Clock display format for timezone blocks. Stored as `"12"` / `"24"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, EnumString)]
pub enum ClockFormat {
    #[default]
    #[strum(serialize = "12")]
    TwelveHour,
    #[strum(serialize = "24")]
    TwentyFourHour,
}

impl ClockFormat {
    /// Parse from a raw tag. Anything other than `"24"` reads as 12-hour.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// Human-facing format label.
    pub fn label(&self) -> &'static str {
        match self {
            ClockFormat::TwelveHour => "12-hour",
            ClockFormat::TwentyFourHour => "24-hour",
        }
    }
}

/// Whether a subscription block also collects the subscriber's name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum CollectName {
    Yes,
    #[default]
    No,
}

impl CollectName {
    /// Parse from a raw tag (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }
}

// ============================================================================
// Tests
// ============================================================================

//! The block type registry — descriptive content shapes per kind.
//!
//! [`ContentShape::describe`] returns the recognized field names and their
//! semantic types for a canonical kind. This is metadata for form builders
//! and tooling, never executable validation: the renderer and editor apply
//! their own fallbacks independently, so a shape changing here can't break
//! rendering of old records.

use crate::block::BlockKind;

/// Semantic type of a content field, for form construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// Single-line text.
    Text,
    /// Multi-line text.
    RichText,
    /// URL input.
    Url,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Phone number.
    Phone,
    /// One of a fixed set of values.
    Enum(&'static [&'static str]),
    /// Ordered list of sub-entries (title / side / description).
    EntryList,
}

/// One recognized content field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Payload key, camelCase as stored.
    pub name: &'static str,
    /// Human-facing label for form builders.
    pub label: &'static str,
    /// Semantic type.
    pub field_type: FieldType,
}

const fn field(name: &'static str, label: &'static str, field_type: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        label,
        field_type,
    }
}

/// The declared content shape of one block kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentShape {
    pub kind: BlockKind,
    pub fields: &'static [FieldSpec],
}

impl ContentShape {
    /// Look up the shape for a canonical kind. Total over the catalog.
    pub fn describe(kind: BlockKind) -> &'static ContentShape {
        match kind {
            BlockKind::About => &ABOUT,
            BlockKind::Education => &EDUCATION,
            BlockKind::Experience => &EXPERIENCE,
            BlockKind::Social => &SOCIAL,
            BlockKind::Contact => &CONTACT,
            BlockKind::Link => &LINK,
            BlockKind::Gallery => &GALLERY,
            BlockKind::Video => &VIDEO,
            BlockKind::Audio => &AUDIO,
            BlockKind::Achievement => &ACHIEVEMENT,
            BlockKind::Text => &TEXT,
            BlockKind::Testimonial => &TESTIMONIAL,
            BlockKind::Event => &EVENT,
            BlockKind::Subscription => &SUBSCRIPTION,
            BlockKind::Whatsapp => &WHATSAPP,
            BlockKind::Timezone => &TIMEZONE,
            BlockKind::Location => &LOCATION,
            BlockKind::Calendar => &CALENDAR,
            BlockKind::Image => &IMAGE,
        }
    }

    /// Find one field by payload key.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

static ABOUT: ContentShape = ContentShape {
    kind: BlockKind::About,
    fields: &[field("content", "About text", FieldType::RichText)],
};

static EDUCATION: ContentShape = ContentShape {
    kind: BlockKind::Education,
    fields: &[field("entries", "Education entries", FieldType::EntryList)],
};

static EXPERIENCE: ContentShape = ContentShape {
    kind: BlockKind::Experience,
    fields: &[field("entries", "Experience entries", FieldType::EntryList)],
};

static SOCIAL: ContentShape = ContentShape {
    kind: BlockKind::Social,
    fields: &[
        field(
            "platform",
            "Platform",
            FieldType::Enum(&[
                "github", "twitter", "linkedin", "instagram", "facebook", "youtube", "tiktok",
                "twitch", "dribbble", "medium",
            ]),
        ),
        field("username", "Username", FieldType::Text),
    ],
};

static CONTACT: ContentShape = ContentShape {
    kind: BlockKind::Contact,
    fields: &[
        field(
            "type",
            "Contact type",
            FieldType::Enum(&["email", "phone", "address", "website"]),
        ),
        field("label", "Label", FieldType::Text),
        field("value", "Value", FieldType::Text),
    ],
};

static LINK: ContentShape = ContentShape {
    kind: BlockKind::Link,
    fields: &[
        field("title", "Title", FieldType::Text),
        field("description", "Description", FieldType::RichText),
        field("url", "URL", FieldType::Url),
    ],
};

static GALLERY: ContentShape = ContentShape {
    kind: BlockKind::Gallery,
    fields: &[
        field("title", "Title", FieldType::Text),
        field("description", "Description", FieldType::RichText),
    ],
};

static VIDEO: ContentShape = ContentShape {
    kind: BlockKind::Video,
    fields: &[
        field("title", "Title", FieldType::Text),
        field("url", "Video URL", FieldType::Url),
        field("description", "Description", FieldType::RichText),
    ],
};

static AUDIO: ContentShape = ContentShape {
    kind: BlockKind::Audio,
    fields: &[
        field("title", "Title", FieldType::Text),
        field("url", "Audio URL", FieldType::Url),
        field("description", "Description", FieldType::RichText),
    ],
};

static ACHIEVEMENT: ContentShape = ContentShape {
    kind: BlockKind::Achievement,
    fields: &[field("entries", "Achievements", FieldType::EntryList)],
};

static TEXT: ContentShape = ContentShape {
    kind: BlockKind::Text,
    fields: &[
        field("title", "Title", FieldType::Text),
        field("content", "Text", FieldType::RichText),
    ],
};

static TESTIMONIAL: ContentShape = ContentShape {
    kind: BlockKind::Testimonial,
    fields: &[
        field("quote", "Quote", FieldType::RichText),
        field("author", "Author", FieldType::Text),
        field("avatar", "Avatar URL", FieldType::Url),
        field("position", "Position", FieldType::Text),
    ],
};

static EVENT: ContentShape = ContentShape {
    kind: BlockKind::Event,
    fields: &[
        field("title", "Title", FieldType::Text),
        field("date", "Date", FieldType::Date),
        field("time", "Time", FieldType::Time),
        field("location", "Location", FieldType::Text),
        field("description", "Description", FieldType::RichText),
    ],
};

static SUBSCRIPTION: ContentShape = ContentShape {
    kind: BlockKind::Subscription,
    fields: &[
        field("title", "Title", FieldType::Text),
        field("description", "Description", FieldType::RichText),
        field("collectName", "Collect name", FieldType::Enum(&["yes", "no"])),
        field("buttonText", "Button text", FieldType::Text),
    ],
};

static WHATSAPP: ContentShape = ContentShape {
    kind: BlockKind::Whatsapp,
    fields: &[
        field("phoneNumber", "Phone number", FieldType::Phone),
        field("message", "Pre-filled message", FieldType::RichText),
        field("contactName", "Contact name", FieldType::Text),
        field("designation", "Designation", FieldType::Text),
        field("buttonText", "Button text", FieldType::Text),
        field("description", "Description", FieldType::RichText),
    ],
};

static TIMEZONE: ContentShape = ContentShape {
    kind: BlockKind::Timezone,
    fields: &[
        field("timezone", "Timezone", FieldType::Text),
        field("format", "Clock format", FieldType::Enum(&["12", "24"])),
        field("customLabel", "Custom label", FieldType::Text),
    ],
};

static LOCATION: ContentShape = ContentShape {
    kind: BlockKind::Location,
    fields: &[
        field("address", "Address", FieldType::Text),
        field("city", "City", FieldType::Text),
        field("country", "Country", FieldType::Text),
    ],
};

static CALENDAR: ContentShape = ContentShape {
    kind: BlockKind::Calendar,
    fields: &[
        field("title", "Title", FieldType::Text),
        field("date", "Start date", FieldType::Date),
        field("endDate", "End date", FieldType::Date),
        field("description", "Description", FieldType::RichText),
    ],
};

static IMAGE: ContentShape = ContentShape {
    kind: BlockKind::Image,
    fields: &[
        field("imageUrl", "Image URL", FieldType::Url),
        field(
            "size",
            "Image size",
            FieldType::Enum(&["small", "medium", "large", "full"]),
        ),
    ],
};

// ============================================================================
// Tests
// ============================================================================

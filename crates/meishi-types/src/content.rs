//! The typed content model — one payload shape per block kind.
//!
//! [`BlockContent`] is a closed tagged union keyed by canonical kind. Each
//! variant carries a struct with only that kind's fields, all optional, all
//! deserialized with `#[serde(default)]` so a missing field is never an
//! error. Enum-valued fields (platform, contact type, image size, clock
//! format, collect-name) stay as raw strings here; renderers and editors
//! parse them with their own fallbacks, so one malformed tag can't poison
//! the rest of the payload.
//!
//! Parsing is total: [`BlockContent::parse`] never fails. A payload that
//! doesn't deserialize at all (wrong JSON shape, wrong field types) degrades
//! to the kind's empty content, which renders as that kind's documented
//! placeholder.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::block::BlockKind;

/// Closed tagged union of per-kind payloads.
#[derive(Clone, Debug, PartialEq)]
pub enum BlockContent {
    About(AboutContent),
    Education(TimelineContent),
    Experience(TimelineContent),
    Social(SocialContent),
    Contact(ContactContent),
    Link(LinkContent),
    Gallery(GalleryContent),
    Video(MediaContent),
    Audio(MediaContent),
    Achievement(TimelineContent),
    Text(TextContent),
    Testimonial(TestimonialContent),
    Event(EventContent),
    Subscription(SubscriptionContent),
    Whatsapp(WhatsappContent),
    Timezone(TimezoneContent),
    Location(LocationContent),
    Calendar(EventContent),
    Image(ImageContent),
}

/// Best-effort decode: unknown fields ignored, missing fields defaulted,
/// unusable payloads degrade to the empty shape.
fn decode<T: DeserializeOwned + Default>(value: &serde_json::Value) -> T {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

impl BlockContent {
    /// Parse a raw payload for a canonical kind. Total — never fails.
    pub fn parse(kind: BlockKind, value: &serde_json::Value) -> Self {
        match kind {
            BlockKind::About => Self::About(decode(value)),
            BlockKind::Education => Self::Education(decode(value)),
            BlockKind::Experience => Self::Experience(decode(value)),
            BlockKind::Social => Self::Social(decode(value)),
            BlockKind::Contact => Self::Contact(decode(value)),
            BlockKind::Link => Self::Link(decode(value)),
            BlockKind::Gallery => Self::Gallery(decode(value)),
            BlockKind::Video => Self::Video(decode(value)),
            BlockKind::Audio => Self::Audio(decode(value)),
            BlockKind::Achievement => Self::Achievement(decode(value)),
            BlockKind::Text => Self::Text(decode(value)),
            BlockKind::Testimonial => Self::Testimonial(decode(value)),
            BlockKind::Event => Self::Event(decode(value)),
            BlockKind::Subscription => Self::Subscription(decode(value)),
            BlockKind::Whatsapp => Self::Whatsapp(decode(value)),
            BlockKind::Timezone => Self::Timezone(decode(value)),
            BlockKind::Location => Self::Location(decode(value)),
            BlockKind::Calendar => Self::Calendar(decode(value)),
            BlockKind::Image => Self::Image(decode(value)),
        }
    }

    /// The canonical kind this payload belongs to.
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::About(_) => BlockKind::About,
            BlockContent::Education(_) => BlockKind::Education,
            BlockContent::Experience(_) => BlockKind::Experience,
            BlockContent::Social(_) => BlockKind::Social,
            BlockContent::Contact(_) => BlockKind::Contact,
            BlockContent::Link(_) => BlockKind::Link,
            BlockContent::Gallery(_) => BlockKind::Gallery,
            BlockContent::Video(_) => BlockKind::Video,
            BlockContent::Audio(_) => BlockKind::Audio,
            BlockContent::Achievement(_) => BlockKind::Achievement,
            BlockContent::Text(_) => BlockKind::Text,
            BlockContent::Testimonial(_) => BlockKind::Testimonial,
            BlockContent::Event(_) => BlockKind::Event,
            BlockContent::Subscription(_) => BlockKind::Subscription,
            BlockContent::Whatsapp(_) => BlockKind::Whatsapp,
            BlockContent::Timezone(_) => BlockKind::Timezone,
            BlockContent::Location(_) => BlockKind::Location,
            BlockContent::Calendar(_) => BlockKind::Calendar,
            BlockContent::Image(_) => BlockKind::Image,
        }
    }
}

/// Introduction text (`about`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutContent {
    pub content: Option<String>,
}

/// Titled free-form text (`text`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextContent {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// One entry in an education / experience / achievement timeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineEntry {
    pub title: Option<String>,
    /// Which side of the timeline the entry hangs on; rendered verbatim as a
    /// badge.
    pub side: Option<String>,
    pub description: Option<String>,
}

/// Ordered entries (`education`, `experience`, `achievement`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineContent {
    pub entries: Vec<TimelineEntry>,
}

/// Social handle (`social`). Platform stays raw; unrecognized platforms
/// render nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialContent {
    pub platform: Option<String>,
    pub username: Option<String>,
}

/// Contact affordance (`contact`). `type` stays raw; unknown types render
/// with the email icon.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactContent {
    #[serde(rename = "type")]
    pub contact_type: Option<String>,
    pub label: Option<String>,
    pub value: Option<String>,
}

/// Outbound link (`link`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkContent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Gallery (`gallery`) — upload pipeline not implemented yet, renders a
/// "coming soon" badge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryContent {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Media embed (`video`, `audio`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaContent {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Quote with attribution (`testimonial`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialContent {
    pub quote: Option<String>,
    pub author: Option<String>,
    pub avatar: Option<String>,
    pub position: Option<String>,
}

/// Dated entry (`event`, `calendar`). Events use `time`; calendars use
/// `end_date` for ranges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventContent {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Email signup (`subscription`). `collect_name` stays raw (`"yes"`/`"no"`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubscriptionContent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub collect_name: Option<String>,
    pub button_text: Option<String>,
}

/// WhatsApp contact card (`whatsapp`). `phone_number` is the one required
/// field — without it the block renders nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhatsappContent {
    pub phone_number: Option<String>,
    pub message: Option<String>,
    pub contact_name: Option<String>,
    pub designation: Option<String>,
    pub button_text: Option<String>,
    pub description: Option<String>,
}

/// Timezone clock (`timezone`). `format` stays raw (`"12"`/`"24"`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimezoneContent {
    pub timezone: Option<String>,
    pub format: Option<String>,
    pub custom_label: Option<String>,
}

/// Physical location (`location`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationContent {
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Single image (`image`). `size` stays raw; unknown sizes render medium.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageContent {
    pub image_url: Option<String>,
    pub size: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Totality ────────────────────────────────────────────────────────

    #[test]
    fn test_parse_is_total_over_all_kinds() {
        let payloads = [
            json!({}),
            json!(null),
            json!("not an object"),
            json!(42),
            json!([1, 2, 3]),
            json!({"entries": "not a list"}),
        ];
        for kind in BlockKind::ALL {
            for payload in &payloads {
                let content = BlockContent::parse(kind, payload);
                assert_eq!(content.kind(), kind);
            }
        }
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let value = json!({"content": "hi", "legacyField": true, "v2Stuff": [1]});
        let BlockContent::About(about) = BlockContent::parse(BlockKind::About, &value) else {
            panic!("wrong variant");
        };
        assert_eq!(about.content.as_deref(), Some("hi"));
    }

    #[test]
    fn test_malformed_payload_degrades_to_empty() {
        let value = json!({"entries": 7});
        let BlockContent::Education(timeline) = BlockContent::parse(BlockKind::Education, &value)
        else {
            panic!("wrong variant");
        };
        assert!(timeline.entries.is_empty());
    }

    // ── Field mapping ───────────────────────────────────────────────────

    #[test]
    fn test_camel_case_fields() {
        let value = json!({
            "phoneNumber": "+1 555",
            "contactName": "Ada",
            "buttonText": "Chat",
        });
        let BlockContent::Whatsapp(wa) = BlockContent::parse(BlockKind::Whatsapp, &value) else {
            panic!("wrong variant");
        };
        assert_eq!(wa.phone_number.as_deref(), Some("+1 555"));
        assert_eq!(wa.contact_name.as_deref(), Some("Ada"));
        assert_eq!(wa.button_text.as_deref(), Some("Chat"));
    }

    #[test]
    fn test_contact_type_rename() {
        let value = json!({"type": "phone", "label": "Work", "value": "+1 555"});
        let BlockContent::Contact(contact) = BlockContent::parse(BlockKind::Contact, &value)
        else {
            panic!("wrong variant");
        };
        assert_eq!(contact.contact_type.as_deref(), Some("phone"));
        assert_eq!(contact.label.as_deref(), Some("Work"));
    }

    #[test]
    fn test_event_end_date_camel_case() {
        let value = json!({"date": "2026-03-01", "endDate": "2026-03-03"});
        let BlockContent::Calendar(event) = BlockContent::parse(BlockKind::Calendar, &value)
        else {
            panic!("wrong variant");
        };
        assert_eq!(event.date.as_deref(), Some("2026-03-01"));
        assert_eq!(event.end_date.as_deref(), Some("2026-03-03"));
    }

    #[test]
    fn test_timeline_entries() {
        let value = json!({"entries": [
            {"title": "BSc", "side": "left"},
            {"title": "MSc", "side": "right", "description": "Systems"},
        ]});
        let BlockContent::Education(timeline) = BlockContent::parse(BlockKind::Education, &value)
        else {
            panic!("wrong variant");
        };
        assert_eq!(timeline.entries.len(), 2);
        assert_eq!(timeline.entries[0].title.as_deref(), Some("BSc"));
        assert_eq!(timeline.entries[1].description.as_deref(), Some("Systems"));
    }

    #[test]
    fn test_enumish_fields_stay_raw() {
        // A bad size tag must not throw away the rest of the payload.
        let value = json!({"imageUrl": "https://x/pic.png", "size": "colossal"});
        let BlockContent::Image(image) = BlockContent::parse(BlockKind::Image, &value) else {
            panic!("wrong variant");
        };
        assert_eq!(image.image_url.as_deref(), Some("https://x/pic.png"));
        assert_eq!(image.size.as_deref(), Some("colossal"));
    }

    #[test]
    fn test_video_and_audio_share_media_shape() {
        let value = json!({"title": "Demo", "url": "https://x/v.mp4"});
        let video = BlockContent::parse(BlockKind::Video, &value);
        let audio = BlockContent::parse(BlockKind::Audio, &value);
        assert_eq!(video.kind(), BlockKind::Video);
        assert_eq!(audio.kind(), BlockKind::Audio);
    }

    #[test]
    fn test_serde_roundtrip_skips_nothing() {
        let wa = WhatsappContent {
            phone_number: Some("+1 555".into()),
            message: Some("Hi".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&wa).unwrap();
        let parsed: WhatsappContent = serde_json::from_value(json).unwrap();
        assert_eq!(wa, parsed);
    }
}

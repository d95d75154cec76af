//! Compact block previews for the editing list.
//!
//! One rendering rule per canonical kind, dispatched off the normalized
//! tag. Every rule is total: missing fields fall back to the documented
//! placeholder text, and an unrecognized kind renders the fixed
//! "Unknown block type" fragment instead of failing the list.

use meishi_types::{
    AboutContent, Block, BlockContent, ClockFormat, CollectName, ContactContent, ContactKind,
    EventContent, GalleryContent, ImageContent, LinkContent, LocationContent, MediaContent,
    SocialContent, SocialPlatform, SubscriptionContent, TestimonialContent, TextContent,
    TimelineContent, TimezoneContent, WhatsappContent,
};
use tracing::debug;

use crate::datefmt::format_date;
use crate::fragment::{Fragment, IconKind};

/// How many timeline entries a preview shows before collapsing to a count.
pub(crate) const TIMELINE_PREVIEW_LEN: usize = 2;

/// Render the compact preview for one block. Pure and total.
pub fn render_summary(block: &Block) -> Fragment {
    let Some(kind) = block.kind() else {
        debug!(kind = %block.kind, "unknown block kind in summary");
        return unknown_kind(&block.kind);
    };
    match BlockContent::parse(kind, &block.content) {
        BlockContent::About(about) => about_summary(&about),
        BlockContent::Education(timeline) => {
            timeline_summary(&timeline, IconKind::GraduationCap, "Education Timeline", "education")
        }
        BlockContent::Experience(timeline) => {
            timeline_summary(&timeline, IconKind::Briefcase, "Experience Timeline", "experience")
        }
        BlockContent::Social(social) => social_summary(&social),
        BlockContent::Contact(contact) => contact_summary(&contact),
        BlockContent::Link(link) => link_summary(&link),
        BlockContent::Gallery(gallery) => gallery_summary(&gallery),
        BlockContent::Video(media) => media_summary(&media, "Video"),
        BlockContent::Audio(media) => media_summary(&media, "Audio"),
        BlockContent::Achievement(timeline) => achievement_summary(&timeline),
        BlockContent::Text(text) => text_summary(&text),
        BlockContent::Testimonial(t) => testimonial_summary(&t),
        BlockContent::Event(event) => event_summary(&event),
        BlockContent::Subscription(sub) => subscription_summary(&sub),
        BlockContent::Whatsapp(wa) => whatsapp_summary(&wa),
        BlockContent::Timezone(tz) => timezone_summary(&tz),
        BlockContent::Location(loc) => location_summary(&loc),
        BlockContent::Calendar(event) => calendar_summary(&event),
        BlockContent::Image(image) => image_summary(&image),
    }
}

/// The fixed placeholder for tags outside the catalog.
pub(crate) fn unknown_kind(raw: &str) -> Fragment {
    Fragment::text_with(format!("Unknown block type: {raw}"), "muted")
}

/// The fallback policy for optional text fields: absent and empty both read
/// as "not set".
pub(crate) fn text_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().filter(|s| !s.is_empty()).unwrap_or(fallback)
}

fn header(icon: IconKind, label: impl Into<String>) -> Fragment {
    Fragment::row(vec![
        Fragment::Icon { icon },
        Fragment::text_with(label, "font-medium"),
    ])
}

fn muted(text: impl Into<String>) -> Fragment {
    Fragment::text_with(text, "muted")
}

fn about_summary(about: &AboutContent) -> Fragment {
    muted(text_or(&about.content, "No content added yet"))
}

fn timeline_summary(
    timeline: &TimelineContent,
    icon: IconKind,
    heading: &str,
    noun: &str,
) -> Fragment {
    let mut items = vec![header(icon, heading)];
    if timeline.entries.is_empty() {
        items.push(muted(format!("No {noun} entries added yet")));
        return Fragment::stack(items);
    }
    for entry in timeline.entries.iter().take(TIMELINE_PREVIEW_LEN) {
        let title = text_or(&entry.title, "Untitled");
        let mut row = vec![Fragment::text(title)];
        if let Some(side) = entry.side.as_deref().filter(|s| !s.is_empty()) {
            row.push(Fragment::badge_outline(side));
        }
        items.push(Fragment::row(row));
    }
    let remainder = timeline.entries.len().saturating_sub(TIMELINE_PREVIEW_LEN);
    if remainder > 0 {
        items.push(muted(format!("+{remainder} more entries")));
    }
    Fragment::stack(items)
}

fn social_summary(social: &SocialContent) -> Fragment {
    // Unrecognized platform renders nothing.
    let Some(platform) = social
        .platform
        .as_deref()
        .and_then(SocialPlatform::from_str)
    else {
        return Fragment::Empty;
    };
    Fragment::row(vec![
        Fragment::badge(platform.glyph()),
        Fragment::stack(vec![
            Fragment::text_with(platform.display_name(), "font-medium"),
            muted(text_or(&social.username, "No username set")),
        ]),
    ])
}

fn contact_summary(contact: &ContactContent) -> Fragment {
    // Unknown contact types get the email icon.
    let kind = contact
        .contact_type
        .as_deref()
        .and_then(ContactKind::from_str)
        .unwrap_or_default();
    let icon = contact_icon(kind);
    Fragment::row(vec![
        Fragment::Icon { icon },
        Fragment::stack(vec![
            Fragment::text_with(text_or(&contact.label, "Contact"), "font-medium"),
            muted(text_or(&contact.value, "No value set")),
        ]),
    ])
}

pub(crate) fn contact_icon(kind: ContactKind) -> IconKind {
    match kind {
        ContactKind::Email => IconKind::Mail,
        ContactKind::Phone => IconKind::Phone,
        ContactKind::Address => IconKind::MapPin,
        ContactKind::Website => IconKind::ExternalLink,
    }
}

fn link_summary(link: &LinkContent) -> Fragment {
    let mut items = vec![header(
        IconKind::ExternalLink,
        text_or(&link.title, "Untitled Link"),
    )];
    if let Some(description) = link.description.as_deref().filter(|s| !s.is_empty()) {
        items.push(muted(description));
    }
    Fragment::stack(items)
}

fn gallery_summary(gallery: &GalleryContent) -> Fragment {
    Fragment::stack(vec![
        Fragment::text_with(text_or(&gallery.title, "Gallery"), "font-medium"),
        muted(text_or(&gallery.description, "No description added")),
        Fragment::badge("Coming soon - Image upload"),
    ])
}

fn media_summary(media: &MediaContent, fallback_title: &str) -> Fragment {
    let mut items = vec![Fragment::text_with(
        text_or(&media.title, fallback_title),
        "font-medium",
    )];
    if let Some(url) = media.url.as_deref().filter(|s| !s.is_empty()) {
        items.push(Fragment::text_with(url, "font-mono muted"));
    }
    if let Some(description) = media.description.as_deref().filter(|s| !s.is_empty()) {
        items.push(muted(description));
    }
    Fragment::stack(items)
}

fn achievement_summary(timeline: &TimelineContent) -> Fragment {
    let count = timeline.entries.len();
    let line = match count {
        0 => "No achievements added yet".to_string(),
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    };
    Fragment::stack(vec![header(IconKind::Star, "Achievement Block"), muted(line)])
}

fn text_summary(text: &TextContent) -> Fragment {
    Fragment::stack(vec![
        Fragment::text_with(text_or(&text.title, "Text Block"), "font-medium"),
        muted(text_or(&text.content, "No content added")),
    ])
}

fn testimonial_summary(t: &TestimonialContent) -> Fragment {
    let mut items = vec![header(IconKind::Star, "Testimonial")];
    if let Some(quote) = t.quote.as_deref().filter(|s| !s.is_empty()) {
        items.push(Fragment::Quote {
            text: quote.to_string(),
            class: Some("muted".to_string()),
        });
    }
    if let Some(author) = t.author.as_deref().filter(|s| !s.is_empty()) {
        let mut row = vec![
            Fragment::Avatar {
                url: t.avatar.clone().filter(|s| !s.is_empty()),
                initials: author_initials(author),
            },
            Fragment::text_with(author, "font-medium"),
        ];
        if let Some(position) = t.position.as_deref().filter(|s| !s.is_empty()) {
            row.push(muted(position));
        }
        items.push(Fragment::row(row));
    }
    Fragment::stack(items)
}

/// First letter of each name word — the avatar fallback when no image is set.
pub(crate) fn author_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

fn event_summary(event: &EventContent) -> Fragment {
    let mut items = vec![header(IconKind::Calendar, text_or(&event.title, "Event"))];
    if let Some(date) = event.date.as_deref().filter(|s| !s.is_empty()) {
        let mut line = format_date(date);
        if let Some(time) = event.time.as_deref().filter(|s| !s.is_empty()) {
            line.push_str(&format!(" at {time}"));
        }
        items.push(muted(line));
    }
    if let Some(location) = event.location.as_deref().filter(|s| !s.is_empty()) {
        items.push(Fragment::row(vec![
            Fragment::Icon {
                icon: IconKind::MapPin,
            },
            muted(location),
        ]));
    }
    Fragment::stack(items)
}

fn subscription_summary(sub: &SubscriptionContent) -> Fragment {
    let mut items = vec![header(
        IconKind::Mail,
        text_or(&sub.title, "Email Subscription"),
    )];
    if let Some(description) = sub.description.as_deref().filter(|s| !s.is_empty()) {
        items.push(muted(description));
    }
    let collect = sub
        .collect_name
        .as_deref()
        .and_then(CollectName::from_str)
        .unwrap_or_default();
    let collect_badge = match collect {
        CollectName::Yes => "With name",
        CollectName::No => "Email only",
    };
    items.push(Fragment::row(vec![
        Fragment::badge(collect_badge),
        Fragment::badge_outline(text_or(&sub.button_text, "Subscribe")),
    ]));
    Fragment::stack(items)
}

fn whatsapp_summary(wa: &WhatsappContent) -> Fragment {
    Fragment::row(vec![
        Fragment::Icon {
            icon: IconKind::Whatsapp,
        },
        Fragment::stack(vec![
            Fragment::text_with("WhatsApp", "font-medium"),
            muted(text_or(&wa.phone_number, "No number set")),
        ]),
    ])
}

fn timezone_summary(tz: &TimezoneContent) -> Fragment {
    let format = tz
        .format
        .as_deref()
        .and_then(ClockFormat::from_str)
        .unwrap_or_default();
    let mut items = vec![
        header(IconKind::Clock, "Timezone Clock"),
        muted(format!("Timezone: {}", text_or(&tz.timezone, "UTC"))),
        muted(format!("Format: {}", format.label())),
    ];
    if let Some(label) = tz.custom_label.as_deref().filter(|s| !s.is_empty()) {
        items.push(muted(format!("Label: {label}")));
    }
    items.push(Fragment::badge("Live Clock"));
    Fragment::stack(items)
}

fn location_summary(loc: &LocationContent) -> Fragment {
    let mut items = vec![header(IconKind::MapPin, "Location")];
    let lines: Vec<&str> = [loc.address.as_deref(), loc.city.as_deref(), loc.country.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    if lines.is_empty() {
        items.push(muted("No location set"));
    } else {
        for line in lines {
            items.push(muted(line));
        }
    }
    Fragment::stack(items)
}

fn calendar_summary(event: &EventContent) -> Fragment {
    let mut items = vec![header(
        IconKind::Calendar,
        text_or(&event.title, "Calendar Event"),
    )];
    if let Some(date) = event.date.as_deref().filter(|s| !s.is_empty()) {
        let mut line = format_date(date);
        if let Some(end) = event.end_date.as_deref().filter(|s| !s.is_empty()) {
            line.push_str(&format!(" - {}", format_date(end)));
        }
        items.push(muted(line));
    }
    if let Some(description) = event.description.as_deref().filter(|s| !s.is_empty()) {
        items.push(muted(description));
    }
    let no_title = event.title.as_deref().is_none_or(str::is_empty);
    let no_date = event.date.as_deref().is_none_or(str::is_empty);
    if no_title && no_date {
        items.push(muted("No event set"));
    }
    Fragment::stack(items)
}

fn image_summary(image: &ImageContent) -> Fragment {
    let size = image
        .size
        .as_deref()
        .and_then(meishi_types::ImageSize::from_str)
        .unwrap_or_default();
    let body = match image.image_url.as_deref().filter(|s| !s.is_empty()) {
        Some(url) => Fragment::Image {
            url: url.to_string(),
            alt: String::new(),
            class: Some("w-16 h-16 object-cover rounded border".to_string()),
        },
        None => Fragment::ImagePlaceholder {
            class: Some("w-16 h-16".to_string()),
        },
    };
    Fragment::stack(vec![
        header(IconKind::Image, "Image"),
        body,
        Fragment::badge(format!("{} size", size.as_str())),
    ])
}

// ============================================================================
// Tests
// ============================================================================

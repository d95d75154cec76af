//! Themed public-page rendering for one block.
//!
//! Same dispatch and fallback policy as the summary renderer, but the output
//! is the full card shown on the public profile: block title in chrome,
//! theme class tokens on every styled node, complete entry lists (the
//! first-2-then-count truncation belongs to the compact preview), and live
//! link affordances (wa.me deep links, contact mailto/tel, social profile
//! URLs).
//!
//! The [`ThemeClassSet`] is resolved once by the caller and threaded through
//! explicitly — this function never looks a theme up itself.

use meishi_theme::ThemeClassSet;
use meishi_types::{
    Block, BlockContent, ClockFormat, CollectName, ContactContent, ContactKind, EventContent,
    GalleryContent, ImageContent, ImageSize, LinkContent, LocationContent, MediaContent,
    SocialContent, SocialPlatform, SubscriptionContent, TestimonialContent, TextContent,
    TimelineContent, TimezoneContent, WhatsappContent,
};

use crate::datefmt::format_date;
use crate::fragment::{Fragment, IconKind};
use crate::summary::{author_initials, contact_icon, text_or, unknown_kind};
use crate::whatsapp::wa_link;

/// Render the full public view of one block. Pure and total; a block that
/// has nothing to show (social with an unknown platform, whatsapp without a
/// number) renders [`Fragment::Empty`] so the composer can skip it.
pub fn render_full(block: &Block, classes: &ThemeClassSet) -> Fragment {
    let Some(kind) = block.kind() else {
        return card(classes, None, vec![unknown_kind(&block.kind)]);
    };
    let title = block.title.as_deref().filter(|s| !s.is_empty());
    match BlockContent::parse(kind, &block.content) {
        BlockContent::About(about) => card(
            classes,
            title,
            vec![body_text(text_or(&about.content, "No content added yet"), classes)],
        ),
        BlockContent::Education(timeline) => card(
            classes,
            title,
            timeline_full(&timeline, IconKind::GraduationCap, "Education", "education", classes),
        ),
        BlockContent::Experience(timeline) => card(
            classes,
            title,
            timeline_full(&timeline, IconKind::Briefcase, "Experience", "experience", classes),
        ),
        BlockContent::Social(social) => social_full(&social, title, classes),
        BlockContent::Contact(contact) => card(classes, title, contact_full(&contact, classes)),
        BlockContent::Link(link) => card(classes, title, link_full(&link, classes)),
        BlockContent::Gallery(gallery) => card(classes, title, gallery_full(&gallery, classes)),
        BlockContent::Video(media) => card(
            classes,
            title,
            media_full(&media, IconKind::Video, "Video", classes),
        ),
        BlockContent::Audio(media) => card(
            classes,
            title,
            media_full(&media, IconKind::Music, "Audio", classes),
        ),
        BlockContent::Achievement(timeline) => {
            card(classes, title, achievement_full(&timeline, classes))
        }
        BlockContent::Text(text) => card(classes, title, text_full(&text, classes)),
        BlockContent::Testimonial(t) => card(classes, title, testimonial_full(&t, classes)),
        BlockContent::Event(event) => card(classes, title, event_full(&event, classes)),
        BlockContent::Subscription(sub) => card(classes, title, subscription_full(&sub, classes)),
        BlockContent::Whatsapp(wa) => whatsapp_full(&wa, title, classes),
        BlockContent::Timezone(tz) => card(classes, title, timezone_full(&tz, classes)),
        BlockContent::Location(loc) => card(classes, title, location_full(&loc, classes)),
        BlockContent::Calendar(event) => card(classes, title, calendar_full(&event, classes)),
        BlockContent::Image(image) => card(classes, title, image_full(&image)),
    }
}

/// Wrap body items in the themed card, with the block title in chrome.
fn card(classes: &ThemeClassSet, title: Option<&str>, mut items: Vec<Fragment>) -> Fragment {
    if let Some(title) = title {
        items.insert(0, Fragment::heading(title, classes.heading.clone()));
    }
    Fragment::card(classes.card.clone(), items)
}

fn body_text(text: impl Into<String>, classes: &ThemeClassSet) -> Fragment {
    Fragment::text_with(text, classes.body.clone())
}

fn muted_text(text: impl Into<String>, classes: &ThemeClassSet) -> Fragment {
    Fragment::text_with(text, classes.muted.clone())
}

fn heading_row(icon: IconKind, label: &str, classes: &ThemeClassSet) -> Fragment {
    Fragment::row(vec![
        Fragment::Icon { icon },
        Fragment::heading(label, classes.heading.clone()),
    ])
}

fn timeline_full(
    timeline: &TimelineContent,
    icon: IconKind,
    label: &str,
    noun: &str,
    classes: &ThemeClassSet,
) -> Vec<Fragment> {
    let mut items = vec![heading_row(icon, label, classes)];
    if timeline.entries.is_empty() {
        items.push(muted_text(format!("No {noun} entries added yet"), classes));
        return items;
    }
    for entry in &timeline.entries {
        let mut row = vec![body_text(text_or(&entry.title, "Untitled"), classes)];
        if let Some(side) = entry.side.as_deref().filter(|s| !s.is_empty()) {
            row.push(Fragment::badge_outline(side));
        }
        let mut entry_items = vec![Fragment::row(row)];
        if let Some(description) = entry.description.as_deref().filter(|s| !s.is_empty()) {
            entry_items.push(muted_text(description, classes));
        }
        items.push(Fragment::stack(entry_items));
    }
    items
}

fn social_full(social: &SocialContent, title: Option<&str>, classes: &ThemeClassSet) -> Fragment {
    // Unrecognized platform renders nothing at all, not an empty card.
    let Some(platform) = social
        .platform
        .as_deref()
        .and_then(SocialPlatform::from_str)
    else {
        return Fragment::Empty;
    };
    let username = social.username.as_deref().unwrap_or_default();
    let mut items = vec![Fragment::row(vec![
        Fragment::badge(platform.glyph()),
        Fragment::heading(platform.display_name(), classes.heading.clone()),
    ])];
    if username.is_empty() {
        items.push(muted_text("No username set", classes));
    } else {
        items.push(Fragment::Link {
            label: format!("@{username}"),
            href: platform.profile_url(username),
            class: Some(classes.primary.clone()),
        });
    }
    card(classes, title, items)
}

fn contact_full(contact: &ContactContent, classes: &ThemeClassSet) -> Vec<Fragment> {
    let kind = contact
        .contact_type
        .as_deref()
        .and_then(ContactKind::from_str)
        .unwrap_or_default();
    let label = text_or(&contact.label, "Contact");
    let mut items = vec![heading_row(contact_icon(kind), label, classes)];
    match contact.value.as_deref().filter(|s| !s.is_empty()) {
        Some(value) => {
            let href = match kind {
                ContactKind::Email => Some(format!("mailto:{value}")),
                ContactKind::Phone => Some(format!("tel:{value}")),
                ContactKind::Website => Some(external_url(value)),
                ContactKind::Address => None,
            };
            items.push(match href {
                Some(href) => Fragment::Link {
                    label: value.to_string(),
                    href,
                    class: Some(classes.primary.clone()),
                },
                None => body_text(value, classes),
            });
        }
        None => items.push(muted_text("No value set", classes)),
    }
    items
}

fn link_full(link: &LinkContent, classes: &ThemeClassSet) -> Vec<Fragment> {
    let title = text_or(&link.title, "Untitled Link");
    let mut items = Vec::new();
    match link.url.as_deref().filter(|s| !s.is_empty()) {
        Some(url) => items.push(Fragment::row(vec![
            Fragment::Icon {
                icon: IconKind::ExternalLink,
            },
            Fragment::Link {
                label: title.to_string(),
                href: external_url(url),
                class: Some(classes.heading.clone()),
            },
        ])),
        None => items.push(heading_row(IconKind::ExternalLink, title, classes)),
    }
    if let Some(description) = link.description.as_deref().filter(|s| !s.is_empty()) {
        items.push(muted_text(description, classes));
    }
    items
}

fn gallery_full(gallery: &GalleryContent, classes: &ThemeClassSet) -> Vec<Fragment> {
    vec![
        Fragment::heading(text_or(&gallery.title, "Gallery"), classes.heading.clone()),
        muted_text(text_or(&gallery.description, "No description added"), classes),
        Fragment::badge("Coming soon - Image upload"),
    ]
}

fn media_full(
    media: &MediaContent,
    icon: IconKind,
    fallback: &str,
    classes: &ThemeClassSet,
) -> Vec<Fragment> {
    let mut items = vec![heading_row(icon, text_or(&media.title, fallback), classes)];
    if let Some(url) = media.url.as_deref().filter(|s| !s.is_empty()) {
        items.push(Fragment::Link {
            label: url.to_string(),
            href: external_url(url),
            class: Some(classes.primary.clone()),
        });
    }
    if let Some(description) = media.description.as_deref().filter(|s| !s.is_empty()) {
        items.push(muted_text(description, classes));
    }
    items
}

fn achievement_full(timeline: &TimelineContent, classes: &ThemeClassSet) -> Vec<Fragment> {
    let mut items = vec![heading_row(IconKind::Star, "Achievements", classes)];
    if timeline.entries.is_empty() {
        items.push(muted_text("No achievements added yet", classes));
        return items;
    }
    for entry in &timeline.entries {
        let mut entry_items = vec![body_text(text_or(&entry.title, "Untitled"), classes)];
        if let Some(description) = entry.description.as_deref().filter(|s| !s.is_empty()) {
            entry_items.push(muted_text(description, classes));
        }
        items.push(Fragment::stack(entry_items));
    }
    items
}

fn text_full(text: &TextContent, classes: &ThemeClassSet) -> Vec<Fragment> {
    let mut items = Vec::new();
    if let Some(title) = text.title.as_deref().filter(|s| !s.is_empty()) {
        items.push(Fragment::heading(title, classes.heading.clone()));
    }
    items.push(body_text(text_or(&text.content, "No content added"), classes));
    items
}

fn testimonial_full(t: &TestimonialContent, classes: &ThemeClassSet) -> Vec<Fragment> {
    let mut items = Vec::new();
    if let Some(quote) = t.quote.as_deref().filter(|s| !s.is_empty()) {
        items.push(Fragment::Quote {
            text: quote.to_string(),
            class: Some(classes.body.clone()),
        });
    }
    if let Some(author) = t.author.as_deref().filter(|s| !s.is_empty()) {
        let mut row = vec![
            Fragment::Avatar {
                url: t.avatar.clone().filter(|s| !s.is_empty()),
                initials: author_initials(author),
            },
            body_text(author, classes),
        ];
        if let Some(position) = t.position.as_deref().filter(|s| !s.is_empty()) {
            row.push(muted_text(position, classes));
        }
        items.push(Fragment::row(row));
    }
    if items.is_empty() {
        items.push(muted_text("No testimonial added yet", classes));
    }
    items
}

fn event_full(event: &EventContent, classes: &ThemeClassSet) -> Vec<Fragment> {
    let mut items = vec![heading_row(IconKind::Calendar, text_or(&event.title, "Event"), classes)];
    if let Some(date) = event.date.as_deref().filter(|s| !s.is_empty()) {
        let mut line = format_date(date);
        if let Some(time) = event.time.as_deref().filter(|s| !s.is_empty()) {
            line.push_str(&format!(" at {time}"));
        }
        items.push(muted_text(line, classes));
    }
    if let Some(location) = event.location.as_deref().filter(|s| !s.is_empty()) {
        items.push(Fragment::row(vec![
            Fragment::Icon {
                icon: IconKind::MapPin,
            },
            muted_text(location, classes),
        ]));
    }
    if let Some(description) = event.description.as_deref().filter(|s| !s.is_empty()) {
        items.push(body_text(description, classes));
    }
    items
}

fn subscription_full(sub: &SubscriptionContent, classes: &ThemeClassSet) -> Vec<Fragment> {
    let collect = sub
        .collect_name
        .as_deref()
        .and_then(CollectName::from_str)
        .unwrap_or_default();
    let mut items = vec![heading_row(
        IconKind::Mail,
        text_or(&sub.title, "Email Subscription"),
        classes,
    )];
    if let Some(description) = sub.description.as_deref().filter(|s| !s.is_empty()) {
        items.push(muted_text(description, classes));
    }
    items.push(Fragment::row(vec![
        Fragment::badge(match collect {
            CollectName::Yes => "With name",
            CollectName::No => "Email only",
        }),
        Fragment::badge_outline(text_or(&sub.button_text, "Subscribe")),
    ]));
    items
}

fn whatsapp_full(wa: &WhatsappContent, title: Option<&str>, classes: &ThemeClassSet) -> Fragment {
    // The number is the whole point of the block; without it, render nothing.
    let Some(phone) = wa.phone_number.as_deref().filter(|s| !s.is_empty()) else {
        return Fragment::Empty;
    };
    let mut identity = vec![Fragment::heading(
        title.unwrap_or("WhatsApp"),
        classes.heading.clone(),
    )];
    let contact_line = match (
        wa.contact_name.as_deref().filter(|s| !s.is_empty()),
        wa.designation.as_deref().filter(|s| !s.is_empty()),
    ) {
        (Some(name), Some(designation)) => Some(format!("{name} — {designation}")),
        (Some(name), None) => Some(name.to_string()),
        (None, Some(designation)) => Some(designation.to_string()),
        (None, None) => None,
    };
    if let Some(line) = contact_line {
        identity.push(muted_text(line, classes));
    }
    identity.push(Fragment::text_with(phone, "font-mono"));
    if let Some(description) = wa.description.as_deref().filter(|s| !s.is_empty()) {
        identity.push(muted_text(description, classes));
    }
    let href = wa_link(phone, wa.message.as_deref());
    let items = vec![
        Fragment::row(vec![
            Fragment::Icon {
                icon: IconKind::Whatsapp,
            },
            Fragment::stack(identity),
        ]),
        Fragment::Link {
            label: wa
                .button_text
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or("Open in WhatsApp")
                .to_string(),
            href,
            class: Some(classes.primary.clone()),
        },
    ];
    Fragment::card(classes.card.clone(), items)
}

fn timezone_full(tz: &TimezoneContent, classes: &ThemeClassSet) -> Vec<Fragment> {
    let format = tz
        .format
        .as_deref()
        .and_then(ClockFormat::from_str)
        .unwrap_or_default();
    let timezone = text_or(&tz.timezone, "UTC");
    let label = text_or(&tz.custom_label, timezone);
    vec![
        heading_row(IconKind::Clock, label, classes),
        muted_text(format!("{timezone} · {}", format.label()), classes),
        Fragment::badge("Live Clock"),
    ]
}

fn location_full(loc: &LocationContent, classes: &ThemeClassSet) -> Vec<Fragment> {
    let mut items = vec![heading_row(IconKind::MapPin, "Location", classes)];
    let lines: Vec<&str> = [loc.address.as_deref(), loc.city.as_deref(), loc.country.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    if lines.is_empty() {
        items.push(muted_text("No location set", classes));
    } else {
        for line in lines {
            items.push(body_text(line, classes));
        }
    }
    items
}

fn calendar_full(event: &EventContent, classes: &ThemeClassSet) -> Vec<Fragment> {
    let mut items = vec![heading_row(
        IconKind::Calendar,
        text_or(&event.title, "Calendar Event"),
        classes,
    )];
    if let Some(date) = event.date.as_deref().filter(|s| !s.is_empty()) {
        let mut line = format_date(date);
        if let Some(end) = event.end_date.as_deref().filter(|s| !s.is_empty()) {
            line.push_str(&format!(" - {}", format_date(end)));
        }
        items.push(muted_text(line, classes));
    }
    if let Some(description) = event.description.as_deref().filter(|s| !s.is_empty()) {
        items.push(body_text(description, classes));
    }
    let no_title = event.title.as_deref().is_none_or(str::is_empty);
    let no_date = event.date.as_deref().is_none_or(str::is_empty);
    if no_title && no_date {
        items.push(muted_text("No event set", classes));
    }
    items
}

fn image_full(image: &ImageContent) -> Vec<Fragment> {
    let size = image
        .size
        .as_deref()
        .and_then(ImageSize::from_str)
        .unwrap_or_default();
    let size_class = image_size_class(size);
    match image.image_url.as_deref().filter(|s| !s.is_empty()) {
        Some(url) => vec![Fragment::Image {
            url: url.to_string(),
            alt: "Block image".to_string(),
            class: Some(format!("{size_class} object-cover rounded")),
        }],
        None => vec![Fragment::ImagePlaceholder {
            class: Some(size_class.to_string()),
        }],
    }
}

/// The four fixed dimension classes for image size presets.
fn image_size_class(size: ImageSize) -> &'static str {
    match size {
        ImageSize::Small => "w-32 h-32",
        ImageSize::Medium => "w-48 h-48",
        ImageSize::Large => "w-64 h-64",
        ImageSize::Full => "w-full h-auto",
    }
}

/// Prefix bare domains so links leave the page instead of resolving
/// relative to it.
pub(crate) fn external_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use meishi_theme::Theme;
    use meishi_types::BlockKind;
    use serde_json::json;

    fn classes() -> ThemeClassSet {
        ThemeClassSet::derive(Theme::default_theme())
    }

    fn block(kind: &str, content: serde_json::Value) -> Block {
        Block::new(kind).with_content(content)
    }

    fn render(kind: &str, content: serde_json::Value) -> Fragment {
        render_full(&block(kind, content), &classes())
    }

    // ── Totality ────────────────────────────────────────────────────────

    #[test]
    fn test_all_kinds_render_with_empty_content() {
        for kind in BlockKind::ALL {
            let f = render(kind.as_str(), json!({}));
            match kind {
                // These two render nothing when their key field is absent.
                BlockKind::Social | BlockKind::Whatsapp => assert!(f.is_empty(), "{kind}"),
                _ => assert!(!f.is_empty(), "{kind} rendered empty"),
            }
        }
    }

    #[test]
    fn test_unknown_kind_renders_placeholder_card() {
        let f = render("hologram", json!({}));
        assert!(f.to_plain().contains("Unknown block type: hologram"));
    }

    #[test]
    fn test_garbage_payload_never_panics() {
        for kind in BlockKind::ALL {
            let _ = render(kind.as_str(), json!("garbage"));
            let _ = render(kind.as_str(), json!([1, 2, 3]));
            let _ = render(kind.as_str(), json!({"entries": {"not": "a list"}}));
        }
    }

    // ── Title chrome / theme classes ────────────────────────────────────

    #[test]
    fn test_block_title_rendered_in_chrome() {
        let f = render_full(
            &block("about", json!({"content": "hi"})).with_title("About Me"),
            &classes(),
        );
        assert_eq!(f.to_plain(), "About Me\nhi");
    }

    #[test]
    fn test_card_carries_theme_card_class() {
        let f = render("about", json!({}));
        let Fragment::Card { class, .. } = &f else {
            panic!("full render should produce a card");
        };
        assert_eq!(*class, classes().card);
    }

    #[test]
    fn test_different_theme_produces_different_classes() {
        let dark = ThemeClassSet::derive(Theme::resolve("dark"));
        let f = render_full(&block("about", json!({})), &dark);
        let Fragment::Card { class, .. } = &f else {
            panic!("not a card");
        };
        assert!(class.contains("bg-gray-800/80"));
    }

    // ── Whatsapp deep link ──────────────────────────────────────────────

    #[test]
    fn test_whatsapp_link_no_message() {
        let f = render("whatsapp", json!({"phoneNumber": "+1 (555) 123-4567"}));
        let json = serde_json::to_value(&f).unwrap().to_string();
        assert!(json.contains("https://wa.me/15551234567"));
        assert!(!json.contains("?text="));
    }

    #[test]
    fn test_whatsapp_link_with_message() {
        let f = render(
            "whatsapp",
            json!({"phoneNumber": "+1 555 123 4567", "message": "Hi there"}),
        );
        let json = serde_json::to_value(&f).unwrap().to_string();
        assert!(json.contains("https://wa.me/15551234567?text=Hi%20there"));
    }

    #[test]
    fn test_whatsapp_absent_number_renders_nothing() {
        assert!(render("whatsapp", json!({})).is_empty());
        assert!(render("whatsapp", json!({"message": "Hi"})).is_empty());
    }

    #[test]
    fn test_whatsapp_legacy_alias_same_output() {
        let content = json!({"phoneNumber": "123", "message": "Yo"});
        assert_eq!(
            render("whatsapp", content.clone()),
            render("whatsap", content)
        );
    }

    #[test]
    fn test_whatsapp_contact_line() {
        let f = render(
            "whatsapp",
            json!({"phoneNumber": "123", "contactName": "Ada", "designation": "Engineer"}),
        );
        assert!(f.to_plain().contains("Ada — Engineer"));
    }

    // ── Image ───────────────────────────────────────────────────────────

    #[test]
    fn test_image_size_classes() {
        for (size, expected) in [
            ("small", "w-32 h-32"),
            ("medium", "w-48 h-48"),
            ("large", "w-64 h-64"),
            ("full", "w-full h-auto"),
        ] {
            let f = render("image", json!({"imageUrl": "https://x/p.png", "size": size}));
            let json = serde_json::to_value(&f).unwrap().to_string();
            assert!(json.contains(expected), "{size} missing {expected}");
        }
    }

    #[test]
    fn test_image_without_url_is_placeholder_not_image_node() {
        let f = render("image", json!({}));
        let json = serde_json::to_value(&f).unwrap().to_string();
        assert!(json.contains("image_placeholder"));
        assert!(!json.contains("\"url\""));
    }

    // ── Social ──────────────────────────────────────────────────────────

    #[test]
    fn test_social_links_to_profile() {
        let f = render("social", json!({"platform": "github", "username": "octocat"}));
        let json = serde_json::to_value(&f).unwrap().to_string();
        assert!(json.contains("https://github.com/octocat"));
        assert!(json.contains("@octocat"));
    }

    #[test]
    fn test_social_unknown_platform_empty() {
        assert!(render("social", json!({"platform": "myspace", "username": "x"})).is_empty());
    }

    // ── Contact affordances ─────────────────────────────────────────────

    #[test]
    fn test_contact_email_gets_mailto() {
        let f = render("contact", json!({"type": "email", "value": "a@b.c"}));
        let json = serde_json::to_value(&f).unwrap().to_string();
        assert!(json.contains("mailto:a@b.c"));
    }

    #[test]
    fn test_contact_phone_gets_tel() {
        let f = render("contact", json!({"type": "phone", "value": "+1 555"}));
        let json = serde_json::to_value(&f).unwrap().to_string();
        assert!(json.contains("tel:+1 555"));
    }

    #[test]
    fn test_contact_website_prefixes_https() {
        let f = render("contact", json!({"type": "website", "value": "example.com"}));
        let json = serde_json::to_value(&f).unwrap().to_string();
        assert!(json.contains("https://example.com"));
    }

    #[test]
    fn test_contact_address_is_plain_text() {
        let f = render("contact", json!({"type": "address", "value": "1 Main St"}));
        let json = serde_json::to_value(&f).unwrap().to_string();
        assert!(!json.contains("\"href\""));
        assert!(f.to_plain().contains("1 Main St"));
    }

    // ── Timelines render every entry ────────────────────────────────────

    #[test]
    fn test_full_education_shows_all_entries() {
        let f = render(
            "education",
            json!({"entries": [
                {"title": "A"}, {"title": "B"}, {"title": "C"}, {"title": "D"},
            ]}),
        );
        let plain = f.to_plain();
        for title in ["A", "B", "C", "D"] {
            assert!(plain.contains(title));
        }
        assert!(!plain.contains("more entries"));
    }

    // ── Misc rules ──────────────────────────────────────────────────────

    #[test]
    fn test_link_full_builds_external_href() {
        let f = render("link", json!({"title": "Blog", "url": "blog.example.com"}));
        let json = serde_json::to_value(&f).unwrap().to_string();
        assert!(json.contains("https://blog.example.com"));
    }

    #[test]
    fn test_timezone_custom_label_wins() {
        let f = render(
            "timezone",
            json!({"timezone": "Asia/Tokyo", "customLabel": "Tokyo HQ", "format": "24"}),
        );
        let plain = f.to_plain();
        assert!(plain.contains("Tokyo HQ"));
        assert!(plain.contains("Asia/Tokyo · 24-hour"));
    }

    #[test]
    fn test_calendar_range_rendered() {
        let f = render(
            "calendar",
            json!({"date": "2026-03-01", "endDate": "2026-03-03"}),
        );
        assert!(f.to_plain().contains("Mar 1, 2026 - Mar 3, 2026"));
    }

    #[test]
    fn test_testimonial_empty_placeholder() {
        let f = render("testimonial", json!({}));
        assert!(f.to_plain().contains("No testimonial added yet"));
    }

    #[test]
    fn test_subscription_button_text() {
        let f = render("subscription", json!({"buttonText": "Sign up"}));
        assert!(f.to_plain().contains("Sign up"));
    }

    #[test]
    fn test_empty_strings_fall_back_like_missing() {
        let f = render("link", json!({"title": "", "url": ""}));
        assert!(f.to_plain().contains("Untitled Link"));
        let f = render("contact", json!({"label": "", "value": ""}));
        assert!(f.to_plain().contains("Contact"));
        assert!(f.to_plain().contains("No value set"));
        // Empty phone number is as good as no phone number.
        assert!(render("whatsapp", json!({"phoneNumber": ""})).is_empty());
    }

    #[test]
    fn test_external_url_passthrough() {
        assert_eq!(external_url("https://a.b"), "https://a.b");
        assert_eq!(external_url("http://a.b"), "http://a.b");
        assert_eq!(external_url("a.b"), "https://a.b");
    }
}

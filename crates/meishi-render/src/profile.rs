//! The public profile composer.
//!
//! Assembles the profile header (avatar, name, bio, quick contact
//! affordances) and the ordered block sequence into one fragment tree. The
//! theme is resolved to a [`ThemeClassSet`] exactly once per pass and the
//! same set is handed to every block — a page can never mix themes
//! mid-render.

use meishi_theme::{Theme, ThemeClassSet};
use meishi_types::{Block, Profile};

use crate::fragment::{Fragment, IconKind};
use crate::full::{external_url, render_full};

/// Compose the full public page for a profile and its blocks.
///
/// Blocks render in `position` order. A block that renders nothing (unknown
/// social platform, whatsapp without a number) is skipped; a malformed block
/// degrades to its kind's placeholder — neither stops the rest of the page.
pub fn compose_profile(profile: &Profile, blocks: &[Block], theme: &Theme) -> Fragment {
    let classes = ThemeClassSet::derive(theme);

    let mut ordered: Vec<&Block> = blocks.iter().collect();
    ordered.sort_by_key(|b| b.position);

    let rendered: Vec<Fragment> = ordered
        .iter()
        .map(|b| render_full(b, &classes))
        .filter(|f| !f.is_empty())
        .collect();

    // Built directly (not via the pruning constructors): the block list
    // container stays present even when every block rendered nothing, so the
    // page structure is stable for hosts that hydrate into it.
    Fragment::Stack {
        items: vec![
            header_card(profile, &classes),
            Fragment::Stack {
                items: rendered,
                class: Some(classes.spacing.clone()),
            },
        ],
        class: Some(classes.background.clone()),
    }
}

fn header_card(profile: &Profile, classes: &ThemeClassSet) -> Fragment {
    let mut identity = vec![
        Fragment::Avatar {
            url: profile.avatar_url.clone().filter(|s| !s.is_empty()),
            initials: profile.initials(),
        },
        Fragment::heading(profile.headline_name(), classes.heading.clone()),
    ];
    if profile.show_username
        && profile.display_name.is_some()
        && let Some(username) = profile.username.as_deref().filter(|s| !s.is_empty())
    {
        identity.push(Fragment::text_with(format!("@{username}"), classes.muted.clone()));
    }
    if let Some(bio) = profile.bio.as_deref().filter(|s| !s.is_empty()) {
        identity.push(Fragment::text_with(bio, classes.muted.clone()));
    }

    let mut contacts = Vec::new();
    if let Some(location) = profile.location.as_deref().filter(|s| !s.is_empty()) {
        contacts.push(Fragment::row(vec![
            Fragment::Icon {
                icon: IconKind::MapPin,
            },
            Fragment::text_with(location, classes.muted.clone()),
        ]));
    }
    if let Some(website) = profile.website_url.as_deref().filter(|s| !s.is_empty()) {
        contacts.push(Fragment::row(vec![
            Fragment::Icon {
                icon: IconKind::Globe,
            },
            Fragment::Link {
                label: "Website".to_string(),
                href: external_url(website),
                class: Some(classes.primary.clone()),
            },
        ]));
    }
    if let Some(phone) = profile.phone.as_deref().filter(|s| !s.is_empty()) {
        contacts.push(Fragment::row(vec![
            Fragment::Icon {
                icon: IconKind::Phone,
            },
            Fragment::Link {
                label: "Call".to_string(),
                href: format!("tel:{phone}"),
                class: Some(classes.primary.clone()),
            },
        ]));
    }
    if !contacts.is_empty() {
        identity.push(Fragment::row(contacts));
    }

    Fragment::card(classes.card.clone(), identity)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile() -> Profile {
        Profile {
            username: Some("ada".into()),
            display_name: Some("Ada Lovelace".into()),
            bio: Some("First programmer".into()),
            location: Some("London".into()),
            website_url: Some("adalovelace.example".into()),
            phone: Some("+44 20 1234".into()),
            show_username: true,
            ..Profile::new()
        }
    }

    fn block(kind: &str, content: serde_json::Value, position: u32) -> Block {
        Block::new(kind).with_content(content).at_position(position)
    }

    // ── Header ──────────────────────────────────────────────────────────

    #[test]
    fn test_header_identity_and_contacts() {
        let page = compose_profile(&profile(), &[], Theme::default_theme());
        let plain = page.to_plain();
        assert!(plain.contains("Ada Lovelace"));
        assert!(plain.contains("@ada"));
        assert!(plain.contains("First programmer"));
        assert!(plain.contains("London"));
        assert!(plain.contains("Website"));
        assert!(plain.contains("Call"));
    }

    #[test]
    fn test_username_hidden_when_flag_off() {
        let mut p = profile();
        p.show_username = false;
        let plain = compose_profile(&p, &[], Theme::default_theme()).to_plain();
        assert!(!plain.contains("@ada"));
    }

    #[test]
    fn test_website_href_is_prefixed() {
        let page = compose_profile(&profile(), &[], Theme::default_theme());
        let json = serde_json::to_value(&page).unwrap().to_string();
        assert!(json.contains("https://adalovelace.example"));
        assert!(json.contains("tel:+44 20 1234"));
    }

    #[test]
    fn test_initials_in_avatar() {
        let page = compose_profile(&profile(), &[], Theme::default_theme());
        let json = serde_json::to_value(&page).unwrap().to_string();
        assert!(json.contains("\"AL\""));
    }

    #[test]
    fn test_empty_profile_still_renders() {
        let page = compose_profile(&Profile::new(), &[], Theme::default_theme());
        assert!(page.to_plain().contains("User"));
    }

    // ── Block ordering and containment ──────────────────────────────────

    #[test]
    fn test_blocks_render_in_position_order() {
        let blocks = vec![
            block("about", json!({"content": "second"}), 2),
            block("about", json!({"content": "first"}), 1),
        ];
        let plain = compose_profile(&profile(), &blocks, Theme::default_theme()).to_plain();
        let first = plain.find("first").unwrap();
        let second = plain.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_malformed_block_does_not_stop_siblings() {
        let blocks = vec![
            block("education", json!("total garbage"), 0),
            block("mystery-kind", json!(null), 1),
            block("about", json!({"content": "still here"}), 2),
        ];
        let plain = compose_profile(&profile(), &blocks, Theme::default_theme()).to_plain();
        assert!(plain.contains("still here"));
        assert!(plain.contains("Unknown block type: mystery-kind"));
        assert!(plain.contains("No education entries added yet"));
    }

    #[test]
    fn test_nothing_blocks_are_skipped() {
        let blocks = vec![
            block("social", json!({"platform": "myspace"}), 0),
            block("whatsapp", json!({}), 1),
            block("about", json!({"content": "visible"}), 2),
        ];
        let page = compose_profile(&profile(), &blocks, Theme::default_theme());
        let Fragment::Stack { items, .. } = &page else {
            panic!("page should be a stack");
        };
        // Header card + block list
        assert_eq!(items.len(), 2);
        let Fragment::Stack { items: blocks, .. } = &items[1] else {
            panic!("block list should be a stack");
        };
        assert_eq!(blocks.len(), 1);
    }

    // ── Theme threading ─────────────────────────────────────────────────

    #[test]
    fn test_page_carries_theme_background_and_spacing() {
        let page = compose_profile(&profile(), &[], Theme::resolve("minimal"));
        let Fragment::Stack { class, .. } = &page else {
            panic!("page should be a stack");
        };
        assert_eq!(class.as_deref(), Some("bg-white"));
        let json = serde_json::to_value(&page).unwrap().to_string();
        assert!(json.contains("space-y-12"));
    }

    #[test]
    fn test_every_theme_composes() {
        let blocks = vec![block("about", json!({"content": "hi"}), 0)];
        for theme in Theme::all() {
            let page = compose_profile(&profile(), &blocks, theme);
            assert!(!page.is_empty(), "{} composed empty", theme.id);
        }
    }
}

//! End-to-end rendering sweeps.
//!
//! # Tiers
//!
//! - **Tier 0:** per-kind render totality — every kind × every field-subset
//!   shape renders without panicking, through both renderers
//! - **Tier 1:** documented fallbacks survive field removal
//! - **Tier 2:** whole-page composition across the full theme catalog with a
//!   kitchen-sink block list, including malformed and unknown blocks

use meishi_render::{Fragment, compose_profile, render_full, render_summary};
use meishi_theme::{Theme, ThemeClassSet};
use meishi_types::{Block, BlockKind, Profile};
use serde_json::{Value, json};

/// A representative well-formed payload for each kind.
fn full_payload(kind: BlockKind) -> Value {
    match kind {
        BlockKind::About => json!({"content": "I build things."}),
        BlockKind::Education => json!({"entries": [
            {"title": "BSc Computer Science", "side": "left"},
            {"title": "MSc Systems", "side": "right", "description": "Distributed systems"},
            {"title": "PhD", "side": "left"},
        ]}),
        BlockKind::Experience => json!({"entries": [
            {"title": "Engineer, Initech", "side": "left"},
        ]}),
        BlockKind::Social => json!({"platform": "github", "username": "octocat"}),
        BlockKind::Contact => json!({"type": "email", "label": "Work", "value": "a@b.example"}),
        BlockKind::Link => json!({"title": "Blog", "description": "Writing", "url": "blog.example"}),
        BlockKind::Gallery => json!({"title": "Shots", "description": "Photos"}),
        BlockKind::Video => json!({"title": "Talk", "url": "https://v.example/t.mp4"}),
        BlockKind::Audio => json!({"title": "Mix", "url": "https://a.example/m.mp3"}),
        BlockKind::Achievement => json!({"entries": [{"title": "Award"}, {"title": "Medal"}]}),
        BlockKind::Text => json!({"title": "Note", "content": "Some text"}),
        BlockKind::Testimonial => json!({
            "quote": "Outstanding", "author": "Grace Hopper", "position": "Admiral",
        }),
        BlockKind::Event => json!({
            "title": "Launch", "date": "2026-03-05", "time": "18:00", "location": "HQ",
        }),
        BlockKind::Subscription => json!({
            "title": "Newsletter", "collectName": "yes", "buttonText": "Join",
        }),
        BlockKind::Whatsapp => json!({
            "phoneNumber": "+1 (555) 123-4567", "message": "Hi there", "contactName": "Ada",
        }),
        BlockKind::Timezone => json!({"timezone": "Asia/Tokyo", "format": "24"}),
        BlockKind::Location => json!({"address": "1 Main St", "city": "Kyoto", "country": "Japan"}),
        BlockKind::Calendar => json!({"title": "Conf", "date": "2026-03-01", "endDate": "2026-03-03"}),
        BlockKind::Image => json!({"imageUrl": "https://img.example/p.png", "size": "large"}),
    }
}

/// Every payload with each single top-level field removed, plus degenerate shapes.
fn field_subsets(payload: &Value) -> Vec<Value> {
    let mut subsets = vec![payload.clone(), json!({}), json!(null), json!("scalar")];
    if let Value::Object(map) = payload {
        for key in map.keys() {
            let mut reduced = map.clone();
            reduced.remove(key);
            subsets.push(Value::Object(reduced));
        }
    }
    subsets
}

fn classes() -> ThemeClassSet {
    ThemeClassSet::derive(Theme::default_theme())
}

// ============================================================================
// Tier 0: totality
// ============================================================================

#[test]
fn every_kind_and_subset_renders_through_both_renderers() {
    for kind in BlockKind::ALL {
        for payload in field_subsets(&full_payload(kind)) {
            let block = Block::new(kind.as_str()).with_content(payload.clone());
            let summary = render_summary(&block);
            let full = render_full(&block, &classes());
            // Pure data out, no panic; a well-formed payload is never empty.
            if payload == full_payload(kind) {
                assert!(!summary.is_empty(), "{kind} summary empty on full payload");
                assert!(!full.is_empty(), "{kind} full empty on full payload");
            }
        }
    }
}

#[test]
fn well_formed_payloads_render_nonempty_for_all_themes() {
    for theme in Theme::all() {
        let classes = ThemeClassSet::derive(theme);
        for kind in BlockKind::ALL {
            let block = Block::new(kind.as_str()).with_content(full_payload(kind));
            assert!(
                !render_full(&block, &classes).is_empty(),
                "{kind} empty under {}",
                theme.id
            );
        }
    }
}

#[test]
fn renderers_are_deterministic() {
    for kind in BlockKind::ALL {
        let block = Block::new(kind.as_str()).with_content(full_payload(kind));
        assert_eq!(render_summary(&block), render_summary(&block));
        assert_eq!(render_full(&block, &classes()), render_full(&block, &classes()));
    }
}

// ============================================================================
// Tier 1: documented fallbacks
// ============================================================================

#[test]
fn education_summary_truncation_scenario() {
    let block = Block::new("education").with_content(json!({"entries": [
        {"title": "A"}, {"title": "B"}, {"title": "C"},
    ]}));
    let plain = render_summary(&block).to_plain();
    assert!(plain.contains("A"));
    assert!(plain.contains("B"));
    assert!(plain.contains("+1 more entries"));
    assert!(!plain.contains("C"));
}

#[test]
fn whatsapp_wire_scenarios() {
    let block = Block::new("whatsapp")
        .with_content(json!({"phoneNumber": "+1 (555) 123-4567"}));
    let rendered = serde_json::to_string(&render_full(&block, &classes())).unwrap();
    assert!(rendered.contains("https://wa.me/15551234567"));
    assert!(!rendered.contains("text="));

    let block = Block::new("whatsapp")
        .with_content(json!({"phoneNumber": "+1 555 123 4567", "message": "Hi there"}));
    let rendered = serde_json::to_string(&render_full(&block, &classes())).unwrap();
    assert!(rendered.contains("https://wa.me/15551234567?text=Hi%20there"));
}

#[test]
fn whatsapp_legacy_alias_scenario() {
    let content = json!({"phoneNumber": "123"});
    let legacy = Block::new("whatsap").with_content(content.clone());
    let canonical = Block::new("whatsapp").with_content(content);
    assert_eq!(render_summary(&legacy), render_summary(&canonical));
    assert_eq!(
        render_full(&legacy, &classes()),
        render_full(&canonical, &classes())
    );
}

#[test]
fn image_without_url_scenario() {
    let block = Block::new("image").with_content(json!({}));
    for fragment in [render_summary(&block), render_full(&block, &classes())] {
        let json = serde_json::to_string(&fragment).unwrap();
        assert!(json.contains("image_placeholder"), "missing placeholder: {json}");
        // Never an image node with no source.
        assert!(!json.contains("\"type\":\"image\","));
    }
}

#[test]
fn no_raw_iso_dates_in_output() {
    let block = Block::new("event").with_content(json!({"title": "Launch", "date": "2026-03-05"}));
    let plain = render_summary(&block).to_plain();
    assert!(!plain.contains("2026-03-05"));
    assert!(plain.contains("Mar 5, 2026"));
}

// ============================================================================
// Tier 2: whole-page composition
// ============================================================================

fn kitchen_sink_blocks() -> Vec<Block> {
    let mut blocks: Vec<Block> = BlockKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            Block::new(kind.as_str())
                .with_content(full_payload(*kind))
                .at_position(i as u32)
        })
        .collect();
    // Poison pills: must not take the page down.
    blocks.push(Block::new("not-a-kind").at_position(100));
    blocks.push(
        Block::new("education")
            .with_content(json!({"entries": 99}))
            .at_position(101),
    );
    blocks
}

#[test]
fn kitchen_sink_page_composes_for_every_theme() {
    let profile = Profile {
        display_name: Some("Ada Lovelace".into()),
        username: Some("ada".into()),
        bio: Some("First programmer".into()),
        show_username: true,
        ..Profile::new()
    };
    let blocks = kitchen_sink_blocks();
    for theme in Theme::all() {
        let page = compose_profile(&profile, &blocks, theme);
        let plain = page.to_plain();
        assert!(plain.contains("Ada Lovelace"), "{}", theme.id);
        assert!(plain.contains("Unknown block type: not-a-kind"), "{}", theme.id);
        assert!(plain.contains("No education entries added yet"), "{}", theme.id);
        // A well-formed block from the middle of the list survives the pills.
        assert!(plain.contains("I build things."), "{}", theme.id);
    }
}

#[test]
fn page_fragment_tree_roundtrips_through_serde() {
    let profile = Profile::new();
    let page = compose_profile(&profile, &kitchen_sink_blocks(), Theme::resolve("tech"));
    let json = serde_json::to_string(&page).unwrap();
    let parsed: Fragment = serde_json::from_str(&json).unwrap();
    assert_eq!(page, parsed);
}

#[test]
fn unknown_theme_falls_back_to_default_page() {
    let profile = Profile::new();
    let blocks = vec![Block::new("about").with_content(json!({"content": "hi"}))];
    let fallback = compose_profile(&profile, &blocks, Theme::resolve("no-such-theme"));
    let default = compose_profile(&profile, &blocks, Theme::resolve("default"));
    assert_eq!(fallback, default);
}

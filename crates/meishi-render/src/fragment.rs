//! The display fragment tree.
//!
//! A [`Fragment`] is the renderer's output: a serializable tree of display
//! nodes that a host surface (web view, TUI, test harness) lays out however
//! it likes. Style is carried as class token strings from the theme's
//! derived class set — fragments never embed literal colors.
//!
//! `to_plain()` is the text projection for logs, previews, and tests: rows
//! join inline with spaces, stacks and cards become lines.

use serde::{Deserialize, Serialize};

/// Badge rendering variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    #[default]
    Secondary,
    Outline,
}

/// Icon vocabulary used across block renderings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    GraduationCap,
    Briefcase,
    Star,
    Mail,
    Phone,
    MapPin,
    Globe,
    ExternalLink,
    Calendar,
    Clock,
    Image,
    Video,
    Music,
    Whatsapp,
}

/// One node of rendered display output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fragment {
    /// Nothing to show. Containers prune these on construction.
    Empty,
    /// A run of body text.
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
    /// A heading line.
    Heading {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
    /// A small pill label.
    Badge {
        text: String,
        #[serde(default)]
        variant: BadgeVariant,
    },
    /// An outbound link.
    Link {
        label: String,
        href: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
    /// A standalone icon.
    Icon { icon: IconKind },
    /// An image with a resolved source. Never constructed without a URL —
    /// the url-less case renders [`Fragment::ImagePlaceholder`] instead.
    Image {
        url: String,
        alt: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
    /// Dashed placeholder box shown where an image would go.
    ImagePlaceholder {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
    /// Avatar with an initials fallback when the URL is absent.
    Avatar {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        initials: String,
    },
    /// Quoted text.
    Quote {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
    /// Inline horizontal grouping.
    Row { items: Vec<Fragment> },
    /// Vertical grouping.
    Stack {
        items: Vec<Fragment>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
    /// A themed card wrapping its items.
    Card { class: String, items: Vec<Fragment> },
}

impl Fragment {
    /// Plain text node without styling.
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text {
            text: text.into(),
            class: None,
        }
    }

    /// Text node carrying a class token.
    pub fn text_with(text: impl Into<String>, class: impl Into<String>) -> Self {
        Fragment::Text {
            text: text.into(),
            class: Some(class.into()),
        }
    }

    /// Heading node carrying a class token.
    pub fn heading(text: impl Into<String>, class: impl Into<String>) -> Self {
        Fragment::Heading {
            text: text.into(),
            class: Some(class.into()),
        }
    }

    /// Secondary badge.
    pub fn badge(text: impl Into<String>) -> Self {
        Fragment::Badge {
            text: text.into(),
            variant: BadgeVariant::Secondary,
        }
    }

    /// Outline badge.
    pub fn badge_outline(text: impl Into<String>) -> Self {
        Fragment::Badge {
            text: text.into(),
            variant: BadgeVariant::Outline,
        }
    }

    /// Inline row; [`Fragment::Empty`] items are pruned.
    pub fn row(items: Vec<Fragment>) -> Self {
        Fragment::Row {
            items: prune(items),
        }
    }

    /// Vertical stack; [`Fragment::Empty`] items are pruned.
    pub fn stack(items: Vec<Fragment>) -> Self {
        Fragment::Stack {
            items: prune(items),
            class: None,
        }
    }

    /// Vertical stack carrying a class token.
    pub fn stack_with(items: Vec<Fragment>, class: impl Into<String>) -> Self {
        Fragment::Stack {
            items: prune(items),
            class: Some(class.into()),
        }
    }

    /// Themed card; [`Fragment::Empty`] items are pruned.
    pub fn card(class: impl Into<String>, items: Vec<Fragment>) -> Self {
        Fragment::Card {
            class: class.into(),
            items: prune(items),
        }
    }

    /// True when nothing would be displayed.
    pub fn is_empty(&self) -> bool {
        match self {
            Fragment::Empty => true,
            Fragment::Row { items } => items.iter().all(Fragment::is_empty),
            Fragment::Stack { items, .. } | Fragment::Card { items, .. } => {
                items.iter().all(Fragment::is_empty)
            }
            _ => false,
        }
    }

    /// Text projection: rows join inline, stacks and cards become lines.
    pub fn to_plain(&self) -> String {
        let mut lines = Vec::new();
        self.collect_lines(&mut lines);
        lines.join("\n")
    }

    fn collect_lines(&self, out: &mut Vec<String>) {
        match self {
            Fragment::Empty | Fragment::Icon { .. } | Fragment::ImagePlaceholder { .. } => {}
            Fragment::Text { text, .. }
            | Fragment::Heading { text, .. }
            | Fragment::Badge { text, .. } => out.push(text.clone()),
            Fragment::Quote { text, .. } => out.push(format!("\"{text}\"")),
            Fragment::Link { label, .. } => out.push(label.clone()),
            Fragment::Image { alt, .. } => {
                if !alt.is_empty() {
                    out.push(alt.clone());
                }
            }
            Fragment::Avatar { initials, .. } => out.push(initials.clone()),
            Fragment::Row { items } => {
                let mut inline = Vec::new();
                for item in items {
                    item.collect_lines(&mut inline);
                }
                if !inline.is_empty() {
                    out.push(inline.join(" "));
                }
            }
            Fragment::Stack { items, .. } | Fragment::Card { items, .. } => {
                for item in items {
                    item.collect_lines(out);
                }
            }
        }
    }
}

fn prune(items: Vec<Fragment>) -> Vec<Fragment> {
    items.into_iter().filter(|f| !f.is_empty()).collect()
}

// ============================================================================
// Tests
// ============================================================================

//! Derived style tokens — the projection renderers consume.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// The concrete style tokens for one render pass.
///
/// Derived from a [`Theme`] on demand; never persisted and never cached
/// across passes. Resolve the theme once, derive once, and thread the result
/// through every rendering call — re-resolving mid-render could mix themes
/// if the caller swaps profiles concurrently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeClassSet {
    pub background: String,
    pub card: String,
    pub heading: String,
    pub body: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub muted: String,
    pub spacing: String,
}

impl ThemeClassSet {
    /// Pure, total derivation from a theme's role assignments.
    pub fn derive(theme: &Theme) -> Self {
        Self {
            background: theme.colors.background.to_string(),
            card: format!(
                "{} {} {}",
                theme.colors.card,
                theme.layout.card_style,
                theme.layout.radius.as_class()
            ),
            heading: format!("{} {}", theme.colors.text, theme.fonts.heading),
            body: format!("{} {}", theme.colors.text, theme.fonts.body),
            primary: theme.colors.primary.to_string(),
            secondary: theme.colors.secondary.to_string(),
            accent: theme.colors.accent.to_string(),
            muted: theme.colors.muted.to_string(),
            spacing: theme.layout.spacing.as_class().to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

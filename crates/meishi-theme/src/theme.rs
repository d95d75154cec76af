//! Theme model: identifiers, role bundles, and layout token vocabularies.

use std::str::FromStr;

use strum::EnumString;

/// Identifiers of the built-in themes.
///
/// `"professional"` is accepted as an alias for the default theme — the two
/// names have always referred to the same bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ThemeId {
    Classic,
    #[default]
    #[strum(serialize = "default", serialize = "professional")]
    Professional,
    Dark,
    Nature,
    Tech,
    Sunset,
    Colorful,
    Minimal,
    Corporate,
}

impl ThemeId {
    /// All built-in theme ids, in catalog order.
    pub const ALL: [ThemeId; 9] = [
        ThemeId::Classic,
        ThemeId::Professional,
        ThemeId::Dark,
        ThemeId::Nature,
        ThemeId::Tech,
        ThemeId::Sunset,
        ThemeId::Colorful,
        ThemeId::Minimal,
        ThemeId::Corporate,
    ];

    /// Parse from a raw id (case-insensitive). `None` means unknown — callers
    /// that want totality go through [`Theme::resolve`](crate::Theme::resolve)
    /// instead.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// The canonical id string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Classic => "classic",
            ThemeId::Professional => "default",
            ThemeId::Dark => "dark",
            ThemeId::Nature => "nature",
            ThemeId::Tech => "tech",
            ThemeId::Sunset => "sunset",
            ThemeId::Colorful => "colorful",
            ThemeId::Minimal => "minimal",
            ThemeId::Corporate => "corporate",
        }
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Semantic color roles. Values are style tokens, not literal RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
}

/// Font roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeFonts {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Vertical rhythm between blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spacing {
    Tight,
    Regular,
    Relaxed,
    Loose,
    Expansive,
}

impl Spacing {
    pub fn as_class(&self) -> &'static str {
        match self {
            Spacing::Tight => "space-y-5",
            Spacing::Regular => "space-y-6",
            Spacing::Relaxed => "space-y-7",
            Spacing::Loose => "space-y-8",
            Spacing::Expansive => "space-y-12",
        }
    }
}

/// Corner rounding applied to cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CornerRadius {
    None,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl CornerRadius {
    pub fn as_class(&self) -> &'static str {
        match self {
            CornerRadius::None => "rounded-none",
            CornerRadius::Small => "rounded-sm",
            CornerRadius::Medium => "rounded-md",
            CornerRadius::Large => "rounded-lg",
            CornerRadius::ExtraLarge => "rounded-xl",
        }
    }
}

/// Layout roles: spacing density, corner rounding, and card decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeLayout {
    pub spacing: Spacing,
    pub radius: CornerRadius,
    /// Card shadow/border decoration token.
    pub card_style: &'static str,
}

/// An immutable, named bundle of style role assignments.
///
/// Every role is a non-optional field: adding a theme to the catalog means
/// supplying all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub id: ThemeId,
    pub name: &'static str,
    pub description: &'static str,
    /// Gradient token for theme pickers.
    pub preview: &'static str,
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
    pub layout: ThemeLayout,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_id_parsing() {
        assert_eq!(ThemeId::from_str("classic"), Some(ThemeId::Classic));
        assert_eq!(ThemeId::from_str("DARK"), Some(ThemeId::Dark));
        assert_eq!(ThemeId::from_str("no-such-theme"), None);
        assert_eq!(ThemeId::from_str(""), None);
    }

    #[test]
    fn test_default_and_professional_are_aliases() {
        assert_eq!(ThemeId::from_str("default"), Some(ThemeId::Professional));
        assert_eq!(ThemeId::from_str("professional"), Some(ThemeId::Professional));
    }

    #[test]
    fn test_canonical_ids_roundtrip() {
        for id in ThemeId::ALL {
            assert_eq!(ThemeId::from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_spacing_tokens() {
        assert_eq!(Spacing::Tight.as_class(), "space-y-5");
        assert_eq!(Spacing::Expansive.as_class(), "space-y-12");
    }

    #[test]
    fn test_radius_tokens() {
        assert_eq!(CornerRadius::None.as_class(), "rounded-none");
        assert_eq!(CornerRadius::ExtraLarge.as_class(), "rounded-xl");
    }
}

//! The built-in theme catalog.
//!
//! Nine complete themes. Every role of every theme is spelled out here —
//! there is no inheritance and no partial override, so reviewing this file
//! is reviewing the whole visual vocabulary.

use tracing::debug;

use crate::theme::{
    CornerRadius, Spacing, Theme, ThemeColors, ThemeFonts, ThemeId, ThemeLayout,
};

static CLASSIC: Theme = Theme {
    id: ThemeId::Classic,
    name: "Classic Black & White",
    description: "Sophisticated monochrome design with elegant typography",
    preview: "bg-gradient-to-br from-gray-900 to-black",
    colors: ThemeColors {
        primary: "text-black",
        secondary: "text-gray-800",
        accent: "text-gray-900",
        background: "bg-white",
        card: "bg-white",
        text: "text-black",
        muted: "text-gray-500",
    },
    fonts: ThemeFonts {
        heading: "font-semibold tracking-tight",
        body: "font-normal",
    },
    layout: ThemeLayout {
        spacing: Spacing::Tight,
        radius: CornerRadius::Small,
        card_style: "shadow-sm border border-gray-100",
    },
};

static PROFESSIONAL: Theme = Theme {
    id: ThemeId::Professional,
    name: "Professional",
    description: "Clean and professional design perfect for business profiles",
    preview: "bg-gradient-to-br from-blue-50 to-white",
    colors: ThemeColors {
        primary: "text-blue-600",
        secondary: "text-gray-600",
        accent: "text-purple-600",
        background: "bg-gray-50",
        card: "bg-white/80",
        text: "text-gray-900",
        muted: "text-gray-600",
    },
    fonts: ThemeFonts {
        heading: "font-semibold",
        body: "font-normal",
    },
    layout: ThemeLayout {
        spacing: Spacing::Regular,
        radius: CornerRadius::Large,
        card_style: "shadow-sm border-0",
    },
};

static DARK: Theme = Theme {
    id: ThemeId::Dark,
    name: "Dark Mode",
    description: "Sleek dark theme for a modern, sophisticated look",
    preview: "bg-gradient-to-br from-gray-900 to-gray-800",
    colors: ThemeColors {
        primary: "text-blue-400",
        secondary: "text-gray-300",
        accent: "text-purple-400",
        background: "bg-gray-900",
        card: "bg-gray-800/80",
        text: "text-gray-100",
        muted: "text-gray-400",
    },
    fonts: ThemeFonts {
        heading: "font-semibold",
        body: "font-normal",
    },
    layout: ThemeLayout {
        spacing: Spacing::Regular,
        radius: CornerRadius::Large,
        card_style: "shadow-lg border border-gray-700",
    },
};

static NATURE: Theme = Theme {
    id: ThemeId::Nature,
    name: "Nature",
    description: "Earthy tones inspired by natural elements and landscapes",
    preview: "bg-gradient-to-br from-green-100 to-emerald-50",
    colors: ThemeColors {
        primary: "text-emerald-700",
        secondary: "text-emerald-600",
        accent: "text-amber-600",
        background: "bg-emerald-50",
        card: "bg-white/90",
        text: "text-emerald-950",
        muted: "text-emerald-700/70",
    },
    fonts: ThemeFonts {
        heading: "font-medium",
        body: "font-normal",
    },
    layout: ThemeLayout {
        spacing: Spacing::Regular,
        radius: CornerRadius::Large,
        card_style: "shadow-sm border border-emerald-100",
    },
};

static TECH: Theme = Theme {
    id: ThemeId::Tech,
    name: "Tech",
    description: "Modern tech-inspired theme with neon accents on dark background",
    preview: "bg-gradient-to-br from-slate-900 to-slate-800",
    colors: ThemeColors {
        primary: "text-cyan-400",
        secondary: "text-slate-300",
        accent: "text-fuchsia-400",
        background: "bg-slate-900",
        card: "bg-slate-800/90",
        text: "text-slate-100",
        muted: "text-slate-400",
    },
    fonts: ThemeFonts {
        heading: "font-bold",
        body: "font-normal",
    },
    layout: ThemeLayout {
        spacing: Spacing::Regular,
        radius: CornerRadius::Medium,
        card_style: "shadow-lg border border-slate-700/50",
    },
};

static SUNSET: Theme = Theme {
    id: ThemeId::Sunset,
    name: "Sunset",
    description: "Warm gradient colors inspired by sunset skies",
    preview: "bg-gradient-to-br from-orange-100 via-amber-50 to-rose-100",
    colors: ThemeColors {
        primary: "text-rose-600",
        secondary: "text-amber-700",
        accent: "text-orange-500",
        background: "bg-gradient-to-br from-orange-50 via-amber-50 to-rose-50",
        card: "bg-white/80",
        text: "text-gray-900",
        muted: "text-amber-800/70",
    },
    fonts: ThemeFonts {
        heading: "font-medium",
        body: "font-normal",
    },
    layout: ThemeLayout {
        spacing: Spacing::Relaxed,
        radius: CornerRadius::ExtraLarge,
        card_style: "shadow-md border-0",
    },
};

static COLORFUL: Theme = Theme {
    id: ThemeId::Colorful,
    name: "Creative",
    description: "Vibrant and colorful design for creative professionals",
    preview: "bg-gradient-to-br from-pink-100 via-purple-50 to-indigo-100",
    colors: ThemeColors {
        primary: "text-pink-600",
        secondary: "text-purple-600",
        accent: "text-indigo-600",
        background: "bg-gradient-to-br from-pink-50 via-purple-50 to-indigo-50",
        card: "bg-white/90",
        text: "text-gray-900",
        muted: "text-gray-600",
    },
    fonts: ThemeFonts {
        heading: "font-bold",
        body: "font-normal",
    },
    layout: ThemeLayout {
        spacing: Spacing::Loose,
        radius: CornerRadius::ExtraLarge,
        card_style: "shadow-md border-0",
    },
};

static MINIMAL: Theme = Theme {
    id: ThemeId::Minimal,
    name: "Minimal",
    description: "Clean and minimal design with lots of white space",
    preview: "bg-white",
    colors: ThemeColors {
        primary: "text-gray-900",
        secondary: "text-gray-700",
        accent: "text-gray-800",
        background: "bg-white",
        card: "bg-gray-50/50",
        text: "text-gray-900",
        muted: "text-gray-500",
    },
    fonts: ThemeFonts {
        heading: "font-light",
        body: "font-light",
    },
    layout: ThemeLayout {
        spacing: Spacing::Expansive,
        radius: CornerRadius::None,
        card_style: "shadow-none border border-gray-200",
    },
};

static CORPORATE: Theme = Theme {
    id: ThemeId::Corporate,
    name: "Corporate",
    description: "Professional corporate design with navy and gold accents",
    preview: "bg-gradient-to-br from-slate-100 to-blue-50",
    colors: ThemeColors {
        primary: "text-slate-800",
        secondary: "text-slate-600",
        accent: "text-amber-600",
        background: "bg-slate-50",
        card: "bg-white/95",
        text: "text-slate-900",
        muted: "text-slate-600",
    },
    fonts: ThemeFonts {
        heading: "font-semibold",
        body: "font-normal",
    },
    layout: ThemeLayout {
        spacing: Spacing::Regular,
        radius: CornerRadius::Medium,
        card_style: "shadow-sm border border-slate-200",
    },
};

impl Theme {
    /// Look up a theme by typed id. Total over the catalog.
    pub fn get(id: ThemeId) -> &'static Theme {
        match id {
            ThemeId::Classic => &CLASSIC,
            ThemeId::Professional => &PROFESSIONAL,
            ThemeId::Dark => &DARK,
            ThemeId::Nature => &NATURE,
            ThemeId::Tech => &TECH,
            ThemeId::Sunset => &SUNSET,
            ThemeId::Colorful => &COLORFUL,
            ThemeId::Minimal => &MINIMAL,
            ThemeId::Corporate => &CORPORATE,
        }
    }

    /// Resolve a raw theme id. Never fails: empty or unknown ids fall back
    /// to the default theme, silently as far as the viewer is concerned.
    pub fn resolve(raw: &str) -> &'static Theme {
        match ThemeId::from_str(raw) {
            Some(id) => Theme::get(id),
            None => {
                debug!(theme = raw, "unknown theme id, using default");
                Theme::get(ThemeId::default())
            }
        }
    }

    /// The default theme — what [`Theme::resolve`] falls back to.
    pub fn default_theme() -> &'static Theme {
        Theme::get(ThemeId::default())
    }

    /// All themes, in catalog order (for theme pickers).
    pub fn all() -> impl Iterator<Item = &'static Theme> {
        ThemeId::ALL.iter().map(|&id| Theme::get(id))
    }
}

// ============================================================================
// Tests
// ============================================================================

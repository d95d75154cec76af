//! Theme catalog and style-token derivation for Meishi.
//!
//! A [`Theme`] is an immutable, named bundle of style role assignments:
//! color roles, font roles, and layout roles. The catalog is fixed at
//! compile time and every role is a non-optional field, so a partial theme
//! cannot be expressed — completeness is checked where the catalog is
//! defined, not at render time.
//!
//! Resolution is total: [`Theme::resolve`] maps any string (including empty
//! and unknown ids) to a theme, falling back to the default. Renderers never
//! see a missing theme.
//!
//! [`ThemeClassSet`] is the derived projection renderers actually consume —
//! computed on demand, resolved once per render pass, and threaded through
//! every rendering call so a pass is visually self-consistent.

pub mod theme;
pub mod catalog;
pub mod classes;

pub use theme::{CornerRadius, Spacing, Theme, ThemeColors, ThemeFonts, ThemeId, ThemeLayout};
pub use classes::ThemeClassSet;

//! Profile metadata — the page owner.

use serde::{Deserialize, Serialize};

use crate::ids::ProfileId;

/// Page owner metadata. Everything beyond the ID is optional; renderers
/// define fallbacks for each missing field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: ProfileId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Show the @username under the display name on the public page.
    #[serde(default)]
    pub show_username: bool,
    /// Raw theme id; resolved through the theme catalog with default fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Profile {
    /// Create an empty profile with a fresh ID.
    pub fn new() -> Self {
        Self {
            id: ProfileId::new(),
            ..Default::default()
        }
    }

    /// The name shown at the top of the page: display name, else username,
    /// else a fixed placeholder.
    pub fn headline_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("User")
    }

    /// Avatar fallback initials: first letter of each display-name word,
    /// uppercased; else the username's first letter; else `"U"`.
    pub fn initials(&self) -> String {
        if let Some(name) = self.display_name.as_deref() {
            let initials: String = name
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .flat_map(|c| c.to_uppercase())
                .collect();
            if !initials.is_empty() {
                return initials;
            }
        }
        self.username
            .as_deref()
            .and_then(|u| u.chars().next())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

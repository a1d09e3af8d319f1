//! Creator profile as listed in the directory.

use creatorlink_core::format::format_follower_count;
use serde::{Deserialize, Serialize};

/// A creator that brands can book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    /// Directory identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Social handle, including the leading `@`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Avatar image location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Follower count across platforms.
    pub followers: u64,
    /// Content categories, most prominent first.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Home city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Creator {
    /// Follower count in compact display form, e.g. `1.2M`.
    #[must_use]
    pub fn followers_label(&self) -> String {
        format_follower_count(self.followers)
    }

    /// Whether the creator lists `category`, compared case-insensitively.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category))
    }
}

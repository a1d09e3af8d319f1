//! Campaign attributes shared by drafts and finalized campaigns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the brand wants the campaign to achieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Objective {
    /// Reach as many people as possible.
    Awareness,
    /// Likes, comments, shares.
    Engagement,
    /// Traffic to the brand's site.
    WebsiteVisits,
    /// Sign-ups and enquiries.
    Leads,
    /// Purchases.
    Sales,
}

impl Objective {
    /// Every objective, in display order.
    pub const ALL: [Self; 5] = [
        Self::Awareness,
        Self::Engagement,
        Self::WebsiteVisits,
        Self::Leads,
        Self::Sales,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Awareness => "Awareness",
            Self::Engagement => "Engagement",
            Self::WebsiteVisits => "Website Visits",
            Self::Leads => "Leads",
            Self::Sales => "Sales",
        }
    }
}

/// Geographic reach of the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AudienceScope {
    /// The whole country.
    #[default]
    Nationwide,
    /// Metro cities only.
    MetroOnly,
    /// Hand-picked regions. Listed but not yet selectable.
    Custom,
}

impl AudienceScope {
    /// Whether the scope can currently be chosen.
    #[must_use]
    pub fn is_available(self) -> bool {
        !matches!(self, Self::Custom)
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Nationwide => "Nationwide",
            Self::MetroOnly => "Metro cities only",
            Self::Custom => "Custom regions",
        }
    }
}

/// A distribution channel the creator publishes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Instagram Reels")]
    InstagramReels,
    #[serde(rename = "Instagram Stories")]
    InstagramStories,
    #[serde(rename = "Instagram Post")]
    InstagramPost,
    #[serde(rename = "YouTube Shorts")]
    YouTubeShorts,
    #[serde(rename = "YouTube Video")]
    YouTubeVideo,
    #[serde(rename = "Facebook")]
    Facebook,
}

impl Platform {
    /// Every platform, in display order.
    pub const ALL: [Self; 6] = [
        Self::InstagramReels,
        Self::InstagramStories,
        Self::InstagramPost,
        Self::YouTubeShorts,
        Self::YouTubeVideo,
        Self::Facebook,
    ];

    /// Human-readable label; identical to the stored name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InstagramReels => "Instagram Reels",
            Self::InstagramStories => "Instagram Stories",
            Self::InstagramPost => "Instagram Post",
            Self::YouTubeShorts => "YouTube Shorts",
            Self::YouTubeVideo => "YouTube Video",
            Self::Facebook => "Facebook",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the campaign's content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// A file uploaded by the brand.
    #[default]
    Upload,
    /// A link to an existing post.
    Link,
}

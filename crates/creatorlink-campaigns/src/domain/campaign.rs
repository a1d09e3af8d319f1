//! The finalized campaign record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::attributes::{AudienceScope, ContentKind, Objective, Platform};

/// Currency symbol used for every budget in the marketplace.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Unique campaign identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    /// Wraps an already generated identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of a stored campaign.
///
/// Every finalized campaign is created `Active`. `Draft` is accepted when
/// reading stored records but nothing in this crate produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    /// Launched and running.
    Active,
    /// Not produced; see the type-level docs.
    Draft,
}

/// Snapshot of the booked creator taken at finalize time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignCreator {
    /// Directory identifier of the creator.
    pub id: String,
    /// Display name at booking time.
    pub name: String,
    /// Avatar location at booking time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Social handle at booking time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
}

/// The content the campaign promotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignContent {
    /// Upload or link.
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Preview reference for uploads, URL for links.
    #[serde(rename = "ref")]
    pub reference: String,
}

/// An immutable, finalized campaign.
///
/// Fields are only readable; a `Campaign` can only be built by the
/// repository's append operation or by deserializing a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    id: CampaignId,
    created_at: DateTime<Utc>,
    status: CampaignStatus,
    creator: CampaignCreator,
    objective: Objective,
    brief: String,
    content: CampaignContent,
    budget: u64,
    audience_scope: AudienceScope,
    platforms: Vec<Platform>,
}

impl Campaign {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: CampaignId,
        created_at: DateTime<Utc>,
        creator: CampaignCreator,
        objective: Objective,
        brief: String,
        content: CampaignContent,
        budget: u64,
        audience_scope: AudienceScope,
        platforms: Vec<Platform>,
    ) -> Self {
        Self {
            id,
            created_at,
            status: CampaignStatus::Active,
            creator,
            objective,
            brief,
            content,
            budget,
            audience_scope,
            platforms,
        }
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &CampaignId {
        &self.id
    }

    /// When the campaign was finalized.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Lifecycle status.
    #[must_use]
    pub fn status(&self) -> CampaignStatus {
        self.status
    }

    /// The booked creator.
    #[must_use]
    pub fn creator(&self) -> &CampaignCreator {
        &self.creator
    }

    /// Campaign objective.
    #[must_use]
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Free-text brief for the creator.
    #[must_use]
    pub fn brief(&self) -> &str {
        &self.brief
    }

    /// Promoted content.
    #[must_use]
    pub fn content(&self) -> &CampaignContent {
        &self.content
    }

    /// Budget in whole currency units.
    #[must_use]
    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// Geographic reach.
    #[must_use]
    pub fn audience_scope(&self) -> AudienceScope {
        self.audience_scope
    }

    /// Distribution channels, in selection order.
    #[must_use]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }
}

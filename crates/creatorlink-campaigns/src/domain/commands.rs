//! Commands for the Campaigns context.

use creatorlink_core::command::Command;
use creatorlink_core::error::DomainError;

use super::attributes::{AudienceScope, Objective, Platform};
use super::campaign::{CampaignContent, CampaignCreator};

/// Request to store a newly finalized campaign. Everything except the id,
/// timestamp and status is copied verbatim into the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendCampaign {
    /// Snapshot of the booked creator.
    pub creator: CampaignCreator,
    /// Campaign objective.
    pub objective: Objective,
    /// Brief for the creator.
    pub brief: String,
    /// Promoted content.
    pub content: CampaignContent,
    /// Budget in whole currency units.
    pub budget: u64,
    /// Geographic reach.
    pub audience_scope: AudienceScope,
    /// Distribution channels.
    pub platforms: Vec<Platform>,
}

impl AppendCampaign {
    /// Checks the structural requirements of a storable campaign.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first missing piece.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.creator.id.trim().is_empty() {
            return Err(DomainError::Validation("campaign has no creator".into()));
        }
        if self.creator.name.trim().is_empty() {
            return Err(DomainError::Validation(format!(
                "creator {} has no name",
                self.creator.id
            )));
        }
        if self.content.reference.trim().is_empty() {
            return Err(DomainError::Validation("campaign has no content".into()));
        }
        if self.platforms.is_empty() {
            return Err(DomainError::Validation(
                "campaign needs at least one platform".into(),
            ));
        }
        if !self.audience_scope.is_available() {
            return Err(DomainError::Validation(format!(
                "audience scope {} is not available",
                self.audience_scope.label()
            )));
        }
        Ok(())
    }
}

impl Command for AppendCampaign {
    fn command_type(&self) -> &'static str {
        "campaigns.append_campaign"
    }
}

//! Query handlers for the Campaigns context.
//!
//! Read-only views over the repository for the campaign list and detail
//! screens, with display labels already resolved.

use chrono::{DateTime, Utc};
use creatorlink_core::error::DomainError;
use creatorlink_core::format::format_amount;
use serde::Serialize;

use crate::application::repository::CampaignRepository;
use crate::domain::attributes::Platform;
use crate::domain::campaign::{CURRENCY_SYMBOL, Campaign, CampaignId, CampaignStatus};

/// One row of the campaign list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    /// The campaign identifier.
    pub id: CampaignId,
    /// When the campaign was finalized.
    pub created_at: DateTime<Utc>,
    /// Lifecycle status.
    pub status: CampaignStatus,
    /// Booked creator's display name.
    pub creator_name: String,
    /// Objective label.
    pub objective: &'static str,
    /// Formatted budget, e.g. `₹5,000`.
    pub budget_label: String,
    /// Distribution channels.
    pub platforms: Vec<Platform>,
}

impl From<&Campaign> for CampaignSummary {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id().clone(),
            created_at: campaign.created_at(),
            status: campaign.status(),
            creator_name: campaign.creator().name.clone(),
            objective: campaign.objective().label(),
            budget_label: format_amount(campaign.budget(), CURRENCY_SYMBOL),
            platforms: campaign.platforms().to_vec(),
        }
    }
}

/// Full campaign record plus display labels, for the detail screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDetail {
    /// The stored record.
    #[serde(flatten)]
    pub campaign: Campaign,
    /// Objective label.
    pub objective_label: &'static str,
    /// Audience scope label.
    pub audience_label: &'static str,
    /// Formatted budget.
    pub budget_label: String,
}

/// Lists every campaign, most recent first.
#[must_use]
pub fn list_campaigns(repo: &CampaignRepository) -> Vec<CampaignSummary> {
    repo.list().iter().map(CampaignSummary::from).collect()
}

/// Retrieves a campaign by id.
///
/// # Errors
///
/// Returns `DomainError::CampaignNotFound` if no campaign has `id`.
pub fn get_campaign_by_id(
    repo: &CampaignRepository,
    id: &str,
) -> Result<CampaignDetail, DomainError> {
    let campaign = repo
        .get_by_id(id)
        .ok_or_else(|| DomainError::CampaignNotFound(id.to_owned()))?;
    Ok(CampaignDetail {
        campaign: campaign.clone(),
        objective_label: campaign.objective().label(),
        audience_label: campaign.audience_scope().label(),
        budget_label: format_amount(campaign.budget(), CURRENCY_SYMBOL),
    })
}

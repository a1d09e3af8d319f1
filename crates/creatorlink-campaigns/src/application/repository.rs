//! The campaign repository.
//!
//! Holds every finalized campaign, most recent first, and mirrors the whole
//! collection to the `campaigns` storage key after each append. Stored
//! entries are never mutated or removed.

use std::collections::HashSet;
use std::sync::Arc;

use creatorlink_core::clock::Clock;
use creatorlink_core::command::Command;
use creatorlink_core::error::DomainError;
use creatorlink_core::id::IdGenerator;
use creatorlink_core::storage::{KeyValueStore, read_json, write_json};
use tracing::{debug, info, warn};

use crate::domain::campaign::{Campaign, CampaignId};
use crate::domain::commands::AppendCampaign;

/// Storage key of the campaign collection.
pub const CAMPAIGNS_KEY: &str = "campaigns";

/// Fresh ids to try before giving up on a collision with a stored id.
const MAX_ID_ATTEMPTS: usize = 8;

/// Durable, append-only collection of finalized campaigns.
pub struct CampaignRepository {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    campaigns: Vec<Campaign>,
}

impl CampaignRepository {
    /// Hydrates the repository from `store`.
    ///
    /// Absent or unreadable data yields an empty collection; the failure is
    /// logged and never returned. Records repeating an earlier id are
    /// dropped so ids stay unique.
    #[must_use]
    pub fn initialize(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let stored = match read_json::<Vec<Campaign>>(store.as_ref(), CAMPAIGNS_KEY) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "discarding unreadable campaign collection");
                Vec::new()
            }
        };

        let mut seen = HashSet::new();
        let mut campaigns = Vec::with_capacity(stored.len());
        for campaign in stored {
            if seen.insert(campaign.id().clone()) {
                campaigns.push(campaign);
            } else {
                warn!(campaign_id = %campaign.id(), "dropping stored campaign with duplicate id");
            }
        }
        debug!(count = campaigns.len(), "campaign repository hydrated");

        Self {
            store,
            clock,
            ids,
            campaigns,
        }
    }

    /// Stores a new campaign built from `request` and returns its id.
    ///
    /// The campaign is stamped with the current time, marked active and
    /// placed at the head of the collection. The full collection is written
    /// to storage before the in-memory state changes, so a failed write
    /// leaves the repository as it was.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the request is incomplete,
    /// `DomainError::Invariant` if no unused id could be generated, or
    /// `DomainError::Infrastructure` if the collection cannot be written.
    pub fn append(&mut self, request: AppendCampaign) -> Result<CampaignId, DomainError> {
        request.validate()?;
        let id = self.unused_id()?;
        debug!(command = request.command_type(), campaign_id = %id, "appending campaign");

        let campaign = Campaign::new(
            id.clone(),
            self.clock.now(),
            request.creator,
            request.objective,
            request.brief,
            request.content,
            request.budget,
            request.audience_scope,
            request.platforms,
        );

        let mut next = Vec::with_capacity(self.campaigns.len() + 1);
        next.push(campaign);
        next.extend(self.campaigns.iter().cloned());
        write_json(self.store.as_ref(), CAMPAIGNS_KEY, &next)?;
        self.campaigns = next;

        info!(campaign_id = %id, total = self.campaigns.len(), "campaign created");
        Ok(id)
    }

    /// Point-in-time snapshot of every campaign, most recent first.
    #[must_use]
    pub fn list(&self) -> Vec<Campaign> {
        self.campaigns.clone()
    }

    /// Looks up a campaign by id.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id().as_str() == id)
    }

    /// Number of stored campaigns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    /// Whether no campaign has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    fn unused_id(&self) -> Result<CampaignId, DomainError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = CampaignId::new(self.ids.next_id());
            if self.get_by_id(candidate.as_str()).is_none() {
                return Ok(candidate);
            }
            warn!(campaign_id = %candidate, "generated campaign id already in use");
        }
        Err(DomainError::Invariant(format!(
            "no unused campaign id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }
}

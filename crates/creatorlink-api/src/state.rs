//! Shared application state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use creatorlink_campaigns::application::repository::CampaignRepository;
use creatorlink_core::clock::Clock;
use creatorlink_core::id::IdGenerator;
use creatorlink_core::storage::KeyValueStore;
use creatorlink_directory::CreatorDirectory;
use creatorlink_wizard::application::controller::CampaignWizard;
use creatorlink_wizard::application::resume::ResumePolicy;

/// Application state shared across all request handlers.
///
/// The wizard and the repository share one storage scope. Handlers that
/// need both lock the wizard first.
#[derive(Clone)]
pub struct AppState {
    /// Storage scope for the draft and the campaign collection.
    pub store: Arc<dyn KeyValueStore>,
    /// Resume policy used whenever the wizard is mounted.
    pub resume_policy: ResumePolicy,
    /// Read-only creator directory.
    pub directory: Arc<CreatorDirectory>,
    wizard: Arc<Mutex<CampaignWizard>>,
    campaigns: Arc<Mutex<CampaignRepository>>,
}

impl AppState {
    /// Create new application state, hydrating the wizard and the
    /// repository from `store`.
    #[must_use]
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        resume_policy: ResumePolicy,
        directory: CreatorDirectory,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let campaigns = CampaignRepository::initialize(Arc::clone(&store), clock, ids);
        let wizard = CampaignWizard::initialize(Arc::clone(&store), resume_policy, None);
        Self {
            store,
            resume_policy,
            directory: Arc::new(directory),
            wizard: Arc::new(Mutex::new(wizard)),
            campaigns: Arc::new(Mutex::new(campaigns)),
        }
    }

    /// Locks the wizard.
    pub fn wizard(&self) -> MutexGuard<'_, CampaignWizard> {
        self.wizard.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locks the campaign repository.
    pub fn campaigns(&self) -> MutexGuard<'_, CampaignRepository> {
        self.campaigns.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

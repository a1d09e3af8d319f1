//! The campaign wizard controller.
//!
//! Owns the single in-progress draft for one storage scope. Every accepted
//! command rewrites the whole draft under the `campaign-draft` key before
//! the in-memory draft changes; there is no separate save step. Finalizing
//! appends a campaign to the repository and deletes the stored draft.

use std::sync::Arc;

use creatorlink_campaigns::application::repository::CampaignRepository;
use creatorlink_campaigns::domain::campaign::{CampaignContent, CampaignCreator, CampaignId};
use creatorlink_campaigns::domain::attributes::ContentKind;
use creatorlink_campaigns::domain::commands::AppendCampaign;
use creatorlink_core::command::Command;
use creatorlink_core::error::DomainError;
use creatorlink_core::storage::{KeyValueStore, read_json, write_json};
use tracing::{debug, info, warn};

use crate::application::resume::ResumePolicy;
use crate::domain::commands::DraftCommand;
use crate::domain::draft::{ContentSource, CreatorRef, Draft, DraftRecord};
use crate::domain::review::ReviewSummary;
use crate::domain::steps::WizardStep;

/// Storage key of the in-progress draft.
pub const DRAFT_KEY: &str = "campaign-draft";

/// Storage key of the current step, written only under
/// [`ResumePolicy::PersistStep`].
pub const DRAFT_STEP_KEY: &str = "campaign-draft-step";

/// Drives one draft through the wizard steps.
pub struct CampaignWizard {
    store: Arc<dyn KeyValueStore>,
    policy: ResumePolicy,
    draft: Draft,
    current_step: WizardStep,
}

impl CampaignWizard {
    /// Mounts the wizard.
    ///
    /// A draft already in `store` is always resumed, even when `seed` names
    /// a different creator. Without a stored draft, `seed` pre-fills the
    /// creator step and is persisted immediately. Unreadable stored data is
    /// logged and treated as absent.
    #[must_use]
    pub fn initialize(
        store: Arc<dyn KeyValueStore>,
        policy: ResumePolicy,
        seed: Option<CreatorRef>,
    ) -> Self {
        let persisted = match read_json::<DraftRecord>(store.as_ref(), DRAFT_KEY) {
            Ok(record) => record.map(Draft::from_record),
            Err(e) => {
                warn!(error = %e, "discarding unreadable campaign draft");
                None
            }
        };

        let mut wizard = Self {
            store,
            policy,
            draft: Draft::default(),
            current_step: WizardStep::FIRST,
        };

        match (persisted, seed) {
            (Some(draft), seed) => {
                if let Some(seed) = seed {
                    info!(seed_creator = %seed.id, "resuming stored draft instead of seeding");
                }
                wizard.draft = draft;
                wizard.current_step = wizard.resume_step();
            }
            (None, Some(seed)) => {
                debug!(creator_id = %seed.id, "seeding draft from creator");
                wizard.draft = Draft::seeded(seed);
                if let Err(e) = wizard.persist_draft(&wizard.draft) {
                    warn!(error = %e, "could not persist seeded draft");
                }
            }
            (None, None) => {}
        }

        debug!(step = %wizard.current_step, policy = %policy, "wizard mounted");
        wizard
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The step on screen.
    #[must_use]
    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    /// The configured resume policy.
    #[must_use]
    pub fn policy(&self) -> ResumePolicy {
        self.policy
    }

    /// Whether `step`'s gate holds for the current draft.
    #[must_use]
    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        step.is_satisfied_by(&self.draft)
    }

    /// Whether [`CampaignWizard::advance`] would move forward.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.current_step.next().is_some() && self.is_step_valid(self.current_step)
    }

    /// The earliest step whose gate does not hold.
    #[must_use]
    pub fn first_invalid_step(&self) -> Option<WizardStep> {
        WizardStep::ALL
            .into_iter()
            .find(|step| !self.is_step_valid(*step))
    }

    /// Formatted read-back for the review step, once the draft is complete.
    #[must_use]
    pub fn review_summary(&self) -> Option<ReviewSummary> {
        ReviewSummary::from_draft(&self.draft)
    }

    /// Applies one mutation and persists the resulting draft.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the command is rejected, or
    /// `DomainError::Infrastructure` if the draft cannot be written. In both
    /// cases the draft is unchanged.
    pub fn apply(&mut self, command: DraftCommand) -> Result<(), DomainError> {
        let command_type = command.command_type();
        let mut next = self.draft.clone();
        if let Err(e) = next.apply(command) {
            debug!(command = command_type, error = %e, "draft command rejected");
            return Err(e);
        }
        self.persist_draft(&next)?;
        self.draft = next;
        debug!(command = command_type, step = %self.current_step, "draft updated");
        Ok(())
    }

    /// Moves to the next step if the current step's gate holds. Otherwise,
    /// or on the last step, nothing changes. Returns the resulting step.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the step must be persisted
    /// and the write fails; the step is then unchanged.
    pub fn advance(&mut self) -> Result<WizardStep, DomainError> {
        if !self.is_step_valid(self.current_step) {
            debug!(step = %self.current_step, "advance blocked by step gate");
            return Ok(self.current_step);
        }
        if let Some(next) = self.current_step.next() {
            self.move_to(next)?;
        }
        Ok(self.current_step)
    }

    /// Moves to the previous step; stays put on the first one. Returns the
    /// resulting step.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the step must be persisted
    /// and the write fails; the step is then unchanged.
    pub fn retreat(&mut self) -> Result<WizardStep, DomainError> {
        if let Some(previous) = self.current_step.previous() {
            self.move_to(previous)?;
        }
        Ok(self.current_step)
    }

    /// Turns the draft into a campaign and ends the draft's lifetime.
    ///
    /// On success the stored draft is deleted and the wizard is back on an
    /// empty first step. A failure to delete the stored draft is logged but
    /// does not undo the campaign.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Invariant` if called off the review step or
    /// without a creator, `DomainError::Validation` if an earlier step no
    /// longer holds, or any error from the repository's append.
    pub fn finalize(&mut self, repo: &mut CampaignRepository) -> Result<CampaignId, DomainError> {
        let request = self.finalize_request()?;
        let id = repo.append(request)?;

        self.draft = Draft::default();
        self.current_step = WizardStep::FIRST;
        for key in [DRAFT_KEY, DRAFT_STEP_KEY] {
            if let Err(e) = self.store.remove(key) {
                warn!(key, error = %e, "could not delete finalized draft");
            }
        }

        info!(campaign_id = %id, "draft finalized");
        Ok(id)
    }

    /// Discards the draft, in storage and in memory, and returns to the
    /// first step.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the stored draft cannot be
    /// deleted; the in-memory draft is then kept.
    pub fn reset(&mut self) -> Result<(), DomainError> {
        self.store.remove(DRAFT_KEY)?;
        self.store.remove(DRAFT_STEP_KEY)?;
        self.draft = Draft::default();
        self.current_step = WizardStep::FIRST;
        info!("draft discarded");
        Ok(())
    }

    fn persist_draft(&self, draft: &Draft) -> Result<(), DomainError> {
        write_json(self.store.as_ref(), DRAFT_KEY, &draft.to_record())
    }

    fn move_to(&mut self, step: WizardStep) -> Result<(), DomainError> {
        if self.policy == ResumePolicy::PersistStep {
            write_json(self.store.as_ref(), DRAFT_STEP_KEY, &step)?;
        }
        debug!(from = %self.current_step, to = %step, "wizard step changed");
        self.current_step = step;
        Ok(())
    }

    fn resume_step(&self) -> WizardStep {
        if self.policy == ResumePolicy::AlwaysRestart {
            return WizardStep::FIRST;
        }
        let stored = match read_json::<WizardStep>(self.store.as_ref(), DRAFT_STEP_KEY) {
            Ok(step) => step.unwrap_or(WizardStep::FIRST),
            Err(e) => {
                warn!(error = %e, "discarding unreadable wizard step");
                WizardStep::FIRST
            }
        };
        let furthest = self.first_invalid_step().unwrap_or(WizardStep::LAST);
        stored.min(furthest)
    }

    fn finalize_request(&self) -> Result<AppendCampaign, DomainError> {
        if self.current_step != WizardStep::LAST {
            return Err(DomainError::Invariant(format!(
                "finalize is only available on the review step, not {}",
                self.current_step
            )));
        }
        let creator = self.draft.creator().ok_or_else(|| {
            DomainError::Invariant("draft reached review without a creator".into())
        })?;
        if let Some(step) = self.first_invalid_step() {
            return Err(DomainError::Validation(format!(
                "{step} step is incomplete: {}",
                step.requirement()
            )));
        }
        let objective = self
            .draft
            .objective()
            .ok_or_else(|| DomainError::Invariant("complete draft has no objective".into()))?;
        let content = match self.draft.content_source() {
            Some(ContentSource::Upload(preview)) => CampaignContent {
                kind: ContentKind::Upload,
                reference: preview.reference,
            },
            Some(ContentSource::Link(link)) => CampaignContent {
                kind: ContentKind::Link,
                reference: link,
            },
            None => {
                return Err(DomainError::Invariant(
                    "complete draft has no content".into(),
                ));
            }
        };

        Ok(AppendCampaign {
            creator: CampaignCreator {
                id: creator.id.clone(),
                name: creator.summary.name.clone(),
                avatar: creator.summary.avatar.clone(),
                handle: creator.summary.handle.clone(),
            },
            objective,
            brief: self.draft.brief().to_owned(),
            content,
            budget: self.draft.budget(),
            audience_scope: self.draft.audience_scope(),
            platforms: self.draft.platforms().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use creatorlink_campaigns::application::repository::CampaignRepository;
    use creatorlink_campaigns::domain::attributes::{ContentKind, Objective, Platform};
    use creatorlink_campaigns::domain::campaign::CampaignStatus;
    use creatorlink_core::error::DomainError;
    use creatorlink_core::storage::KeyValueStore;
    use creatorlink_storage::MemoryStore;
    use creatorlink_test_support::{
        FailingStore, FixedClock, RecordingStore, SequentialIdGenerator, SteppingClock, StoreWrite,
    };

    use super::{CampaignWizard, DRAFT_KEY, DRAFT_STEP_KEY};
    use crate::application::resume::ResumePolicy;
    use crate::domain::commands::DraftCommand;
    use crate::domain::draft::{CreatorRef, CreatorSummary};
    use crate::domain::steps::WizardStep;
    use crate::domain::validation::{FileCandidate, MAX_UPLOAD_BYTES, MIN_BRIEF_CHARS};

    fn creator(id: &str, name: &str) -> CreatorRef {
        CreatorRef {
            id: id.to_owned(),
            summary: CreatorSummary {
                name: name.to_owned(),
                avatar: Some(format!("/avatars/{id}.jpg")),
                handle: None,
                followers: 980_000,
                categories: vec!["Lifestyle".to_owned()],
            },
        }
    }

    fn repository(store: Arc<dyn KeyValueStore>) -> CampaignRepository {
        CampaignRepository::initialize(
            store,
            Arc::new(SteppingClock::starting_at(
                Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
            )),
            Arc::new(SequentialIdGenerator::new("campaign")),
        )
    }

    fn fill_every_step(wizard: &mut CampaignWizard, creator_ref: CreatorRef) {
        for command in [
            DraftCommand::SelectCreator {
                creator: creator_ref,
            },
            DraftCommand::SetObjective {
                objective: Objective::Sales,
            },
            DraftCommand::SetBrief {
                brief: "b".repeat(130),
            },
            DraftCommand::SetLink {
                link: "https://example.com/post".to_owned(),
            },
            DraftCommand::SetBudget { budget: 5_000 },
            DraftCommand::TogglePlatform {
                platform: Platform::InstagramReels,
            },
        ] {
            wizard.apply(command).unwrap();
        }
    }

    fn advance_to_review(wizard: &mut CampaignWizard) {
        while wizard.current_step() != WizardStep::Review {
            let before = wizard.current_step();
            assert_ne!(wizard.advance().unwrap(), before, "stuck on {before}");
        }
    }

    #[test]
    fn test_finalize_scenario_creates_single_active_campaign() {
        // Arrange
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut repo = repository(Arc::clone(&store));
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::AlwaysRestart, None);
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));
        advance_to_review(&mut wizard);

        // Act
        let id = wizard.finalize(&mut repo).unwrap();

        // Assert
        let campaigns = repo.list();
        assert_eq!(campaigns.len(), 1);
        let campaign = &campaigns[0];
        assert_eq!(campaign.id(), &id);
        assert_eq!(campaign.creator().id, "7");
        assert_eq!(campaign.creator().name, "Priya Sharma");
        assert_eq!(campaign.budget(), 5_000);
        assert_eq!(campaign.platforms(), &[Platform::InstagramReels]);
        assert_eq!(campaign.status(), CampaignStatus::Active);
        assert_eq!(campaign.objective(), Objective::Sales);
        assert_eq!(campaign.content().kind, ContentKind::Link);
        assert_eq!(campaign.content().reference, "https://example.com/post");
    }

    #[test]
    fn test_finalize_discards_the_draft() {
        // Arrange
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut repo = repository(Arc::clone(&store));
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::PersistStep, None);
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));
        advance_to_review(&mut wizard);

        // Act
        wizard.finalize(&mut repo).unwrap();

        // Assert
        assert!(wizard.draft().is_empty());
        assert_eq!(wizard.current_step(), WizardStep::Creator);
        assert_eq!(store.get(DRAFT_KEY).unwrap(), None);
        assert_eq!(store.get(DRAFT_STEP_KEY).unwrap(), None);
        let remounted = CampaignWizard::initialize(store, ResumePolicy::PersistStep, None);
        assert!(remounted.draft().is_empty());
    }

    #[test]
    fn test_two_finalized_drafts_get_distinct_ids_newest_first() {
        // Arrange
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut repo = repository(Arc::clone(&store));
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::AlwaysRestart, None);

        // Act
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));
        advance_to_review(&mut wizard);
        let first = wizard.finalize(&mut repo).unwrap();

        fill_every_step(&mut wizard, creator("3", "Rohan Kapoor"));
        advance_to_review(&mut wizard);
        let second = wizard.finalize(&mut repo).unwrap();

        // Assert
        assert_ne!(first, second);
        let campaigns = repo.list();
        assert_eq!(campaigns.len(), 2);
        assert_eq!(campaigns[0].id(), &second);
        assert_eq!(campaigns[0].creator().id, "3");
        assert_eq!(campaigns[1].id(), &first);
    }

    #[test]
    fn test_get_by_id_returns_the_finalized_record() {
        // Arrange
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut repo = CampaignRepository::initialize(
            Arc::clone(&store),
            Arc::new(FixedClock(
                Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
            )),
            Arc::new(SequentialIdGenerator::new("campaign")),
        );
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::AlwaysRestart, None);
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));
        advance_to_review(&mut wizard);

        // Act
        let id = wizard.finalize(&mut repo).unwrap();

        // Assert
        let campaign = repo.get_by_id(id.as_str()).unwrap();
        assert_eq!(campaign.status(), CampaignStatus::Active);
        assert_eq!(
            campaign.created_at(),
            Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
        );
        let json = serde_json::to_value(campaign).unwrap();
        assert!(!json["createdAt"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_advance_without_creator_stays_on_first_step() {
        // Arrange
        let mut wizard = CampaignWizard::initialize(
            Arc::new(MemoryStore::new()),
            ResumePolicy::AlwaysRestart,
            None,
        );

        // Act
        let step = wizard.advance().unwrap();

        // Assert
        assert_eq!(step, WizardStep::Creator);
        assert_eq!(wizard.current_step(), WizardStep::Creator);
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_advance_stops_at_each_unmet_gate() {
        // Arrange
        let mut wizard = CampaignWizard::initialize(
            Arc::new(MemoryStore::new()),
            ResumePolicy::AlwaysRestart,
            Some(creator("7", "Priya Sharma")),
        );

        // Act / Assert: the creator gate holds, the brief gate does not.
        assert_eq!(wizard.advance().unwrap(), WizardStep::Brief);
        assert_eq!(wizard.advance().unwrap(), WizardStep::Brief);

        wizard
            .apply(DraftCommand::SetObjective {
                objective: Objective::Awareness,
            })
            .unwrap();
        wizard
            .apply(DraftCommand::SetBrief {
                brief: "x".repeat(MIN_BRIEF_CHARS - 1),
            })
            .unwrap();
        assert_eq!(wizard.advance().unwrap(), WizardStep::Brief);

        wizard
            .apply(DraftCommand::SetBrief {
                brief: "x".repeat(MIN_BRIEF_CHARS),
            })
            .unwrap();
        assert_eq!(wizard.advance().unwrap(), WizardStep::Content);
    }

    #[test]
    fn test_advance_is_capped_and_retreat_is_floored() {
        // Arrange
        let mut wizard = CampaignWizard::initialize(
            Arc::new(MemoryStore::new()),
            ResumePolicy::AlwaysRestart,
            None,
        );
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));
        advance_to_review(&mut wizard);

        // Act / Assert
        assert_eq!(wizard.advance().unwrap(), WizardStep::Review);
        for expected in [
            WizardStep::Targeting,
            WizardStep::Budget,
            WizardStep::Content,
            WizardStep::Brief,
            WizardStep::Creator,
            WizardStep::Creator,
        ] {
            assert_eq!(wizard.retreat().unwrap(), expected);
        }
    }

    #[test]
    fn test_every_accepted_command_is_persisted() {
        // Arrange
        let store = Arc::new(RecordingStore::new());
        let mut wizard = CampaignWizard::initialize(
            Arc::clone(&store) as Arc<dyn KeyValueStore>,
            ResumePolicy::AlwaysRestart,
            None,
        );

        // Act
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));

        // Assert
        assert_eq!(store.writes_to(DRAFT_KEY), 6);
        match store.writes().last().unwrap() {
            StoreWrite::Set(key, value) => {
                assert_eq!(key, DRAFT_KEY);
                assert!(value.contains("Instagram Reels"));
            }
            other => panic!("expected Set, got {other:?}"),
        }
    }

    #[test]
    fn test_rejected_command_is_not_persisted() {
        // Arrange
        let store = Arc::new(RecordingStore::new());
        let mut wizard = CampaignWizard::initialize(
            Arc::clone(&store) as Arc<dyn KeyValueStore>,
            ResumePolicy::AlwaysRestart,
            None,
        );

        // Act
        let result = wizard.apply(DraftCommand::AttachFile {
            file: FileCandidate {
                name: "huge.mov".to_owned(),
                content_type: "video/quicktime".to_owned(),
                size_bytes: MAX_UPLOAD_BYTES + 1,
                location: "blob:huge".to_owned(),
            },
        });

        // Assert
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(store.writes().is_empty());
        assert!(wizard.draft().file_preview().is_none());
    }

    #[test]
    fn test_draft_survives_reload() {
        // Arrange
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::AlwaysRestart, None);
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));
        wizard
            .apply(DraftCommand::AttachFile {
                file: FileCandidate {
                    name: "reel.mp4".to_owned(),
                    content_type: "video/mp4".to_owned(),
                    size_bytes: 1_024,
                    location: "blob:reel".to_owned(),
                },
            })
            .unwrap();
        let before = wizard.draft().clone();

        // Act
        let reloaded = CampaignWizard::initialize(store, ResumePolicy::AlwaysRestart, None);

        // Assert
        assert_eq!(reloaded.draft(), &before);
    }

    #[test]
    fn test_always_restart_policy_resumes_on_first_step() {
        // Arrange
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::AlwaysRestart, None);
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));
        advance_to_review(&mut wizard);

        // Act
        let reloaded = CampaignWizard::initialize(store.clone(), ResumePolicy::AlwaysRestart, None);

        // Assert
        assert_eq!(reloaded.current_step(), WizardStep::Creator);
        assert!(reloaded.is_step_valid(WizardStep::Review));
        assert_eq!(store.get(DRAFT_STEP_KEY).unwrap(), None);
    }

    #[test]
    fn test_persist_step_policy_resumes_where_user_left_off() {
        // Arrange
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::PersistStep, None);
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        wizard.advance().unwrap();

        // Act
        let reloaded = CampaignWizard::initialize(store, ResumePolicy::PersistStep, None);

        // Assert
        assert_eq!(reloaded.current_step(), WizardStep::Budget);
    }

    #[test]
    fn test_persist_step_policy_never_resumes_past_a_failing_gate() {
        // Arrange: the stored step says review, but the brief is too short.
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::PersistStep, None);
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));
        advance_to_review(&mut wizard);
        wizard
            .apply(DraftCommand::SetBrief {
                brief: "too short".to_owned(),
            })
            .unwrap();

        // Act
        let reloaded = CampaignWizard::initialize(store, ResumePolicy::PersistStep, None);

        // Assert
        assert_eq!(reloaded.current_step(), WizardStep::Brief);
    }

    #[test]
    fn test_seed_prefills_creator_when_nothing_is_stored() {
        // Arrange
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

        // Act
        let wizard = CampaignWizard::initialize(
            Arc::clone(&store),
            ResumePolicy::AlwaysRestart,
            Some(creator("7", "Priya Sharma")),
        );

        // Assert
        assert_eq!(wizard.draft().creator().unwrap().id, "7");
        assert!(wizard.is_step_valid(WizardStep::Creator));
        assert!(store.get(DRAFT_KEY).unwrap().is_some());
    }

    #[test]
    fn test_stored_draft_takes_precedence_over_seed() {
        // Arrange
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::AlwaysRestart, None);
        wizard
            .apply(DraftCommand::SelectCreator {
                creator: creator("3", "Rohan Kapoor"),
            })
            .unwrap();
        wizard
            .apply(DraftCommand::SetBudget { budget: 9_000 })
            .unwrap();

        // Act
        let reloaded = CampaignWizard::initialize(
            store,
            ResumePolicy::AlwaysRestart,
            Some(creator("7", "Priya Sharma")),
        );

        // Assert
        assert_eq!(reloaded.draft().creator().unwrap().id, "3");
        assert_eq!(reloaded.draft().budget(), 9_000);
    }

    #[test]
    fn test_corrupt_stored_draft_falls_back_to_seed() {
        // Arrange
        let store: Arc<dyn KeyValueStore> =
            Arc::new(MemoryStore::with_entries([(DRAFT_KEY, "{\"brief\": 12")]));

        // Act
        let wizard = CampaignWizard::initialize(
            store,
            ResumePolicy::AlwaysRestart,
            Some(creator("7", "Priya Sharma")),
        );

        // Assert
        assert_eq!(wizard.draft().creator().unwrap().id, "7");
        assert_eq!(wizard.draft().brief(), "");
    }

    #[test]
    fn test_unreadable_storage_starts_empty() {
        let wizard =
            CampaignWizard::initialize(Arc::new(FailingStore), ResumePolicy::PersistStep, None);

        assert!(wizard.draft().is_empty());
        assert_eq!(wizard.current_step(), WizardStep::Creator);
    }

    #[test]
    fn test_failed_write_leaves_draft_unchanged() {
        // Arrange
        let mut wizard =
            CampaignWizard::initialize(Arc::new(FailingStore), ResumePolicy::AlwaysRestart, None);

        // Act
        let result = wizard.apply(DraftCommand::SetBudget { budget: 5_000 });

        // Assert
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
        assert_eq!(wizard.draft().budget(), 0);
    }

    #[test]
    fn test_finalize_off_review_step_is_rejected() {
        // Arrange
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut repo = repository(Arc::clone(&store));
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::AlwaysRestart, None);
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));

        // Act
        let result = wizard.finalize(&mut repo);

        // Assert
        assert!(matches!(result, Err(DomainError::Invariant(_))));
        assert!(repo.is_empty());
        assert!(store.get(DRAFT_KEY).unwrap().is_some());
    }

    #[test]
    fn test_finalize_without_creator_is_an_invariant_violation() {
        // Arrange: reach review, then clear the creator from the review step.
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut repo = repository(Arc::clone(&store));
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::AlwaysRestart, None);
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));
        advance_to_review(&mut wizard);
        wizard.apply(DraftCommand::ClearCreator).unwrap();

        // Act
        let result = wizard.finalize(&mut repo);

        // Assert
        match result.unwrap_err() {
            DomainError::Invariant(msg) => assert!(msg.contains("creator")),
            other => panic!("expected Invariant, got {other:?}"),
        }
        assert!(repo.is_empty());
    }

    #[test]
    fn test_finalize_with_invalidated_step_is_rejected() {
        // Arrange
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut repo = repository(Arc::clone(&store));
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::AlwaysRestart, None);
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));
        advance_to_review(&mut wizard);
        wizard
            .apply(DraftCommand::TogglePlatform {
                platform: Platform::InstagramReels,
            })
            .unwrap();

        // Act
        let result = wizard.finalize(&mut repo);

        // Assert
        match result.unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("Targeting")),
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(wizard.first_invalid_step(), Some(WizardStep::Targeting));
    }

    #[test]
    fn test_failed_append_keeps_the_draft() {
        // Arrange
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut repo = repository(Arc::new(FailingStore));
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::AlwaysRestart, None);
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));
        advance_to_review(&mut wizard);
        let before = wizard.draft().clone();

        // Act
        let result = wizard.finalize(&mut repo);

        // Assert
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
        assert_eq!(wizard.draft(), &before);
        assert_eq!(wizard.current_step(), WizardStep::Review);
        assert!(store.get(DRAFT_KEY).unwrap().is_some());
    }

    #[test]
    fn test_reset_discards_stored_draft() {
        // Arrange
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut wizard =
            CampaignWizard::initialize(Arc::clone(&store), ResumePolicy::AlwaysRestart, None);
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));
        wizard.advance().unwrap();

        // Act
        wizard.reset().unwrap();

        // Assert
        assert!(wizard.draft().is_empty());
        assert_eq!(wizard.current_step(), WizardStep::Creator);
        assert_eq!(store.get(DRAFT_KEY).unwrap(), None);
    }

    #[test]
    fn test_review_summary_is_available_once_complete() {
        // Arrange
        let mut wizard = CampaignWizard::initialize(
            Arc::new(MemoryStore::new()),
            ResumePolicy::AlwaysRestart,
            None,
        );
        assert!(wizard.review_summary().is_none());

        // Act
        fill_every_step(&mut wizard, creator("7", "Priya Sharma"));

        // Assert
        let summary = wizard.review_summary().unwrap();
        assert_eq!(summary.creator_name, "Priya Sharma");
        assert_eq!(summary.budget, "₹5,000");
        assert_eq!(summary.content, "Link: https://example.com/post");
    }
}

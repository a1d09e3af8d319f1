//! The in-progress campaign draft.

use creatorlink_campaigns::domain::attributes::{AudienceScope, ContentKind, Objective, Platform};
use creatorlink_core::error::DomainError;
use creatorlink_directory::Creator;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::commands::DraftCommand;
use super::validation::{FilePreview, link_is_present, validate_upload};

/// Cached display details of the selected creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorSummary {
    /// Display name.
    pub name: String,
    /// Avatar image location.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Social handle.
    #[serde(default)]
    pub handle: Option<String>,
    /// Follower count.
    #[serde(default)]
    pub followers: u64,
    /// Content categories.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Reference to the creator chosen in the first step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorRef {
    /// Directory identifier.
    pub id: String,
    /// Display details cached at selection time.
    pub summary: CreatorSummary,
}

impl From<&Creator> for CreatorRef {
    fn from(creator: &Creator) -> Self {
        Self {
            id: creator.id.clone(),
            summary: CreatorSummary {
                name: creator.name.clone(),
                avatar: creator.avatar.clone(),
                handle: creator.handle.clone(),
                followers: creator.followers,
                categories: creator.categories.clone(),
            },
        }
    }
}

/// The content choice that is currently in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// A validated upload.
    Upload(FilePreview),
    /// A link to existing content.
    Link(String),
}

/// Mutable, in-progress campaign. Changed only through [`DraftCommand`].
///
/// Both content branches are retained: switching from upload to link and
/// back keeps the file that was already attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    creator: Option<CreatorRef>,
    objective: Option<Objective>,
    brief: String,
    content_type: ContentKind,
    file_preview: Option<FilePreview>,
    link: String,
    budget: u64,
    audience_scope: AudienceScope,
    platforms: Vec<Platform>,
}

impl Draft {
    /// Creates a draft with step 1 already filled in.
    #[must_use]
    pub fn seeded(creator: CreatorRef) -> Self {
        Self {
            creator: Some(creator),
            ..Self::default()
        }
    }

    /// The selected creator.
    #[must_use]
    pub fn creator(&self) -> Option<&CreatorRef> {
        self.creator.as_ref()
    }

    /// The chosen objective.
    #[must_use]
    pub fn objective(&self) -> Option<Objective> {
        self.objective
    }

    /// The brief, exactly as typed.
    #[must_use]
    pub fn brief(&self) -> &str {
        &self.brief
    }

    /// Which content tab is active.
    #[must_use]
    pub fn content_type(&self) -> ContentKind {
        self.content_type
    }

    /// The attached upload, whichever tab is active.
    #[must_use]
    pub fn file_preview(&self) -> Option<&FilePreview> {
        self.file_preview.as_ref()
    }

    /// The entered link, whichever tab is active.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
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

    /// Selected platforms, in selection order.
    #[must_use]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// The active content branch, if it holds a usable value.
    #[must_use]
    pub fn content_source(&self) -> Option<ContentSource> {
        match self.content_type {
            ContentKind::Upload => self.file_preview.clone().map(ContentSource::Upload),
            ContentKind::Link if link_is_present(&self.link) => {
                Some(ContentSource::Link(self.link.trim().to_owned()))
            }
            ContentKind::Link => None,
        }
    }

    /// Whether nothing has been entered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies one mutation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` with a user-facing message if the
    /// command's value is rejected; the draft is left unchanged.
    pub fn apply(&mut self, command: DraftCommand) -> Result<(), DomainError> {
        match command {
            DraftCommand::SelectCreator { creator } => {
                if creator.id.trim().is_empty() || creator.summary.name.trim().is_empty() {
                    return Err(DomainError::Validation(
                        "creator must have an id and a name".into(),
                    ));
                }
                self.creator = Some(creator);
            }
            DraftCommand::ClearCreator => self.creator = None,
            DraftCommand::SetObjective { objective } => self.objective = Some(objective),
            DraftCommand::SetBrief { brief } => self.brief = brief,
            DraftCommand::SetContentType { content_type } => self.content_type = content_type,
            DraftCommand::AttachFile { file } => {
                let preview = validate_upload(&file)
                    .map_err(|rejection| DomainError::Validation(rejection.to_string()))?;
                self.file_preview = Some(preview);
                self.content_type = ContentKind::Upload;
            }
            DraftCommand::RemoveFile => self.file_preview = None,
            DraftCommand::SetLink { link } => {
                self.link = link;
                self.content_type = ContentKind::Link;
            }
            DraftCommand::SetBudget { budget } => self.budget = budget,
            DraftCommand::SetAudienceScope { audience_scope } => {
                if !audience_scope.is_available() {
                    return Err(DomainError::Validation(format!(
                        "{} targeting is not available yet",
                        audience_scope.label()
                    )));
                }
                self.audience_scope = audience_scope;
            }
            DraftCommand::TogglePlatform { platform } => {
                if let Some(pos) = self.platforms.iter().position(|p| *p == platform) {
                    self.platforms.remove(pos);
                } else {
                    self.platforms.push(platform);
                }
            }
        }
        Ok(())
    }

    /// Converts the draft into its stored record.
    #[must_use]
    pub fn to_record(&self) -> DraftRecord {
        DraftRecord {
            creator_id: self.creator.as_ref().map(|c| c.id.clone()),
            creator_summary: self.creator.as_ref().map(|c| c.summary.clone()),
            objective: self.objective,
            brief: self.brief.clone(),
            content_type: self.content_type,
            content_file_preview: self.file_preview.clone(),
            content_link: self.link.clone(),
            budget: self.budget,
            audience_scope: self.audience_scope,
            platforms: self.platforms.clone(),
        }
    }

    /// Rebuilds a draft from a stored record.
    ///
    /// Records that no sequence of commands could have produced are
    /// repaired rather than rejected: a creator id without a summary (or
    /// the reverse) is dropped, an unavailable audience scope falls back to
    /// the default and repeated platforms are removed.
    #[must_use]
    pub fn from_record(record: DraftRecord) -> Self {
        let creator = match (record.creator_id, record.creator_summary) {
            (Some(id), Some(summary)) => Some(CreatorRef { id, summary }),
            (None, None) => None,
            _ => {
                warn!("stored draft has a partial creator reference; dropping it");
                None
            }
        };

        let audience_scope = if record.audience_scope.is_available() {
            record.audience_scope
        } else {
            warn!(scope = ?record.audience_scope, "stored draft has an unavailable audience scope");
            AudienceScope::default()
        };

        let mut platforms = Vec::with_capacity(record.platforms.len());
        for platform in record.platforms {
            if !platforms.contains(&platform) {
                platforms.push(platform);
            }
        }

        Self {
            creator,
            objective: record.objective,
            brief: record.brief,
            content_type: record.content_type,
            file_preview: record.content_file_preview,
            link: record.content_link,
            budget: record.budget,
            audience_scope,
            platforms,
        }
    }
}

/// Stored form of a [`Draft`] under the `campaign-draft` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    /// Selected creator id.
    #[serde(default)]
    pub creator_id: Option<String>,
    /// Selected creator's cached summary.
    #[serde(default)]
    pub creator_summary: Option<CreatorSummary>,
    /// Chosen objective.
    #[serde(default)]
    pub objective: Option<Objective>,
    /// Brief text.
    #[serde(default)]
    pub brief: String,
    /// Active content tab.
    #[serde(default)]
    pub content_type: ContentKind,
    /// Attached upload.
    #[serde(default)]
    pub content_file_preview: Option<FilePreview>,
    /// Entered link.
    #[serde(default)]
    pub content_link: String,
    /// Budget.
    #[serde(default)]
    pub budget: u64,
    /// Audience scope.
    #[serde(default)]
    pub audience_scope: AudienceScope,
    /// Selected platforms.
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

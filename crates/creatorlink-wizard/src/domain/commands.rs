//! Commands for the Campaign Wizard context.
//!
//! Each variant changes one field group of the draft. Values are checked
//! when the command is applied, not when it is built.

use creatorlink_campaigns::domain::attributes::{AudienceScope, ContentKind, Objective, Platform};
use creatorlink_core::command::Command;
use serde::{Deserialize, Serialize};

use super::draft::CreatorRef;
use super::validation::FileCandidate;

/// A single mutation of the wizard draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum DraftCommand {
    /// Choose the creator to book.
    SelectCreator {
        /// The chosen creator.
        creator: CreatorRef,
    },
    /// Unselect the creator.
    ClearCreator,
    /// Choose the campaign objective.
    SetObjective {
        /// The objective.
        objective: Objective,
    },
    /// Replace the brief text.
    SetBrief {
        /// The full brief.
        brief: String,
    },
    /// Switch between the upload and link tabs.
    SetContentType {
        /// The tab to activate.
        content_type: ContentKind,
    },
    /// Attach a file; it is validated before it reaches the draft.
    AttachFile {
        /// The picked file.
        file: FileCandidate,
    },
    /// Detach the uploaded file.
    RemoveFile,
    /// Replace the content link and switch to the link tab.
    SetLink {
        /// The link as typed.
        link: String,
    },
    /// Set the budget.
    SetBudget {
        /// Whole currency units.
        budget: u64,
    },
    /// Set the geographic reach.
    SetAudienceScope {
        /// The scope.
        audience_scope: AudienceScope,
    },
    /// Add the platform if absent, remove it if present.
    TogglePlatform {
        /// The platform.
        platform: Platform,
    },
}

impl Command for DraftCommand {
    fn command_type(&self) -> &'static str {
        match self {
            Self::SelectCreator { .. } => "wizard.select_creator",
            Self::ClearCreator => "wizard.clear_creator",
            Self::SetObjective { .. } => "wizard.set_objective",
            Self::SetBrief { .. } => "wizard.set_brief",
            Self::SetContentType { .. } => "wizard.set_content_type",
            Self::AttachFile { .. } => "wizard.attach_file",
            Self::RemoveFile => "wizard.remove_file",
            Self::SetLink { .. } => "wizard.set_link",
            Self::SetBudget { .. } => "wizard.set_budget",
            Self::SetAudienceScope { .. } => "wizard.set_audience_scope",
            Self::TogglePlatform { .. } => "wizard.toggle_platform",
        }
    }
}

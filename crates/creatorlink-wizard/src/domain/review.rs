//! Read-back of a complete draft for the review step.

use creatorlink_campaigns::domain::campaign::CURRENCY_SYMBOL;
use creatorlink_core::format::{format_amount, format_follower_count};
use serde::Serialize;

use super::draft::{ContentSource, Draft};
use super::steps::WizardStep;

/// Everything the review screen shows, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    /// Creator display name.
    pub creator_name: String,
    /// Creator handle, if known.
    pub creator_handle: Option<String>,
    /// Compact follower count.
    pub creator_followers: String,
    /// Objective label.
    pub objective: &'static str,
    /// The brief.
    pub brief: String,
    /// `Image: <file name>`, `Video: <file name>` or `Link: <url>`.
    pub content: String,
    /// Formatted budget.
    pub budget: String,
    /// Audience scope label.
    pub audience: &'static str,
    /// Platform labels in selection order.
    pub platforms: Vec<&'static str>,
}

impl ReviewSummary {
    /// Summarizes `draft`, or returns `None` while any step is incomplete.
    #[must_use]
    pub fn from_draft(draft: &Draft) -> Option<Self> {
        if !WizardStep::Review.is_satisfied_by(draft) {
            return None;
        }
        let creator = draft.creator()?;
        let content = match draft.content_source()? {
            ContentSource::Upload(preview) if preview.is_video() => {
                format!("Video: {}", preview.name)
            }
            ContentSource::Upload(preview) => format!("Image: {}", preview.name),
            ContentSource::Link(link) => format!("Link: {link}"),
        };
        Some(Self {
            creator_name: creator.summary.name.clone(),
            creator_handle: creator.summary.handle.clone(),
            creator_followers: format_follower_count(creator.summary.followers),
            objective: draft.objective()?.label(),
            brief: draft.brief().to_owned(),
            content,
            budget: format_amount(draft.budget(), CURRENCY_SYMBOL),
            audience: draft.audience_scope().label(),
            platforms: draft.platforms().iter().map(|p| p.label()).collect(),
        })
    }
}

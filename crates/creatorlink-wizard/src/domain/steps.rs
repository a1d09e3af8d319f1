//! Wizard steps and their gates.

use std::fmt;

use creatorlink_campaigns::domain::campaign::CURRENCY_SYMBOL;
use creatorlink_core::format::format_amount;
use serde::{Deserialize, Serialize};

use super::draft::Draft;
use super::validation::{MIN_BRIEF_CHARS, MIN_BUDGET, brief_meets_minimum, budget_meets_minimum};

/// One screen of the wizard. Steps are strictly ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Pick the creator.
    Creator,
    /// Objective and brief.
    Brief,
    /// Upload or link.
    Content,
    /// Budget.
    Budget,
    /// Audience and platforms.
    Targeting,
    /// Read back and launch.
    Review,
}

impl WizardStep {
    /// Every step, in order.
    pub const ALL: [Self; 6] = [
        Self::Creator,
        Self::Brief,
        Self::Content,
        Self::Budget,
        Self::Targeting,
        Self::Review,
    ];

    /// The first step.
    pub const FIRST: Self = Self::Creator;

    /// The terminal step.
    pub const LAST: Self = Self::Review;

    /// One-based position.
    #[must_use]
    pub fn number(self) -> usize {
        self as usize + 1
    }

    /// The following step, or `None` on the last one.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self as usize + 1).copied()
    }

    /// The preceding step, or `None` on the first one.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        (self as usize).checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Short title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Creator => "Creator",
            Self::Brief => "Brief",
            Self::Content => "Content",
            Self::Budget => "Budget",
            Self::Targeting => "Targeting",
            Self::Review => "Review",
        }
    }

    /// Inline hint shown while the step's gate does not hold.
    #[must_use]
    pub fn requirement(self) -> String {
        match self {
            Self::Creator => "Select a creator to continue".to_owned(),
            Self::Brief => format!(
                "Choose an objective and write a brief of at least {MIN_BRIEF_CHARS} characters"
            ),
            Self::Content => "Upload a file or paste a link to your content".to_owned(),
            Self::Budget => format!(
                "Set a budget of at least {}",
                format_amount(MIN_BUDGET, CURRENCY_SYMBOL)
            ),
            Self::Targeting => "Select at least one platform".to_owned(),
            Self::Review => "Complete every earlier step".to_owned(),
        }
    }

    /// Whether `draft` satisfies this step's gate.
    ///
    /// The review step has no fields of its own; it holds when every
    /// earlier step holds.
    #[must_use]
    pub fn is_satisfied_by(self, draft: &Draft) -> bool {
        match self {
            Self::Creator => draft.creator().is_some(),
            Self::Brief => draft.objective().is_some() && brief_meets_minimum(draft.brief()),
            Self::Content => draft.content_source().is_some(),
            Self::Budget => budget_meets_minimum(draft.budget()),
            Self::Targeting => !draft.platforms().is_empty(),
            Self::Review => Self::ALL[..Self::Review as usize]
                .iter()
                .all(|step| step.is_satisfied_by(draft)),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

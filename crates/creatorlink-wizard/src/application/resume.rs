//! Where a remounted wizard resumes.

use std::fmt;
use std::str::FromStr;

use creatorlink_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How the current step is treated across reloads. Field values are always
/// persisted; this only governs the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResumePolicy {
    /// Every mount starts at the first step, even with fields filled in.
    #[default]
    AlwaysRestart,
    /// The step is stored and restored, but never past the first step
    /// whose gate no longer holds.
    PersistStep,
}

impl ResumePolicy {
    /// Configuration name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlwaysRestart => "always-restart",
            Self::PersistStep => "persist-step",
        }
    }
}

impl fmt::Display for ResumePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResumePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "always-restart" => Ok(Self::AlwaysRestart),
            "persist-step" => Ok(Self::PersistStep),
            other => Err(DomainError::Validation(format!(
                "unknown resume policy {other:?}; expected always-restart or persist-step"
            ))),
        }
    }
}

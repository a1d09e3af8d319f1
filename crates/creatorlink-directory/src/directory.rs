//! The creator directory.

use std::collections::HashSet;
use std::path::Path;

use creatorlink_core::error::DomainError;
use tracing::debug;

use crate::creator::Creator;

const BUILTIN_CREATORS: &str = include_str!("../data/creators.yaml");

/// Read-only, insertion-ordered collection of creators.
#[derive(Debug, Clone)]
pub struct CreatorDirectory {
    creators: Vec<Creator>,
}

impl CreatorDirectory {
    /// Builds a directory from `creators`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if an id is blank or repeated, or a
    /// name is blank.
    pub fn new(creators: Vec<Creator>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for creator in &creators {
            if creator.id.trim().is_empty() {
                return Err(DomainError::Validation("creator id must not be blank".into()));
            }
            if creator.name.trim().is_empty() {
                return Err(DomainError::Validation(format!(
                    "creator {} has a blank name",
                    creator.id
                )));
            }
            if !seen.insert(creator.id.as_str()) {
                return Err(DomainError::Validation(format!(
                    "duplicate creator id {}",
                    creator.id
                )));
            }
        }
        Ok(Self { creators })
    }

    /// Parses a YAML sequence of creators.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the YAML is malformed or the
    /// creators fail the checks in [`CreatorDirectory::new`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DomainError> {
        let creators: Vec<Creator> = serde_yaml::from_str(yaml)
            .map_err(|e| DomainError::Validation(format!("invalid creator directory: {e}")))?;
        Self::new(creators)
    }

    /// Loads a YAML creator directory from `path`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file cannot be read, or
    /// `DomainError::Validation` if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Infrastructure(format!("{}: {e}", path.display())))?;
        let directory = Self::from_yaml_str(&yaml)?;
        debug!(path = %path.display(), creators = directory.creators.len(), "loaded creator directory");
        Ok(directory)
    }

    /// The directory shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the bundled data is invalid.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::from_yaml_str(BUILTIN_CREATORS)
    }

    /// All creators in directory order.
    #[must_use]
    pub fn list(&self) -> &[Creator] {
        &self.creators
    }

    /// Creators listing `category`.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Creator> {
        self.creators.iter().filter(move |c| c.has_category(category))
    }

    /// Looks up a creator by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Creator> {
        self.creators.iter().find(|c| c.id == id)
    }

    /// Looks up a creator by id, failing when absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CreatorNotFound` if no creator has `id`.
    pub fn get(&self, id: &str) -> Result<&Creator, DomainError> {
        self.find(id)
            .ok_or_else(|| DomainError::CreatorNotFound(id.to_owned()))
    }
}

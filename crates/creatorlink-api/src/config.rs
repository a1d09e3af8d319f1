//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use creatorlink_core::storage::KeyValueStore;
use creatorlink_directory::CreatorDirectory;
use creatorlink_storage::{FileStore, MemoryStore};
use creatorlink_wizard::application::resume::ResumePolicy;
use tracing::{info, warn};

use crate::error::AppError;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory holding the stored draft and campaigns. `None` keeps
    /// everything in memory for the lifetime of the process.
    pub data_dir: Option<PathBuf>,
    /// Which step a reloaded draft resumes on.
    pub resume_policy: ResumePolicy,
    /// YAML creator directory replacing the built-in one.
    pub creators_file: Option<PathBuf>,
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`. Blank values count as
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };
        let resume_policy = match var("CREATORLINK_RESUME_POLICY") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("CREATORLINK_RESUME_POLICY: {e}")))?,
            None => ResumePolicy::default(),
        };

        Ok(Self {
            host,
            port,
            data_dir: var("CREATORLINK_DATA_DIR").map(PathBuf::from),
            resume_policy,
            creators_file: var("CREATORLINK_CREATORS_FILE").map(PathBuf::from),
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form a socket
    /// address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Opens the configured storage scope.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Domain` if the data directory cannot be created.
    pub fn open_store(&self) -> Result<Arc<dyn KeyValueStore>, AppError> {
        if let Some(dir) = &self.data_dir {
            let store = FileStore::open(dir.clone())?;
            info!(data_dir = %store.root().display(), "using file storage");
            Ok(Arc::new(store))
        } else {
            warn!("CREATORLINK_DATA_DIR not set; drafts and campaigns will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }

    /// Loads the configured creator directory.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Domain` if the directory file cannot be read or
    /// parsed.
    pub fn load_directory(&self) -> Result<CreatorDirectory, AppError> {
        let directory = match &self.creators_file {
            Some(path) => CreatorDirectory::load(path)?,
            None => CreatorDirectory::builtin()?,
        };
        info!(creators = directory.list().len(), "creator directory loaded");
        Ok(directory)
    }
}

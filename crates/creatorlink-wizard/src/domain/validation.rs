//! Field validators for the campaign wizard.
//!
//! Pure functions with no access to the draft or storage. Thresholds are
//! fixed for the marketplace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum brief length, in characters.
pub const MIN_BRIEF_CHARS: usize = 100;

/// Minimum campaign budget, in whole currency units.
pub const MIN_BUDGET: u64 = 1_000;

/// Largest accepted upload, in bytes (50 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Content types accepted for uploaded campaign content.
pub const ALLOWED_UPLOAD_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/gif",
    "video/mp4",
    "video/quicktime",
    "video/webm",
];

/// A file the user picked, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCandidate {
    /// Original file name.
    pub name: String,
    /// Declared MIME type.
    pub content_type: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Where the file can be previewed from.
    pub location: String,
}

/// A validated, previewable upload. Only produced by [`validate_upload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePreview {
    /// Original file name.
    pub name: String,
    /// MIME type, lower-cased.
    pub content_type: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Opaque preview reference.
    pub reference: String,
}

impl FilePreview {
    /// Whether the preview is a video.
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.content_type.starts_with("video/")
    }
}

/// Why an upload was refused. The message is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    /// Zero-byte file.
    #[error("{name} is empty")]
    Empty {
        /// Offending file name.
        name: String,
    },

    /// Over [`MAX_UPLOAD_BYTES`].
    #[error("{name} is {size_mib} MB; files must be 50 MB or smaller")]
    TooLarge {
        /// Offending file name.
        name: String,
        /// Size, rounded up to whole MiB.
        size_mib: u64,
    },

    /// Not in [`ALLOWED_UPLOAD_TYPES`].
    #[error("{name} has unsupported type {content_type}; upload a JPEG, PNG, WebP or GIF image, or an MP4, MOV or WebM video")]
    UnsupportedType {
        /// Offending file name.
        name: String,
        /// The declared type.
        content_type: String,
    },

    /// No preview location supplied.
    #[error("{name} could not be previewed")]
    MissingPreview {
        /// Offending file name.
        name: String,
    },
}

/// Validates a picked file and turns it into a preview.
///
/// # Errors
///
/// Returns the `UploadRejection` describing the first failed check.
pub fn validate_upload(file: &FileCandidate) -> Result<FilePreview, UploadRejection> {
    let content_type = file.content_type.trim().to_ascii_lowercase();
    if !ALLOWED_UPLOAD_TYPES.contains(&content_type.as_str()) {
        return Err(UploadRejection::UnsupportedType {
            name: file.name.clone(),
            content_type: file.content_type.clone(),
        });
    }
    if file.size_bytes == 0 {
        return Err(UploadRejection::Empty {
            name: file.name.clone(),
        });
    }
    if file.size_bytes > MAX_UPLOAD_BYTES {
        const MIB: u64 = 1024 * 1024;
        return Err(UploadRejection::TooLarge {
            name: file.name.clone(),
            size_mib: file.size_bytes.div_ceil(MIB),
        });
    }
    if file.location.trim().is_empty() {
        return Err(UploadRejection::MissingPreview {
            name: file.name.clone(),
        });
    }
    Ok(FilePreview {
        name: file.name.clone(),
        content_type,
        size_bytes: file.size_bytes,
        reference: file.location.clone(),
    })
}

/// Whether `brief` is long enough, counted in characters.
#[must_use]
pub fn brief_meets_minimum(brief: &str) -> bool {
    brief.chars().count() >= MIN_BRIEF_CHARS
}

/// Whether `budget` reaches [`MIN_BUDGET`].
#[must_use]
pub fn budget_meets_minimum(budget: u64) -> bool {
    budget >= MIN_BUDGET
}

/// Whether `link` has any content once surrounding whitespace is removed.
#[must_use]
pub fn link_is_present(link: &str) -> bool {
    !link.trim().is_empty()
}

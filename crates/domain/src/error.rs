//! Domain error types

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::platform::Platform;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The platform string is not one of the supported networks.
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    /// A post carries metadata for a platform it does not target.
    #[error("metadata present for untargeted platform: {0}")]
    MetadataForUntargetedPlatform(Platform),

    /// A post carries more than one metadata entry for the same platform.
    #[error("duplicate metadata entry for platform: {0}")]
    DuplicateMetadata(Platform),

    /// A scheduled post has no schedule timestamp.
    #[error("scheduled post has no schedule timestamp")]
    MissingSchedule,

    /// A scheduled post's timestamp is not in the future.
    #[error("schedule timestamp is not in the future: {0}")]
    ScheduleNotInFuture(DateTime<Utc>),

    /// A campaign's end date precedes its start date.
    #[error("campaign ends before it starts: {end} < {start}")]
    InvalidDateRange {
        /// The campaign start date.
        start: DateTime<Utc>,
        /// The offending end date.
        end: DateTime<Utc>,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

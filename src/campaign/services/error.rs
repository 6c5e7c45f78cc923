//! Service-level errors and their wire classification.

use crate::campaign::{domain::CampaignDomainError, ports::CampaignRepositoryError};
use std::fmt;
use thiserror::Error;

/// Service-level errors for campaign lifecycle operations.
#[derive(Debug, Error)]
pub enum CampaignServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CampaignDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CampaignRepositoryError),
    /// The campaign identifier is not a valid UUID.
    #[error("invalid campaign identifier: {0}")]
    InvalidCampaignId(String),
    /// Clients may not mark a campaign as completed.
    #[error("campaign status cannot be set to completed manually")]
    CompletionNotPermitted,
}

/// Result type for campaign lifecycle service operations.
pub type CampaignServiceResult<T> = Result<T, CampaignServiceError>;

/// Status classification reported to remote callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request is malformed.
    InvalidArgument,
    /// The campaign does not exist.
    NotFound,
    /// The campaign identifier is already taken.
    AlreadyExists,
    /// The caller may not perform the mutation.
    PermissionDenied,
    /// The campaign's status forbids the mutation.
    PreconditionFailed,
    /// Unexpected persistence outcome.
    Internal,
}

impl ErrorKind {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::NotFound => "not found",
            Self::AlreadyExists => "already exists",
            Self::PermissionDenied => "permission denied",
            Self::PreconditionFailed => "precondition failed",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CampaignServiceError {
    /// Classifies the error for the wire.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(CampaignDomainError::TerminalStatus { .. }) => {
                ErrorKind::PreconditionFailed
            }
            Self::Domain(_) | Self::InvalidCampaignId(_) => ErrorKind::InvalidArgument,
            Self::CompletionNotPermitted => ErrorKind::PermissionDenied,
            Self::Repository(err) => match err {
                CampaignRepositoryError::NotFound(_) => ErrorKind::NotFound,
                CampaignRepositoryError::DuplicateCampaign(_) => ErrorKind::AlreadyExists,
                CampaignRepositoryError::TerminalStatus { .. } => ErrorKind::PreconditionFailed,
                CampaignRepositoryError::OwnerMismatch { .. } => ErrorKind::PermissionDenied,
                CampaignRepositoryError::CreationFailed(_)
                | CampaignRepositoryError::Persistence(_) => ErrorKind::Internal,
            },
        }
    }
}

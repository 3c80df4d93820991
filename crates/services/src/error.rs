//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `WaitlistService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WaitlistError {
    #[error("waitlist submission is not configured")]
    Disabled,
    #[error("not a valid email address: {raw:?}")]
    InvalidEmail { raw: String },
    #[error("invalid waitlist endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("waitlist endpoint must use http or https, got {scheme}")]
    UnsupportedScheme { scheme: String },
    #[error("waitlist request failed: {0}")]
    Transport(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

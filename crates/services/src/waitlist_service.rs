use std::env;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use serde::Serialize;
use tracing::{info, warn};
use url::Url;

use crate::error::WaitlistError;

pub const DEFAULT_SOURCE: &str = "QuickScope Landing Page";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitlistConfig {
    pub endpoint: Url,
    pub source: String,
}

impl WaitlistConfig {
    /// # Errors
    ///
    /// Returns `WaitlistError::InvalidEndpoint` or `WaitlistError::UnsupportedScheme`.
    pub fn new(endpoint: &str, source: impl Into<String>) -> Result<Self, WaitlistError> {
        let endpoint = Url::parse(endpoint.trim())?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(WaitlistError::UnsupportedScheme {
                scheme: endpoint.scheme().to_string(),
            });
        }
        Ok(Self {
            endpoint,
            source: source.into(),
        })
    }

    /// Reads `QUICKSCOPE_WAITLIST_URL` and `QUICKSCOPE_WAITLIST_SOURCE`.
    ///
    /// Returns `None` (submissions disabled) when the endpoint is unset or invalid.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let endpoint = env::var("QUICKSCOPE_WAITLIST_URL").ok()?;
        if endpoint.trim().is_empty() {
            return None;
        }
        let source =
            env::var("QUICKSCOPE_WAITLIST_SOURCE").unwrap_or_else(|_| DEFAULT_SOURCE.into());
        match Self::new(&endpoint, source) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!(%err, "ignoring QUICKSCOPE_WAITLIST_URL");
                None
            }
        }
    }
}

/// A syntactically plausible email address, trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// # Errors
    ///
    /// Returns `WaitlistError::InvalidEmail` unless the input has exactly one
    /// `@` with non-empty text on both sides and no whitespace.
    pub fn parse(raw: &str) -> Result<Self, WaitlistError> {
        let trimmed = raw.trim();
        let invalid = || WaitlistError::InvalidEmail {
            raw: raw.to_string(),
        };
        let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
        if local.is_empty()
            || domain.is_empty()
            || domain.contains('@')
            || trimmed.chars().any(char::is_whitespace)
        {
            return Err(invalid());
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// JSON body posted to the form-collection endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WaitlistRequest {
    pub email: String,
    pub source: String,
}

/// Delivers a waitlist request. Implementations must not read the response.
#[async_trait]
pub trait WaitlistTransport: Send + Sync {
    async fn post_json(&self, endpoint: &Url, body: &WaitlistRequest) -> Result<(), WaitlistError>;
}

#[derive(Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WaitlistTransport for HttpTransport {
    async fn post_json(&self, endpoint: &Url, body: &WaitlistRequest) -> Result<(), WaitlistError> {
        // The collector answers opaquely; any response at all counts as delivered.
        let _response = self
            .client
            .post(endpoint.clone())
            .header(CACHE_CONTROL, "no-cache")
            .json(body)
            .send()
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct WaitlistService {
    transport: Arc<dyn WaitlistTransport>,
    config: Option<WaitlistConfig>,
}

impl WaitlistService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(WaitlistConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<WaitlistConfig>) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::default()))
    }

    #[must_use]
    pub fn with_transport(
        config: Option<WaitlistConfig>,
        transport: Arc<dyn WaitlistTransport>,
    ) -> Self {
        Self { transport, config }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    #[must_use]
    pub fn config(&self) -> Option<&WaitlistConfig> {
        self.config.as_ref()
    }

    /// Posts `email` to the waitlist endpoint once. There is no retry.
    ///
    /// # Errors
    ///
    /// Returns `WaitlistError` when the service is disabled, the email is
    /// malformed, or the request could not be sent.
    pub async fn submit(&self, email: &str) -> Result<EmailAddress, WaitlistError> {
        let config = self.config.as_ref().ok_or(WaitlistError::Disabled)?;
        let email = EmailAddress::parse(email)?;

        let body = WaitlistRequest {
            email: email.as_str().to_string(),
            source: config.source.clone(),
        };
        self.transport.post_json(&config.endpoint, &body).await?;

        info!(source = %config.source, "waitlist submission sent");
        Ok(email)
    }
}

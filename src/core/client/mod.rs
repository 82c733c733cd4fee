//! Public client surface + builder.
//! Defaults (UA, timeouts, source URLs) live in `constants`.

pub(crate) mod constants;

use crate::core::HoldingsError;
use constants::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Thin wrapper over a configured `reqwest::Client`.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HoldingsClient {
    http: Client,
    timeout: Duration,
}

impl Default for HoldingsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl HoldingsClient {
    /// Create a new builder.
    pub fn builder() -> HoldingsClientBuilder {
        HoldingsClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// The overall request timeout in effect.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct HoldingsClientBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl HoldingsClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the overall request timeout. Default: 30 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set the connect timeout. Default: 10 seconds.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `HoldingsError::Http` if the TLS backend cannot be initialized.
    pub fn build(self) -> Result<HoldingsClient, HoldingsError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(timeout)
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
            .build()?;

        Ok(HoldingsClient { http, timeout })
    }
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Client configuration: console endpoints, timeouts, and the settle delay.
//!
//! Transport timeouts are deliberately explicit here rather than left to
//! HTTP client defaults, and the settle delay is a named parameter rather
//! than a magic literal inside the mutation flow.

use std::time::Duration;

use url::Url;

use crate::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_CONSOLE_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SETTLE_DELAY_MS, DEFAULT_USER_AGENT, LANDING_PAGE_PATH, ZONE_EDITOR_PATH,
    ZONE_TYPE, ZONE_WS_PATH,
};

/// Configuration for a [`crate::ConsoleClient`].
///
/// Build one with [`ClientConfig::builder`]; `Default` yields the live
/// console endpoints with standard timeouts.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    connect_timeout: Duration,
    request_timeout: Duration,
    settle_delay: Duration,
    user_agent: String,
}

impl ClientConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Console base URL all endpoints are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Timeout for establishing a connection to the console.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Overall per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Pause between a mutating call and its save call.
    ///
    /// Compensates for the backend's undocumented write latency; a save
    /// issued immediately after an edit or add is rejected remotely.
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// User agent presented to the console.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// URL of the account landing page.
    pub(crate) fn landing_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(LANDING_PAGE_PATH);
        url
    }

    /// URL of the zone editor page for `domain`.
    pub(crate) fn zone_editor_url(&self, domain: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(ZONE_EDITOR_PATH);
        url.set_query(Some(&format!("zoneType={ZONE_TYPE}&sa=&zone={domain}")));
        url
    }

    /// URL of one zone web-service operation.
    pub(crate) fn zone_ws_url(&self, operation: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("{ZONE_WS_PATH}/{operation}"));
        url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug)]
pub struct ClientConfigBuilder {
    base_url: Url,
    connect_timeout: Duration,
    request_timeout: Duration,
    settle_delay: Duration,
    user_agent: String,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_CONSOLE_BASE_URL)
                .expect("default console base URL should parse"),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfigBuilder {
    /// Point the client at a different console base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the connect timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the overall per-request timeout.
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Override the settle delay between a mutation and its save.
    #[must_use]
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Override the user agent presented to the console.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Finish building the configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url,
            connect_timeout: self.connect_timeout,
            request_timeout: self.request_timeout,
            settle_delay: self.settle_delay,
            user_agent: self.user_agent,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Scoped console sessions with guaranteed teardown.

use std::fmt;
use std::future::Future;

use anyhow::{anyhow, Context, Result};
use tracing::warn;

use crate::client::ConsoleClient;
use crate::config::ClientConfig;

/// Credentials for a console account, run as scoped sessions.
///
/// [`with_session`](ConsoleAccount::with_session) acquires a logged-in
/// client for the duration of an async block and tears the session down
/// on every exit path. Failures inside the block propagate as errors
/// unless suppression is switched on explicitly; swallowing them
/// silently hides drift in the console's markup from the operator, so
/// suppression is off by default.
///
/// # Example
///
/// ```rust,no_run
/// use dandy::{ConsoleAccount, RecordType};
///
/// # async fn example() -> anyhow::Result<()> {
/// let account = ConsoleAccount::new("jane", "hunter2");
///
/// let updated = account
///     .with_session(|mut client| async move {
///         client
///             .upsert_record("home.example.com", "203.0.113.7", RecordType::A, true)
///             .await
///             .map_err(Into::into)
///     })
///     .await?;
///
/// assert_eq!(updated, Some(true));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ConsoleAccount {
    username: String,
    password: String,
    config: ClientConfig,
    suppress_errors: bool,
}

impl ConsoleAccount {
    /// Account credentials with the default configuration.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            config: ClientConfig::default(),
            suppress_errors: false,
        }
    }

    /// Use an explicit client configuration for sessions.
    #[must_use]
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Convert session failures into `Ok(None)` instead of errors.
    ///
    /// Opt-in only: with suppression on, login rejections and block
    /// failures are logged at WARN and reported as `None`, never as
    /// errors. Callers that need to see what went wrong should leave
    /// this off or use [`ConsoleClient`] directly.
    #[must_use]
    pub fn suppress_errors(mut self, suppress: bool) -> Self {
        self.suppress_errors = suppress;
        self
    }

    /// Run `body` with a logged-in client, tearing the session down on
    /// every exit path.
    ///
    /// The client (and its cookie session) is dropped when the block
    /// completes, whether it succeeds or fails.
    ///
    /// # Errors
    ///
    /// Login rejection and block failures are returned as errors, unless
    /// [`suppress_errors`](Self::suppress_errors) was switched on, in
    /// which case they yield `Ok(None)` after a WARN log entry.
    pub async fn with_session<T, F, Fut>(&self, body: F) -> Result<Option<T>>
    where
        F: FnOnce(ConsoleClient) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        match self.run_session(body).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if self.suppress_errors => {
                warn!(
                    username = %self.username,
                    error = %format!("{err:#}"),
                    "console session failed; error suppressed by configuration"
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn run_session<T, F, Fut>(&self, body: F) -> Result<T>
    where
        F: FnOnce(ConsoleClient) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut client = ConsoleClient::with_config(self.config.clone())
            .context("failed to construct the console session")?;

        let authenticated = client
            .login(&self.username, &self.password)
            .await
            .context("console login request failed")?;
        if !authenticated {
            return Err(anyhow!(
                "console login rejected for user '{}'",
                self.username
            ));
        }

        body(client).await
    }
}

// The password must never reach a log line through a derived Debug.
impl fmt::Debug for ConsoleAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleAccount")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("config", &self.config)
            .field("suppress_errors", &self.suppress_errors)
            .finish()
    }
}

#[cfg(test)]
#[path = "account_tests.rs"]
mod account_tests;

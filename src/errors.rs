// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Failure taxonomy for console operations.
//!
//! Two families of failure exist:
//!
//! - [`ScrapeError`] - an expected marker was absent from a console page.
//!   The console ships unversioned markup, so a missing marker usually
//!   means the site changed underneath us. These never escape the public
//!   operations; they are logged and converted to boolean failures or
//!   empty listings.
//! - [`ClientError`] - transport failures and caller mistakes. These are
//!   the only errors a public operation returns.

use thiserror::Error;

use crate::record::RecordType;

/// An expected marker was absent from a console page.
///
/// Each variant names one scrape marker. When the console redesigns a
/// page, the variant tells maintainers which extractor to update.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    /// The hidden login form token was missing from the landing page.
    ///
    /// Login cannot proceed without it. This is the highest-severity
    /// drift signal since authentication gates every other operation.
    #[error("hidden login form token not found; the console login page may have changed")]
    LoginTokenMissing,

    /// The security nonce was missing from a zone editor page.
    ///
    /// Every save call must carry the nonce from the most recent listing
    /// fetch, so a listing without one cannot support later mutations.
    #[error("security nonce not found on the zone editor page for '{domain}'")]
    NonceMissing {
        /// The zone whose editor page was fetched
        domain: String,
    },

    /// A record row matched the listing pattern but its fields did not
    /// parse into a record snapshot.
    #[error("malformed {record_type} record row: {detail}")]
    MalformedRow {
        /// The record type whose rows were being scraped
        record_type: RecordType,
        /// What failed to parse
        detail: String,
    },
}

/// Errors returned by the public console operations.
///
/// Remote rejections and not-found outcomes are not errors; they surface
/// as `false` results. This enum covers the genuinely exceptional paths.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The underlying HTTP session could not be constructed.
    #[error("failed to build the console HTTP session: {source}")]
    SessionBuild {
        /// The builder failure reported by the HTTP client
        #[source]
        source: reqwest::Error,
    },

    /// A request to the console failed at the transport level.
    ///
    /// Covers connection failures, timeouts, and bodies that could not
    /// be read. The console was never heard from, or stopped responding,
    /// so no statement can be made about the operation's outcome.
    #[error("console request to {url} failed: {source}")]
    Http {
        /// The URL the request was sent to
        url: String,
        /// The transport failure
        #[source]
        source: reqwest::Error,
    },

    /// The hostname does not contain a registrable domain.
    ///
    /// Every mutation decomposes its hostname into a subdomain prefix and
    /// a registrable domain; a hostname that cannot be decomposed is
    /// rejected before any request is sent.
    #[error("'{hostname}' does not contain a registrable domain")]
    InvalidHostname {
        /// The hostname that failed to decompose
        hostname: String,
    },

    /// The record type is not supported for mutations.
    ///
    /// Only address records are driven through the mutation handshake;
    /// the call is rejected before any request is sent.
    #[error("{requested} records cannot be mutated through this client; only A records are supported")]
    UnsupportedRecordType {
        /// The record type the caller asked for
        requested: RecordType,
    },
}

impl ClientError {
    /// Returns true if the failure happened before any request was sent.
    ///
    /// Local failures are caller mistakes or environment problems; the
    /// console never saw the operation, so nothing remote can have
    /// changed state.
    #[must_use]
    pub fn is_local(&self) -> bool {
        match self {
            Self::SessionBuild { .. }
            | Self::InvalidHostname { .. }
            | Self::UnsupportedRecordType { .. } => true,
            Self::Http { .. } => false,
        }
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;

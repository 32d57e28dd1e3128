// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # Dandy - Web DNS Console Session Client
//!
//! Dandy drives a web-based DNS management console the way a browser does:
//! it logs in through the console's HTML login form, keeps the resulting
//! cookie session alive, scrapes hidden anti-forgery tokens and record
//! listings out of rendered pages, and issues the same background form
//! posts the web UI issues to add, edit, and delete zone records.
//!
//! ## Overview
//!
//! The console has no published API. Every mutation follows the same
//! handshake the UI performs:
//!
//! 1. Fetch the zone editor page, refreshing the security nonce
//! 2. Issue the mutating call (add, edit, or delete-flag) for one record
//! 3. Pause for the backend's settle delay
//! 4. Issue a save call carrying the record index and the nonce
//!
//! Because the protocol is unversioned markup, every scrape marker lives
//! behind the extraction boundary in one module; when the console changes
//! its pages, that is the only place that needs updating.
//!
//! ## Modules
//!
//! - [`client`] - The session client and its console operations
//! - [`account`] - Scoped login sessions with guaranteed teardown
//! - [`config`] - Console endpoints, timeouts, and the settle delay
//! - [`record`] - Record types and scraped record snapshots
//! - [`hostname`] - Hostname decomposition over public-suffix tables
//! - [`errors`] - Client and scrape failure taxonomy
//!
//! ## Example
//!
//! ```rust,no_run
//! use dandy::{ConsoleClient, RecordType};
//!
//! # async fn example() -> Result<(), dandy::ClientError> {
//! let mut client = ConsoleClient::new()?;
//!
//! if client.login("jane", "hunter2").await? {
//!     client
//!         .upsert_record("home.example.com", "203.0.113.7", RecordType::A, true)
//!         .await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure Model
//!
//! Remote outcomes are boolean: a rejected mutation, a record that was
//! not found, or a page whose markers went missing all surface as `false`
//! or an empty listing, with a log entry describing what was expected.
//! Only transport failures and caller mistakes (an unsupported record
//! type, a hostname with no registrable domain) are returned as errors.

pub mod account;
pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod hostname;
pub mod record;

mod scrape;

pub use account::ConsoleAccount;
pub use client::ConsoleClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use errors::{ClientError, ScrapeError};
pub use hostname::{split_hostname, HostParts};
pub use record::{DnsRecord, RecordType};

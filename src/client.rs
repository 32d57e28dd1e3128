// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The console session client and its operations.
//!
//! A [`ConsoleClient`] owns one authenticated browser-style session: the
//! cookie jar, the logged-in flag, and the security nonce scraped from
//! the most recent zone listing. Operations are strictly sequential; the
//! mutating ones take `&mut self`, so one client is one serial stream of
//! console calls and can never interleave a mutation with its save.
//!
//! # Mutation handshake
//!
//! The console enforces a fixed ordering on every record change:
//!
//! 1. a listing fetch (which refreshes the nonce),
//! 2. the mutating call for exactly one record index,
//! 3. a settle pause (the backend rejects an immediate save),
//! 4. a save call carrying that index and the current nonce.
//!
//! None of the calls are known to be safe to repeat, so nothing here
//! retries automatically; a `false` outcome is final until the caller
//! decides otherwise.

use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::constants::{
    DEFAULT_RECORD_TTL_SECS, LOGIN_FIELD_BUTTON_X, LOGIN_FIELD_BUTTON_Y, LOGIN_FIELD_PASSWORD,
    LOGIN_FIELD_USERNAME, LOGIN_FIELD_VIEWSTATE, SAVE_EDIT_COUNT, WS_INPUT_FIELD, ZONE_TYPE,
};
use crate::errors::ClientError;
use crate::hostname::split_hostname;
use crate::record::{next_index, DnsRecord, RecordType};
use crate::scrape;

/// Session client for the DNS console.
///
/// Create one, log in, then drive zone operations through it. Each client
/// owns an independent cookie session; multiple clients can coexist for
/// separate accounts.
///
/// # Example
///
/// ```rust,no_run
/// use dandy::{ConsoleClient, RecordType};
///
/// # async fn example() -> Result<(), dandy::ClientError> {
/// let mut client = ConsoleClient::new()?;
///
/// if client.login("jane", "hunter2").await? {
///     for domain in client.find_domains().await? {
///         let records = client.find_records(&domain, RecordType::A).await?;
///         println!("{domain}: {} address records", records.len());
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConsoleClient {
    http: HttpClient,
    config: ClientConfig,
    logged_in: bool,
    nonce: String,
}

impl ConsoleClient {
    /// Create a client against the default console endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::SessionBuild`] if the HTTP session cannot
    /// be constructed.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::SessionBuild`] if the HTTP session cannot
    /// be constructed.
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        let http = HttpClient::builder()
            .cookie_store(true)
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|source| ClientError::SessionBuild { source })?;

        Ok(Self {
            http,
            config,
            logged_in: false,
            nonce: String::new(),
        })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The cached authentication flag from the last login check.
    ///
    /// Set by [`login`](Self::login) and the `is_logged_in` checks; the
    /// other operations trust it and do not re-verify.
    #[must_use]
    pub fn logged_in(&self) -> bool {
        self.logged_in
    }

    /// Log in to the console account.
    ///
    /// Fetches the landing page, scrapes the hidden form token, and posts
    /// the credentials to the final resolved URL of that fetch (the
    /// console may redirect the landing page). Success is judged by the
    /// authenticated welcome banner in the response.
    ///
    /// Returns `false` for rejected credentials, and also when the login
    /// page no longer carries its hidden token; the latter is logged at
    /// ERROR since it means the login mechanism itself has changed.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on transport failure.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<bool, ClientError> {
        let (body, final_url) = self.get_text(self.config.landing_url()).await?;

        let token = match scrape::login_form_token(&body) {
            Ok(token) => token,
            Err(err) => {
                error!(
                    error = %err,
                    "login routine broken; the console may have updated its login mechanism"
                );
                return Ok(false);
            }
        };

        let form = [
            (LOGIN_FIELD_BUTTON_X, "0"),
            (LOGIN_FIELD_BUTTON_Y, "0"),
            (LOGIN_FIELD_USERNAME, username),
            (LOGIN_FIELD_PASSWORD, password),
            (LOGIN_FIELD_VIEWSTATE, token.as_str()),
        ];
        let body = self.post_form(final_url, &form).await?;

        let authenticated = self.is_logged_in_html(&body);
        if authenticated {
            info!(username = %username, "console login succeeded");
        } else {
            warn!(username = %username, "console login rejected");
        }
        Ok(authenticated)
    }

    /// Re-fetch the landing page and test the session's login state.
    ///
    /// Updates the cached flag returned by [`logged_in`](Self::logged_in).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on transport failure.
    pub async fn is_logged_in(&mut self) -> Result<bool, ClientError> {
        let (body, _) = self.get_text(self.config.landing_url()).await?;
        Ok(self.is_logged_in_html(&body))
    }

    /// Test login state against a page body the caller already holds.
    ///
    /// Updates the cached flag returned by [`logged_in`](Self::logged_in).
    pub fn is_logged_in_html(&mut self, html: &str) -> bool {
        self.logged_in = scrape::has_welcome_banner(html);
        self.logged_in
    }

    /// All domains in the account, in the order the landing page lists
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on transport failure.
    pub async fn find_domains(&self) -> Result<Vec<String>, ClientError> {
        let (body, _) = self.get_text(self.config.landing_url()).await?;
        let domains = scrape::zone_domains(&body);
        debug!(count = domains.len(), "scraped domain list from the landing page");
        Ok(domains)
    }

    /// All records of `record_type` in the zone for `domain`.
    ///
    /// Fetching the listing also refreshes the security nonce that every
    /// subsequent save call must carry, so a listing fetch is the first
    /// step of every mutation.
    ///
    /// An empty result is ambiguous: the zone may truly hold no records,
    /// or the page structure may have changed underneath the scraper. The
    /// second case is logged; callers with expectations about the zone
    /// should cross-check against them.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on transport failure.
    pub async fn find_records(
        &mut self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, ClientError> {
        let (body, _) = self.get_text(self.config.zone_editor_url(domain)).await?;

        // Refresh the nonce while we have the page; saves carry the one
        // from the most recent listing.
        match scrape::security_nonce(&body, domain) {
            Ok(nonce) => self.nonce = nonce,
            Err(err) => {
                warn!(
                    domain = %domain,
                    error = %err,
                    "zone editor page missing its security nonce; the console may have changed"
                );
                return Ok(Vec::new());
            }
        }

        match scrape::record_rows(&body, record_type) {
            Ok(records) => {
                debug!(
                    domain = %domain,
                    record_type = %record_type,
                    count = records.len(),
                    "scraped zone records"
                );
                Ok(records)
            }
            Err(err) => {
                warn!(
                    domain = %domain,
                    error = %err,
                    "record listing broken; the console may have changed its page structure"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Create or update the address record for `hostname`.
    ///
    /// Lists the zone, then either leaves a matching record alone (value
    /// already equal), edits it in place, or creates a new record at the
    /// next free index when `create_if_missing` is set. Either mutation
    /// is followed by the settle pause and a save call; the result is the
    /// combined outcome of both.
    ///
    /// Returns `false` when the record is absent and `create_if_missing`
    /// is off, and when the console rejects the mutation or the save.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnsupportedRecordType`] for any type other than
    ///   [`RecordType::A`], before any request is sent
    /// - [`ClientError::InvalidHostname`] when `hostname` has no
    ///   registrable domain
    /// - [`ClientError::Http`] on transport failure
    pub async fn upsert_record(
        &mut self,
        hostname: &str,
        value: &str,
        record_type: RecordType,
        create_if_missing: bool,
    ) -> Result<bool, ClientError> {
        if !record_type.supports_mutations() {
            return Err(ClientError::UnsupportedRecordType {
                requested: record_type,
            });
        }

        let parts = split_hostname(hostname)?;
        let records = self.find_records(&parts.domain, record_type).await?;

        if let Some(record) = records.iter().find(|record| record.hostname == parts.prefix) {
            if record.value == value {
                info!(hostname = %hostname, value = %value, "record already up to date");
                return Ok(true);
            }

            if !self.edit_record_field(record.index, value, record_type).await? {
                return Ok(false);
            }
            self.settle().await;
            let saved = self.save_records(&parts.domain, record.index).await?;
            if saved {
                info!(hostname = %hostname, value = %value, index = record.index, "record updated");
            }
            return Ok(saved);
        }

        if !create_if_missing {
            debug!(hostname = %hostname, "no existing record and creation was not requested");
            return Ok(false);
        }

        let index = next_index(&records);
        if !self
            .add_record(&parts.prefix, value, index, record_type, DEFAULT_RECORD_TTL_SECS)
            .await?
        {
            return Ok(false);
        }
        self.settle().await;
        let saved = self.save_records(&parts.domain, index).await?;
        if saved {
            info!(hostname = %hostname, value = %value, index = index, "record created");
        }
        Ok(saved)
    }

    /// Delete the address record for `hostname`.
    ///
    /// Returns `false` when no matching record exists; nothing to delete
    /// is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnsupportedRecordType`] for any type other than
    ///   [`RecordType::A`], before any request is sent
    /// - [`ClientError::InvalidHostname`] when `hostname` has no
    ///   registrable domain
    /// - [`ClientError::Http`] on transport failure
    pub async fn delete_record(
        &mut self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<bool, ClientError> {
        if !record_type.supports_mutations() {
            return Err(ClientError::UnsupportedRecordType {
                requested: record_type,
            });
        }

        let parts = split_hostname(hostname)?;
        let records = self.find_records(&parts.domain, record_type).await?;

        let Some(record) = records.iter().find(|record| record.hostname == parts.prefix) else {
            debug!(hostname = %hostname, "no record to delete");
            return Ok(false);
        };

        if !self.flag_record_for_deletion(record.index, record_type).await? {
            return Ok(false);
        }
        self.settle().await;
        let saved = self.save_records(&parts.domain, record.index).await?;
        if saved {
            info!(hostname = %hostname, index = record.index, "record deleted");
        }
        Ok(saved)
    }

    // ===== Low-level mutation primitives =====
    //
    // Each posts one payload to a zone web-service endpoint and succeeds
    // iff the response body carries the literal success marker. None of
    // them are known to be idempotent at the transport level, so none are
    // ever retried automatically.

    /// Flag the record at `index` for deletion.
    async fn flag_record_for_deletion(
        &self,
        index: u32,
        record_type: RecordType,
    ) -> Result<bool, ClientError> {
        let operation = format!("Flag{}RecForDeletion", record_type.console_name());
        self.ws_call(&operation, delete_record_payload(index)).await
    }

    /// Add a new record at `index`.
    async fn add_record(
        &self,
        prefix: &str,
        value: &str,
        index: u32,
        record_type: RecordType,
        ttl: u32,
    ) -> Result<bool, ClientError> {
        let operation = format!("AddNew{}Record", record_type.console_name());
        self.ws_call(&operation, add_record_payload(prefix, value, index, ttl))
            .await
    }

    /// Point the record at `index` to a new value.
    async fn edit_record_field(
        &self,
        index: u32,
        value: &str,
        record_type: RecordType,
    ) -> Result<bool, ClientError> {
        self.ws_call(
            "EditRecordField",
            edit_record_payload(record_type, index, value),
        )
        .await
    }

    /// Commit the pending edit at `index` in `domain`'s zone.
    ///
    /// Bundles the domain, the zone-type marker, an edit count of exactly
    /// one, the edited index, and the nonce from the most recent listing.
    async fn save_records(&self, domain: &str, index: u32) -> Result<bool, ClientError> {
        self.ws_call(
            "SaveRecords",
            save_records_payload(domain, index, &self.nonce),
        )
        .await
    }

    /// Pause between a mutating call and its save call.
    async fn settle(&self) {
        sleep(self.config.settle_delay()).await;
    }

    /// Post one payload to a zone web-service operation and check for the
    /// success marker.
    async fn ws_call(&self, operation: &str, payload: String) -> Result<bool, ClientError> {
        let url = self.config.zone_ws_url(operation);
        let form = [(WS_INPUT_FIELD, payload.as_str())];
        let body = self.post_form(url, &form).await?;

        if scrape::is_success(&body) {
            debug!(operation = %operation, "console acknowledged the call");
            Ok(true)
        } else {
            warn!(
                operation = %operation,
                "console did not acknowledge the call; the site may have changed"
            );
            Ok(false)
        }
    }

    /// GET a page and return its body plus the final resolved URL.
    async fn get_text(&self, url: Url) -> Result<(String, Url), ClientError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ClientError::Http {
                url: url.to_string(),
                source,
            })?;
        let final_url = response.url().clone();
        let body = response.text().await.map_err(|source| ClientError::Http {
            url: final_url.to_string(),
            source,
        })?;
        Ok((body, final_url))
    }

    /// POST a form and return the response body.
    async fn post_form(
        &self,
        url: Url,
        form: &[(&str, &str)],
    ) -> Result<String, ClientError> {
        let response = self
            .http
            .post(url.clone())
            .form(form)
            .send()
            .await
            .map_err(|source| ClientError::Http {
                url: url.to_string(),
                source,
            })?;
        response.text().await.map_err(|source| ClientError::Http {
            url: url.to_string(),
            source,
        })
    }
}

fn delete_record_payload(index: u32) -> String {
    format!("{index}|true")
}

fn add_record_payload(prefix: &str, value: &str, index: u32, ttl: u32) -> String {
    format!(
        r#"<PARAMS><PARAM name="lstIndex" value="{index}" /><PARAM name="host" value="{prefix}" /><PARAM name="pointsTo" value="{value}" /><PARAM name="ttl" value="{ttl}" /></PARAMS>"#
    )
}

fn edit_record_payload(record_type: RecordType, index: u32, value: &str) -> String {
    let type_tag = record_type.edit_type_tag();
    format!(
        r#"<PARAMS><PARAM name="type" value="{type_tag}" /><PARAM name="fieldName" value="data" /><PARAM name="fieldValue" value="{value}" /><PARAM name="lstIndex" value="{index}" /></PARAMS>"#
    )
}

fn save_records_payload(domain: &str, index: u32, nonce: &str) -> String {
    format!(
        concat!(
            r#"<PARAMS>"#,
            r#"<PARAM name="domainName" value="{domain}" />"#,
            r#"<PARAM name="zoneType" value="{zone_type}" />"#,
            r#"<PARAM name="aRecEditCount" value="{edit_count}" />"#,
            r#"<PARAM name="aRecEdit0Index" value="{index}" />"#,
            r#"<PARAM name="nonce" value="{nonce}" />"#,
            r#"</PARAMS>"#
        ),
        domain = domain,
        zone_type = ZONE_TYPE,
        edit_count = SAVE_EDIT_COUNT,
        index = index,
        nonce = nonce,
    )
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;

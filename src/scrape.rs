// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Pattern extraction from console pages.
//!
//! The console speaks unversioned HTML, so every marker the client
//! depends on is isolated here, one extractor per marker. When the site
//! changes its markup, this module is the only place to update.
//!
//! Extractors treat pages as text and match known markers; they do not
//! parse HTML. That matches what the pages guarantee: the markers are
//! script-call and attribute literals emitted by the console's templates,
//! stable within a console release and meaningless outside it.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::constants::SUCCESS_MARKER;
use crate::errors::ScrapeError;
use crate::record::{DnsRecord, RecordType};

/// Hidden anti-forgery value embedded in the login page
static LOGIN_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"id="__VIEWSTATE" value="([^"]+)""#).expect("login token pattern should compile")
});

/// Welcome banner the console renders only for an authenticated user
static WELCOME_BANNER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Welcome:&nbsp;<span id="ctl00_lblUser" .*?>(.*)</span>"#)
        .expect("welcome banner pattern should compile")
});

/// Per-domain zone editor navigation call on the landing page
static ZONE_EDIT_NAV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"GoToZoneEdit\('([^']+)").expect("zone navigation pattern should compile")
});

/// Anti-forgery nonce attribute on the zone editor page
static SECURITY_NONCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"nonce="([0-9A-Za-z]+)""#).expect("security nonce pattern should compile")
});

/// Extract the hidden login form token from the landing page.
pub(crate) fn login_form_token(html: &str) -> Result<String, ScrapeError> {
    LOGIN_TOKEN
        .captures(html)
        .map(|caps| caps[1].to_string())
        .ok_or(ScrapeError::LoginTokenMissing)
}

/// Whether the page carries the authenticated welcome banner.
pub(crate) fn has_welcome_banner(html: &str) -> bool {
    WELCOME_BANNER.is_match(html)
}

/// Every domain the landing page links to a zone editor, in page order.
///
/// No dedup and no sort; page order is row order.
pub(crate) fn zone_domains(html: &str) -> Vec<String> {
    ZONE_EDIT_NAV
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Extract the security nonce from a zone editor page.
pub(crate) fn security_nonce(html: &str, domain: &str) -> Result<String, ScrapeError> {
    SECURITY_NONCE
        .captures(html)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| ScrapeError::NonceMissing {
            domain: domain.to_string(),
        })
}

/// Extract every record row of `record_type` from a zone editor page.
///
/// Each row is the per-row undo-edit script call, whose seven positional
/// arguments map onto [`DnsRecord`]. An empty result is ambiguous: the
/// zone may be empty, or the row marker may have changed.
pub(crate) fn record_rows(
    html: &str,
    record_type: RecordType,
) -> Result<Vec<DnsRecord>, ScrapeError> {
    row_pattern(record_type)
        .captures_iter(html)
        .map(|caps| row_to_record(record_type, &caps))
        .collect()
}

/// Whether a web-service response body acknowledges the call.
pub(crate) fn is_success(body: &str) -> bool {
    body.contains(SUCCESS_MARKER)
}

/// Row marker for one record type, e.g. `UndoAEdit('tblARecords_0', ...)`.
fn row_pattern(record_type: RecordType) -> Regex {
    let name = record_type.console_name();
    Regex::new(&format!(
        r"Undo{name}Edit\('tbl{name}Records_([0-9]+)', '([^']+)', '([^']+)', '([^']+)', '([^']+)', '([^']+)', '([^']+)'\)"
    ))
    .expect("record row pattern should compile")
}

fn row_to_record(
    record_type: RecordType,
    caps: &Captures<'_>,
) -> Result<DnsRecord, ScrapeError> {
    let index = caps[1]
        .parse::<u32>()
        .map_err(|err| ScrapeError::MalformedRow {
            record_type,
            detail: format!("ordinal '{}' did not parse: {err}", &caps[1]),
        })?;

    Ok(DnsRecord {
        index,
        hostname: caps[2].to_string(),
        value: caps[3].to_string(),
        ttl: caps[4].to_string(),
        host_td: caps[5].to_string(),
        points_to: caps[6].to_string(),
        rec_modified: caps[7].to_string(),
    })
}

#[cfg(test)]
#[path = "scrape_tests.rs"]
mod scrape_tests;

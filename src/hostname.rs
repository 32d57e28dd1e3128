// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Hostname decomposition over public-suffix tables.
//!
//! The console addresses records by (subdomain prefix, zone), so every
//! hostname a caller hands to a mutation is split into those two parts
//! first. Splitting is suffix-aware: `a.b.example.co.uk` decomposes into
//! prefix `a.b` and domain `example.co.uk`, honoring the multi-part
//! `co.uk` suffix.

use crate::errors::ClientError;

/// Prefix the console uses for a record on the bare apex domain.
pub const APEX_PREFIX: &str = "@";

/// A hostname split into its console addressing parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostParts {
    /// Subdomain label(s) left of the registrable domain, or `@`
    pub prefix: String,
    /// The registrable domain; names the zone in the console
    pub domain: String,
}

/// Split `hostname` into its subdomain prefix and registrable domain.
///
/// The prefix is everything left of the registrable domain, or
/// [`APEX_PREFIX`] when the hostname is the bare domain itself. A
/// trailing root dot is ignored.
///
/// # Errors
///
/// Returns [`ClientError::InvalidHostname`] when no registrable domain
/// can be found (empty input, a bare public suffix, and so on).
pub fn split_hostname(hostname: &str) -> Result<HostParts, ClientError> {
    let name = hostname.trim_end_matches('.');

    let domain = psl::domain_str(name).ok_or_else(|| ClientError::InvalidHostname {
        hostname: hostname.to_string(),
    })?;

    let prefix = name
        .strip_suffix(domain)
        .map_or("", |left| left.trim_end_matches('.'));
    let prefix = if prefix.is_empty() {
        APEX_PREFIX.to_string()
    } else {
        prefix.to_string()
    };

    Ok(HostParts {
        prefix,
        domain: domain.to_string(),
    })
}

#[cfg(test)]
#[path = "hostname_tests.rs"]
mod hostname_tests;

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Record types and scraped record snapshots.

use std::fmt;

use serde::Serialize;

/// DNS record types the console renders in its zone editor.
///
/// The console names each type in its endpoint paths and row markers
/// ("A", "CNAME", ...); [`RecordType::console_name`] produces that
/// rendering. Listings parameterize on any type, but only address
/// records go through the mutation handshake - see
/// [`RecordType::supports_mutations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecordType {
    /// IPv4 address record
    A,
    /// IPv6 address record
    Aaaa,
    /// Canonical name record
    Cname,
    /// Mail exchanger record
    Mx,
    /// Text record
    Txt,
}

impl RecordType {
    /// Name the console uses for this type in endpoints and row markers.
    #[must_use]
    pub fn console_name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
        }
    }

    /// Lowercased type tag the edit-field payload carries ("arecord").
    #[must_use]
    pub(crate) fn edit_type_tag(self) -> String {
        format!("{}record", self.console_name().to_lowercase())
    }

    /// Whether this type can be mutated through the client.
    ///
    /// Only address records are exercised against the live console; every
    /// other type fails fast without a network round trip.
    #[must_use]
    pub fn supports_mutations(self) -> bool {
        matches!(self, Self::A)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.console_name())
    }
}

/// An immutable snapshot of one scraped record row.
///
/// The seven fields are the positional arguments of the zone editor's
/// per-row undo-edit script call, kept as the console rendered them.
///
/// Identity for matching is the pair (hostname, index) as returned by the
/// listing scrape, not a durable record ID. The console reassigns indices
/// by position when other records are added or deleted, so an index is
/// only trustworthy until the next mutation; re-list before reusing one
/// from an earlier call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsRecord {
    /// Server-assigned ordinal position; the mutation key
    pub index: u32,
    /// Subdomain label, or `@` for the bare domain
    pub hostname: String,
    /// Target address the record points at
    pub value: String,
    /// Time-to-live as rendered by the console
    pub ttl: String,
    /// Host cell descriptor from the listing row
    pub host_td: String,
    /// Points-to cell descriptor from the listing row
    pub points_to: String,
    /// Last-modified marker from the listing row
    pub rec_modified: String,
}

/// Index the console assigns to the next created record.
///
/// One past the highest index currently listed, or 0 for an empty zone.
#[must_use]
pub fn next_index(records: &[DnsRecord]) -> u32 {
    records
        .iter()
        .map(|record| record.index)
        .max()
        .map_or(0, |highest| highest + 1)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;

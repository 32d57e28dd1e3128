// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `record.rs`

use super::*;

fn record(index: u32, hostname: &str, value: &str) -> DnsRecord {
    DnsRecord {
        index,
        hostname: hostname.to_string(),
        value: value.to_string(),
        ttl: "600".to_string(),
        host_td: "host".to_string(),
        points_to: value.to_string(),
        rec_modified: "11/1/2013".to_string(),
    }
}

#[test]
fn test_next_index_empty_zone_starts_at_zero() {
    assert_eq!(next_index(&[]), 0);
}

#[test]
fn test_next_index_follows_highest() {
    let records = vec![
        record(0, "@", "1.2.3.4"),
        record(1, "www", "1.2.3.4"),
        record(2, "mail", "1.2.3.5"),
    ];

    assert_eq!(next_index(&records), 3);
}

#[test]
fn test_next_index_uses_highest_not_last_listed() {
    // Listing order is page order, not index order
    let records = vec![record(5, "www", "1.2.3.4"), record(2, "@", "1.2.3.4")];

    assert_eq!(next_index(&records), 6);
}

#[test]
fn test_console_name_rendering() {
    assert_eq!(RecordType::A.console_name(), "A");
    assert_eq!(RecordType::Aaaa.console_name(), "AAAA");
    assert_eq!(RecordType::Cname.console_name(), "CNAME");
    assert_eq!(RecordType::Mx.console_name(), "MX");
    assert_eq!(RecordType::Txt.console_name(), "TXT");
}

#[test]
fn test_display_matches_console_name() {
    assert_eq!(RecordType::A.to_string(), "A");
    assert_eq!(RecordType::Cname.to_string(), "CNAME");
}

#[test]
fn test_edit_type_tag_is_lowercased_record() {
    assert_eq!(RecordType::A.edit_type_tag(), "arecord");
    assert_eq!(RecordType::Cname.edit_type_tag(), "cnamerecord");
}

#[test]
fn test_only_address_records_support_mutations() {
    assert!(RecordType::A.supports_mutations());
    assert!(!RecordType::Aaaa.supports_mutations());
    assert!(!RecordType::Cname.supports_mutations());
    assert!(!RecordType::Mx.supports_mutations());
    assert!(!RecordType::Txt.supports_mutations());
}

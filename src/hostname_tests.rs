// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `hostname.rs`

use super::*;

#[test]
fn test_split_subdomain() {
    let parts = split_hostname("sub.example.com").unwrap();

    assert_eq!(parts.prefix, "sub");
    assert_eq!(parts.domain, "example.com");
}

#[test]
fn test_split_bare_domain_uses_apex_prefix() {
    let parts = split_hostname("example.com").unwrap();

    assert_eq!(parts.prefix, APEX_PREFIX);
    assert_eq!(parts.domain, "example.com");
}

#[test]
fn test_split_multi_label_prefix() {
    let parts = split_hostname("a.b.example.com").unwrap();

    assert_eq!(parts.prefix, "a.b");
    assert_eq!(parts.domain, "example.com");
}

#[test]
fn test_split_honors_multi_part_suffix() {
    // co.uk is a two-label public suffix; the registrable domain keeps it
    let parts = split_hostname("a.b.example.co.uk").unwrap();

    assert_eq!(parts.prefix, "a.b");
    assert_eq!(parts.domain, "example.co.uk");
}

#[test]
fn test_split_ignores_trailing_root_dot() {
    let parts = split_hostname("www.example.com.").unwrap();

    assert_eq!(parts.prefix, "www");
    assert_eq!(parts.domain, "example.com");
}

#[test]
fn test_split_rejects_empty_input() {
    let err = split_hostname("").unwrap_err();

    assert!(matches!(err, ClientError::InvalidHostname { .. }));
}

#[test]
fn test_split_rejects_bare_public_suffix() {
    // A suffix alone has no registrable domain to address a zone with
    let err = split_hostname("co.uk").unwrap_err();

    assert!(matches!(
        err,
        ClientError::InvalidHostname { ref hostname } if hostname == "co.uk"
    ));
}

#[test]
fn test_split_rejects_single_label() {
    let err = split_hostname("not-a-domain").unwrap_err();

    assert!(matches!(err, ClientError::InvalidHostname { .. }));
}

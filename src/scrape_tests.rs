// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `scrape.rs`

use super::*;

const LOGIN_PAGE: &str = concat!(
    r#"<html><body><form method="post" action="./default.aspx">"#,
    r#"<input type="hidden" name="__VIEWSTATE" id="__VIEWSTATE" value="dDwtMTM4NzQ1OTcx" />"#,
    r#"</form></body></html>"#,
);

const WELCOME_PAGE: &str = concat!(
    r#"<html><body><div id="header">"#,
    r#"Welcome:&nbsp;<span id="ctl00_lblUser" class="username">jane</span>"#,
    r#"</div></body></html>"#,
);

fn record_row(index: u32, hostname: &str, value: &str) -> String {
    format!(
        r#"<a href="javascript:UndoAEdit('tblARecords_{index}', '{hostname}', '{value}', '600', 'host', '{value}', '11/1/2013')">undo</a>"#
    )
}

#[test]
fn test_login_form_token_extracted() {
    let token = login_form_token(LOGIN_PAGE).unwrap();

    assert_eq!(token, "dDwtMTM4NzQ1OTcx");
}

#[test]
fn test_login_form_token_missing_is_drift() {
    let err = login_form_token("<html><body>down for maintenance</body></html>").unwrap_err();

    assert_eq!(err, ScrapeError::LoginTokenMissing);
}

#[test]
fn test_welcome_banner_detected() {
    assert!(has_welcome_banner(WELCOME_PAGE));
}

#[test]
fn test_welcome_banner_absent_on_login_page() {
    assert!(!has_welcome_banner(LOGIN_PAGE));
}

#[test]
fn test_zone_domains_in_page_order() {
    let html = concat!(
        r#"<a href="javascript:GoToZoneEdit('example.com')">example.com</a>"#,
        r#"<a href="javascript:GoToZoneEdit('example.net')">example.net</a>"#,
        r#"<a href="javascript:GoToZoneEdit('example.com')">example.com</a>"#,
    );

    // No dedup, no sort; page order is row order
    assert_eq!(
        zone_domains(html),
        vec!["example.com", "example.net", "example.com"]
    );
}

#[test]
fn test_zone_domains_empty_page() {
    assert!(zone_domains("<html><body></body></html>").is_empty());
}

#[test]
fn test_security_nonce_extracted() {
    let html = r#"<div id="zoneEditor" nonce="aB3dE5f7">records</div>"#;

    assert_eq!(security_nonce(html, "example.com").unwrap(), "aB3dE5f7");
}

#[test]
fn test_security_nonce_missing_names_the_zone() {
    let err = security_nonce("<html></html>", "example.com").unwrap_err();

    assert!(matches!(
        err,
        ScrapeError::NonceMissing { ref domain } if domain == "example.com"
    ));
}

#[test]
fn test_record_rows_parse_positional_fields() {
    let html = format!(
        "{}{}",
        record_row(0, "@", "1.2.3.4"),
        record_row(1, "www", "5.6.7.8")
    );

    let records = record_rows(&html, RecordType::A).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].index, 0);
    assert_eq!(records[0].hostname, "@");
    assert_eq!(records[0].value, "1.2.3.4");
    assert_eq!(records[0].ttl, "600");
    assert_eq!(records[0].host_td, "host");
    assert_eq!(records[0].points_to, "1.2.3.4");
    assert_eq!(records[0].rec_modified, "11/1/2013");
    assert_eq!(records[1].index, 1);
    assert_eq!(records[1].hostname, "www");
}

#[test]
fn test_record_rows_ignore_other_types() {
    let html = concat!(
        r#"UndoCNAMEEdit('tblCNAMERecords_0', 'www', 'example.com', '600', 'host', 'example.com', '11/1/2013')"#,
    );

    assert!(record_rows(html, RecordType::A).unwrap().is_empty());
}

#[test]
fn test_record_rows_empty_page() {
    assert!(record_rows("<html></html>", RecordType::A).unwrap().is_empty());
}

#[test]
fn test_record_row_oversized_ordinal_is_malformed() {
    let html = record_row(0, "@", "1.2.3.4").replace("tblARecords_0", "tblARecords_99999999999");

    let err = record_rows(&html, RecordType::A).unwrap_err();

    assert!(matches!(
        err,
        ScrapeError::MalformedRow {
            record_type: RecordType::A,
            ..
        }
    ));
}

#[test]
fn test_is_success_marker() {
    assert!(is_success("SUCCESS"));
    assert!(is_success("<result>SUCCESS</result>"));
    assert!(!is_success("FAILURE"));
    assert!(!is_success(""));
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `config.rs`

use super::*;

#[test]
fn test_default_config_points_at_live_console() {
    let config = ClientConfig::default();

    assert_eq!(config.base_url().as_str(), "https://dns.godaddy.com/");
    assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.settle_delay(), Duration::from_millis(1000));
    assert!(config.user_agent().starts_with("dandy/"));
}

#[test]
fn test_builder_overrides() {
    let base = Url::parse("http://127.0.0.1:8080").unwrap();
    let config = ClientConfig::builder()
        .base_url(base.clone())
        .connect_timeout(Duration::from_secs(1))
        .request_timeout(Duration::from_secs(2))
        .settle_delay(Duration::from_millis(5))
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url(), &base);
    assert_eq!(config.connect_timeout(), Duration::from_secs(1));
    assert_eq!(config.request_timeout(), Duration::from_secs(2));
    assert_eq!(config.settle_delay(), Duration::from_millis(5));
    assert_eq!(config.user_agent(), "test-agent/1.0");
}

#[test]
fn test_landing_url() {
    let config = ClientConfig::default();

    assert_eq!(
        config.landing_url().as_str(),
        "https://dns.godaddy.com/default.aspx"
    );
}

#[test]
fn test_zone_editor_url_carries_zone_query() {
    let config = ClientConfig::default();

    assert_eq!(
        config.zone_editor_url("example.com").as_str(),
        "https://dns.godaddy.com/ZoneFile.aspx?zoneType=0&sa=&zone=example.com"
    );
}

#[test]
fn test_zone_ws_url_appends_operation() {
    let config = ClientConfig::default();

    assert_eq!(
        config.zone_ws_url("SaveRecords").as_str(),
        "https://dns.godaddy.com/ZoneFile_WS.asmx/SaveRecords"
    );
}

#[test]
fn test_endpoints_follow_overridden_base_url() {
    let config = ClientConfig::builder()
        .base_url(Url::parse("http://127.0.0.1:9090").unwrap())
        .build();

    assert_eq!(
        config.landing_url().as_str(),
        "http://127.0.0.1:9090/default.aspx"
    );
    assert_eq!(
        config.zone_ws_url("AddNewARecord").as_str(),
        "http://127.0.0.1:9090/ZoneFile_WS.asmx/AddNewARecord"
    );
}

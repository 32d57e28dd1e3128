// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the dandy client.
//!
//! This module contains the endpoint paths, form field names, and protocol
//! defaults used throughout the codebase. Constants are organized by
//! category for easy maintenance.

// ============================================================================
// Console Endpoints
// ============================================================================

/// Default console base URL
pub const DEFAULT_CONSOLE_BASE_URL: &str = "https://dns.godaddy.com";

/// Account landing page path; also serves the login form
pub const LANDING_PAGE_PATH: &str = "/default.aspx";

/// Zone editor page path; serves record listings and the security nonce
pub const ZONE_EDITOR_PATH: &str = "/ZoneFile.aspx";

/// Zone web-service path; mutation calls are posted beneath it
pub const ZONE_WS_PATH: &str = "/ZoneFile_WS.asmx";

/// Zone-type marker the console expects on editor URLs and save payloads
pub const ZONE_TYPE: &str = "0";

// ============================================================================
// Login Form Fields
// ============================================================================

/// X coordinate of the login image button, posted as part of the form
pub const LOGIN_FIELD_BUTTON_X: &str = "Login$userEntryPanel2$LoginImageButton.x";

/// Y coordinate of the login image button
pub const LOGIN_FIELD_BUTTON_Y: &str = "Login$userEntryPanel2$LoginImageButton.y";

/// Username text box
pub const LOGIN_FIELD_USERNAME: &str = "Login$userEntryPanel2$UsernameTextBox";

/// Password text box
pub const LOGIN_FIELD_PASSWORD: &str = "Login$userEntryPanel2$PasswordTextBox";

/// Hidden anti-forgery form value scraped from the login page
pub const LOGIN_FIELD_VIEWSTATE: &str = "__VIEWSTATE";

// ============================================================================
// Web-Service Protocol
// ============================================================================

/// Form field every web-service call posts its payload under
pub const WS_INPUT_FIELD: &str = "sInput";

/// Literal the web service returns in the body of an accepted call
pub const SUCCESS_MARKER: &str = "SUCCESS";

/// Edits bundled into one save call; the console is driven one record at a time
pub const SAVE_EDIT_COUNT: u32 = 1;

/// TTL applied to newly created records (seconds)
pub const DEFAULT_RECORD_TTL_SECS: u32 = 600;

// ============================================================================
// Timing Defaults
// ============================================================================

/// Pause between a mutating call and its save call (milliseconds).
///
/// The backend rejects a save that lands too quickly after an edit or add.
/// This compensates for undocumented write latency on the remote side and
/// is tunable through [`crate::config::ClientConfigBuilder::settle_delay`].
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;

/// Default connect timeout for console requests (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default overall request timeout for console requests (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Client Identity
// ============================================================================

/// User agent presented to the console
pub const DEFAULT_USER_AGENT: &str = concat!("dandy/", env!("CARGO_PKG_VERSION"));

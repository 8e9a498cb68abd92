//! Log message constants
//!
//! This module centralizes the log messages emitted across the crate to keep
//! wording consistent.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting Depot product validation";
    pub const SETTINGS_LOADED: &str = "Settings loaded";
    pub const LOCALE_DIR_LOADED: &str = "Locale directory loaded";
    pub const FIXTURES_LOADED: &str = "Catalog seeded from fixtures";
    pub const CANDIDATE_VALID: &str = "Candidate product is valid";
    pub const CANDIDATE_INVALID: &str = "Candidate product is invalid";
}

/// Validation engine messages
pub mod validation {
    pub const RULE_FAILED: &str = "Validation rule failed";
    pub const VALIDATION_FINISHED: &str = "Validation finished";
}

/// Message catalog messages
pub mod i18n {
    pub const LOCALE_FILE_LOADED: &str = "Locale file loaded";
    pub const TRANSLATION_MISSING: &str = "Translation missing";
}

/// Product catalog messages
pub mod catalog {
    pub const PRODUCT_CREATED: &str = "Product created";
    pub const PRODUCT_UPDATED: &str = "Product updated";
    pub const PRODUCT_DESTROYED: &str = "Product destroyed";
    pub const PRODUCT_REJECTED: &str = "Product rejected by validation";
}

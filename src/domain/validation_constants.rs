//! Validation constants for domain types
//!
//! This module centralizes the limits, patterns and message keys used by the
//! product rule set so that the engine, the newtypes and the tests agree.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled `image_url::VALIDATION_PATTERN`, shared by `ImageUrl`
pub static IMAGE_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(image_url::VALIDATION_PATTERN).expect("image url pattern is valid")
});

/// Compiled `locale::VALIDATION_PATTERN`, shared by `Locale`
pub static LOCALE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(locale::VALIDATION_PATTERN).expect("locale pattern is valid")
});

/// Product title constraints
pub mod title {
    /// Minimum title length, in characters
    pub const MIN_LENGTH: usize = 10;
}

/// Product price constraints
pub mod price {
    /// Minimum price mantissa (scaled by `MIN_SCALE`), i.e. 0.01
    pub const MIN_MANTISSA: i64 = 1;

    /// Decimal scale applied to `MIN_MANTISSA`
    pub const MIN_SCALE: u32 = 2;
}

/// Image URL constraints
pub mod image_url {
    /// Optional path/scheme prefix ending in `/`, a filename, then an allowed
    /// extension at the very end of the string
    pub const VALIDATION_PATTERN: &str = r"(?i)\A(?:.*/)?[^/]+\.(?:gif|jpe?g|png)\z";

    /// Extensions accepted by `VALIDATION_PATTERN`
    pub const ALLOWED_EXTENSIONS: &[&str] = &["gif", "jpg", "jpeg", "png"];

    /// Examples that must be accepted
    pub const TEST_VALID: &[&str] = &[
        "fred.gif",
        "fred.jpg",
        "fred.jpeg",
        "fred.png",
        "FRED.JPG",
        "FRED.Jpg",
        "http://a.b.c/x/y/z/fred.gif",
    ];

    /// Examples that must be rejected
    pub const TEST_INVALID: &[&str] = &["fred.doc", "fred.gif/more", "fred.gif.more"];
}

/// Locale tag constraints
pub mod locale {
    /// Language with an optional region, e.g. `en`, `es`, `pt-BR`
    pub const VALIDATION_PATTERN: &str = r"^[a-z]{2}(-[A-Z]{2})?$";

    /// Locale used when none is configured
    pub const DEFAULT: &str = "en";
}

/// Message catalog keys
pub mod message_keys {
    pub const BLANK: &str = "errors.messages.blank";
    pub const TOO_SHORT: &str = "errors.messages.too_short";
    pub const GREATER_THAN_OR_EQUAL_TO: &str = "errors.messages.greater_than_or_equal_to";
    pub const NOT_A_NUMBER: &str = "errors.messages.not_a_number";
    pub const NOT_AN_IMAGE: &str = "errors.messages.not_an_image";
    pub const TAKEN: &str = "errors.messages.taken";
    pub const INVALID: &str = "errors.messages.invalid";
    pub const FORMAT: &str = "errors.format";
    pub const ATTRIBUTE_PREFIX: &str = "attributes.product";
}

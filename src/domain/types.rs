//! Validated product types
//!
//! A `Product` is a loose candidate; once it passes validation its attributes
//! are carried in these newtypes so the rest of the system never re-checks
//! them.

use nutype::nutype;
use rust_decimal::Decimal;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::validation_constants::{price, title, IMAGE_URL_REGEX};

/// Unique identifier for a persisted product
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRef
))]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn generate() -> Self {
        // Uuid::now_v7() generates a time-ordered UUID
        Self::new(Uuid::now_v7())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::generate()
    }
}

/// Product title, kept exactly as entered so uniqueness stays exact-match
#[nutype(
    validate(predicate = |t| !t.trim().is_empty() && t.chars().count() >= title::MIN_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct ProductTitle(String);

/// Product description
#[nutype(
    validate(predicate = |d| !d.trim().is_empty()),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct ProductDescription(String);

/// Product price, never below 0.01
#[nutype(
    validate(predicate = |amount| *amount >= minimum_price()),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct ProductPrice(Decimal);

/// Smallest accepted price
pub fn minimum_price() -> Decimal {
    Decimal::new(price::MIN_MANTISSA, price::MIN_SCALE)
}

/// Image file name or URL ending in an allowed image extension
#[nutype(
    validate(regex = IMAGE_URL_REGEX),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct ImageUrl(String);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation_constants::image_url;

    #[test]
    fn test_product_id_generation_is_unique() {
        assert_ne!(ProductId::generate(), ProductId::generate());
    }

    #[test]
    fn test_title_validation() {
        assert!(ProductTitle::try_new("My Book Title".to_string()).is_ok());
        assert!(ProductTitle::try_new("0123456789".to_string()).is_ok());
        assert!(ProductTitle::try_new("012345678".to_string()).is_err());
        assert!(ProductTitle::try_new("   ".to_string()).is_err());
    }

    #[test]
    fn test_title_keeps_surrounding_whitespace() {
        let title = ProductTitle::try_new("  Programming Ruby  ".to_string()).unwrap();
        assert_eq!(title.as_ref(), "  Programming Ruby  ");
    }

    #[test]
    fn test_description_validation() {
        assert!(ProductDescription::try_new("yyy".to_string()).is_ok());
        assert!(ProductDescription::try_new("".to_string()).is_err());
        assert!(ProductDescription::try_new(" \n ".to_string()).is_err());
    }

    #[test]
    fn test_price_validation() {
        assert!(ProductPrice::try_new(Decimal::new(1, 2)).is_ok());
        assert!(ProductPrice::try_new(Decimal::ONE).is_ok());
        assert!(ProductPrice::try_new(Decimal::ZERO).is_err());
        assert!(ProductPrice::try_new(Decimal::NEGATIVE_ONE).is_err());
        assert!(ProductPrice::try_new(Decimal::new(9, 3)).is_err());
    }

    #[test]
    fn test_image_url_newtype_uses_the_shared_pattern() {
        for url in image_url::TEST_VALID {
            assert!(ImageUrl::try_new(url.to_string()).is_ok(), "{url}");
        }
        for url in image_url::TEST_INVALID {
            assert!(ImageUrl::try_new(url.to_string()).is_err(), "{url}");
        }
    }
}

//! Depot - product record validation
//!
//! Checks a candidate storefront product for presence, numeric range, length,
//! image format and title uniqueness, and reports field-scoped, localized
//! error messages. Violations are returned as data, never raised.

pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod validation;

pub use domain::{Field, PriceValue, Product, ValidProduct};
pub use error::{Error, Result};
pub use i18n::{Locale, MessageCatalog, Translator};
pub use infrastructure::{Fixtures, InMemoryCatalog};
pub use validation::{TitleLookup, ValidationEngine, ValidationErrors};

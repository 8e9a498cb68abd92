//! Domain types for Depot products
//!
//! Candidate records, the validated newtypes they turn into, and the limits
//! both are checked against.

pub mod product;
pub mod types;
pub mod validation_constants;

pub use product::{Field, FieldValue, PriceValue, Product, ValidProduct};
pub use types::{ImageUrl, ProductDescription, ProductId, ProductPrice, ProductTitle};

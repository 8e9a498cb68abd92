//! Infrastructure components
//!
//! Reference collaborators for the validation engine: an in-memory product
//! catalog that answers uniqueness lookups, named fixtures to seed it, and
//! centralized log messages.

pub mod catalog;
pub mod fixtures;
pub mod log_messages;

pub use catalog::InMemoryCatalog;
pub use fixtures::Fixtures;

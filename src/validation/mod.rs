//! Product validation
//!
//! `ValidationEngine` runs a `RuleSet` over a candidate `Product`, asking a
//! `TitleLookup` whether the title is taken and a `Translator` for message
//! text. The outcome is a `ValidationErrors` value; an empty one means valid.

pub mod engine;
pub mod errors;
pub mod lookup;
pub mod rules;

pub use engine::ValidationEngine;
pub use errors::{ErrorKind, FieldError, ValidationErrors};
pub use lookup::{Excluding, NoTitles, TitleLookup};
pub use rules::{FieldRule, Rule, RuleSet};

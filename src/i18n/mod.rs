//! Locale-aware message lookup
//!
//! Validation rules never carry display text. They name a message key such as
//! `errors.messages.taken`, and a `Translator` turns the key into text for a
//! locale.

pub mod catalog;

pub use catalog::MessageCatalog;

use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

use crate::domain::validation_constants::{locale, LOCALE_REGEX};

/// Locale tag, e.g. `en` or `pt-BR`
#[nutype(
    validate(regex = LOCALE_REGEX),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Locale(String);

impl Locale {
    /// Parse a tag, normalizing case (`EN` → `en`, `pt-br` → `pt-BR`)
    pub fn parse(tag: &str) -> crate::Result<Self> {
        let normalized = match tag.trim().split_once(['-', '_']) {
            Some((language, region)) => {
                format!("{}-{}", language.to_lowercase(), region.to_uppercase())
            }
            None => tag.trim().to_lowercase(),
        };
        Self::try_new(normalized).map_err(|_| crate::Error::InvalidLocale(tag.to_string()))
    }

    pub fn english() -> Self {
        Self::try_new(locale::DEFAULT.to_string()).expect("Default locale is valid")
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

/// Named values substituted into `%{name}` placeholders
pub type MessageArgs<'a> = [(&'a str, String)];

/// Source of localized message text
pub trait Translator: Send + Sync {
    /// Text for `key` in `locale` with `args` substituted, if an entry exists
    fn lookup(&self, key: &str, locale: &Locale, args: &MessageArgs<'_>) -> Option<String>;

    /// Like `lookup`, but unknown keys render as a "translation missing" marker
    fn translate(&self, key: &str, locale: &Locale, args: &MessageArgs<'_>) -> String {
        self.lookup(key, locale, args)
            .unwrap_or_else(|| format!("translation missing: {locale}.{key}"))
    }
}

/// Replace `%{name}` placeholders with the matching argument
pub fn interpolate(template: &str, args: &MessageArgs<'_>) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("%{{{name}}}"), value)
    })
}

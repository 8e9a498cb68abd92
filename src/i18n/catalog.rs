//! In-memory message tables
//!
//! Entries are stored under flattened keys (`errors.messages.taken`).
//! Pluralized entries use `one` and `other` sub-keys. Locale files are read
//! through the `config` crate, so TOML, YAML and JSON all work; their top-level
//! keys are locale tags.

use config::{Config, File};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use super::{interpolate, Locale, MessageArgs, Translator};
use crate::domain::validation_constants::message_keys;
use crate::infrastructure::log_messages::i18n as log;
use crate::Result;

const ENGLISH: &[(&str, &str)] = &[
    (message_keys::BLANK, "can't be blank"),
    ("errors.messages.too_short.one", "is too short (minimum is 1 character)"),
    (
        "errors.messages.too_short.other",
        "is too short (minimum is %{count} characters)",
    ),
    (
        message_keys::GREATER_THAN_OR_EQUAL_TO,
        "must be greater than or equal to %{count}",
    ),
    (message_keys::NOT_A_NUMBER, "is not a number"),
    (
        message_keys::NOT_AN_IMAGE,
        "must be a URL for GIF, JPG or PNG image.",
    ),
    (message_keys::TAKEN, "has already been taken"),
    (message_keys::INVALID, "is invalid"),
    (message_keys::FORMAT, "%{attribute} %{message}"),
];

const SPANISH: &[(&str, &str)] = &[
    (message_keys::BLANK, "no puede estar en blanco"),
    ("errors.messages.too_short.one", "es demasiado corto (1 carácter mínimo)"),
    (
        "errors.messages.too_short.other",
        "es demasiado corto (%{count} caracteres mínimo)",
    ),
    (
        message_keys::GREATER_THAN_OR_EQUAL_TO,
        "debe ser mayor que o igual a %{count}",
    ),
    (message_keys::NOT_A_NUMBER, "no es un número"),
    (message_keys::NOT_AN_IMAGE, "no es una imagen"),
    (message_keys::TAKEN, "ya está en uso"),
    (message_keys::INVALID, "no es válido"),
    (message_keys::FORMAT, "%{attribute} %{message}"),
    ("attributes.product.title", "Título"),
    ("attributes.product.description", "Descripción"),
    ("attributes.product.price", "Precio"),
    ("attributes.product.image_url", "Imagen"),
];

/// Message tables keyed by locale, with fallback to a default locale
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    default_locale: Locale,
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl MessageCatalog {
    /// A catalog with no entries
    pub fn empty(default_locale: Locale) -> Self {
        Self {
            default_locale,
            tables: HashMap::new(),
        }
    }

    /// English and Spanish validation messages, English as the fallback
    pub fn builtin() -> Self {
        let mut catalog = Self::empty(Locale::english());
        catalog.insert_all(&Locale::english(), ENGLISH);
        if let Ok(spanish) = Locale::parse("es") {
            catalog.insert_all(&spanish, SPANISH);
        }
        catalog
    }

    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.tables.keys().collect();
        locales.sort();
        locales
    }

    pub fn insert(&mut self, locale: &Locale, key: impl Into<String>, text: impl Into<String>) {
        self.tables
            .entry(locale.clone())
            .or_default()
            .insert(key.into(), text.into());
    }

    fn insert_all(&mut self, locale: &Locale, entries: &[(&str, &str)]) {
        for (key, text) in entries {
            self.insert(locale, *key, *text);
        }
    }

    /// Merge a locale file; later entries override earlier ones
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let tree: Value = Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;

        let Value::Object(locales) = tree else {
            return Ok(());
        };

        for (tag, subtree) in locales {
            let locale = Locale::parse(&tag)?;
            let mut entries = Vec::new();
            flatten(String::new(), subtree, &mut entries);
            debug!(
                path = %path.display(),
                locale = %locale,
                entries = entries.len(),
                "{}",
                log::LOCALE_FILE_LOADED
            );
            for (key, text) in entries {
                self.insert(&locale, key, text);
            }
        }
        Ok(())
    }

    /// Merge every `.toml`, `.yaml`, `.yml` and `.json` file in `dir`, by name order
    pub fn load_dir(&mut self, dir: &Path) -> Result<()> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let supported = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| matches!(ext, "toml" | "yaml" | "yml" | "json"));
            if path.is_file() && supported {
                paths.push(path);
            }
        }
        paths.sort();

        for path in paths {
            self.load_file(&path)?;
        }
        Ok(())
    }

    /// Raw entry for `key`, without fallback or interpolation
    pub fn entry(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.tables
            .get(locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    fn lookup_plural(&self, locale: &Locale, key: &str, count: Option<&str>) -> Option<&str> {
        if let Some(count) = count {
            let form = if count == "1" { "one" } else { "other" };
            if let Some(text) = self.entry(locale, &format!("{key}.{form}")) {
                return Some(text);
            }
        }
        self.entry(locale, key)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Translator for MessageCatalog {
    fn lookup(&self, key: &str, locale: &Locale, args: &MessageArgs<'_>) -> Option<String> {
        let count = args
            .iter()
            .find(|(name, _)| *name == "count")
            .map(|(_, value)| value.as_str());

        let found = self
            .lookup_plural(locale, key, count)
            .or_else(|| self.lookup_plural(&self.default_locale, key, count));

        if found.is_none() {
            debug!(locale = %locale, key, "{}", log::TRANSLATION_MISSING);
        }
        found.map(|template| interpolate(template, args))
    }
}

fn flatten(prefix: String, value: Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name
                } else {
                    format!("{prefix}.{name}")
                };
                flatten(key, child, out);
            }
        }
        Value::String(text) => out.push((prefix, text)),
        Value::Null => {}
        other => out.push((prefix, other.to_string())),
    }
}

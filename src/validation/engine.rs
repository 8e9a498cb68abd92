//! Validation engine
//!
//! Evaluates every rule of a `RuleSet` against a product and renders each
//! violation through a `Translator`. No rule short-circuits another, the
//! record is never mutated, and two calls against the same record and lookup
//! state return equal results.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::errors::{FieldError, ValidationErrors};
use super::lookup::TitleLookup;
use super::rules::RuleSet;
use crate::domain::product::{Field, Product};
use crate::domain::validation_constants::message_keys;
use crate::i18n::{Locale, MessageCatalog, Translator};
use crate::infrastructure::log_messages::validation as log;
use crate::Result;

#[derive(Clone)]
pub struct ValidationEngine {
    rules: Arc<RuleSet>,
    translator: Arc<dyn Translator>,
    locale: Locale,
}

impl ValidationEngine {
    pub fn new(rules: RuleSet, translator: Arc<dyn Translator>) -> Self {
        Self {
            rules: Arc::new(rules),
            translator,
            locale: Locale::default(),
        }
    }

    /// Product rules rendered through the built-in message catalog
    pub fn for_products() -> Result<Self> {
        Ok(Self::new(
            RuleSet::product()?,
            Arc::new(MessageCatalog::builtin()),
        ))
    }

    /// Same rules and translator, messages rendered in `locale`
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
            translator: Arc::clone(&self.translator),
            locale,
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[instrument(skip_all, fields(locale = %self.locale))]
    pub fn validate(&self, product: &Product, titles: &dyn TitleLookup) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for field_rule in self.rules.iter() {
            let value = product.value(field_rule.field);
            let Some(kind) = field_rule.rule.check(value, titles) else {
                continue;
            };

            let key = field_rule.rule.message_key(&kind);
            let message = self
                .translator
                .translate(key, &self.locale, &kind.message_args());
            debug!(
                field = %field_rule.field,
                rule = field_rule.rule.name(),
                message = %message,
                "{}",
                log::RULE_FAILED
            );

            let full_message = self.full_message(field_rule.field, &message);
            errors.add(
                field_rule.field,
                FieldError {
                    kind,
                    message,
                    full_message,
                },
            );
        }

        debug!(violations = errors.len(), "{}", log::VALIDATION_FINISHED);
        errors
    }

    pub fn is_valid(&self, product: &Product, titles: &dyn TitleLookup) -> bool {
        self.validate(product, titles).is_empty()
    }

    pub fn is_invalid(&self, product: &Product, titles: &dyn TitleLookup) -> bool {
        !self.is_valid(product, titles)
    }

    fn full_message(&self, field: Field, message: &str) -> String {
        let attribute = self
            .translator
            .lookup(
                &format!("{}.{field}", message_keys::ATTRIBUTE_PREFIX),
                &self.locale,
                &[],
            )
            .unwrap_or_else(|| field.human_name().to_string());

        self.translator
            .lookup(
                message_keys::FORMAT,
                &self.locale,
                &[("attribute", attribute.clone()), ("message", message.to_string())],
            )
            .unwrap_or_else(|| format!("{attribute} {message}"))
    }
}

impl fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("rules", &self.rules.len())
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

//! Field rules
//!
//! A rule is a predicate over one field's value. Rules never look at each
//! other's outcome; the uniqueness rule is the only one that consults state
//! outside the record.

use regex::Regex;
use rust_decimal::Decimal;

use super::errors::ErrorKind;
use super::lookup::TitleLookup;
use crate::domain::product::{Field, FieldValue};
use crate::domain::types::minimum_price;
use crate::domain::validation_constants::{image_url, message_keys, title};
use crate::Result;

#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must be present and not whitespace-only
    Presence,
    /// Text length in characters; absent values have length 0
    MinLength(usize),
    /// Value must be numeric and at least the bound
    Numericality { greater_than_or_equal_to: Decimal },
    /// Text (absent reads as empty) must match the pattern
    Format {
        pattern: Regex,
        message_key: Option<&'static str>,
    },
    /// Value must not be taken according to the lookup
    Uniqueness,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Presence => "presence",
            Rule::MinLength(_) => "length",
            Rule::Numericality { .. } => "numericality",
            Rule::Format { .. } => "format",
            Rule::Uniqueness => "uniqueness",
        }
    }

    pub fn check(&self, value: FieldValue<'_>, titles: &dyn TitleLookup) -> Option<ErrorKind> {
        match self {
            Rule::Presence => value.is_blank().then_some(ErrorKind::Blank),
            Rule::MinLength(min) => {
                (value.text().chars().count() < *min).then_some(ErrorKind::TooShort { count: *min })
            }
            Rule::Numericality {
                greater_than_or_equal_to,
            } => match value.decimal() {
                None => Some(ErrorKind::NotANumber),
                Some(amount) if amount < *greater_than_or_equal_to => {
                    Some(ErrorKind::GreaterThanOrEqualTo {
                        count: *greater_than_or_equal_to,
                    })
                }
                Some(_) => None,
            },
            Rule::Format { pattern, .. } => {
                (!pattern.is_match(&value.text())).then_some(ErrorKind::Invalid)
            }
            Rule::Uniqueness => {
                if value.is_absent() {
                    return None;
                }
                titles.exists(&value.text()).then_some(ErrorKind::Taken)
            }
        }
    }

    /// Catalog key for a violation of this rule
    pub fn message_key(&self, kind: &ErrorKind) -> &'static str {
        match self {
            Rule::Format {
                message_key: Some(key),
                ..
            } => *key,
            _ => kind.default_message_key(),
        }
    }
}

/// A rule bound to the field it checks
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: Field,
    pub rule: Rule,
}

/// Rules in declaration order
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, field: Field, rule: Rule) -> Self {
        self.rules.push(FieldRule { field, rule });
        self
    }

    /// The product rules: presence of every attribute, then title length,
    /// price numericality, image format, and title uniqueness
    pub fn product() -> Result<Self> {
        let image_pattern = Regex::new(image_url::VALIDATION_PATTERN)?;

        let rules = Field::ALL
            .into_iter()
            .fold(Self::new(), |rules, field| rules.rule(field, Rule::Presence))
            .rule(Field::Title, Rule::MinLength(title::MIN_LENGTH))
            .rule(
                Field::Price,
                Rule::Numericality {
                    greater_than_or_equal_to: minimum_price(),
                },
            )
            .rule(
                Field::ImageUrl,
                Rule::Format {
                    pattern: image_pattern,
                    message_key: Some(message_keys::NOT_AN_IMAGE),
                },
            )
            .rule(Field::Title, Rule::Uniqueness);

        Ok(rules)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter()
    }

    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &Rule> {
        self.rules
            .iter()
            .filter(move |r| r.field == field)
            .map(|r| &r.rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

//! Accumulated validation errors
//!
//! Errors are data: each failing rule appends one `FieldError` to its field,
//! in rule declaration order. An empty collection means the record is valid.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::product::Field;
use crate::domain::validation_constants::message_keys;

/// Which rule failed, with the parameters it was checked against
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ErrorKind {
    Blank,
    TooShort { count: usize },
    GreaterThanOrEqualTo { count: Decimal },
    NotANumber,
    Invalid,
    Taken,
}

impl ErrorKind {
    /// Catalog key used when the rule does not name its own message
    pub fn default_message_key(&self) -> &'static str {
        match self {
            ErrorKind::Blank => message_keys::BLANK,
            ErrorKind::TooShort { .. } => message_keys::TOO_SHORT,
            ErrorKind::GreaterThanOrEqualTo { .. } => message_keys::GREATER_THAN_OR_EQUAL_TO,
            ErrorKind::NotANumber => message_keys::NOT_A_NUMBER,
            ErrorKind::Invalid => message_keys::INVALID,
            ErrorKind::Taken => message_keys::TAKEN,
        }
    }

    /// Interpolation arguments for the message
    pub fn message_args(&self) -> Vec<(&'static str, String)> {
        match self {
            ErrorKind::TooShort { count } => vec![("count", count.to_string())],
            ErrorKind::GreaterThanOrEqualTo { count } => vec![("count", count.to_string())],
            _ => Vec::new(),
        }
    }
}

/// One rendered rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
    pub full_message: String,
}

/// Field-scoped errors for one validation call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    entries: BTreeMap<Field, Vec<FieldError>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: Field, error: FieldError) {
        self.entries.entry(field).or_default().push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of violations across all fields
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn get(&self, field: Field) -> &[FieldError] {
        self.entries.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Messages for `field`, in rule order; empty when the field passed
    pub fn messages(&self, field: Field) -> Vec<&str> {
        self.get(field).iter().map(|e| e.message.as_str()).collect()
    }

    pub fn kinds(&self, field: Field) -> Vec<&ErrorKind> {
        self.get(field).iter().map(|e| &e.kind).collect()
    }

    pub fn any(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    /// Fields with at least one error, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.keys().copied()
    }

    /// "Title can't be blank" style sentences, field by field
    pub fn full_messages(&self) -> Vec<&str> {
        self.entries
            .values()
            .flatten()
            .map(|e| e.full_message.as_str())
            .collect()
    }

    /// Messages keyed by attribute name
    pub fn to_message_map(&self) -> BTreeMap<String, Vec<String>> {
        self.entries
            .iter()
            .map(|(field, errors)| {
                (
                    field.to_string(),
                    errors.iter().map(|e| e.message.clone()).collect(),
                )
            })
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(kind: ErrorKind, message: &str, full_message: &str) -> FieldError {
        FieldError {
            kind,
            message: message.to_string(),
            full_message: full_message.to_string(),
        }
    }

    #[test]
    fn test_empty_errors() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert!(errors.messages(Field::Title).is_empty());
        assert!(!errors.any(Field::Price));
    }

    #[test]
    fn test_messages_keep_insertion_order_within_a_field() {
        let mut errors = ValidationErrors::new();
        errors.add(
            Field::Title,
            error(ErrorKind::Blank, "can't be blank", "Title can't be blank"),
        );
        errors.add(
            Field::Title,
            error(
                ErrorKind::TooShort { count: 10 },
                "is too short (minimum is 10 characters)",
                "Title is too short (minimum is 10 characters)",
            ),
        );

        assert_eq!(
            errors.messages(Field::Title),
            vec!["can't be blank", "is too short (minimum is 10 characters)"]
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_fields_are_reported_in_declaration_order() {
        let mut errors = ValidationErrors::new();
        errors.add(
            Field::ImageUrl,
            error(ErrorKind::Blank, "can't be blank", "Image url can't be blank"),
        );
        errors.add(
            Field::Title,
            error(ErrorKind::Taken, "has already been taken", "Title has already been taken"),
        );

        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(fields, vec![Field::Title, Field::ImageUrl]);
        assert_eq!(
            errors.to_string(),
            "Title has already been taken, Image url can't be blank"
        );
    }

    #[test]
    fn test_serializes_as_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add(
            Field::Price,
            error(ErrorKind::NotANumber, "is not a number", "Price is not a number"),
        );

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["price"][0]["message"], "is not a number");
        assert_eq!(json["price"][0]["kind"]["error"], "not_a_number");
        assert_eq!(
            errors.to_message_map()["price"],
            vec!["is not a number".to_string()]
        );
    }

    #[test]
    fn test_count_arguments() {
        assert_eq!(
            ErrorKind::GreaterThanOrEqualTo {
                count: Decimal::new(1, 2)
            }
            .message_args(),
            vec![("count", "0.01".to_string())]
        );
        assert!(ErrorKind::Taken.message_args().is_empty());
    }
}

//! Candidate product records
//!
//! A `Product` holds whatever the caller supplied, including nothing at all.
//! Validity is never checked on construction; see `validation::ValidationEngine`.

use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::str::FromStr;

use crate::domain::types::{
    ImageUrl, ProductDescription, ProductId, ProductPrice, ProductTitle,
};

/// Attributes of a product that rules attach to
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    #[display("title")]
    Title,
    #[display("description")]
    Description,
    #[display("price")]
    Price,
    #[display("image_url")]
    ImageUrl,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Title,
        Field::Description,
        Field::Price,
        Field::ImageUrl,
    ];

    /// Humanized attribute name used in full messages
    pub fn human_name(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Description",
            Field::Price => "Price",
            Field::ImageUrl => "Image url",
        }
    }
}

/// Price as supplied by the caller: a decimal amount, raw text, or any other
/// JSON value (booleans, arrays, numbers out of `Decimal` range)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Amount(Decimal),
    Text(String),
    Other(Value),
}

impl PriceValue {
    /// The numeric value, if the input is (or parses as) a decimal
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            PriceValue::Amount(amount) => Some(*amount),
            PriceValue::Text(text) => Decimal::from_str(text.trim()).ok(),
            PriceValue::Other(_) => None,
        }
    }

    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            PriceValue::Amount(amount) => Cow::Owned(amount.to_string()),
            PriceValue::Text(text) => Cow::Borrowed(text),
            PriceValue::Other(value) => Cow::Owned(value.to_string()),
        }
    }

    /// Whitespace-only text, `null`, `false` and empty collections are blank
    pub fn is_blank(&self) -> bool {
        match self {
            PriceValue::Amount(_) => false,
            PriceValue::Text(text) => text.trim().is_empty(),
            PriceValue::Other(value) => match value {
                Value::Null | Value::Bool(false) => true,
                Value::Array(items) => items.is_empty(),
                Value::Object(entries) => entries.is_empty(),
                _ => false,
            },
        }
    }
}

impl From<Decimal> for PriceValue {
    fn from(amount: Decimal) -> Self {
        PriceValue::Amount(amount)
    }
}

impl From<i64> for PriceValue {
    fn from(amount: i64) -> Self {
        PriceValue::Amount(Decimal::from(amount))
    }
}

impl From<i32> for PriceValue {
    fn from(amount: i32) -> Self {
        PriceValue::Amount(Decimal::from(amount))
    }
}

impl From<&str> for PriceValue {
    fn from(text: &str) -> Self {
        PriceValue::Text(text.to_string())
    }
}

impl From<String> for PriceValue {
    fn from(text: String) -> Self {
        PriceValue::Text(text)
    }
}

/// Raw value of one field, borrowed from a product
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Price(Option<&'a PriceValue>),
}

impl<'a> FieldValue<'a> {
    /// Absent, empty and whitespace-only values are blank
    pub fn is_blank(&self) -> bool {
        match *self {
            FieldValue::Text(text) => text.is_none_or(|t| t.trim().is_empty()),
            FieldValue::Price(price) => price.is_none_or(PriceValue::is_blank),
        }
    }

    /// No value was supplied at all
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Text(None) | FieldValue::Price(None))
    }

    /// Text form of the value; absent values read as the empty string
    pub fn text(&self) -> Cow<'a, str> {
        match *self {
            FieldValue::Text(text) => Cow::Borrowed(text.unwrap_or_default()),
            FieldValue::Price(Some(price)) => price.to_text(),
            FieldValue::Price(None) => Cow::Borrowed(""),
        }
    }

    pub fn decimal(&self) -> Option<Decimal> {
        match *self {
            FieldValue::Text(text) => text.and_then(|t| Decimal::from_str(t.trim()).ok()),
            FieldValue::Price(price) => price.and_then(PriceValue::as_decimal),
        }
    }
}

/// A candidate product, possibly incomplete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<PriceValue>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<PriceValue>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn set_price(&mut self, price: impl Into<PriceValue>) {
        self.price = Some(price.into());
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_image_url(&mut self, image_url: impl Into<String>) {
        self.image_url = Some(image_url.into());
    }

    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Title => FieldValue::Text(self.title.as_deref()),
            Field::Description => FieldValue::Text(self.description.as_deref()),
            Field::Price => FieldValue::Price(self.price.as_ref()),
            Field::ImageUrl => FieldValue::Text(self.image_url.as_deref()),
        }
    }
}

impl From<&ValidProduct> for Product {
    fn from(product: &ValidProduct) -> Self {
        Self {
            id: Some(product.id),
            title: Some(product.title.to_string()),
            description: Some(product.description.to_string()),
            price: Some(PriceValue::Amount(*product.price.as_ref())),
            image_url: Some(product.image_url.to_string()),
        }
    }
}

/// A product whose attributes have all passed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidProduct {
    pub id: ProductId,
    pub title: ProductTitle,
    pub description: ProductDescription,
    pub price: ProductPrice,
    pub image_url: ImageUrl,
}

//! Property-based tests for validation invariants

use depot::domain::validation_constants::title::MIN_LENGTH;
use depot::domain::Field;
use depot::validation::NoTitles;
use depot::{PriceValue, Product, ValidationEngine};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub mod generators {
    use super::*;
    use proptest::option;
    use proptest::string::string_regex;

    pub fn valid_title() -> impl Strategy<Value = String> {
        string_regex("[A-Za-z][A-Za-z0-9 ]{9,40}").unwrap()
    }

    /// Price in cents, rendered as a two-place decimal
    pub fn price_cents() -> impl Strategy<Value = Decimal> {
        (-10_000i64..10_000).prop_map(|cents| Decimal::new(cents, 2))
    }

    pub fn image_url() -> impl Strategy<Value = String> {
        string_regex(r"(https?://[a-z]+\.[a-z]{2,3}/)?[a-z]{1,12}\.(gif|jpe?g|png|GIF|JPG|PNG)")
            .unwrap()
    }

    /// Arbitrary candidate, including absent and garbage values
    pub fn any_product() -> impl Strategy<Value = Product> {
        (
            option::of(".{0,20}"),
            option::of(".{0,20}"),
            option::of(prop_oneof![
                price_cents().prop_map(PriceValue::Amount),
                ".{0,6}".prop_map(PriceValue::Text),
            ]),
            option::of(".{0,20}"),
        )
            .prop_map(|(title, description, price, image_url)| Product {
                title,
                description,
                price,
                image_url,
                ..Product::default()
            })
    }
}

fn engine() -> ValidationEngine {
    ValidationEngine::for_products().unwrap()
}

proptest! {
    #[test]
    fn validation_is_repeatable(product in generators::any_product()) {
        let engine = engine();
        let taken: HashSet<String> = product.title.iter().cloned().collect();

        let first = engine.validate(&product, &taken);
        let second = engine.validate(&product, &taken);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn well_formed_products_are_valid(
        title in generators::valid_title(),
        cents in 1i64..1_000_000,
        image_url in generators::image_url(),
    ) {
        let product = Product::new()
            .with_title(title)
            .with_description("yyy")
            .with_price(Decimal::new(cents, 2))
            .with_image_url(image_url);

        prop_assert!(engine().is_valid(&product, &NoTitles));
    }

    #[test]
    fn price_is_valid_exactly_from_one_cent(price in generators::price_cents()) {
        let product = Product::new()
            .with_title("My Book Title")
            .with_description("yyy")
            .with_price(price)
            .with_image_url("zzz.jpg");

        let errors = engine().validate(&product, &NoTitles);
        prop_assert_eq!(errors.any(Field::Price), price < Decimal::new(1, 2));
        prop_assert!(errors.fields().all(|field| field == Field::Price));
    }

    #[test]
    fn title_length_threshold(title in "[a-z]{1,20}") {
        let product = Product::new()
            .with_title(title.clone())
            .with_description("yyy")
            .with_price(1)
            .with_image_url("zzz.jpg");

        let long_enough = title.chars().count() >= MIN_LENGTH;
        prop_assert_eq!(engine().is_valid(&product, &NoTitles), long_enough);
    }

    #[test]
    fn taken_titles_are_always_reported(title in generators::valid_title()) {
        let product = Product::new()
            .with_title(title.clone())
            .with_description("yyy")
            .with_price(1)
            .with_image_url("zzz.jpg");
        let taken: HashSet<String> = [title].into_iter().collect();

        let errors = engine().validate(&product, &taken);
        prop_assert_eq!(errors.messages(Field::Title), vec!["has already been taken"]);
    }
}

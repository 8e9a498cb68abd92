//! Named product fixtures
//!
//! A fixture file is a JSON object mapping a name to a candidate product:
//!
//! ```json
//! { "ruby": { "title": "Programming Ruby 1.9", "description": "...",
//!             "price": 49.50, "image_url": "ruby.png" } }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use super::catalog::InMemoryCatalog;
use super::log_messages::application as log;
use crate::domain::{Product, ProductId};
use crate::validation::ValidationEngine;
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Fixtures {
    products: BTreeMap<String, Product>,
}

impl Fixtures {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn product(&self, name: &str) -> Result<&Product> {
        self.products
            .get(name)
            .ok_or_else(|| Error::UnknownFixture(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Create every fixture in `catalog`, in name order
    ///
    /// Fails on the first fixture the engine rejects.
    pub fn load_into(
        &self,
        catalog: &mut InMemoryCatalog,
        engine: &ValidationEngine,
    ) -> Result<BTreeMap<String, ProductId>> {
        let mut ids = BTreeMap::new();
        for (name, product) in &self.products {
            let stored = catalog.create(product, engine)?;
            ids.insert(name.clone(), stored.id);
        }
        info!(count = ids.len(), "{}", log::FIXTURES_LOADED);
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "ruby": {
            "title": "Programming Ruby 1.9",
            "description": "Ruby is the fastest growing and most exciting dynamic language out there.",
            "price": 49.50,
            "image_url": "ruby.png"
        },
        "rails": {
            "title": "Agile Web Development with Rails",
            "description": "The definitive guide to building web applications with Rails.",
            "price": "34.95",
            "image_url": "rails.png"
        }
    }"#;

    #[test]
    fn test_fixtures_parse_by_name() {
        let fixtures = Fixtures::from_json(JSON).unwrap();
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures.names().collect::<Vec<_>>(), vec!["rails", "ruby"]);
        assert_eq!(
            fixtures.product("ruby").unwrap().title.as_deref(),
            Some("Programming Ruby 1.9")
        );
    }

    #[test]
    fn test_unknown_fixture_is_an_error() {
        let fixtures = Fixtures::from_json(JSON).unwrap();
        assert!(matches!(
            fixtures.product("python"),
            Err(Error::UnknownFixture(name)) if name == "python"
        ));
    }

    #[test]
    fn test_load_into_catalog() {
        let fixtures = Fixtures::from_json(JSON).unwrap();
        let engine = ValidationEngine::for_products().unwrap();
        let mut catalog = InMemoryCatalog::new();

        let ids = fixtures.load_into(&mut catalog, &engine).unwrap();
        assert_eq!(catalog.len(), 2);
        let ruby = catalog.find(ids["ruby"]).unwrap();
        assert_eq!(ruby.image_url.as_ref(), "ruby.png");
    }

    #[test]
    fn test_load_into_rejects_invalid_fixture() {
        let fixtures = Fixtures::from_json(r#"{"one": {"title": "MyString"}}"#).unwrap();
        let engine = ValidationEngine::for_products().unwrap();
        let mut catalog = InMemoryCatalog::new();

        let err = fixtures.load_into(&mut catalog, &engine).unwrap_err();
        assert!(err.validation_errors().is_some());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, JSON).unwrap();
        assert_eq!(Fixtures::load(&path).unwrap(), Fixtures::from_json(JSON).unwrap());
    }
}

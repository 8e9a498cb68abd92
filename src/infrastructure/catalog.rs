//! In-memory product catalog
//!
//! Holds only `ValidProduct`s: every write goes through the validation engine
//! first and is refused with `Error::RecordInvalid` when any rule fails. The
//! catalog is also the uniqueness collaborator for the engine.

use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::domain::{
    Field, ImageUrl, PriceValue, Product, ProductDescription, ProductId, ProductPrice,
    ProductTitle, ValidProduct,
};
use crate::infrastructure::log_messages::catalog as log;
use crate::validation::{Excluding, TitleLookup, ValidationEngine};
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: BTreeMap<ProductId, ValidProduct>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a new product under a fresh id
    pub fn create(&mut self, product: &Product, engine: &ValidationEngine) -> Result<ValidProduct> {
        let errors = engine.validate(product, &*self);
        if !errors.is_empty() {
            warn!(violations = errors.len(), "{}", log::PRODUCT_REJECTED);
            return Err(Error::RecordInvalid(errors));
        }

        let stored = into_valid(ProductId::generate(), product)?;
        info!(id = %stored.id, title = %stored.title, "{}", log::PRODUCT_CREATED);
        self.products.insert(stored.id, stored.clone());
        Ok(stored)
    }

    /// Validate and replace the product stored under `id`
    ///
    /// The product's current title does not count against its own uniqueness.
    pub fn update(
        &mut self,
        id: ProductId,
        product: &Product,
        engine: &ValidationEngine,
    ) -> Result<ValidProduct> {
        let current = self.products.get(&id).ok_or_else(|| Error::not_found(id))?;
        let errors = engine.validate(
            product,
            &Excluding::new(&*self, Some(current.title.as_ref())),
        );
        if !errors.is_empty() {
            warn!(id = %id, violations = errors.len(), "{}", log::PRODUCT_REJECTED);
            return Err(Error::RecordInvalid(errors));
        }

        let stored = into_valid(id, product)?;
        info!(id = %id, title = %stored.title, "{}", log::PRODUCT_UPDATED);
        self.products.insert(id, stored.clone());
        Ok(stored)
    }

    pub fn destroy(&mut self, id: ProductId) -> Result<ValidProduct> {
        let removed = self.products.remove(&id).ok_or_else(|| Error::not_found(id))?;
        info!(id = %id, "{}", log::PRODUCT_DESTROYED);
        Ok(removed)
    }

    pub fn find(&self, id: ProductId) -> Option<&ValidProduct> {
        self.products.get(&id)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&ValidProduct> {
        self.products
            .values()
            .find(|product| product.title.as_ref() == title)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in id (creation) order
    pub fn iter(&self) -> impl Iterator<Item = &ValidProduct> {
        self.products.values()
    }
}

impl TitleLookup for InMemoryCatalog {
    fn exists(&self, title: &str) -> bool {
        self.find_by_title(title).is_some()
    }
}

fn into_valid(id: ProductId, product: &Product) -> Result<ValidProduct> {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    let amount = product
        .price
        .as_ref()
        .and_then(PriceValue::as_decimal)
        .ok_or_else(|| Error::invalid_input(Field::Price))?;

    Ok(ValidProduct {
        id,
        title: ProductTitle::try_new(text(&product.title))
            .map_err(|_| Error::invalid_input(Field::Title))?,
        description: ProductDescription::try_new(text(&product.description))
            .map_err(|_| Error::invalid_input(Field::Description))?,
        price: ProductPrice::try_new(amount).map_err(|_| Error::invalid_input(Field::Price))?,
        image_url: ImageUrl::try_new(text(&product.image_url))
            .map_err(|_| Error::invalid_input(Field::ImageUrl))?,
    })
}

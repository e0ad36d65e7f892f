//! The canonical, ordered product collection.
//!
//! Records keep insertion order for display, and an id index backs every lookup so
//! that replacing a record never depends on its (non-unique) name.

use std::collections::HashMap;

use super::{Product, ProductId};

#[derive(Debug, Clone, Default)]
pub struct ProductCollection {
    items: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl ProductCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from seed records.
    ///
    /// # Errors
    /// Returns the first identifier that appears twice.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Result<Self, ProductId> {
        let mut collection = Self::new();
        for product in products {
            collection.insert(product)?;
        }
        Ok(collection)
    }

    /// Appends a product, keeping identifiers unique.
    ///
    /// # Errors
    /// Returns the id back if a product with that id is already present.
    pub fn insert(&mut self, product: Product) -> Result<(), ProductId> {
        if self.index.contains_key(&product.id) {
            return Err(product.id);
        }
        self.index.insert(product.id, self.items.len());
        self.items.push(product);
        Ok(())
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.position(id).map(|pos| &self.items[pos])
    }

    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    /// Replaces the record sharing `updated.id`, returning the previous one.
    pub fn replace(&mut self, updated: Product) -> Option<Product> {
        let pos = self.position(updated.id)?;
        Some(std::mem::replace(&mut self.items[pos], updated))
    }

    /// Removes a record, preserving the relative order of the rest.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let pos = self.index.remove(&id)?;
        let removed = self.items.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

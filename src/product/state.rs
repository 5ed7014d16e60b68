//! Product State Management
//!
//! This module owns the in-memory product collection and the application
//! state handed to the router.

use super::{
    helpers::{generate_product_id, matches_filter, seed_products, DEFAULT_LIMIT},
    models::{Product, ProductFilter, ProductInput, ProductStats},
};
use crate::error::AppError;
use parking_lot::RwLock;
use std::{collections::BTreeMap, sync::Arc};

// =============================================================================
// Product Store
// =============================================================================

/// Ordered collection of products, kept in insertion order.
///
/// Each operation takes the lock once, so every call is atomic on its own.
/// Nothing is coordinated across calls.
pub struct ProductStore {
    products: RwLock<Vec<Product>>,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ProductStore {
    /// Creates a store holding exactly `products`
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Creates a store holding the three seed records
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }

    /// Returns every product matching `filter`, in insertion order
    pub fn list(&self, filter: &ProductFilter) -> Vec<Product> {
        self.products
            .read()
            .iter()
            .filter(|p| matches_filter(p, filter))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<Product, AppError> {
        self.products
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(AppError::product_not_found)
    }

    /// Appends a new product under a freshly generated id
    pub fn create(&self, input: ProductInput) -> Product {
        let product = input.into_product(generate_product_id());
        self.products.write().push(product.clone());
        tracing::info!(id = %product.id, "product created");
        product
    }

    /// Overwrites the fields of an existing product, keeping its id
    pub fn update(&self, id: &str, input: ProductInput) -> Result<Product, AppError> {
        let mut products = self.products.write();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(AppError::product_not_found)?;

        input.merge_into(product);
        tracing::info!(id, "product updated");
        Ok(product.clone())
    }

    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut products = self.products.write();
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(AppError::product_not_found)?;

        products.remove(index);
        tracing::info!(id, "product deleted");
        Ok(())
    }

    /// Counts products per category in a single pass
    pub fn stats(&self) -> ProductStats {
        let products = self.products.read();
        let mut count_by_category = BTreeMap::new();
        for product in products.iter() {
            *count_by_category
                .entry(product.category.clone())
                .or_insert(0) += 1;
        }

        ProductStats {
            total_products: products.len(),
            count_by_category,
        }
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the product store and listing defaults
pub struct AppState {
    pub products: ProductStore,

    /// Page size used when a listing request gives no `limit`
    pub default_limit: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state over the seed records with the built-in page size
    pub fn new() -> Self {
        Self::with_store(ProductStore::seeded(), DEFAULT_LIMIT)
    }

    pub fn with_store(products: ProductStore, default_limit: usize) -> Self {
        tracing::debug!(count = products.len(), default_limit, "product state ready");
        Self {
            products,
            default_limit: default_limit.max(1),
        }
    }
}

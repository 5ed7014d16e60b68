//! Product Domain Models
//!
//! This module contains all data structures related to the product
//! catalog: the stored record, validated input, query parameters and
//! response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;

// =============================================================================
// Product Domain Models
// =============================================================================

/// A product record as held by the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the store on create
    pub id: String,

    pub name: String,

    pub description: String,

    /// Kept as a JSON number so `1200` is echoed back as `1200`, not `1200.0`
    pub price: Number,

    pub category: String,

    pub in_stock: bool,
}

/// Validated body of a create or update request
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

impl ProductInput {
    /// Builds a full record from this input under the given id
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
        }
    }

    /// Overwrites every field of `product` except its id
    pub fn merge_into(self, product: &mut Product) {
        product.name = self.name;
        product.description = self.description;
        product.price = self.price;
        product.category = self.category;
        product.in_stock = self.in_stock;
    }
}

/// Optional constraints applied to a listing before pagination
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Exact, case-sensitive category match
    pub category: Option<String>,

    /// Case-insensitive substring of the product name
    pub search: Option<String>,
}

/// Raw query string of `GET /products`
///
/// `page` and `limit` stay as strings so that bad values can be reported
/// through the shared error format instead of the extractor's plain text.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Response for `GET /products`
#[derive(Debug, Serialize)]
pub struct ListResponse {
    /// Number of matches before pagination
    pub total: usize,

    pub page: usize,

    pub products: Vec<Product>,
}

/// Response for `GET /products/stats/all`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: usize,
    pub count_by_category: BTreeMap<String, usize>,
}

/// Response for `DELETE /products/:id`
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

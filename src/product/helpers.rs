//! Product Business Logic Helpers
//!
//! Pure functions used by the store and the handlers: validation, filtering,
//! pagination and identifier generation.

use super::models::{Product, ProductFilter, ProductInput};
use crate::error::AppError;
use serde_json::{Number, Value};
use uuid::Uuid;

/// Page used when the query does not name one
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when neither the query nor the configuration names one
pub const DEFAULT_LIMIT: usize = 2;

/// Returns a fresh random identifier for a new product.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

/// Checks a raw request body and turns it into a [`ProductInput`].
///
/// # Rules
///
/// * `name`, `description` and `category` must be non-empty strings.
/// * `price` must be a JSON number.
/// * `inStock` must be a JSON boolean.
///
/// Unknown fields, including `id`, are ignored. The same rules apply on
/// create and on update, so an update must resupply every field.
pub fn validate_product(body: &Value) -> Result<ProductInput, AppError> {
    let obj = body.as_object().ok_or_else(AppError::invalid_product)?;

    let text = |key: &str| -> Result<String, AppError> {
        match obj.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
            _ => Err(AppError::invalid_product()),
        }
    };

    let price: Number = match obj.get("price") {
        Some(Value::Number(n)) => n.clone(),
        _ => return Err(AppError::invalid_product()),
    };

    let in_stock = match obj.get("inStock") {
        Some(Value::Bool(b)) => *b,
        _ => return Err(AppError::invalid_product()),
    };

    Ok(ProductInput {
        name: text("name")?,
        description: text("description")?,
        price,
        category: text("category")?,
        in_stock,
    })
}

/// Returns true when `product` satisfies every constraint set in `filter`.
pub fn matches_filter(product: &Product, filter: &ProductFilter) -> bool {
    if let Some(category) = &filter.category {
        if product.category != *category {
            return false;
        }
    }

    if let Some(search) = &filter.search {
        if !product
            .name
            .to_lowercase()
            .contains(&search.to_lowercase())
        {
            return false;
        }
    }

    true
}

/// Returns the `page`-th window of `limit` items (pages start at 1).
///
/// Windows past the end are empty rather than an error.
pub fn paginate<T>(items: &[T], page: usize, limit: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(limit);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(limit).min(items.len());
    &items[start..end]
}

/// Parses a `page` or `limit` query value.
///
/// Absent values fall back to `default`; anything that is not a positive
/// integer is a validation failure.
pub fn parse_positive(raw: Option<&str>, default: usize) -> Result<usize, AppError> {
    match raw {
        None => Ok(default),
        Some(s) => match s.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(AppError::Validation(
                "Invalid pagination parameters".to_string(),
            )),
        },
    }
}

/// Treats an empty query value the same as a missing one.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// The records every new store starts with.
pub fn seed_products() -> Vec<Product> {
    let seed = |id: &str, name: &str, description: &str, price: u64, category: &str, in_stock: bool| {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price: Number::from(price),
            category: category.to_string(),
            in_stock,
        }
    };

    vec![
        seed("1", "Laptop", "High-performance laptop", 1200, "electronics", true),
        seed("2", "Phone", "128GB smartphone", 800, "electronics", true),
        seed("3", "Coffee Maker", "Makes great coffee", 50, "kitchen", false),
    ]
}

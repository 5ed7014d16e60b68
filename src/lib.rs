//! Product Catalog Library
//!
//! This library provides an in-memory product catalog served over a JSON
//! REST API: filtering, pagination, CRUD and category statistics.

// Domain modules
pub mod product;

// Infrastructure
pub mod config;
pub mod error;
pub mod logging;
pub mod router;

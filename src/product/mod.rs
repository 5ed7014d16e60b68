//! Product Domain Module
//!
//! This module contains all product catalog logic, including:
//! - Domain models (Product, inputs, responses)
//! - Business logic helpers (validation, filtering, pagination)
//! - The in-memory store and application state
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, ProductStore, SharedState};

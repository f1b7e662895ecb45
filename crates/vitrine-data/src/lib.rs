//! # vitrine-data: Bundled Fixtures for Vitrine
//!
//! The base collections ship with the application as static JSON, compiled
//! into the binary. This crate parses them into the vitrine-core domain
//! types and builds the bundled catalog.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fixture Pipeline                                 │
//! │                                                                         │
//! │  fixtures/users.json ──────┐                                            │
//! │  fixtures/categories.json ─┼── include_str! ──► serde_json ──► Vec<T>  │
//! │  fixtures/products.json ───┘                         │                  │
//! │                                                      ▼                  │
//! │                                          Catalog::build (vitrine-core) │
//! │                                                      │                  │
//! │                          DataError ◄── parse/integrity failure          │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │                                          bundled_catalog() -> Catalog  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsing happens on every call; callers keep the built Catalog for the
//! session rather than re-loading (the base data never changes).

use thiserror::Error;
use tracing::debug;

use vitrine_core::catalog::Catalog;
use vitrine_core::error::CoreError;
use vitrine_core::types::{Category, Product, User};

// =============================================================================
// Embedded Fixtures
// =============================================================================

const USERS_JSON: &str = include_str!("../fixtures/users.json");
const CATEGORIES_JSON: &str = include_str!("../fixtures/categories.json");
const PRODUCTS_JSON: &str = include_str!("../fixtures/products.json");

// =============================================================================
// Error Type
// =============================================================================

/// Failures at the fixture boundary.
#[derive(Debug, Error)]
pub enum DataError {
    /// A fixture file is not valid JSON for its collection type.
    #[error("Fixture parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The fixtures parsed but do not cross-reference cleanly.
    #[error(transparent)]
    Integrity(#[from] CoreError),
}

/// Convenience type alias for Results with DataError.
pub type DataResult<T> = Result<T, DataError>;

// =============================================================================
// Loaders
// =============================================================================

/// Parses the bundled user collection.
pub fn bundled_users() -> DataResult<Vec<User>> {
    let users: Vec<User> = serde_json::from_str(USERS_JSON)?;
    debug!(count = users.len(), "Parsed bundled users");
    Ok(users)
}

/// Parses the bundled category collection.
pub fn bundled_categories() -> DataResult<Vec<Category>> {
    let categories: Vec<Category> = serde_json::from_str(CATEGORIES_JSON)?;
    debug!(count = categories.len(), "Parsed bundled categories");
    Ok(categories)
}

/// Parses the bundled product collection.
pub fn bundled_products() -> DataResult<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(PRODUCTS_JSON)?;
    debug!(count = products.len(), "Parsed bundled products");
    Ok(products)
}

/// Parses all three bundled collections and joins them into a catalog.
///
/// The shipped fixtures are fully cross-referenced, so this only fails if
/// the fixture files themselves are edited into an inconsistent state; the
/// error then names the offending record.
pub fn bundled_catalog() -> DataResult<Catalog> {
    let users = bundled_users()?;
    let categories = bundled_categories()?;
    let products = bundled_products()?;

    let catalog = Catalog::build(&users, &categories, &products)?;
    debug!(rows = catalog.len(), "Built bundled catalog");
    Ok(catalog)
}

// =============================================================================
// Unit Tests
// =============================================================================

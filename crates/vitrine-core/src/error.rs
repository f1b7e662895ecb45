//! # Error Types
//!
//! Domain-specific error types for vitrine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vitrine-core errors (this file)                                       │
//! │  ├── CoreError        - Data-integrity failures during joining         │
//! │  └── ValidationError  - Base-collection integrity violations           │
//! │                                                                         │
//! │  vitrine-data errors (separate crate)                                  │
//! │  └── DataError        - Fixture parse failures                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DataError → preview/frontend      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending ids)
//! 3. Errors are enum variants, never String
//! 4. The join fails as a whole; no partially-built catalog escapes
//!
//! Only catalog construction can fail. Every operation after a successful
//! build (filter, sort, mutators, reset) is total and infallible.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Data-integrity failures raised while building the catalog.
///
/// The base collections are assumed fully cross-referenced. A reference that
/// does not resolve is fatal: there is no degraded mode that drops or
/// null-fills the affected record.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product references a category id that is not in the category
    /// collection.
    #[error("Product {product_id} references unknown category {category_id}")]
    UnknownCategory { product_id: i64, category_id: i64 },

    /// A category references an owner id that is not in the user collection.
    #[error("Category {category_id} references unknown owner {owner_id}")]
    UnknownOwner { category_id: i64, owner_id: i64 },

    /// Base-collection validation failed (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Base-collection integrity violations.
///
/// Detected before joining so that error messages can name the collection
/// and id instead of whatever lookup happens to miss first.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// An id appears more than once within one collection. Lookups by id
    /// would silently shadow all but one record, so this is refused.
    #[error("{entity} id {id} appears more than once")]
    DuplicateId { entity: &'static str, id: i64 },

    /// A display field is empty or whitespace-only.
    #[error("{entity} {id} has a blank {field}")]
    BlankField {
        entity: &'static str,
        id: i64,
        field: &'static str,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

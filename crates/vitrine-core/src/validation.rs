//! # Validation Module
//!
//! Base-collection integrity checks for Vitrine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (vitrine-data)                               │
//! │  ├── Shape and type checks (serde)                                     │
//! │  └── Rejects malformed fixture JSON                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (called from Catalog::build)                     │
//! │  ├── Unique ids within each collection                                 │
//! │  └── Non-blank display fields                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: The join itself (catalog)                                    │
//! │  └── Every foreign key resolves                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Duplicate ids deserve a note: a lookup by id over a collection with a
//! duplicated id silently shadows all but one record. The joiner refuses
//! such collections instead of picking a winner.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::{Category, Product, User};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the user collection.
///
/// ## Rules
/// - ids unique
/// - names non-blank
pub fn validate_users(users: &[User]) -> ValidationResult<()> {
    ensure_unique_ids("User", users.iter().map(|u| u.id))?;

    for user in users {
        ensure_non_blank("User", user.id, "name", &user.name)?;
    }

    Ok(())
}

/// Validates the category collection.
///
/// ## Rules
/// - ids unique
/// - titles non-blank (the category filter matches on title)
pub fn validate_categories(categories: &[Category]) -> ValidationResult<()> {
    ensure_unique_ids("Category", categories.iter().map(|c| c.id))?;

    for category in categories {
        ensure_non_blank("Category", category.id, "title", &category.title)?;
    }

    Ok(())
}

/// Validates the product collection.
///
/// ## Rules
/// - ids unique
/// - names non-blank (the query predicate matches on name)
pub fn validate_products(products: &[Product]) -> ValidationResult<()> {
    ensure_unique_ids("Product", products.iter().map(|p| p.id))?;

    for product in products {
        ensure_non_blank("Product", product.id, "name", &product.name)?;
    }

    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn ensure_unique_ids(
    entity: &'static str,
    ids: impl Iterator<Item = i64>,
) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId { entity, id });
        }
    }
    Ok(())
}

fn ensure_non_blank(
    entity: &'static str,
    id: i64,
    field: &'static str,
    value: &str,
) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField { entity, id, field });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sex;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            sex: Sex::Male,
        }
    }

    #[test]
    fn test_validate_users_accepts_clean_collection() {
        let users = vec![user(1, "Max"), user(2, "Anna")];
        assert!(validate_users(&users).is_ok());
    }

    #[test]
    fn test_validate_users_rejects_duplicate_id() {
        let users = vec![user(1, "Max"), user(1, "Anna")];
        let err = validate_users(&users).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::DuplicateId { entity: "User", id: 1 }
        ));
    }

    #[test]
    fn test_validate_users_rejects_blank_name() {
        let users = vec![user(1, "   ")];
        let err = validate_users(&users).unwrap_err();
        assert!(matches!(err, ValidationError::BlankField { field: "name", .. }));
    }

    #[test]
    fn test_validate_categories_rejects_blank_title() {
        let categories = vec![Category {
            id: 1,
            title: String::new(),
            icon: "🍎".to_string(),
            owner_id: 1,
        }];
        assert!(validate_categories(&categories).is_err());
    }

    #[test]
    fn test_validate_products_rejects_duplicate_id() {
        let products = vec![
            Product {
                id: 3,
                name: "Milk".to_string(),
                category_id: 1,
            },
            Product {
                id: 3,
                name: "Bread".to_string(),
                category_id: 1,
            },
        ];
        assert!(validate_products(&products).is_err());
    }
}

//! # Catalog (Dataset Joiner)
//!
//! Joins the three base collections into the enriched product collection.
//!
//! ## Join Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog::build                                   │
//! │                                                                         │
//! │  users ──┐                                                              │
//! │          ├──► validate (unique ids, non-blank fields)                  │
//! │  categories ─┤                                                          │
//! │          ├──► index by id (HashMap)                                    │
//! │  products ───┘                                                          │
//! │          │                                                              │
//! │          ▼  for each product:                                           │
//! │   category = categories[product.category_id]   ── miss? ─► CoreError   │
//! │   user     = users[category.owner_id]          ── miss? ─► CoreError   │
//! │          │                                                              │
//! │          ▼                                                              │
//! │   EnrichedProduct { id, name, category, user }                         │
//! │                                                                         │
//! │  Runs ONCE per session. The result is cached inside the Catalog and    │
//! │  every later sort/filter pass works on copies of it.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The category lookup happens exactly once per product; the owning user is
//! derived from the already-resolved category rather than re-resolving the
//! category a second time.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::{Category, EnrichedProduct, Product, User};
use crate::validation;

/// The immutable, joined product collection for one browsing session.
///
/// Built once from the base collections; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    rows: Vec<EnrichedProduct>,
}

impl Catalog {
    /// Joins the base collections into an enriched product collection.
    ///
    /// ## Failure
    /// Fails on the first integrity violation: a duplicated id, a blank
    /// display field, or a `category_id`/`owner_id` with no match. The
    /// error names the offending ids. Nothing is dropped or null-filled;
    /// either every product joins or the build fails.
    pub fn build(
        users: &[User],
        categories: &[Category],
        products: &[Product],
    ) -> CoreResult<Self> {
        validation::validate_users(users)?;
        validation::validate_categories(categories)?;
        validation::validate_products(products)?;

        let users_by_id: HashMap<i64, &User> = users.iter().map(|u| (u.id, u)).collect();
        let categories_by_id: HashMap<i64, &Category> =
            categories.iter().map(|c| (c.id, c)).collect();

        let rows = products
            .iter()
            .map(|product| {
                let category = categories_by_id
                    .get(&product.category_id)
                    .copied()
                    .ok_or(CoreError::UnknownCategory {
                        product_id: product.id,
                        category_id: product.category_id,
                    })?;

                let user = users_by_id
                    .get(&category.owner_id)
                    .copied()
                    .ok_or(CoreError::UnknownOwner {
                        category_id: category.id,
                        owner_id: category.owner_id,
                    })?;

                Ok(EnrichedProduct {
                    id: product.id,
                    name: product.name.clone(),
                    category: category.clone(),
                    user: user.clone(),
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Catalog { rows })
    }

    /// The cached enriched rows, in base-collection order.
    #[inline]
    pub fn rows(&self) -> &[EnrichedProduct] {
        &self.rows
    }

    /// Number of enriched rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks whether the catalog holds no products at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sex;

    fn test_user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            sex: Sex::Male,
        }
    }

    fn test_category(id: i64, title: &str, owner_id: i64) -> Category {
        Category {
            id,
            title: title.to_string(),
            icon: "🛒".to_string(),
            owner_id,
        }
    }

    fn test_product(id: i64, name: &str, category_id: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            category_id,
        }
    }

    #[test]
    fn test_build_resolves_category_and_owner() {
        let users = vec![test_user(1, "Max"), test_user(2, "Anna")];
        let categories = vec![
            test_category(1, "Fruits", 2),
            test_category(2, "Drinks", 1),
        ];
        let products = vec![
            test_product(1, "Apple", 1),
            test_product(2, "Cola", 2),
            test_product(3, "Banana", 1),
        ];

        let catalog = Catalog::build(&users, &categories, &products).unwrap();

        assert_eq!(catalog.len(), 3);
        for (row, product) in catalog.rows().iter().zip(&products) {
            assert_eq!(row.category.id, product.category_id);
            assert_eq!(row.user.id, row.category.owner_id);
        }
        assert_eq!(catalog.rows()[0].owner_name(), "Anna");
        assert_eq!(catalog.rows()[1].owner_name(), "Max");
    }

    #[test]
    fn test_build_fails_on_dangling_category() {
        let users = vec![test_user(1, "Max")];
        let categories = vec![test_category(1, "Fruits", 1)];
        let products = vec![test_product(1, "Apple", 99)];

        let err = Catalog::build(&users, &categories, &products).unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownCategory {
                product_id: 1,
                category_id: 99
            }
        ));
    }

    #[test]
    fn test_build_fails_on_dangling_owner() {
        let users = vec![test_user(1, "Max")];
        let categories = vec![test_category(1, "Fruits", 42)];
        let products = vec![test_product(1, "Apple", 1)];

        let err = Catalog::build(&users, &categories, &products).unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownOwner {
                category_id: 1,
                owner_id: 42
            }
        ));
    }

    #[test]
    fn test_build_fails_on_duplicate_product_id() {
        let users = vec![test_user(1, "Max")];
        let categories = vec![test_category(1, "Fruits", 1)];
        let products = vec![test_product(1, "Apple", 1), test_product(1, "Banana", 1)];

        let err = Catalog::build(&users, &categories, &products).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_empty_product_collection_builds_empty_catalog() {
        let users = vec![test_user(1, "Max")];
        let categories = vec![test_category(1, "Fruits", 1)];

        let catalog = Catalog::build(&users, &categories, &[]).unwrap();
        assert!(catalog.is_empty());
    }
}

//! # Domain Types
//!
//! Core domain types used throughout Vitrine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │    Category     │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  title          │   │  name           │       │
//! │  │  sex (m/f)      │◄──│  owner_id (FK)  │◄──│  category_id    │       │
//! │  └─────────────────┘   │  icon           │   │  (FK)           │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌───────────────────────────────────────────────────────────────┐     │
//! │  │  EnrichedProduct (derived)                                    │     │
//! │  │  ───────────────────────────────────────────────────────────  │     │
//! │  │  id, name + category: Category + user: User (both embedded)  │     │
//! │  └───────────────────────────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Embedding
//! `EnrichedProduct` embeds its category and owning user **by value** rather
//! than holding the foreign keys. The base collections never change after
//! load, so the embedded copies can never go stale, and the sort/filter
//! pipeline needs no lookups at query time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// User
// =============================================================================

/// Sex of a user, serialized exactly as the source data spells it ("m"/"f").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

/// A user who owns one or more categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    /// Unique identifier.
    pub id: i64,

    /// Display name, also the value the owner filter matches against.
    pub name: String,

    /// Sex, used by the frontend for name styling only.
    pub sex: Sex,
}

// =============================================================================
// Category
// =============================================================================

/// A product category, owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    /// Unique identifier.
    pub id: i64,

    /// Display title, also the value the category filter matches against.
    pub title: String,

    /// Emoji icon shown next to the title.
    pub icon: String,

    /// Owning user (references `User::id`).
    pub owner_id: i64,
}

// =============================================================================
// Product
// =============================================================================

/// A product as it appears in the base collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: i64,

    /// Display name, also the target of the substring query.
    pub name: String,

    /// Category this product belongs to (references `Category::id`).
    pub category_id: i64,
}

// =============================================================================
// Enriched Product
// =============================================================================

/// A product joined with its resolved category and owning user.
///
/// ## Invariants
/// - `category.id` equals the `category_id` of the source product
/// - `user.id` equals the `owner_id` of the embedded category
///
/// Both hold by construction: the only way to obtain an `EnrichedProduct`
/// is through `Catalog::build`, which fails on any dangling reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EnrichedProduct {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub user: User,
}

impl EnrichedProduct {
    /// Title of the embedded category.
    #[inline]
    pub fn category_title(&self) -> &str {
        &self.category.title
    }

    /// Name of the owning user.
    #[inline]
    pub fn owner_name(&self) -> &str {
        &self.user.name
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_serializes_as_single_letter() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"m\"");
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"f\"");
    }

    #[test]
    fn test_product_uses_camel_case_keys() {
        let product: Product =
            serde_json::from_str(r#"{ "id": 1, "name": "Milk", "categoryId": 2 }"#).unwrap();
        assert_eq!(product.category_id, 2);
    }

    #[test]
    fn test_category_uses_camel_case_keys() {
        let category: Category = serde_json::from_str(
            r#"{ "id": 5, "title": "Drinks", "icon": "🍺", "ownerId": 2 }"#,
        )
        .unwrap();
        assert_eq!(category.owner_id, 2);
        assert_eq!(category.icon, "🍺");
    }
}

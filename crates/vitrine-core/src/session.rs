//! # Browse Session
//!
//! The surface the rendering collaborator talks to.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    BrowseSession Operations                             │
//! │                                                                         │
//! │  Frontend Action          Session Call              State Change        │
//! │  ───────────────          ────────────              ────────────        │
//! │                                                                         │
//! │  Pick owner tab ─────────► set_selected_user() ───► filter.user        │
//! │                                                                         │
//! │  Click category chip ────► toggle_category() ─────► filter.categories  │
//! │                                                                         │
//! │  Click "All" chip ───────► clear_categories() ────► filter.categories  │
//! │                                                                         │
//! │  Type in search box ─────► set_query() ───────────► filter.query       │
//! │                                                                         │
//! │  Click column header ────► click_sort_header() ───► sort (FSM step)    │
//! │                                                                         │
//! │  Click reset ────────────► reset_all() ───────────► both to initial    │
//! │                                                                         │
//! │  Render table ───────────► visible_rows() ────────► (read only)        │
//! │                                                                         │
//! │  The catalog itself never changes; every query re-derives the visible  │
//! │  sequence from the cached enriched rows.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Re-deriving on every call is deliberate: the pipeline over a
//! fixture-sized catalog is cheap, and there is no incremental bookkeeping
//! to get out of sync.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::filter::{filter_rows, FilterState};
use crate::sort::{sort_rows, SortCriterion, SortState};
use crate::types::{EnrichedProduct, Sex};

// =============================================================================
// Pure Pipeline
// =============================================================================

/// Derives the visible row sequence from a catalog and the two state values.
///
/// Sort runs over the FULL enriched collection, then the filter reduces it.
/// Filtering never reorders, so the visible sequence keeps the sort order.
pub fn visible_rows(
    catalog: &Catalog,
    filter: &FilterState,
    sort: &SortState,
) -> Vec<EnrichedProduct> {
    let mut rows = catalog.rows().to_vec();
    sort_rows(&mut rows, sort);
    filter_rows(rows, filter)
}

// =============================================================================
// Row DTO
// =============================================================================

/// Flattened table row for the rendering collaborator.
///
/// ## Why DTO?
/// - Decouples the internal domain model from the frontend contract
/// - Flattens the embedded category/user down to the displayed columns
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub category_title: String,
    pub category_icon: String,
    pub owner_name: String,
    pub owner_sex: Sex,
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(row: &EnrichedProduct) -> Self {
        ProductRow {
            id: row.id,
            name: row.name.clone(),
            category_title: row.category.title.clone(),
            category_icon: row.category.icon.clone(),
            owner_name: row.user.name.clone(),
            owner_sex: row.user.sex,
        }
    }
}

// =============================================================================
// Browse Session
// =============================================================================

/// One user's browsing session over a built catalog.
///
/// Owns the catalog plus the filter and sort state. The mutators below are
/// the only way the states change; each replaces the old value with the one
/// returned by the corresponding pure transition.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    catalog: Catalog,
    filter: FilterState,
    sort: SortState,
}

impl BrowseSession {
    /// Starts a session with everything visible and no sort active.
    pub fn new(catalog: Catalog) -> Self {
        BrowseSession {
            catalog,
            filter: FilterState::new(),
            sort: SortState::inactive(),
        }
    }

    // -------------------------------------------------------------------------
    // Query surface
    // -------------------------------------------------------------------------

    /// The visible row sequence under the current states.
    pub fn visible_rows(&self) -> Vec<EnrichedProduct> {
        visible_rows(&self.catalog, &self.filter, &self.sort)
    }

    /// Visible rows projected through the [`ProductRow`] DTO.
    pub fn rows_for_view(&self) -> Vec<ProductRow> {
        self.visible_rows().iter().map(ProductRow::from).collect()
    }

    /// The underlying catalog (never mutated by the session).
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current filter state.
    #[inline]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current sort state.
    #[inline]
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Selects an owner by name ([`crate::ALL_USERS`] lifts the restriction).
    pub fn set_selected_user(&mut self, name: &str) {
        self.filter = std::mem::take(&mut self.filter).with_selected_user(name);
    }

    /// Toggles one category title in the multi-select set.
    pub fn toggle_category(&mut self, title: &str) {
        self.filter = std::mem::take(&mut self.filter).with_category_toggled(title);
    }

    /// Deselects every category.
    pub fn clear_categories(&mut self) {
        self.filter = std::mem::take(&mut self.filter).with_categories_cleared();
    }

    /// Replaces the name query.
    pub fn set_query(&mut self, text: &str) {
        self.filter = std::mem::take(&mut self.filter).with_query(text);
    }

    /// Advances the sort-cycle state machine for one header click.
    pub fn click_sort_header(&mut self, criterion: SortCriterion) {
        self.sort = self.sort.click(criterion);
    }

    /// Resets filter and sort to their initial values.
    pub fn reset_all(&mut self) {
        self.filter = FilterState::new();
        self.sort = SortState::inactive();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

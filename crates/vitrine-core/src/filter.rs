//! # Filter Engine
//!
//! Reduces the (already sorted) enriched rows to the visible set.
//!
//! ## Predicate Conjunction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Row Visibility                                      │
//! │                                                                         │
//! │   row ──► owner predicate ──► category predicate ──► query predicate   │
//! │              │                     │                      │             │
//! │              ▼                     ▼                      ▼             │
//! │   "All" or owner name      empty set or title      trimmed, case-      │
//! │   matches exactly          is a member             folded substring    │
//! │                                                                         │
//! │   visible ⇔ all three hold. Filtering never reorders, so the sort      │
//! │   order established upstream survives into the visible sequence.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation Style
//! FilterState is a plain value. Every mutator consumes the old state and
//! returns the next one, which keeps the pipeline testable without any
//! rendering framework attached.

use std::collections::BTreeSet;

use crate::types::EnrichedProduct;
use crate::ALL_USERS;

// =============================================================================
// Filter State
// =============================================================================

/// The filter inputs of one browsing session.
///
/// ## Initial Values
/// - owner: the [`ALL_USERS`] sentinel (no restriction)
/// - categories: empty set (no restriction)
/// - query: empty string (matches everything)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Selected owner name, single-select. [`ALL_USERS`] disables the
    /// owner predicate.
    selected_user: String,

    /// Selected category titles, multi-select. Empty disables the
    /// category predicate.
    selected_categories: BTreeSet<String>,

    /// Name query, kept exactly as typed. Trimming and case-folding happen
    /// at match time.
    query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            selected_user: ALL_USERS.to_string(),
            selected_categories: BTreeSet::new(),
            query: String::new(),
        }
    }
}

impl FilterState {
    /// The initial state: everything visible.
    pub fn new() -> Self {
        FilterState::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Currently selected owner name ([`ALL_USERS`] when unrestricted).
    #[inline]
    pub fn selected_user(&self) -> &str {
        &self.selected_user
    }

    /// Currently selected category titles.
    #[inline]
    pub fn selected_categories(&self) -> &BTreeSet<String> {
        &self.selected_categories
    }

    /// Current query text, untrimmed.
    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    // -------------------------------------------------------------------------
    // Mutators (consume self, return the next state)
    // -------------------------------------------------------------------------

    /// Selects an owner by name. Passing [`ALL_USERS`] lifts the restriction.
    #[must_use]
    pub fn with_selected_user(mut self, name: impl Into<String>) -> Self {
        self.selected_user = name.into();
        self
    }

    /// Toggles one category title: inserts it if absent, removes it if
    /// present.
    #[must_use]
    pub fn with_category_toggled(mut self, title: &str) -> Self {
        if !self.selected_categories.remove(title) {
            self.selected_categories.insert(title.to_string());
        }
        self
    }

    /// Deselects every category.
    #[must_use]
    pub fn with_categories_cleared(mut self) -> Self {
        self.selected_categories.clear();
        self
    }

    /// Replaces the query text.
    #[must_use]
    pub fn with_query(mut self, text: impl Into<String>) -> Self {
        self.query = text.into();
        self
    }

    // -------------------------------------------------------------------------
    // Predicates
    // -------------------------------------------------------------------------

    /// Owner predicate: no restriction, or exact owner-name match.
    pub fn matches_owner(&self, row: &EnrichedProduct) -> bool {
        self.selected_user == ALL_USERS || row.owner_name() == self.selected_user
    }

    /// Category predicate: no restriction, or title membership.
    pub fn matches_category(&self, row: &EnrichedProduct) -> bool {
        self.selected_categories.is_empty()
            || self.selected_categories.contains(row.category_title())
    }

    /// Query predicate: the row name, case-folded, contains the query
    /// trimmed of surrounding whitespace and case-folded. An empty or
    /// whitespace-only query matches every row.
    pub fn matches_query(&self, row: &EnrichedProduct) -> bool {
        let needle = self.query.trim().to_lowercase();
        row.name.to_lowercase().contains(&needle)
    }

    /// Conjunction of the three predicates.
    pub fn matches(&self, row: &EnrichedProduct) -> bool {
        self.matches_owner(row) && self.matches_category(row) && self.matches_query(row)
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Keeps exactly the rows matching `state`, preserving their order.
pub fn filter_rows(rows: Vec<EnrichedProduct>, state: &FilterState) -> Vec<EnrichedProduct> {
    rows.into_iter().filter(|row| state.matches(row)).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Sex, User};

    fn row(id: i64, name: &str, category_title: &str, owner_name: &str) -> EnrichedProduct {
        EnrichedProduct {
            id,
            name: name.to_string(),
            category: Category {
                id,
                title: category_title.to_string(),
                icon: "🛒".to_string(),
                owner_id: id,
            },
            user: User {
                id,
                name: owner_name.to_string(),
                sex: Sex::Male,
            },
        }
    }

    fn sample_rows() -> Vec<EnrichedProduct> {
        vec![
            row(1, "Milk", "Grocery", "Anna"),
            row(2, "Apple", "Fruits", "Max"),
            row(3, "Cola", "Drinks", "Roma"),
            row(4, "Pineapple", "Fruits", "Max"),
        ]
    }

    fn visible_names(state: &FilterState) -> Vec<String> {
        filter_rows(sample_rows(), state)
            .into_iter()
            .map(|r| r.name)
            .collect()
    }

    #[test]
    fn test_default_state_keeps_everything() {
        let state = FilterState::new();
        assert_eq!(visible_names(&state).len(), sample_rows().len());
    }

    #[test]
    fn test_owner_filter_is_single_select() {
        let state = FilterState::new().with_selected_user("Max");
        assert_eq!(visible_names(&state), vec!["Apple", "Pineapple"]);

        let state = state.with_selected_user(crate::ALL_USERS);
        assert_eq!(visible_names(&state).len(), 4);
    }

    #[test]
    fn test_category_toggle_inserts_then_removes() {
        let state = FilterState::new().with_category_toggled("Fruits");
        assert_eq!(visible_names(&state), vec!["Apple", "Pineapple"]);

        let state = state.with_category_toggled("Drinks");
        assert_eq!(visible_names(&state), vec!["Apple", "Cola", "Pineapple"]);

        // Toggling Fruits again removes it
        let state = state.with_category_toggled("Fruits");
        assert_eq!(visible_names(&state), vec!["Cola"]);
    }

    #[test]
    fn test_clearing_categories_lifts_restriction() {
        let state = FilterState::new()
            .with_category_toggled("Fruits")
            .with_categories_cleared();
        assert_eq!(visible_names(&state).len(), 4);
    }

    #[test]
    fn test_query_is_substring_on_name() {
        let state = FilterState::new().with_query("apple");
        assert_eq!(visible_names(&state), vec!["Apple", "Pineapple"]);
    }

    #[test]
    fn test_query_trims_and_case_folds() {
        let shouting = FilterState::new().with_query("APPLE");
        let padded = FilterState::new().with_query("  apple  ");
        assert_eq!(visible_names(&shouting), visible_names(&padded));

        // Whitespace-only query matches everything
        let blank = FilterState::new().with_query("   ");
        assert_eq!(visible_names(&blank).len(), 4);
    }

    #[test]
    fn test_conjunction_of_all_three_predicates() {
        let state = FilterState::new()
            .with_selected_user("Max")
            .with_category_toggled("Fruits")
            .with_query("pine");

        let rows = sample_rows();
        let visible = filter_rows(rows.clone(), &state);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Pineapple");

        for row in &visible {
            assert!(state.matches_owner(row));
            assert!(state.matches_category(row));
            assert!(state.matches_query(row));
        }
        for row in rows.iter().filter(|r| !state.matches(r)) {
            assert!(
                !state.matches_owner(row)
                    || !state.matches_category(row)
                    || !state.matches_query(row)
            );
        }
    }

    #[test]
    fn test_unknown_category_yields_empty_visible_set() {
        let state = FilterState::new().with_category_toggled("Vegetables");
        assert!(visible_names(&state).is_empty());
    }

    #[test]
    fn test_filtering_preserves_row_order() {
        let state = FilterState::new().with_selected_user("Max");
        let mut rows = sample_rows();
        rows.reverse();

        let visible = filter_rows(rows, &state);
        assert_eq!(
            visible.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![4, 2]
        );
    }
}

//! # Sort Engine
//!
//! Orders enriched products by a selected criterion and direction, and owns
//! the tri-state sort-cycle state machine driven by column-header clicks.
//!
//! ## Sort Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │             Header Click State Machine (per criterion C)               │
//! │                                                                         │
//! │                      click C                                            │
//! │   ┌──────────┐  ─────────────────►  ┌───────────┐                      │
//! │   │ inactive │                      │ Ascending │                      │
//! │   └──────────┘  ◄─────────────────  └─────┬─────┘                      │
//! │        ▲              click C             │ click C                    │
//! │        │                                  ▼                            │
//! │        │                            ┌────────────┐                     │
//! │        └─────────────────────────── │ Descending │                     │
//! │                                     └────────────┘                     │
//! │                                                                         │
//! │   Clicking a DIFFERENT header from any state jumps straight to         │
//! │   (that header, Ascending).                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Descending Is a Reversal
//! Descending output is produced by sorting ascending and reversing the
//! result, never by negating the comparator. With a stable sort this keeps
//! the tie order of ascending and descending passes exact mirror images of
//! each other. Tie order itself is not part of the contract.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::EnrichedProduct;

// =============================================================================
// Criterion & Direction
// =============================================================================

/// The column a sort operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortCriterion {
    /// Numeric order on product id.
    Id,
    /// Case-folded order on product name.
    Name,
    /// Case-folded order on category title.
    Category,
    /// Case-folded order on owner name.
    User,
}

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

// =============================================================================
// Sort State
// =============================================================================

/// An active (criterion, direction) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSort {
    pub criterion: SortCriterion,
    pub direction: SortDirection,
}

/// The sort state of one browsing session.
///
/// ## Invariants
/// - A direction exists if and only if a criterion is active. Both live
///   inside one `Option`, so the states "direction without criterion" and
///   "criterion without direction" cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    active: Option<ActiveSort>,
}

impl SortState {
    /// The initial state: no criterion selected, rows keep their base order.
    #[inline]
    pub fn inactive() -> Self {
        SortState::default()
    }

    /// The currently active sort, if any.
    #[inline]
    pub fn active(&self) -> Option<ActiveSort> {
        self.active
    }

    /// Direction currently applied to `criterion`, for header arrows.
    pub fn direction_for(&self, criterion: SortCriterion) -> Option<SortDirection> {
        self.active
            .filter(|a| a.criterion == criterion)
            .map(|a| a.direction)
    }

    /// Advances the state machine for a click on the header of `criterion`.
    ///
    /// ## Behavior
    /// - Different (or no) active criterion: jump to `(criterion, Ascending)`
    /// - Same criterion, Ascending: advance to Descending
    /// - Same criterion, Descending: wrap around to inactive; the criterion
    ///   is cleared together with the direction
    ///
    /// A fresh column therefore cycles Ascending, Descending, cleared, and
    /// the fourth click starts over as if newly selected.
    #[must_use]
    pub fn click(self, criterion: SortCriterion) -> Self {
        let active = match self.active {
            Some(active) if active.criterion == criterion => match active.direction {
                SortDirection::Ascending => Some(ActiveSort {
                    criterion,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(ActiveSort {
                criterion,
                direction: SortDirection::Ascending,
            }),
        };

        SortState { active }
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// Reorders `rows` in place according to `state`.
///
/// An inactive state is an identity pass. Descending is ascending followed
/// by an explicit reversal (see module docs).
pub fn sort_rows(rows: &mut [EnrichedProduct], state: &SortState) {
    let Some(active) = state.active() else {
        return;
    };

    rows.sort_by(|a, b| compare_by(a, b, active.criterion));

    if active.direction == SortDirection::Descending {
        rows.reverse();
    }
}

/// Ascending comparison of two rows under one criterion.
pub fn compare_by(a: &EnrichedProduct, b: &EnrichedProduct, criterion: SortCriterion) -> Ordering {
    match criterion {
        SortCriterion::Id => a.id.cmp(&b.id),
        SortCriterion::Name => folded_cmp(&a.name, &b.name),
        SortCriterion::Category => folded_cmp(a.category_title(), b.category_title()),
        SortCriterion::User => folded_cmp(a.owner_name(), b.owner_name()),
    }
}

/// Case-folded string ordering: Unicode lowercase, then lexicographic.
///
/// "Apple" < "banana" < "CHERRY". Strings equal under folding compare
/// equal, so ties between them are left to the surrounding sort.
fn folded_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
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
                id: 1,
                title: category_title.to_string(),
                icon: "🛒".to_string(),
                owner_id: 1,
            },
            user: User {
                id: 1,
                name: owner_name.to_string(),
                sex: Sex::Female,
            },
        }
    }

    fn names(rows: &[EnrichedProduct]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_click_cycle_returns_to_inactive_after_three_clicks() {
        let state = SortState::inactive();

        let first = state.click(SortCriterion::Name);
        assert_eq!(
            first.active(),
            Some(ActiveSort {
                criterion: SortCriterion::Name,
                direction: SortDirection::Ascending
            })
        );

        let second = first.click(SortCriterion::Name);
        assert_eq!(
            second.active(),
            Some(ActiveSort {
                criterion: SortCriterion::Name,
                direction: SortDirection::Descending
            })
        );

        let third = second.click(SortCriterion::Name);
        assert_eq!(third.active(), None);
    }

    #[test]
    fn test_click_other_header_restarts_at_ascending() {
        let state = SortState::inactive()
            .click(SortCriterion::Name)
            .click(SortCriterion::Name); // Name, Descending

        let switched = state.click(SortCriterion::User);
        assert_eq!(
            switched.active(),
            Some(ActiveSort {
                criterion: SortCriterion::User,
                direction: SortDirection::Ascending
            })
        );
    }

    #[test]
    fn test_fourth_click_is_newly_selected_ascending() {
        let state = SortState::inactive()
            .click(SortCriterion::Id)
            .click(SortCriterion::Id)
            .click(SortCriterion::Id) // cleared
            .click(SortCriterion::Id);

        assert_eq!(
            state.active(),
            Some(ActiveSort {
                criterion: SortCriterion::Id,
                direction: SortDirection::Ascending
            })
        );
    }

    #[test]
    fn test_direction_for_reports_only_active_criterion() {
        let state = SortState::inactive().click(SortCriterion::Category);

        assert_eq!(
            state.direction_for(SortCriterion::Category),
            Some(SortDirection::Ascending)
        );
        assert_eq!(state.direction_for(SortCriterion::Name), None);
    }

    #[test]
    fn test_inactive_state_is_identity_pass() {
        let mut rows = vec![row(3, "Cherry", "Fruits", "Max"), row(1, "Apple", "Fruits", "Max")];
        let before = rows.clone();

        sort_rows(&mut rows, &SortState::inactive());
        assert_eq!(rows, before);
    }

    #[test]
    fn test_sort_by_id_ascending() {
        let mut rows = vec![
            row(3, "Cherry", "Fruits", "Max"),
            row(1, "Apple", "Fruits", "Max"),
            row(2, "Banana", "Fruits", "Max"),
        ];

        sort_rows(&mut rows, &SortState::inactive().click(SortCriterion::Id));
        assert_eq!(names(&rows), vec!["Apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_sort_by_name_is_case_folded() {
        let mut rows = vec![
            row(1, "banana", "Fruits", "Max"),
            row(2, "Apple", "Fruits", "Max"),
            row(3, "CHERRY", "Fruits", "Max"),
        ];

        sort_rows(&mut rows, &SortState::inactive().click(SortCriterion::Name));
        assert_eq!(names(&rows), vec!["Apple", "banana", "CHERRY"]);
    }

    #[test]
    fn test_descending_is_reverse_of_ascending() {
        let mut ascending = vec![
            row(1, "Milk", "Grocery", "Anna"),
            row(2, "Apple", "Fruits", "Max"),
            row(3, "Cola", "Drinks", "Roma"),
        ];
        let mut descending = ascending.clone();

        sort_rows(
            &mut ascending,
            &SortState::inactive().click(SortCriterion::Category),
        );
        sort_rows(
            &mut descending,
            &SortState::inactive()
                .click(SortCriterion::Category)
                .click(SortCriterion::Category),
        );

        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut rows = vec![
            row(4, "pear", "Fruits", "Max"),
            row(2, "Apple", "Fruits", "Max"),
            row(3, "Banana", "Fruits", "Max"),
            row(1, "apricot", "Fruits", "Max"),
        ];
        let state = SortState::inactive().click(SortCriterion::Name);

        sort_rows(&mut rows, &state);
        sort_rows(&mut rows, &state);

        for pair in rows.windows(2) {
            assert_ne!(
                compare_by(&pair[0], &pair[1], SortCriterion::Name),
                Ordering::Greater
            );
        }
    }
}

//! # vitrine-core: Pure Browsing Logic for Vitrine
//!
//! This crate is the **heart** of Vitrine. It contains the whole derived-data
//! pipeline as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vitrine Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Rendering Collaborator                         │   │
//! │  │    Owner tabs ──► Category chips ──► Search box ──► Table      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ rows_for_view() / mutators             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vitrine-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   sort    │  │  filter   │  │  session  │  │   │
//! │  │   │   join    │  │ cycle FSM │  │ 3 preds   │  │  surface  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RENDERING • PURE FUNCTIONS                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 vitrine-data (Fixture Layer)                    │   │
//! │  │            Bundled JSON collections, preview binary             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (User, Category, Product, EnrichedProduct)
//! - [`error`] - Data-integrity error types
//! - [`validation`] - Base-collection integrity checks
//! - [`catalog`] - Dataset joiner, runs once per session
//! - [`sort`] - Sort engine and the tri-state sort-cycle state machine
//! - [`filter`] - Filter engine (owner, category set, name query)
//! - [`session`] - BrowseSession, the surface the renderer consumes
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every derivation is deterministic - same input =
//!    same output
//! 2. **No I/O**: File system, network, rendering access is FORBIDDEN here
//! 3. **Explicit State**: Filter and sort state are plain values passed into
//!    pure transitions; no ambient module-level state anywhere
//! 4. **Fail-Fast Joining**: A dangling reference fails catalog construction;
//!    no partially-joined record ever exists
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrine_core::catalog::Catalog;
//! use vitrine_core::session::BrowseSession;
//! use vitrine_core::sort::SortCriterion;
//! use vitrine_core::types::{Category, Product, Sex, User};
//!
//! let users = vec![User { id: 1, name: "Max".into(), sex: Sex::Male }];
//! let categories = vec![Category {
//!     id: 1,
//!     title: "Fruits".into(),
//!     icon: "🍎".into(),
//!     owner_id: 1,
//! }];
//! let products = vec![
//!     Product { id: 1, name: "Apple".into(), category_id: 1 },
//!     Product { id: 2, name: "Banana".into(), category_id: 1 },
//! ];
//!
//! let catalog = Catalog::build(&users, &categories, &products)?;
//! let mut session = BrowseSession::new(catalog);
//!
//! session.set_query("ban");
//! session.click_sort_header(SortCriterion::Name);
//!
//! let visible = session.visible_rows();
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].name, "Banana");
//! # Ok::<(), vitrine_core::error::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod filter;
pub mod session;
pub mod sort;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrine_core::Catalog` instead of
// `use vitrine_core::catalog::Catalog`

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::FilterState;
pub use session::{BrowseSession, ProductRow};
pub use sort::{SortCriterion, SortDirection, SortState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sentinel owner-name meaning "no owner restriction".
///
/// The owner filter is single-select and always holds a name; this
/// distinguished value stands for the unrestricted state, mirroring the
/// "All" tab the renderer shows first in the owner list.
pub const ALL_USERS: &str = "All";

//! Catalog filter engine.
//!
//! This crate contains the filtering/derivation logic for browsing a fixed
//! product collection, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage): derived bounds, the filter predicate, and
//! the browse session that applies user-input commands.

pub mod bounds;
pub mod dataset;
pub mod filter;
pub mod product;
pub mod session;

pub use bounds::{ALL_CATEGORIES, DerivedBounds};
pub use filter::{FilterState, accept_price_text, apply_filter, is_valid_price_text};
pub use product::ProductRecord;
pub use session::{BrowseSession, FilterCommand};

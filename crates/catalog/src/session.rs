//! Browse session: owns the filter state and keeps the filtered view current.

use serde::{Deserialize, Serialize};

use storefront_core::CatalogResult;

use crate::bounds::DerivedBounds;
use crate::filter::{FilterState, is_valid_price_text};
use crate::product::ProductRecord;

/// Discrete user-input events applied to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterCommand {
    SelectCategory(String),
    SetMinPrice(String),
    SetMaxPrice(String),
    ResetFilters,
    ToggleSidebar,
}

/// A single browsing session over a fixed record collection.
///
/// The record collection is loaded once and never changes; the session owns
/// the `FilterState` exclusively and applies commands sequentially. Whenever
/// a command changes the filter, the filtered view is recomputed
/// synchronously before `apply` returns, so readers always observe a view
/// consistent with the state.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    records: Vec<ProductRecord>,
    bounds: DerivedBounds,
    filter: FilterState,
    sidebar_visible: bool,
    // Indices into `records`, in original order.
    filtered: Vec<usize>,
}

impl BrowseSession {
    /// Start a session: derive bounds once, seed the filter from them, and
    /// compute the initial (identity) view.
    ///
    /// Fails with `InvalidInput` on an empty collection; a session cannot
    /// proceed without valid bounds.
    pub fn new(records: Vec<ProductRecord>) -> CatalogResult<Self> {
        let bounds = DerivedBounds::from_records(&records)?;
        let filter = FilterState::from_bounds(&bounds);
        let mut session = Self {
            records,
            bounds,
            filter,
            sidebar_visible: true,
            filtered: Vec::new(),
        };
        session.recompute();
        Ok(session)
    }

    /// Apply one user-input event.
    ///
    /// Price edits pass through the keystroke gate: a proposal containing a
    /// non-digit is silently dropped and the state (and view) stay untouched.
    /// Toggling the sidebar never touches the filter or the view.
    pub fn apply(&mut self, command: FilterCommand) {
        match command {
            FilterCommand::SelectCategory(category) => {
                self.filter.selected_category = category;
                self.recompute();
            }
            FilterCommand::SetMinPrice(text) => {
                if is_valid_price_text(&text) {
                    self.filter.min_price = text;
                    self.recompute();
                }
            }
            FilterCommand::SetMaxPrice(text) => {
                if is_valid_price_text(&text) {
                    self.filter.max_price = text;
                    self.recompute();
                }
            }
            FilterCommand::ResetFilters => {
                self.filter = FilterState::from_bounds(&self.bounds);
                self.recompute();
            }
            FilterCommand::ToggleSidebar => {
                self.sidebar_visible = !self.sidebar_visible;
            }
        }
    }

    fn recompute(&mut self) {
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.filter.matches(record))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(
            matched = self.filtered.len(),
            total = self.records.len(),
            category = %self.filter.selected_category,
            "filtered view recomputed"
        );
    }

    /// The current filtered view, in original record order.
    pub fn filtered(&self) -> Vec<&ProductRecord> {
        self.filtered.iter().map(|&i| &self.records[i]).collect()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn bounds(&self) -> &DerivedBounds {
        &self.bounds
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }
}

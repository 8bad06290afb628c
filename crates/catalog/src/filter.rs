//! Filter state and the filtering predicate.

use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

use crate::bounds::{ALL_CATEGORIES, DerivedBounds};
use crate::product::ProductRecord;

/// The user-controlled category and price-range selection.
///
/// Price fields hold the raw text of the inputs: either empty (meaning "no
/// bound") or a digit string, as admitted by [`accept_price_text`].
/// `min > max` is tolerated, not an error; the filter just matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_category: String,
    pub min_price: String,
    pub max_price: String,
}

impl ValueObject for FilterState {}

impl FilterState {
    /// Initial state: "All" category, price texts seeded from the dataset
    /// extremes. Reset returns to exactly this state.
    pub fn from_bounds(bounds: &DerivedBounds) -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            min_price: bounds.min_price().to_string(),
            max_price: bounds.max_price().to_string(),
        }
    }

    /// Lower bound actually used for comparison: unset/unparseable text
    /// normalizes to 0.
    pub fn effective_min(&self) -> f64 {
        parse_price_text(&self.min_price).unwrap_or(0.0)
    }

    /// Upper bound actually used for comparison: unset/unparseable text
    /// normalizes to +infinity.
    pub fn effective_max(&self) -> f64 {
        parse_price_text(&self.max_price).unwrap_or(f64::INFINITY)
    }

    /// The filtering predicate: category match (exact, case-sensitive, or the
    /// "All" sentinel) and price within the effective range.
    pub fn matches(&self, record: &ProductRecord) -> bool {
        let category_ok = self.selected_category == ALL_CATEGORIES
            || record.category == self.selected_category;

        category_ok
            && record.price >= self.effective_min()
            && record.price <= self.effective_max()
    }
}

/// Parse price text to a number; empty or malformed text is "unset".
fn parse_price_text(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Select the subset of `records` matching `state`, preserving the original
/// relative order. Pure function of its inputs; always a full linear rescan
/// (the dataset is small and static, nothing to cache).
pub fn apply_filter<'a>(records: &'a [ProductRecord], state: &FilterState) -> Vec<&'a ProductRecord> {
    records.iter().filter(|record| state.matches(record)).collect()
}

/// Keystroke-level gate for a price input: the empty string or a run of
/// decimal digits is valid, anything else (sign, decimal point, whitespace)
/// is not.
pub fn is_valid_price_text(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

/// Apply the gate to a proposed edit: returns `proposed` when valid,
/// otherwise the unchanged `current` value. Never fails.
pub fn accept_price_text<'a>(current: &'a str, proposed: &'a str) -> &'a str {
    if is_valid_price_text(proposed) {
        proposed
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::test_support::record;

    fn sample_records() -> Vec<ProductRecord> {
        vec![
            record("A", "A", 10.0),
            record("B", "B", 20.0),
            record("C", "A", 30.0),
        ]
    }

    fn state(category: &str, min: &str, max: &str) -> FilterState {
        FilterState {
            selected_category: category.to_string(),
            min_price: min.to_string(),
            max_price: max.to_string(),
        }
    }

    #[test]
    fn category_filter_preserves_record_order() {
        let records = sample_records();
        let filtered = apply_filter(&records, &state("A", "0", "100"));

        let prices: Vec<f64> = filtered.iter().map(|r| r.price).collect();
        assert_eq!(prices, [10.0, 30.0]);
    }

    #[test]
    fn price_range_narrows_within_all_categories() {
        let records = sample_records();
        let filtered = apply_filter(&records, &state("All", "15", "25"));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category, "B");
        assert_eq!(filtered[0].price, 20.0);
    }

    #[test]
    fn empty_price_texts_mean_widest_bounds() {
        let records = sample_records();
        let filtered = apply_filter(&records, &state("All", "", ""));

        assert_eq!(filtered.len(), records.len());
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let records = sample_records();
        let filtered = apply_filter(&records, &state("All", "25", "15"));

        assert!(filtered.is_empty());
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let records = sample_records();
        let filtered = apply_filter(&records, &state("a", "", ""));

        assert!(filtered.is_empty());
    }

    #[test]
    fn boundary_prices_are_inclusive() {
        let records = sample_records();
        let filtered = apply_filter(&records, &state("All", "10", "30"));

        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn malformed_price_text_normalizes_to_unset() {
        // Hostile state constructed directly, bypassing the input gate.
        let records = sample_records();
        let filtered = apply_filter(&records, &state("All", "abc", "1e999"));

        assert_eq!(filtered.len(), records.len());
    }

    #[test]
    fn effective_bounds_default_to_widest() {
        let s = state("All", "", "");
        assert_eq!(s.effective_min(), 0.0);
        assert_eq!(s.effective_max(), f64::INFINITY);
    }

    #[test]
    fn price_text_gate_accepts_digits_and_empty() {
        assert_eq!(accept_price_text("12", "123"), "123");
        assert_eq!(accept_price_text("12", ""), "");
        assert_eq!(accept_price_text("12", "0"), "0");
    }

    #[test]
    fn price_text_gate_rejects_non_digits() {
        assert_eq!(accept_price_text("12", "12a"), "12");
        assert_eq!(accept_price_text("12", "-5"), "12");
        assert_eq!(accept_price_text("12", "1.5"), "12");
        assert_eq!(accept_price_text("12", " 3"), "12");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use crate::bounds::DerivedBounds;
        use proptest::prelude::*;
        use storefront_core::ProductId;

        fn arb_record() -> impl Strategy<Value = ProductRecord> {
            (
                "[A-Za-z][A-Za-z0-9 ]{0,19}",
                prop::sample::select(vec!["Audio", "Wearables", "Accessories", "Gaming", "Home"]),
                0.0f64..2000.0,
            )
                .prop_map(|(name, category, price)| ProductRecord {
                    id: ProductId::new(),
                    name,
                    category: category.to_string(),
                    price,
                    image_url: String::new(),
                    description: String::new(),
                })
        }

        fn arb_catalog() -> impl Strategy<Value = Vec<ProductRecord>> {
            prop::collection::vec(arb_record(), 1..50)
        }

        proptest! {
            /// Derived bounds widen, never narrow: every record price falls
            /// inside [min_price, max_price].
            #[test]
            fn bounds_contain_every_price(records in arb_catalog()) {
                let bounds = DerivedBounds::from_records(&records).unwrap();
                for record in &records {
                    prop_assert!(bounds.min_price() as f64 <= record.price);
                    prop_assert!(bounds.max_price() as f64 >= record.price);
                }
            }

            /// "All" appears exactly once, at index 0, and no category repeats.
            #[test]
            fn categories_are_sentinel_plus_distinct(records in arb_catalog()) {
                let bounds = DerivedBounds::from_records(&records).unwrap();
                let cats = bounds.categories();

                prop_assert_eq!(&cats[0], "All");
                for (i, c) in cats.iter().enumerate() {
                    prop_assert!(!cats[i + 1..].contains(c));
                }
                for record in &records {
                    prop_assert!(cats.contains(&record.category));
                }
            }

            /// Full range + "All" category is the identity filter.
            #[test]
            fn reset_state_is_identity_filter(records in arb_catalog()) {
                let bounds = DerivedBounds::from_records(&records).unwrap();
                let state = FilterState::from_bounds(&bounds);
                let filtered = apply_filter(&records, &state);

                prop_assert_eq!(filtered.len(), records.len());
                for (kept, original) in filtered.iter().zip(records.iter()) {
                    prop_assert_eq!(kept.id, original.id);
                }
            }

            /// The filtered view is always an order-preserving subsequence.
            #[test]
            fn filter_preserves_relative_order(
                records in arb_catalog(),
                category in prop::sample::select(vec!["All", "Audio", "Gaming"]),
                min in 0u64..1000,
                max in 0u64..1000,
            ) {
                let state = FilterState {
                    selected_category: category.to_string(),
                    min_price: min.to_string(),
                    max_price: max.to_string(),
                };
                let filtered = apply_filter(&records, &state);

                let mut cursor = 0;
                for kept in &filtered {
                    let pos = records[cursor..]
                        .iter()
                        .position(|r| r.id == kept.id)
                        .expect("filtered record missing from source");
                    cursor += pos + 1;
                }
            }

            /// An inverted effective range matches nothing.
            #[test]
            fn inverted_range_is_empty(records in arb_catalog(), lo in 1u64..1000) {
                let state = FilterState {
                    selected_category: "All".to_string(),
                    min_price: lo.to_string(),
                    max_price: (lo - 1).to_string(),
                };
                prop_assert!(apply_filter(&records, &state).is_empty());
            }

            /// The gate echoes digit strings verbatim and never lets a
            /// non-digit proposal through.
            #[test]
            fn price_text_gate_total(current in "[0-9]{0,6}", proposed in ".{0,12}") {
                let accepted = accept_price_text(&current, &proposed);
                if proposed.chars().all(|c| c.is_ascii_digit()) {
                    prop_assert_eq!(accepted, proposed.as_str());
                } else {
                    prop_assert_eq!(accepted, current.as_str());
                }
            }
        }
    }
}

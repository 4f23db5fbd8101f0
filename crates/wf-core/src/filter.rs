//! Filter evaluation
//!
//! Derives a visibility boolean per item from the current [`FilterState`]
//! and the item's category, and applies it to every item across the three
//! collections. Pure, idempotent, no failure modes: all inputs are
//! already-validated numbers or the unset sentinel.

use crate::types::{Categories, FilterState, ItemClass, WishlistNode};

/// Decide visibility for a single item category under the given state.
///
/// Thresholds are inclusive; unset thresholds impose no constraint. A
/// minimum discount of exactly 0 means "show undiscounted too", since 0% is
/// a no-op discount floor.
pub fn is_visible(state: &FilterState, class: &ItemClass) -> bool {
    let min = state.minimum_discount_percentage;
    let max = state.maximum_price;
    let show_undiscounted = !state.discounted_only || min == Some(0.0);

    match *class {
        // No price to filter by: the price cap is vacuous for these.
        ItemClass::Unpriced => show_undiscounted,
        ItemClass::Priced { price } => {
            show_undiscounted && max.map_or(true, |cap| price <= cap)
        }
        // A discounted item always passes the discounted-only gate; only the
        // numeric floor gates it.
        ItemClass::Discounted {
            price,
            discount_percentage,
        } => {
            min.map_or(true, |floor| discount_percentage >= floor)
                && max.map_or(true, |cap| price <= cap)
        }
    }
}

/// Apply visibility to every item across all three collections.
pub fn evaluate<N: WishlistNode>(state: &FilterState, categories: &Categories<N>) {
    for item in categories
        .unpriced
        .iter()
        .chain(&categories.normally_priced)
        .chain(&categories.discounted)
    {
        item.display(is_visible(state, &item.class));
    }
}

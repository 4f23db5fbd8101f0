//! Core type definitions for the wishlist filter
//!
//! These types form the in-memory model of the wishlist page: one
//! classified entry per page row, grouped into three ordered collections.

// =============================================================================
// Page Entry Access
// =============================================================================

/// Discount markup read from one page entry, present only when the entry is
/// on sale. Each text field is optional so the classifier can tell a missing
/// marker apart from an empty one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountMarkup {
    /// Raw discount percentage text, e.g. "-25%".
    pub percentage_text: Option<String>,
    /// Raw discounted/final price text, e.g. "7,49€".
    pub final_price_text: Option<String>,
}

/// Abstract view of one wishlist entry on the host page.
///
/// The DOM layer implements this over the page's markup schema; tests
/// implement it over plain structs. The referenced node is owned by the host
/// page and only ever shown or hidden, never created or destroyed.
pub trait WishlistNode {
    /// Discount markup, when the entry carries a discount marker.
    fn discount_markup(&self) -> Option<DiscountMarkup>;

    /// Plain price text, when the entry carries a price marker.
    fn price_text(&self) -> Option<String>;

    /// Show or hide the entry on the page.
    fn set_visible(&self, visible: bool);
}

// =============================================================================
// Item Classification
// =============================================================================

/// Category of one wishlist entry.
///
/// Classification is total and mutually exclusive: every page entry maps to
/// exactly one variant, determined by presence of a discount marker and
/// presence/parseability of a price marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemClass {
    /// No numeric price could be extracted (e.g. "Coming soon").
    Unpriced,
    /// Normally priced entry.
    Priced {
        /// Price, non-negative.
        price: f64,
    },
    /// Entry on sale.
    Discounted {
        /// Discounted/final price.
        price: f64,
        /// Discount magnitude in percent, e.g. 25.0 for "-25%".
        discount_percentage: f64,
    },
}

/// One classified wishlist entry: the page node plus its category.
#[derive(Debug)]
pub struct WishlistItem<N> {
    pub node: N,
    pub class: ItemClass,
}

impl<N: WishlistNode> WishlistItem<N> {
    /// Show or hide the underlying page entry.
    pub fn display(&self, visible: bool) {
        self.node.set_visible(visible);
    }
}

// =============================================================================
// Categorized Collections
// =============================================================================

/// The three ordered collections produced by classification, rebuilt in full
/// whenever the page's item list is scanned.
#[derive(Debug)]
pub struct Categories<N> {
    pub unpriced: Vec<WishlistItem<N>>,
    pub normally_priced: Vec<WishlistItem<N>>,
    pub discounted: Vec<WishlistItem<N>>,
}

impl<N> Default for Categories<N> {
    fn default() -> Self {
        Self {
            unpriced: Vec::new(),
            normally_priced: Vec::new(),
            discounted: Vec::new(),
        }
    }
}

impl<N> Categories<N> {
    /// Total number of classified entries across all three collections.
    pub fn len(&self) -> usize {
        self.unpriced.len() + self.normally_priced.len() + self.discounted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// Current user-configured thresholds. `None` means "no constraint on this
/// axis". Mutated only by the control change handlers, read only by the
/// evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterState {
    /// Items priced above this are hidden (inclusive bound).
    pub maximum_price: Option<f64>,
    /// Discounted items below this discount are hidden (inclusive bound).
    pub minimum_discount_percentage: Option<f64>,
    /// When set, undiscounted items are hidden.
    pub discounted_only: bool,
}

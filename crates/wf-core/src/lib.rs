//! Wishlist Filter Core Library
//!
//! This crate provides the classification and filter-evaluation engine for
//! the wishlist filter. It is DOM-free: page entries are reached through the
//! [`WishlistNode`] trait and the debounce timer through [`DelayScheduler`],
//! so everything here is unit-testable on the host.
//!
//! # Architecture
//!
//! Page markup is scanned once into three categorized collections (unpriced,
//! normally priced, discounted). User-adjustable thresholds live in a single
//! [`FilterState`]; the evaluator derives a visibility boolean per item from
//! state and category and applies it to the referenced node. Threshold input
//! is debounced through a single-slot cancellable timer.
//!
//! # Modules
//!
//! - `parse`: price / percentage / threshold text parsing
//! - `classify`: bucketing page entries into the three item categories
//! - `filter`: visibility rules and the evaluator
//! - `debounce`: single-slot cancellable delay timer
//! - `controller`: the owned object tying state, collections, and debounce
//! - `types`: shared type definitions

pub mod classify;
pub mod controller;
pub mod debounce;
pub mod filter;
pub mod parse;
pub mod types;

// Re-export commonly used types
pub use classify::{classify, ClassifyError};
pub use controller::{FilterController, DEBOUNCE_DELAY_MS};
pub use debounce::{Debouncer, DelayScheduler};
pub use filter::{evaluate, is_visible};
pub use types::{Categories, DiscountMarkup, FilterState, ItemClass, WishlistItem, WishlistNode};

//! Filter controller
//!
//! The single owned object for one page session: current thresholds, the
//! categorized collections, and the debounce slot. Control change handlers
//! call in here; nothing reads state from ambient scope.

use crate::classify::classify;
use crate::debounce::{Debouncer, DelayScheduler};
use crate::filter::evaluate;
use crate::parse::parse_threshold;
use crate::types::{Categories, FilterState, WishlistNode};

/// Delay before a threshold edit is applied, letting rapid keystrokes
/// coalesce into one evaluation.
pub const DEBOUNCE_DELAY_MS: u32 = 500;

pub struct FilterController<N, S: DelayScheduler> {
    state: FilterState,
    items: Categories<N>,
    debounce: Debouncer<S>,
}

impl<N: WishlistNode, S: DelayScheduler> FilterController<N, S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            state: FilterState::default(),
            items: Categories::default(),
            debounce: Debouncer::new(scheduler, DEBOUNCE_DELAY_MS),
        }
    }

    /// (Re)build the categorized collections from a fresh scan of the
    /// page's item list.
    pub fn scan(&mut self, nodes: Vec<N>) {
        self.items = classify(nodes);
        log::debug!(
            "scanned {} wishlist entries ({} unpriced, {} priced, {} discounted)",
            self.items.len(),
            self.items.unpriced.len(),
            self.items.normally_priced.len(),
            self.items.discounted.len(),
        );
    }

    /// The maximum-price field changed; empty or unparsable text unsets the
    /// threshold. Evaluation is debounced.
    pub fn maximum_price_changed(&mut self, text: &str) {
        self.state.maximum_price = parse_threshold(text);
        self.debounce.restart();
    }

    /// The minimum-discount-percentage field changed; empty or unparsable
    /// text unsets the threshold. Evaluation is debounced.
    pub fn minimum_discount_changed(&mut self, text: &str) {
        self.state.minimum_discount_percentage = parse_threshold(text);
        self.debounce.restart();
    }

    /// The discounted-only checkbox toggled. Applies synchronously; a
    /// pending debounced evaluation is cancelled so this one wins.
    pub fn discounted_only_changed(&mut self, checked: bool) {
        self.state.discounted_only = checked;
        self.debounce.cancel();
        self.apply();
    }

    /// The debounce timer elapsed. Stale fires (slot already cancelled) are
    /// ignored.
    pub fn debounce_elapsed(&mut self) {
        if self.debounce.acknowledge_fire() {
            self.apply();
        }
    }

    /// Re-run the evaluator over the current state and collections.
    pub fn apply(&mut self) {
        evaluate(&self.state, &self.items);
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn items(&self) -> &Categories<N> {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiscountMarkup;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct FakeEntry {
        discount: Option<DiscountMarkup>,
        price: Option<String>,
        visible: Rc<Cell<Option<bool>>>,
    }

    impl WishlistNode for FakeEntry {
        fn discount_markup(&self) -> Option<DiscountMarkup> {
            self.discount.clone()
        }
        fn price_text(&self) -> Option<String> {
            self.price.clone()
        }
        fn set_visible(&self, visible: bool) {
            self.visible.set(Some(visible));
        }
    }

    fn priced(text: &str) -> (FakeEntry, Rc<Cell<Option<bool>>>) {
        let visible = Rc::new(Cell::new(None));
        (
            FakeEntry {
                discount: None,
                price: Some(text.to_string()),
                visible: visible.clone(),
            },
            visible,
        )
    }

    fn discounted(pct: &str, price: &str) -> (FakeEntry, Rc<Cell<Option<bool>>>) {
        let visible = Rc::new(Cell::new(None));
        (
            FakeEntry {
                discount: Some(DiscountMarkup {
                    percentage_text: Some(pct.to_string()),
                    final_price_text: Some(price.to_string()),
                }),
                price: None,
                visible: visible.clone(),
            },
            visible,
        )
    }

    /// Counts live timers; never actually fires anything.
    #[derive(Default)]
    struct CountingScheduler {
        scheduled: Rc<RefCell<u32>>,
        cancelled: Rc<RefCell<u32>>,
        next_id: u32,
    }

    impl DelayScheduler for CountingScheduler {
        type Handle = u32;

        fn schedule(&mut self, _delay_ms: u32) -> Option<u32> {
            *self.scheduled.borrow_mut() += 1;
            self.next_id += 1;
            Some(self.next_id)
        }

        fn cancel(&mut self, _handle: u32) {
            *self.cancelled.borrow_mut() += 1;
        }
    }

    fn controller() -> (
        FilterController<FakeEntry, CountingScheduler>,
        Rc<RefCell<u32>>,
        Rc<RefCell<u32>>,
    ) {
        let scheduler = CountingScheduler::default();
        let scheduled = scheduler.scheduled.clone();
        let cancelled = scheduler.cancelled.clone();
        (FilterController::new(scheduler), scheduled, cancelled)
    }

    #[test]
    fn test_threshold_updates_are_stored_and_debounced() {
        let (mut c, scheduled, _) = controller();
        c.maximum_price_changed("10");
        c.minimum_discount_changed("25");
        assert_eq!(c.state().maximum_price, Some(10.0));
        assert_eq!(c.state().minimum_discount_percentage, Some(25.0));
        assert_eq!(*scheduled.borrow(), 2);
    }

    #[test]
    fn test_empty_input_unsets_threshold() {
        let (mut c, _, _) = controller();
        c.maximum_price_changed("10");
        c.maximum_price_changed("");
        assert_eq!(c.state().maximum_price, None);
        c.minimum_discount_changed("abc");
        assert_eq!(c.state().minimum_discount_percentage, None);
    }

    #[test]
    fn test_rapid_edits_coalesce_to_one_evaluation() {
        let (mut c, scheduled, cancelled) = controller();
        let (entry, seen) = priced("12.00");
        c.scan(vec![entry]);

        // Three keystrokes inside the debounce window.
        c.maximum_price_changed("1");
        c.maximum_price_changed("15");
        c.maximum_price_changed("10");
        assert_eq!(*scheduled.borrow(), 3);
        assert_eq!(*cancelled.borrow(), 2);
        // Nothing applied until the surviving timer fires.
        assert_eq!(seen.get(), None);

        c.debounce_elapsed();
        // Last-set value (10) wins: the 12.00 item is hidden.
        assert_eq!(seen.get(), Some(false));

        // A second fire without a pending slot does nothing further.
        seen.set(None);
        c.debounce_elapsed();
        assert_eq!(seen.get(), None);
    }

    #[test]
    fn test_checkbox_applies_synchronously() {
        let (mut c, _, _) = controller();
        let (plain, plain_seen) = priced("4.99");
        let (sale, sale_seen) = discounted("-50%", "4.99");
        c.scan(vec![plain, sale]);

        c.discounted_only_changed(true);
        assert_eq!(plain_seen.get(), Some(false));
        assert_eq!(sale_seen.get(), Some(true));

        c.discounted_only_changed(false);
        assert_eq!(plain_seen.get(), Some(true));
    }

    #[test]
    fn test_checkbox_cancels_pending_debounce() {
        let (mut c, _, cancelled) = controller();
        let (entry, seen) = priced("12.00");
        c.scan(vec![entry]);

        c.maximum_price_changed("10");
        c.discounted_only_changed(false);
        assert_eq!(*cancelled.borrow(), 1);
        // Checkbox evaluation already ran with the new threshold.
        assert_eq!(seen.get(), Some(false));

        // The cancelled timer's late fire must not re-evaluate.
        seen.set(None);
        c.debounce_elapsed();
        assert_eq!(seen.get(), None);
    }

    #[test]
    fn test_rescan_replaces_collections() {
        let (mut c, _, _) = controller();
        let (first, _) = priced("5.00");
        c.scan(vec![first]);
        assert_eq!(c.items().len(), 1);

        let (a, _) = priced("5.00");
        let (b, _) = discounted("-25%", "7.49");
        c.scan(vec![a, b]);
        assert_eq!(c.items().len(), 2);
        assert_eq!(c.items().discounted.len(), 1);
    }
}

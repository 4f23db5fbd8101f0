//! Single-slot cancellable delay timer
//!
//! Threshold keystrokes are coalesced: each change restarts the one pending
//! timer, so a burst of edits yields exactly one re-evaluation after input
//! settles. The underlying scheduling primitive is abstract; the wasm layer
//! backs it with `setTimeout`, tests with a fake.

/// A host-provided "schedule callback after delay, cancellable" primitive.
///
/// The callback itself is wired up by the host at construction time; this
/// trait only moves the pending-timer handle around.
pub trait DelayScheduler {
    /// Opaque handle to one scheduled callback.
    type Handle;

    /// Schedule the host callback to run once after `delay_ms`. Returns
    /// `None` when the host could not schedule (the debounce is then simply
    /// dropped, never queued twice).
    fn schedule(&mut self, delay_ms: u32) -> Option<Self::Handle>;

    /// Cancel a previously scheduled callback.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Owns the single pending-timer slot. At most one evaluation is pending at
/// any time.
pub struct Debouncer<S: DelayScheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: DelayScheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    /// (Re)start the timer: any pending callback is cancelled first.
    pub fn restart(&mut self) {
        self.cancel();
        self.pending = self.scheduler.schedule(self.delay_ms);
    }

    /// Cancel the pending callback, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Record that the scheduled callback fired. Returns `false` for a stale
    /// fire (slot already cancelled), which the caller must ignore.
    pub fn acknowledge_fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

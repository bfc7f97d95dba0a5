//! Browser timers bound to the reactive owner
//!
//! gloo clears a timer when its handle is dropped. Handles are kept in a
//! local `StoredValue`, so cleaning up the owning component cancels every
//! timer it still has pending. The stores are generic over the handle type
//! and only the constructors below touch gloo.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;

/// Longest delay `setTimeout`/`setInterval` accept; larger values fire at once
pub const MAX_DELAY_MS: u32 = i32::MAX as u32;

/// Delay in whole milliseconds, clamped to what browsers honour
pub fn browser_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).map_or(MAX_DELAY_MS, |ms| ms.min(MAX_DELAY_MS))
}

/// Holds at most one repeating timer; emptying the slot cancels it
pub struct TimerSlot<H: 'static> {
    handle: StoredValue<Option<H>, LocalStorage>,
}

impl<H: 'static> Clone for TimerSlot<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for TimerSlot<H> {}

impl<H: 'static> TimerSlot<H> {
    pub fn new() -> Self {
        let handle = StoredValue::new_local(None);

        on_cleanup(move || {
            handle.try_update_value(|slot| slot.take());
        });

        Self { handle }
    }

    /// Store `handle`, cancelling whatever was held before
    pub fn arm(&self, handle: H) {
        self.handle.try_update_value(|slot| slot.replace(handle));
    }

    pub fn clear(&self) {
        self.handle.try_update_value(|slot| slot.take());
    }

    pub fn is_armed(&self) -> bool {
        self.handle.try_with_value(Option::is_some).unwrap_or(false)
    }
}

impl<H: 'static> Default for TimerSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

struct Pending<H> {
    fired: Rc<Cell<bool>>,
    _handle: H,
}

/// One-shot timers owned by a component
pub struct PendingTimers<H: 'static> {
    pending: StoredValue<Vec<Pending<H>>, LocalStorage>,
}

impl<H: 'static> Clone for PendingTimers<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for PendingTimers<H> {}

impl<H: 'static> PendingTimers<H> {
    pub fn new() -> Self {
        let pending = StoredValue::new_local(Vec::new());

        on_cleanup(move || {
            pending.try_update_value(|pending| pending.clear());
        });

        Self { pending }
    }

    /// Keep `handle` alive until `fired` is set or the owner is cleaned up.
    /// Entries that already fired are released here.
    pub fn hold(&self, fired: Rc<Cell<bool>>, handle: H) {
        self.pending.try_update_value(|pending| {
            pending.retain(|entry| !entry.fired.get());
            pending.push(Pending {
                fired,
                _handle: handle,
            });
        });
    }

    pub fn pending_count(&self) -> usize {
        self.pending.try_with_value(Vec::len).unwrap_or(0)
    }
}

impl<H: 'static> Default for PendingTimers<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
pub type TimerSet = PendingTimers<Timeout>;

#[cfg(feature = "hydrate")]
impl PendingTimers<Timeout> {
    /// Run `callback` once after `delay`, unless the owner is cleaned up first
    pub fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        // flagged only after the callback returns, so a callback that
        // schedules again never prunes its own handle mid-call
        let timeout = Timeout::new(browser_millis(delay), move || {
            callback();
            flag.set(true);
        });

        self.hold(fired, timeout);
    }
}

/// Run `tick` every `period` until the slot it is handed is cleared or the
/// current owner is cleaned up
#[cfg(feature = "hydrate")]
pub fn use_interval(
    period: Duration,
    mut tick: impl FnMut(TimerSlot<Interval>) + 'static,
) -> TimerSlot<Interval> {
    let slot = TimerSlot::new();
    slot.arm(Interval::new(browser_millis(period), move || tick(slot)));
    slot
}

//! Responsive breakpoint observer.
//!
//! # Responsibility
//! - Derive the is-mobile flag from viewport width updates.
//! - Notify subscribers only when the flag actually flips.
//!
//! # Invariants
//! - `is_mobile == width < breakpoint` at all times.
//! - A listener stops receiving notifications after `unsubscribe`; the
//!   consuming view must unsubscribe on teardown to avoid leaking it.

use log::debug;

/// Width threshold below which the layout is considered mobile, in pixels.
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

/// Handle returned by [`BreakpointWatcher::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(bool)>;

/// Observable is-mobile flag fed by window resize events.
///
/// Single-threaded: the host event loop serializes width updates, so
/// listeners are plain `FnMut` closures.
pub struct BreakpointWatcher {
    breakpoint: u32,
    width: u32,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl BreakpointWatcher {
    /// Creates a watcher with the default 768px breakpoint.
    pub fn new(initial_width: u32) -> Self {
        Self::with_breakpoint(initial_width, DEFAULT_MOBILE_BREAKPOINT)
    }

    /// Creates a watcher with a custom breakpoint.
    pub fn with_breakpoint(initial_width: u32, breakpoint: u32) -> Self {
        Self {
            breakpoint,
            width: initial_width,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Returns whether the current width is below the breakpoint.
    pub fn is_mobile(&self) -> bool {
        self.width < self.breakpoint
    }

    /// Applies a resize event. Listeners fire only when the is-mobile flag
    /// changes, not on every width update.
    pub fn update_width(&mut self, width: u32) {
        let was_mobile = self.is_mobile();
        self.width = width;
        let now_mobile = self.is_mobile();

        if was_mobile != now_mobile {
            debug!(
                "event=breakpoint_flip module=view status=ok is_mobile={} width={}",
                now_mobile, width
            );
            for (_, listener) in &mut self.listeners {
                listener(now_mobile);
            }
        }
    }

    /// Registers a listener for flag flips and returns its handle.
    pub fn subscribe(&mut self, listener: impl FnMut(bool) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        SubscriptionId(id)
    }

    /// Removes a listener. Returns `false` when the handle was already
    /// removed or never issued.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id.0);
        self.listeners.len() != before
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::BreakpointWatcher;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn flag_tracks_breakpoint() {
        let mut watcher = BreakpointWatcher::new(1024);
        assert!(!watcher.is_mobile());

        watcher.update_width(500);
        assert!(watcher.is_mobile());

        watcher.update_width(768);
        assert!(!watcher.is_mobile());
    }

    #[test]
    fn listeners_fire_only_on_flips() {
        let flips = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&flips);

        let mut watcher = BreakpointWatcher::new(1024);
        watcher.subscribe(move |is_mobile| sink.borrow_mut().push(is_mobile));

        watcher.update_width(900); // still desktop, no flip
        watcher.update_width(500); // flip to mobile
        watcher.update_width(400); // still mobile, no flip
        watcher.update_width(800); // flip back

        assert_eq!(*flips.borrow(), vec![true, false]);
    }

    #[test]
    fn unsubscribe_removes_listener() {
        let flips = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&flips);

        let mut watcher = BreakpointWatcher::new(1024);
        let id = watcher.subscribe(move |_| *sink.borrow_mut() += 1);
        assert_eq!(watcher.subscriber_count(), 1);

        assert!(watcher.unsubscribe(id));
        assert!(!watcher.unsubscribe(id));
        assert_eq!(watcher.subscriber_count(), 0);

        watcher.update_width(500);
        assert_eq!(*flips.borrow(), 0);
    }
}

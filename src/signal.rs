//! Minimal synchronous observer used by widgets to publish changes.
//!
//! DESIGN
//! ======
//! Widgets run on a single frame-driven thread, so handlers are `Rc`-owned
//! closures invoked in registration order. `emit` snapshots the handler list
//! before calling out, which lets a handler subscribe or unsubscribe while
//! an emit is in flight; such changes take effect from the next emit.

#[cfg(test)]
#[path = "signal_test.rs"]
mod tests;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Handler<T> = Rc<dyn Fn(&T)>;

/// Handle returned by [`Emitter::on_change`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Fan-out of values to registered handlers.
pub struct Emitter<T> {
    handlers: RefCell<Vec<(Subscription, Handler<T>)>>,
    next_id: Cell<u64>,
}

impl<T> Emitter<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { handlers: RefCell::new(Vec::new()), next_id: Cell::new(0) }
    }

    /// Register a handler for every subsequent emit.
    pub fn on_change(&self, handler: impl Fn(&T) + 'static) -> Subscription {
        let id = Subscription(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, Rc::new(handler)));
        id
    }

    /// Remove a handler. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(id, _)| *id != subscription);
        handlers.len() != before
    }

    /// Deliver `value` to every handler registered before this call.
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<Handler<T>> = self.handlers.borrow().iter().map(|(_, h)| Rc::clone(h)).collect();
        for handler in snapshot {
            handler(value);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter").field("subscribers", &self.subscriber_count()).finish()
    }
}

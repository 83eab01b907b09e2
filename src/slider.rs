//! Toolkit-independent range control.
//!
//! Every value change carries a [`ChangeSource`] so listeners can tell a
//! user edit from a value applied on behalf of a remote peer, instead of
//! consulting a shared "currently applying" flag.

#[cfg(test)]
#[path = "slider_test.rs"]
mod tests;

use crate::signal::{Emitter, Subscription};

/// Who originated a value change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeSource {
    /// Edited on this peer (user input or local code).
    Local,
    /// Applied from a message received from the group.
    Remote,
}

/// Payload delivered to slider subscribers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueChanged {
    pub value: f32,
    pub source: ChangeSource,
}

#[derive(Debug)]
pub struct Slider {
    min: f32,
    max: f32,
    value: f32,
    active: bool,
    changed: Emitter<ValueChanged>,
}

impl Slider {
    /// Create a slider; `initial` is clamped into range.
    #[must_use]
    pub fn new(min: f32, max: f32, initial: f32) -> Self {
        let (min, max) = ordered(min, max);
        Self { min, max, value: initial.clamp(min, max), active: true, changed: Emitter::new() }
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Store `value` clamped to the range.
    ///
    /// Returns the change and notifies subscribers only when the stored
    /// value differs from the previous one.
    pub fn set_value(&mut self, value: f32, source: ChangeSource) -> Option<ValueChanged> {
        if value.is_nan() {
            return None;
        }
        let clamped = value.clamp(self.min, self.max);
        if clamped == self.value {
            return None;
        }
        self.value = clamped;
        let change = ValueChanged { value: clamped, source };
        self.changed.emit(&change);
        Some(change)
    }

    /// Replace the range, re-clamping the current value through [`Slider::set_value`].
    pub fn set_range(&mut self, min: f32, max: f32, source: ChangeSource) -> Option<ValueChanged> {
        let (min, max) = ordered(min, max);
        self.min = min;
        self.max = max;
        self.set_value(self.value, source)
    }

    pub fn on_change(&self, handler: impl Fn(&ValueChanged) + 'static) -> Subscription {
        self.changed.on_change(handler)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.changed.unsubscribe(subscription)
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

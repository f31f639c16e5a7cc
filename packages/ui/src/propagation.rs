//! Stopping an event from bubbling to ancestor handlers.
//!
//! Widgets placed inside clickable containers (table rows, cards, list items)
//! must keep their own clicks from reaching the container. Event objects do
//! not all expose the same API for this: the standard `stopPropagation` may
//! be missing on objects that cross the boundary from foreign code, in which
//! case only the legacy `cancelBubble` flag is left. [`stop_event_propagation`]
//! hides that difference behind one call.

use dioxus::prelude::*;

/// An event that can be kept from reaching ancestor listeners.
pub trait StopPropagation {
    /// Stop propagation through the standard mechanism.
    ///
    /// Returns `false` when the mechanism is not available on this event, in
    /// which case nothing was done.
    fn try_stop_propagation(&self) -> bool;

    /// Set the legacy cancel-bubble flag.
    fn set_cancel_bubble(&self);
}

/// Stop `event` from propagating, falling back to the cancel-bubble flag
/// when the standard mechanism is unavailable.
pub fn stop_event_propagation<E: StopPropagation + ?Sized>(event: &E) {
    if !event.try_stop_propagation() {
        tracing::trace!("stopPropagation unavailable, setting cancelBubble");
        event.set_cancel_bubble();
    }
}

impl<T: ?Sized + 'static> StopPropagation for Event<T> {
    fn try_stop_propagation(&self) -> bool {
        self.stop_propagation();
        true
    }

    // Dioxus events have a single propagation flag, so the legacy path
    // clears the same one.
    fn set_cancel_bubble(&self) {
        self.stop_propagation();
    }
}

#[cfg(target_arch = "wasm32")]
impl StopPropagation for web_sys::Event {
    fn try_stop_propagation(&self) -> bool {
        let key = wasm_bindgen::JsValue::from_str("stopPropagation");
        let available = js_sys::Reflect::get(self.as_ref(), &key)
            .map(|f| f.is_function())
            .unwrap_or(false);
        if available {
            self.stop_propagation();
        }
        available
    }

    fn set_cancel_bubble(&self) {
        web_sys::Event::set_cancel_bubble(self, true);
    }
}

//! Browser interop helpers
//!
//! # Scoped event listeners
//!
//! The immersive gallery's keyboard shortcuts are document-level listeners,
//! so their lifetime must match the component that wants them. Attaching a
//! `Closure` and calling `forget()` would leak the closure and leave the
//! listener installed forever; instead the closure lives inside a struct
//! whose `Drop` removes the listener. Storing the struct in a `use_hook`
//! ties the subscription to the component: mounted means listening,
//! unmounted (any exit path) means removed.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl DocumentEventListener {
    /// Attach a listener for `event_name` on the document.
    ///
    /// Returns `None` outside a browser context.
    pub fn new(
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let callback: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(callback));

        document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            document,
            event_name,
            callback,
        })
    }

    /// Document-level `keydown` subscription with the event already cast.
    pub fn keydown(mut callback: impl FnMut(web_sys::KeyboardEvent) + 'static) -> Option<Self> {
        Self::new("keydown", move |event| {
            if let Ok(event) = event.dyn_into::<web_sys::KeyboardEvent>() {
                callback(event);
            }
        })
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

//! DOM event listeners whose lifetime follows Rust ownership.
//!
//! A `Closure` handed to `addEventListener` has to outlive the listener.
//! `ScopedListener` owns both and removes the listener on drop, so storing
//! one in reactive storage ties the listener to the component that created
//! it. `ListenerSlot` adds the "only while visible" gating on top.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::LightboxError;

pub struct ScopedListener {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ScopedListener {
    pub fn attach(
        target: &web_sys::EventTarget,
        event: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, LightboxError> {
        let callback: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| LightboxError::Listener {
                event,
                reason: format!("{e:?}"),
            })?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Holds a listener guard only while its owner wants one.
///
/// Generic over the guard so the gating can be exercised without a DOM.
pub struct ListenerSlot<G> {
    guard: Option<G>,
}

impl<G> Default for ListenerSlot<G> {
    fn default() -> Self {
        Self { guard: None }
    }
}

impl<G> ListenerSlot<G> {
    /// Acquire when `active` and empty, release when inactive.
    ///
    /// A failed acquisition leaves the slot empty and is returned so the
    /// caller can log it; the next `sync` retries.
    pub fn sync<E>(&mut self, active: bool, acquire: impl FnOnce() -> Result<G, E>) -> Result<(), E> {
        if !active {
            self.guard = None;
            return Ok(());
        }
        if self.guard.is_none() {
            self.guard = Some(acquire()?);
        }
        Ok(())
    }

    pub fn release(&mut self) {
        self.guard = None;
    }

    #[cfg(test)]
    fn is_held(&self) -> bool {
        self.guard.is_some()
    }
}

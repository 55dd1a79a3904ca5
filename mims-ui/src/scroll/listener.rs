/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, EventTarget};

/// An event listener that is removed when dropped.
pub struct Listener<E: FromWasmAbi + 'static> {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(E)>,
}

impl<E: FromWasmAbi + 'static> Listener<E> {
    /// Registers `callback` for `event`. `passive` must be `false` for
    /// handlers that call `prevent_default`.
    pub fn new<F>(target: EventTarget, event: &'static str, passive: bool, callback: F) -> Option<Self>
    where
        F: FnMut(E) + 'static,
    {
        let callback = Closure::<dyn FnMut(E)>::new(callback);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("Could not listen for {event}: {e:?}");
            return None;
        }
        Some(Self {
            target,
            event,
            callback,
        })
    }
}

impl<E: FromWasmAbi + 'static> Drop for Listener<E> {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

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

//! Wheel-driven smooth scrolling.
//!
//! Wheel input is intercepted and replayed as an eased animation of the
//! window's scroll offset, one `requestAnimationFrame` at a time. Frames are
//! only requested while an animation is running.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{WheelEvent, Window};
use yew::prelude::*;

use super::animation::{wheel_delta_px, ScrollAnimation};
use super::listener::Listener;

struct State {
    duration_ms: f64,
    target: f64,
    animation: Option<ScrollAnimation>,
    frame_id: Option<i32>,
}

struct Shared {
    window: Window,
    state: RefCell<State>,
    frame_callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    wheel: RefCell<Option<Listener<WheelEvent>>>,
}

impl Shared {
    fn max_scroll(&self) -> f64 {
        let content = self
            .window
            .document()
            .and_then(|d| d.document_element())
            .map(|root| root.scroll_height() as f64)
            .unwrap_or(0.0);
        (content - self.viewport_height()).max(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn current(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn animate_to(&self, target: f64) {
        let target = target.clamp(0.0, self.max_scroll());
        let current = self.current();
        {
            let mut state = self.state.borrow_mut();
            state.target = target;
            state.animation = Some(ScrollAnimation::new(current, target, state.duration_ms));
        }
        self.request_frame();
    }

    fn on_wheel(&self, event: WheelEvent) {
        if event.ctrl_key() {
            // pinch-zoom
            return;
        }
        event.prevent_default();
        let delta = wheel_delta_px(event.delta_y(), event.delta_mode(), self.viewport_height());
        let base = {
            let state = self.state.borrow();
            if state.animation.is_some() {
                state.target
            } else {
                self.current()
            }
        };
        self.animate_to(base + delta);
    }

    fn on_frame(&self, now: f64) {
        let keep_going = {
            let mut state = self.state.borrow_mut();
            state.frame_id = None;
            match state.animation.as_mut() {
                Some(animation) => {
                    let (position, done) = animation.position_at(now);
                    self.window.scroll_to_with_x_and_y(0.0, position);
                    if done {
                        state.animation = None;
                    }
                    !done
                }
                None => false,
            }
        };
        if keep_going {
            self.request_frame();
        }
    }

    fn request_frame(&self) {
        if self.state.borrow().frame_id.is_some() {
            return;
        }
        let callback = self.frame_callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.state.borrow_mut().frame_id = Some(id),
            Err(e) => log::warn!("requestAnimationFrame failed: {e:?}"),
        }
    }

    fn destroy(&self) {
        if let Some(id) = self.state.borrow_mut().frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.state.borrow_mut().animation = None;
        self.wheel.borrow_mut().take();
        self.frame_callback.borrow_mut().take();
    }
}

/// Smooth scrolling for the whole window, torn down on drop.
pub struct SmoothScroller {
    shared: Rc<Shared>,
}

impl SmoothScroller {
    /// Starts intercepting wheel input. `None` outside a browser window.
    pub fn new(duration_secs: f64) -> Option<Self> {
        let window = web_sys::window()?;
        let shared = Rc::new(Shared {
            window: window.clone(),
            state: RefCell::new(State {
                duration_ms: duration_secs * 1000.0,
                target: window.scroll_y().unwrap_or(0.0),
                animation: None,
                frame_id: None,
            }),
            frame_callback: RefCell::new(None),
            wheel: RefCell::new(None),
        });

        let weak: Weak<Shared> = Rc::downgrade(&shared);
        *shared.frame_callback.borrow_mut() = Some(Closure::new(move |now: f64| {
            if let Some(shared) = weak.upgrade() {
                shared.on_frame(now);
            }
        }));

        let weak: Weak<Shared> = Rc::downgrade(&shared);
        *shared.wheel.borrow_mut() = Listener::new(
            window.into(),
            "wheel",
            false,
            move |event: WheelEvent| {
                if let Some(shared) = weak.upgrade() {
                    shared.on_wheel(event);
                }
            },
        );

        log::debug!("Smooth scroll enabled ({duration_secs}s)");
        Some(Self { shared })
    }

    /// Eases the window to the given document offset.
    pub fn scroll_to(&self, y: f64) {
        self.shared.animate_to(y);
    }

    /// Whether an eased scroll is still in flight.
    pub fn is_animating(&self) -> bool {
        self.shared.state.borrow().animation.is_some()
    }

    /// Removes the wheel listener and cancels any pending frame.
    pub fn destroy(&self) {
        self.shared.destroy();
    }
}

impl Drop for SmoothScroller {
    fn drop(&mut self) {
        self.shared.destroy();
    }
}

/// Smooth scroller of the current page, if one is running.
#[derive(Clone, Default)]
pub struct ScrollerCtx(pub Option<Rc<SmoothScroller>>);

impl PartialEq for ScrollerCtx {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl ScrollerCtx {
    /// Scrolls to `y`, eased when a scroller is running and with the
    /// browser's native smooth behaviour otherwise.
    pub fn scroll_to(&self, y: f64) {
        match &self.0 {
            Some(scroller) => scroller.scroll_to(y),
            None => {
                if let Some(window) = web_sys::window() {
                    let options = web_sys::ScrollToOptions::new();
                    options.set_top(y);
                    options.set_behavior(web_sys::ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&options);
                }
            }
        }
    }
}

/// Runs a [`SmoothScroller`] for as long as the calling component is
/// mounted.
#[hook]
pub fn use_smooth_scroll(enabled: bool, duration_secs: f64) -> ScrollerCtx {
    let scroller = use_state(ScrollerCtx::default);
    {
        let scroller = scroller.clone();
        use_effect_with(enabled, move |enabled| {
            let instance = if *enabled {
                SmoothScroller::new(duration_secs).map(Rc::new)
            } else {
                None
            };
            scroller.set(ScrollerCtx(instance.clone()));
            move || {
                if let Some(instance) = instance {
                    instance.destroy();
                }
            }
        });
    }
    (*scroller).clone()
}

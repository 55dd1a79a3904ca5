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

//! Scroll handling: smooth wheel scrolling and values derived from the
//! window's scroll position.

pub mod animation;
pub mod listener;
pub mod smooth;

pub use animation::{anchor_offset_target, header_is_scrolled, hero_opacity, hero_parallax};
pub use smooth::{use_smooth_scroll, ScrollerCtx, SmoothScroller};

use listener::Listener;
use yew::prelude::*;

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Re-renders the caller only when `derive(scrollY)` changes.
#[hook]
pub fn use_scroll_derived<T>(derive: fn(f64) -> T) -> T
where
    T: Clone + PartialEq + 'static,
{
    let value = use_state_eq(|| derive(current_scroll_y()));
    {
        let value = value.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().and_then(|window| {
                Listener::new(window.into(), "scroll", true, move |_: web_sys::Event| {
                    value.set(derive(current_scroll_y()));
                })
            });
            move || drop(listener)
        });
    }
    (*value).clone()
}

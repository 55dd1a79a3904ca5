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

use mims_types::MENU;
use yew::prelude::*;

use crate::constants::QUICK_NAV_OFFSET;
use crate::scroll::{anchor_offset_target, current_scroll_y, ScrollerCtx};

/// Scrolls so that the element with `id` sits just below the sticky bars.
fn scroll_to_anchor(scroller: &ScrollerCtx, id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("no section with id {id}");
        return;
    };
    let top = element.get_bounding_client_rect().top();
    scroller.scroll_to(anchor_offset_target(top, current_scroll_y(), QUICK_NAV_OFFSET));
}

/// Sticky bar with one button per category.
#[function_component(QuickNav)]
pub fn quick_nav() -> Html {
    let active = use_state_eq(|| 0usize);
    let scroller = use_context::<ScrollerCtx>().unwrap_or_default();

    html! {
        <div class="quick-nav nav-glass" data-testid="quick-nav">
            <div class="container quick-nav-track">
                { for MENU.iter().enumerate().map(|(index, category)| {
                    let onclick = {
                        let active = active.clone();
                        let scroller = scroller.clone();
                        Callback::from(move |_: MouseEvent| {
                            active.set(index);
                            scroll_to_anchor(&scroller, &category.anchor_id());
                        })
                    };
                    html! {
                        <button key={category.name}
                                class={classes!("quick-nav-button", (*active == index).then_some("active"))}
                                {onclick}
                                data-testid={format!("quick-nav-{}", category.slug())}>
                            { category.name }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

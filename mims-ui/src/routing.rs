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

//! Application route definitions.
//!
//! Kept in its own module so that both the app shell and integration tests
//! can share the same `Route` enum.

use enum_display::EnumDisplay;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::home::Home;
use crate::pages::menu::MenuPage;
use crate::pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq, Debug, EnumDisplay)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/menu")]
    Menu,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    log::debug!("Rendering route {route}");
    match route {
        Route::Home => html! { <Home /> },
        Route::Menu => html! { <MenuPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Resets the window to the top whenever the path changes, so a new page
/// never opens halfway down.
#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let pathname = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    use_effect_with(pathname, |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {}
}

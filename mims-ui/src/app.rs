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

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::config_error::ConfigError;
use crate::constants::site_config;
use crate::context::ThemeProvider;
use crate::routing::{switch, Route, ScrollToTop};

/// Route switch, or the configuration error when `__APP_CONFIG` is unusable.
#[function_component(RouteSwitch)]
fn route_switch() -> Html {
    if let Err(e) = site_config() {
        log::error!("{e}");
        return html! { <ConfigError message={e} /> };
    }

    html! {
        <>
            <ScrollToTop />
            <Switch<Route> render={switch} />
        </>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <div class="app-shell">
                <BrowserRouter>
                    <RouteSwitch />
                </BrowserRouter>
            </div>
        </ThemeProvider>
    }
}

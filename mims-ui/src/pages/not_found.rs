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

use mims_types::BRAND;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::ArrowLeftIcon;
use crate::routing::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found grain" data-testid="not-found">
            <p class="eyebrow">{ BRAND }</p>
            <h1 class="hero-title">{ "404" }</h1>
            <p class="muted">{ "Cette page n'existe pas." }</p>
            <Link<Route> to={Route::Home} classes={classes!("btn-outline-gold")}>
                <ArrowLeftIcon class={classes!("icon-4", "mr-2")} />
                { "Retour à l'accueil" }
            </Link<Route>>
        </div>
    }
}

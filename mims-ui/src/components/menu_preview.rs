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

use mims_types::{format_price, MENU_HIGHLIGHTS};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::ArrowRightIcon;
use crate::components::reveal::{Reveal, RevealVariant};
use crate::routing::Route;

/// Three signature dishes with a link to the full card.
#[function_component(MenuPreview)]
pub fn menu_preview() -> Html {
    html! {
        <section id="menu" class="section" data-testid="menu-section">
            <div class="container">
                <div class="section-heading">
                    <Reveal><p class="eyebrow">{ "Nos Saveurs" }</p></Reveal>
                    <Reveal delay_ms={100}><h2 class="section-title">{ "Le Menu" }</h2></Reveal>
                    <Reveal delay_ms={200}><div class="gold-line centered" /></Reveal>
                </div>

                <div class="grid-3">
                    { for MENU_HIGHLIGHTS.iter().enumerate().map(|(index, dish)| html! {
                        <Reveal key={dish.name} delay_ms={index as u32 * 150}
                                class={classes!("glass-card", "highlight-card")}
                                test_id={AttrValue::from(format!("menu-highlight-{index}"))}>
                            <div class="img-hover-zoom highlight-image">
                                <img src={dish.image} alt={dish.name} />
                            </div>
                            <div class="card-body">
                                <p class="card-category">{ dish.category }</p>
                                <h3 class="card-title">{ dish.name }</h3>
                                <p class="card-price accent">{ format_price(dish.price) }</p>
                            </div>
                        </Reveal>
                    }) }
                </div>

                <Reveal variant={RevealVariant::Fade} class={classes!("centered-row")}>
                    <Link<Route> to={Route::Menu} classes={classes!("btn-outline-gold")}>
                        <span data-testid="view-full-menu-btn">{ "Voir le Menu Complet" }</span>
                        <ArrowRightIcon class={classes!("icon-4", "ml-2")} />
                    </Link<Route>>
                </Reveal>
            </div>
        </section>
    }
}

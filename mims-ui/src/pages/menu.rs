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

//! The full menu: every category with its dishes and a reservation call
//! to action.

use mims_types::{BRAND, LOCATIONS, MENU};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::{copyright, current_year};
use crate::components::hero::HERO_IMAGE;
use crate::components::icons::{ChevronDownIcon, PhoneIcon, WhatsAppIcon};
use crate::components::menu::{CategorySection, MenuHeader, QuickNav};
use crate::components::reveal::{Reveal, RevealVariant};
use crate::constants::{reserve_url, smooth_scroll_enabled, SMOOTH_SCROLL_DURATION};
use crate::routing::Route;
use crate::scroll::{use_smooth_scroll, ScrollerCtx};

#[function_component(MenuHero)]
fn menu_hero() -> Html {
    html! {
        <div class="menu-hero">
            <div class="menu-hero-background" style={format!("background-image: url('{HERO_IMAGE}');")} />
            <div class="menu-hero-gradient" />
            <div class="menu-hero-content">
                <p class="eyebrow hero-rise">{ "Nos Saveurs" }</p>
                <h1 class="hero-title hero-rise delay-200">{ "Le Menu" }</h1>
                <p class="muted hero-rise delay-400">{ "Découvrez notre sélection de plats préparés avec passion" }</p>
            </div>
            <a href="#menu-content" class="scroll-indicator desktop-only" aria-label="Voir le menu">
                <ChevronDownIcon class={classes!("icon-8", "text-gold")} />
            </a>
        </div>
    }
}

#[function_component(MenuCta)]
fn menu_cta() -> Html {
    let main = &LOCATIONS[0];

    html! {
        <section class="section section-card" data-testid="menu-cta">
            <div class="container narrow centered">
                <Reveal variant={RevealVariant::Fade}><p class="eyebrow">{ "Envie de Goûter?" }</p></Reveal>
                <Reveal><h2 class="section-title">{ "Réservez Votre Table" }</h2></Reveal>
                <Reveal delay_ms={200} class={classes!("hero-actions")}>
                    <a href={reserve_url()} target="_blank" rel="noopener noreferrer" class="btn-gold">
                        <WhatsAppIcon class={classes!("icon-5")} />
                        { "Réserver sur WhatsApp" }
                    </a>
                    <a href={main.tel_href()} class="btn-outline-gold">
                        <PhoneIcon class={classes!("icon-4", "mr-2")} />
                        { "Appeler" }
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(MenuPage)]
pub fn menu_page() -> Html {
    let scroller = use_smooth_scroll(smooth_scroll_enabled(), SMOOTH_SCROLL_DURATION);

    html! {
        <ContextProvider<ScrollerCtx> context={scroller}>
            <div class="grain" data-testid="menu-page">
                <MenuHeader />
                <MenuHero />
                <QuickNav />
                <div id="menu-content">
                    { for MENU.iter().enumerate().map(|(index, category)| html! {
                        <CategorySection key={category.name} {category} {index} />
                    }) }
                </div>
                <MenuCta />
                <footer class="site-footer compact">
                    <div class="container footer-bottom">
                        <Link<Route> to={Route::Home} classes={classes!("footer-brand")}>{ BRAND }</Link<Route>>
                        <p class="fine-print">{ copyright(current_year()) }</p>
                    </div>
                </footer>
            </div>
        </ContextProvider<ScrollerCtx>>
    }
}

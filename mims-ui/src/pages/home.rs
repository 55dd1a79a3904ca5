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

use crate::components::about::About;
use crate::components::chef::Chef;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::locations::Locations;
use crate::components::menu_preview::MenuPreview;
use crate::components::reservation_form::ReservationForm;
use crate::components::services::Services;
use crate::constants::{smooth_scroll_enabled, SMOOTH_SCROLL_DURATION};
use crate::scroll::{use_smooth_scroll, ScrollerCtx};

/// Landing page.
#[function_component(Home)]
pub fn home() -> Html {
    let scroller = use_smooth_scroll(smooth_scroll_enabled(), SMOOTH_SCROLL_DURATION);

    html! {
        <ContextProvider<ScrollerCtx> context={scroller}>
            <div class="grain" data-testid="home-page">
                <Header />
                <main>
                    <Hero />
                    <About />
                    <Chef />
                    <MenuPreview />
                    <Services />
                    <Locations />
                    <ReservationForm />
                </main>
                <Footer />
            </div>
        </ContextProvider<ScrollerCtx>>
    }
}

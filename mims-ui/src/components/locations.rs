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

use mims_types::locations::OPENING_HOURS;
use mims_types::LOCATIONS;
use yew::prelude::*;

use crate::components::icons::{ClockIcon, MapPinIcon, PhoneIcon};
use crate::components::reveal::Reveal;

#[function_component(Locations)]
pub fn locations() -> Html {
    html! {
        <section id="locations" class="section" data-testid="locations-section">
            <div class="container">
                <div class="section-heading">
                    <Reveal><p class="eyebrow">{ "Où Nous Trouver" }</p></Reveal>
                    <Reveal delay_ms={100}><h2 class="section-title">{ "Nos Adresses" }</h2></Reveal>
                </div>
                <div class="grid-2">
                    { for LOCATIONS.iter().enumerate().map(|(index, location)| {
                        let name = location.display_name();
                        html! {
                            <Reveal key={location.id.key()} delay_ms={index as u32 * 200}
                                    class={classes!("location-card")}
                                    test_id={AttrValue::from(format!("location-card-{}", location.slug()))}>
                                <div class="img-hover-zoom location-image">
                                    <img src={location.image} alt={name.clone()} />
                                </div>
                                <div class="card-body">
                                    <h3 class="card-title">{ name }</h3>
                                    <p class="contact-line">
                                        <MapPinIcon class={classes!("icon-5", "text-gold")} />
                                        { location.address }
                                    </p>
                                    <a href={location.tel_href()} class="contact-line link">
                                        <PhoneIcon class={classes!("icon-5", "text-gold")} />
                                        { location.phone }
                                    </a>
                                    <p class="contact-line">
                                        <ClockIcon class={classes!("icon-5", "text-gold")} />
                                        { OPENING_HOURS }
                                    </p>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

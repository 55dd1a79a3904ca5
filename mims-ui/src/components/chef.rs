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

use crate::components::icons::AwardIcon;
use crate::components::reveal::{Reveal, RevealVariant};

pub const CHEF_IMAGE: &str = "images/IMG_0318.PNG";

#[function_component(Chef)]
pub fn chef() -> Html {
    html! {
        <section id="chef" class="section section-alt" data-testid="chef-section">
            <div class="container two-columns">
                <div class="chef-text">
                    <Reveal><p class="eyebrow">{ "Le Propriétaire" }</p></Reveal>
                    <Reveal delay_ms={100}><h2 class="section-title">{ "Chef Momo" }</h2></Reveal>
                    <Reveal delay_ms={200} class={classes!("chef-award")}>
                        <AwardIcon class={classes!("icon-6", "text-gold")} />
                        <span class="accent text-gold">{ "9ème Mondial en Pâtisserie" }</span>
                    </Reveal>
                    <Reveal delay_ms={300}>
                        <p class="lead">
                            { "Momo est l'un des meilleurs pâtissiers au monde. Sa passion pour l'excellence \
                               et son dévouement à l'art culinaire l'ont mené au sommet de la gastronomie internationale." }
                        </p>
                    </Reveal>
                    <Reveal delay_ms={400} class={classes!("glass-card", "chef-quote")}>
                        <blockquote class="accent">
                            { "\"En 2026, Momo a dirigé l'équipe au Concours Mondial de la Pâtisserie \
                               organisé en France et s'est classé 9ème mondial, faisant de lui le \
                               meilleur pâtissier du continent africain.\"" }
                        </blockquote>
                    </Reveal>
                    <Reveal delay_ms={500}>
                        <p class="lead">
                            { "Son expertise et sa créativité se retrouvent dans chaque dessert servi chez MIMS." }
                        </p>
                    </Reveal>
                </div>
                <Reveal variant={RevealVariant::FromLeft} class={classes!("chef-image-wrapper")}>
                    <img src={CHEF_IMAGE} alt="Chef Momo - Propriétaire de MIMS" class="chef-image" />
                </Reveal>
            </div>
        </section>
    }
}

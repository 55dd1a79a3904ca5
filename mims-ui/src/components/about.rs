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

use mims_types::FOUNDED;
use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealVariant};

pub const INTERIOR_IMAGE: &str = "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800";

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section" data-testid="about-section">
            <div class="container two-columns">
                <div>
                    <Reveal><p class="eyebrow">{ "Notre Histoire" }</p></Reveal>
                    <Reveal delay_ms={100}>
                        <h2 class="section-title">{ "Une Expérience" }<br />{ "Culinaire Unique" }</h2>
                    </Reveal>
                    <Reveal delay_ms={200}><div class="gold-line" /></Reveal>
                    <Reveal delay_ms={300}>
                        <p class="lead">
                            { format!("Depuis {FOUNDED}, MIMS a combiné élégance, ingrédients de qualité et saveurs raffinées \
                               pour créer une expérience culinaire unique à Dakar. Notre restaurant est devenu \
                               une référence pour ceux qui recherchent une cuisine moderne dans un cadre chic et chaleureux.") }
                        </p>
                    </Reveal>
                    <Reveal delay_ms={400}>
                        <p class="lead">
                            { "Que ce soit pour un déjeuner d'affaires, un dîner en amoureux ou un moment entre amis, \
                               MIMS vous accueille dans une atmosphère contemporaine où chaque détail est pensé \
                               pour votre confort." }
                        </p>
                    </Reveal>
                </div>
                <Reveal variant={RevealVariant::FromRight} class={classes!("img-hover-zoom", "rounded")}>
                    <img src={INTERIOR_IMAGE} alt="Intérieur élégant du restaurant MIMS" class="about-image" />
                </Reveal>
            </div>
        </section>
    }
}

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

use crate::components::icons::{LeafIcon, ShoppingBagIcon, TvIcon, WineIcon};
use crate::components::reveal::Reveal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Wine,
    Leaf,
    Tv,
    ShoppingBag,
}

impl ServiceIcon {
    fn render(self) -> Html {
        let class = classes!("icon-8");
        match self {
            ServiceIcon::Wine => html! { <WineIcon {class} /> },
            ServiceIcon::Leaf => html! { <LeafIcon {class} /> },
            ServiceIcon::Tv => html! { <TvIcon {class} /> },
            ServiceIcon::ShoppingBag => html! { <ShoppingBagIcon {class} /> },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        icon: ServiceIcon::Wine,
        title: "Cocktails d'Exception",
        description: "Une carte de cocktails classiques et signatures.",
    },
    Service {
        icon: ServiceIcon::Leaf,
        title: "Options Végétariennes",
        description: "Des plats savoureux pour tous les régimes.",
    },
    Service {
        icon: ServiceIcon::Tv,
        title: "Diffusion Sports",
        description: "Événements sportifs dans un cadre premium.",
    },
    Service {
        icon: ServiceIcon::ShoppingBag,
        title: "Sur Place & À Emporter",
        description: "Dégustez sur place ou emportez.",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section section-alt" data-testid="services-section">
            <div class="container">
                <div class="section-heading">
                    <Reveal><p class="eyebrow">{ "Ce Que Nous Offrons" }</p></Reveal>
                    <Reveal delay_ms={100}><h2 class="section-title">{ "Nos Services" }</h2></Reveal>
                </div>
                <div class="grid-4">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal key={service.title} delay_ms={index as u32 * 100}
                                class={classes!("service-card")}
                                test_id={AttrValue::from(format!("service-card-{index}"))}>
                            <div class="service-icon">{ service.icon.render() }</div>
                            <h3 class="card-title">{ service.title }</h3>
                            <p class="muted">{ service.description }</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

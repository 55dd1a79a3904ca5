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

use mims_types::{format_price, MenuItem};
use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealVariant};

#[derive(Properties, PartialEq)]
pub struct MenuItemCardProps {
    pub item: &'static MenuItem,
}

#[function_component(MenuItemCard)]
pub fn menu_item_card(props: &MenuItemCardProps) -> Html {
    let item = props.item;

    html! {
        <Reveal variant={RevealVariant::Nudge} class={classes!("menu-item")}
                test_id={AttrValue::from(format!("menu-card-{}", item.slug()))}>
            <div class="menu-item-text">
                <h3 class="menu-item-name">{ item.name }</h3>
                <p class="menu-item-description">{ item.description }</p>
            </div>
            <div class="menu-item-price">
                if let Some(note) = item.note {
                    <span class="menu-item-note">{ note }</span>
                }
                <span class="accent text-gold">{ format_price(item.price) }</span>
            </div>
        </Reveal>
    }
}

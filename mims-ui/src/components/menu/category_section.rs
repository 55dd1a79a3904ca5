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

use mims_types::MenuCategory;
use yew::prelude::*;

use crate::components::menu::MenuItemCard;
use crate::components::reveal::{Reveal, RevealVariant};

#[derive(Properties, PartialEq)]
pub struct CategorySectionProps {
    pub category: &'static MenuCategory,
    /// Position in the menu; odd sections mirror the layout.
    pub index: usize,
}

#[function_component(CategorySection)]
pub fn category_section(props: &CategorySectionProps) -> Html {
    let category = props.category;
    let even = props.index % 2 == 0;
    let image_variant = if even {
        RevealVariant::FromLeft
    } else {
        RevealVariant::FromRight
    };

    html! {
        <section id={category.anchor_id()}
                 class={classes!("category-section", (!even).then_some("section-alt"))}
                 data-testid={format!("section-{}", category.slug())}>
            <div class={classes!("container", "category-grid", (!even).then_some("mirrored"))}>
                <Reveal variant={image_variant} class={classes!("category-visual")}>
                    <div class="category-images">
                        <div class="img-hover-zoom rounded">
                            <img src={category.images.main} alt={category.name} class="category-main-image" />
                        </div>
                        <div class="category-detail-image">
                            <img src={category.images.secondary} alt={format!("{} detail", category.name)} />
                        </div>
                    </div>
                    <div class="category-heading">
                        <h2 class="section-title">{ category.name }</h2>
                        <div class="gold-line" />
                    </div>
                </Reveal>
                <div class="category-items">
                    { for category.items.iter().map(|item| html! {
                        <MenuItemCard key={item.name} {item} />
                    }) }
                </div>
            </div>
        </section>
    }
}

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

//! Line icons (Lucide outlines) used across the site.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
}

fn outline(class: &Classes, body: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={classes!("icon", class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { body }
        </svg>
    }
}

#[function_component(PhoneIcon)]
pub fn phone_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
        },
    )
}

#[function_component(MapPinIcon)]
pub fn map_pin_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
                <circle cx="12" cy="10" r="3" />
            </>
        },
    )
}

#[function_component(ClockIcon)]
pub fn clock_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <polyline points="12 6 12 12 16 14" />
            </>
        },
    )
}

#[function_component(InstagramIcon)]
pub fn instagram_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                <line x1="17.5" y1="6.5" x2="17.51" y2="6.5" />
            </>
        },
    )
}

#[function_component(WineIcon)]
pub fn wine_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="M8 22h8" />
                <path d="M7 10h10" />
                <path d="M12 15v7" />
                <path d="M12 15a5 5 0 0 0 5-5c0-2-.5-4-2-8H9c-1.5 4-2 6-2 8a5 5 0 0 0 5 5Z" />
            </>
        },
    )
}

#[function_component(LeafIcon)]
pub fn leaf_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z" />
                <path d="M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12" />
            </>
        },
    )
}

#[function_component(TvIcon)]
pub fn tv_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <rect x="2" y="7" width="20" height="15" rx="2" ry="2" />
                <polyline points="17 2 12 7 7 2" />
            </>
        },
    )
}

#[function_component(ShoppingBagIcon)]
pub fn shopping_bag_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z" />
                <path d="M3 6h18" />
                <path d="M16 10a4 4 0 0 1-8 0" />
            </>
        },
    )
}

#[function_component(AwardIcon)]
pub fn award_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <circle cx="12" cy="8" r="6" />
                <path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" />
            </>
        },
    )
}

#[function_component(ChevronDownIcon)]
pub fn chevron_down_icon(props: &IconProps) -> Html {
    outline(&props.class, html! { <path d="m6 9 6 6 6-6" /> })
}

#[function_component(MenuIcon)]
pub fn menu_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <line x1="4" y1="6" x2="20" y2="6" />
                <line x1="4" y1="12" x2="20" y2="12" />
                <line x1="4" y1="18" x2="20" y2="18" />
            </>
        },
    )
}

#[function_component(CloseIcon)]
pub fn close_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
    )
}

#[function_component(SunIcon)]
pub fn sun_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2" />
                <path d="M12 20v2" />
                <path d="m4.93 4.93 1.41 1.41" />
                <path d="m17.66 17.66 1.41 1.41" />
                <path d="M2 12h2" />
                <path d="M20 12h2" />
                <path d="m6.34 17.66-1.41 1.41" />
                <path d="m19.07 4.93-1.41 1.41" />
            </>
        },
    )
}

#[function_component(MoonIcon)]
pub fn moon_icon(props: &IconProps) -> Html {
    outline(&props.class, html! { <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" /> })
}

#[function_component(ArrowRightIcon)]
pub fn arrow_right_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="M5 12h14" />
                <path d="m12 5 7 7-7 7" />
            </>
        },
    )
}

#[function_component(ArrowLeftIcon)]
pub fn arrow_left_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="m12 19-7-7 7-7" />
                <path d="M19 12H5" />
            </>
        },
    )
}

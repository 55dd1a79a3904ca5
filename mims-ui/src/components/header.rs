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

//! Landing page header with its mobile overlay.

use mims_types::BRAND;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{CloseIcon, MenuIcon};
use crate::components::theme_toggle::ThemeToggle;
use crate::constants::reserve_url;
use crate::routing::Route;
use crate::scroll::{header_is_scrolled, use_scroll_derived};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// In-page anchors of the landing page, in scroll order.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        href: "#about",
        label: "À Propos",
    },
    NavLink {
        href: "#chef",
        label: "Le Chef",
    },
    NavLink {
        href: "#menu",
        label: "Menu",
    },
    NavLink {
        href: "#services",
        label: "Services",
    },
    NavLink {
        href: "#locations",
        label: "Adresses",
    },
];

/// Delay between two entries of the mobile overlay.
pub const MOBILE_STAGGER_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Full-screen navigation overlay for small screens.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="mobile-menu-overlay" data-testid="mobile-nav">
            <div class="mobile-menu-bar">
                <span class="logo">{ BRAND }</span>
                <button class="icon-button" onclick={close} aria-label="Fermer le menu" data-testid="mobile-menu-close">
                    <CloseIcon class={classes!("icon-6")} />
                </button>
            </div>
            <nav class="mobile-menu-links">
                { props.children.clone() }
            </nav>
        </div>
    }
}

/// Inline style staggering the `index`-th entry of an overlay.
pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {}ms;", index as u32 * MOBILE_STAGGER_MS)
}

#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = use_scroll_derived(header_is_scrolled);
    let menu_open = use_state(|| false);
    let reserve = reserve_url();

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };
    let close_on_click = {
        let close_menu = close_menu.clone();
        Callback::from(move |_: MouseEvent| close_menu.emit(()))
    };

    html! {
        <>
            <header class={classes!("site-header", scrolled.then_some("nav-glass"))} data-testid="main-header">
                <div class="container header-bar">
                    <Link<Route> to={Route::Home} classes={classes!("logo")}>
                        <span data-testid="logo">{ BRAND }</span>
                    </Link<Route>>

                    <nav class="desktop-nav" data-testid="desktop-nav">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.href} href={link.href} class="nav-link">{ link.label }</a>
                        }) }
                    </nav>

                    <div class="header-actions desktop-only">
                        <ThemeToggle />
                        <a href={reserve.clone()} target="_blank" rel="noopener noreferrer"
                           class="btn-gold" data-testid="header-reserve-btn">
                            { "Réserver" }
                        </a>
                    </div>

                    <div class="header-actions mobile-only">
                        <ThemeToggle />
                        <button class="icon-button" onclick={open_menu} aria-label="Ouvrir le menu"
                                data-testid="mobile-menu-toggle">
                            <MenuIcon class={classes!("icon-6")} />
                        </button>
                    </div>
                </div>
            </header>

            if *menu_open {
                <MobileMenu on_close={close_menu}>
                    { for NAV_LINKS.iter().enumerate().map(|(index, link)| html! {
                        <a key={link.href} href={link.href} class="mobile-menu-link"
                           style={stagger_style(index)} onclick={close_on_click.clone()}>
                            { link.label }
                        </a>
                    }) }
                    <a href={reserve.clone()} target="_blank" rel="noopener noreferrer"
                       class="btn-gold mobile-menu-link" style={stagger_style(NAV_LINKS.len())}
                       onclick={close_on_click.clone()}>
                        { "Réserver une Table" }
                    </a>
                </MobileMenu>
            }
        </>
    }
}

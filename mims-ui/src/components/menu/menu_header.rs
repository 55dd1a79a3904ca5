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

use mims_types::{BRAND, LOCATIONS};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::{stagger_style, MobileMenu};
use crate::components::icons::{ArrowLeftIcon, MenuIcon, PhoneIcon};
use crate::components::theme_toggle::ThemeToggle;
use crate::constants::reserve_url;
use crate::routing::Route;

/// Always-opaque header of the menu page.
#[function_component(MenuHeader)]
pub fn menu_header() -> Html {
    let menu_open = use_state(|| false);
    let reserve = reserve_url();
    let main = &LOCATIONS[0];

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
            <header class="site-header nav-glass" data-testid="menu-header">
                <div class="container header-bar">
                    <div class="header-start">
                        <Link<Route> to={Route::Home} classes={classes!("back-link")}>
                            <ArrowLeftIcon class={classes!("icon-5")} />
                            <span class="desktop-only" data-testid="back-home">{ "Retour" }</span>
                        </Link<Route>>
                        <Link<Route> to={Route::Home} classes={classes!("logo")}>
                            <span data-testid="menu-logo">{ BRAND }</span>
                        </Link<Route>>
                    </div>

                    <div class="header-actions desktop-only">
                        <a href={main.tel_href()} class="header-phone">
                            <PhoneIcon class={classes!("icon-4")} />{ main.phone }
                        </a>
                        <ThemeToggle />
                        <a href={reserve.clone()} target="_blank" rel="noopener noreferrer" class="btn-gold">
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
                    <a href={main.tel_href()} class="mobile-menu-link" style={stagger_style(0)}>
                        <PhoneIcon class={classes!("icon-5")} />{ main.phone }
                    </a>
                    <a href={reserve.clone()} target="_blank" rel="noopener noreferrer"
                       class="btn-gold mobile-menu-link" style={stagger_style(1)}
                       onclick={close_on_click}>
                        { "Réserver une Table" }
                    </a>
                </MobileMenu>
            }
        </>
    }
}

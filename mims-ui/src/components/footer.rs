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

use mims_types::{BRAND, FOUNDED, LOCATIONS};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{ClockIcon, InstagramIcon, PhoneIcon};
use crate::constants::{instagram_handle, instagram_url};
use crate::routing::Route;

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn copyright(year: u32) -> String {
    format!("© {year} {BRAND} Restaurant")
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer" data-testid="footer">
            <div class="container">
                <div class="grid-3 footer-columns">
                    <div>
                        <h3 class="footer-brand">{ BRAND }</h3>
                        <p class="muted">{ "Cuisine Élégante & Moderne" }<br />{ format!("Depuis {FOUNDED}") }</p>
                    </div>
                    <div>
                        <h4 class="eyebrow">{ "Contact" }</h4>
                        <div class="stack">
                            { for LOCATIONS.iter().map(|location| html! {
                                <a key={location.id.key()} href={location.tel_href()} class="footer-link">
                                    <PhoneIcon class={classes!("icon-4")} />{ location.phone }
                                </a>
                            }) }
                            <a href={instagram_url()} target="_blank" rel="noopener noreferrer" class="footer-link">
                                <InstagramIcon class={classes!("icon-4")} />{ format!("@{}", instagram_handle()) }
                            </a>
                        </div>
                    </div>
                    <div>
                        <h4 class="eyebrow">{ "Horaires" }</h4>
                        <div class="stack muted">
                            <p class="contact-line"><ClockIcon class={classes!("icon-4")} />{ "Ouvert tous les jours" }</p>
                            <p class="indent">{ "Fermeture à 00:00" }</p>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p class="fine-print">{ copyright(current_year()) }</p>
                    <div class="footer-links">
                        <a href="#about" class="fine-link">{ "À Propos" }</a>
                        <Link<Route> to={Route::Menu} classes={classes!("fine-link")}>{ "Menu" }</Link<Route>>
                        <a href="#reservation" class="fine-link">{ "Réserver" }</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line() {
        assert_eq!(copyright(2026), "© 2026 MIMS Restaurant");
    }
}

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

use crate::components::icons::{MoonIcon, SunIcon};
use crate::context::{ThemeAction, ThemeCtx};

/// Sun in dark mode (switch to light), moon in light mode.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let Some(theme) = use_context::<ThemeCtx>() else {
        log::warn!("ThemeToggle rendered outside of ThemeProvider");
        return html! {};
    };
    let is_dark = theme.theme.is_dark();

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.dispatch(ThemeAction::Toggle))
    };
    let label = if is_dark {
        "Passer au thème clair"
    } else {
        "Passer au thème sombre"
    };

    html! {
        <button class="theme-toggle" {onclick} aria-label={label} data-testid="theme-toggle">
            if is_dark {
                <span class="theme-icon theme-icon-sun" key="sun">
                    <SunIcon class={classes!("icon-5", "text-gold")} />
                </span>
            } else {
                <span class="theme-icon theme-icon-moon" key="moon">
                    <MoonIcon class={classes!("icon-5", "text-gold")} />
                </span>
            }
        </button>
    }
}

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

use mims_types::{BRAND, FOUNDED};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{ArrowRightIcon, ChevronDownIcon, PhoneIcon};
use crate::constants::reserve_url;
use crate::routing::Route;
use crate::scroll::{hero_opacity, hero_parallax, use_scroll_derived};

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=1920";

/// Background offset and content opacity for a scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub translate_y: f64,
    pub opacity: f64,
}

pub fn hero_frame(scroll_y: f64) -> HeroFrame {
    HeroFrame {
        translate_y: hero_parallax(scroll_y),
        opacity: hero_opacity(scroll_y),
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let frame = use_scroll_derived(hero_frame);

    let background_style = format!(
        "background-image: url('{HERO_IMAGE}'); transform: translateY({:.1}px);",
        frame.translate_y
    );
    let content_style = format!("opacity: {:.3};", frame.opacity);

    html! {
        <section class="hero" data-testid="hero-section">
            <div class="hero-background" style={background_style} />
            <div class="hero-overlay" />
            <div class="hero-content" style={content_style}>
                <p class="eyebrow hero-rise">{ format!("Depuis {FOUNDED} • Dakar, Sénégal") }</p>
                <h1 class="hero-title hero-rise delay-200">{ BRAND }</h1>
                <p class="hero-tagline hero-rise delay-400">{ "Cuisine Élégante & Moderne" }</p>
                <div class="hero-actions hero-rise delay-600">
                    <Link<Route> to={Route::Menu} classes={classes!("btn-gold")}>
                        <span data-testid="hero-menu-btn">{ "Découvrir le Menu" }</span>
                        <ArrowRightIcon class={classes!("icon-4", "ml-2")} />
                    </Link<Route>>
                    <a href={reserve_url()} target="_blank" rel="noopener noreferrer"
                       class="btn-outline-gold" data-testid="hero-reserve-btn">
                        <PhoneIcon class={classes!("icon-4", "mr-2")} />
                        { "Réserver" }
                    </a>
                </div>
            </div>
            <a href="#about" class="scroll-indicator" aria-label="Défiler vers la suite">
                <ChevronDownIcon class={classes!("icon-8", "text-gold")} />
            </a>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_at_top_is_untouched() {
        assert_eq!(
            hero_frame(0.0),
            HeroFrame {
                translate_y: 0.0,
                opacity: 1.0
            }
        );
    }

    #[test]
    fn frame_settles_past_the_fold() {
        assert_eq!(hero_frame(2_000.0), hero_frame(800.0));
        assert_eq!(hero_frame(800.0).opacity, 0.0);
        assert_eq!(hero_frame(800.0).translate_y, 150.0);
    }
}

// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration test for the landing page.
//
// Mounts the real Home component and checks the landmarks a visitor would
// look for: every section in order, the navigation, and the WhatsApp links
// built from the runtime config.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{
    by_test_id, cleanup, count, create_mount_point, inject_app_config,
    inject_malformed_app_config, remove_app_config, test_ids,
};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew_router::prelude::*;

use mims_ui::app::App;
use mims_ui::context::{Theme, ThemeProvider};
use mims_ui::pages::home::Home;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

// ---------------------------------------------------------------------------
// Wrapper component: mirrors App's providers without the route switch,
// so we always render Home regardless of the test-runner's URL path.
// ---------------------------------------------------------------------------

#[function_component(HomeTestWrapper)]
fn home_test_wrapper() -> Html {
    html! {
        <ThemeProvider initial={Some(Theme::Dark)}>
            <BrowserRouter>
                <Home />
            </BrowserRouter>
        </ThemeProvider>
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn home_renders_sections_in_order() {
    inject_app_config("221700000000");

    let mount = create_mount_point();
    yew::Renderer::<HomeTestWrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert_eq!(
        test_ids(&mount, "main > section"),
        vec![
            "hero-section",
            "about-section",
            "chef-section",
            "menu-section",
            "services-section",
            "locations-section",
            "reservation-section",
        ]
    );
    assert!(by_test_id(&mount, "main-header").is_some(), "header missing");
    assert!(by_test_id(&mount, "footer").is_some(), "footer missing");

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Depuis 2009 • Dakar, Sénégal"));
    assert!(text.contains("Cuisine Élégante & Moderne"));
    assert!(text.contains("Chef Momo"));
    assert!(text.contains("9ème Mondial en Pâtisserie"));

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn home_lists_highlights_services_and_locations() {
    inject_app_config("221700000000");

    let mount = create_mount_point();
    yew::Renderer::<HomeTestWrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert_eq!(count(&mount, "[data-testid^=\"menu-highlight-\"]"), 3);
    assert_eq!(count(&mount, "[data-testid^=\"service-card-\"]"), 4);
    assert!(by_test_id(&mount, "location-card-dakar").is_some());
    assert!(by_test_id(&mount, "location-card-ngor-virage").is_some());

    let highlight = by_test_id(&mount, "menu-highlight-0").unwrap();
    let text = highlight.text_content().unwrap_or_default();
    assert!(text.contains("Filet de Bœuf"), "{text}");
    assert!(text.contains("12\u{202F}000 FCFA"), "{text}");

    let dakar = by_test_id(&mount, "location-card-dakar").unwrap();
    let phone = dakar.query_selector("a[href^=\"tel:\"]").unwrap().unwrap();
    assert_eq!(phone.get_attribute("href").as_deref(), Some("tel:+221338227075"));

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn header_nav_and_reserve_links_follow_the_config() {
    inject_app_config("221700000000");

    let mount = create_mount_point();
    yew::Renderer::<HomeTestWrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let nav = by_test_id(&mount, "desktop-nav").unwrap();
    let nav_text = nav.text_content().unwrap_or_default();
    for label in ["À Propos", "Le Chef", "Menu", "Services", "Adresses"] {
        assert!(nav_text.contains(label), "nav link {label} missing");
    }

    for id in ["header-reserve-btn", "hero-reserve-btn"] {
        let href = by_test_id(&mount, id).unwrap().get_attribute("href").unwrap();
        assert!(
            href.starts_with("https://wa.me/221700000000?text=Bonjour"),
            "{id}: {href}"
        );
    }

    let instagram = mount
        .query_selector("a[href=\"https://instagram.com/mims_test\"]")
        .unwrap();
    assert!(instagram.is_some(), "footer instagram link should use the config");

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn mobile_menu_opens_and_closes() {
    inject_app_config("221700000000");

    let mount = create_mount_point();
    yew::Renderer::<HomeTestWrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(by_test_id(&mount, "mobile-nav").is_none());
    support::click(&by_test_id(&mount, "mobile-menu-toggle").unwrap());
    sleep(Duration::ZERO).await;

    let overlay = by_test_id(&mount, "mobile-nav").expect("overlay should open");
    assert_eq!(overlay.query_selector_all("a").unwrap().length(), 6);

    support::click(&by_test_id(&mount, "mobile-menu-close").unwrap());
    sleep(Duration::ZERO).await;
    assert!(by_test_id(&mount, "mobile-nav").is_none());

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn app_shows_config_error_for_malformed_config() {
    inject_malformed_app_config();

    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let error = mount
        .query_selector(".error-container")
        .unwrap()
        .expect("malformed config should render the error screen");
    let text = error.text_content().unwrap_or_default();
    assert!(text.contains("__APP_CONFIG"), "{text}");

    cleanup(&mount);
    remove_app_config();
}

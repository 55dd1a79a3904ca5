// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration test for the full menu page: one section and one quick-nav
// button per category, a card per dish, and the active button following
// clicks.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use mims_types::MENU;
use support::{by_test_id, cleanup, count, create_mount_point, inject_app_config, remove_app_config, test_ids};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew_router::prelude::*;

use mims_ui::context::{Theme, ThemeProvider};
use mims_ui::pages::menu::MenuPage;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(MenuTestWrapper)]
fn menu_test_wrapper() -> Html {
    html! {
        <ThemeProvider initial={Some(Theme::Dark)}>
            <BrowserRouter>
                <MenuPage />
            </BrowserRouter>
        </ThemeProvider>
    }
}

#[wasm_bindgen_test]
async fn menu_page_renders_every_category() {
    inject_app_config("221700000000");

    let mount = create_mount_point();
    yew::Renderer::<MenuTestWrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(by_test_id(&mount, "menu-page").is_some());
    assert!(by_test_id(&mount, "menu-header").is_some());
    assert!(by_test_id(&mount, "menu-cta").is_some());

    assert_eq!(
        test_ids(&mount, "#menu-content > section"),
        vec![
            "section-salades",
            "section-burgers",
            "section-sandwichs",
            "section-pâtes",
            "section-pizzas",
            "section-plats",
            "section-omelettes",
            "section-desserts",
            "section-boissons-&-cocktails",
        ]
    );
    assert!(mount.query_selector("#category-plats").unwrap().is_some());

    let dishes: usize = MENU.iter().map(|category| category.items.len()).sum();
    assert_eq!(count(&mount, "[data-testid^=\"menu-card-\"]") as usize, dishes);

    let filet = by_test_id(&mount, "menu-card-filet-de-bœuf").expect("filet card");
    let text = filet.text_content().unwrap_or_default();
    assert!(text.contains("12\u{202F}000 FCFA"), "{text}");

    let drinks = by_test_id(&mount, "section-boissons-&-cocktails").unwrap();
    let drinks_text = drinks.text_content().unwrap_or_default();
    assert!(drinks_text.contains("à partir de"), "cocktail note missing");

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn odd_sections_are_mirrored() {
    inject_app_config("221700000000");

    let mount = create_mount_point();
    yew::Renderer::<MenuTestWrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let first = by_test_id(&mount, "section-salades").unwrap();
    let second = by_test_id(&mount, "section-burgers").unwrap();
    assert!(!first.class_list().contains("section-alt"));
    assert!(second.class_list().contains("section-alt"));

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn quick_nav_marks_the_clicked_category() {
    inject_app_config("221700000000");

    let mount = create_mount_point();
    yew::Renderer::<MenuTestWrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let nav = by_test_id(&mount, "quick-nav").unwrap();
    assert_eq!(
        nav.query_selector_all("button").unwrap().length() as usize,
        MENU.len()
    );

    let first = by_test_id(&mount, "quick-nav-salades").unwrap();
    assert!(first.class_list().contains("active"), "first category starts active");

    support::click(&by_test_id(&mount, "quick-nav-desserts").unwrap());
    sleep(Duration::ZERO).await;

    let desserts = by_test_id(&mount, "quick-nav-desserts").unwrap();
    let first = by_test_id(&mount, "quick-nav-salades").unwrap();
    assert!(desserts.class_list().contains("active"));
    assert!(!first.class_list().contains("active"));

    cleanup(&mount);
    remove_app_config();
}

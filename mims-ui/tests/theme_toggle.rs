// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component test for the theme toggle: the class on <html> and the icon
// follow each click.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{by_test_id, cleanup, click, create_mount_point};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use mims_ui::components::theme_toggle::ThemeToggle;
use mims_ui::context::{Theme, ThemeProvider};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(ToggleTestWrapper)]
fn toggle_test_wrapper() -> Html {
    html! {
        <ThemeProvider initial={Some(Theme::Dark)}>
            <ThemeToggle />
        </ThemeProvider>
    }
}

fn root_classes() -> web_sys::DomTokenList {
    gloo_utils::document().document_element().unwrap().class_list()
}

#[wasm_bindgen_test]
async fn toggle_switches_between_dark_and_light() {
    let mount = create_mount_point();
    yew::Renderer::<ToggleTestWrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(root_classes().contains("dark"));
    assert!(mount.query_selector(".theme-icon-sun").unwrap().is_some());

    click(&by_test_id(&mount, "theme-toggle").unwrap());
    sleep(Duration::ZERO).await;

    assert!(root_classes().contains("light"));
    assert!(!root_classes().contains("dark"));
    assert!(mount.query_selector(".theme-icon-moon").unwrap().is_some());

    click(&by_test_id(&mount, "theme-toggle").unwrap());
    sleep(Duration::ZERO).await;

    assert!(root_classes().contains("dark"));
    assert!(!root_classes().contains("light"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn toggle_without_provider_renders_nothing() {
    let mount = create_mount_point();
    yew::Renderer::<ThemeToggle>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(by_test_id(&mount, "theme-toggle").is_none());

    cleanup(&mount);
}

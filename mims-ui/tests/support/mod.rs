// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for mims-ui component tests.
//
// Provides mount/cleanup helpers, runtime config injection and small DOM
// drivers so that individual test files stay focused on assertions.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventInit, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Find the element carrying `data-testid="<id>"`.
pub fn by_test_id(mount: &Element, id: &str) -> Option<Element> {
    mount
        .query_selector(&format!("[data-testid=\"{id}\"]"))
        .unwrap()
}

pub fn count(mount: &Element, selector: &str) -> u32 {
    mount.query_selector_all(selector).unwrap().length()
}

/// `data-testid` values of every match, in document order.
pub fn test_ids(mount: &Element, selector: &str) -> Vec<String> {
    let nodes = mount.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|element| element.get_attribute("data-testid"))
        .collect()
}

/// Dispatch a bubbling event so Yew's delegated listeners see it.
pub fn dispatch(target: &Element, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

pub fn click(element: &Element) {
    element.unchecked_ref::<HtmlElement>().click();
}

/// Type into an `<input>` the way a user would.
pub fn fill_input(element: &Element, value: &str) {
    element.unchecked_ref::<HtmlInputElement>().set_value(value);
    dispatch(element, "input");
}

/// Set an `<input>` that only reacts to `change`, such as a date picker.
pub fn commit_input(element: &Element, value: &str) {
    element.unchecked_ref::<HtmlInputElement>().set_value(value);
    dispatch(element, "change");
}

pub fn fill_textarea(element: &Element, value: &str) {
    element.unchecked_ref::<HtmlTextAreaElement>().set_value(value);
    dispatch(element, "input");
}

pub fn choose_option(element: &Element, value: &str) {
    element.unchecked_ref::<HtmlSelectElement>().set_value(value);
    dispatch(element, "change");
}

// ---------------------------------------------------------------------------
// Runtime config injection (integration tests)
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` pointing WhatsApp at `whatsapp_number`,
/// with smooth scrolling off so tests drive the native scroll.
pub fn inject_app_config(whatsapp_number: &str) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("whatsappNumber", &whatsapp_number.into());
    set("instagramHandle", &"mims_test".into());
    set("smoothScroll", &"false".into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Inject a `window.__APP_CONFIG` whose fields have the wrong types.
pub fn inject_malformed_app_config() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(
        &config,
        &"whatsappNumber".into(),
        &wasm_bindgen::JsValue::from(221),
    )
    .unwrap();
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &config).unwrap();
}

// ---------------------------------------------------------------------------
// window.open capture
// ---------------------------------------------------------------------------

/// Replace `window.open` with a recorder; returns the original so it can be
/// put back with [`restore_window_open`].
pub fn capture_window_open() -> wasm_bindgen::JsValue {
    let window = gloo_utils::window();
    let original = js_sys::Reflect::get(&window, &"open".into()).unwrap();
    let recorder = js_sys::Function::new_with_args(
        "url, target",
        "window.__openedUrl = url; window.__openedTarget = target; return null;",
    );
    js_sys::Reflect::set(&window, &"open".into(), &recorder).unwrap();
    original
}

/// `(url, target)` of the last captured `window.open` call.
pub fn opened_window() -> Option<(String, String)> {
    let window = gloo_utils::window();
    let url = js_sys::Reflect::get(&window, &"__openedUrl".into())
        .ok()?
        .as_string()?;
    let target = js_sys::Reflect::get(&window, &"__openedTarget".into())
        .ok()?
        .as_string()
        .unwrap_or_default();
    Some((url, target))
}

pub fn restore_window_open(original: &wasm_bindgen::JsValue) {
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"open".into(), original).unwrap();
    for key in ["__openedUrl", "__openedTarget"] {
        let _ = js_sys::Reflect::delete_property(&window.clone().into(), &key.into());
    }
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

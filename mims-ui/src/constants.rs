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

//! Runtime configuration.
//!
//! Deployments may inject `window.__APP_CONFIG` before the wasm bundle loads
//! to override the contact channels. Without it the site falls back to the
//! restaurant's published numbers.

use mims_types::{truthy, whatsapp, INSTAGRAM_HANDLE};
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;

/// Offset kept above a category when the quick navigation scrolls to it,
/// so the fixed header and the category bar do not cover the title.
pub const QUICK_NAV_OFFSET: f64 = 140.0;

/// Smooth scroll duration in seconds.
pub const SMOOTH_SCROLL_DURATION: f64 = 1.2;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(rename = "whatsappNumber")]
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,
    #[serde(rename = "instagramHandle")]
    #[serde(default = "default_instagram_handle")]
    pub instagram_handle: String,
    #[serde(rename = "smoothScroll")]
    #[serde(default = "default_smooth_scroll")]
    pub smooth_scroll: String,
}

fn default_whatsapp_number() -> String {
    whatsapp::WHATSAPP_NUMBER.to_string()
}

fn default_instagram_handle() -> String {
    INSTAGRAM_HANDLE.to_string()
}

fn default_smooth_scroll() -> String {
    "true".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            instagram_handle: default_instagram_handle(),
            smooth_scroll: default_smooth_scroll(),
        }
    }
}

pub fn site_config() -> Result<SiteConfig, String> {
    let Some(win) = web_sys::window() else {
        return Ok(SiteConfig::default());
    };
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(SiteConfig::default());
    }
    from_js_value::<SiteConfig>(config).map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn whatsapp_number() -> String {
    site_config()
        .map(|c| c.whatsapp_number)
        .unwrap_or_else(|_| default_whatsapp_number())
}

pub fn instagram_handle() -> String {
    site_config()
        .map(|c| c.instagram_handle)
        .unwrap_or_else(|_| default_instagram_handle())
}

pub fn instagram_url() -> String {
    format!("https://instagram.com/{}", instagram_handle())
}

pub fn smooth_scroll_enabled() -> bool {
    site_config()
        .map(|c| truthy(Some(c.smooth_scroll.as_str())))
        .unwrap_or(true)
}

/// Link behind every generic "Réserver" button.
pub fn reserve_url() -> String {
    whatsapp::greeting_url(&whatsapp_number())
}

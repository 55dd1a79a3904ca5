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

//! Content and reservation logic for the MIMS website.
//!
//! Nothing in here touches the DOM, so the catalogs and the WhatsApp
//! message builder can be unit tested natively and reused by any UI.

pub mod error;
pub mod locations;
pub mod menu;
pub mod price;
pub mod reservation;
pub mod whatsapp;

pub use error::{Field, ReservationError};
pub use locations::{Location, LocationId, LOCATIONS};
pub use menu::{MenuCategory, MenuItem, MENU, MENU_HIGHLIGHTS};
pub use price::format_price;
pub use reservation::ReservationForm;

/// Brand name as printed on the storefront.
pub const BRAND: &str = "MIMS";

/// Year the restaurant opened.
pub const FOUNDED: u16 = 2009;

pub const INSTAGRAM_HANDLE: &str = "mims_dakar";

/// Interpret a config flag the way the deployment scripts write them.
pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true", "1"].contains(&s.to_lowercase().as_str())
    } else {
        false
    }
}

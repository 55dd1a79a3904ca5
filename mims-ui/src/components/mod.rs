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

pub mod about;
pub mod chef;
pub mod config_error;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;
pub mod locations;
pub mod menu;
pub mod menu_preview;
pub mod reservation_form;
pub mod reveal;
pub mod services;
pub mod theme_toggle;

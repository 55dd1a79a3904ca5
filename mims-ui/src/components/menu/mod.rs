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

//! Building blocks of the full menu page.

pub mod category_section;
pub mod menu_header;
pub mod menu_item_card;
pub mod quick_nav;

pub use category_section::CategorySection;
pub use menu_header::MenuHeader;
pub use menu_item_card::MenuItemCard;
pub use quick_nav::QuickNav;

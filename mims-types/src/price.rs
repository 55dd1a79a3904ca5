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

//! Price rendering.

/// Group separator used by French number formatting (narrow no-break space).
pub const GROUP_SEPARATOR: char = '\u{202F}';

pub const CURRENCY: &str = "FCFA";

/// Formats a price in FCFA the way `Intl.NumberFormat('fr-FR')` would,
/// e.g. `12000` becomes `"12 000 FCFA"`.
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    format!("{grouped} {CURRENCY}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_prices_are_not_grouped() {
        assert_eq!(format_price(0), "0 FCFA");
        assert_eq!(format_price(500), "500 FCFA");
    }

    #[test]
    fn thousands_use_narrow_no_break_space() {
        assert_eq!(format_price(1500), "1\u{202F}500 FCFA");
        assert_eq!(format_price(12000), "12\u{202F}000 FCFA");
        assert_eq!(format_price(250000), "250\u{202F}000 FCFA");
    }

    #[test]
    fn millions_get_two_separators() {
        assert_eq!(format_price(1_234_567), "1\u{202F}234\u{202F}567 FCFA");
    }
}

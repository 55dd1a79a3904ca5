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

//! Click-to-chat links for WhatsApp.

use crate::reservation::ReservationForm;

/// The restaurant's reservation line, in international format without `+`.
pub const WHATSAPP_NUMBER: &str = "221776190060";

/// Prefilled text of the generic "Réserver" buttons.
pub const GREETING: &str = "Bonjour, je souhaite réserver une table chez MIMS.";

const WA_ME: &str = "https://wa.me";

/// `https://wa.me/<number>?text=<percent-encoded text>`
pub fn whatsapp_url(number: &str, text: &str) -> String {
    format!("{WA_ME}/{number}?text={}", urlencoding::encode(text))
}

pub fn greeting_url(number: &str) -> String {
    whatsapp_url(number, GREETING)
}

pub fn reservation_url(number: &str, form: &ReservationForm) -> String {
    whatsapp_url(number, &form.whatsapp_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::LocationId;

    fn decoded_text(url: &str) -> String {
        let (_, encoded) = url.split_once("?text=").expect("text parameter");
        urlencoding::decode(encoded).unwrap().into_owned()
    }

    #[test]
    fn greeting_link() {
        let url = greeting_url(WHATSAPP_NUMBER);
        assert!(url.starts_with("https://wa.me/221776190060?text=Bonjour%2C%20je%20souhaite%20r%C3%A9server"));
        assert_eq!(decoded_text(&url), GREETING);
    }

    #[test]
    fn reservation_link_carries_the_whole_message() {
        let form = ReservationForm {
            name: "Moussa & Fatou".into(),
            email: "m@f.sn".into(),
            phone: "771234567".into(),
            time: "19:00".into(),
            guests: "2".into(),
            location: Some(LocationId::NgorVirage),
            message: "Table près de la fenêtre ?".into(),
            ..Default::default()
        };
        let url = reservation_url("221700000000", &form);

        assert!(url.starts_with("https://wa.me/221700000000?text="));
        let query = url.split_once("?text=").unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(!query.contains('&'));
        assert_eq!(decoded_text(&url), form.whatsapp_message());
    }
}

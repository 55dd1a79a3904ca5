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

//! The two MIMS restaurants.

use serde::Serialize;

use crate::menu::slugify;

pub const OPENING_HOURS: &str = "Ouvert tous les jours jusqu'à 00:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationId {
    Dakar,
    #[serde(rename = "ngor")]
    NgorVirage,
}

impl LocationId {
    /// Value submitted by the reservation select.
    pub fn key(&self) -> &'static str {
        match self {
            LocationId::Dakar => "dakar",
            LocationId::NgorVirage => "ngor",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "dakar" => Some(LocationId::Dakar),
            "ngor" => Some(LocationId::NgorVirage),
            _ => None,
        }
    }

    pub fn location(&self) -> &'static Location {
        match self {
            LocationId::Dakar => &LOCATIONS[0],
            LocationId::NgorVirage => &LOCATIONS[1],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: LocationId,
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub image: &'static str,
}

impl Location {
    pub fn display_name(&self) -> String {
        format!("{} {}", crate::BRAND, self.name)
    }

    /// Label used by the reservation select and the outbound message.
    pub fn reservation_label(&self) -> &'static str {
        match self.id {
            LocationId::Dakar => "MIMS Dakar - 90 Rue Félix Faure",
            LocationId::NgorVirage => "MIMS Ngor Virage",
        }
    }

    pub fn tel_href(&self) -> String {
        tel_href(self.phone)
    }

    pub fn slug(&self) -> String {
        slugify(self.name)
    }
}

/// `tel:` link for a human-formatted phone number.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

pub static LOCATIONS: [Location; 2] = [
    Location {
        id: LocationId::Dakar,
        name: "Dakar",
        address: "90 Rue Félix Faure, Dakar",
        phone: "+221 33 822 70 75",
        image: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800",
    },
    Location {
        id: LocationId::NgorVirage,
        name: "Ngor Virage",
        address: "Ngor Virage, Dakar",
        phone: "+221 77 566 55 41",
        image: "https://images.unsplash.com/photo-1552566626-52f8b828add9?w=800",
    },
];

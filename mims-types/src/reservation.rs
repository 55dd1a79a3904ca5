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

//! Reservation form state, validation and the outbound message.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Field, ReservationError};
use crate::locations::LocationId;

pub const TIME_SLOTS: [&str; 15] = [
    "12:00", "12:30", "13:00", "13:30", "14:00", "14:30", "19:00", "19:30", "20:00", "20:30",
    "21:00", "21:30", "22:00", "22:30", "23:00",
];

pub const GUEST_OPTIONS: [&str; 11] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "10+"];

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const NOT_SPECIFIED_F: &str = "Non spécifiée";
const NOT_SPECIFIED_M: &str = "Non spécifié";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").unwrap());

/// Label of a guest-count option.
pub fn guest_label(value: &str) -> String {
    match value {
        "1" => "1 personne".to_string(),
        "10+" => "Plus de 10".to_string(),
        n => format!("{n} personnes"),
    }
}

/// `d MMMM yyyy` in French, e.g. `5 mars 2026`.
pub fn format_date_fr(date: &NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_FR[date.month0() as usize],
        date.year()
    )
}

/// Parses the value of an `<input type="date">`.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Formats a date as an `<input type="date">` value.
pub fn input_date_value(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Same-day bookings are not taken, the first bookable day is tomorrow.
pub fn earliest_reservation_date(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Everything the guest typed into the reservation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub guests: String,
    pub location: Option<LocationId>,
    pub message: String,
}

impl ReservationForm {
    pub fn set_date_input(&mut self, value: &str) {
        self.date = parse_input_date(value);
    }

    pub fn set_location_key(&mut self, key: &str) {
        self.location = LocationId::from_key(key);
    }

    /// Checks the form top to bottom and reports the first problem.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ReservationError> {
        require(&self.name, Field::Name)?;
        require(&self.email, Field::Email)?;
        if !is_valid_email(&self.email) {
            return Err(ReservationError::InvalidEmail);
        }
        require(&self.phone, Field::Phone)?;
        require(&self.guests, Field::Guests)?;
        if !GUEST_OPTIONS.contains(&self.guests.as_str()) {
            return Err(ReservationError::UnknownGuestCount(self.guests.clone()));
        }

        let date = self.date.ok_or(ReservationError::MissingField(Field::Date))?;
        let earliest = earliest_reservation_date(today);
        if date < earliest {
            return Err(ReservationError::DateTooEarly { earliest });
        }

        require(&self.time, Field::Time)?;
        if !TIME_SLOTS.contains(&self.time.as_str()) {
            return Err(ReservationError::UnknownTimeSlot(self.time.clone()));
        }

        if self.location.is_none() {
            return Err(ReservationError::MissingField(Field::Location));
        }
        Ok(())
    }

    /// The text sent to the restaurant's WhatsApp.
    pub fn whatsapp_message(&self) -> String {
        let date = self
            .date
            .as_ref()
            .map(format_date_fr)
            .unwrap_or_else(|| NOT_SPECIFIED_F.to_string());
        let time = or_default(&self.time, NOT_SPECIFIED_F);
        let guests = or_default(&self.guests, NOT_SPECIFIED_M);
        let location = self
            .location
            .unwrap_or(LocationId::NgorVirage)
            .location()
            .reservation_label();
        let message = if self.message.is_empty() {
            String::new()
        } else {
            format!("💬 *Message:* {}", self.message)
        };

        format!(
            "🍽️ *RÉSERVATION MIMS*\n\
             \n\
             👤 *Nom:* {name}\n\
             📧 *Email:* {email}\n\
             📱 *Téléphone:* {phone}\n\
             \n\
             📅 *Date:* {date}\n\
             🕐 *Heure:* {time}\n\
             👥 *Nombre de personnes:* {guests}\n\
             📍 *Restaurant:* {location}\n\
             \n\
             {message}\n\
             \n\
             Merci de confirmer ma réservation.",
            name = self.name,
            email = self.email,
            phone = self.phone,
        )
    }
}

fn require(value: &str, field: Field) -> Result<(), ReservationError> {
    if value.trim().is_empty() {
        Err(ReservationError::MissingField(field))
    } else {
        Ok(())
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

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

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

use crate::reservation::format_date_fr;

/// Reservation form fields, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Guests,
    Date,
    Time,
    Location,
}

impl Field {
    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Nom",
            Field::Email => "Email",
            Field::Phone => "Téléphone",
            Field::Guests => "Personnes",
            Field::Date => "Date",
            Field::Time => "Heure",
            Field::Location => "Restaurant",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("Le champ « {0} » est obligatoire.")]
    MissingField(Field),

    #[error("L'adresse email n'est pas valide.")]
    InvalidEmail,

    #[error("Veuillez choisir une date à partir du {}.", format_date_fr(.earliest))]
    DateTooEarly { earliest: NaiveDate },

    #[error("Créneau horaire inconnu : {0}")]
    UnknownTimeSlot(String),

    #[error("Nombre de personnes invalide : {0}")]
    UnknownGuestCount(String),
}

impl ReservationError {
    /// The field the user needs to fix.
    pub fn field(&self) -> Field {
        match self {
            ReservationError::MissingField(field) => *field,
            ReservationError::InvalidEmail => Field::Email,
            ReservationError::DateTooEarly { .. } => Field::Date,
            ReservationError::UnknownTimeSlot(_) => Field::Time,
            ReservationError::UnknownGuestCount(_) => Field::Guests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_label() {
        let err = ReservationError::MissingField(Field::Phone);
        assert_eq!(err.to_string(), "Le champ « Téléphone » est obligatoire.");
        assert_eq!(err.field(), Field::Phone);
    }

    #[test]
    fn date_too_early_formats_in_french() {
        let err = ReservationError::DateTooEarly {
            earliest: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Veuillez choisir une date à partir du 5 mars 2026."
        );
        assert_eq!(err.field(), Field::Date);
    }
}

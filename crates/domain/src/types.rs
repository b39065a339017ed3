// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{
    validate_email, validate_full_name, validate_national_id, validate_phone,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque unique token identifying a reservation.
///
/// Generated once at creation and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(Uuid);

impl ReservationId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReservationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A bookable hour of the day, labelled `"HH:00"`.
///
/// Bookings are whole hours; a label with non-zero minutes is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    /// The hour of the day (0-23).
    hour: u8,
}

impl TimeSlot {
    /// Creates a `TimeSlot` for the given hour of the day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeSlot` if `hour` is greater than 23.
    pub fn new(hour: u8) -> Result<Self, DomainError> {
        if hour > 23 {
            return Err(DomainError::InvalidTimeSlot(format!("{hour}:00")));
        }
        Ok(Self { hour })
    }

    /// Returns the hour of the day (0-23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.hour)
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidTimeSlot(s.to_string());

        let (hour_part, minute_part) = s.split_once(':').ok_or_else(invalid)?;
        if minute_part != "00" {
            return Err(invalid());
        }

        let hour: u8 = hour_part.parse().map_err(|_| invalid())?;
        Self::new(hour).map_err(|_| invalid())
    }
}

/// A validated client identity.
///
/// All fields are validated and normalized at construction; no
/// partially-valid identity can exist. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    /// The client's full name (trimmed).
    full_name: String,
    /// The national identity document number (digits only).
    national_id: String,
    /// The phone number (spaces, hyphens, and parentheses stripped).
    phone: String,
    /// The email address (trimmed).
    email: String,
}

impl ClientIdentity {
    /// Validates the given fields and constructs a `ClientIdentity`.
    ///
    /// # Arguments
    ///
    /// * `full_name` - The client's full name
    /// * `national_id` - The national identity document number
    /// * `phone` - The phone number
    /// * `email` - The email address
    ///
    /// # Returns
    ///
    /// * `Ok(ClientIdentity)` with normalized fields
    /// * `Err(DomainError)` for the first field that fails validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidName`, `InvalidDocument`, `InvalidPhone`, or
    /// `InvalidEmail` depending on which field is rejected.
    pub fn new(
        full_name: &str,
        national_id: &str,
        phone: &str,
        email: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            full_name: validate_full_name(full_name)?,
            national_id: validate_national_id(national_id)?,
            phone: validate_phone(phone)?,
            email: validate_email(email)?,
        })
    }

    /// Returns the client's full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the national identity document number.
    #[must_use]
    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    /// Returns the normalized phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// A court with its type name and hourly rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Court {
    /// The court type name (e.g., "Synthetic").
    type_name: String,
    /// The hourly rate for booking this court.
    hourly_rate: Decimal,
}

impl Court {
    /// Creates a new `Court`.
    ///
    /// # Arguments
    ///
    /// * `type_name` - The court type name
    /// * `hourly_rate` - The hourly booking rate
    #[must_use]
    pub fn new(type_name: &str, hourly_rate: Decimal) -> Self {
        Self {
            type_name: type_name.to_string(),
            hourly_rate,
        }
    }

    /// Returns the court type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the hourly booking rate.
    #[must_use]
    pub const fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }
}

/// A booked time slot on a court for a client.
///
/// `price` is a snapshot of the court's hourly rate at the moment the
/// reservation was last written (create or edit), not a live reference to
/// the catalog. A later rate change never alters existing reservations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// The unique reservation identifier.
    pub id: ReservationId,
    /// The client who holds the reservation.
    pub client: ClientIdentity,
    /// The booked court type.
    pub court_type: String,
    /// The calendar date of the booking.
    pub date: time::Date,
    /// The booked hour of the day.
    pub time_slot: TimeSlot,
    /// Snapshot of the court's hourly rate at the last write.
    pub price: Decimal,
}

/// A partial update to an existing reservation.
///
/// Each field is optional; unset fields keep the reservation's current
/// value. Values are raw strings because the manager re-runs the full
/// validation pipeline over the merged result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationPatch {
    /// New full name, if changing.
    pub full_name: Option<String>,
    /// New national identity document number, if changing.
    pub national_id: Option<String>,
    /// New phone number, if changing.
    pub phone: Option<String>,
    /// New email address, if changing.
    pub email: Option<String>,
    /// New court type, if changing.
    pub court_type: Option<String>,
    /// New date (`YYYY-MM-DD`), if changing.
    pub date: Option<String>,
    /// New time slot (`HH:00`), if changing.
    pub time_slot: Option<String>,
}

impl ReservationPatch {
    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.national_id.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.court_type.is_none()
            && self.date.is_none()
            && self.time_slot.is_none()
    }
}

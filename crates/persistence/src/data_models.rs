// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use court_booking_domain::{ClientIdentity, Reservation, ReservationId, TimeSlot, parse_iso_date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Serializable representation of a reservation in the ledger artifact.
///
/// Field names are the external contract of the persisted format; the
/// artifact says `resource_type` where the domain API says court type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredReservation {
    pub id: String,
    pub full_name: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub resource_type: String,
    /// ISO 8601 calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Hour label, `HH:00`.
    pub time_slot: String,
    /// Rate snapshot at the last write; a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl StoredReservation {
    /// Flattens a domain reservation into its stored form.
    #[must_use]
    pub fn from_reservation(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id.to_string(),
            full_name: reservation.client.full_name().to_string(),
            national_id: reservation.client.national_id().to_string(),
            phone: reservation.client.phone().to_string(),
            email: reservation.client.email().to_string(),
            resource_type: reservation.court_type.clone(),
            date: format!(
                "{:04}-{:02}-{:02}",
                reservation.date.year(),
                u8::from(reservation.date.month()),
                reservation.date.day()
            ),
            time_slot: reservation.time_slot.to_string(),
            price: reservation.price,
        }
    }

    /// Reconstructs the domain reservation from its stored form.
    ///
    /// Identity fields are re-validated and the date and slot labels are
    /// re-parsed. The not-in-the-past date policy is deliberately NOT
    /// applied here: reservations legitimately age inside the ledger, and
    /// policy checks belong to create/edit time only.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ReconstructionError` if any field fails
    /// validation or parsing.
    pub fn try_into_reservation(self) -> Result<Reservation, PersistenceError> {
        let reconstruction =
            |e: &dyn std::fmt::Display| PersistenceError::ReconstructionError(e.to_string());

        let id: ReservationId = ReservationId::from_str(&self.id).map_err(|e| {
            PersistenceError::ReconstructionError(format!("invalid id '{}': {e}", self.id))
        })?;
        let client: ClientIdentity = ClientIdentity::new(
            &self.full_name,
            &self.national_id,
            &self.phone,
            &self.email,
        )
        .map_err(|e| reconstruction(&e))?;
        let date: time::Date = parse_iso_date(&self.date).map_err(|e| reconstruction(&e))?;
        let time_slot: TimeSlot = TimeSlot::from_str(&self.time_slot)
            .map_err(|e| reconstruction(&e))?;

        Ok(Reservation {
            id,
            client,
            court_type: self.resource_type,
            date,
            time_slot,
            price: self.price,
        })
    }
}

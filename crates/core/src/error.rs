// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use court_booking_domain::{DomainError, ReservationId, TimeSlot};
use court_booking_persistence::PersistenceError;

/// Errors that can occur during reservation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The requested slot is already booked.
    SlotTaken {
        /// The court type of the conflicting slot.
        court_type: String,
        /// The date of the conflicting slot.
        date: time::Date,
        /// The hour of the conflicting slot.
        time_slot: TimeSlot,
    },
    /// No reservation has the given identifier.
    NotFound(ReservationId),
    /// The durable write failed; the in-memory ledger was rolled back.
    Persistence(PersistenceError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::SlotTaken {
                court_type,
                date,
                time_slot,
            } => {
                write!(
                    f,
                    "Slot {time_slot} on {date} is already booked for court '{court_type}'"
                )
            }
            Self::NotFound(id) => write!(f, "Reservation {id} not found"),
            Self::Persistence(err) => write!(f, "Persistence failure: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<PersistenceError> for CoreError {
    fn from(err: PersistenceError) -> Self {
        Self::Persistence(err)
    }
}

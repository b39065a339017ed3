// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{NewReservation, ReservationManager};
use court_booking_domain::CourtCatalog;
use court_booking_persistence::JsonLedgerStore;
use tempfile::TempDir;

/// Builds a manager with the default catalog over a store in `dir`.
pub fn test_manager(dir: &TempDir) -> ReservationManager {
    ReservationManager::new(
        CourtCatalog::default(),
        JsonLedgerStore::new(dir.path().join("reservas.json")),
    )
    .unwrap()
}

/// A valid create request for Ana on the Synthetic court.
pub fn ana_request() -> NewReservation {
    NewReservation {
        full_name: String::from("Ana Ruiz"),
        national_id: String::from("12345678"),
        phone: String::from("+57 300 1234567"),
        email: String::from("ana@example.com"),
        court_type: String::from("Synthetic"),
        date: String::from("2099-01-01"),
        time_slot: String::from("10:00"),
    }
}

/// A valid create request for a second, distinct client.
pub fn bruno_request() -> NewReservation {
    NewReservation {
        full_name: String::from("Bruno Díaz"),
        national_id: String::from("87654321"),
        phone: String::from("3009876543"),
        email: String::from("bruno@example.com"),
        court_type: String::from("Synthetic"),
        date: String::from("2099-01-01"),
        time_slot: String::from("10:00"),
    }
}

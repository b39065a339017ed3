// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod record_tests;

use court_booking_domain::{ClientIdentity, Reservation, ReservationId, TimeSlot};
use rust_decimal::Decimal;
use time::macros::date;

/// Builds a valid reservation for a given slot.
pub fn sample_reservation(court_type: &str, day: time::Date, hour: u8, price: Decimal) -> Reservation {
    let client: ClientIdentity = ClientIdentity::new(
        "Ana Ruiz",
        "12345678",
        "+57 300 1234567",
        "ana@example.com",
    )
    .unwrap();

    Reservation {
        id: ReservationId::new(),
        client,
        court_type: court_type.to_string(),
        date: day,
        time_slot: TimeSlot::new(hour).unwrap(),
        price,
    }
}

/// A date safely in the future for ledger round trips.
pub fn future_date() -> time::Date {
    date!(2099 - 01 - 01)
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{future_date, sample_reservation};
use crate::{PersistenceError, StoredReservation};
use court_booking_domain::Reservation;
use rust_decimal_macros::dec;
use time::macros::date;

#[test]
fn test_stored_record_uses_the_external_field_names() {
    let reservation: Reservation =
        sample_reservation("Synthetic", future_date(), 10, dec!(5.00));
    let record: StoredReservation = StoredReservation::from_reservation(&reservation);

    let json: serde_json::Value = serde_json::to_value(&record).unwrap();
    for field in [
        "id",
        "full_name",
        "national_id",
        "phone",
        "email",
        "resource_type",
        "date",
        "time_slot",
        "price",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(json["resource_type"], "Synthetic");
    assert_eq!(json["date"], "2099-01-01");
    assert_eq!(json["time_slot"], "10:00");
    assert!(json["price"].is_number());
}

#[test]
fn test_price_serializes_as_a_json_number() {
    let reservation: Reservation =
        sample_reservation("Synthetic", future_date(), 10, dec!(5.00));
    let record: StoredReservation = StoredReservation::from_reservation(&reservation);

    // The artifact stores the price as a bare number, not a quoted string.
    let json: serde_json::Value = serde_json::to_value(&record).unwrap();
    assert_eq!(json["price"], serde_json::json!(5.0));

    let parsed: StoredReservation = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.price, dec!(5.00));
}

#[test]
fn test_record_round_trips_to_domain() {
    let reservation: Reservation =
        sample_reservation("Volleyball", future_date(), 21, dec!(7.50));
    let record: StoredReservation = StoredReservation::from_reservation(&reservation);

    let rebuilt: Reservation = record.try_into_reservation().unwrap();
    assert_eq!(rebuilt, reservation);
}

#[test]
fn test_reconstruction_accepts_past_dates() {
    // Old reservations legitimately age inside the ledger; the
    // not-in-the-past policy applies at create/edit time only.
    let reservation: Reservation =
        sample_reservation("Synthetic", date!(2001 - 06 - 15), 10, dec!(5.00));
    let record: StoredReservation = StoredReservation::from_reservation(&reservation);

    let rebuilt: Reservation = record.try_into_reservation().unwrap();
    assert_eq!(rebuilt.date, date!(2001 - 06 - 15));
}

#[test]
fn test_reconstruction_rejects_invalid_id() {
    let reservation: Reservation =
        sample_reservation("Synthetic", future_date(), 10, dec!(5.00));
    let mut record: StoredReservation = StoredReservation::from_reservation(&reservation);
    record.id = String::from("not-a-uuid");

    let result: Result<Reservation, PersistenceError> = record.try_into_reservation();
    assert!(matches!(
        result,
        Err(PersistenceError::ReconstructionError(_))
    ));
}

#[test]
fn test_reconstruction_rejects_invalid_identity_field() {
    let reservation: Reservation =
        sample_reservation("Synthetic", future_date(), 10, dec!(5.00));
    let mut record: StoredReservation = StoredReservation::from_reservation(&reservation);
    record.national_id = String::from("ABC123");

    let result: Result<Reservation, PersistenceError> = record.try_into_reservation();
    assert!(matches!(
        result,
        Err(PersistenceError::ReconstructionError(_))
    ));
}

#[test]
fn test_reconstruction_rejects_invalid_slot_label() {
    let reservation: Reservation =
        sample_reservation("Synthetic", future_date(), 10, dec!(5.00));
    let mut record: StoredReservation = StoredReservation::from_reservation(&reservation);
    record.time_slot = String::from("10:30");

    let result: Result<Reservation, PersistenceError> = record.try_into_reservation();
    assert!(matches!(
        result,
        Err(PersistenceError::ReconstructionError(_))
    ));
}

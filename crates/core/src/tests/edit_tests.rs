// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{ana_request, bruno_request, test_manager};
use crate::{CoreError, ReservationManager};
use court_booking_domain::{DomainError, Reservation, ReservationId, ReservationPatch};
use rust_decimal_macros::dec;
use std::str::FromStr;
use tempfile::TempDir;

#[test]
fn test_edit_time_slot_frees_the_old_slot() {
    let dir: TempDir = TempDir::new().unwrap();
    let manager: ReservationManager = test_manager(&dir);
    let created: Reservation = manager.create(&ana_request()).unwrap();

    let patch: ReservationPatch = ReservationPatch {
        time_slot: Some(String::from("11:00")),
        ..ReservationPatch::default()
    };
    let updated: Reservation = manager.edit(&created.id, &patch).unwrap();
    assert_eq!(updated.time_slot.to_string(), "11:00");

    // 10:00 is free again for another client.
    assert!(manager.create(&bruno_request()).is_ok());
}

#[test]
fn test_empty_patch_edit_never_self_conflicts() {
    let dir: TempDir = TempDir::new().unwrap();
    let manager: ReservationManager = test_manager(&dir);
    let created: Reservation = manager.create(&ana_request()).unwrap();

    let updated: Reservation = manager
        .edit(&created.id, &ReservationPatch::default())
        .unwrap();
    assert_eq!(updated, created);
}

#[test]
fn test_edit_restating_own_slot_never_self_conflicts() {
    let dir: TempDir = TempDir::new().unwrap();
    let manager: ReservationManager = test_manager(&dir);
    let created: Reservation = manager.create(&ana_request()).unwrap();

    let patch: ReservationPatch = ReservationPatch {
        time_slot: Some(String::from("10:00")),
        ..ReservationPatch::default()
    };
    assert!(manager.edit(&created.id, &patch).is_ok());
}

#[test]
fn test_edit_into_occupied_slot_fails_and_changes_nothing() {
    let dir: TempDir = TempDir::new().unwrap();
    let manager: ReservationManager = test_manager(&dir);
    let ana: Reservation = manager.create(&ana_request()).unwrap();
    let mut second = bruno_request();
    second.time_slot = String::from("11:00");
    let bruno: Reservation = manager.create(&second).unwrap();

    let patch: ReservationPatch = ReservationPatch {
        time_slot: Some(String::from("10:00")),
        ..ReservationPatch::default()
    };
    let result: Result<Reservation, CoreError> = manager.edit(&bruno.id, &patch);
    assert!(matches!(result, Err(CoreError::SlotTaken { .. })));
    assert_eq!(manager.find_by_id(&bruno.id).unwrap(), bruno);
    assert_eq!(manager.find_by_id(&ana.id).unwrap(), ana);
}

#[test]
fn test_edit_court_recomputes_the_price_snapshot() {
    let dir: TempDir = TempDir::new().unwrap();
    let manager: ReservationManager = test_manager(&dir);
    let created: Reservation = manager.create(&ana_request()).unwrap();
    assert_eq!(created.price, dec!(5.00));

    let patch: ReservationPatch = ReservationPatch {
        court_type: Some(String::from("Volleyball")),
        ..ReservationPatch::default()
    };
    let updated: Reservation = manager.edit(&created.id, &patch).unwrap();
    assert_eq!(updated.price, dec!(7.50));
}

#[test]
fn test_edit_with_invalid_field_leaves_ledger_untouched() {
    let dir: TempDir = TempDir::new().unwrap();
    let manager: ReservationManager = test_manager(&dir);
    let created: Reservation = manager.create(&ana_request()).unwrap();

    let patch: ReservationPatch = ReservationPatch {
        phone: Some(String::from("123")),
        time_slot: Some(String::from("12:00")),
        ..ReservationPatch::default()
    };
    let result: Result<Reservation, CoreError> = manager.edit(&created.id, &patch);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidPhone(_)))
    ));
    assert_eq!(manager.find_by_id(&created.id).unwrap(), created);
}

#[test]
fn test_edit_rejects_unknown_court() {
    let dir: TempDir = TempDir::new().unwrap();
    let manager: ReservationManager = test_manager(&dir);
    let created: Reservation = manager.create(&ana_request()).unwrap();

    let patch: ReservationPatch = ReservationPatch {
        court_type: Some(String::from("Padel")),
        ..ReservationPatch::default()
    };
    let result: Result<Reservation, CoreError> = manager.edit(&created.id, &patch);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::UnknownCourt(_)))
    ));
}

#[test]
fn test_edit_unknown_id_is_not_found() {
    let dir: TempDir = TempDir::new().unwrap();
    let manager: ReservationManager = test_manager(&dir);

    let missing: ReservationId =
        ReservationId::from_str("00000000-0000-4000-8000-000000000000").unwrap();
    let result: Result<Reservation, CoreError> =
        manager.edit(&missing, &ReservationPatch::default());
    assert!(matches!(result, Err(CoreError::NotFound(_))));
}

#[test]
fn test_edited_reservation_survives_a_restart() {
    let dir: TempDir = TempDir::new().unwrap();
    let updated: Reservation = {
        let manager: ReservationManager = test_manager(&dir);
        let created: Reservation = manager.create(&ana_request()).unwrap();
        let patch: ReservationPatch = ReservationPatch {
            full_name: Some(String::from("Ana María Ruiz")),
            ..ReservationPatch::default()
        };
        manager.edit(&created.id, &patch).unwrap()
    };

    let reopened: ReservationManager = test_manager(&dir);
    assert_eq!(reopened.find_by_id(&updated.id).unwrap(), updated);
}

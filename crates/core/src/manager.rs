// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::request::NewReservation;
use court_booking_domain::{
    ClientIdentity, Court, CourtCatalog, DomainError, Reservation, ReservationId,
    ReservationPatch, TimeSlot, parse_iso_date, validate_date_not_past,
};
use court_booking_persistence::JsonLedgerStore;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use time::{Date, OffsetDateTime};
use tracing::info;

/// Orchestrates creation, lookup, editing, and cancellation of reservations.
///
/// The manager is the single owner of the in-memory ledger, loaded once at
/// construction. Mutating operations hold the write lock for the whole
/// validate, conflict-check, mutate, persist sequence, so the conflict
/// check and the mutation it guards are atomic with respect to other
/// mutators; ties are resolved purely by lock ordering (first committer
/// wins). Reads observe a consistent ledger snapshot.
///
/// Every mutation persists the full ledger synchronously before reporting
/// success; on a persistence failure the in-memory change is rolled back.
#[derive(Debug)]
pub struct ReservationManager {
    /// The static court catalog.
    catalog: CourtCatalog,
    /// Durable storage for the ledger.
    store: JsonLedgerStore,
    /// The in-memory reservation ledger, in creation order.
    ledger: RwLock<Vec<Reservation>>,
}

impl ReservationManager {
    /// Creates a manager over a catalog and a ledger store.
    ///
    /// The ledger is loaded once, here; the store is not re-read afterwards.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Persistence` if the ledger artifact exists but
    /// cannot be read.
    pub fn new(catalog: CourtCatalog, store: JsonLedgerStore) -> Result<Self, CoreError> {
        let ledger: Vec<Reservation> = store.load()?;
        Ok(Self {
            catalog,
            store,
            ledger: RwLock::new(ledger),
        })
    }

    /// Returns the court catalog.
    #[must_use]
    pub const fn catalog(&self) -> &CourtCatalog {
        &self.catalog
    }

    /// Returns the court type names in configured order.
    #[must_use]
    pub fn court_types(&self) -> Vec<&str> {
        self.catalog.court_types()
    }

    /// Returns the hourly rate for a court type, `0` if unknown.
    #[must_use]
    pub fn rate_for(&self, court_type: &str) -> Decimal {
        self.catalog.rate_for(court_type)
    }

    /// Creates a new reservation.
    ///
    /// Validation order: date not in the past, hour within open hours,
    /// court exists, client identity valid, slot free. The reservation's
    /// price is a snapshot of the court's current rate.
    ///
    /// # Errors
    ///
    /// * `CoreError::DomainViolation` for any validation failure
    ///   (identity errors are propagated verbatim)
    /// * `CoreError::SlotTaken` if the slot is already booked
    /// * `CoreError::Persistence` if the durable write failed; the
    ///   in-memory ledger is rolled back and unchanged
    pub fn create(&self, request: &NewReservation) -> Result<Reservation, CoreError> {
        let date: Date = parse_iso_date(&request.date)?;
        validate_date_not_past(date, Self::today())?;
        let time_slot: TimeSlot = TimeSlot::from_str(&request.time_slot)?;
        self.catalog.open_hours().validate_slot(time_slot)?;

        let price: Decimal = self
            .catalog
            .court(&request.court_type)
            .map(Court::hourly_rate)
            .ok_or_else(|| DomainError::UnknownCourt(request.court_type.clone()))?;

        let client: ClientIdentity = ClientIdentity::new(
            &request.full_name,
            &request.national_id,
            &request.phone,
            &request.email,
        )?;

        let mut ledger: RwLockWriteGuard<'_, Vec<Reservation>> = self.write_ledger();
        if !Self::slot_free(&ledger, &request.court_type, date, time_slot, None) {
            return Err(CoreError::SlotTaken {
                court_type: request.court_type.clone(),
                date,
                time_slot,
            });
        }

        let reservation: Reservation = Reservation {
            id: ReservationId::new(),
            client,
            court_type: request.court_type.clone(),
            date,
            time_slot,
            price,
        };

        ledger.push(reservation.clone());
        if let Err(error) = self.store.save(&ledger) {
            ledger.pop();
            return Err(CoreError::Persistence(error));
        }

        info!(id = %reservation.id, court = %reservation.court_type, %date, slot = %time_slot, "reservation created");
        Ok(reservation)
    }

    /// Returns all reservations in creation order.
    #[must_use]
    pub fn list_all(&self) -> Vec<Reservation> {
        self.read_ledger().clone()
    }

    /// Looks up a reservation by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no reservation has the id.
    pub fn find_by_id(&self, id: &ReservationId) -> Result<Reservation, CoreError> {
        self.read_ledger()
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(id.clone()))
    }

    /// Edits an existing reservation.
    ///
    /// Patch fields are merged over the current values (unset fields keep
    /// their value), then the full validation pipeline and the conflict
    /// check run over the merged result, with this reservation excluded
    /// from its own conflict check. The price is recomputed from the
    /// (possibly new) court's current rate.
    ///
    /// All-or-nothing: on any validation or persistence failure the
    /// in-memory ledger is left exactly as it was.
    ///
    /// # Errors
    ///
    /// * `CoreError::NotFound` if no reservation has the id
    /// * `CoreError::DomainViolation` for any validation failure
    /// * `CoreError::SlotTaken` if the merged slot is booked by another
    ///   reservation
    /// * `CoreError::Persistence` if the durable write failed
    pub fn edit(
        &self,
        id: &ReservationId,
        patch: &ReservationPatch,
    ) -> Result<Reservation, CoreError> {
        let mut ledger: RwLockWriteGuard<'_, Vec<Reservation>> = self.write_ledger();
        let index: usize = ledger
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| CoreError::NotFound(id.clone()))?;
        let current: &Reservation = &ledger[index];

        // Merge with default-to-current-value semantics.
        let date: Date = match &patch.date {
            Some(raw) => parse_iso_date(raw)?,
            None => current.date,
        };
        let time_slot: TimeSlot = match &patch.time_slot {
            Some(raw) => TimeSlot::from_str(raw)?,
            None => current.time_slot,
        };
        let court_type: String = patch
            .court_type
            .clone()
            .unwrap_or_else(|| current.court_type.clone());

        validate_date_not_past(date, Self::today())?;
        self.catalog.open_hours().validate_slot(time_slot)?;
        let price: Decimal = self
            .catalog
            .court(&court_type)
            .map(Court::hourly_rate)
            .ok_or_else(|| DomainError::UnknownCourt(court_type.clone()))?;

        let client: ClientIdentity = ClientIdentity::new(
            patch
                .full_name
                .as_deref()
                .unwrap_or_else(|| current.client.full_name()),
            patch
                .national_id
                .as_deref()
                .unwrap_or_else(|| current.client.national_id()),
            patch.phone.as_deref().unwrap_or_else(|| current.client.phone()),
            patch.email.as_deref().unwrap_or_else(|| current.client.email()),
        )?;

        if !Self::slot_free(&ledger, &court_type, date, time_slot, Some(id)) {
            return Err(CoreError::SlotTaken {
                court_type,
                date,
                time_slot,
            });
        }

        let updated: Reservation = Reservation {
            id: id.clone(),
            client,
            court_type,
            date,
            time_slot,
            price,
        };

        let previous: Reservation = std::mem::replace(&mut ledger[index], updated.clone());
        if let Err(error) = self.store.save(&ledger) {
            ledger[index] = previous;
            return Err(CoreError::Persistence(error));
        }

        info!(id = %updated.id, court = %updated.court_type, %date, slot = %time_slot, "reservation updated");
        Ok(updated)
    }

    /// Cancels a reservation, removing it from the ledger.
    ///
    /// # Errors
    ///
    /// * `CoreError::NotFound` if no reservation has the id; nothing is
    ///   mutated in that case
    /// * `CoreError::Persistence` if the durable write failed; the record
    ///   is restored in memory
    pub fn cancel(&self, id: &ReservationId) -> Result<(), CoreError> {
        let mut ledger: RwLockWriteGuard<'_, Vec<Reservation>> = self.write_ledger();
        let index: usize = ledger
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| CoreError::NotFound(id.clone()))?;

        let removed: Reservation = ledger.remove(index);
        if let Err(error) = self.store.save(&ledger) {
            ledger.insert(index, removed);
            return Err(CoreError::Persistence(error));
        }

        info!(%id, "reservation cancelled");
        Ok(())
    }

    /// Checks whether a slot is free.
    ///
    /// Returns `true` iff no ledger record other than `exclude` matches
    /// the (`court_type`, `date`, `time_slot`) triple. This predicate is
    /// the single source of truth for the no-double-booking invariant;
    /// create and edit run the same check under their write lock.
    #[must_use]
    pub fn check_availability(
        &self,
        court_type: &str,
        date: Date,
        time_slot: TimeSlot,
        exclude: Option<&ReservationId>,
    ) -> bool {
        Self::slot_free(&self.read_ledger(), court_type, date, time_slot, exclude)
    }

    fn slot_free(
        ledger: &[Reservation],
        court_type: &str,
        date: Date,
        time_slot: TimeSlot,
        exclude: Option<&ReservationId>,
    ) -> bool {
        !ledger.iter().any(|r| {
            exclude != Some(&r.id)
                && r.court_type == court_type
                && r.date == date
                && r.time_slot == time_slot
        })
    }

    fn today() -> Date {
        OffsetDateTime::now_utc().date()
    }

    fn read_ledger(&self) -> RwLockReadGuard<'_, Vec<Reservation>> {
        self.ledger.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_ledger(&self) -> RwLockWriteGuard<'_, Vec<Reservation>> {
        self.ledger.write().unwrap_or_else(PoisonError::into_inner)
    }
}

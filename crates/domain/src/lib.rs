// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{CourtCatalog, OpenHours};
pub use error::DomainError;
pub use types::{ClientIdentity, Court, Reservation, ReservationId, ReservationPatch, TimeSlot};
pub use validation::{
    parse_iso_date, validate_date_not_past, validate_email, validate_full_name,
    validate_national_id, validate_phone,
};

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation management core for the court booking system.
//!
//! The [`ReservationManager`] is the sole owner of the in-memory
//! reservation ledger. It validates inputs via the domain crate, enforces
//! the no-double-booking invariant, and persists the whole ledger through
//! the persistence crate before any mutation reports success.

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

mod error;
mod manager;
mod request;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use manager::ReservationManager;
pub use request::NewReservation;

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the court booking system.
//!
//! The reservation ledger is persisted as one JSON artifact holding the
//! full ordered record sequence. Every save rewrites the whole artifact
//! using a temp-file-then-atomic-rename pattern; loading is lenient and
//! recovers around individually corrupt records.

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

mod data_models;
mod error;
mod store;

#[cfg(test)]
mod tests;

pub use data_models::StoredReservation;
pub use error::PersistenceError;
pub use store::{DEFAULT_LEDGER_PATH, JsonLedgerStore};

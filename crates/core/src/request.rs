// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Raw input for a new reservation, as received from a caller.
///
/// All fields are unvalidated strings; the manager turns them into
/// validated domain values before anything touches the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    /// The client's full name.
    pub full_name: String,
    /// The national identity document number.
    pub national_id: String,
    /// The phone number.
    pub phone: String,
    /// The email address.
    pub email: String,
    /// The court type to book.
    pub court_type: String,
    /// The calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// The hour label, `HH:00`.
    pub time_slot: String,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Court, TimeSlot};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The inclusive range of bookable hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenHours {
    /// First bookable hour (inclusive).
    first: u8,
    /// Last bookable hour (inclusive).
    last: u8,
}

impl OpenHours {
    /// Creates a new `OpenHours` range.
    ///
    /// # Arguments
    ///
    /// * `first` - First bookable hour (inclusive)
    /// * `last` - Last bookable hour (inclusive)
    #[must_use]
    pub const fn new(first: u8, last: u8) -> Self {
        Self { first, last }
    }

    /// Returns the first bookable hour.
    #[must_use]
    pub const fn first(&self) -> u8 {
        self.first
    }

    /// Returns the last bookable hour.
    #[must_use]
    pub const fn last(&self) -> u8 {
        self.last
    }

    /// Checks whether a time slot falls within open hours.
    #[must_use]
    pub const fn contains(&self, slot: TimeSlot) -> bool {
        self.first <= slot.hour() && slot.hour() <= self.last
    }

    /// Validates that a time slot falls within open hours.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::HourOutOfRange` if the slot's hour is outside
    /// the range.
    pub fn validate_slot(&self, slot: TimeSlot) -> Result<(), DomainError> {
        if self.contains(slot) {
            Ok(())
        } else {
            Err(DomainError::HourOutOfRange {
                hour: slot.hour(),
                first: self.first,
                last: self.last,
            })
        }
    }

    /// Returns all bookable slots in order.
    #[must_use]
    pub fn slots(&self) -> Vec<TimeSlot> {
        (self.first..=self.last)
            .filter_map(|hour| TimeSlot::new(hour).ok())
            .collect()
    }
}

impl Default for OpenHours {
    fn default() -> Self {
        Self::new(10, 21)
    }
}

/// The static catalog of courts and their hourly rates.
///
/// Read-only after construction; court configuration is an external
/// concern and there is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtCatalog {
    /// The configured courts, in display order.
    courts: Vec<Court>,
    /// The bookable hour range.
    open_hours: OpenHours,
}

impl CourtCatalog {
    /// Creates a catalog from a list of courts and an open-hours range.
    ///
    /// # Arguments
    ///
    /// * `courts` - The configured courts, in display order
    /// * `open_hours` - The inclusive range of bookable hours
    #[must_use]
    pub const fn new(courts: Vec<Court>, open_hours: OpenHours) -> Self {
        Self { courts, open_hours }
    }

    /// Returns the court type names in configured order.
    #[must_use]
    pub fn court_types(&self) -> Vec<&str> {
        self.courts.iter().map(Court::type_name).collect()
    }

    /// Looks up a court by its type name.
    #[must_use]
    pub fn court(&self, type_name: &str) -> Option<&Court> {
        self.courts.iter().find(|c| c.type_name() == type_name)
    }

    /// Returns the hourly rate for a court type.
    ///
    /// Unknown types yield `Decimal::ZERO` rather than an error: a caller
    /// may probe a type before it is configured, and that lookup is
    /// non-fatal.
    #[must_use]
    pub fn rate_for(&self, type_name: &str) -> Decimal {
        self.court(type_name)
            .map_or(Decimal::ZERO, Court::hourly_rate)
    }

    /// Returns the bookable hour range.
    #[must_use]
    pub const fn open_hours(&self) -> OpenHours {
        self.open_hours
    }
}

impl Default for CourtCatalog {
    fn default() -> Self {
        Self::new(
            vec![
                Court::new("Synthetic", dec!(5.00)),
                Court::new("Volleyball", dec!(7.50)),
            ],
            OpenHours::default(),
        )
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Client full name is empty or contains disallowed characters.
    InvalidName(String),
    /// National identity document is empty or not all digits.
    InvalidDocument(String),
    /// Phone number does not normalize to a valid digit sequence.
    InvalidPhone(String),
    /// Email address does not match the minimal `local@domain.tld` shape.
    InvalidEmail(String),
    /// Reservation date lies in the past.
    InvalidDate {
        /// The rejected date.
        date: time::Date,
        /// The current date at validation time.
        today: time::Date,
    },
    /// Time slot label is not a valid `HH:00` hour label.
    InvalidTimeSlot(String),
    /// Time slot hour falls outside the catalog's open hours.
    HourOutOfRange {
        /// The rejected hour.
        hour: u8,
        /// First bookable hour (inclusive).
        first: u8,
        /// Last bookable hour (inclusive).
        last: u8,
    },
    /// Court type is not present in the catalog.
    UnknownCourt(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidDocument(msg) => write!(f, "Invalid document: {msg}"),
            Self::InvalidPhone(msg) => write!(f, "Invalid phone: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidDate { date, today } => {
                write!(f, "Date {date} is in the past (today is {today})")
            }
            Self::InvalidTimeSlot(label) => {
                write!(f, "Invalid time slot '{label}'. Must be 'HH:00'")
            }
            Self::HourOutOfRange { hour, first, last } => {
                write!(
                    f,
                    "Hour {hour}:00 is outside open hours {first}:00 - {last}:00"
                )
            }
            Self::UnknownCourt(court_type) => {
                write!(f, "Court type '{court_type}' is not in the catalog")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

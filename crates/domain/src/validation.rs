// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;
use time::format_description::well_known::Iso8601;

/// Validates and normalizes a client's full name.
///
/// The name is trimmed, then every character must be a letter (including
/// diacritics), a space, a hyphen, or an apostrophe.
///
/// # Arguments
///
/// * `raw` - The name as entered by the caller
///
/// # Returns
///
/// * `Ok(String)` containing the trimmed name
/// * `Err(DomainError::InvalidName)` if the name is empty or contains
///   disallowed characters
///
/// # Errors
///
/// Returns an error if the trimmed name is empty or any character falls
/// outside the allowed classes.
pub fn validate_full_name(raw: &str) -> Result<String, DomainError> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    // Rule: letters (any script, covering diacritics), spaces, hyphens,
    // and apostrophes only.
    let all_allowed: bool = trimmed
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'');
    if !all_allowed {
        return Err(DomainError::InvalidName(String::from(
            "Name may only contain letters, spaces, hyphens, and apostrophes",
        )));
    }

    Ok(trimmed.to_string())
}

/// Validates and normalizes a national identity document number.
///
/// No length constraint is enforced; any non-empty digit string is accepted.
///
/// # Errors
///
/// Returns `DomainError::InvalidDocument` if the trimmed value is empty or
/// contains a non-digit character.
pub fn validate_national_id(raw: &str) -> Result<String, DomainError> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidDocument(String::from(
            "Document must contain only digits",
        )));
    }
    Ok(trimmed.to_string())
}

/// Validates and normalizes a phone number.
///
/// Spaces, hyphens, and parentheses are stripped first. The remainder must
/// be an optional leading `+` followed by 6 to 15 digits.
///
/// # Arguments
///
/// * `raw` - The phone number as entered by the caller
///
/// # Returns
///
/// * `Ok(String)` containing the stripped number (leading `+` preserved)
/// * `Err(DomainError::InvalidPhone)` otherwise
///
/// # Errors
///
/// Returns an error if, after stripping, the number is not an optional `+`
/// followed by 6-15 digits.
pub fn validate_phone(raw: &str) -> Result<String, DomainError> {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    let digits: &str = stripped.strip_prefix('+').unwrap_or(&stripped);
    let digit_count: usize = digits.len();
    let all_digits: bool = digits.chars().all(|c| c.is_ascii_digit());

    if !all_digits || !(6..=15).contains(&digit_count) {
        return Err(DomainError::InvalidPhone(String::from(
            "Phone must be an optional '+' followed by 6 to 15 digits",
        )));
    }

    Ok(stripped)
}

/// Validates and normalizes an email address.
///
/// This is a deliberately minimal shape check, not an RFC 5322 parse:
/// exactly one `@`, a non-empty local part, and a domain containing an
/// interior dot.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address does not match the
/// minimal `local@domain.tld` shape.
pub fn validate_email(raw: &str) -> Result<String, DomainError> {
    let trimmed: &str = raw.trim();

    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(DomainError::InvalidEmail(String::from(
            "Email must contain '@'",
        )));
    };

    // Rule: exactly one '@'; a dot in the domain with characters on
    // both sides of it.
    let domain_has_interior_dot: bool = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1);

    if local.is_empty() || domain.contains('@') || !domain_has_interior_dot {
        return Err(DomainError::InvalidEmail(String::from(
            "Email must look like local@domain.tld",
        )));
    }

    Ok(trimmed.to_string())
}

/// Parses an ISO 8601 (`YYYY-MM-DD`) calendar date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// ISO 8601 date.
pub fn parse_iso_date(raw: &str) -> Result<Date, DomainError> {
    Date::parse(raw, &Iso8601::DEFAULT).map_err(|e| DomainError::DateParseError {
        date_string: raw.to_string(),
        error: e.to_string(),
    })
}

/// Validates that a reservation date is not in the past.
///
/// `today` is passed in rather than read from a clock so the check stays
/// pure and deterministic.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if `date` is before `today`.
pub fn validate_date_not_past(date: Date, today: Date) -> Result<(), DomainError> {
    if date < today {
        return Err(DomainError::InvalidDate { date, today });
    }
    Ok(())
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::StoredReservation;
use crate::error::PersistenceError;
use court_booking_domain::Reservation;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default location of the ledger artifact.
pub const DEFAULT_LEDGER_PATH: &str = "reservas.json";

/// Durable storage of the reservation ledger as a single JSON artifact.
///
/// The ledger is always written as a whole. Writes go to a temporary file
/// first and are renamed over the primary, so a crash mid-write leaves the
/// primary holding either the complete old ledger or the complete new one,
/// never a mix.
#[derive(Debug, Clone)]
pub struct JsonLedgerStore {
    /// Path of the primary ledger artifact.
    path: PathBuf,
}

impl JsonLedgerStore {
    /// Creates a store backed by the given artifact path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the primary ledger artifact.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full reservation ledger.
    ///
    /// An absent artifact is the first-run state and yields an empty
    /// ledger, not an error. An artifact that cannot be parsed as a whole
    /// is treated as empty with a warning. A record that cannot be
    /// reconstructed is skipped with a warning; one corrupt record never
    /// discards the rest of the ledger.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ReadFailed` if the artifact exists but
    /// cannot be read.
    pub fn load(&self) -> Result<Vec<Reservation>, PersistenceError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no ledger artifact, starting empty");
            return Ok(Vec::new());
        }

        let raw: String = fs::read_to_string(&self.path)
            .map_err(|e| PersistenceError::ReadFailed(e.to_string()))?;

        let records: Vec<StoredReservation> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "ledger artifact is unparsable, treating as empty"
                );
                return Ok(Vec::new());
            }
        };

        let mut reservations: Vec<Reservation> = Vec::with_capacity(records.len());
        for record in records {
            match record.try_into_reservation() {
                Ok(reservation) => reservations.push(reservation),
                Err(error) => {
                    warn!(%error, "skipping corrupt ledger record");
                }
            }
        }

        debug!(count = reservations.len(), "loaded reservation ledger");
        Ok(reservations)
    }

    /// Persists the full reservation ledger.
    ///
    /// The serialized ledger is written to a temporary sibling file,
    /// synced, and atomically renamed over the primary artifact. On any
    /// failure the temporary file is removed and the primary is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SerializationError`,
    /// `PersistenceError::WriteFailed`, or
    /// `PersistenceError::AtomicReplaceFailed` depending on the phase that
    /// failed.
    pub fn save(&self, reservations: &[Reservation]) -> Result<(), PersistenceError> {
        let records: Vec<StoredReservation> = reservations
            .iter()
            .map(StoredReservation::from_reservation)
            .collect();
        let payload: String = serde_json::to_string_pretty(&records)?;

        let temp_path: PathBuf = self.temp_path();
        let result: Result<(), PersistenceError> = self.write_and_replace(&temp_path, &payload);
        if result.is_err() {
            // The primary must stay untouched; only the temp artifact is
            // cleaned up.
            let _ = fs::remove_file(&temp_path);
        }
        result
    }

    fn temp_path(&self) -> PathBuf {
        let mut raw = self.path.clone().into_os_string();
        raw.push(".tmp");
        PathBuf::from(raw)
    }

    fn write_and_replace(&self, temp_path: &Path, payload: &str) -> Result<(), PersistenceError> {
        let mut file: File =
            File::create(temp_path).map_err(|e| PersistenceError::WriteFailed(e.to_string()))?;
        file.write_all(payload.as_bytes())
            .map_err(|e| PersistenceError::WriteFailed(e.to_string()))?;
        file.sync_all()
            .map_err(|e| PersistenceError::WriteFailed(e.to_string()))?;
        drop(file);

        fs::rename(temp_path, &self.path)
            .map_err(|e| PersistenceError::AtomicReplaceFailed(e.to_string()))?;

        debug!(path = %self.path.display(), "ledger artifact replaced");
        Ok(())
    }
}

impl Default for JsonLedgerStore {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_PATH)
    }
}

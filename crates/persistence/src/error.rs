// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Reading the ledger artifact failed.
    ReadFailed(String),
    /// Writing the temporary ledger artifact failed.
    WriteFailed(String),
    /// Atomically replacing the primary artifact failed.
    AtomicReplaceFailed(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// A stored record could not be reconstructed as a domain reservation.
    ReconstructionError(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadFailed(msg) => write!(f, "Failed to read ledger: {msg}"),
            Self::WriteFailed(msg) => write!(f, "Failed to write ledger: {msg}"),
            Self::AtomicReplaceFailed(msg) => {
                write!(f, "Failed to replace ledger atomically: {msg}")
            }
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::ReconstructionError(msg) => {
                write!(f, "Record reconstruction error: {msg}")
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

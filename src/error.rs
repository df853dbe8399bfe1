//! Error types for the planner.
//!
//! Recoverable failures surface as `PlannerError`. Storage backends
//! report `StorageError`, which the store logs and survives. Malformed
//! persisted snapshots raise `SnapshotError` and are always recovered
//! locally by discarding the snapshot.

use crate::catalog::EquipmentSlotKind;
use thiserror::Error;

/// Errors returned by fallible planner operations.
///
/// # Examples
///
/// ```rust
/// use imbuement_planner::{EquipmentSlotKind, PlannerError};
///
/// let err = PlannerError::SlotIndexOutOfRange {
///     kind: EquipmentSlotKind::Helmet,
///     index: 4,
///     len: 2,
/// };
/// assert_eq!(err.to_string(), "Slot index 4 out of range for Helmet (2 slots)");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlannerError {
    /// An imbuement position beyond the configured slot quantity was addressed.
    #[error("Slot index {index} out of range for {kind} ({len} slots)")]
    SlotIndexOutOfRange {
        kind: EquipmentSlotKind,
        index: usize,
        len: usize,
    },

    /// An item name did not match any catalog item.
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// The planner configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Errors raised by a [`Storage`](crate::storage::Storage) backend.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    /// Reading or writing the value for `key` failed.
    #[error("Storage I/O failed for key {key}: {message}")]
    Io { key: String, message: String },

    /// The backend cannot be used at all.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Reasons a persisted ledger snapshot is rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SnapshotError {
    /// The blob is not valid JSON.
    #[error("Malformed snapshot under {key}: {message}")]
    Malformed { key: String, message: String },

    /// The blob parsed, but is not a JSON object.
    #[error("Snapshot under {0} is not an object")]
    NotAnObject(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Io {
            key: "ti_item_stock".into(),
            message: "disk gone".into(),
        };
        assert_eq!(
            err.to_string(),
            "Storage I/O failed for key ti_item_stock: disk gone"
        );
    }

    #[test]
    fn test_snapshot_error_display() {
        let err = SnapshotError::NotAnObject("ti_item_prices".into());
        assert_eq!(err.to_string(), "Snapshot under ti_item_prices is not an object");
    }
}

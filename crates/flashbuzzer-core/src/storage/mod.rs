//! Durable key-value storage for parameter records.
//!
//! All records live in one flash erase block owned by a single
//! [`StorageDriver`]. Every write rewrites the whole block, there are no
//! transactions and no write coalescing.

mod driver;
mod records;
mod store;

use core::fmt;

pub use driver::{NorFlashDriver, StorageDriver};
pub use store::RecordStore;

use crate::value::{ParamKind, TypedValue};

/// Size of the parameter partition in bytes (one flash erase block).
pub const PARTITION_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// The flash driver failed to read, erase or write
    DriverError,
    /// The stored image is truncated or malformed
    InvalidData,
    /// The encoded records do not fit into the partition
    PartitionFull,
    /// Parameter name does not fit into a record header
    KeyTooLong,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            StorageError::DriverError => "flash driver error",
            StorageError::InvalidData => "invalid record data",
            StorageError::PartitionFull => "parameter partition is full",
            StorageError::KeyTooLong => "parameter name is too long",
        };
        f.write_str(message)
    }
}

/// Typed key-value store contract used by the parameter registry.
pub trait KeyValueStore {
    /// Load the value stored under `name`.
    ///
    /// Returns `Ok(None)` when nothing is stored or the record holds the
    /// other type.
    fn load(&mut self, name: &str, kind: ParamKind) -> Result<Option<TypedValue>, StorageError>;

    /// Durably write `value` under `name`.
    fn store(&mut self, name: &str, value: &TypedValue) -> Result<(), StorageError>;
}

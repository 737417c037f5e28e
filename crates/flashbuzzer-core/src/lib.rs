#![no_std]

//! Typed parameter storage
//!
//! Architecture layers:
//! - `value` - Typed value model shared by every layer
//! - `storage` - Durable key-value records on a NOR flash block
//! - `params` - In-memory parameter catalog with write-through persistence

extern crate alloc;

pub mod params;
pub mod storage;
pub mod value;

pub use params::{GROUP_SEPARATOR, GroupEntry, GroupView, ParamError, ParameterRegistry};
pub use storage::{
    KeyValueStore, NorFlashDriver, PARTITION_SIZE, RecordStore, StorageDriver, StorageError,
};
pub use value::{ParamKind, TypedValue};

//! Flash storage driver used by the parameter record store.

use embedded_storage::nor_flash::NorFlash;

use super::{PARTITION_SIZE, StorageError};

/// Raw access to the block that holds the record image.
pub trait StorageDriver {
    /// Size of the storage region in bytes
    fn capacity(&self) -> usize;

    /// Read the beginning of the region into `buffer`
    fn read(&mut self, buffer: &mut [u8]) -> Result<(), StorageError>;

    /// Replace the region contents with `buffer`
    fn write(&mut self, buffer: &[u8]) -> Result<(), StorageError>;

    /// Reset the region to the erased state
    fn erase(&mut self) -> Result<(), StorageError>;
}

/// Storage driver over a NOR flash block.
///
/// The driver operates strictly within [`PARTITION_SIZE`] bytes starting at
/// `offset`, which must be aligned to the flash erase size.
pub struct NorFlashDriver<F: NorFlash> {
    flash: F,
    offset: u32,
}

impl<F: NorFlash> NorFlashDriver<F> {
    pub fn new(flash: F, offset: u32) -> Self {
        Self { flash, offset }
    }

    /// Release the underlying flash
    pub fn into_inner(self) -> F {
        self.flash
    }

    #[allow(clippy::cast_possible_truncation)]
    fn end(&self) -> u32 {
        self.offset + PARTITION_SIZE as u32
    }
}

impl<F: NorFlash> StorageDriver for NorFlashDriver<F> {
    fn capacity(&self) -> usize {
        PARTITION_SIZE
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<(), StorageError> {
        if buffer.len() > PARTITION_SIZE {
            return Err(StorageError::DriverError);
        }
        self.flash
            .read(self.offset, buffer)
            .map_err(|_| StorageError::DriverError)
    }

    fn write(&mut self, buffer: &[u8]) -> Result<(), StorageError> {
        if buffer.len() > PARTITION_SIZE {
            return Err(StorageError::PartitionFull);
        }
        self.erase()?;
        self.flash
            .write(self.offset, buffer)
            .map_err(|_| StorageError::DriverError)
    }

    fn erase(&mut self) -> Result<(), StorageError> {
        let end = self.end();
        self.flash
            .erase(self.offset, end)
            .map_err(|_| StorageError::DriverError)
    }
}

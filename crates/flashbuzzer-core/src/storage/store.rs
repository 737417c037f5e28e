use alloc::vec;

use super::records::{ERASED, RecordImage};
use super::{KeyValueStore, StorageDriver, StorageError};
use crate::value::{ParamKind, TypedValue};

/// Persistent record store implementation using a storage driver.
///
/// Records are namespaced under a single fixed partition name. Each
/// [`KeyValueStore::store`] call is an independent read-modify-write of the
/// whole partition.
pub struct RecordStore<D: StorageDriver> {
    driver: D,
    namespace: &'static str,
}

impl<D: StorageDriver> RecordStore<D> {
    pub fn new(driver: D, namespace: &'static str) -> Self {
        Self { driver, namespace }
    }

    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Release the underlying driver
    pub fn into_inner(self) -> D {
        self.driver
    }

    /// Erase every record in the partition
    pub fn clear(&mut self) -> Result<(), StorageError> {
        log::info!("storage: clearing namespace '{}'", self.namespace);
        self.driver.erase()
    }

    fn read_image(&mut self) -> Result<RecordImage, StorageError> {
        let mut buffer = vec![ERASED; self.driver.capacity()];
        self.driver.read(&mut buffer)?;
        RecordImage::decode(self.namespace, &buffer)
    }

    fn write_image(&mut self, image: &RecordImage) -> Result<(), StorageError> {
        let mut buffer = vec![ERASED; self.driver.capacity()];
        let used = image.encode(self.namespace, &mut buffer)?;
        log::debug!("storage: writing {} of {} bytes", used, buffer.len());
        self.driver.write(&buffer)
    }
}

impl<D: StorageDriver> KeyValueStore for RecordStore<D> {
    fn load(&mut self, name: &str, kind: ParamKind) -> Result<Option<TypedValue>, StorageError> {
        let image = self.read_image()?;
        Ok(image
            .get(name)
            .filter(|value| value.kind() == kind)
            .cloned())
    }

    fn store(&mut self, name: &str, value: &TypedValue) -> Result<(), StorageError> {
        let mut image = match self.read_image() {
            Ok(image) => image,
            Err(StorageError::InvalidData) => {
                log::warn!("storage: partition is corrupted, starting from an empty image");
                RecordImage::default()
            }
            Err(e) => return Err(e),
        };
        image.insert(name, value.clone());
        self.write_image(&image)
    }
}

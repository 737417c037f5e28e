#![allow(dead_code)]

use std::collections::HashMap;

use flashbuzzer_core::{KeyValueStore, ParamKind, ParameterRegistry, StorageError, TypedValue};

/// Volatile key-value store with write failure injection.
#[derive(Default)]
pub struct MemoryStore {
    pub records: HashMap<String, TypedValue>,
    pub fail_writes: bool,
}

impl KeyValueStore for MemoryStore {
    fn load(&mut self, name: &str, kind: ParamKind) -> Result<Option<TypedValue>, StorageError> {
        Ok(self
            .records
            .get(name)
            .filter(|value| value.kind() == kind)
            .cloned())
    }

    fn store(&mut self, name: &str, value: &TypedValue) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::DriverError);
        }
        self.records.insert(name.to_string(), value.clone());
        Ok(())
    }
}

/// Registry populated the way the device does it.
pub fn device_registry() -> ParameterRegistry<MemoryStore> {
    let mut registry = ParameterRegistry::new(MemoryStore::default());
    registry
        .register_text("Title", "ESP32 Device Configuration")
        .unwrap();
    registry.register_number("Color_Red", 255.0).unwrap();
    registry.register_number("Color_Green", 255.0).unwrap();
    registry.register_number("Color_Blue", 255.0).unwrap();
    registry.register_number("Dot_Speed", 30.0).unwrap();
    registry
}

#![allow(dead_code)]

use std::collections::HashMap;

use flashbuzzer_composer::LedDriver;
use flashbuzzer_core::{KeyValueStore, ParamKind, StorageError, TypedValue};
use smart_leds::RGB8;

/// LED driver that keeps every flushed frame.
#[derive(Default)]
pub struct RecordingDriver<const N: usize> {
    pub frames: Vec<([RGB8; N], u8)>,
}

impl<const N: usize> RecordingDriver<N> {
    pub fn last(&self) -> &[RGB8; N] {
        &self.frames.last().expect("no frame flushed").0
    }
}

impl<const N: usize> LedDriver<N> for RecordingDriver<N> {
    fn write(&mut self, colors: &[RGB8; N], brightness: u8) {
        self.frames.push((*colors, brightness));
    }
}

/// LED driver that only counts flushes, for long runs.
#[derive(Default)]
pub struct CountingDriver {
    pub flushes: usize,
}

impl<const N: usize> LedDriver<N> for CountingDriver {
    fn write(&mut self, _colors: &[RGB8; N], _brightness: u8) {
        self.flushes += 1;
    }
}

/// Volatile key-value store.
#[derive(Default)]
pub struct MemoryStore {
    pub records: HashMap<String, TypedValue>,
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
        self.records.insert(name.to_string(), value.clone());
        Ok(())
    }
}

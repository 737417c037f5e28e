//! On-flash record image codec.
//!
//! Layout:
//! `[magic u16 LE][namespace len u8][namespace]` followed by records
//! `[tag u8][name len u8][value len u16 LE][name][value]`. The record list
//! ends at the first `0xFF` tag (erased flash) or at the end of the block.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use super::StorageError;
use crate::value::{ParamKind, TypedValue};

const MAGIC_HEADER: u16 = 0xBEEF;
const MAGIC_HEADER_SIZE: usize = MAGIC_HEADER.to_le_bytes().len();
const RECORD_HEADER_SIZE: usize = 4;
const END_MARKER: u8 = 0xFF;
pub(super) const ERASED: u8 = 0xFF;

/// Decoded contents of the parameter partition.
#[derive(Debug, Default)]
pub(super) struct RecordImage {
    records: BTreeMap<String, TypedValue>,
}

impl RecordImage {
    pub(super) fn get(&self, name: &str) -> Option<&TypedValue> {
        self.records.get(name)
    }

    pub(super) fn insert(&mut self, name: &str, value: TypedValue) {
        self.records.insert(String::from(name), value);
    }

    /// Decode an image.
    ///
    /// Blank flash, an unknown magic header or a foreign namespace decode
    /// to an empty image.
    pub(super) fn decode(namespace: &str, data: &[u8]) -> Result<Self, StorageError> {
        let mut image = Self::default();
        if data.len() < MAGIC_HEADER_SIZE {
            return Ok(image);
        }
        let magic = u16::from_le_bytes([data[0], data[1]]);
        if magic != MAGIC_HEADER {
            return Ok(image);
        }

        let mut cursor = MAGIC_HEADER_SIZE;
        let ns_len = *data.get(cursor).ok_or(StorageError::InvalidData)? as usize;
        cursor += 1;
        let ns = data
            .get(cursor..cursor + ns_len)
            .ok_or(StorageError::InvalidData)?;
        if ns != namespace.as_bytes() {
            log::warn!("storage: foreign namespace in partition, ignoring records");
            return Ok(image);
        }
        cursor += ns_len;

        while cursor < data.len() && data[cursor] != END_MARKER {
            let header = data
                .get(cursor..cursor + RECORD_HEADER_SIZE)
                .ok_or(StorageError::InvalidData)?;
            let kind = ParamKind::from_u8(header[0]).ok_or(StorageError::InvalidData)?;
            let name_len = header[1] as usize;
            let value_len = u16::from_le_bytes([header[2], header[3]]) as usize;
            cursor += RECORD_HEADER_SIZE;

            let name = data
                .get(cursor..cursor + name_len)
                .ok_or(StorageError::InvalidData)?;
            let name = core::str::from_utf8(name).map_err(|_| StorageError::InvalidData)?;
            cursor += name_len;

            let raw = data
                .get(cursor..cursor + value_len)
                .ok_or(StorageError::InvalidData)?;
            cursor += value_len;

            let value = match kind {
                ParamKind::Text => {
                    let text = core::str::from_utf8(raw).map_err(|_| StorageError::InvalidData)?;
                    TypedValue::Text(String::from(text))
                }
                ParamKind::Number => {
                    let bytes: [u8; 4] = raw.try_into().map_err(|_| StorageError::InvalidData)?;
                    TypedValue::Number(f32::from_le_bytes(bytes))
                }
            };
            image.insert(name, value);
        }

        Ok(image)
    }

    /// Encode the image into `buffer`, which must be pre-filled with
    /// [`ERASED`] bytes. Returns the number of bytes used.
    pub(super) fn encode(&self, namespace: &str, buffer: &mut [u8]) -> Result<usize, StorageError> {
        let mut out = Writer { buffer, cursor: 0 };

        out.put(&MAGIC_HEADER.to_le_bytes())?;
        let ns_len = u8::try_from(namespace.len()).map_err(|_| StorageError::KeyTooLong)?;
        out.put(&[ns_len])?;
        out.put(namespace.as_bytes())?;

        for (name, value) in &self.records {
            let name_len = u8::try_from(name.len()).map_err(|_| StorageError::KeyTooLong)?;
            let payload: Vec<u8> = match value {
                TypedValue::Text(text) => text.as_bytes().to_vec(),
                TypedValue::Number(number) => number.to_le_bytes().to_vec(),
            };
            let value_len =
                u16::try_from(payload.len()).map_err(|_| StorageError::PartitionFull)?;

            out.put(&[value.kind().as_u8(), name_len])?;
            out.put(&value_len.to_le_bytes())?;
            out.put(name.as_bytes())?;
            out.put(&payload)?;
        }

        Ok(out.cursor)
    }
}

struct Writer<'a> {
    buffer: &'a mut [u8],
    cursor: usize,
}

impl Writer<'_> {
    fn put(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        let end = self.cursor + bytes.len();
        let target = self
            .buffer
            .get_mut(self.cursor..end)
            .ok_or(StorageError::PartitionFull)?;
        target.copy_from_slice(bytes);
        self.cursor = end;
        Ok(())
    }
}

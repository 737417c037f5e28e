//! Parameter Registry
//!
//! The in-memory typed parameter catalog, source of truth at runtime.
//! Registration loads the persisted value (if any) and every accepted update
//! is written through to the [`KeyValueStore`] before the call returns.

mod group;

use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;

pub use group::{GroupEntry, GroupView};

use crate::storage::{KeyValueStore, StorageError};
use crate::value::{ParamKind, TypedValue};

/// Separates the group prefix from the leaf name, e.g. `Color_Red`.
pub const GROUP_SEPARATOR: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    /// No parameter has been registered under the name
    UnknownParameter,
    /// The parameter is declared with another type
    TypeMismatch {
        declared: ParamKind,
        requested: ParamKind,
    },
    /// The value is kept in memory but could not be made durable
    StoreWriteFailed(StorageError),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::UnknownParameter => f.write_str("unknown parameter"),
            ParamError::TypeMismatch {
                declared,
                requested,
            } => write!(
                f,
                "type mismatch: declared {}, requested {}",
                declared.as_str(),
                requested.as_str()
            ),
            ParamError::StoreWriteFailed(e) => write!(f, "persisting failed: {}", e),
        }
    }
}

/// Typed parameter catalog with write-through persistence.
pub struct ParameterRegistry<S: KeyValueStore> {
    store: S,
    params: BTreeMap<String, TypedValue>,
}

impl<S: KeyValueStore> ParameterRegistry<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            params: BTreeMap::new(),
        }
    }

    /// Register a text parameter
    pub fn register_text(&mut self, name: &str, default: &str) -> Result<(), ParamError> {
        self.register(name, TypedValue::Text(String::from(default)))
    }

    /// Register a number parameter
    pub fn register_number(&mut self, name: &str, default: f32) -> Result<(), ParamError> {
        self.register(name, TypedValue::Number(default))
    }

    /// Register a parameter with its default value.
    ///
    /// Registering an existing name again is a no-op when the type matches.
    /// A persisted value overrides the default; the resulting value is
    /// always written back so the record exists going forward.
    pub fn register(&mut self, name: &str, default: TypedValue) -> Result<(), ParamError> {
        let kind = default.kind();
        if let Some(existing) = self.params.get(name) {
            return check_kind(existing.kind(), kind);
        }

        let value = match self.store.load(name, kind) {
            Ok(Some(stored)) => {
                log::debug!("params: restored '{}' = {}", name, stored);
                stored
            }
            Ok(None) => default,
            Err(e) => {
                log::warn!("params: failed to read '{}', using default: {}", name, e);
                default
            }
        };

        self.params.insert(String::from(name), value.clone());
        self.persist(name, &value)
    }

    /// Get the declared type of a parameter
    pub fn kind_of(&self, name: &str) -> Option<ParamKind> {
        self.params.get(name).map(TypedValue::kind)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over all parameters in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.params.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Get the last known value of a parameter
    pub fn get(&self, name: &str) -> Result<&TypedValue, ParamError> {
        self.params.get(name).ok_or(ParamError::UnknownParameter)
    }

    pub fn get_text(&self, name: &str) -> Result<&str, ParamError> {
        match self.get(name)? {
            TypedValue::Text(text) => Ok(text.as_str()),
            TypedValue::Number(_) => Err(ParamError::TypeMismatch {
                declared: ParamKind::Number,
                requested: ParamKind::Text,
            }),
        }
    }

    pub fn get_number(&self, name: &str) -> Result<f32, ParamError> {
        match self.get(name)? {
            TypedValue::Number(number) => Ok(*number),
            TypedValue::Text(_) => Err(ParamError::TypeMismatch {
                declared: ParamKind::Text,
                requested: ParamKind::Number,
            }),
        }
    }

    pub fn set_text(&mut self, name: &str, value: &str) -> Result<(), ParamError> {
        self.set(name, TypedValue::Text(String::from(value)))
    }

    pub fn set_number(&mut self, name: &str, value: f32) -> Result<(), ParamError> {
        self.set(name, TypedValue::Number(value))
    }

    /// Update a parameter and write it through to the store.
    ///
    /// A value of the wrong type is rejected without mutation. When
    /// persisting fails the in-memory value is kept and
    /// [`ParamError::StoreWriteFailed`] is returned.
    pub fn set(&mut self, name: &str, value: TypedValue) -> Result<(), ParamError> {
        let slot = self
            .params
            .get_mut(name)
            .ok_or(ParamError::UnknownParameter)?;
        check_kind(slot.kind(), value.kind())?;
        slot.clone_from(&value);
        self.persist(name, &value)
    }

    /// Partition parameters by the prefix before the first [`GROUP_SEPARATOR`]
    pub fn group_view(&self) -> GroupView<'_> {
        GroupView::from_params(self.iter())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Tear down the registry and hand back its store
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self, name: &str, value: &TypedValue) -> Result<(), ParamError> {
        self.store.store(name, value).map_err(|e| {
            log::error!("params: failed to persist '{}': {}", name, e);
            ParamError::StoreWriteFailed(e)
        })
    }
}

fn check_kind(declared: ParamKind, requested: ParamKind) -> Result<(), ParamError> {
    if declared == requested {
        Ok(())
    } else {
        Err(ParamError::TypeMismatch {
            declared,
            requested,
        })
    }
}

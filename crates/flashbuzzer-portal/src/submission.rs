//! Applying submitted form values to the parameter registry.

use alloc::string::String;
use alloc::vec::Vec;

use flashbuzzer_core::{KeyValueStore, ParamError, ParamKind, ParameterRegistry, TypedValue};

/// Outcome of one form submission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    /// Parameters whose in-memory value was updated
    pub updated: Vec<String>,
    /// Names that are not registered
    pub ignored: Vec<String>,
    /// Values that could not be converted to the declared type
    pub rejected: Vec<String>,
    /// Updated parameters whose value could not be made durable
    pub unsaved: Vec<String>,
}

impl SubmissionReport {
    /// Check if every recognized value was applied and persisted
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.unsaved.is_empty()
    }
}

/// Apply submitted `(name, value)` pairs.
///
/// Unregistered names are ignored. Text parameters take the value as is;
/// Number parameters accept any finite float, anything else is rejected
/// without touching the current value. A failed persist keeps the new value
/// in memory.
pub fn apply_submission<'a, S: KeyValueStore>(
    registry: &mut ParameterRegistry<S>,
    args: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> SubmissionReport {
    let mut report = SubmissionReport::default();
    for (name, raw) in args {
        let value = match registry.kind_of(name) {
            None => {
                log::debug!("portal: ignoring unknown argument '{}'", name);
                report.ignored.push(String::from(name));
                continue;
            }
            Some(ParamKind::Text) => TypedValue::from(raw),
            Some(ParamKind::Number) => match parse_number(raw) {
                Some(number) => TypedValue::Number(number),
                None => {
                    log::warn!("portal: '{}' is not a number: '{}'", name, raw);
                    report.rejected.push(String::from(name));
                    continue;
                }
            },
        };

        match registry.set(name, value) {
            Ok(()) => report.updated.push(String::from(name)),
            Err(ParamError::StoreWriteFailed(_)) => {
                report.updated.push(String::from(name));
                report.unsaved.push(String::from(name));
            }
            Err(e) => {
                log::warn!("portal: failed to set '{}': {}", name, e);
                report.rejected.push(String::from(name));
            }
        }
    }
    report
}

fn parse_number(raw: &str) -> Option<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|number| number.is_finite())
}

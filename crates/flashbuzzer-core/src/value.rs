use alloc::string::String;
use core::fmt;

/// Declared type of a parameter.
///
/// Fixed at first registration and never changes for a given name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    Number,
}

impl ParamKind {
    pub(crate) const fn as_u8(self) -> u8 {
        match self {
            ParamKind::Text => 1,
            ParamKind::Number => 2,
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(ParamKind::Text),
            2 => Some(ParamKind::Number),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ParamKind::Text => "text",
            ParamKind::Number => "number",
        }
    }
}

/// A parameter value tagged with its type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Text(String),
    Number(f32),
}

impl TypedValue {
    /// Get the type of the value
    pub const fn kind(&self) -> ParamKind {
        match self {
            TypedValue::Text(_) => ParamKind::Text,
            TypedValue::Number(_) => ParamKind::Number,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TypedValue::Text(text) => Some(text.as_str()),
            TypedValue::Number(_) => None,
        }
    }

    pub const fn as_number(&self) -> Option<f32> {
        match self {
            TypedValue::Number(number) => Some(*number),
            TypedValue::Text(_) => None,
        }
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::Text(String::from(value))
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        TypedValue::Text(value)
    }
}

impl From<f32> for TypedValue {
    fn from(value: f32) -> Self {
        TypedValue::Number(value)
    }
}

impl fmt::Display for TypedValue {
    /// Numbers use the shortest representation that parses back to the same value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Text(text) => f.write_str(text),
            TypedValue::Number(number) => write!(f, "{}", number),
        }
    }
}

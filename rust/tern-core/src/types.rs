//! Structural type tags answered by `istype`.

use crate::error::PalError;
use crate::values::Value;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// The closed set of kinds a value can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum TypeTag {
    #[strum(to_string = "string")]
    String,
    #[strum(to_string = "list")]
    List,
    #[strum(to_string = "dict", serialize = "mapping")]
    Mapping,
    #[strum(to_string = "number")]
    Number,
}

impl TypeTag {
    /// Resolve a tag name as written by callers of `istype`.
    pub fn parse(name: &str) -> Result<Self, PalError> {
        TypeTag::from_str(name)
            .map_err(|_| PalError::Type(format!("unrecognized type tag '{}'", name)))
    }

    /// Classify a value by structural kind. `None` and raw bytes belong to no
    /// tag.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) => Some(TypeTag::String),
            Value::List(_) => Some(TypeTag::List),
            Value::Map(_) | Value::Record(_) => Some(TypeTag::Mapping),
            Value::Int(_) | Value::Float(_) | Value::Bool(_) => Some(TypeTag::Number),
            Value::None | Value::Bytes(_) => None,
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        TypeTag::of(value) == Some(self)
    }
}

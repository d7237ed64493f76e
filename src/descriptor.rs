//! Persisted function descriptors.
//! The engine stores one [`FunctionDescriptor`] per registered user-defined
//! function; the built-in construction path synthesizes the same shape so
//! the adapter has a single input model. Descriptors are immutable once
//! created and are retained for the planner's lifetime.

use serde::{Deserialize, Serialize};

/// One argument of a function, in the engine's vocabulary.
///
/// `position` ordinals form a dense prefix 0..n-1. A non-null
/// `default_value` makes the argument optional. Const-ness and the
/// inclusive min/max bound literals are informational pass-throughs: the
/// planner bridge copies them but never coerces or interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    pub position: usize,
    pub type_name: String,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub min_value: Option<String>,
    #[serde(default)]
    pub max_value: Option<String>,
}

impl ArgumentDescriptor {
    pub fn new<S: Into<String>>(position: usize, type_name: S) -> Self {
        Self {
            position,
            type_name: type_name.into(),
            is_array: false,
            is_constant: false,
            default_value: None,
            min_value: None,
            max_value: None,
        }
    }
}

/// A registered function: name, arguments, return-type name in the engine
/// SQL vocabulary, the opaque implementation identifier, and an optional
/// human-readable signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub name: String,
    pub args: Vec<ArgumentDescriptor>,
    pub return_type: String,
    pub impl_class: String,
    #[serde(default)]
    pub signature: Option<String>,
}

impl FunctionDescriptor {
    pub fn new<S: Into<String>>(
        name: S,
        args: Vec<ArgumentDescriptor>,
        return_type: S,
        impl_class: S,
        signature: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            args,
            return_type: return_type.into(),
            impl_class: impl_class.into(),
            signature,
        }
    }

    /// Parse a descriptor from its stored JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The stored JSON form, as the metadata catalog persists it.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

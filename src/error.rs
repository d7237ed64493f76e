//! Unified error model for the planner bridge.
//! Everything the adapters can reject surfaces through [`PlanError`]; errors
//! propagate synchronously at the call site and are never retried or logged
//! in place of being returned.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    /// A return-type or argument-type name did not resolve through the type
    /// registry after identifier normalization.
    #[error("unknown SQL type name '{name}'")]
    InvalidTypeName { name: String },

    /// Aggregate built-ins cannot be presented as planner scalar functions.
    #[error("aggregate function '{function}' cannot be adapted as a scalar function")]
    UnsupportedAggregate { function: String },

    /// A built-in argument carried no allowed types, so no SQL type name
    /// can be derived for it.
    #[error("argument {ordinal} of built-in '{function}' has no allowed types")]
    Unconvertible { function: String, ordinal: usize },

    /// The implementation identifier of a built-in is not present in the
    /// implementation registry, so its return type cannot be discovered.
    #[error("no implementation entry '{impl_class}' for built-in '{function}'")]
    InstantiationFailed { function: String, impl_class: String },

    /// The statement context could not reach the configuration service.
    #[error("configuration service unavailable: {message}")]
    ConfigAccess { message: String },

    /// A split pattern was rejected by the selected splitter back-end. The
    /// back-end's own error is carried unchanged as the source.
    #[error("{backend} splitter rejected pattern")]
    InvalidPattern {
        backend: &'static str,
        #[source]
        source: regex::Error,
    },
}

impl PlanError {
    pub fn invalid_type_name<S: Into<String>>(name: S) -> Self {
        PlanError::InvalidTypeName { name: name.into() }
    }

    pub fn config_access<S: Into<String>>(message: S) -> Self {
        PlanError::ConfigAccess { message: message.into() }
    }
}

pub type PlanResult<T> = Result<T, PlanError>;

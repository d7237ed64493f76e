//! Engine configuration service and statement compile context.
//! The bridge only needs keyed boolean lookups with documented defaults;
//! the full configuration system (files, overrides, reload) lives with the
//! engine. A [`StatementContext`] may be detached from its session, in
//! which case configuration access fails rather than silently defaulting.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// Compile-time flag: when true, regex split functions compile their
/// pattern through the byte-oriented back-end instead of the
/// character-string one.
pub const USE_BYTE_BASED_REGEX: &str = "use-byte-based-regex";

/// Documented default for [`USE_BYTE_BASED_REGEX`]: byte-based splitting
/// is the engine default for UTF-8 wire data.
pub const DEFAULT_USE_BYTE_BASED_REGEX: bool = true;

/// Keyed engine properties. Values are stored as strings, the shape they
/// arrive in from the engine's property sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    props: HashMap<String, String>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter used by session setup and tests.
    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.props.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(|s| s.as_str())
    }

    /// Boolean lookup. An absent key yields `default`; a present value is
    /// true exactly when it spells "true" ignoring case, anything else is
    /// false.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.props.get(key) {
            Some(v) => v.eq_ignore_ascii_case("true"),
            None => default,
        }
    }
}

/// Per-statement compile context. Statement compilation holds one of these
/// for its whole lifetime; the configuration service handle is optional
/// because a context can outlive the session that created it.
#[derive(Debug, Clone)]
pub struct StatementContext {
    config: Option<Arc<EngineConfig>>,
}

impl StatementContext {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self { config: Some(config) }
    }

    /// A context with no reachable configuration service. Compilation may
    /// still proceed until something actually needs a config value.
    pub fn detached() -> Self {
        Self { config: None }
    }

    /// The configuration service, or [`PlanError::ConfigAccess`] when the
    /// context is detached.
    pub fn config(&self) -> PlanResult<&EngineConfig> {
        self.config
            .as_deref()
            .ok_or_else(|| PlanError::config_access("statement context has no configuration service"))
    }
}

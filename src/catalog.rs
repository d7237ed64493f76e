//! Planner-facing function catalog.
//!
//! Adapters are stored under their normalized name, with overloads kept
//! side by side. User-defined functions land here when their descriptor is
//! registered; built-ins are walked in at engine startup. The catalog is
//! cheaply cloneable and shared between planner threads.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::adapter::FunctionAdapter;
use crate::builtin::{BuiltinCatalog, BUILTINS};
use crate::descriptor::FunctionDescriptor;
use crate::error::PlanResult;
use crate::ident::normalize_identifier;

#[derive(Clone, Default)]
pub struct FunctionCatalog {
    inner: Arc<Mutex<HashMap<String, Vec<Arc<FunctionAdapter>>>>>,
}

impl FunctionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapt and register a persisted user-defined function. A descriptor
    /// that does not adapt leaves the catalog untouched.
    pub fn register_udf(&self, descriptor: FunctionDescriptor) -> PlanResult<Arc<FunctionAdapter>> {
        let adapter = Arc::new(FunctionAdapter::from_descriptor(descriptor)?);
        let key = normalize_identifier(adapter.name());
        let mut g = self.inner.lock();
        let slot = g.entry(key.clone()).or_default();
        slot.push(adapter.clone());
        let overloads = slot.len();
        debug!(
            "[FN CATALOG] register_udf: '{}' registered, {} overload(s), {} name(s) total",
            key,
            overloads,
            g.len()
        );
        Ok(adapter)
    }

    /// Walk a built-in table and register every adaptable scalar. Entries
    /// the bridge cannot carry (aggregates, unconvertible arguments,
    /// missing implementations) are skipped, not errors: the engine still
    /// runs them, the planner just cannot see them. Returns the number
    /// registered.
    pub fn register_builtins(&self, builtins: &BuiltinCatalog) -> usize {
        let mut registered = 0usize;
        for name in builtins.names() {
            let Some(info) = builtins.get(&name) else { continue };
            match FunctionAdapter::from_builtin(info, builtins) {
                Ok(adapter) => {
                    let key = normalize_identifier(adapter.name());
                    self.inner.lock().entry(key).or_default().push(Arc::new(adapter));
                    registered += 1;
                }
                Err(err) => {
                    debug!("[FN CATALOG] register_builtins: skipping '{}': {}", name, err);
                }
            }
        }
        debug!(
            "[FN CATALOG] register_builtins: {} of {} built-ins registered",
            registered,
            builtins.len()
        );
        registered
    }

    /// Register the standard built-in table.
    pub fn register_standard_builtins(&self) -> usize {
        self.register_builtins(&BUILTINS)
    }

    /// Adapters registered under a name, empty when unknown. Unquoted
    /// lookups fold case the same way registration did.
    pub fn lookup(&self, name: &str) -> Vec<Arc<FunctionAdapter>> {
        let key = normalize_identifier(name);
        self.inner.lock().get(&key).cloned().unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        let key = normalize_identifier(name);
        self.inner.lock().contains_key(&key)
    }

    /// Registered names, sorted for deterministic walks.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

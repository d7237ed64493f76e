//! Built-in function registry.
//! Built-ins are described by explicit records constructed once at startup:
//! the catalog maps function names to their argument metadata and maps
//! implementation identifiers to the return type each implementation
//! produces. It is the single source of truth for built-in adaptation; no
//! runtime discovery is involved.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::ident::normalize_identifier;
use crate::types::SqlType;

/// Argument metadata for one built-in parameter. `allowed_types` lists the
/// engine types the parser accepts at this position, most specific first;
/// an empty list means "any type", which the planner bridge cannot convert.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltinArgInfo {
    pub allowed_types: Vec<SqlType>,
    pub is_constant: bool,
    pub default_value: Option<String>,
    pub min_value: Option<String>,
    pub max_value: Option<String>,
}

impl BuiltinArgInfo {
    /// An argument accepting exactly one engine type.
    pub fn typed(t: SqlType) -> Self {
        Self {
            allowed_types: vec![t],
            is_constant: false,
            default_value: None,
            min_value: None,
            max_value: None,
        }
    }

    /// An argument with no concrete allowed types (accepts anything).
    pub fn any() -> Self {
        Self {
            allowed_types: Vec::new(),
            is_constant: false,
            default_value: None,
            min_value: None,
            max_value: None,
        }
    }

    pub fn constant(mut self) -> Self {
        self.is_constant = true;
        self
    }

    pub fn with_default<S: Into<String>>(mut self, literal: S) -> Self {
        self.default_value = Some(literal.into());
        self
    }

    pub fn with_min<S: Into<String>>(mut self, literal: S) -> Self {
        self.min_value = Some(literal.into());
        self
    }

    pub fn with_max<S: Into<String>>(mut self, literal: S) -> Self {
        self.max_value = Some(literal.into());
        self
    }
}

/// Metadata for one built-in function as the parser exposes it.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltinFunctionInfo {
    pub name: String,
    pub aggregate: bool,
    pub args: Vec<BuiltinArgInfo>,
    pub impl_id: String,
}

impl BuiltinFunctionInfo {
    pub fn scalar<S: Into<String>>(name: S, impl_id: S, args: Vec<BuiltinArgInfo>) -> Self {
        Self { name: name.into(), aggregate: false, args, impl_id: impl_id.into() }
    }

    pub fn aggregate<S: Into<String>>(name: S, impl_id: S, args: Vec<BuiltinArgInfo>) -> Self {
        Self { name: name.into(), aggregate: true, args, impl_id: impl_id.into() }
    }
}

/// Name-keyed built-in metadata plus the implementation registry that
/// reports each implementation's return type.
#[derive(Debug, Default)]
pub struct BuiltinCatalog {
    functions: HashMap<String, BuiltinFunctionInfo>,
    impls: HashMap<String, SqlType>,
}

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the return type an implementation produces. Identifiers are
    /// opaque and matched verbatim.
    pub fn register_impl<S: Into<String>>(&mut self, impl_id: S, return_type: SqlType) {
        self.impls.insert(impl_id.into(), return_type);
    }

    /// Register built-in metadata under its normalized name.
    pub fn register(&mut self, info: BuiltinFunctionInfo) {
        self.functions.insert(normalize_identifier(&info.name), info);
    }

    pub fn get(&self, name: &str) -> Option<&BuiltinFunctionInfo> {
        self.functions.get(&normalize_identifier(name))
    }

    pub fn impl_return_type(&self, impl_id: &str) -> Option<&SqlType> {
        self.impls.get(impl_id)
    }

    /// Registered function names, sorted for deterministic walks.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// The engine's standard built-in table.
    fn standard() -> Self {
        use SqlType::*;

        let mut c = BuiltinCatalog::new();

        c.register_impl("scalar::upper", Varchar);
        c.register(BuiltinFunctionInfo::scalar(
            "UPPER",
            "scalar::upper",
            vec![BuiltinArgInfo::typed(Varchar)],
        ));

        c.register_impl("scalar::lower", Varchar);
        c.register(BuiltinFunctionInfo::scalar(
            "LOWER",
            "scalar::lower",
            vec![BuiltinArgInfo::typed(Varchar)],
        ));

        c.register_impl("scalar::trim", Varchar);
        c.register(BuiltinFunctionInfo::scalar(
            "TRIM",
            "scalar::trim",
            vec![BuiltinArgInfo::typed(Varchar)],
        ));

        c.register_impl("scalar::length", Integer);
        c.register(BuiltinFunctionInfo::scalar(
            "LENGTH",
            "scalar::length",
            vec![BuiltinArgInfo::typed(Varchar)],
        ));

        // Third argument is optional; "null" is the engine's spelling for
        // "no explicit length".
        c.register_impl("scalar::substr", Varchar);
        c.register(BuiltinFunctionInfo::scalar(
            "SUBSTR",
            "scalar::substr",
            vec![
                BuiltinArgInfo::typed(Varchar),
                BuiltinArgInfo::typed(Integer),
                BuiltinArgInfo::typed(Integer).with_default("null"),
            ],
        ));

        // Pad length is bounded by the engine's maximum string length.
        c.register_impl("scalar::lpad", Varchar);
        c.register(BuiltinFunctionInfo::scalar(
            "LPAD",
            "scalar::lpad",
            vec![
                BuiltinArgInfo::typed(Varchar),
                BuiltinArgInfo::typed(Integer).with_min("0").with_max("32767"),
                BuiltinArgInfo::typed(Varchar).with_default("' '"),
            ],
        ));

        c.register_impl("scalar::to_date", Date);
        c.register(BuiltinFunctionInfo::scalar(
            "TO_DATE",
            "scalar::to_date",
            vec![
                BuiltinArgInfo::typed(Varchar),
                BuiltinArgInfo::typed(Varchar).constant().with_default("'yyyy-MM-dd'"),
            ],
        ));

        c.register_impl("scalar::to_char", Varchar);
        c.register(BuiltinFunctionInfo::scalar(
            "TO_CHAR",
            "scalar::to_char",
            vec![
                BuiltinArgInfo::typed(Timestamp),
                BuiltinArgInfo::typed(Varchar).constant().with_default("'yyyy-MM-dd HH:mm:ss'"),
            ],
        ));

        c.register_impl("scalar::round", Double);
        c.register(BuiltinFunctionInfo::scalar(
            "ROUND",
            "scalar::round",
            vec![
                BuiltinArgInfo::typed(Double),
                BuiltinArgInfo::typed(Integer).constant().with_default("0"),
            ],
        ));

        c.register_impl("scalar::abs", Double);
        c.register(BuiltinFunctionInfo::scalar(
            "ABS",
            "scalar::abs",
            vec![BuiltinArgInfo::typed(Double)],
        ));

        // COALESCE accepts any types; with no concrete allowed types it is
        // not convertible for the planner bridge and stays engine-only.
        c.register(BuiltinFunctionInfo::scalar(
            "COALESCE",
            "scalar::coalesce",
            vec![BuiltinArgInfo::any(), BuiltinArgInfo::any()],
        ));

        c.register_impl("scalar::regexp_split", Array(Box::new(Varchar)));
        c.register(BuiltinFunctionInfo::scalar(
            "REGEXP_SPLIT",
            "scalar::regexp_split",
            vec![
                BuiltinArgInfo::typed(Varchar),
                BuiltinArgInfo::typed(Varchar).constant(),
            ],
        ));

        c.register_impl("scalar::regexp_replace", Varchar);
        c.register(BuiltinFunctionInfo::scalar(
            "REGEXP_REPLACE",
            "scalar::regexp_replace",
            vec![
                BuiltinArgInfo::typed(Varchar),
                BuiltinArgInfo::typed(Varchar).constant(),
                BuiltinArgInfo::typed(Varchar).with_default("''"),
            ],
        ));

        c.register_impl("agg::sum", Double);
        c.register(BuiltinFunctionInfo::aggregate(
            "SUM",
            "agg::sum",
            vec![BuiltinArgInfo::typed(Double)],
        ));

        c.register_impl("agg::count", BigInt);
        c.register(BuiltinFunctionInfo::aggregate(
            "COUNT",
            "agg::count",
            vec![BuiltinArgInfo::any()],
        ));

        c.register_impl("agg::max", Double);
        c.register(BuiltinFunctionInfo::aggregate(
            "MAX",
            "agg::max",
            vec![BuiltinArgInfo::typed(Double)],
        ));

        debug!(
            "[BUILTIN CATALOG] constructed standard table: {} functions, {} implementations",
            c.functions.len(),
            c.impls.len()
        );
        c
    }
}

/// The standard catalog, constructed once at startup.
pub static BUILTINS: Lazy<BuiltinCatalog> = Lazy::new(BuiltinCatalog::standard);

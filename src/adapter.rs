//! Scalar function adapter.
//! Presents an engine function descriptor to the planner as a scalar
//! function: return type, ordinal parameter list, and a call implementor.
//! Two construction paths exist — persisted user-defined descriptors and
//! built-in metadata from the startup catalog — converging on the same
//! descriptor shape. Adapters are immutable once constructed and may be
//! shared across planner threads.

use tracing::debug;

use crate::builtin::{BuiltinCatalog, BuiltinFunctionInfo};
use crate::descriptor::{ArgumentDescriptor, FunctionDescriptor};
use crate::error::{PlanError, PlanResult};
use crate::ident::normalize_identifier;
use crate::planner::{
    CallBinding, CallImplementor, ImplementableFunction, PlannerParameter, PlannerType,
    RuntimeExpr, ScalarFunction, TypeFactory,
};
use crate::types::SqlType;

#[derive(Debug)]
pub struct FunctionAdapter {
    descriptor: FunctionDescriptor,
    return_type: SqlType,
    parameters: Vec<PlannerParameter>,
}

impl FunctionAdapter {
    /// Adapt a persisted descriptor. The return-type name and every
    /// argument-type name are normalized and resolved here; parameters are
    /// built eagerly in ordinal order, so a descriptor that constructs has
    /// nothing left to fail later.
    pub fn from_descriptor(descriptor: FunctionDescriptor) -> PlanResult<Self> {
        let normalized = normalize_identifier(&descriptor.return_type);
        let return_type = SqlType::from_sql_type_name(&normalized)
            .ok_or_else(|| PlanError::invalid_type_name(&descriptor.return_type))?;

        let mut parameters = Vec::with_capacity(descriptor.args.len());
        for arg in &descriptor.args {
            let engine_type = resolve_argument_type(arg)?;
            parameters.push(PlannerParameter::new(
                arg.position,
                argument_name(arg.position),
                engine_type,
                arg.default_value.is_some(),
            ));
        }

        Ok(Self { descriptor, return_type, parameters })
    }

    /// Adapt a built-in. Aggregates are rejected; each argument takes the
    /// first of its allowed types; the return type comes from the
    /// implementation registry. Const, default and bound literals are
    /// copied through untouched and array-ness is never set on this path.
    pub fn from_builtin(info: &BuiltinFunctionInfo, builtins: &BuiltinCatalog) -> PlanResult<Self> {
        if info.aggregate {
            return Err(PlanError::UnsupportedAggregate { function: info.name.clone() });
        }

        let mut args = Vec::with_capacity(info.args.len());
        for (ordinal, arg) in info.args.iter().enumerate() {
            let first = arg.allowed_types.first().ok_or_else(|| PlanError::Unconvertible {
                function: info.name.clone(),
                ordinal,
            })?;
            let mut desc = ArgumentDescriptor::new(ordinal, first.sql_type_name());
            desc.is_constant = arg.is_constant;
            desc.default_value = arg.default_value.clone();
            desc.min_value = arg.min_value.clone();
            desc.max_value = arg.max_value.clone();
            args.push(desc);
        }

        let return_type = builtins.impl_return_type(&info.impl_id).ok_or_else(|| {
            PlanError::InstantiationFailed {
                function: info.name.clone(),
                impl_class: info.impl_id.clone(),
            }
        })?;

        debug!(
            "[FN ADAPTER] built-in '{}': {} args, returns {}",
            info.name,
            args.len(),
            return_type.sql_type_name()
        );
        Self::from_descriptor(FunctionDescriptor::new(
            info.name.clone(),
            args,
            return_type.sql_type_name(),
            info.impl_id.clone(),
            None,
        ))
    }

    /// The wrapped descriptor, unchanged, for administrative introspection.
    pub fn descriptor(&self) -> &FunctionDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

/// Parameter names are synthetic; user-authored argument names never reach
/// the planner.
fn argument_name(ordinal: usize) -> String {
    format!("arg{ordinal}")
}

fn resolve_argument_type(arg: &ArgumentDescriptor) -> PlanResult<SqlType> {
    let base = normalize_identifier(&arg.type_name);
    let resolved = if arg.is_array {
        // Array arguments map through promotion: base name -> array type id
        // -> engine type.
        SqlType::sql_array_type(&base).and_then(SqlType::from_type_id)
    } else {
        SqlType::from_sql_type_name(&base)
    };
    resolved.ok_or_else(|| PlanError::invalid_type_name(&arg.type_name))
}

impl ScalarFunction for FunctionAdapter {
    fn return_type(&self, factory: &dyn TypeFactory) -> PlannerType {
        factory.create_native_type(&self.return_type.value_class())
    }

    fn parameters(&self) -> &[PlannerParameter] {
        &self.parameters
    }
}

/// Execution is not wired at this layer: callers that resolve functions
/// get a working catalog entry, callers that try to run one get a null
/// constant. Kept deliberately.
struct NullCallImplementor;

impl CallImplementor for NullCallImplementor {
    fn implement(&self, _call: &CallBinding<'_>) -> RuntimeExpr {
        RuntimeExpr::null_constant()
    }
}

impl ImplementableFunction for FunctionAdapter {
    fn implementor(&self) -> Box<dyn CallImplementor> {
        Box::new(NullCallImplementor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{BuiltinArgInfo, BUILTINS};
    use crate::planner::BasicTypeFactory;
    use crate::types::ValueClass;

    fn upper_descriptor() -> FunctionDescriptor {
        FunctionDescriptor::new(
            "UPPER",
            vec![ArgumentDescriptor::new(0, "VARCHAR")],
            "VARCHAR",
            "scalar::upper",
            None,
        )
    }

    #[test]
    fn single_argument_scalar_adapts() {
        let adapter = FunctionAdapter::from_descriptor(upper_descriptor()).expect("adapts");
        let params = adapter.parameters();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].ordinal(), 0);
        assert_eq!(params[0].name(), "arg0");
        assert!(!params[0].is_optional());

        let rt = adapter.return_type(&BasicTypeFactory);
        assert_eq!(rt.value_class(), &ValueClass::Str);
    }

    #[test]
    fn default_literal_makes_a_parameter_optional() {
        let mut fmt = ArgumentDescriptor::new(1, "VARCHAR");
        fmt.default_value = Some("'yyyy-MM-dd'".to_string());
        let desc = FunctionDescriptor::new(
            "TO_DATE",
            vec![ArgumentDescriptor::new(0, "VARCHAR"), fmt],
            "DATE",
            "scalar::to_date",
            None,
        );
        let adapter = FunctionAdapter::from_descriptor(desc).expect("adapts");
        let params = adapter.parameters();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name(), "arg0");
        assert!(!params[0].is_optional());
        assert_eq!(params[1].name(), "arg1");
        assert!(params[1].is_optional());
        assert_eq!(adapter.return_type(&BasicTypeFactory).value_class(), &ValueClass::Date);
    }

    #[test]
    fn parameter_names_follow_ordinals() {
        let args: Vec<ArgumentDescriptor> =
            (0..4).map(|i| ArgumentDescriptor::new(i, "BIGINT")).collect();
        let desc = FunctionDescriptor::new("F", args, "BIGINT", "scalar::f", None);
        let adapter = FunctionAdapter::from_descriptor(desc).expect("adapts");
        for (i, p) in adapter.parameters().iter().enumerate() {
            assert_eq!(p.ordinal(), i);
            assert_eq!(p.name(), format!("arg{i}"));
        }
    }

    #[test]
    fn lowercase_type_names_resolve_after_normalization() {
        let desc = FunctionDescriptor::new(
            "UPPER",
            vec![ArgumentDescriptor::new(0, "varchar")],
            "varchar",
            "scalar::upper",
            None,
        );
        let adapter = FunctionAdapter::from_descriptor(desc).expect("adapts");
        assert_eq!(adapter.return_type(&BasicTypeFactory).value_class(), &ValueClass::Str);
    }

    #[test]
    fn unknown_return_type_is_rejected() {
        let desc = FunctionDescriptor::new("F", vec![], "WIDGET", "scalar::f", None);
        match FunctionAdapter::from_descriptor(desc) {
            Err(PlanError::InvalidTypeName { name }) => assert_eq!(name, "WIDGET"),
            other => panic!("expected InvalidTypeName, got {other:?}"),
        }
    }

    #[test]
    fn unknown_argument_type_is_rejected() {
        let desc = FunctionDescriptor::new(
            "F",
            vec![ArgumentDescriptor::new(0, "WIDGET")],
            "VARCHAR",
            "scalar::f",
            None,
        );
        match FunctionAdapter::from_descriptor(desc) {
            Err(PlanError::InvalidTypeName { name }) => assert_eq!(name, "WIDGET"),
            other => panic!("expected InvalidTypeName, got {other:?}"),
        }
    }

    #[test]
    fn array_arguments_promote_to_the_array_type() {
        let mut arr = ArgumentDescriptor::new(0, "varchar");
        arr.is_array = true;
        let desc = FunctionDescriptor::new(
            "ARRAY_FIRST",
            vec![arr],
            "VARCHAR",
            "scalar::array_first",
            None,
        );
        let adapter = FunctionAdapter::from_descriptor(desc).expect("adapts");
        let promoted = adapter.parameters()[0].engine_type().clone();
        assert!(promoted.is_array());
        assert_eq!(promoted, SqlType::Array(Box::new(SqlType::Varchar)));

        // Promotion agrees with resolving the array-spelled name directly.
        let direct = SqlType::from_sql_type_name("VARCHAR ARRAY").unwrap();
        assert_eq!(promoted, direct);
        assert_eq!(
            adapter.parameters()[0].planner_type(&BasicTypeFactory).value_class(),
            &ValueClass::Array(Box::new(ValueClass::Str))
        );
    }

    #[test]
    fn aggregates_cannot_be_adapted() {
        let sum = BUILTINS.get("SUM").expect("registered");
        match FunctionAdapter::from_builtin(sum, &BUILTINS) {
            Err(PlanError::UnsupportedAggregate { function }) => assert_eq!(function, "SUM"),
            other => panic!("expected UnsupportedAggregate, got {other:?}"),
        }
    }

    #[test]
    fn builtin_without_allowed_types_is_unconvertible() {
        let coalesce = BUILTINS.get("COALESCE").expect("registered");
        match FunctionAdapter::from_builtin(coalesce, &BUILTINS) {
            Err(PlanError::Unconvertible { function, ordinal }) => {
                assert_eq!(function, "COALESCE");
                assert_eq!(ordinal, 0);
            }
            other => panic!("expected Unconvertible, got {other:?}"),
        }
    }

    #[test]
    fn builtin_without_impl_entry_fails_instantiation() {
        let mut catalog = BuiltinCatalog::new();
        let info = BuiltinFunctionInfo::scalar(
            "MYSTERY",
            "scalar::mystery",
            vec![BuiltinArgInfo::typed(SqlType::Varchar)],
        );
        catalog.register(info.clone());
        match FunctionAdapter::from_builtin(&info, &catalog) {
            Err(PlanError::InstantiationFailed { function, impl_class }) => {
                assert_eq!(function, "MYSTERY");
                assert_eq!(impl_class, "scalar::mystery");
            }
            other => panic!("expected InstantiationFailed, got {other:?}"),
        }
    }

    #[test]
    fn builtin_path_synthesizes_the_descriptor() {
        let to_date = BUILTINS.get("TO_DATE").expect("registered");
        let adapter = FunctionAdapter::from_builtin(to_date, &BUILTINS).expect("adapts");
        let desc = adapter.descriptor();
        assert_eq!(desc.name, "TO_DATE");
        assert_eq!(desc.return_type, "DATE");
        assert_eq!(desc.impl_class, "scalar::to_date");
        assert_eq!(desc.args.len(), 2);
        // const/default copied through, array-ness never set on this path
        assert!(desc.args[1].is_constant);
        assert_eq!(desc.args[1].default_value.as_deref(), Some("'yyyy-MM-dd'"));
        assert!(!desc.args[1].is_array);
        assert!(adapter.parameters()[1].is_optional());
    }

    #[test]
    fn bound_literals_pass_through_uninterpreted() {
        let lpad = BUILTINS.get("LPAD").expect("registered");
        let adapter = FunctionAdapter::from_builtin(lpad, &BUILTINS).expect("adapts");
        assert_eq!(adapter.descriptor().args[1].min_value.as_deref(), Some("0"));
        assert_eq!(adapter.descriptor().args[1].max_value.as_deref(), Some("32767"));
        assert_eq!(adapter.descriptor().args[0].min_value, None);
        assert_eq!(adapter.descriptor().args[0].max_value, None);
    }

    #[test]
    fn descriptor_is_returned_unchanged() {
        let desc = upper_descriptor();
        let adapter = FunctionAdapter::from_descriptor(desc.clone()).expect("adapts");
        assert_eq!(adapter.descriptor(), &desc);
    }

    #[test]
    fn implementor_yields_a_null_constant() {
        let adapter = FunctionAdapter::from_descriptor(upper_descriptor()).expect("adapts");
        let implementor = adapter.implementor();
        let operands = [RuntimeExpr::Input(0)];
        let call = CallBinding { function: adapter.name(), operands: &operands };
        assert!(implementor.implement(&call).is_null_constant());
    }
}

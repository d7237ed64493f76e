//! Planner function model (published seam)
//! ---------------------------------------
//! The interfaces the SQL planner resolves functions through: a type
//! factory producing planner-level type descriptors, scalar functions with
//! ordinal parameters, and call implementors that emit runtime expressions
//! on demand. The planner's own optimizer and expression builder consume
//! these; the bridge only implements them.

use crate::expr::Value;
use crate::types::{SqlType, ValueClass};

/// A planner-level type descriptor, bound to the native runtime value
/// representation it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerType {
    value_class: ValueClass,
    nullable: bool,
}

impl PlannerType {
    pub fn new(value_class: ValueClass, nullable: bool) -> Self {
        Self { value_class, nullable }
    }

    pub fn value_class(&self) -> &ValueClass {
        &self.value_class
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

/// Produces planner types from native runtime value representations.
pub trait TypeFactory {
    fn create_native_type(&self, class: &ValueClass) -> PlannerType;
}

/// The planner's default factory: native types are nullable, matching how
/// function arguments and results behave in SQL.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicTypeFactory;

impl TypeFactory for BasicTypeFactory {
    fn create_native_type(&self, class: &ValueClass) -> PlannerType {
        PlannerType::new(class.clone(), true)
    }
}

/// One ordinal parameter of a planner function. A plain record: the engine
/// type was resolved when the parameter was built, so producing the planner
/// type needs nothing but the factory.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerParameter {
    ordinal: usize,
    name: String,
    engine_type: SqlType,
    optional: bool,
}

impl PlannerParameter {
    pub(crate) fn new(ordinal: usize, name: String, engine_type: SqlType, optional: bool) -> Self {
        Self { ordinal, name, engine_type, optional }
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The already-resolved engine type behind this parameter.
    pub fn engine_type(&self) -> &SqlType {
        &self.engine_type
    }

    /// The planner type bound to the engine type's native value class.
    pub fn planner_type(&self, factory: &dyn TypeFactory) -> PlannerType {
        factory.create_native_type(&self.engine_type.value_class())
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// A scalar function as the planner's catalog sees it.
pub trait ScalarFunction {
    fn return_type(&self, factory: &dyn TypeFactory) -> PlannerType;
    fn parameters(&self) -> &[PlannerParameter];
}

/// A scalar function the planner can also ask for a runtime implementation.
pub trait ImplementableFunction: ScalarFunction {
    fn implementor(&self) -> Box<dyn CallImplementor>;
}

/// A resolved call the planner hands to an implementor: the function name
/// and the already-translated operand expressions.
#[derive(Debug)]
pub struct CallBinding<'a> {
    pub function: &'a str,
    pub operands: &'a [RuntimeExpr],
}

/// Emits the runtime expression for one function call.
pub trait CallImplementor: Send + Sync {
    fn implement(&self, call: &CallBinding<'_>) -> RuntimeExpr;
}

/// Runtime expression nodes the planner's code generator consumes. The
/// bridge only ever builds constants; the other nodes belong to the
/// planner itself.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeExpr {
    /// A typed constant; `None` is the SQL NULL constant.
    Constant(Option<Value>),
    /// Reference to the i-th input of the enclosing operator.
    Input(usize),
    /// A nested call, post-translation.
    Call { function: String, operands: Vec<RuntimeExpr> },
}

impl RuntimeExpr {
    pub fn null_constant() -> Self {
        RuntimeExpr::Constant(None)
    }

    pub fn is_null_constant(&self) -> bool {
        matches!(self, RuntimeExpr::Constant(None))
    }
}

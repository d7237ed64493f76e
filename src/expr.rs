//! Engine expression tree (published slice)
//! ----------------------------------------
//! The subset of the engine's expression model that the planner bridge
//! touches: literal values, column references and function calls. Split
//! function children are built from these nodes; everything else about the
//! tree (evaluation, coercion, codegen) lives in the engine runtime.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A literal value as it appears in an expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    Column { name: String },
    Call { function: String, args: Vec<Expr> },
}

impl Expr {
    /// Convenience constructor for string literals, the common case in
    /// split-function children.
    pub fn str_literal<S: Into<String>>(s: S) -> Expr {
        Expr::Literal(Value::Str(s.into()))
    }

    pub fn column<S: Into<String>>(name: S) -> Expr {
        Expr::Column { name: name.into() }
    }

    /// The constant string payload, when this node is a string literal.
    /// Pattern extraction for split compilation goes through here.
    pub fn as_str_literal(&self) -> Option<&str> {
        match self {
            Expr::Literal(Value::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_literal_extraction() {
        assert_eq!(Expr::str_literal(",").as_str_literal(), Some(","));
        assert_eq!(Expr::column("tags").as_str_literal(), None);
        assert_eq!(Expr::Literal(Value::Int(3)).as_str_literal(), None);
    }

    #[test]
    fn literal_values_serialize_tagged() {
        let v = Value::Str("a|b".into());
        let json = serde_json::to_string(&v).expect("serialize");
        assert_eq!(json, r#"{"type":"str","value":"a|b"}"#);
        let back: Value = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, v);
    }
}

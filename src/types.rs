//! Engine SQL type vocabulary
//! --------------------------
//! The published slice of Tessera's domain type system that the planner
//! bridge consumes: canonical type names, stable numeric type ids, one-level
//! array promotion, and the mapping from each SQL type to the native runtime
//! value representation.
//!
//! Name resolution is exact-match against canonical names; callers normalize
//! identifiers first (see [`crate::ident`]). Arrays are one-dimensional only
//! and spelled `<BASE> ARRAY`, id = base id + [`ARRAY_TYPE_OFFSET`].

/// Offset added to a scalar type id to form the id of its array type.
pub const ARRAY_TYPE_OFFSET: i32 = 100;

/// A named type in the engine's domain type system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlType {
    Boolean,
    SmallInt,
    Integer,
    BigInt,
    Float,
    Double,
    Decimal,
    Varchar,
    Char,
    Varbinary,
    Date,
    Time,
    Timestamp,
    /// One-dimensional array over a scalar base type. Nested arrays are not
    /// part of the vocabulary and are never produced by resolution.
    Array(Box<SqlType>),
}

/// The native runtime representation backing a [`SqlType`] value. This is
/// what the planner's type factory binds planner types to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueClass {
    Bool,
    I16,
    I32,
    I64,
    F32,
    F64,
    Decimal,
    Str,
    Bytes,
    Date,
    Time,
    Timestamp,
    Array(Box<ValueClass>),
}

impl SqlType {
    /// Resolve a canonical SQL type name. Matching is exact and
    /// case-sensitive; lowercase or mixed-case input resolves only after
    /// [`crate::ident::normalize_identifier`]. At most one `ARRAY` suffix
    /// is stripped; names spelled deeper than one level never resolve,
    /// however many suffixes they stack.
    pub fn from_sql_type_name(name: &str) -> Option<SqlType> {
        match name.strip_suffix(" ARRAY") {
            // One level only: a base that is still array-spelled would be a
            // nested array, which is not in the vocabulary.
            Some(base) if base.ends_with(" ARRAY") => None,
            Some(base) => SqlType::scalar_from_name(base).map(|t| SqlType::Array(Box::new(t))),
            None => SqlType::scalar_from_name(name),
        }
    }

    /// Resolve a stable engine type id, including array ids. Array ids
    /// occupy the single band directly above the scalar ids; anything
    /// outside both bands does not resolve.
    pub fn from_type_id(id: i32) -> Option<SqlType> {
        if id > ARRAY_TYPE_OFFSET {
            return SqlType::scalar_from_id(id - ARRAY_TYPE_OFFSET)
                .map(|t| SqlType::Array(Box::new(t)));
        }
        SqlType::scalar_from_id(id)
    }

    /// Array promotion: map a canonical scalar base name to the type id of
    /// its array type. `None` when the base name does not resolve or is
    /// itself an array.
    pub fn sql_array_type(base_name: &str) -> Option<i32> {
        SqlType::scalar_from_name(base_name).map(|t| t.type_id() + ARRAY_TYPE_OFFSET)
    }

    fn scalar_from_name(name: &str) -> Option<SqlType> {
        let t = match name {
            "BOOLEAN" => SqlType::Boolean,
            "SMALLINT" => SqlType::SmallInt,
            "INTEGER" => SqlType::Integer,
            "BIGINT" => SqlType::BigInt,
            "FLOAT" => SqlType::Float,
            "DOUBLE" => SqlType::Double,
            "DECIMAL" => SqlType::Decimal,
            "VARCHAR" => SqlType::Varchar,
            "CHAR" => SqlType::Char,
            "VARBINARY" => SqlType::Varbinary,
            "DATE" => SqlType::Date,
            "TIME" => SqlType::Time,
            "TIMESTAMP" => SqlType::Timestamp,
            _ => return None,
        };
        Some(t)
    }

    fn scalar_from_id(id: i32) -> Option<SqlType> {
        let t = match id {
            1 => SqlType::Boolean,
            2 => SqlType::SmallInt,
            3 => SqlType::Integer,
            4 => SqlType::BigInt,
            5 => SqlType::Float,
            6 => SqlType::Double,
            7 => SqlType::Decimal,
            8 => SqlType::Varchar,
            9 => SqlType::Char,
            10 => SqlType::Varbinary,
            11 => SqlType::Date,
            12 => SqlType::Time,
            13 => SqlType::Timestamp,
            _ => return None,
        };
        Some(t)
    }

    /// The stable engine type id.
    pub fn type_id(&self) -> i32 {
        match self {
            SqlType::Boolean => 1,
            SqlType::SmallInt => 2,
            SqlType::Integer => 3,
            SqlType::BigInt => 4,
            SqlType::Float => 5,
            SqlType::Double => 6,
            SqlType::Decimal => 7,
            SqlType::Varchar => 8,
            SqlType::Char => 9,
            SqlType::Varbinary => 10,
            SqlType::Date => 11,
            SqlType::Time => 12,
            SqlType::Timestamp => 13,
            SqlType::Array(base) => base.type_id() + ARRAY_TYPE_OFFSET,
        }
    }

    /// The canonical SQL name, as accepted by [`SqlType::from_sql_type_name`].
    pub fn sql_type_name(&self) -> String {
        match self {
            SqlType::Boolean => "BOOLEAN".to_string(),
            SqlType::SmallInt => "SMALLINT".to_string(),
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::BigInt => "BIGINT".to_string(),
            SqlType::Float => "FLOAT".to_string(),
            SqlType::Double => "DOUBLE".to_string(),
            SqlType::Decimal => "DECIMAL".to_string(),
            SqlType::Varchar => "VARCHAR".to_string(),
            SqlType::Char => "CHAR".to_string(),
            SqlType::Varbinary => "VARBINARY".to_string(),
            SqlType::Date => "DATE".to_string(),
            SqlType::Time => "TIME".to_string(),
            SqlType::Timestamp => "TIMESTAMP".to_string(),
            SqlType::Array(base) => format!("{} ARRAY", base.sql_type_name()),
        }
    }

    /// The native runtime value representation for this type.
    pub fn value_class(&self) -> ValueClass {
        match self {
            SqlType::Boolean => ValueClass::Bool,
            SqlType::SmallInt => ValueClass::I16,
            SqlType::Integer => ValueClass::I32,
            SqlType::BigInt => ValueClass::I64,
            SqlType::Float => ValueClass::F32,
            SqlType::Double => ValueClass::F64,
            SqlType::Decimal => ValueClass::Decimal,
            SqlType::Varchar | SqlType::Char => ValueClass::Str,
            SqlType::Varbinary => ValueClass::Bytes,
            SqlType::Date => ValueClass::Date,
            SqlType::Time => ValueClass::Time,
            SqlType::Timestamp => ValueClass::Timestamp,
            SqlType::Array(base) => ValueClass::Array(Box::new(base.value_class())),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, SqlType::Array(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_exact_case() {
        assert_eq!(SqlType::from_sql_type_name("VARCHAR"), Some(SqlType::Varchar));
        assert_eq!(SqlType::from_sql_type_name("varchar"), None);
        assert_eq!(SqlType::from_sql_type_name("WIDGET"), None);
    }

    #[test]
    fn array_names_resolve_one_level() {
        let t = SqlType::from_sql_type_name("VARCHAR ARRAY").expect("resolves");
        assert_eq!(t, SqlType::Array(Box::new(SqlType::Varchar)));
        assert!(t.is_array());
        assert!(!SqlType::Varchar.is_array());
        // No nested arrays in the vocabulary
        assert_eq!(SqlType::from_sql_type_name("VARCHAR ARRAY ARRAY"), None);
    }

    #[test]
    fn repeated_array_suffixes_reject_at_any_depth() {
        assert_eq!(SqlType::from_sql_type_name("VARCHAR ARRAY ARRAY ARRAY"), None);
        let spelled = format!("VARCHAR{}", " ARRAY".repeat(300_000));
        assert_eq!(SqlType::from_sql_type_name(&spelled), None);
    }

    #[test]
    fn ids_outside_the_type_bands_reject() {
        for id in [
            0,
            -7,
            14,
            ARRAY_TYPE_OFFSET,
            14 + ARRAY_TYPE_OFFSET,
            2 * ARRAY_TYPE_OFFSET + 1,
            i32::MAX,
            i32::MIN,
        ] {
            assert_eq!(SqlType::from_type_id(id), None, "id {id} should not resolve");
        }
    }

    #[test]
    fn array_promotion_round_trips_with_direct_resolution() {
        for base in ["VARCHAR", "BIGINT", "DATE", "DOUBLE"] {
            let id = SqlType::sql_array_type(base).expect("promotable");
            let via_id = SqlType::from_type_id(id).expect("array id resolves");
            let via_name = SqlType::from_sql_type_name(&format!("{base} ARRAY")).expect("name resolves");
            assert_eq!(via_id, via_name);
        }
    }

    #[test]
    fn type_ids_round_trip() {
        for name in ["BOOLEAN", "SMALLINT", "INTEGER", "BIGINT", "FLOAT", "DOUBLE",
                     "DECIMAL", "VARCHAR", "CHAR", "VARBINARY", "DATE", "TIME", "TIMESTAMP"] {
            let t = SqlType::from_sql_type_name(name).unwrap();
            assert_eq!(SqlType::from_type_id(t.type_id()), Some(t.clone()));
            assert_eq!(t.sql_type_name(), name);
        }
    }

    #[test]
    fn promotion_rejects_array_bases_and_unknowns() {
        assert_eq!(SqlType::sql_array_type("VARCHAR ARRAY"), None);
        assert_eq!(SqlType::sql_array_type("WIDGET"), None);
    }

    #[test]
    fn value_classes_follow_the_runtime_representation() {
        assert_eq!(SqlType::Varchar.value_class(), ValueClass::Str);
        assert_eq!(SqlType::Char.value_class(), ValueClass::Str);
        assert_eq!(SqlType::Date.value_class(), ValueClass::Date);
        assert_eq!(
            SqlType::Array(Box::new(SqlType::Varchar)).value_class(),
            ValueClass::Array(Box::new(ValueClass::Str))
        );
    }
}

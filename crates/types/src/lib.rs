//! Column types and runtime values shared across the database crates.

use std::cmp::Ordering;

/// The three column types a schema file may declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Varchar,
    Real,
}

impl ColumnType {
    /// Parses the lowercase type tokens used by the schema file (`int`, `varchar`, `real`).
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "int" => Some(Self::Integer),
            "varchar" => Some(Self::Varchar),
            "real" => Some(Self::Real),
            _ => None,
        }
    }
}

/// A deserialized column value, typed to match `ColumnType`.
///
/// Examples:
/// - `Value::Integer(1)` — an `id` column
/// - `Value::Text(b"alice".to_vec())` — a `VARCHAR` column, already NUL-stripped
/// - `Value::Real(3.5)` — a `REAL` column, regardless of its on-disk width
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i32),
    Text(Vec<u8>),
    Real(f64),
}

impl Value {
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&[u8]> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Orders two values of the same variant. Returns `None` for mixed types
    /// or for `Text`, which this system only compares for equality (see
    /// `eq_same_type`); `VARCHAR` ordering operators are rejected earlier,
    /// at parse time.
    pub fn cmp_same_type(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Real(a), Value::Real(b)) => a.partial_cmp(b),
            _ => None,
        }
    }

    pub fn eq_same_type(&self, other: &Value) -> Option<bool> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a == b),
            (Value::Real(a), Value::Real(b)) => Some(a == b),
            (Value::Text(a), Value::Text(b)) => Some(a == b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_known_type_tokens() {
        assert_eq!(ColumnType::parse("int"), Some(ColumnType::Integer));
        assert_eq!(ColumnType::parse("varchar"), Some(ColumnType::Varchar));
        assert_eq!(ColumnType::parse("real"), Some(ColumnType::Real));
        assert_eq!(ColumnType::parse("blob"), None);
    }

    #[test]
    fn text_supports_equality_only() {
        let a = Value::Text(b"alice".to_vec());
        let b = Value::Text(b"bob".to_vec());
        assert_eq!(a.eq_same_type(&b), Some(false));
        assert_eq!(a.cmp_same_type(&b), None);
    }

    #[test]
    fn cross_type_comparisons_are_rejected() {
        let i = Value::Integer(1);
        let t = Value::Text(b"1".to_vec());
        assert_eq!(i.cmp_same_type(&t), None);
        assert_eq!(i.eq_same_type(&t), None);
    }

    proptest! {
        #[test]
        fn integer_ordering_is_antisymmetric(a in any::<i32>(), b in any::<i32>()) {
            let va = Value::Integer(a);
            let vb = Value::Integer(b);
            if let (Some(o1), Some(o2)) = (va.cmp_same_type(&vb), vb.cmp_same_type(&va)) {
                prop_assert_eq!(o1, o2.reverse());
            }
        }

        #[test]
        fn integer_eq_reflexive(a in any::<i32>()) {
            let v = Value::Integer(a);
            prop_assert_eq!(v.eq_same_type(&v), Some(true));
        }
    }
}

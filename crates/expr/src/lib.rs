//! The WHERE evaluator: a single `column OP literal` predicate evaluated
//! against one deserialized row.

use catalog::{ColumnDefinition, decode_value};
use common::{DbError, DbResult};
use types::Value;

/// Comparison operators a `WHERE` clause may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Operator {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            _ => None,
        }
    }

    /// `VARCHAR` only defines equality; ordering operators are rejected at
    /// parse time rather than left to silently do nothing.
    pub fn supports_text(&self) -> bool {
        matches!(self, Self::Eq | Self::Ne)
    }
}

/// A single `column OP literal` predicate. `literal` is already encoded to
/// the column's fixed on-disk width via `catalog::copy_value_into_bytes`.
#[derive(Clone, Debug)]
pub struct WhereClause {
    pub column: String,
    pub operator: Operator,
    pub literal: Vec<u8>,
}

impl WhereClause {
    /// Evaluates this predicate against one already-deserialized row.
    /// `columns` and `row` must be aligned (same length, same order).
    pub fn matches(&self, columns: &[ColumnDefinition], row: &[Value]) -> DbResult<bool> {
        let idx = columns
            .iter()
            .position(|c| c.name == self.column)
            .ok_or_else(|| DbError::Schema(format!("column '{}' not found", self.column)))?;
        let column = &columns[idx];
        let literal = decode_value(column, &self.literal);

        match self.operator {
            Operator::Eq => Ok(row[idx].eq_same_type(&literal).unwrap_or(false)),
            Operator::Ne => Ok(!row[idx].eq_same_type(&literal).unwrap_or(false)),
            op => {
                let ord = row[idx].cmp_same_type(&literal).ok_or_else(|| {
                    DbError::Schema(format!(
                        "column '{}' does not support ordering comparisons",
                        self.column
                    ))
                })?;
                use std::cmp::Ordering::*;
                Ok(match op {
                    Operator::Lt => ord == Less,
                    Operator::Le => ord != Greater,
                    Operator::Gt => ord == Greater,
                    Operator::Ge => ord != Less,
                    Operator::Eq | Operator::Ne => unreachable!(),
                })
            }
        }
    }
}

/// An optional filter: `None` accepts every row (used by `SELECT` with no
/// `WHERE` clause).
pub fn accepts(clause: Option<&WhereClause>, columns: &[ColumnDefinition], row: &[Value]) -> DbResult<bool> {
    match clause {
        None => Ok(true),
        Some(clause) => clause.matches(columns, row),
    }
}

//! Binary row codec: copies typed values into and out of a fixed-width row
//! buffer. Concatenation of columns in declaration order, each exactly
//! `column.size` bytes, no padding, host little-endian for INTEGER/REAL.

use crate::column::ColumnDefinition;
use common::{DbError, DbResult};
use types::{ColumnType, Value};

/// Builds the `size`-byte on-disk representation of one column's value.
///
/// `literal_text` is the already-unquoted token for `VARCHAR`, or the raw
/// numeric token for `INTEGER`/`REAL`.
pub fn copy_value_into_bytes(column: &ColumnDefinition, literal_text: &[u8]) -> DbResult<Vec<u8>> {
    let mut bytes = vec![0u8; column.size];
    match column.ty {
        ColumnType::Integer => {
            let text = std::str::from_utf8(literal_text)
                .map_err(|_| DbError::Schema("integer literal is not valid UTF-8".into()))?;
            let value: i32 = text
                .trim()
                .parse()
                .map_err(|_| DbError::Schema(format!("invalid integer literal '{text}'")))?;
            bytes[..4].copy_from_slice(&value.to_le_bytes());
        }
        ColumnType::Real => {
            let text = std::str::from_utf8(literal_text)
                .map_err(|_| DbError::Schema("real literal is not valid UTF-8".into()))?;
            let value: f64 = text
                .trim()
                .parse()
                .map_err(|_| DbError::Schema(format!("invalid real literal '{text}'")))?;
            match column.size {
                4 => bytes.copy_from_slice(&(value as f32).to_le_bytes()),
                8 => bytes.copy_from_slice(&value.to_le_bytes()),
                other => {
                    return Err(DbError::Schema(format!(
                        "REAL column '{}' has unsupported width {other}",
                        column.name
                    )));
                }
            }
        }
        ColumnType::Varchar => {
            // Callers are expected to have already checked the literal fits;
            // this is the last line of defense.
            if literal_text.len() > column.size {
                return Err(DbError::Schema(format!(
                    "value for '{}' exceeds column width {}",
                    column.name, column.size
                )));
            }
            bytes[..literal_text.len()].copy_from_slice(literal_text);
        }
    }
    Ok(bytes)
}

/// Reads one column's value out of its slice of the row buffer.
pub fn decode_value(column: &ColumnDefinition, field: &[u8]) -> Value {
    match column.ty {
        ColumnType::Integer => {
            let mut buf = [0u8; 4];
            buf.copy_from_slice(&field[..4]);
            Value::Integer(i32::from_le_bytes(buf))
        }
        ColumnType::Real => match column.size {
            4 => {
                let mut buf = [0u8; 4];
                buf.copy_from_slice(&field[..4]);
                Value::Real(f32::from_le_bytes(buf) as f64)
            }
            8 => {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(&field[..8]);
                Value::Real(f64::from_le_bytes(buf))
            }
            _ => unreachable!("schema validation rejects unsupported REAL widths"),
        },
        ColumnType::Varchar => {
            // Treat the field as a NUL-terminated (or full-width) string.
            let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
            Value::Text(field[..end].to_vec())
        }
    }
}

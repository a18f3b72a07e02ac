//! Renders a projected row the way `SELECT` prints it: `(v1, v2, …)`.

use types::Value;

/// One value in the printf-ish style the REPL output matches: integers as
/// plain decimal, reals at the default six fractional digits, text lossily
/// decoded (it is already NUL-trimmed by `catalog::decode_value`).
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Integer(v) => v.to_string(),
        Value::Real(v) => format!("{v:.6}"),
        Value::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

pub fn format_row(values: &[Value]) -> String {
    let rendered: Vec<String> = values.iter().map(format_value).collect();
    format!("({})", rendered.join(", "))
}

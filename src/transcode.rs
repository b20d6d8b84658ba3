use crate::{Value, quote};
use std::fmt::Write;

/// Render `value` as inline SQL literal text.
///
/// This is the display / raw-fragment path only: values destined for
/// statement parameters always travel as bindings next to a `?`
/// placeholder and never pass through here.
pub fn transcode(value: &Value) -> String {
    let mut out = String::new();
    write_literal(&mut out, value);
    out
}

/// Append the SQL literal form of `value` to `out`.
pub fn write_literal(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Integer(v) => {
            let mut buffer = itoa::Buffer::new();
            out.push_str(buffer.format(*v));
        }
        Value::Real(v) => write_real(out, *v),
        Value::Text(v) => out.push_str(&quote(v, '\'')),
        Value::Blob(v) => {
            out.push_str("X'");
            for b in v.as_ref() {
                let _ = write!(out, "{b:02X}");
            }
            out.push('\'');
        }
    }
}

fn write_real(out: &mut String, value: f64) {
    if value.is_nan() {
        // SQLite has no NaN literal and stores NULL in its place.
        out.push_str("NULL");
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            out.push('-');
        }
        // Out of range for a REAL, the engine reads it back as Infinity.
        out.push_str("1.0e+10000");
    } else {
        let mut buffer = ryu::Buffer::new();
        out.push_str(buffer.format(value));
    }
}

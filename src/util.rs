use crate::{Error, Result};

/// Wrap `value` in `mark` delimiters, doubling every interior occurrence.
///
/// Standard SQL escaping for identifiers (`"`) and string literals (`'`):
/// `quote("a\"b", '"')` yields `"a""b"`. Pure text transformation producing
/// no bindings, used only for fragments embedded directly into template
/// text rather than bound as parameters.
pub fn quote(value: &str, mark: char) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(mark);
    let mut position = 0;
    for (i, c) in value.char_indices() {
        if c == mark {
            let end = i + c.len_utf8();
            quoted.push_str(&value[position..end]);
            quoted.push(mark);
            position = end;
        }
    }
    quoted.push_str(&value[position..]);
    quoted.push(mark);
    quoted
}

/// Invert [`quote`]: strip the delimiters and collapse doubled marks.
pub fn unquote(quoted: &str, mark: char) -> Result<String> {
    let inner = quoted
        .strip_prefix(mark)
        .and_then(|v| v.strip_suffix(mark))
        .ok_or_else(|| Error::msg(format!("`{quoted}` is not delimited by `{mark}`")))?;
    let mut out = String::with_capacity(inner.len());
    let mut rest = inner;
    while let Some(i) = rest.find(mark) {
        let end = i + mark.len_utf8();
        if !rest[end..].starts_with(mark) {
            return Err(Error::msg(format!(
                "`{quoted}` contains an undoubled `{mark}`"
            )));
        }
        out.push_str(&rest[..end]);
        rest = &rest[end + mark.len_utf8()..];
    }
    out.push_str(rest);
    Ok(out)
}

pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

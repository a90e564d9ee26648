//! Escaping of section names and values.
//!
//! The text format knows five escapes: `\s` (space), `\t`, `\n`, `\r` and `\\`.
//! Only a *leading* space is ever written as `\s`, so printed values stay
//! readable while a value's leading space survives being written at the
//! start of a line.

/// Resolves escape sequences in `input`.
///
/// Returns `None` on an embedded NUL, a trailing lone `\`, or a `\` followed
/// by anything other than `s`, `t`, `n`, `r` or `\`.
pub fn unescape(input: &str) -> Option<String> {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            '\0' => return None,
            '\\' => {
                let unescaped = match chars.next()? {
                    's' => ' ',
                    't' => '\t',
                    'n' => '\n',
                    'r' => '\r',
                    '\\' => '\\',
                    _ => return None,
                };
                result.push(unescaped);
            }
            other => result.push(other),
        }
    }

    Some(result)
}

/// Escapes `input` for writing.
///
/// A space is written as `\s` only when it is the first character and
/// `escape_leading_space` is set.
pub fn escape(input: &str, escape_leading_space: bool) -> String {
    let mut result = String::with_capacity(input.len() * 2);

    for (index, c) in input.chars().enumerate() {
        match c {
            ' ' if escape_leading_space && index == 0 => result.push_str(r"\s"),
            '\\' => result.push_str(r"\\"),
            '\t' => result.push_str(r"\t"),
            '\n' => result.push_str(r"\n"),
            '\r' => result.push_str(r"\r"),
            other => result.push(other),
        }
    }

    result
}

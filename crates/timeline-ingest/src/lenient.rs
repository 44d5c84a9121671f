//! Tolerant JSON parsing for hand-edited data files.

use serde_json::Value;

/// Parse `text`, retrying once with trailing commas removed.
///
/// Returns the value and whether the cleanup was needed. The error is the
/// one from the first, unmodified attempt.
pub fn parse_lenient(text: &str) -> Result<(Value, bool), serde_json::Error> {
    match serde_json::from_str(text) {
        Ok(value) => Ok((value, false)),
        Err(first) => match serde_json::from_str(&strip_trailing_commas(text)) {
            Ok(value) => Ok((value, true)),
            Err(_) => Err(first),
        },
    }
}

/// Drop commas that are followed (after whitespace) by `}` or `]`.
/// String literals are copied untouched.
pub fn strip_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in text.char_indices() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            ',' => {
                let rest = text[index + 1..].trim_start();
                if !(rest.starts_with('}') || rest.starts_with(']')) {
                    out.push(ch);
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

//! Flat-JSON scalar extraction without pulling in a full parser.
//!
//! The producer answers with single-level JSON objects (`{"result":28}`,
//! `{"error":"..."}`), so a single left-to-right scan per lookup is enough.
//! [`extract`] preserves the historical scanning behavior exactly;
//! [`extract_strict`] is the structurally-correct variant offered behind the
//! CLI's `--strict-json` flag.

/// Extract the raw value of `key` from a flat JSON object.
///
/// Matches the first occurrence of `"key"` anywhere in `body`, even inside
/// an unrelated string value, then skips to the next `:`, past any
/// whitespace, and returns either the contents of a quoted string or the
/// bare token up to the next `,`, `}`, `]`, or whitespace. Escaped quotes
/// inside string values are not handled; an embedded `\"` terminates the
/// scan early. Returns `None` when the key, colon, or value is missing.
pub fn extract<'a>(body: &'a str, key: &str) -> Option<&'a str> {
    if body.is_empty() {
        return None;
    }
    let needle = format!("\"{key}\"");
    let after_key = body.find(&needle)? + needle.len();
    let rest = &body[after_key..];
    let colon = rest.find(':')?;
    let rest = rest[colon + 1..].trim_start();
    if rest.is_empty() {
        return None;
    }
    match rest.strip_prefix('"') {
        Some(inner) => {
            // String value: everything up to the next quote.
            let end = inner.find('"')?;
            Some(&inner[..end])
        }
        None => {
            // Bare token: number, boolean, or null.
            let end = rest
                .find(|c: char| c == ',' || c == '}' || c == ']' || c.is_whitespace())
                .unwrap_or(rest.len());
            Some(&rest[..end])
        }
    }
}

/// Structurally-correct variant of [`extract`].
///
/// Parses the whole body and looks `key` up as an actual top-level member,
/// so a key name embedded in an unrelated string value cannot shadow the
/// real field. String values are returned without their quotes; every other
/// scalar keeps its JSON text form.
pub fn extract_strict(body: &str, key: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get(key)? {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

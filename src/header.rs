use serde_json::Value;

const MEDIA_TYPE_PREFIX: &str = "application/";

/// Expected `typ` header parameter
///
/// Comparison is case-insensitive, and an `application/` prefix is ignored
/// on both sides (RFC 7515, section 4.1.9).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TypeCheck {
    expected: String,
    normalized: String,
}

impl TypeCheck {
    pub(crate) fn new(expected: String) -> Self {
        let normalized = normalize(&expected);
        Self {
            expected,
            normalized,
        }
    }

    /// The configured value, as given
    pub(crate) fn expected(&self) -> &str {
        &self.expected
    }

    /// Whether the decoded header carries a matching `typ`
    ///
    /// An absent or non-string `typ` never matches.
    pub(crate) fn matches(&self, header: &Value) -> bool {
        header
            .get("typ")
            .and_then(Value::as_str)
            .is_some_and(|typ| normalize(typ) == self.normalized)
    }
}

fn normalize(typ: &str) -> String {
    let lower = typ.to_ascii_lowercase();
    match lower.strip_prefix(MEDIA_TYPE_PREFIX) {
        Some(rest) => rest.to_string(),
        None => lower,
    }
}

const REDACTED: &str = "<redacted>";

/// Keeps the first and last four characters of values longer than eight.
pub(crate) fn redact_value(value: &str) -> String {
    let chars = value.trim().chars().collect::<Vec<_>>();
    if chars.len() <= 8 {
        return REDACTED.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// `Authorization` values keep their credential scope and signed header
/// list for debugging; only the signature goes.
pub(crate) fn redact_authorization(value: &str) -> String {
    value
        .split_once("Signature=")
        .map(|(scope, _)| format!("{scope}Signature={REDACTED}"))
        .unwrap_or_else(|| redact_value(value))
}

/// Error responses keep at most this many bytes of the body.
pub(crate) const SNIPPET_LIMIT: usize = 4096;

/// Lossy UTF-8 view of `body`, cut at [`SNIPPET_LIMIT`] bytes on a char
/// boundary and suffixed with `...` when cut.
pub(crate) fn body_snippet(body: &[u8]) -> String {
    shorten(&String::from_utf8_lossy(body), SNIPPET_LIMIT)
}

fn shorten(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_owned();
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

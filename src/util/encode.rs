use std::fmt::Write as _;

/// Which bytes survive percent-encoding untouched.
#[derive(Clone, Copy)]
enum Keep {
    Unreserved,
    UnreservedAndSlash,
}

impl Keep {
    fn allows(self, byte: u8) -> bool {
        let unreserved = byte.is_ascii_alphanumeric() || b"-_.~".contains(&byte);
        match self {
            Self::Unreserved => unreserved,
            Self::UnreservedAndSlash => unreserved || byte == b'/',
        }
    }
}

fn escape(input: &str, keep: Keep) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if keep.allows(byte) {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// RFC 3986 encoding; every reserved character is escaped, `/` included.
pub(crate) fn aws_percent_encode(input: &str) -> String {
    escape(input, Keep::Unreserved)
}

/// Label encoding for greedy path segments: `/` stays literal.
pub(crate) fn aws_percent_encode_path(input: &str) -> String {
    escape(input, Keep::UnreservedAndSlash)
}

fn encoded_pairs(params: &[(String, String)]) -> impl Iterator<Item = (String, String)> + '_ {
    params
        .iter()
        .map(|(k, v)| (aws_percent_encode(k), aws_percent_encode(v)))
}

fn join(pairs: impl IntoIterator<Item = (String, String)>) -> String {
    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Sorted `k=v&k=v` string used both on the wire and in the canonical request.
///
/// Pairs sort by encoded key, then by encoded value.
pub(crate) fn canonical_query_string(params: &[(String, String)]) -> String {
    let mut pairs = encoded_pairs(params).collect::<Vec<_>>();
    pairs.sort_unstable();
    join(pairs)
}

/// Form body in insertion order, encoded like the query string.
pub(crate) fn form_body(params: &[(String, String)]) -> String {
    join(encoded_pairs(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn component_encoding_escapes_reserved_bytes() {
        assert_eq!(aws_percent_encode("a+b c"), "a%2Bb%20c");
        assert_eq!(aws_percent_encode("~"), "~");
        assert_eq!(aws_percent_encode("/"), "%2F");
        assert_eq!(aws_percent_encode("arn:aws:batch"), "arn%3Aaws%3Abatch");
        assert_eq!(aws_percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn path_encoding_keeps_slash() {
        assert_eq!(aws_percent_encode_path("a/b+c"), "a/b%2Bc");
        assert_eq!(aws_percent_encode_path("/a%2Fb"), "/a%252Fb");
    }

    #[test]
    fn canonical_query_string_sorts_by_key_then_value() {
        let params = pairs(&[("b", "2"), ("a", "1"), ("a", "0"), ("space", "a b"), ("a-b", "x")]);
        assert_eq!(
            canonical_query_string(&params),
            "a=0&a=1&a-b=x&b=2&space=a%20b"
        );
    }

    #[test]
    fn form_body_keeps_insertion_order() {
        let params = pairs(&[
            ("Action", "CreateDomain"),
            ("Version", "2013-01-01"),
            ("DomainName", "my domain"),
        ]);
        assert_eq!(
            form_body(&params),
            "Action=CreateDomain&Version=2013-01-01&DomainName=my%20domain"
        );
    }
}

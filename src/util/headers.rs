use http::{HeaderMap, header::AsHeaderName};

fn header_str<N: AsHeaderName>(headers: &HeaderMap, name: N) -> Option<&str> {
    headers.get(name)?.to_str().ok()
}

pub(crate) fn header_string<N: AsHeaderName>(headers: &HeaderMap, name: N) -> Option<String> {
    header_str(headers, name).map(str::to_owned)
}

/// Whole seconds such as `Retry-After: 7`; HTTP dates are ignored.
pub(crate) fn header_u64<N: AsHeaderName>(headers: &HeaderMap, name: N) -> Option<u64> {
    header_str(headers, name)?.trim().parse().ok()
}

/// `x-amzn-RequestId` from JSON services, else `x-amz-request-id`.
pub(crate) fn request_id(headers: &HeaderMap) -> Option<String> {
    ["x-amzn-requestid", "x-amz-request-id"]
        .into_iter()
        .find_map(|name| header_string(headers, name))
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    #[test]
    fn amzn_request_id_wins() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amz-request-id", HeaderValue::from_static("fallback"));
        assert_eq!(request_id(&headers).as_deref(), Some("fallback"));
        headers.insert("x-amzn-RequestId", HeaderValue::from_static("primary"));
        assert_eq!(request_id(&headers).as_deref(), Some("primary"));
    }

    #[test]
    fn retry_after_seconds() {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::RETRY_AFTER, HeaderValue::from_static(" 7 "));
        assert_eq!(header_u64(&headers, http::header::RETRY_AFTER), Some(7));
        headers.insert(
            http::header::RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        assert_eq!(header_u64(&headers, http::header::RETRY_AFTER), None);
        assert_eq!(header_u64(&headers, "x-missing"), None);
    }
}

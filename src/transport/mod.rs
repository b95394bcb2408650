use std::time::Duration;

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};

use crate::{
    error::{Error, Result},
    model::Protocol,
    types::OperationOutput,
    util::headers::{header_string, header_u64, request_id},
};

#[cfg(feature = "async")]
pub(crate) mod async_transport;
#[cfg(feature = "blocking")]
pub(crate) mod blocking_transport;

#[derive(Clone, Copy, Debug)]
pub(crate) struct RetryConfig {
    pub(crate) max_attempts: u32,
    pub(crate) base_delay: Duration,
    pub(crate) max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(2),
        }
    }
}

pub(crate) fn backoff_delay(config: RetryConfig, attempt: u32) -> Duration {
    let attempt = attempt.saturating_sub(1);
    let factor = 1u32 << attempt.min(16);
    let millis = config
        .base_delay
        .as_millis()
        .saturating_mul(u128::from(factor));
    let capped = millis.min(config.max_delay.as_millis());

    let jitter = jitter_millis(capped);
    Duration::from_millis(jitter as u64)
}

fn jitter_millis(max_millis: u128) -> u128 {
    if max_millis <= 1 {
        return max_millis;
    }

    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as u128)
        .unwrap_or(0);

    nanos % max_millis
}

/// Delay before the next attempt; `Retry-After` wins on 429.
///
/// `None` when the server asks for a longer wait than `max_delay`; the 429
/// is then returned with its `retry_after` for the caller to act on.
pub(crate) fn retry_delay(
    config: RetryConfig,
    attempt: u32,
    status: StatusCode,
    headers: &HeaderMap,
) -> Option<Duration> {
    if status == StatusCode::TOO_MANY_REQUESTS
        && let Some(retry_after) = header_u64(headers, http::header::RETRY_AFTER)
    {
        let wait = Duration::from_secs(retry_after);
        return (wait <= config.max_delay).then_some(wait);
    }
    Some(backoff_delay(config, attempt))
}

/// Installs the ring provider once unless the process already chose one.
#[cfg(feature = "rustls")]
pub(crate) fn install_crypto_provider() {
    static INSTALLED: std::sync::OnceLock<()> = std::sync::OnceLock::new();
    INSTALLED.get_or_init(|| {
        if rustls::crypto::CryptoProvider::get_default().is_none() {
            let _ = rustls::crypto::ring::default_provider().install_default();
        }
    });
}

pub(crate) fn should_retry_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

impl RetryConfig {
    fn attempts(self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Pause before re-sending after `status`, or `None` to keep the response.
    pub(crate) fn after_status(
        self,
        attempt: u32,
        status: StatusCode,
        headers: &HeaderMap,
    ) -> Option<Duration> {
        if attempt < self.attempts() && should_retry_status(status) {
            retry_delay(self, attempt, status, headers)
        } else {
            None
        }
    }

    /// Pause before re-sending after a transport failure, or `None` to give up.
    pub(crate) fn after_failure(self, attempt: u32, transient: bool) -> Option<Duration> {
        (attempt < self.attempts() && transient).then(|| backoff_delay(self, attempt))
    }
}

/// Telemetry for one HTTP attempt.
pub(crate) struct Attempt<'a> {
    method: &'a Method,
    #[cfg(feature = "tracing")]
    pub(crate) span: tracing::Span,
    #[cfg(feature = "metrics")]
    started: std::time::Instant,
}

impl<'a> Attempt<'a> {
    pub(crate) fn begin(method: &'a Method, url: &url::Url, attempt: u32) -> Self {
        #[cfg(not(feature = "tracing"))]
        let _ = (url, attempt);
        #[cfg(feature = "metrics")]
        metrics::counter!("aws_http_attempts_total", "method" => method_label(method))
            .increment(1);
        Self {
            method,
            #[cfg(feature = "tracing")]
            span: tracing::debug_span!(
                "aws.http",
                method = %method,
                host = url.host_str().unwrap_or(""),
                path = url.path(),
                attempt,
            ),
            #[cfg(feature = "metrics")]
            started: std::time::Instant::now(),
        }
    }

    pub(crate) fn responded(&self, status: StatusCode) {
        #[cfg(not(feature = "metrics"))]
        let _ = status;
        #[cfg(feature = "metrics")]
        {
            let method = method_label(self.method);
            metrics::counter!(
                "aws_http_responses_total",
                "method" => method,
                "class" => status_class(status),
            )
            .increment(1);
            metrics::histogram!("aws_http_request_duration_seconds", "method" => method)
                .record(self.started.elapsed().as_secs_f64());
        }
    }

    /// `reason` is `status` or `transport`.
    pub(crate) fn retrying(&self, reason: &'static str, delay: Duration) {
        #[cfg(not(feature = "tracing"))]
        let _ = delay;
        #[cfg(feature = "metrics")]
        metrics::counter!(
            "aws_http_retries_total",
            "method" => method_label(self.method),
            "reason" => reason,
        )
        .increment(1);
        #[cfg(feature = "tracing")]
        self.span.in_scope(|| tracing::debug!(reason, ?delay, "retrying"));
        #[cfg(not(any(feature = "metrics", feature = "tracing")))]
        let _ = reason;
    }

    /// Records a terminal transport failure and builds its error.
    pub(crate) fn failed(
        &self,
        url: &url::Url,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Error {
        #[cfg(feature = "metrics")]
        metrics::counter!(
            "aws_http_errors_total",
            "method" => method_label(self.method),
            "kind" => "transport",
        )
        .increment(1);
        Error::transport(
            format!("request failed: {}", request_context(self.method, url)),
            source,
        )
    }

    pub(crate) fn unreadable_body(
        &self,
        url: &url::Url,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Error {
        Error::transport(
            format!(
                "failed to read response body: {}",
                request_context(self.method, url)
            ),
            Some(source),
        )
    }
}

pub(crate) fn default_user_agent() -> String {
    format!("awsrest/{}", env!("CARGO_PKG_VERSION"))
}

/// A fully buffered HTTP response.
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

impl RawResponse {
    /// Wraps a 2xx response as output and classifies anything else.
    pub(crate) fn into_outcome(self, protocol: Protocol) -> Result<OperationOutput> {
        if self.status.is_success() {
            Ok(OperationOutput::new(self.status, self.headers, self.body))
        } else {
            Err(response_error(protocol, self.status, &self.headers, &self.body))
        }
    }
}

const THROTTLING_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "TooManyRequestsException",
    "RequestLimitExceeded",
    "RequestThrottled",
    "RequestThrottledException",
];

pub(crate) fn response_error(
    protocol: Protocol,
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
) -> Error {
    let mut request_id = request_id(headers);

    let (code, message) = if protocol.is_json() {
        json_error_fields(headers, body)
    } else {
        match crate::util::xml::parse_error_xml(&String::from_utf8_lossy(body)) {
            Some(parsed) => {
                request_id = parsed.request_id.or(request_id);
                (parsed.code, parsed.message)
            }
            None => (None, None),
        }
    };

    let throttled = status == StatusCode::TOO_MANY_REQUESTS
        || code
            .as_deref()
            .is_some_and(|c| THROTTLING_CODES.contains(&c));
    if throttled {
        return Error::RateLimited {
            retry_after: header_u64(headers, http::header::RETRY_AFTER).map(Duration::from_secs),
            code,
            request_id,
        };
    }

    let body_snippet = (!body.is_empty()).then(|| crate::util::text::body_snippet(body));
    Error::Api {
        status,
        code,
        message,
        request_id,
        body_snippet,
    }
}

/// Error code and message of a JSON protocol error response.
///
/// The code comes from `x-amzn-ErrorType`, then `__type`, then `code`.
fn json_error_fields(headers: &HeaderMap, body: &[u8]) -> (Option<String>, Option<String>) {
    let parsed = serde_json::from_slice::<serde_json::Value>(body).ok();
    let field = |names: &[&str]| {
        let value = parsed.as_ref()?;
        names
            .iter()
            .find_map(|name| value.get(*name).and_then(|v| v.as_str()))
            .map(str::to_string)
    };

    let code = header_string(headers, "x-amzn-errortype")
        .or_else(|| field(&["__type", "code", "Code"]))
        .map(|raw| sanitize_error_code(&raw))
        .filter(|c| !c.is_empty());
    let message = field(&["message", "Message", "errorMessage"]);

    (code, message)
}

/// `aws.protocoltests#FooError:http://internal` becomes `FooError`.
fn sanitize_error_code(raw: &str) -> String {
    let without_suffix = raw.split(':').next().unwrap_or(raw);
    let name = without_suffix
        .rsplit('#')
        .next()
        .unwrap_or(without_suffix);
    name.trim().to_string()
}

#[cfg(feature = "metrics")]
pub(crate) fn status_class(status: StatusCode) -> &'static str {
    if status.is_informational() {
        "1xx"
    } else if status.is_success() {
        "2xx"
    } else if status.is_redirection() {
        "3xx"
    } else if status.is_client_error() {
        "4xx"
    } else if status.is_server_error() {
        "5xx"
    } else {
        "other"
    }
}

#[cfg(feature = "metrics")]
pub(crate) fn method_label(method: &http::Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "PUT" => "PUT",
        "HEAD" => "HEAD",
        "DELETE" => "DELETE",
        "POST" => "POST",
        "PATCH" => "PATCH",
        _ => "OTHER",
    }
}

pub(crate) fn request_context(method: &http::Method, url: &url::Url) -> String {
    let authority = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };

    if authority.is_empty() {
        format!("{method} {}", url.path())
    } else {
        format!("{method} {authority}{}", url.path())
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn backoff_is_capped() {
        let config = RetryConfig {
            max_attempts: 5,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(300),
        };
        for attempt in 1..10 {
            assert!(backoff_delay(config, attempt) <= Duration::from_millis(300));
        }
    }

    #[test]
    fn last_attempt_is_never_retried() {
        let config = RetryConfig {
            max_attempts: 2,
            ..RetryConfig::default()
        };
        let h = HeaderMap::new();
        assert!(config.after_status(1, StatusCode::SERVICE_UNAVAILABLE, &h).is_some());
        assert!(config.after_status(2, StatusCode::SERVICE_UNAVAILABLE, &h).is_none());
        assert!(config.after_status(1, StatusCode::BAD_REQUEST, &h).is_none());
        assert!(config.after_failure(1, true).is_some());
        assert!(config.after_failure(1, false).is_none());
        assert!(config.after_failure(2, true).is_none());
    }

    #[test]
    fn retry_after_is_honoured_on_429() {
        let h = headers(&[("retry-after", "2")]);
        let delay = retry_delay(RetryConfig::default(), 1, StatusCode::TOO_MANY_REQUESTS, &h);
        assert_eq!(delay, Some(Duration::from_secs(2)));
    }

    #[test]
    fn retry_after_beyond_max_delay_is_not_slept() {
        let config = RetryConfig::default();
        let h = headers(&[("retry-after", "86400")]);
        assert_eq!(
            retry_delay(config, 1, StatusCode::TOO_MANY_REQUESTS, &h),
            None
        );
        assert_eq!(
            config.after_status(1, StatusCode::TOO_MANY_REQUESTS, &h),
            None
        );

        let delay = config
            .after_status(1, StatusCode::SERVICE_UNAVAILABLE, &h)
            .unwrap();
        assert!(delay <= config.max_delay);
    }

    #[test]
    fn sanitizes_json_error_codes() {
        assert_eq!(
            sanitize_error_code("com.amazonaws.batch#ClientException"),
            "ClientException"
        );
        assert_eq!(
            sanitize_error_code("ResourceNotFoundException:http://internal.amazon.com/"),
            "ResourceNotFoundException"
        );
        assert_eq!(sanitize_error_code("ValidationException"), "ValidationException");
    }

    #[test]
    fn json_error_prefers_header_code() {
        let h = headers(&[
            ("x-amzn-errortype", "ConflictException:http://internal/"),
            ("x-amzn-requestid", "req-7"),
        ]);
        let err = response_error(
            Protocol::RestJson1,
            StatusCode::CONFLICT,
            &h,
            br#"{"__type":"Other","message":"already exists"}"#,
        );
        assert_eq!(err.code(), Some("ConflictException"));
        assert_eq!(err.request_id(), Some("req-7"));
        match err {
            Error::Api {
                message,
                body_snippet,
                ..
            } => {
                assert_eq!(message.as_deref(), Some("already exists"));
                assert!(body_snippet.unwrap_or_default().contains("already exists"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn json_error_reads_type_from_body() {
        let err = response_error(
            Protocol::AwsJson1_1,
            StatusCode::BAD_REQUEST,
            &HeaderMap::new(),
            br#"{"__type":"com.amazonaws.memorydb#ClusterNotFoundFault","Message":"nope"}"#,
        );
        assert_eq!(err.kind(), crate::ErrorKind::Service);
        assert_eq!(err.code(), Some("ClusterNotFoundFault"));
    }

    #[test]
    fn throttling_code_maps_to_rate_limited() {
        let err = response_error(
            Protocol::AwsJson1_1,
            StatusCode::BAD_REQUEST,
            &headers(&[("retry-after", "3")]),
            br#"{"__type":"ThrottlingException","message":"Rate exceeded"}"#,
        );
        match err {
            Error::RateLimited {
                retry_after, code, ..
            } => {
                assert_eq!(retry_after, Some(Duration::from_secs(3)));
                assert_eq!(code.as_deref(), Some("ThrottlingException"));
            }
            other => panic!("expected rate limited error, got {other:?}"),
        }
    }

    #[test]
    fn status_429_is_rate_limited_without_body() {
        let err = response_error(
            Protocol::RestJson1,
            StatusCode::TOO_MANY_REQUESTS,
            &headers(&[("x-amzn-requestid", "req-1")]),
            b"",
        );
        assert_eq!(err.kind(), crate::ErrorKind::Throttling);
        assert_eq!(err.request_id(), Some("req-1"));
    }

    #[test]
    fn query_error_is_parsed_from_xml() {
        let body = br#"<ErrorResponse><Error><Type>Sender</Type><Code>ResourceNotFound</Code>
<Message>Domain not found: movies</Message></Error><RequestId>req-42</RequestId></ErrorResponse>"#;
        let err = response_error(
            Protocol::AwsQuery,
            StatusCode::CONFLICT,
            &HeaderMap::new(),
            body,
        );
        assert_eq!(err.code(), Some("ResourceNotFound"));
        assert_eq!(err.request_id(), Some("req-42"));
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
    }

    #[test]
    fn unparseable_body_still_yields_api_error() {
        let err = response_error(
            Protocol::RestJson1,
            StatusCode::INTERNAL_SERVER_ERROR,
            &HeaderMap::new(),
            b"<html>oops</html>",
        );
        assert_eq!(err.kind(), crate::ErrorKind::Service);
        assert!(err.code().is_none());
        assert!(err.is_retryable());
    }

    #[test]
    fn success_becomes_output() {
        let raw = RawResponse {
            status: StatusCode::OK,
            headers: headers(&[("x-amzn-requestid", "req-2")]),
            body: Bytes::from_static(b"{}"),
        };
        let out = raw.into_outcome(Protocol::RestJson1).unwrap();
        assert_eq!(out.request_id.as_deref(), Some("req-2"));
    }
}

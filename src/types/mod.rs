//! Shared request and response types.

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};

/// A fully built and signed request, ready to dispatch.
#[derive(Clone)]
pub struct PreparedRequest {
    /// HTTP method to use.
    pub method: Method,
    /// Request URL including the query string.
    pub url: Url,
    /// Headers, including `Authorization` when credentials are configured.
    pub headers: HeaderMap,
    /// Request payload; empty when the operation sends no body.
    pub body: Bytes,
}

impl PreparedRequest {
    /// Path of the request URL, still percent-encoded.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Body as UTF-8 text, lossy.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl std::fmt::Debug for PreparedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| {
                let value = value.to_str().unwrap_or("<binary>");
                let value = match name.as_str() {
                    "authorization" => crate::util::redact::redact_authorization(value),
                    "x-amz-security-token" => crate::util::redact::redact_value(value),
                    _ => value.to_string(),
                };
                (name.as_str().to_string(), value)
            })
            .collect::<Vec<_>>();

        f.debug_struct("PreparedRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}

/// Successful response of an operation.
#[derive(Clone, Debug)]
pub struct OperationOutput {
    /// HTTP status (always 2xx).
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Request id reported by the service, if any.
    pub request_id: Option<String>,
    /// Raw response payload.
    pub body: Bytes,
}

impl OperationOutput {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        let request_id = crate::util::headers::request_id(&headers);
        Self {
            status,
            headers,
            request_id,
            body,
        }
    }

    /// Decodes the JSON payload. An empty payload decodes as `{}`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let body: &[u8] = if self.body.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &self.body
        };
        serde_json::from_slice(body)
            .map_err(|e| Error::decode("failed to parse JSON response", Some(Box::new(e))))
    }

    /// Decodes the JSON payload into an untyped value.
    pub fn json_value(&self) -> Result<serde_json::Value> {
        self.json()
    }

    /// Decodes an XML payload, as returned by query-protocol services.
    pub fn xml<T: DeserializeOwned>(&self) -> Result<T> {
        crate::util::xml::from_xml(&self.body)
    }

    /// Payload as UTF-8 text, lossy.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Top-level string field of a JSON payload, if present and non-empty.
    pub(crate) fn json_string_field(&self, name: &str) -> Option<String> {
        let value = self.json_value().ok()?;
        value
            .get(name)
            .and_then(|v| v.as_str())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;
    use serde::Deserialize;

    use super::*;

    fn output(body: &'static str) -> OperationOutput {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-RequestId", HeaderValue::from_static("req-9"));
        OperationOutput::new(StatusCode::OK, headers, Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn decodes_json_and_request_id() {
        #[derive(Deserialize)]
        struct SubmitJobResponse {
            #[serde(rename = "jobId")]
            job_id: String,
        }

        let out = output(r#"{"jobId":"abc","jobName":"n"}"#);
        assert_eq!(out.request_id.as_deref(), Some("req-9"));
        let parsed: SubmitJobResponse = out.json().unwrap();
        assert_eq!(parsed.job_id, "abc");
    }

    #[test]
    fn empty_body_decodes_as_empty_object() {
        let out = output("");
        assert_eq!(out.json_value().unwrap(), serde_json::json!({}));
        assert!(out.json_string_field("nextToken").is_none());
    }

    #[test]
    fn next_token_field_ignores_empty_strings() {
        assert_eq!(
            output(r#"{"nextToken":"t2"}"#).json_string_field("nextToken").as_deref(),
            Some("t2")
        );
        assert!(output(r#"{"nextToken":""}"#).json_string_field("nextToken").is_none());
    }

    #[test]
    fn prepared_request_debug_redacts_signature() {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::AUTHORIZATION,
            HeaderValue::from_static("AWS4-HMAC-SHA256 Credential=AKID, Signature=deadbeef"),
        );
        let req = PreparedRequest {
            method: Method::GET,
            url: Url::parse("https://example.com/a").unwrap(),
            headers,
            body: Bytes::new(),
        };
        let out = format!("{req:?}");
        assert!(!out.contains("deadbeef"));
        assert!(out.contains("Signature=<redacted>"));
    }
}

use serde::{Deserialize, de::DeserializeOwned};

use crate::error::Error;

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ParsedError {
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmlErrorResponse {
    #[serde(rename = "Error")]
    error: Option<XmlErrorBody>,
    #[serde(rename = "RequestId")]
    request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmlErrorBody {
    #[serde(rename = "Code")]
    code: Option<String>,
    #[serde(rename = "Message")]
    message: Option<String>,
    #[serde(rename = "RequestId")]
    request_id: Option<String>,
}

/// Parses a query-protocol `<ErrorResponse>` envelope, or a bare `<Error>`.
pub(crate) fn parse_error_xml(body: &str) -> Option<ParsedError> {
    if body.trim().is_empty() {
        return None;
    }

    if let Ok(parsed) = quick_xml::de::from_str::<XmlErrorResponse>(body)
        && let Some(error) = parsed.error
    {
        return Some(ParsedError {
            code: error.code,
            message: error.message,
            request_id: parsed.request_id.or(error.request_id),
        });
    }

    let bare = quick_xml::de::from_str::<XmlErrorBody>(body).ok()?;
    if bare.code.is_none() && bare.message.is_none() {
        return None;
    }
    Some(ParsedError {
        code: bare.code,
        message: bare.message,
        request_id: bare.request_id,
    })
}

pub(crate) fn from_xml<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    let text = std::str::from_utf8(body)
        .map_err(|e| Error::decode("response body is not valid UTF-8", Some(Box::new(e))))?;
    quick_xml::de::from_str(text)
        .map_err(|e| Error::decode("failed to parse XML response", Some(Box::new(e))))
}

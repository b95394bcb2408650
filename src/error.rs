use std::{error::Error as StdError, fmt, time::Duration};

use http::StatusCode;

/// Library result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Flat classification of [`Error`] values.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required request member was not set.
    MissingParameter,
    /// The service endpoint could not be resolved.
    EndpointResolutionFailure,
    /// Invalid configuration or parameters.
    InvalidConfig,
    /// Request signing failed.
    Signing,
    /// The service throttled the request.
    Throttling,
    /// The service returned an error response.
    Service,
    /// Transport-level failure.
    Transport,
    /// Response decode failure.
    Decode,
    /// The executor did not run the operation.
    Executor,
}

impl ErrorKind {
    /// Returns the upper snake case name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingParameter => "MISSING_PARAMETER",
            Self::EndpointResolutionFailure => "ENDPOINT_RESOLUTION_FAILURE",
            Self::InvalidConfig => "INVALID_CONFIG",
            Self::Signing => "SIGNING",
            Self::Throttling => "THROTTLING",
            Self::Service => "SERVICE",
            Self::Transport => "TRANSPORT",
            Self::Decode => "DECODE",
            Self::Executor => "EXECUTOR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every way an operation can fail, from input validation to the service's
/// own error response.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// A required member of the operation input was not set.
    MissingParameter { operation: String, field: String },

    /// Endpoint resolution failed before the request was sent.
    EndpointResolution { message: String },

    /// Invalid configuration or parameters.
    InvalidConfig { message: String },

    /// Request signing failed.
    Signing { message: String },

    /// Request was throttled by the service.
    RateLimited {
        retry_after: Option<Duration>,
        code: Option<String>,
        request_id: Option<String>,
    },

    /// Service returned an error response.
    Api {
        status: StatusCode,
        code: Option<String>,
        message: Option<String>,
        request_id: Option<String>,
        body_snippet: Option<String>,
    },

    /// Transport-level failure (HTTP client, IO, TLS).
    Transport {
        message: String,
        source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    },

    /// Response decode or parse failure.
    Decode {
        message: String,
        source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    },

    /// The executor rejected or lost the task running the operation.
    Executor { message: String },
}

impl Error {
    /// Creates a missing required member error.
    pub fn missing_parameter(operation: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingParameter {
            operation: operation.into(),
            field: field.into(),
        }
    }

    /// Creates an endpoint resolution error.
    pub fn endpoint_resolution(message: impl Into<String>) -> Self {
        Self::EndpointResolution {
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates a signing error.
    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing {
            message: message.into(),
        }
    }

    /// Creates a transport error with optional source.
    pub fn transport(
        message: impl Into<String>,
        source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            source,
        }
    }

    /// Creates a decode error with optional source.
    pub fn decode(
        message: impl Into<String>,
        source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self::Decode {
            message: message.into(),
            source,
        }
    }

    /// Creates an executor error.
    pub fn executor(message: impl Into<String>) -> Self {
        Self::Executor {
            message: message.into(),
        }
    }

    /// Returns the flat error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingParameter { .. } => ErrorKind::MissingParameter,
            Self::EndpointResolution { .. } => ErrorKind::EndpointResolutionFailure,
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
            Self::Signing { .. } => ErrorKind::Signing,
            Self::RateLimited { .. } => ErrorKind::Throttling,
            Self::Api { .. } => ErrorKind::Service,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Executor { .. } => ErrorKind::Executor,
        }
    }

    /// Returns an HTTP status when available.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            _ => None,
        }
    }

    /// Returns the service error code when available.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } | Self::RateLimited { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Returns the request id if reported by the service.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api { request_id, .. } | Self::RateLimited { request_id, .. } => {
                request_id.as_deref()
            }
            _ => None,
        }
    }

    /// Throttling, 5xx responses and transport failures may succeed when
    /// sent again. Nothing that failed before the request left is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api { status, .. } => status.is_server_error(),
            _ => matches!(self.kind(), ErrorKind::Throttling | ErrorKind::Transport),
        }
    }
}

/// ` label=value`, or nothing when unset or empty.
struct Labeled<'a>(&'static str, &'a Option<String>);

impl fmt::Display for Labeled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.1.as_deref() {
            Some(value) if !value.is_empty() => write!(f, " {}={value}", self.0),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameter { operation, field } => {
                write!(f, "missing required field [{field}] for {operation}")
            }
            Self::EndpointResolution { message } => {
                write!(f, "endpoint resolution failure: {message}")
            }
            Self::InvalidConfig { message } => write!(f, "invalid config: {message}"),
            Self::Signing { message } => write!(f, "signing error: {message}"),
            Self::RateLimited {
                retry_after, code, ..
            } => {
                write!(f, "rate limited{}", Labeled("code", code))?;
                if let Some(delay) = retry_after {
                    write!(f, " (retry after {}s)", delay.as_secs())?;
                }
                Ok(())
            }
            Self::Api {
                status,
                code,
                message,
                request_id,
                ..
            } => {
                write!(
                    f,
                    "api error: {status}{}{}",
                    Labeled("code", code),
                    Labeled("request_id", request_id)
                )?;
                match message.as_deref() {
                    Some(message) if !message.is_empty() => write!(f, " ({message})"),
                    _ => Ok(()),
                }
            }
            Self::Transport { message, .. } => write!(f, "transport error: {message}"),
            Self::Decode { message, .. } => write!(f, "decode error: {message}"),
            Self::Executor { message } => write!(f, "executor error: {message}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Transport { source, .. } | Self::Decode { source, .. } => {
                source.as_deref().map(|e| e as &(dyn StdError + 'static))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_display_names_field_and_operation() {
        let err = Error::missing_parameter("DescribeWorkspace", "workspaceId");
        assert_eq!(err.kind(), ErrorKind::MissingParameter);
        assert_eq!(
            err.to_string(),
            "missing required field [workspaceId] for DescribeWorkspace"
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn endpoint_resolution_kind_is_stable() {
        let err = Error::endpoint_resolution("invalid region");
        assert_eq!(err.kind(), ErrorKind::EndpointResolutionFailure);
        assert_eq!(err.kind().as_str(), "ENDPOINT_RESOLUTION_FAILURE");
        assert!(err.status().is_none());
    }

    #[test]
    fn api_error_exposes_code_and_request_id() {
        let err = Error::Api {
            status: StatusCode::BAD_REQUEST,
            code: Some("ValidationException".to_string()),
            message: Some("bad input".to_string()),
            request_id: Some("req-1".to_string()),
            body_snippet: None,
        };
        assert_eq!(err.code(), Some("ValidationException"));
        assert_eq!(err.request_id(), Some("req-1"));
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            err.to_string(),
            "api error: 400 Bad Request code=ValidationException request_id=req-1 (bad input)"
        );
    }

    #[test]
    fn rate_limited_display_and_retryability() {
        let err = Error::RateLimited {
            retry_after: Some(Duration::from_secs(7)),
            code: None,
            request_id: None,
        };
        assert_eq!(err.to_string(), "rate limited (retry after 7s)");
        assert_eq!(err.status(), Some(StatusCode::TOO_MANY_REQUESTS));
        assert!(err.is_retryable());
        assert!(!Error::executor("closed").is_retryable());
        assert!(Error::transport("reset", None).is_retryable());
    }

    #[test]
    fn transport_error_exposes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::transport("request failed", Some(Box::new(io)));
        assert_eq!(StdError::source(&err).map(ToString::to_string).as_deref(), Some("refused"));
    }
}

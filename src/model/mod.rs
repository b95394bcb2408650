//! Static service and operation tables.
//!
//! Each service module exposes a [`ServiceModel`] named `SERVICE` plus one
//! [`Operation`] constant per API operation. The tables carry everything the
//! generic request builder needs: HTTP method, path template, member bindings
//! and which members are required.

/// Builds an [`Operation`] bound to `POST /`, as used by the JSON RPC and
/// Query protocols.
macro_rules! rpc {
    ($name:literal, [$($member:expr),* $(,)?]) => {
        $crate::model::Operation {
            name: $name,
            method: $crate::model::HttpMethod::Post,
            uri: "/",
            members: &[$($member),*],
            paginator: None,
        }
    };
    ($name:literal, [$($member:expr),* $(,)?], $pages:expr) => {
        $crate::model::Operation {
            name: $name,
            method: $crate::model::HttpMethod::Post,
            uri: "/",
            members: &[$($member),*],
            paginator: Some($pages),
        }
    };
}

pub mod amp;
pub mod batch;
pub mod cloudsearch;
pub mod iotevents;
pub mod mediaconvert;
pub mod memorydb;
pub mod ssm_contacts;

/// Wire protocol of a service.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    /// REST bindings with JSON payloads.
    RestJson1,
    /// `POST /` with `X-Amz-Target`, JSON 1.0 payloads.
    AwsJson1_0,
    /// `POST /` with `X-Amz-Target`, JSON 1.1 payloads.
    AwsJson1_1,
    /// `POST /` with form-encoded `Action` requests and XML responses.
    AwsQuery,
}

impl Protocol {
    pub(crate) fn is_json(self) -> bool {
        !matches!(self, Self::AwsQuery)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Patch,
    Head,
}

impl HttpMethod {
    pub fn as_http(self) -> http::Method {
        match self {
            Self::Get => http::Method::GET,
            Self::Put => http::Method::PUT,
            Self::Post => http::Method::POST,
            Self::Delete => http::Method::DELETE,
            Self::Patch => http::Method::PATCH,
            Self::Head => http::Method::HEAD,
        }
    }

    pub(crate) fn allows_empty_body(self) -> bool {
        matches!(self, Self::Get | Self::Head | Self::Delete)
    }
}

/// Where a member is placed on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// `{name}` in the path template.
    Label,
    /// `{name+}` in the path template; `/` is kept unescaped.
    GreedyLabel,
    /// Query string parameter with the given wire name.
    Query(&'static str),
    /// HTTP header with the given wire name.
    Header(&'static str),
    /// Request payload field.
    Body,
}

/// A member of an operation input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Member {
    pub name: &'static str,
    pub location: Location,
    pub required: bool,
    pub idempotency_token: bool,
}

impl Member {
    pub const fn body(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Body,
            required: false,
            idempotency_token: false,
        }
    }

    /// Path labels are always required.
    pub const fn label(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Label,
            required: true,
            idempotency_token: false,
        }
    }

    pub const fn greedy_label(name: &'static str) -> Self {
        Self {
            name,
            location: Location::GreedyLabel,
            required: true,
            idempotency_token: false,
        }
    }

    pub const fn query(name: &'static str, wire: &'static str) -> Self {
        Self {
            name,
            location: Location::Query(wire),
            required: false,
            idempotency_token: false,
        }
    }

    pub const fn header(name: &'static str, wire: &'static str) -> Self {
        Self {
            name,
            location: Location::Header(wire),
            required: false,
            idempotency_token: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Filled with a random UUID when left unset.
    pub const fn idempotency_token(mut self) -> Self {
        self.idempotency_token = true;
        self
    }

    pub fn is_label(&self) -> bool {
        matches!(self.location, Location::Label | Location::GreedyLabel)
    }
}

/// Token-based pagination metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    /// Input member carrying the continuation token.
    pub input_token: &'static str,
    /// Output field carrying the next token.
    pub output_token: &'static str,
    /// Input member carrying the page size, if the operation has one.
    pub page_size: Option<&'static str>,
}

impl Paginator {
    pub const fn next_token() -> Self {
        Self {
            input_token: "nextToken",
            output_token: "nextToken",
            page_size: Some("maxResults"),
        }
    }

    pub const fn pascal_next_token() -> Self {
        Self {
            input_token: "NextToken",
            output_token: "NextToken",
            page_size: Some("MaxResults"),
        }
    }
}

/// One API operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path template, optionally followed by a literal query (`/path?flag`).
    pub uri: &'static str,
    pub members: &'static [Member],
    pub paginator: Option<Paginator>,
}

impl Operation {
    pub fn member(&self, name: &str) -> Option<&'static Member> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn required_members(&self) -> impl Iterator<Item = &'static Member> + '_ {
        self.members.iter().filter(|m| m.required)
    }
}

/// A service and its operation table.
#[derive(Debug, PartialEq, Eq)]
pub struct ServiceModel {
    /// Human readable service id.
    pub name: &'static str,
    /// Hostname prefix for endpoint resolution.
    pub endpoint_prefix: &'static str,
    /// SigV4 signing name.
    pub signing_name: &'static str,
    pub api_version: &'static str,
    pub protocol: Protocol,
    /// `X-Amz-Target` prefix for the JSON RPC protocols.
    pub target_prefix: Option<&'static str>,
    /// Suffix of the `AWS_ENDPOINT_URL_<SUFFIX>` override variable.
    pub env_suffix: &'static str,
    pub operations: &'static [&'static Operation],
}

impl ServiceModel {
    pub fn operation(&self, name: &str) -> Option<&'static Operation> {
        self.operations.iter().copied().find(|op| op.name == name)
    }
}

/// Every service table shipped with the crate.
pub fn services() -> [&'static ServiceModel; 7] {
    [
        &amp::SERVICE,
        &batch::SERVICE,
        &cloudsearch::SERVICE,
        &iotevents::SERVICE,
        &mediaconvert::SERVICE,
        &memorydb::SERVICE,
        &ssm_contacts::SERVICE,
    ]
}

/// Placeholder names in a path template, in order.
pub(crate) fn template_labels(uri: &str) -> Vec<(&str, bool)> {
    let path = uri.split_once('?').map_or(uri, |(p, _)| p);
    let mut out = Vec::new();
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let inner = &rest[start + 1..start + len];
        match inner.strip_suffix('+') {
            Some(name) => out.push((name, true)),
            None => out.push((inner, false)),
        }
        rest = &rest[start + len + 1..];
    }
    out
}

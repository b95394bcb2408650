//! Generic request construction from operation tables.
//!
//! [`prepare`] turns an [`Operation`] plus an [`Input`] into a signed
//! [`PreparedRequest`]. Validation and endpoint resolution both happen here,
//! so the failures they report never involve network I/O.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::{
    auth::{Auth, Region},
    endpoint::{EndpointParams, EndpointProvider},
    error::{Error, Result},
    input::Input,
    model::{Location, Operation, Protocol, ServiceModel},
    types::PreparedRequest,
    util::{
        encode::{aws_percent_encode, aws_percent_encode_path, form_body},
        form::flatten,
        signing::{SigV4Params, payload_hash, sign_headers},
        url::resolve_url,
    },
};

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// Client state a request is prepared against.
#[derive(Clone, Copy)]
pub(crate) struct RequestContext<'a> {
    pub(crate) endpoint_provider: &'a dyn EndpointProvider,
    pub(crate) endpoint_params: &'a EndpointParams,
    pub(crate) region: &'a Region,
    pub(crate) auth: &'a Auth,
    pub(crate) now: OffsetDateTime,
}

/// Checks members of `input` against the operation table.
///
/// Unknown members fail first, then required members are checked in table
/// order and the first unset one is reported.
pub fn validate(operation: &Operation, input: &Input) -> Result<()> {
    if let Some(unknown) = input.names().find(|name| operation.member(name).is_none()) {
        return Err(Error::invalid_config(format!(
            "unknown member [{unknown}] for {}",
            operation.name
        )));
    }

    for member in operation.required_members() {
        let value = input.get(member.name);
        let unset = match value {
            None => true,
            Some(Value::String(s)) if member.is_label() => s.is_empty(),
            Some(_) => false,
        };
        if unset {
            return Err(Error::missing_parameter(operation.name, member.name));
        }
    }

    Ok(())
}

pub(crate) fn prepare(
    service: &ServiceModel,
    operation: &Operation,
    input: &Input,
    ctx: RequestContext<'_>,
) -> Result<PreparedRequest> {
    validate(operation, input)?;

    let mut input = input.clone();
    for member in operation.members.iter().filter(|m| m.idempotency_token) {
        if !input.has_been_set(member.name) {
            input.set(member.name, uuid::Uuid::new_v4().to_string());
        }
    }

    let endpoint = ctx
        .endpoint_provider
        .resolve(service, ctx.endpoint_params)?;

    let (path, mut query) = expand_uri(operation, &input)?;
    let mut headers = HeaderMap::new();

    for member in operation.members {
        let Some(value) = input.get(member.name) else {
            continue;
        };
        match member.location {
            Location::Query(wire) => match value {
                Value::Array(items) => {
                    for item in items {
                        query.push((wire.to_string(), scalar(operation, member.name, item)?));
                    }
                }
                _ => query.push((wire.to_string(), scalar(operation, member.name, value)?)),
            },
            Location::Header(wire) => {
                let rendered = match value {
                    Value::Array(items) => items
                        .iter()
                        .map(|item| scalar(operation, member.name, item))
                        .collect::<Result<Vec<_>>>()?
                        .join(","),
                    _ => scalar(operation, member.name, value)?,
                };
                let name = HeaderName::from_bytes(wire.as_bytes())
                    .map_err(|_| Error::invalid_config(format!("invalid header name {wire}")))?;
                let value = HeaderValue::from_str(&rendered).map_err(|_| {
                    Error::invalid_config(format!("invalid value for header member {}", member.name))
                })?;
                headers.insert(name, value);
            }
            Location::Label | Location::GreedyLabel | Location::Body => {}
        }
    }

    let body = build_body(service, operation, &input, &mut headers)?;

    let resolved = resolve_url(endpoint.url(), &path, &query)?;
    let method = operation.method.as_http();

    if let Some(credentials) = ctx.auth.credentials() {
        let hash = payload_hash(&body);
        let params = SigV4Params::new(ctx.region, service.signing_name, credentials, ctx.now);
        sign_headers(&method, &resolved, &mut headers, &hash, params)?;
    }

    Ok(PreparedRequest {
        method,
        url: resolved.url,
        headers,
        body,
    })
}

/// Expands the path template and splits off any literal query.
fn expand_uri(operation: &Operation, input: &Input) -> Result<(String, Vec<(String, String)>)> {
    let (template, literal_query) = match operation.uri.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (operation.uri, None),
    };

    let mut path = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        path.push_str(&rest[..start]);

        let inner = &rest[start + 1..start + len];
        let (name, greedy) = match inner.strip_suffix('+') {
            Some(name) => (name, true),
            None => (inner, false),
        };
        let value = input
            .get(name)
            .ok_or_else(|| Error::missing_parameter(operation.name, name))?;
        let value = scalar(operation, name, value)?;
        reject_dot_segments(operation, name, &value, greedy)?;
        if greedy {
            path.push_str(&aws_percent_encode_path(&value));
        } else {
            path.push_str(&aws_percent_encode(&value));
        }

        rest = &rest[start + len + 1..];
    }
    path.push_str(rest);

    let query = literal_query
        .into_iter()
        .flat_map(|q| q.split('&'))
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect();

    Ok((path, query))
}

fn build_body(
    service: &ServiceModel,
    operation: &Operation,
    input: &Input,
    headers: &mut HeaderMap,
) -> Result<Bytes> {
    match service.protocol {
        Protocol::RestJson1 => {
            let mut fields = Map::new();
            for member in operation.members {
                if member.location == Location::Body
                    && let Some(value) = input.get(member.name)
                {
                    fields.insert(member.name.to_string(), value.clone());
                }
            }
            if fields.is_empty() && operation.method.allows_empty_body() {
                return Ok(Bytes::new());
            }
            set_content_type(headers, JSON_CONTENT_TYPE);
            encode_json(&Value::Object(fields))
        }
        Protocol::AwsJson1_0 | Protocol::AwsJson1_1 => {
            let version = if service.protocol == Protocol::AwsJson1_0 {
                "1.0"
            } else {
                "1.1"
            };
            let prefix = service.target_prefix.ok_or_else(|| {
                Error::invalid_config(format!("{} has no target prefix", service.name))
            })?;
            let target = HeaderValue::from_str(&format!("{prefix}.{}", operation.name))
                .map_err(|_| Error::invalid_config("invalid X-Amz-Target value"))?;
            headers.insert(HeaderName::from_static("x-amz-target"), target);
            set_content_type(headers, &format!("application/x-amz-json-{version}"));

            let fields: Map<String, Value> = operation
                .members
                .iter()
                .filter_map(|m| input.get(m.name).map(|v| (m.name.to_string(), v.clone())))
                .collect();
            encode_json(&Value::Object(fields))
        }
        Protocol::AwsQuery => {
            let mut pairs = vec![
                ("Action".to_string(), operation.name.to_string()),
                ("Version".to_string(), service.api_version.to_string()),
            ];
            for member in operation.members {
                if let Some(value) = input.get(member.name) {
                    flatten(member.name, value, &mut pairs);
                }
            }
            set_content_type(headers, FORM_CONTENT_TYPE);
            Ok(Bytes::from(form_body(&pairs)))
        }
    }
}

fn set_content_type(headers: &mut HeaderMap, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(http::header::CONTENT_TYPE, value);
    }
}

fn encode_json(value: &Value) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(|e| Error::invalid_config(format!("failed to encode request body: {e}")))
}

/// Renders a scalar member value for a path, query or header position.
/// `.` and `..` labels would be collapsed by URL normalization and
/// address a different resource than the template names.
fn reject_dot_segments(operation: &Operation, name: &str, value: &str, greedy: bool) -> Result<()> {
    let is_dot = |segment: &str| segment == "." || segment == "..";
    let dotted = if greedy {
        value.split('/').any(is_dot)
    } else {
        is_dot(value)
    };
    if dotted {
        return Err(Error::invalid_config(format!(
            "member [{name}] of {} must not be a `.` or `..` path segment",
            operation.name
        )));
    }
    Ok(())
}

fn scalar(operation: &Operation, name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(Error::invalid_config(format!(
            "member [{name}] of {} must be a string, number or boolean",
            operation.name
        ))),
    }
}

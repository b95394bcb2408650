//! Endpoint resolution.
//!
//! The default provider derives a hostname from the service's endpoint prefix,
//! the region and the partition the region belongs to. A custom endpoint URL
//! replaces the derived host entirely.

use std::fmt;

use url::Url;

use crate::{
    error::{Error, Result},
    model::ServiceModel,
};

/// Inputs to endpoint resolution, taken from the client configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EndpointParams {
    pub region: Option<String>,
    pub use_fips: bool,
    pub use_dual_stack: bool,
    /// Custom endpoint URL; overrides hostname derivation.
    pub endpoint_url: Option<String>,
}

/// A resolved service endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
}

impl Endpoint {
    /// Parses and validates an absolute `http`/`https` URL.
    pub fn parse(value: &str) -> Result<Self> {
        let url = Url::parse(value.trim()).map_err(|_| {
            Error::endpoint_resolution(format!("endpoint URL is not a valid absolute URL: {value}"))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::endpoint_resolution(
                "endpoint URL scheme must be http or https",
            ));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(Error::endpoint_resolution("endpoint URL must include a host"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::endpoint_resolution(
                "endpoint URL must not include a query or fragment",
            ));
        }

        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// Resolves the base URL a service is called at.
pub trait EndpointProvider: Send + Sync {
    fn resolve(&self, service: &ServiceModel, params: &EndpointParams) -> Result<Endpoint>;
}

/// Region-based resolution across the standard AWS partitions.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultEndpointProvider;

/// Always resolves to one fixed URL, regardless of service or region.
#[derive(Clone, Debug)]
pub struct StaticEndpointProvider {
    endpoint: Endpoint,
}

impl StaticEndpointProvider {
    pub fn new(url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            endpoint: Endpoint::parse(url.as_ref())?,
        })
    }
}

impl EndpointProvider for StaticEndpointProvider {
    fn resolve(&self, _service: &ServiceModel, _params: &EndpointParams) -> Result<Endpoint> {
        Ok(self.endpoint.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Partition {
    id: &'static str,
    dns_suffix: &'static str,
    dual_stack_dns_suffix: Option<&'static str>,
}

const AWS: Partition = Partition {
    id: "aws",
    dns_suffix: "amazonaws.com",
    dual_stack_dns_suffix: Some("api.aws"),
};
const AWS_CN: Partition = Partition {
    id: "aws-cn",
    dns_suffix: "amazonaws.com.cn",
    dual_stack_dns_suffix: Some("api.amazonwebservices.com.cn"),
};
const AWS_US_GOV: Partition = Partition {
    id: "aws-us-gov",
    dns_suffix: "amazonaws.com",
    dual_stack_dns_suffix: Some("api.aws"),
};
const AWS_ISO: Partition = Partition {
    id: "aws-iso",
    dns_suffix: "c2s.ic.gov",
    dual_stack_dns_suffix: None,
};
const AWS_ISO_B: Partition = Partition {
    id: "aws-iso-b",
    dns_suffix: "sc2s.sgov.gov",
    dual_stack_dns_suffix: None,
};

fn partition_for(region: &str) -> Partition {
    // `us-isob-` must be tested before `us-iso-`.
    if region.starts_with("cn-") {
        AWS_CN
    } else if region.starts_with("us-gov-") {
        AWS_US_GOV
    } else if region.starts_with("us-isob-") {
        AWS_ISO_B
    } else if region.starts_with("us-iso-") {
        AWS_ISO
    } else {
        AWS
    }
}

fn is_valid_host_label(value: &str) -> bool {
    let bytes = value.as_bytes();
    !bytes.is_empty()
        && bytes.len() <= 63
        && bytes[0].is_ascii_alphanumeric()
        && bytes[bytes.len() - 1] != b'-'
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

impl EndpointProvider for DefaultEndpointProvider {
    fn resolve(&self, service: &ServiceModel, params: &EndpointParams) -> Result<Endpoint> {
        if let Some(url) = params.endpoint_url.as_deref() {
            if params.use_fips {
                return Err(Error::endpoint_resolution(
                    "invalid configuration: FIPS and custom endpoint are not supported",
                ));
            }
            if params.use_dual_stack {
                return Err(Error::endpoint_resolution(
                    "invalid configuration: dual-stack and custom endpoint are not supported",
                ));
            }
            return Endpoint::parse(url);
        }

        let region = params
            .region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| Error::endpoint_resolution("a region is required"))?;
        if !is_valid_host_label(region) {
            return Err(Error::endpoint_resolution(format!(
                "invalid region: {region:?} is not a valid host label"
            )));
        }

        let partition = partition_for(region);
        let suffix = if params.use_dual_stack {
            partition.dual_stack_dns_suffix.ok_or_else(|| {
                Error::endpoint_resolution(format!(
                    "dual-stack is enabled but partition {} does not support it",
                    partition.id
                ))
            })?
        } else {
            partition.dns_suffix
        };
        let fips = if params.use_fips { "-fips" } else { "" };

        Endpoint::parse(&format!(
            "https://{}{fips}.{region}.{suffix}",
            service.endpoint_prefix
        ))
    }
}

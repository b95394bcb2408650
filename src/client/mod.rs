use std::{sync::Arc, time::Duration};

use time::OffsetDateTime;

use crate::{
    auth::{Auth, Region},
    endpoint::{DefaultEndpointProvider, EndpointParams, EndpointProvider},
    error::{Error, Result},
    input::Input,
    model::{Operation, ServiceModel},
    request::{self, RequestContext},
    transport::RetryConfig,
    types::PreparedRequest,
};

#[cfg(feature = "async")]
mod async_client;
#[cfg(feature = "blocking")]
mod blocking_client;

#[cfg(feature = "async")]
pub use async_client::{Client, ClientBuilder};
#[cfg(feature = "blocking")]
pub use blocking_client::{BlockingClient, BlockingClientBuilder};

/// Builder state shared by the async and blocking builders.
#[derive(Clone)]
pub(crate) struct Settings {
    pub(crate) region: Option<String>,
    pub(crate) auth: Auth,
    pub(crate) endpoint_url: Option<String>,
    pub(crate) use_fips: bool,
    pub(crate) use_dual_stack: bool,
    pub(crate) endpoint_provider: Option<Arc<dyn EndpointProvider>>,
    /// `(env_suffix, url)` pairs from `AWS_ENDPOINT_URL_<SUFFIX>`.
    pub(crate) service_endpoints: Vec<(&'static str, String)>,
    pub(crate) retry: RetryConfig,
    pub(crate) timeout: Option<Duration>,
    pub(crate) user_agent: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: None,
            auth: Auth::default(),
            endpoint_url: None,
            use_fips: false,
            use_dual_stack: false,
            endpoint_provider: None,
            service_endpoints: Vec::new(),
            retry: RetryConfig::default(),
            timeout: None,
            user_agent: None,
        }
    }
}

impl Settings {
    /// Reads region, endpoint and credential settings from the environment.
    ///
    /// With the `credentials-profile` feature, the active profile fills in
    /// whatever the environment leaves unset.
    pub(crate) fn from_env() -> Result<Self> {
        let mut settings = Self {
            region: Region::from_env().map(|region| region.to_string()),
            endpoint_url: env_string("AWS_ENDPOINT_URL"),
            use_fips: env_bool("AWS_USE_FIPS_ENDPOINT")?.unwrap_or(false),
            use_dual_stack: env_bool("AWS_USE_DUALSTACK_ENDPOINT")?.unwrap_or(false),
            service_endpoints: crate::model::services()
                .iter()
                .filter_map(|service| {
                    env_string(&format!("AWS_ENDPOINT_URL_{}", service.env_suffix))
                        .map(|url| (service.env_suffix, url))
                })
                .collect(),
            ..Self::default()
        };

        if env_string("AWS_ACCESS_KEY_ID").is_some() {
            settings.auth = Auth::from_env()?;
        }

        #[cfg(feature = "credentials-profile")]
        settings.apply_profile()?;

        Ok(settings)
    }

    #[cfg(feature = "credentials-profile")]
    fn apply_profile(&mut self) -> Result<()> {
        let profile = crate::credentials::profile::profile_from_env();
        let file = crate::credentials::profile::load_profile_settings(&profile)?;

        if self.region.is_none() {
            self.region = file.region;
        }
        if self.endpoint_url.is_none() {
            self.endpoint_url = file.endpoint_url;
        }
        if env_string("AWS_USE_FIPS_ENDPOINT").is_none() {
            self.use_fips = file.use_fips.unwrap_or(false);
        }
        if env_string("AWS_USE_DUALSTACK_ENDPOINT").is_none() {
            self.use_dual_stack = file.use_dual_stack.unwrap_or(false);
        }
        if self.auth.is_anonymous()
            && let Ok(auth) = Auth::from_profile(&profile)
        {
            self.auth = auth;
        }
        Ok(())
    }

    pub(crate) fn into_core(self) -> Result<ClientCore> {
        let region = self
            .region
            .ok_or_else(|| Error::invalid_config("region is required"))
            .and_then(Region::new)?;

        Ok(ClientCore {
            endpoint_params: EndpointParams {
                region: Some(region.as_str().to_string()),
                use_fips: self.use_fips,
                use_dual_stack: self.use_dual_stack,
                endpoint_url: self.endpoint_url,
            },
            region,
            auth: self.auth,
            endpoint_provider: self
                .endpoint_provider
                .unwrap_or_else(|| Arc::new(DefaultEndpointProvider)),
            service_endpoints: self.service_endpoints,
        })
    }
}

/// Configuration every request is prepared against.
pub(crate) struct ClientCore {
    pub(crate) region: Region,
    pub(crate) auth: Auth,
    endpoint_params: EndpointParams,
    endpoint_provider: Arc<dyn EndpointProvider>,
    service_endpoints: Vec<(&'static str, String)>,
}

impl ClientCore {
    /// A service-specific endpoint URL replaces the global one.
    fn endpoint_params_for(&self, service: &ServiceModel) -> EndpointParams {
        let mut params = self.endpoint_params.clone();
        if let Some((_, url)) = self
            .service_endpoints
            .iter()
            .find(|(suffix, _)| *suffix == service.env_suffix)
        {
            params.endpoint_url = Some(url.clone());
        }
        params
    }

    pub(crate) fn prepare(
        &self,
        service: &ServiceModel,
        operation: &Operation,
        input: &Input,
    ) -> Result<PreparedRequest> {
        let params = self.endpoint_params_for(service);
        request::prepare(
            service,
            operation,
            input,
            RequestContext {
                endpoint_provider: self.endpoint_provider.as_ref(),
                endpoint_params: &params,
                region: &self.region,
                auth: &self.auth,
                now: OffsetDateTime::now_utc(),
            },
        )
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_bool(name: &str) -> Result<Option<bool>> {
    match env_string(name) {
        None => Ok(None),
        Some(v) => match v.to_ascii_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(Error::invalid_config(format!(
                "{name} must be true or false, got {v:?}"
            ))),
        },
    }
}

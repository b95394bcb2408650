use std::{sync::Arc, time::Duration};

use crate::{
    api::{self, ServiceClient},
    auth::{Auth, Region},
    client::{ClientCore, Settings},
    endpoint::EndpointProvider,
    error::{Error, Result},
    input::Input,
    model::{Operation, ServiceModel},
    transport::async_transport::AsyncTransport,
    types::{OperationOutput, PreparedRequest},
};

/// Async client for every service table in [`crate::model`].
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

pub struct ClientBuilder {
    settings: Settings,
    runtime: Option<tokio::runtime::Handle>,
}

struct Inner {
    core: ClientCore,
    transport: AsyncTransport,
    runtime: Option<tokio::runtime::Handle>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder {
            settings: Settings::default(),
            runtime: None,
        }
    }

    /// Starts from `AWS_REGION`, `AWS_ENDPOINT_URL`, credentials and the
    /// other standard environment variables.
    pub fn from_env() -> Result<ClientBuilder> {
        Ok(ClientBuilder {
            settings: Settings::from_env()?,
            runtime: None,
        })
    }

    pub fn region(&self) -> &Region {
        &self.inner.core.region
    }

    /// Handle for any service table.
    pub fn service(&self, model: &'static ServiceModel) -> ServiceClient {
        ServiceClient::new(self.clone(), model)
    }

    pub fn batch(&self) -> api::Batch {
        api::Batch::new(self.service(&crate::model::batch::SERVICE))
    }

    pub fn cloudsearch(&self) -> api::CloudSearch {
        api::CloudSearch::new(self.service(&crate::model::cloudsearch::SERVICE))
    }

    pub fn memorydb(&self) -> api::MemoryDb {
        api::MemoryDb::new(self.service(&crate::model::memorydb::SERVICE))
    }

    pub fn ssm_contacts(&self) -> api::SsmContacts {
        api::SsmContacts::new(self.service(&crate::model::ssm_contacts::SERVICE))
    }

    pub fn iotevents(&self) -> api::IotEvents {
        api::IotEvents::new(self.service(&crate::model::iotevents::SERVICE))
    }

    pub fn mediaconvert(&self) -> api::MediaConvert {
        api::MediaConvert::new(self.service(&crate::model::mediaconvert::SERVICE))
    }

    pub fn amp(&self) -> api::Amp {
        api::Amp::new(self.service(&crate::model::amp::SERVICE))
    }

    pub(crate) fn prepare(
        &self,
        service: &ServiceModel,
        operation: &Operation,
        input: &Input,
    ) -> Result<PreparedRequest> {
        self.inner.core.prepare(service, operation, input)
    }

    pub(crate) async fn call(
        &self,
        service: &'static ServiceModel,
        operation: &'static Operation,
        input: &Input,
    ) -> Result<OperationOutput> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "aws.request",
            service = service.name,
            operation = operation.name,
            host = tracing::field::Empty,
        );

        let prepared = self.prepare(service, operation, input)?;

        #[cfg(feature = "tracing")]
        span.record("host", prepared.url.host_str().unwrap_or(""));

        let fut = self.execute(service, prepared);
        #[cfg(feature = "tracing")]
        let fut = tracing::Instrument::instrument(fut, span);
        fut.await
    }

    pub(crate) async fn execute(
        &self,
        service: &ServiceModel,
        prepared: PreparedRequest,
    ) -> Result<OperationOutput> {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
        } = prepared;
        self.inner
            .transport
            .send(method, url, headers, body)
            .await?
            .into_outcome(service.protocol)
    }

    /// Runtime operations are spawned on: the injected handle, else the
    /// runtime of the calling thread.
    pub(crate) fn runtime(&self) -> Result<tokio::runtime::Handle> {
        match &self.inner.runtime {
            Some(handle) => Ok(handle.clone()),
            None => tokio::runtime::Handle::try_current()
                .map_err(|e| Error::executor(format!("no tokio runtime available: {e}"))),
        }
    }
}

impl ClientBuilder {
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.settings.region = Some(region.into());
        self
    }

    pub fn auth(mut self, auth: Auth) -> Self {
        self.settings.auth = auth;
        self
    }

    /// Sends every service to `url`, including services with an
    /// `AWS_ENDPOINT_URL_<SERVICE>` override picked up by `from_env`.
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.settings.endpoint_url = Some(url.into());
        self.settings.service_endpoints.clear();
        self
    }

    pub fn use_fips(mut self, enabled: bool) -> Self {
        self.settings.use_fips = enabled;
        self
    }

    pub fn use_dual_stack(mut self, enabled: bool) -> Self {
        self.settings.use_dual_stack = enabled;
        self
    }

    pub fn endpoint_provider(mut self, provider: impl EndpointProvider + 'static) -> Self {
        self.settings.endpoint_provider = Some(Arc::new(provider));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = Some(timeout);
        self
    }

    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.settings.retry.max_attempts = max_attempts.max(1);
        self
    }

    pub fn base_retry_delay(mut self, delay: Duration) -> Self {
        self.settings.retry.base_delay = delay;
        self
    }

    pub fn max_retry_delay(mut self, delay: Duration) -> Self {
        self.settings.retry.max_delay = delay;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.settings.user_agent = Some(user_agent.into());
        self
    }

    /// Runtime that [`spawn`](crate::api::OperationRequest::spawn) and
    /// [`send_with`](crate::api::OperationRequest::send_with) submit to.
    pub fn runtime(mut self, handle: tokio::runtime::Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    pub fn build(self) -> Result<Client> {
        let retry = self.settings.retry;
        let timeout = self.settings.timeout;
        let user_agent = self.settings.user_agent.clone();
        let core = self.settings.into_core()?;
        let transport = AsyncTransport::new(retry, user_agent, timeout)?;

        Ok(Client {
            inner: Arc::new(Inner {
                core,
                transport,
                runtime: self.runtime,
            }),
        })
    }
}

use std::{sync::Arc, time::Duration};

use crate::{
    api::{self, BlockingServiceClient},
    auth::{Auth, Region},
    client::{ClientCore, Settings},
    endpoint::EndpointProvider,
    error::Result,
    executor::{Executor, ThreadExecutor},
    input::Input,
    model::{Operation, ServiceModel},
    transport::blocking_transport::BlockingTransport,
    types::{OperationOutput, PreparedRequest},
};

/// Blocking client for every service table in [`crate::model`].
#[derive(Clone)]
pub struct BlockingClient {
    inner: Arc<Inner>,
}

pub struct BlockingClientBuilder {
    settings: Settings,
    executor: Option<Arc<dyn Executor>>,
}

struct Inner {
    core: ClientCore,
    transport: BlockingTransport,
    executor: Arc<dyn Executor>,
}

impl BlockingClient {
    pub fn builder() -> BlockingClientBuilder {
        BlockingClientBuilder {
            settings: Settings::default(),
            executor: None,
        }
    }

    pub fn from_env() -> Result<BlockingClientBuilder> {
        Ok(BlockingClientBuilder {
            settings: Settings::from_env()?,
            executor: None,
        })
    }

    pub fn region(&self) -> &Region {
        &self.inner.core.region
    }

    pub fn service(&self, model: &'static ServiceModel) -> BlockingServiceClient {
        BlockingServiceClient::new(self.clone(), model)
    }

    pub fn batch(&self) -> api::BlockingBatch {
        api::BlockingBatch::new(self.service(&crate::model::batch::SERVICE))
    }

    pub fn cloudsearch(&self) -> api::BlockingCloudSearch {
        api::BlockingCloudSearch::new(self.service(&crate::model::cloudsearch::SERVICE))
    }

    pub fn memorydb(&self) -> api::BlockingMemoryDb {
        api::BlockingMemoryDb::new(self.service(&crate::model::memorydb::SERVICE))
    }

    pub fn ssm_contacts(&self) -> api::BlockingSsmContacts {
        api::BlockingSsmContacts::new(self.service(&crate::model::ssm_contacts::SERVICE))
    }

    pub fn iotevents(&self) -> api::BlockingIotEvents {
        api::BlockingIotEvents::new(self.service(&crate::model::iotevents::SERVICE))
    }

    pub fn mediaconvert(&self) -> api::BlockingMediaConvert {
        api::BlockingMediaConvert::new(self.service(&crate::model::mediaconvert::SERVICE))
    }

    pub fn amp(&self) -> api::BlockingAmp {
        api::BlockingAmp::new(self.service(&crate::model::amp::SERVICE))
    }

    pub(crate) fn prepare(
        &self,
        service: &ServiceModel,
        operation: &Operation,
        input: &Input,
    ) -> Result<PreparedRequest> {
        self.inner.core.prepare(service, operation, input)
    }

    pub(crate) fn call(
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
        #[cfg(feature = "tracing")]
        let _guard = span.enter();

        let prepared = self.prepare(service, operation, input)?;

        #[cfg(feature = "tracing")]
        span.record("host", prepared.url.host_str().unwrap_or(""));

        self.execute(service, prepared)
    }

    pub(crate) fn execute(
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
            .send(method, url, headers, body)?
            .into_outcome(service.protocol)
    }

    pub(crate) fn executor(&self) -> &Arc<dyn Executor> {
        &self.inner.executor
    }
}

impl BlockingClientBuilder {
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

    /// Executor used by `send_callable` and `send_async`. Defaults to a
    /// [`ThreadExecutor`].
    pub fn executor(mut self, executor: impl Executor + 'static) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }

    pub fn build(self) -> Result<BlockingClient> {
        let retry = self.settings.retry;
        let timeout = self.settings.timeout;
        let user_agent = self.settings.user_agent.clone();
        let core = self.settings.into_core()?;
        let transport = BlockingTransport::new(retry, user_agent, timeout)?;

        Ok(BlockingClient {
            inner: Arc::new(Inner {
                core,
                transport,
                executor: self
                    .executor
                    .unwrap_or_else(|| Arc::new(ThreadExecutor::new())),
            }),
        })
    }
}

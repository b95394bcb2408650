use std::time::Duration;

use bytes::Bytes;
use http::{HeaderMap, Method};
use url::Url;

use crate::{
    error::{Error, Result},
    transport::{Attempt, RawResponse, RetryConfig, default_user_agent},
};

pub(crate) struct AsyncTransport {
    client: reqwest::Client,
    retry: RetryConfig,
}

impl AsyncTransport {
    pub(crate) fn new(
        retry: RetryConfig,
        user_agent: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        #[cfg(feature = "rustls")]
        crate::transport::install_crypto_provider();

        let builder = reqwest::Client::builder()
            .user_agent(user_agent.unwrap_or_else(default_user_agent));
        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        let client = builder
            .build()
            .map_err(|e| Error::transport("failed to build HTTP client", Some(Box::new(e))))?;

        Ok(Self { client, retry })
    }

    /// Sends the request, retrying 429/5xx and transient transport failures.
    pub(crate) async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<RawResponse> {
        let mut attempt = 1;
        loop {
            let probe = Attempt::begin(&method, &url, attempt);
            let pending = self.request(&method, &url, &headers, &body).send();
            #[cfg(feature = "tracing")]
            let pending = tracing::Instrument::instrument(pending, probe.span.clone());

            let delay = match pending.await {
                Ok(resp) => {
                    let status = resp.status();
                    probe.responded(status);
                    match self.retry.after_status(attempt, status, resp.headers()) {
                        Some(delay) => {
                            probe.retrying("status", delay);
                            delay
                        }
                        None => {
                            let headers = resp.headers().clone();
                            let body = resp
                                .bytes()
                                .await
                                .map_err(|e| probe.unreadable_body(&url, Box::new(e)))?;
                            return Ok(RawResponse {
                                status,
                                headers,
                                body,
                            });
                        }
                    }
                }
                Err(err) => match self.retry.after_failure(attempt, is_transient(&err)) {
                    Some(delay) => {
                        probe.retrying("transport", delay);
                        delay
                    }
                    None => return Err(probe.failed(&url, Some(Box::new(err)))),
                },
            };

            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    fn request(
        &self,
        method: &Method,
        url: &Url,
        headers: &HeaderMap,
        body: &Bytes,
    ) -> reqwest::RequestBuilder {
        let req = self
            .client
            .request(method.clone(), url.clone())
            .headers(headers.clone());
        if body.is_empty() {
            req
        } else {
            req.body(body.clone())
        }
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout() || err.is_request() || err.is_body()
}

use std::time::Duration;

use bytes::Bytes;
use http::{HeaderMap, Method};
use ureq::{RequestBuilder, typestate::WithBody, typestate::WithoutBody};
use url::Url;

use crate::{
    error::{Error, Result},
    transport::{Attempt, RawResponse, RetryConfig, default_user_agent},
};

type Reply = std::result::Result<ureq::http::Response<ureq::Body>, ureq::Error>;

pub(crate) struct BlockingTransport {
    agent: ureq::Agent,
    retry: RetryConfig,
    user_agent: String,
}

impl BlockingTransport {
    pub(crate) fn new(
        retry: RetryConfig,
        user_agent: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        #[cfg(feature = "rustls")]
        crate::transport::install_crypto_provider();

        // Non-2xx statuses are classified by the caller, not by ureq.
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build();

        Ok(Self {
            agent: ureq::Agent::new_with_config(config),
            retry,
            user_agent: user_agent.unwrap_or_else(default_user_agent),
        })
    }

    /// Sends the request, retrying 429/5xx and transient transport failures.
    pub(crate) fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<RawResponse> {
        let mut attempt = 1;
        loop {
            let probe = Attempt::begin(&method, &url, attempt);
            let reply = {
                #[cfg(feature = "tracing")]
                let _entered = probe.span.enter();
                self.dispatch(&method, &url, &headers, &body)?
            };

            let delay = match reply {
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
                                .into_body()
                                .read_to_vec()
                                .map_err(|e| probe.unreadable_body(&url, Box::new(e)))?;
                            return Ok(RawResponse {
                                status,
                                headers,
                                body: Bytes::from(body),
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

            std::thread::sleep(delay);
            attempt += 1;
        }
    }

    /// One HTTP exchange. The outer `Result` rejects requests that can never
    /// be sent; the inner one is the wire outcome.
    fn dispatch(
        &self,
        method: &Method,
        url: &Url,
        headers: &HeaderMap,
        body: &Bytes,
    ) -> Result<Reply> {
        let url = url.as_str();
        let bodiless = |req: RequestBuilder<WithoutBody>| -> Result<Reply> {
            if !body.is_empty() {
                return Err(Error::invalid_config(format!(
                    "{method} requests cannot carry a body"
                )));
            }
            Ok(self.with_headers(req, headers).call())
        };
        let bodied = |req: RequestBuilder<WithBody>| -> Reply {
            let req = self.with_headers(req, headers);
            if body.is_empty() {
                req.send_empty()
            } else {
                req.send(body.as_ref())
            }
        };

        match method.as_str() {
            "GET" => bodiless(self.agent.get(url)),
            "HEAD" => bodiless(self.agent.head(url)),
            "DELETE" if body.is_empty() => bodiless(self.agent.delete(url)),
            "DELETE" => Ok(bodied(self.agent.delete(url).force_send_body())),
            "PUT" => Ok(bodied(self.agent.put(url))),
            "POST" => Ok(bodied(self.agent.post(url))),
            "PATCH" => Ok(bodied(self.agent.patch(url))),
            _ => Err(Error::invalid_config(format!(
                "unsupported HTTP method {method}"
            ))),
        }
    }

    fn with_headers<B>(&self, req: RequestBuilder<B>, headers: &HeaderMap) -> RequestBuilder<B> {
        headers
            .iter()
            .filter_map(|(name, value)| Some((name.as_str(), value.to_str().ok()?)))
            .fold(
                req.header(http::header::USER_AGENT, &self.user_agent),
                |req, (name, value)| req.header(name, value),
            )
    }
}

fn is_transient(err: &ureq::Error) -> bool {
    matches!(
        err,
        ureq::Error::Timeout(_)
            | ureq::Error::Protocol(_)
            | ureq::Error::Io(_)
            | ureq::Error::HostNotFound
            | ureq::Error::ConnectionFailed
    )
}

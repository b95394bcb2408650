use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use serde_json::Value;

use super::SeenTokens;
use crate::{
    client::Client,
    error::{Error, Result},
    input::Input,
    model::{Operation, Paginator, ServiceModel},
    types::{OperationOutput, PreparedRequest},
};

/// Handle to one service on an async [`Client`].
#[derive(Clone)]
pub struct ServiceClient {
    client: Client,
    model: &'static ServiceModel,
}

impl ServiceClient {
    pub(crate) fn new(client: Client, model: &'static ServiceModel) -> Self {
        Self { client, model }
    }

    pub fn model(&self) -> &'static ServiceModel {
        self.model
    }

    /// Starts a request for the operation with the given API name.
    pub fn operation(&self, name: &str) -> Result<OperationRequest> {
        let operation = self.model.operation(name).ok_or_else(|| {
            Error::invalid_config(format!("{} has no operation {name}", self.model.name))
        })?;
        Ok(self.request(operation))
    }

    pub fn request(&self, operation: &'static Operation) -> OperationRequest {
        OperationRequest {
            client: self.client.clone(),
            service: self.model,
            operation,
            input: Input::new(),
        }
    }
}

/// Builder for a single operation call.
#[derive(Clone)]
pub struct OperationRequest {
    client: Client,
    service: &'static ServiceModel,
    operation: &'static Operation,
    input: Input,
}

impl OperationRequest {
    /// Sets a member by its model name.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.input.set(name, value);
        self
    }

    /// Replaces the whole input.
    pub fn input(mut self, input: Input) -> Self {
        self.input = input;
        self
    }

    /// Sets the page size member; a no-op for operations without one.
    pub fn page_size(mut self, size: u32) -> Self {
        if let Some(member) = self.operation.paginator.and_then(|p| p.page_size) {
            self.input.set(member, size);
        }
        self
    }

    pub fn operation(&self) -> &'static Operation {
        self.operation
    }

    /// Validates, resolves and signs the request without sending it.
    pub fn prepare(&self) -> Result<PreparedRequest> {
        self.client
            .prepare(self.service, self.operation, &self.input)
    }

    pub async fn send(self) -> Result<OperationOutput> {
        self.client
            .call(self.service, self.operation, &self.input)
            .await
    }

    /// Runs the call as a task on the client's runtime.
    pub fn spawn(self) -> OperationHandle {
        let runtime = match self.client.runtime() {
            Ok(runtime) => runtime,
            Err(err) => return OperationHandle::failed(err),
        };
        OperationHandle::spawned(runtime.spawn(self.send()))
    }

    /// Runs the call as a task and hands the outcome to `handler`.
    ///
    /// Without a runtime the handler is invoked immediately with
    /// [`Error::Executor`].
    pub fn send_with<F>(self, handler: F)
    where
        F: FnOnce(Result<OperationOutput>) + Send + 'static,
    {
        match self.client.runtime() {
            Ok(runtime) => {
                runtime.spawn(async move { handler(self.send().await) });
            }
            Err(err) => handler(Err(err)),
        }
    }

    /// Pages through a paginated operation.
    pub fn pager(self) -> Result<OperationPager> {
        let paginator = self.operation.paginator.ok_or_else(|| {
            Error::invalid_config(format!("{} is not paginated", self.operation.name))
        })?;
        Ok(OperationPager {
            request: self,
            paginator,
            seen: SeenTokens::default(),
            done: false,
        })
    }
}

/// Outcome of [`OperationRequest::spawn`].
pub struct OperationHandle {
    state: HandleState,
}

enum HandleState {
    Spawned(tokio::task::JoinHandle<Result<OperationOutput>>),
    Failed(Option<Error>),
}

impl OperationHandle {
    fn spawned(handle: tokio::task::JoinHandle<Result<OperationOutput>>) -> Self {
        Self {
            state: HandleState::Spawned(handle),
        }
    }

    fn failed(err: Error) -> Self {
        Self {
            state: HandleState::Failed(Some(err)),
        }
    }
}

impl Future for OperationHandle {
    type Output = Result<OperationOutput>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().state {
            HandleState::Spawned(handle) => Pin::new(handle).poll(cx).map(|joined| {
                joined.unwrap_or_else(|e| Err(Error::executor(format!("operation task failed: {e}"))))
            }),
            HandleState::Failed(err) => Poll::Ready(Err(err
                .take()
                .unwrap_or_else(|| Error::executor("operation handle polled after completion")))),
        }
    }
}

pub struct OperationPager {
    request: OperationRequest,
    paginator: Paginator,
    seen: SeenTokens,
    done: bool,
}

impl OperationPager {
    /// Fetches the next page, or `None` once the service stops returning a
    /// continuation token.
    pub async fn next_page(&mut self) -> Result<Option<OperationOutput>> {
        if self.done {
            return Ok(None);
        }

        let page = self.request.clone().send().await?;
        match self.seen.next_token(&page, self.paginator, &self.request.input) {
            Some(token) => self.request.input.set(self.paginator.input_token, token),
            None => self.done = true,
        }

        Ok(Some(page))
    }
}

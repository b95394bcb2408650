use std::{
    sync::{Arc, Mutex, mpsc},
    time::Duration,
};

use serde_json::Value;

use super::SeenTokens;
use crate::{
    client::BlockingClient,
    error::{Error, Result},
    input::Input,
    model::{Operation, Paginator, ServiceModel},
    types::{OperationOutput, PreparedRequest},
};

/// Handle to one service on a [`BlockingClient`].
#[derive(Clone)]
pub struct BlockingServiceClient {
    client: BlockingClient,
    model: &'static ServiceModel,
}

impl BlockingServiceClient {
    pub(crate) fn new(client: BlockingClient, model: &'static ServiceModel) -> Self {
        Self { client, model }
    }

    pub fn model(&self) -> &'static ServiceModel {
        self.model
    }

    /// Starts a request for the operation with the given API name.
    pub fn operation(&self, name: &str) -> Result<BlockingOperationRequest> {
        let operation = self.model.operation(name).ok_or_else(|| {
            Error::invalid_config(format!("{} has no operation {name}", self.model.name))
        })?;
        Ok(self.request(operation))
    }

    pub fn request(&self, operation: &'static Operation) -> BlockingOperationRequest {
        BlockingOperationRequest {
            client: self.client.clone(),
            service: self.model,
            operation,
            input: Input::new(),
        }
    }
}

#[derive(Clone)]
pub struct BlockingOperationRequest {
    client: BlockingClient,
    service: &'static ServiceModel,
    operation: &'static Operation,
    input: Input,
}

impl BlockingOperationRequest {
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.input.set(name, value);
        self
    }

    pub fn input(mut self, input: Input) -> Self {
        self.input = input;
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        if let Some(member) = self.operation.paginator.and_then(|p| p.page_size) {
            self.input.set(member, size);
        }
        self
    }

    pub fn operation(&self) -> &'static Operation {
        self.operation
    }

    pub fn prepare(&self) -> Result<PreparedRequest> {
        self.client
            .prepare(self.service, self.operation, &self.input)
    }

    pub fn send(self) -> Result<OperationOutput> {
        self.client
            .call(self.service, self.operation, &self.input)
    }

    /// Submits the call to the client's executor.
    ///
    /// A rejected submission resolves the returned [`Callable`] with
    /// [`Error::Executor`].
    pub fn send_callable(self) -> Callable {
        let (tx, rx) = mpsc::channel();
        let rejected = tx.clone();
        let executor = Arc::clone(self.client.executor());

        let submitted = executor.submit(Box::new(move || {
            let _ = tx.send(self.send());
        }));
        if let Err(err) = submitted {
            let _ = rejected.send(Err(err));
        }

        Callable { rx }
    }

    /// Submits the call to the client's executor and passes the outcome to
    /// `handler` on the executor's thread.
    ///
    /// If the executor rejects the task, `handler` runs on the calling
    /// thread with [`Error::Executor`].
    pub fn send_async<F>(self, handler: F)
    where
        F: FnOnce(Result<OperationOutput>) + Send + 'static,
    {
        let slot = Arc::new(Mutex::new(Some(handler)));
        let task_slot = Arc::clone(&slot);
        let executor = Arc::clone(self.client.executor());

        let submitted = executor.submit(Box::new(move || {
            let outcome = self.send();
            if let Some(handler) = take_handler(&task_slot) {
                handler(outcome);
            }
        }));
        if let Err(err) = submitted
            && let Some(handler) = take_handler(&slot)
        {
            handler(Err(err));
        }
    }

    pub fn pager(self) -> Result<BlockingPager> {
        let paginator = self.operation.paginator.ok_or_else(|| {
            Error::invalid_config(format!("{} is not paginated", self.operation.name))
        })?;
        Ok(BlockingPager {
            request: self,
            paginator,
            seen: SeenTokens::default(),
            done: false,
        })
    }
}

fn take_handler<F>(slot: &Mutex<Option<F>>) -> Option<F> {
    slot.lock().ok().and_then(|mut guard| guard.take())
}

/// Pending outcome of [`BlockingOperationRequest::send_callable`].
pub struct Callable {
    rx: mpsc::Receiver<Result<OperationOutput>>,
}

impl Callable {
    /// Blocks until the operation completes.
    pub fn wait(self) -> Result<OperationOutput> {
        self.rx.recv().unwrap_or_else(|_| Err(lost_task()))
    }

    /// Waits at most `timeout`; `None` if the operation is still running.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<Result<OperationOutput>> {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(mpsc::RecvTimeoutError::Timeout) => None,
            Err(mpsc::RecvTimeoutError::Disconnected) => Some(Err(lost_task())),
        }
    }
}

fn lost_task() -> Error {
    Error::executor("operation task ended without reporting an outcome")
}

pub struct BlockingPager {
    request: BlockingOperationRequest,
    paginator: Paginator,
    seen: SeenTokens,
    done: bool,
}

impl BlockingPager {
    pub fn next_page(&mut self) -> Result<Option<OperationOutput>> {
        if self.done {
            return Ok(None);
        }

        let page = self.request.clone().send()?;
        match self.seen.next_token(&page, self.paginator, &self.request.input) {
            Some(token) => self.request.input.set(self.paginator.input_token, token),
            None => self.done = true,
        }

        Ok(Some(page))
    }
}

impl Iterator for BlockingPager {
    type Item = Result<OperationOutput>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_page() {
            Ok(page) => page.map(Ok),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

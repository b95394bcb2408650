//! Executors for the blocking client's callable and callback call styles.

use std::{
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Mutex, mpsc},
    thread,
};

use crate::error::{Error, Result};

/// Unit of work submitted to an [`Executor`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs submitted tasks, typically on another thread.
///
/// An executor may refuse a task by returning an error; the caller then
/// reports [`Error::Executor`] as the operation outcome.
pub trait Executor: Send + Sync {
    fn submit(&self, task: Task) -> Result<()>;
}

/// Spawns one named thread per task.
#[derive(Clone, Debug, Default)]
pub struct ThreadExecutor {
    name: Option<String>,
}

impl ThreadExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name given to spawned threads.
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Executor for ThreadExecutor {
    fn submit(&self, task: Task) -> Result<()> {
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| "awsrest-call".to_string());
        thread::Builder::new()
            .name(name)
            .spawn(task)
            .map(drop)
            .map_err(|e| Error::executor(format!("failed to spawn thread: {e}")))
    }
}

/// Runs tasks on a fixed set of worker threads.
///
/// A task that panics is unwound on its worker, which then takes the next
/// task; the pool never shrinks. Dropping the executor stops accepting work; workers exit once the queue
/// drains.
pub struct PooledExecutor {
    sender: Mutex<Option<mpsc::Sender<Task>>>,
    workers: usize,
}

impl PooledExecutor {
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::invalid_config("executor needs at least one worker"));
        }

        let (sender, receiver) = mpsc::channel::<Task>();
        let receiver = Arc::new(Mutex::new(receiver));

        for i in 0..workers {
            let receiver = Arc::clone(&receiver);
            thread::Builder::new()
                .name(format!("awsrest-worker-{i}"))
                .spawn(move || worker_loop(&receiver))
                .map_err(|e| Error::executor(format!("failed to spawn worker: {e}")))?;
        }

        Ok(Self {
            sender: Mutex::new(Some(sender)),
            workers,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Stops accepting new tasks. Queued tasks still run.
    pub fn shutdown(&self) {
        if let Ok(mut sender) = self.sender.lock() {
            sender.take();
        }
    }
}

fn worker_loop(receiver: &Mutex<mpsc::Receiver<Task>>) {
    loop {
        let task = match receiver.lock() {
            Ok(rx) => rx.recv(),
            Err(_) => return,
        };
        let Ok(task) = task else {
            return;
        };
        // A panicking task must not take its worker down with it.
        if panic::catch_unwind(AssertUnwindSafe(task)).is_err() {
            #[cfg(feature = "tracing")]
            tracing::warn!("executor task panicked");
        }
    }
}

impl Executor for PooledExecutor {
    fn submit(&self, task: Task) -> Result<()> {
        let guard = self
            .sender
            .lock()
            .map_err(|_| Error::executor("executor state poisoned"))?;
        let sender = guard
            .as_ref()
            .ok_or_else(|| Error::executor("executor is shut down"))?;
        sender
            .send(task)
            .map_err(|_| Error::executor("executor workers have exited"))
    }
}

impl fmt::Debug for PooledExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PooledExecutor")
            .field("workers", &self.workers)
            .finish_non_exhaustive()
    }
}

impl Drop for PooledExecutor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

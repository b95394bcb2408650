//! Table-driven clients for AWS REST, JSON and Query services.
//!
//! Every operation of every service goes through the same pipeline:
//! required members are validated, the endpoint is resolved, the path
//! template is expanded, the request is signed and sent, and the response is
//! wrapped as [`Result<OperationOutput>`](crate::types::OperationOutput).
//! What differs per operation lives in the static tables under [`model`].
//!
//! ## Quick start (async)
//!
//! ```no_run
//! # #[cfg(feature = "async")]
//! # async fn demo() -> Result<(), awsrest::Error> {
//! use awsrest::{Auth, Client};
//!
//! let client = Client::builder()
//!     .region("us-east-1")
//!     .auth(Auth::from_env()?)
//!     .build()?;
//!
//! let out = client
//!     .batch()
//!     .submit_job()
//!     .set("jobName", "nightly")
//!     .set("jobQueue", "default")
//!     .set("jobDefinition", "report:3")
//!     .send()
//!     .await?;
//! println!("{}", out.json_value()?["jobId"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Quick start (blocking)
//!
//! ```no_run
//! # #[cfg(feature = "blocking")]
//! # fn demo() -> Result<(), awsrest::Error> {
//! use awsrest::{Auth, BlockingClient};
//!
//! let client = BlockingClient::builder()
//!     .region("eu-west-1")
//!     .auth(Auth::from_env()?)
//!     .build()?;
//!
//! let clusters = client
//!     .memorydb()
//!     .describe_clusters()
//!     .set("ClusterName", "sessions")
//!     .send()?;
//! println!("{}", clusters.text());
//! # Ok(())
//! # }
//! ```
//!
//! ## Call styles
//!
//! Async requests can be awaited, spawned onto the runtime
//! (`spawn()`), or completed through a callback (`send_with()`). Blocking
//! requests offer `send()`, `send_callable()` and `send_async()`, the
//! latter two running on the client's [`executor::Executor`].

#[cfg(all(
    feature = "rustls",
    feature = "native-tls",
    not(feature = "allow-both-tls")
))]
compile_error!("Enable only one of: rustls, native-tls.");

pub mod api;
pub mod endpoint;
pub mod executor;
pub mod model;
pub mod types;

mod auth;
mod client;
mod credentials;
mod error;
mod input;
mod request;
mod transport;
mod util;

pub use auth::{Auth, Credentials, Region};
#[cfg(feature = "blocking")]
pub use client::{BlockingClient, BlockingClientBuilder};
#[cfg(feature = "async")]
pub use client::{Client, ClientBuilder};
pub use error::{Error, ErrorKind, Result};
pub use input::Input;
pub use request::validate;

//! Rust client for the RealObjects PDFreactor Web Service REST API.
//!
//! The client builds JSON conversion requests, sends them over HTTP and
//! interprets the three response conventions of the service: JSON results,
//! raw binary payloads (optionally streamed to a [`Sink`]) and asynchronous
//! job handles polled by the caller.
//!
//! ```no_run
//! use pdfreactor::{Client, Config, Configuration};
//!
//! # async fn run() -> pdfreactor::Result<()> {
//! let client = Client::new(Config::default())?;
//! let config = Configuration::new().with("document", "<html>Hello</html>");
//! let result = client.convert(&config, None).await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```
#![allow(clippy::result_large_err)]

/// Base URL used when no service URL is configured.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:9423/service/rest";

/// Client identity stamped into every configuration as `clientName`.
pub const CLIENT_NAME: &str = "RUST";

/// Protocol version stamped into every configuration as `clientVersion`.
pub const CLIENT_VERSION: u64 = 8;

/// Value sent in the `User-Agent` and `X-RO-User-Agent` headers.
pub const USER_AGENT: &str = "PDFreactor Rust API v8";

/// Response header carrying the service's error identifier token.
pub const ERROR_ID_HEADER: &str = "X-RO-Error-ID";

pub(crate) const RO_USER_AGENT_HEADER: &str = "X-RO-User-Agent";

/// Default connect timeout (5 seconds).
pub const DEFAULT_CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Default request timeout (60 seconds).
pub const DEFAULT_REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

mod args;
pub mod constants;
mod errors;
mod http;
mod sink;
mod types;

pub use args::{split_stream_args, StreamArg};
pub use errors::{Error, ErrorBody, Result, ServiceError, UnreachableServiceError, NO_ERROR_ID};
pub use http::{
    build_request_headers, document_id_from_location, ConnectionSettings, CookieJar, HeaderEntry,
    HeaderList,
};
pub use sink::{Sink, DOWNLOAD_CHUNK_SIZE};
pub use types::{Configuration, Progress};

#[cfg(feature = "client")]
mod client;
#[cfg(feature = "client")]
pub use client::{Client, Config};

#[cfg(feature = "blocking")]
mod blocking;
#[cfg(feature = "blocking")]
pub use blocking::{BlockingClient, BlockingConfig};

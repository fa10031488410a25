use std::fmt;
use std::sync::{Mutex, OnceLock};

use thiserror::Error;

/// Convenience alias for fallible client results.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Sentinel value for [`ServiceError::error_id`] when the service omitted
/// the `X-RO-Error-ID` header.
pub const NO_ERROR_ID: &str = "<no X-RO-Error-ID header found!>";

/// Unified error type surfaced by the client.
#[derive(Debug, Error)]
pub enum Error {
    /// The service was reached and responded with a status >= 400.
    #[error("{0}")]
    Service(#[from] ServiceError),

    /// The service could not be reached (DNS, connect, TLS, timeout).
    #[error("{0}")]
    Unreachable(#[from] UnreachableServiceError),

    /// An invalid client-side argument or configuration value.
    #[error("invalid request: {0}")]
    Config(String),

    /// The service returned a well-formed response the client cannot use.
    #[error("unexpected response from the PDFreactor Web Service: {0}")]
    Protocol(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A failure while reading a response body that was already received.
    /// Never classified as [`Error::Unreachable`]: the service answered.
    #[error("error reading response body: {0}")]
    Read(#[source] std::io::Error),

    /// A failure while writing a streamed download to a caller sink.
    #[error("error writing to sink: {0}")]
    Sink(#[source] std::io::Error),
}

/// One-shot source for a deferred error body.
///
/// Reading an HTTP error body consumes the underlying stream, so the body is
/// pulled at most once, on first access, and cached afterwards. Implemented
/// for any `FnOnce() -> String`.
pub trait ErrorBody: Send {
    fn read_body(self: Box<Self>) -> String;
}

impl<F> ErrorBody for F
where
    F: FnOnce() -> String + Send,
{
    fn read_body(self: Box<Self>) -> String {
        self()
    }
}

/// An HTTP-level failure reported by the PDFreactor Web Service.
///
/// Carries the status code, the error identifier from the `X-RO-Error-ID`
/// header and the raw response body. The body is read lazily: nothing is
/// pulled from the connection until [`ServiceError::body`] (or one of the
/// derived messages) is first used.
pub struct ServiceError {
    status: u16,
    error_id: String,
    body: OnceLock<String>,
    pending: Mutex<Option<Box<dyn ErrorBody>>>,
}

impl ServiceError {
    /// Build an error whose body text is already available.
    pub fn new(status: u16, error_id: Option<&str>, body: impl Into<String>) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(body.into());
        Self {
            status,
            error_id: error_id.map_or_else(|| NO_ERROR_ID.to_string(), str::to_owned),
            body: cell,
            pending: Mutex::new(None),
        }
    }

    /// Build an error whose body is read from `source` on first access.
    pub fn deferred(status: u16, error_id: Option<&str>, source: Box<dyn ErrorBody>) -> Self {
        Self {
            status,
            error_id: error_id.map_or_else(|| NO_ERROR_ID.to_string(), str::to_owned),
            body: OnceLock::new(),
            pending: Mutex::new(Some(source)),
        }
    }

    /// HTTP status code of the failed request.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Error identifier token from the `X-RO-Error-ID` response header,
    /// or [`NO_ERROR_ID`] when the header was absent.
    pub fn error_id(&self) -> &str {
        &self.error_id
    }

    /// Raw response body, read at most once and cached.
    pub fn body(&self) -> &str {
        self.body.get_or_init(|| {
            self.pending
                .lock()
                .ok()
                .and_then(|mut pending| pending.take())
                .map(ErrorBody::read_body)
                .unwrap_or_default()
        })
    }

    /// The error text reported by the service.
    ///
    /// A JSON object body yields its `error` field; anything else yields a
    /// diagnostic marker (truncated to 200 characters for non-JSON bodies).
    pub fn service_message(&self) -> String {
        let body = self.body();
        if body.is_empty() {
            return "<response body is empty>".to_string();
        }
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            if let Some(obj) = value.as_object() {
                return obj
                    .get("error")
                    .and_then(|v| v.as_str())
                    .map_or_else(|| "<no error key in response body>".to_string(), str::to_owned);
            }
        }
        let mut head: String = body.chars().take(200).collect();
        if body.chars().count() > 200 {
            head.push_str("[...]");
        }
        format!("<non-JSON response body: {head}>")
    }

    /// Human-readable message keyed on the status code.
    pub fn friendly_message(&self) -> String {
        match self.status {
            400 => format!("Invalid client data. {}", self.service_message()),
            401 => format!("Unauthorized. {}", self.service_message()),
            404 => format!(
                "Document with the given ID was not found. {}",
                self.service_message()
            ),
            413 => "The configuration is too large to process.".to_string(),
            422 | 500 => self.service_message(),
            503 => "PDFreactor Web Service is unavailable.".to_string(),
            _ => format!("PDFreactor Web Service error (status: {}).", self.status),
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.friendly_message())
    }
}

impl fmt::Debug for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceError")
            .field("status", &self.status)
            .field("error_id", &self.error_id)
            .field("body", &self.body.get().map_or("<unread>", String::as_str))
            .finish()
    }
}

impl std::error::Error for ServiceError {}

/// The service was never reached: the failure happened before any HTTP
/// status could be obtained.
#[derive(Debug)]
pub struct UnreachableServiceError {
    url: Option<String>,
    reason: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl UnreachableServiceError {
    pub fn new(reason: impl Into<String>, url: Option<String>) -> Self {
        Self {
            url,
            reason: reason.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The URL the client attempted to reach, when one was known.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for UnreachableServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UnreachableServiceError: Error connecting to the PDFreactor Web Service"
        )?;
        match self.url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => write!(f, " at {url}.")?,
            None => write!(f, "; NO URL GIVEN?!")?,
        }
        writeln!(f)?;
        writeln!(
            f,
            "Please make sure the PDFreactor Web Service is installed and running!"
        )?;
        if self.source.is_some() {
            write!(f, "(Reason: {})", self.reason)
        } else {
            write!(f, "(Error: {})", self.reason)
        }
    }
}

impl std::error::Error for UnreachableServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

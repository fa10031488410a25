//! Blocking mirror of the async client, for callers without an async
//! runtime. Same request building, error classification and streaming
//! semantics; reqwest's blocking transport underneath.

use std::io::Read;
use std::time::Duration;

use bytes::Bytes;
use reqwest::{
    blocking::{Client as HttpClient, Response},
    header::{HeaderName, HeaderValue, LOCATION, SET_COOKIE},
    Method, Url,
};
use serde::de::DeserializeOwned;

use crate::{
    args::{split_stream_args, StreamArg},
    errors::{Error, Result, ServiceError, UnreachableServiceError},
    http::{
        build_request_headers, document_id_from_location, harvest_cookies, request_path,
        ConnectionSettings,
    },
    sink::{Sink, DOWNLOAD_CHUNK_SIZE},
    types::{Configuration, Progress},
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SERVICE_URL, ERROR_ID_HEADER,
};

/// Constructor input for [`BlockingClient`].
#[derive(Clone, Debug, Default)]
pub struct BlockingConfig {
    /// Base URL of the service REST interface; defaults to
    /// [`DEFAULT_SERVICE_URL`]. A trailing slash is trimmed.
    pub service_url: Option<String>,
    /// Appended as the `apiKey` query parameter on every call when set.
    pub api_key: Option<String>,
    /// Bring your own blocking reqwest client.
    pub http_client: Option<HttpClient>,
    /// Override the connect timeout (defaults to 5s). Ignored when
    /// `http_client` is supplied.
    pub connect_timeout: Option<Duration>,
    /// Override the per-request timeout (defaults to 60s).
    pub timeout: Option<Duration>,
}

/// Blocking client for the PDFreactor Web Service.
///
/// One HTTP round trip per call, no retries, no implicit polling; see
/// [`Client`](crate::Client) for the full contract.
#[derive(Clone, Debug)]
pub struct BlockingClient {
    service_url: String,
    api_key: Option<String>,
    http: HttpClient,
    request_timeout: Duration,
}

impl BlockingClient {
    pub fn new(cfg: BlockingConfig) -> Result<Self> {
        let service_url = cfg
            .service_url
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Url::parse(&service_url)
            .map_err(|err| Error::Config(format!("invalid service url: {err}")))?;

        let connect_timeout = cfg.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        let request_timeout = cfg.timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        let http = match cfg.http_client {
            Some(client) => client,
            None => HttpClient::builder()
                .connect_timeout(connect_timeout)
                .build()
                .map_err(|err| Error::Config(format!("failed to build http client: {err}")))?,
        };

        Ok(Self {
            service_url,
            api_key: cfg.api_key.filter(|key| !key.is_empty()),
            http,
            request_timeout,
        })
    }

    /// Base URL of the service, without trailing slash.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Replace the API key used for subsequent calls.
    pub fn set_api_key(&mut self, api_key: Option<String>) {
        self.api_key = api_key.filter(|key| !key.is_empty());
    }

    /// Convert synchronously and return the JSON result object.
    pub fn convert(
        &self,
        config: &Configuration,
        settings: Option<&ConnectionSettings>,
    ) -> Result<serde_json::Value> {
        let resp = self.dispatch(Method::POST, "/convert.json", Some(config), settings)?;
        read_json(resp)
    }

    /// Convert synchronously and return the result document as bytes.
    pub fn convert_as_binary(
        &self,
        config: &Configuration,
        settings: Option<&ConnectionSettings>,
    ) -> Result<Bytes> {
        let resp = self.dispatch(Method::POST, "/convert.bin", Some(config), settings)?;
        resp.bytes().map_err(read_error)
    }

    /// Convert synchronously, streaming the result document into `sink`.
    /// The sink is closed on every exit path.
    pub fn convert_as_binary_to(
        &self,
        config: &Configuration,
        sink: &mut dyn Sink,
        settings: Option<&ConnectionSettings>,
    ) -> Result<()> {
        let resp = self.dispatch(Method::POST, "/convert.bin", Some(config), settings)?;
        stream_to_sink(resp, sink)
    }

    /// Legacy call shape: sink and settings as positional [`StreamArg`]s in
    /// either order. Returns `None` when a sink consumed the payload.
    pub fn convert_as_binary_args(
        &self,
        config: &Configuration,
        args: Vec<StreamArg>,
    ) -> Result<Option<Bytes>> {
        let (sink, settings) = split_stream_args(args)?;
        match sink {
            Some(mut sink) => {
                self.convert_as_binary_to(config, sink.as_mut(), settings.as_ref())?;
                Ok(None)
            }
            None => self.convert_as_binary(config, settings.as_ref()).map(Some),
        }
    }

    /// Start an asynchronous conversion and return the job's document id.
    /// Session cookies from the response are merged into `settings` when
    /// one is supplied; `None` opts out of session tracking.
    pub fn convert_async(
        &self,
        config: &Configuration,
        mut settings: Option<&mut ConnectionSettings>,
    ) -> Result<String> {
        let resp = self.dispatch(
            Method::POST,
            "/convert/async.json",
            Some(config),
            settings.as_deref(),
        )?;

        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let set_cookies: Vec<String> = resp
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok().map(str::to_owned))
            .collect();
        // free the connection
        let _ = resp.bytes();

        if let Some(settings) = settings.as_deref_mut() {
            harvest_cookies(set_cookies.iter().map(String::as_str), settings);
        }

        let location = location.ok_or_else(|| {
            Error::Protocol("asynchronous conversion response carried no Location header".into())
        })?;
        Ok(document_id_from_location(&location))
    }

    /// Poll the progress of an asynchronous conversion.
    pub fn get_progress(
        &self,
        document_id: &str,
        settings: Option<&ConnectionSettings>,
    ) -> Result<Progress> {
        let path = format!("/progress/{document_id}.json");
        let resp = self.dispatch(Method::GET, &path, None, settings)?;
        read_json(resp)
    }

    /// Fetch the result of a finished asynchronous conversion as JSON.
    pub fn get_document(
        &self,
        document_id: &str,
        settings: Option<&ConnectionSettings>,
    ) -> Result<serde_json::Value> {
        let path = format!("/document/{document_id}.json");
        let resp = self.dispatch(Method::GET, &path, None, settings)?;
        read_json(resp)
    }

    /// Fetch the result of a finished asynchronous conversion as bytes.
    pub fn get_document_as_binary(
        &self,
        document_id: &str,
        settings: Option<&ConnectionSettings>,
    ) -> Result<Bytes> {
        let path = format!("/document/{document_id}.bin");
        let resp = self.dispatch(Method::GET, &path, None, settings)?;
        resp.bytes().map_err(read_error)
    }

    /// Stream the result of a finished asynchronous conversion into `sink`.
    pub fn get_document_as_binary_to(
        &self,
        document_id: &str,
        sink: &mut dyn Sink,
        settings: Option<&ConnectionSettings>,
    ) -> Result<()> {
        let path = format!("/document/{document_id}.bin");
        let resp = self.dispatch(Method::GET, &path, None, settings)?;
        stream_to_sink(resp, sink)
    }

    /// Legacy call shape counterpart of
    /// [`get_document_as_binary`](Self::get_document_as_binary).
    pub fn get_document_as_binary_args(
        &self,
        document_id: &str,
        args: Vec<StreamArg>,
    ) -> Result<Option<Bytes>> {
        let (sink, settings) = split_stream_args(args)?;
        match sink {
            Some(mut sink) => {
                self.get_document_as_binary_to(document_id, sink.as_mut(), settings.as_ref())?;
                Ok(None)
            }
            None => self
                .get_document_as_binary(document_id, settings.as_ref())
                .map(Some),
        }
    }

    /// Fetch the metadata of a finished asynchronous conversion.
    pub fn get_document_metadata(
        &self,
        document_id: &str,
        settings: Option<&ConnectionSettings>,
    ) -> Result<serde_json::Value> {
        let path = format!("/document/metadata/{document_id}.json");
        let resp = self.dispatch(Method::GET, &path, None, settings)?;
        read_json(resp)
    }

    /// Delete an asynchronous conversion's job and result. Any response
    /// body is read and discarded.
    pub fn delete_document(
        &self,
        document_id: &str,
        settings: Option<&ConnectionSettings>,
    ) -> Result<()> {
        let path = format!("/document/{document_id}.json");
        let resp = self.dispatch(Method::DELETE, &path, None, settings)?;
        let _ = resp.bytes();
        Ok(())
    }

    /// Fetch the service's version object.
    pub fn get_version(
        &self,
        settings: Option<&ConnectionSettings>,
    ) -> Result<serde_json::Value> {
        let resp = self.dispatch(Method::GET, "/version.json", None, settings)?;
        read_json(resp)
    }

    /// Liveness probe; returns the raw response body.
    pub fn get_status(&self, settings: Option<&ConnectionSettings>) -> Result<String> {
        let resp = self.dispatch(Method::GET, "/status", None, settings)?;
        resp.text().map_err(read_error)
    }

    /// URL under which a finished document is retrievable.
    pub fn document_url(&self, document_id: &str) -> String {
        format!("{}/document/{document_id}", self.service_url)
    }

    /// URL under which a job's progress is retrievable.
    pub fn progress_url(&self, document_id: &str) -> String {
        format!("{}/progress/{document_id}", self.service_url)
    }

    fn dispatch(
        &self,
        method: Method,
        path: &str,
        config: Option<&Configuration>,
        settings: Option<&ConnectionSettings>,
    ) -> Result<Response> {
        let raw_url = format!(
            "{}{}",
            self.service_url,
            request_path(path, self.api_key.as_deref())
        );
        let url = Url::parse(&raw_url)
            .map_err(|err| Error::Config(format!("invalid request url {raw_url:?}: {err}")))?;

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .timeout(self.request_timeout);
        for entry in build_request_headers(settings).iter() {
            let name = HeaderName::from_bytes(entry.name.as_bytes())
                .map_err(|err| Error::Config(format!("invalid header name {:?}: {err}", entry.name)))?;
            let value = HeaderValue::from_str(&entry.value).map_err(|err| {
                Error::Config(format!("invalid value for header {:?}: {err}", entry.name))
            })?;
            builder = builder.header(name, value);
        }
        if let Some(config) = config {
            builder = builder.body(serde_json::to_vec(&config.stamped())?);
        }

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("pdfreactor.http", method = %method, path);
        #[cfg(feature = "tracing")]
        let _guard = span.enter();

        let resp = builder.send().map_err(|err| unreachable_error(err, &url))?;

        let status = resp.status();
        if status.as_u16() >= 400 {
            #[cfg(feature = "tracing")]
            tracing::warn!(status = %status, "request failed");
            return Err(service_error(resp));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(status = %status, "request completed");

        Ok(resp)
    }
}

/// Pump the response body into the sink in `DOWNLOAD_CHUNK_SIZE` reads,
/// closing the sink on every exit path.
fn stream_to_sink(mut resp: Response, sink: &mut dyn Sink) -> Result<()> {
    let mut buf = [0u8; DOWNLOAD_CHUNK_SIZE];
    let mut result = Ok(());
    loop {
        match resp.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                if let Err(err) = sink.write_chunk(&buf[..n]) {
                    result = Err(Error::Sink(err));
                    break;
                }
            }
            Err(err) => {
                result = Err(Error::Read(err));
                break;
            }
        }
    }
    match result {
        Ok(()) => sink.close().map_err(Error::Sink),
        Err(err) => {
            // the first error wins
            let _ = sink.close();
            Err(err)
        }
    }
}

fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let bytes = resp.bytes().map_err(read_error)?;
    serde_json::from_slice(&bytes).map_err(Error::Serialization)
}

/// The body read is deferred until the error is first inspected; the
/// response is moved into the closure and consumed by that read.
fn service_error(resp: Response) -> Error {
    let status = resp.status().as_u16();
    let error_id = resp
        .headers()
        .get(ERROR_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    ServiceError::deferred(
        status,
        error_id.as_deref(),
        Box::new(move || resp.text().unwrap_or_default()),
    )
    .into()
}

fn unreachable_error(err: reqwest::Error, url: &Url) -> Error {
    UnreachableServiceError::new(err.to_string(), Some(url.to_string()))
        .with_source(err)
        .into()
}

fn read_error(err: reqwest::Error) -> Error {
    Error::Read(std::io::Error::other(err))
}

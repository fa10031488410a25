//! Resolver for the legacy call shape of the binary conversion methods.
//!
//! The original API accepted an optional byte sink and an optional
//! connection-settings mapping in either order, disambiguated by runtime
//! type. The typed methods (`convert_as_binary` / `convert_as_binary_to`)
//! are the primary surface; ported code can keep the flexible shape via
//! [`StreamArg`] and the `*_args` entry points, which reject ambiguous or
//! surplus arguments instead of guessing.

use crate::errors::{Error, Result};
use crate::http::ConnectionSettings;
use crate::sink::Sink;

/// One positional argument of a legacy binary call: either the stream
/// target or the per-call connection settings. A settings value can never
/// double as a sink.
pub enum StreamArg {
    Sink(Box<dyn Sink + Send>),
    Settings(ConnectionSettings),
}

impl StreamArg {
    pub fn sink(sink: impl Sink + Send + 'static) -> Self {
        Self::Sink(Box::new(sink))
    }

    pub fn settings(settings: ConnectionSettings) -> Self {
        Self::Settings(settings)
    }
}

/// Split legacy positional arguments into their sink and settings parts.
///
/// Arguments may appear in either order; a second sink, a second settings
/// value, or more than two arguments is an error.
pub fn split_stream_args(
    args: Vec<StreamArg>,
) -> Result<(Option<Box<dyn Sink + Send>>, Option<ConnectionSettings>)> {
    let mut sink = None;
    let mut settings = None;
    for arg in args {
        match arg {
            StreamArg::Sink(value) => {
                if sink.is_some() {
                    return Err(Error::Config("surplus stream argument".to_string()));
                }
                sink = Some(value);
            }
            StreamArg::Settings(value) => {
                if settings.is_some() {
                    return Err(Error::Config(
                        "surplus connection settings argument".to_string(),
                    ));
                }
                settings = Some(value);
            }
        }
    }
    Ok((sink, settings))
}

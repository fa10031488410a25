//! Request/response plumbing shared by the async and blocking clients:
//! header merging, cookie handling and async-job header parsing.

use crate::{RO_USER_AGENT_HEADER, USER_AGENT};

/// A single header as the caller wrote it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}

/// Ordered, case-preserving header collection.
///
/// HTTP header names compare case-insensitively, but the caller's casing is
/// kept: overwriting `content-type` leaves the key spelled `content-type`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderList(Vec<HeaderEntry>);

impl HeaderList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Set a header, replacing any entry whose name matches
    /// case-insensitively. The existing casing wins on replacement; the
    /// given casing is used on insertion.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .0
            .iter_mut()
            .find(|entry| entry.name.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.value = value,
            None => self.0.push(HeaderEntry { name, value }),
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered cookie name/value pairs.
///
/// Insertion order is preserved; re-inserting an existing name overwrites
/// the value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CookieJar(Vec<(String, String)>);

impl CookieJar {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing_value)) => *existing_value = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize as a `Cookie` header value: `name=value` joined by `"; "`.
    pub fn to_header_value(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Per-call overrides for headers and cookies.
///
/// Also the return channel for session cookies harvested from asynchronous
/// conversion responses: pass `&mut ConnectionSettings` to
/// `convert_async` so later progress polls reach the same backend node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub headers: HeaderList,
    pub cookies: CookieJar,
}

impl ConnectionSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name, value);
        self
    }
}

/// Compute the outgoing headers for one call.
///
/// Caller headers come first, then the three mandatory headers are merged
/// in (overwriting caller values, keeping caller casing), then a single
/// `Cookie` header when the settings carry cookies.
pub fn build_request_headers(settings: Option<&ConnectionSettings>) -> HeaderList {
    let mut headers = settings.map(|s| s.headers.clone()).unwrap_or_default();
    headers.set("Content-Type", "application/json");
    headers.set("User-Agent", USER_AGENT);
    headers.set(RO_USER_AGENT_HEADER, USER_AGENT);
    if let Some(settings) = settings {
        if !settings.cookies.is_empty() {
            headers.set("Cookie", settings.cookies.to_header_value());
        }
    }
    headers
}

/// Extract the job identifier from a `Location` response header: the
/// substring after the last `/` (the whole value when no `/` occurs).
pub fn document_id_from_location(location: &str) -> String {
    match location.rfind('/') {
        Some(idx) => location[idx + 1..].to_string(),
        None => location.to_string(),
    }
}

/// Merge `Set-Cookie` header values into the caller's cookie jar,
/// overwriting same-named entries. Unparseable values are skipped.
pub(crate) fn harvest_cookies<'a, I>(set_cookie_values: I, settings: &mut ConnectionSettings)
where
    I: IntoIterator<Item = &'a str>,
{
    for raw in set_cookie_values {
        if let Ok(parsed) = cookie::Cookie::parse(raw.to_owned()) {
            settings.cookies.insert(parsed.name(), parsed.value());
        }
    }
}

/// Append the `apiKey` query parameter when a key is configured. The key is
/// taken as already query-string safe.
pub(crate) fn request_path(path: &str, api_key: Option<&str>) -> String {
    match api_key {
        Some(key) => format!("{path}?apiKey={key}"),
        None => path.to_string(),
    }
}

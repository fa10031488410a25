use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{CLIENT_NAME, CLIENT_VERSION};

/// An open, string-keyed conversion configuration.
///
/// The service accepts an arbitrary JSON object (document content,
/// rendering options, style sheets, ...); the client does not validate its
/// schema. Before transmission a copy is stamped with the two client
/// identity keys `clientName` and `clientVersion` — the caller's value is
/// never mutated, but callers must not rely on those keys being absent on
/// the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Map<String, Value>);

impl Configuration {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stamp the client identity fields, overwriting existing values.
    pub fn stamp_client_identity(&mut self) {
        self.0
            .insert("clientName".to_string(), Value::from(CLIENT_NAME));
        self.0
            .insert("clientVersion".to_string(), Value::from(CLIENT_VERSION));
    }

    /// A copy with the client identity stamped, ready for serialization.
    pub(crate) fn stamped(&self) -> Configuration {
        let mut copy = self.clone();
        copy.stamp_client_identity();
        copy
    }
}

impl From<Map<String, Value>> for Configuration {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Configuration> for Value {
    fn from(config: Configuration) -> Self {
        Value::Object(config.0)
    }
}

/// Progress of an asynchronous conversion job.
///
/// `finished` is the only field the client interprets; everything else the
/// service reports (progress percentage, log entries, ...) is kept in
/// `extra`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Progress {
    pub finished: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamping_sets_both_identity_keys() {
        let mut config = Configuration::new().with("document", "<html/>");
        config.stamp_client_identity();
        assert_eq!(config.get("clientName"), Some(&Value::from(CLIENT_NAME)));
        assert_eq!(config.get("clientVersion"), Some(&Value::from(8)));
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn stamping_twice_is_idempotent() {
        let mut config = Configuration::new().with("clientName", "bogus");
        config.stamp_client_identity();
        config.stamp_client_identity();
        assert_eq!(config.len(), 2);
        assert_eq!(config.get("clientName"), Some(&Value::from(CLIENT_NAME)));
        assert_eq!(config.get("clientVersion"), Some(&Value::from(8)));
    }

    #[test]
    fn stamped_copy_leaves_caller_value_untouched() {
        let config = Configuration::new().with("document", "<html/>");
        let stamped = config.stamped();
        assert!(stamped.contains_key("clientName"));
        assert!(!config.contains_key("clientName"));
    }

    #[test]
    fn progress_keeps_unknown_fields() {
        let progress: Progress =
            serde_json::from_str(r#"{"finished":false,"progress":42}"#).unwrap();
        assert!(!progress.finished);
        assert_eq!(progress.extra.get("progress"), Some(&Value::from(42)));
    }
}

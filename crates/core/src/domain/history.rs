// Employment History Events

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Single entry of the employee history (promotion, transfer, sanction, ...)
///
/// Keys stay lower snake case. Extra keys supplied by the caller are kept
/// verbatim next to the known ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEvent {
    pub date: String,
    pub event_type: String,
    #[serde(default)]
    pub description: String,

    /// Stored as BSON: unsigned integers above `i64::MAX` cannot be written
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl HistoryEvent {
    pub fn new(
        date: impl Into<String>,
        event_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            event_type: event_type.into(),
            description: description.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Attach an additional key to the event
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

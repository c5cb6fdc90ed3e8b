//! JSON rendering for SeerError
//!
//! Keys:
//! - `operation`, `message`: always present
//! - `caller`, `file`, `line`: only when provenance collection was enabled at
//!   construction and something was actually recorded
//! - `previous_error`: the wrapped error's display text, when there is one
//!
//! The wrapped error is flattened to text; its own JSON is not nested.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::types::SeerError;
use crate::provenance::Provenance;

impl SeerError {
    /// JSON object for structured log sinks
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("operation".to_string(), Value::from(self.operation.as_str()));
        object.insert("message".to_string(), Value::from(self.message.as_str()));

        if let Some(provenance) = self.reported_provenance() {
            object.insert("caller".to_string(), Value::from(provenance.caller()));
            object.insert("file".to_string(), Value::from(provenance.file()));
            object.insert("line".to_string(), Value::from(provenance.line()));
        }

        if let Some(original) = &self.original {
            object.insert("previous_error".to_string(), Value::from(original.to_string()));
        }

        Value::Object(object)
    }

    /// Compact JSON text of [`to_json`](Self::to_json)
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    fn reported_provenance(&self) -> Option<&Provenance> {
        self.provenance
            .as_ref()
            .filter(|p| self.report_provenance && !p.is_empty())
    }
}

impl Serialize for SeerError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

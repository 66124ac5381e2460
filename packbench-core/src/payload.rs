// SPDX-License-Identifier: Apache-2.0

//! The payload under benchmark and its loading rules.
//!
//! A payload is an arbitrary JSON-serializable keyed structure. It is
//! immutable once loaded and replaced wholesale on reload or reset.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::HarnessError;

/// The JSON document fed to every codec during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    value: Value,
}

impl Payload {
    /// Wrap an already-parsed JSON value.
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// The empty payload `{}`. Every codec must round-trip it.
    pub fn empty() -> Self {
        Self::new(Value::Object(serde_json::Map::new()))
    }

    /// Load a payload from a local file.
    ///
    /// Files named `*.json` are parsed as JSON; a parse failure is reported
    /// to the caller and the current payload stays untouched (the session
    /// only replaces its payload on `Ok`). Any other file is read as text
    /// and wrapped as `{ "content": <text> }`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| HarnessError::PayloadRead {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            let value =
                serde_json::from_str(&text).map_err(|source| HarnessError::PayloadParse {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(Self::new(value))
        } else {
            Ok(Self::new(serde_json::json!({ "content": text })))
        }
    }

    /// Borrow the underlying JSON value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Canonical JSON text of the payload.
    ///
    /// serde_json's default map backing is a BTreeMap, so keys come out
    /// sorted and the text is stable across round trips that lose the
    /// original key order.
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(&self.value).expect("JSON value serialization cannot fail")
    }

    /// UTF-8 byte length of the canonical JSON text.
    pub fn size_bytes(&self) -> usize {
        self.canonical_json().len()
    }

    /// CRC32 checksum of the canonical JSON text.
    ///
    /// Used by the runner to validate that a codec's decode output is
    /// structurally identical to what went in.
    pub fn checksum(&self) -> u32 {
        crc32fast::hash(self.canonical_json().as_bytes())
    }
}

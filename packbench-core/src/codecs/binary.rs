// SPDX-License-Identifier: Apache-2.0

//! Binary serialization codecs: CBOR via `ciborium`, MessagePack via
//! `rmp-serde`. These serialize the JSON value directly through serde
//! instead of going through canonical JSON text.

use serde_json::Value;

use crate::codec::{Codec, CodecDescriptor};
use crate::error::CodecError;
use crate::payload::Payload;

pub struct Cbor;

impl Codec for Cbor {
    fn descriptor(&self) -> CodecDescriptor {
        CodecDescriptor {
            id: "cbor",
            label: "ciborium (CBOR)",
            reference: Some("https://crates.io/crates/ciborium"),
        }
    }

    fn encode(&self, payload: &Payload) -> Result<Vec<u8>, CodecError> {
        let mut bytes = Vec::new();
        ciborium::ser::into_writer(payload.value(), &mut bytes).map_err(|e| {
            CodecError::Serialize {
                codec: "cbor",
                reason: e.to_string(),
            }
        })?;
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Payload, CodecError> {
        let value: Value =
            ciborium::de::from_reader(bytes).map_err(|e| CodecError::Deserialize {
                codec: "cbor",
                reason: e.to_string(),
            })?;
        Ok(Payload::new(value))
    }
}

pub struct MessagePack;

impl Codec for MessagePack {
    fn descriptor(&self) -> CodecDescriptor {
        CodecDescriptor {
            id: "messagepack",
            label: "rmp-serde (MessagePack)",
            reference: Some("https://crates.io/crates/rmp-serde"),
        }
    }

    fn encode(&self, payload: &Payload) -> Result<Vec<u8>, CodecError> {
        rmp_serde::to_vec(payload.value()).map_err(|e| CodecError::Serialize {
            codec: "messagepack",
            reason: e.to_string(),
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<Payload, CodecError> {
        let value: Value = rmp_serde::from_slice(bytes).map_err(|e| CodecError::Deserialize {
            codec: "messagepack",
            reason: e.to_string(),
        })?;
        Ok(Payload::new(value))
    }
}

// SPDX-License-Identifier: Apache-2.0

//! LZ-String codec backed by `lz-str`, the Rust port of the JavaScript
//! LZ-String library (same bitstream format).

use crate::codec::{Codec, CodecDescriptor};
use crate::error::CodecError;
use crate::payload::Payload;

pub struct LzString;

impl Codec for LzString {
    fn descriptor(&self) -> CodecDescriptor {
        CodecDescriptor {
            id: "lz-string",
            label: "lz-str (LZ-String)",
            reference: Some("https://crates.io/crates/lz-str"),
        }
    }

    fn encode(&self, payload: &Payload) -> Result<Vec<u8>, CodecError> {
        let text = payload.canonical_json();
        Ok(lz_str::compress_to_uint8_array(text.as_str()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Payload, CodecError> {
        let wide =
            lz_str::decompress_from_uint8_array(bytes).ok_or_else(|| CodecError::Decompress {
                codec: "lz-string",
                reason: "corrupt LZ-String stream".to_string(),
            })?;
        let text = String::from_utf16(&wide).map_err(|e| CodecError::Deserialize {
            codec: "lz-string",
            reason: e.to_string(),
        })?;
        let value = serde_json::from_str(&text).map_err(|e| CodecError::Deserialize {
            codec: "lz-string",
            reason: e.to_string(),
        })?;
        Ok(Payload::new(value))
    }
}

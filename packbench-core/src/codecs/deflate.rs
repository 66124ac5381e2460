// SPDX-License-Identifier: Apache-2.0

//! DEFLATE-family codecs: gzip via `flate2`, zlib via `miniz_oxide`.
//!
//! Both compress the payload's canonical JSON text and parse it back after
//! decompression.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::codec::{Codec, CodecDescriptor};
use crate::error::CodecError;
use crate::payload::Payload;

/// Parse decompressed JSON text back into a payload.
fn payload_from_json_bytes(codec: &'static str, bytes: Vec<u8>) -> Result<Payload, CodecError> {
    let text = String::from_utf8(bytes).map_err(|e| CodecError::Deserialize {
        codec,
        reason: e.to_string(),
    })?;
    let value = serde_json::from_str(&text).map_err(|e| CodecError::Deserialize {
        codec,
        reason: e.to_string(),
    })?;
    Ok(Payload::new(value))
}

/// gzip codec backed by `flate2`.
pub struct Gzip;

impl Codec for Gzip {
    fn descriptor(&self) -> CodecDescriptor {
        CodecDescriptor {
            id: "gzip",
            label: "flate2 (gzip)",
            reference: Some("https://crates.io/crates/flate2"),
        }
    }

    fn encode(&self, payload: &Payload) -> Result<Vec<u8>, CodecError> {
        let text = payload.canonical_json();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(text.as_bytes())
            .map_err(|e| CodecError::Compress {
                codec: "gzip",
                reason: e.to_string(),
            })?;
        encoder.finish().map_err(|e| CodecError::Compress {
            codec: "gzip",
            reason: e.to_string(),
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<Payload, CodecError> {
        let mut decoder = GzDecoder::new(bytes);
        let mut text = Vec::new();
        decoder
            .read_to_end(&mut text)
            .map_err(|e| CodecError::Decompress {
                codec: "gzip",
                reason: e.to_string(),
            })?;
        payload_from_json_bytes("gzip", text)
    }
}

/// zlib codec backed by `miniz_oxide`.
pub struct Zlib;

impl Codec for Zlib {
    fn descriptor(&self) -> CodecDescriptor {
        CodecDescriptor {
            id: "zlib",
            label: "miniz_oxide (zlib)",
            reference: Some("https://crates.io/crates/miniz_oxide"),
        }
    }

    fn encode(&self, payload: &Payload) -> Result<Vec<u8>, CodecError> {
        let text = payload.canonical_json();
        Ok(miniz_oxide::deflate::compress_to_vec_zlib(
            text.as_bytes(),
            6,
        ))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Payload, CodecError> {
        let text =
            miniz_oxide::inflate::decompress_to_vec_zlib(bytes).map_err(|e| {
                CodecError::Decompress {
                    codec: "zlib",
                    reason: e.to_string(),
                }
            })?;
        payload_from_json_bytes("zlib", text)
    }
}

// SPDX-License-Identifier: Apache-2.0

//! Codec abstraction and the fixed adapter registry.
//!
//! Each codec wraps one external compression/serialization library behind an
//! "object in, bytes out" contract. The registry is an immutable, ordered
//! sequence declared at startup; benchmark results always come back in
//! registration order.

use crate::codecs;
use crate::error::CodecError;
use crate::payload::Payload;

/// Immutable identity of one codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecDescriptor {
    /// Unique identifier, also used in logs and result rows.
    pub id: &'static str,
    /// Human-readable label for display.
    pub label: &'static str,
    /// Link to the wrapped library's documentation.
    pub reference: Option<&'static str>,
}

/// A stateless adapter over one external library.
///
/// `encode` takes the current payload and produces the library's byte output;
/// `decode` must accept that output and yield a structurally equivalent
/// payload. Codecs do not catch their own errors - propagation to the runner
/// is the contract.
pub trait Codec: Send + Sync {
    /// Identity of this codec.
    fn descriptor(&self) -> CodecDescriptor;

    /// Serialize and/or compress the payload into bytes.
    fn encode(&self, payload: &Payload) -> Result<Vec<u8>, CodecError>;

    /// Reverse `encode`: reconstruct a payload from the byte sequence.
    fn decode(&self, bytes: &[u8]) -> Result<Payload, CodecError>;
}

/// Ordered, immutable set of codecs for one harness instance.
pub struct CodecRegistry {
    codecs: Vec<Box<dyn Codec>>,
}

impl CodecRegistry {
    /// Build a registry from an explicit codec list (test seam).
    pub fn new(codecs: Vec<Box<dyn Codec>>) -> Self {
        Self { codecs }
    }

    /// The built-in registry: gzip, zlib, lz-string, cbor, messagepack.
    ///
    /// Order is fixed and observable - results are reported in this order.
    pub fn builtin() -> Self {
        Self::new(vec![
            Box::new(codecs::deflate::Gzip),
            Box::new(codecs::deflate::Zlib),
            Box::new(codecs::lz::LzString),
            Box::new(codecs::binary::Cbor),
            Box::new(codecs::binary::MessagePack),
        ])
    }

    /// Iterate codecs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Codec> {
        self.codecs.iter().map(|c| c.as_ref())
    }

    /// Look up a codec by its descriptor id.
    pub fn get(&self, id: &str) -> Option<&dyn Codec> {
        self.iter().find(|c| c.descriptor().id == id)
    }

    /// Number of registered codecs.
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

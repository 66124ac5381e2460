// SPDX-License-Identifier: Apache-2.0

//! Custom error types for the benchmark harness.
//!
//! This module defines explicit enum error types as per coding guidelines.
//! No `Box<dyn Error>`, no `anyhow::Result` in the library - all errors are
//! strongly typed.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the benchmark harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    // =========================================================================
    // Payload Errors
    // =========================================================================
    #[error("no payload loaded - load a sample or a file before running")]
    NoPayload,

    #[error("failed to read payload file {path}: {source}")]
    PayloadRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse payload file {path} as JSON: {source}")]
    PayloadParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // =========================================================================
    // Session State Errors
    // =========================================================================
    #[error("invalid state transition: {0}")]
    InvalidStateTransition(#[from] StateTransitionError),

    // =========================================================================
    // Codec Errors
    // =========================================================================
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Session state machine transition errors.
#[derive(Debug, Error)]
pub enum StateTransitionError {
    #[error("cannot transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

/// Errors produced by a single codec's encode or decode path.
///
/// Codecs never catch these themselves - the runner catches them at its
/// boundary and turns the offending codec's row into a zeroed result.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("{codec}: payload serialization failed: {reason}")]
    Serialize { codec: &'static str, reason: String },

    #[error("{codec}: payload deserialization failed: {reason}")]
    Deserialize { codec: &'static str, reason: String },

    #[error("{codec}: compression failed: {reason}")]
    Compress { codec: &'static str, reason: String },

    #[error("{codec}: decompression failed: {reason}")]
    Decompress { codec: &'static str, reason: String },

    #[error("{codec}: round-trip checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    RoundTrip {
        codec: &'static str,
        expected: u32,
        actual: u32,
    },
}

impl CodecError {
    /// Identifier of the codec that produced this error.
    pub fn codec_id(&self) -> &'static str {
        match self {
            Self::Serialize { codec, .. }
            | Self::Deserialize { codec, .. }
            | Self::Compress { codec, .. }
            | Self::Decompress { codec, .. }
            | Self::RoundTrip { codec, .. } => codec,
        }
    }
}

/// Errors that can occur during report file generation.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to access report directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using HarnessError.
pub type HarnessResult<T> = Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_carries_id() {
        let err = CodecError::Decompress {
            codec: "gzip",
            reason: "truncated stream".to_string(),
        };
        assert_eq!(err.codec_id(), "gzip");
        assert!(err.to_string().contains("gzip"));
        assert!(err.to_string().contains("truncated stream"));
    }

    #[test]
    fn test_error_chain() {
        let transition_err = StateTransitionError::InvalidTransition {
            from: "Empty",
            to: "Benchmarking",
        };
        let harness_err: HarnessError = transition_err.into();
        assert!(matches!(
            harness_err,
            HarnessError::InvalidStateTransition(_)
        ));
    }
}

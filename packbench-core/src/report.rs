// SPDX-License-Identifier: Apache-2.0

//! Result records produced by a benchmark run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::CodecDescriptor;
use crate::sizes;

/// Per-codec metrics for one run.
///
/// One of these exists per registered codec, in registration order, whether
/// the codec succeeded or not. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecResult {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Formatted original payload size ("1.0 MB")
    pub original_size: String,
    /// Formatted compressed size ("245.3 KB")
    pub compressed_size: String,
    /// Raw compressed size in KB, kept for the best-score fold
    pub compressed_kb: f64,
    pub encode_ms: f64,
    pub decode_ms: f64,
    pub total_ms: f64,
    /// Original size / compressed size
    pub ratio: f64,
    /// Percentage decrease from original to compressed
    pub reduction_percent: f64,
    /// True when the codec errored and this row is zeroed
    pub failed: bool,
}

impl CodecResult {
    /// Build a fully-populated result from measured values.
    pub fn measured(
        descriptor: CodecDescriptor,
        original_kb: f64,
        compressed_kb: f64,
        encode_ms: f64,
        decode_ms: f64,
    ) -> Self {
        Self {
            id: descriptor.id.to_string(),
            label: descriptor.label.to_string(),
            reference: descriptor.reference.map(str::to_string),
            original_size: sizes::format_kb(original_kb),
            compressed_size: sizes::format_kb(compressed_kb),
            compressed_kb,
            encode_ms,
            decode_ms,
            total_ms: encode_ms + decode_ms,
            ratio: sizes::compression_ratio(original_kb, compressed_kb),
            reduction_percent: sizes::size_reduction_percent(original_kb, compressed_kb),
            failed: false,
        }
    }

    /// All-zero row for a codec whose encode or decode errored.
    pub fn failed(descriptor: CodecDescriptor) -> Self {
        Self {
            id: descriptor.id.to_string(),
            label: descriptor.label.to_string(),
            reference: descriptor.reference.map(str::to_string),
            original_size: "0 KB".to_string(),
            compressed_size: "0 KB".to_string(),
            compressed_kb: 0.0,
            encode_ms: 0.0,
            decode_ms: 0.0,
            total_ms: 0.0,
            ratio: 0.0,
            reduction_percent: 0.0,
            failed: true,
        }
    }
}

/// Best value of each metric across one run's results.
///
/// These are six independent folds - the winner of one column may lose
/// every other. Failed rows are excluded so a zeroed row cannot claim
/// "smallest output" or "fastest codec".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestScores {
    /// Minimum compressed size in KB
    pub compressed_kb: f64,
    /// Minimum encode time
    pub encode_ms: f64,
    /// Minimum decode time
    pub decode_ms: f64,
    /// Minimum total time
    pub total_ms: f64,
    /// Maximum compression ratio
    pub ratio: f64,
    /// Maximum size reduction
    pub reduction_percent: f64,
}

impl BestScores {
    /// Fold over a run's results, seeded so any real result improves on it.
    pub fn fold(results: &[CodecResult]) -> Self {
        let mut best = Self {
            compressed_kb: f64::INFINITY,
            encode_ms: f64::INFINITY,
            decode_ms: f64::INFINITY,
            total_ms: f64::INFINITY,
            ratio: 0.0,
            reduction_percent: 0.0,
        };

        for result in results.iter().filter(|r| !r.failed) {
            best.compressed_kb = best.compressed_kb.min(result.compressed_kb);
            best.encode_ms = best.encode_ms.min(result.encode_ms);
            best.decode_ms = best.decode_ms.min(result.decode_ms);
            best.total_ms = best.total_ms.min(result.total_ms);
            best.ratio = best.ratio.max(result.ratio);
            best.reduction_percent = best.reduction_percent.max(result.reduction_percent);
        }

        best
    }
}

/// Complete output of one benchmark run.
///
/// Replaces any prior run's report wholesale; results are never mixed
/// across payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// When the run started
    pub timestamp: DateTime<Utc>,
    /// Original payload size in bytes
    pub payload_bytes: usize,
    /// One result per registered codec, in registration order
    pub results: Vec<CodecResult>,
    /// Per-metric winners
    pub best: BestScores,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(id: &'static str) -> CodecDescriptor {
        CodecDescriptor {
            id,
            label: id,
            reference: None,
        }
    }

    #[test]
    fn test_measured_result_derives_metrics() {
        let result = CodecResult::measured(descriptor("a"), 100.0, 25.0, 2.0, 3.0);
        assert_eq!(result.total_ms, 5.0);
        assert!((result.ratio - 4.0).abs() < f64::EPSILON);
        assert!((result.reduction_percent - 75.0).abs() < f64::EPSILON);
        assert_eq!(result.compressed_size, "25.0 KB");
        assert!(!result.failed);
    }

    #[test]
    fn test_failed_result_is_zeroed() {
        let result = CodecResult::failed(descriptor("a"));
        assert_eq!(result.compressed_kb, 0.0);
        assert_eq!(result.encode_ms, 0.0);
        assert_eq!(result.ratio, 0.0);
        assert_eq!(result.original_size, "0 KB");
        assert_eq!(result.compressed_size, "0 KB");
        assert!(result.failed);
    }

    #[test]
    fn test_fold_tracks_independent_winners() {
        // "a" has the smaller output, "b" is faster - different winners
        let results = vec![
            CodecResult::measured(descriptor("a"), 100.0, 20.0, 8.0, 8.0),
            CodecResult::measured(descriptor("b"), 100.0, 50.0, 1.0, 1.0),
        ];
        let best = BestScores::fold(&results);
        assert_eq!(best.compressed_kb, 20.0);
        assert_eq!(best.encode_ms, 1.0);
        assert_eq!(best.total_ms, 2.0);
        assert!((best.ratio - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fold_skips_failed_rows() {
        let results = vec![
            CodecResult::measured(descriptor("a"), 100.0, 40.0, 2.0, 2.0),
            CodecResult::failed(descriptor("b")),
        ];
        let best = BestScores::fold(&results);
        assert_eq!(best.compressed_kb, 40.0);
        assert_eq!(best.encode_ms, 2.0);
    }

    #[test]
    fn test_fold_over_empty_keeps_seeds() {
        let best = BestScores::fold(&[]);
        assert!(best.compressed_kb.is_infinite());
        assert_eq!(best.ratio, 0.0);
    }
}

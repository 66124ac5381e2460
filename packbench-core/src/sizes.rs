// SPDX-License-Identifier: Apache-2.0

//! Size and ratio arithmetic shared by the runner and the presentation layer.
//!
//! All functions are pure. Sizes flow through the system in kibibytes
//! (bytes / 1024) because that is the unit the result table displays.

/// Convert a raw byte count to kibibytes.
pub fn bytes_to_kb(bytes: usize) -> f64 {
    bytes as f64 / 1024.0
}

/// Format a size expressed in kibibytes as a human-readable string.
///
/// Below 1024 KB the value is shown in KB, otherwise in MB, always with
/// exactly one decimal digit.
pub fn format_kb(kb: f64) -> String {
    if kb < 1024.0 {
        format!("{:.1} KB", kb)
    } else {
        format!("{:.1} MB", kb / 1024.0)
    }
}

/// Compression ratio: original size divided by compressed size.
///
/// Returns `0.0` when the compressed size is exactly zero. A zero compressed
/// size only occurs for failed codec rows, and those must not divide by zero.
pub fn compression_ratio(original_kb: f64, compressed_kb: f64) -> f64 {
    if compressed_kb == 0.0 {
        return 0.0;
    }
    original_kb / compressed_kb
}

/// Percentage decrease from original to compressed size.
///
/// Negative when the compressed output is larger than the input, which is
/// legitimate for tiny payloads (container overhead).
pub fn size_reduction_percent(original_kb: f64, compressed_kb: f64) -> f64 {
    if original_kb == 0.0 {
        return 0.0;
    }
    (1.0 - compressed_kb / original_kb) * 100.0
}

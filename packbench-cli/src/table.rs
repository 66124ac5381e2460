// SPDX-License-Identifier: Apache-2.0

//! Plain-text rendering of a run report.
//!
//! One row per codec in registration order; the best value in each metric
//! column is marked with `*`. Different codecs routinely win different
//! columns.

use packbench_core::{BestScores, CodecResult, RunReport};

/// Format a metric cell to one decimal, marking the column winner.
fn cell(value: f64, best: f64, failed: bool) -> String {
    if !failed && value == best {
        format!("{:.1}*", value)
    } else {
        format!("{:.1}", value)
    }
}

fn row(result: &CodecResult, best: &BestScores) -> String {
    let compressed = if !result.failed && result.compressed_kb == best.compressed_kb {
        format!("{}*", result.compressed_size)
    } else {
        result.compressed_size.clone()
    };

    format!(
        "| {:<24} | {:>10} | {:>11} | {:>10} | {:>10} | {:>9} | {:>7} | {:>8} |",
        result.label,
        result.original_size,
        compressed,
        cell(result.encode_ms, best.encode_ms, result.failed),
        cell(result.decode_ms, best.decode_ms, result.failed),
        cell(result.total_ms, best.total_ms, result.failed),
        cell(result.ratio, best.ratio, result.failed),
        cell(result.reduction_percent, best.reduction_percent, result.failed),
    )
}

/// Print the full results table followed by failure notes.
pub fn print_report(report: &RunReport) {
    println!(
        "| {:<24} | {:>10} | {:>11} | {:>10} | {:>10} | {:>9} | {:>7} | {:>8} |",
        "Codec", "Original", "Compressed", "Encode ms", "Decode ms", "Total ms", "Ratio", "Saved %"
    );
    println!(
        "|{:-<26}|{:-<12}|{:-<13}|{:-<12}|{:-<12}|{:-<11}|{:-<9}|{:-<10}|",
        "", "", "", "", "", "", "", ""
    );

    for result in &report.results {
        println!("{}", row(result, &report.best));
    }

    let failures: Vec<&str> = report
        .results
        .iter()
        .filter(|r| r.failed)
        .map(|r| r.id.as_str())
        .collect();
    if !failures.is_empty() {
        println!();
        println!("Failed codecs (zeroed rows): {}", failures.join(", "));
    }
}

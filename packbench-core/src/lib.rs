// SPDX-License-Identifier: Apache-2.0

//! Packbench Core Library
//!
//! Core library for the packbench comparative benchmark harness.
//! Loads a JSON payload, runs it through a fixed set of
//! compression/serialization codecs, and collects per-codec size and
//! timing metrics plus a best-of-each-metric summary.

pub mod codec;
pub mod codecs;
pub mod error;
pub mod payload;
pub mod report;
pub mod reporter;
pub mod runner;
pub mod sample;
pub mod session;
pub mod sizes;
pub mod timing;

// Re-export commonly used types
pub use codec::{Codec, CodecDescriptor, CodecRegistry};
pub use error::{CodecError, HarnessError, HarnessResult, ReportError, StateTransitionError};
pub use payload::Payload;
pub use report::{BestScores, CodecResult, RunReport};
pub use reporter::JsonReporter;
pub use runner::BenchRunner;
pub use session::{BenchSession, SessionState};
